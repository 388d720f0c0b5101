use std::io;
use std::thread::{self, JoinHandle};

/// Runs host-side work (input readers, prompts) off the event-loop thread
pub trait Scheduler {
    fn spawn<F>(&self, name: &str, f: F) -> io::Result<JoinHandle<()>>
    where
        F: FnOnce() + Send + 'static;
}

pub struct ThreadScheduler;

impl ThreadScheduler {
    pub fn new() -> Self {
        ThreadScheduler
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ThreadScheduler {
    fn spawn<F>(&self, name: &str, f: F) -> io::Result<JoinHandle<()>>
    where
        F: FnOnce() + Send + 'static,
    {
        log::debug!("Spawning thread '{}'", name);
        thread::Builder::new().name(name.to_string()).spawn(f)
    }
}
