pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod event_loop;
pub mod host;
pub mod logging;
pub mod message;
pub mod note_value;
pub mod object;
pub mod outlet;
pub mod scheduler;

pub use cli::Args;
pub use converter::{BeatTimeConverter, ConverterState};
pub use error::{BpmError, Result};
pub use message::{Inlet, InletMessage, Value};
pub use object::BpmToMs;
pub use scheduler::{Scheduler, ThreadScheduler};

pub fn create_scheduler() -> ThreadScheduler {
    ThreadScheduler::new()
}
