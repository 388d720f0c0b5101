//! Outlet implementations
//!
//! The object has a single outlet carrying durations in milliseconds. The
//! [`Outlet`] trait is the seam between the object and whatever receives
//! those values:
//! - [`ChannelOutlet`] forwards values over a crossbeam channel
//! - [`PrintOutlet`] writes one value per line to a writer
//! - [`RecordingOutlet`] keeps every value, for tests and embedding

use crate::error::{BpmError, Result};
use crossbeam::channel::Sender;
use std::io::Write;

/// Receives each duration the object emits
pub trait Outlet: Send {
    fn emit(&mut self, ms: f64) -> Result<()>;
}

pub struct ChannelOutlet {
    tx: Sender<f64>,
}

impl ChannelOutlet {
    pub fn new(tx: Sender<f64>) -> Self {
        Self { tx }
    }
}

impl Outlet for ChannelOutlet {
    fn emit(&mut self, ms: f64) -> Result<()> {
        self.tx
            .send(ms)
            .map_err(|e| BpmError::Outlet(format!("receiver disconnected: {}", e)))
    }
}

pub struct PrintOutlet<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> PrintOutlet<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PrintOutlet<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Outlet for PrintOutlet<W> {
    fn emit(&mut self, ms: f64) -> Result<()> {
        writeln!(self.writer, "{}", ms)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingOutlet {
    values: Vec<f64>,
}

impl RecordingOutlet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

impl Outlet for RecordingOutlet {
    fn emit(&mut self, ms: f64) -> Result<()> {
        self.values.push(ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel;

    #[test]
    fn test_print_outlet_writes_one_line_per_value() {
        let mut outlet = PrintOutlet::new(Vec::new());
        outlet.emit(500.0).unwrap();
        outlet.emit(333.25).unwrap();
        let text = String::from_utf8(outlet.into_inner()).unwrap();
        assert_eq!(text, "500\n333.25\n");
    }

    #[test]
    fn test_channel_outlet_forwards_values() {
        let (tx, rx) = channel::unbounded();
        let mut outlet = ChannelOutlet::new(tx);
        outlet.emit(1000.0).unwrap();
        assert_eq!(rx.try_recv().unwrap(), 1000.0);
    }

    #[test]
    fn test_channel_outlet_fails_without_receiver() {
        let (tx, rx) = channel::unbounded();
        drop(rx);
        let mut outlet = ChannelOutlet::new(tx);
        assert!(matches!(outlet.emit(1.0), Err(BpmError::Outlet(_))));
    }
}
