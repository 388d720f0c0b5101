// event_loop.rs

use crate::converter::ConverterState;
use crate::error::Result;
use crate::message::InletMessage;
use crate::object::BpmToMs;
use crate::outlet::Outlet;
use crossbeam::channel::Receiver;
use log::{debug, error, info};

/// Messages delivered by the host, one at a time
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostMessage {
    Inlet(InletMessage),
    /// Re-emit the current duration
    Bang,
    /// Log the current state
    Dump,
    Quit,
}

impl From<InletMessage> for HostMessage {
    fn from(msg: InletMessage) -> Self {
        HostMessage::Inlet(msg)
    }
}

pub struct EventLoop<O: Outlet> {
    object: BpmToMs<O>,
    message_rx: Receiver<HostMessage>,
}

impl<O: Outlet> EventLoop<O> {
    pub fn new(object: BpmToMs<O>, message_rx: Receiver<HostMessage>) -> Self {
        EventLoop { object, message_rx }
    }

    /// Processes messages until `Quit` arrives or every sender is gone, then
    /// destroys the object and returns its final state.
    pub fn run(mut self) -> Result<ConverterState> {
        loop {
            // Block until the host delivers the next message.
            let message = match self.message_rx.recv() {
                Ok(message) => message,
                Err(_) => {
                    info!("Message channel closed, leaving event loop");
                    break;
                }
            };

            match message {
                HostMessage::Inlet(msg) => {
                    if let Err(e) = self.object.message(msg) {
                        error!("Failed to emit output: {}", e);
                        return Err(e);
                    }
                }
                HostMessage::Bang => {
                    if let Err(e) = self.object.bang() {
                        error!("Failed to emit output: {}", e);
                        return Err(e);
                    }
                }
                HostMessage::Dump => {
                    let state = self.object.state();
                    info!(
                        "State: beat={}, steps={}, tempo={}, output={} ms",
                        state.beat_fraction,
                        state.steps,
                        state.tempo_bpm,
                        state.milliseconds()
                    );
                }
                HostMessage::Quit => {
                    info!("Quit received, leaving event loop");
                    break;
                }
            }
            debug!("Processed {:?}", message);
        }

        let state = self.object.state();
        self.object.destroy();
        Ok(state)
    }
}
