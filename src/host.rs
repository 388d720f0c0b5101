//! Command-line stand-in for the dataflow host.
//!
//! Feeds [`HostMessage`]s into the event loop from a line-oriented reader
//! (stdin) or from an interactive prompt. Either runs on its own thread and
//! only talks to the object through the channel.

use crate::error::{BpmError, Result};
use crate::event_loop::HostMessage;
use crate::message::{InletMessage, Value};
use crate::object::{assist, AssistKind, INLET_COUNT, OUTLET_COUNT};
use crate::scheduler::Scheduler;
use crossbeam::channel::Sender;
use dialoguer::{Input, Select};
use log::{info, warn};
use std::io::{self, BufRead};
use std::thread::JoinHandle;

/// Parses one line of host input.
///
/// `<inlet> <value>` sends a number, `bang` re-emits, `dump` logs the state,
/// `quit` stops. Blank lines and `#` comments give `None`.
pub fn parse_line(line: &str) -> Result<Option<HostMessage>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let message = match line {
        "bang" => HostMessage::Bang,
        "dump" => HostMessage::Dump,
        "quit" | "exit" => HostMessage::Quit,
        _ => HostMessage::Inlet(line.parse::<InletMessage>()?),
    };
    Ok(Some(message))
}

/// Reads lines until EOF or `quit`, sending each parsed message. Bad lines
/// are reported on stderr and skipped.
pub fn read_messages<R: BufRead>(reader: R, tx: &Sender<HostMessage>) -> Result<()> {
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(message)) => {
                tx.send(message)
                    .map_err(|_| BpmError::Outlet("event loop has stopped".to_string()))?;
                if message == HostMessage::Quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Skipping line {}: {}", number + 1, e);
                eprintln!("line {}: {}", number + 1, e);
            }
        }
    }
    info!("Input finished");
    Ok(())
}

/// Runs [`read_messages`] on a scheduler thread; the sender is dropped when
/// input ends, which closes the event loop.
pub fn spawn_reader<S, R>(
    scheduler: &S,
    reader: R,
    tx: Sender<HostMessage>,
) -> io::Result<JoinHandle<()>>
where
    S: Scheduler,
    R: BufRead + Send + 'static,
{
    scheduler.spawn("input-reader", move || {
        if let Err(e) = read_messages(reader, &tx) {
            log::error!("Input reader stopped: {}", e);
            eprintln!("{}", e);
        }
    })
}

/// Runs [`run_interactive`] on a scheduler thread
pub fn spawn_interactive<S: Scheduler>(
    scheduler: &S,
    tx: Sender<HostMessage>,
) -> io::Result<JoinHandle<()>> {
    scheduler.spawn("interactive-prompt", move || {
        if let Err(e) = run_interactive(&tx) {
            log::error!("Interactive prompt stopped: {}", e);
            eprintln!("{}", e);
        }
    })
}

/// Lines printed by `--assist`
pub fn assist_lines() -> Vec<String> {
    let inlets = (0..INLET_COUNT).filter_map(|i| {
        assist(AssistKind::Inlet, i).map(|text| format!("inlet {}: {}", i, text))
    });
    let outlets = (0..OUTLET_COUNT).filter_map(|i| {
        assist(AssistKind::Outlet, i).map(|text| format!("outlet {}: {}", i, text))
    });
    inlets.chain(outlets).collect()
}

/// Prompts for an inlet and a value until the user picks quit
pub fn run_interactive(tx: &Sender<HostMessage>) -> Result<()> {
    let mut items: Vec<String> = (0..INLET_COUNT)
        .filter_map(|i| assist(AssistKind::Inlet, i).map(String::from))
        .collect();
    let bang_item = items.len();
    items.push("bang (repeat output)".to_string());
    let quit_item = items.len();
    items.push("quit".to_string());

    loop {
        let choice = Select::new()
            .with_prompt("Inlet")
            .items(&items)
            .default(0)
            .interact()?;

        let message = if choice == quit_item {
            HostMessage::Quit
        } else if choice == bang_item {
            HostMessage::Bang
        } else {
            let text: String = Input::new().with_prompt("Value").interact_text()?;
            match text.parse::<Value>() {
                Ok(value) => HostMessage::Inlet(InletMessage::new(choice, value)),
                Err(e) => {
                    eprintln!("{}", e);
                    continue;
                }
            }
        };

        tx.send(message)
            .map_err(|_| BpmError::Outlet("event loop has stopped".to_string()))?;
        if message == HostMessage::Quit {
            return Ok(());
        }
    }
}
