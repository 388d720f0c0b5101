use crate::error::{BpmError, Result};
use crate::message::{InletMessage, Value};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Settings file (TOML, JSON, YAML or INI)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial beat value as a fraction of a whole note
    #[arg(long)]
    pub beat: Option<f64>,

    /// Initial number of steps
    #[arg(long)]
    pub steps: Option<f64>,

    /// Initial tempo in BPM
    #[arg(long)]
    pub tempo: Option<f64>,

    /// Send a value to an inlet and print the output (repeatable)
    #[arg(long, num_args = 2, value_names = ["INLET", "VALUE"], allow_negative_numbers = true)]
    pub send: Vec<String>,

    /// Prompt for inlet and value interactively
    #[arg(long, conflicts_with = "send")]
    pub interactive: bool,

    /// Print inlet and outlet descriptions and exit
    #[arg(long)]
    pub assist: bool,

    /// Log to stderr instead of the log file
    #[arg(long)]
    pub log_stderr: bool,
}

impl Args {
    /// The `--send` pairs as messages, in the order given
    pub fn send_messages(&self) -> Result<Vec<InletMessage>> {
        self.send
            .chunks(2)
            .map(|pair| match pair {
                [inlet, value] => {
                    let inlet = inlet.parse::<usize>().map_err(|_| {
                        BpmError::Parse(format!("'{}' is not an inlet index", inlet))
                    })?;
                    Ok(InletMessage::new(inlet, value.parse::<Value>()?))
                }
                _ => Err(BpmError::Parse("--send needs an inlet and a value".to_string())),
            })
            .collect()
    }
}
