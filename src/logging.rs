use log::LevelFilter;
use simplelog::*;
use std::fs::{self, OpenOptions};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static INIT: Once = Once::new();
static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// `~/.local/share/bpmtoms/logs/app.log`
    File,
    /// stderr, filtered further by `RUST_LOG` if set
    Stderr,
}

pub fn log_dir() -> Result<PathBuf, Error> {
    let home = std::env::var("HOME")
        .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))?;

    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("bpmtoms")
        .join("logs"))
}

/// Installs the global logger. Only the first call in a process has any
/// effect; later calls report whether that first one succeeded.
pub fn init_logger(target: LogTarget, level: LevelFilter) -> Result<(), Error> {
    let mut result = Ok(());

    INIT.call_once(|| {
        result = match target {
            LogTarget::File => init_file_logger(level),
            LogTarget::Stderr => init_stderr_logger(level),
        };
        if result.is_ok() {
            LOGGER_INITIALIZED.store(true, Ordering::SeqCst);
        }
    });

    result?;
    if LOGGER_INITIALIZED.load(Ordering::SeqCst) {
        Ok(())
    } else {
        Err(Error::new(ErrorKind::Other, "Logger initialization failed"))
    }
}

fn init_file_logger(level: LevelFilter) -> Result<(), Error> {
    let log_dir = log_dir()?;
    fs::create_dir_all(&log_dir)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("app.log"))?;

    CombinedLogger::init(vec![WriteLogger::new(level, Config::default(), log_file)])
        .map_err(|e| Error::new(ErrorKind::Other, e))
}

fn init_stderr_logger(level: LevelFilter) -> Result<(), Error> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Other, e))
}
