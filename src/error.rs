use std::error::Error;
use std::fmt;
use std::io;

/// Errors raised around the converter: loading settings, parsing host
/// messages, and writing to the outlet.
#[derive(Debug)]
pub enum BpmError {
    /// Settings could not be loaded or read
    Config(config::ConfigError),
    /// A setting was loaded but lies outside its valid range
    InvalidSetting { name: &'static str, value: f64 },
    /// A host message could not be parsed
    Parse(String),
    /// The outlet refused a value
    Outlet(String),
    /// The interactive prompt failed
    Prompt(dialoguer::Error),
    /// Terminal or file I/O failed
    Io(io::Error),
}

impl fmt::Display for BpmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BpmError::Config(e) => write!(f, "configuration error: {}", e),
            BpmError::InvalidSetting { name, value } => {
                write!(f, "invalid value for {}: {}", name, value)
            }
            BpmError::Parse(msg) => write!(f, "parse error: {}", msg),
            BpmError::Outlet(msg) => write!(f, "outlet error: {}", msg),
            BpmError::Prompt(e) => write!(f, "prompt error: {}", e),
            BpmError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for BpmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BpmError::Config(e) => Some(e),
            BpmError::Prompt(e) => Some(e),
            BpmError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for BpmError {
    fn from(e: config::ConfigError) -> Self {
        BpmError::Config(e)
    }
}

impl From<dialoguer::Error> for BpmError {
    fn from(e: dialoguer::Error) -> Self {
        BpmError::Prompt(e)
    }
}

impl From<io::Error> for BpmError {
    fn from(e: io::Error) -> Self {
        BpmError::Io(e)
    }
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, BpmError>;
