// config.rs

use crate::converter::{ConverterState, DEFAULT_BEAT_FRACTION, DEFAULT_STEPS, DEFAULT_TEMPO};
use crate::error::{BpmError, Result};
use config::{Config, Environment, File};
use log::{debug, LevelFilter};
use std::path::Path;

/// Prefix for environment overrides, e.g. `BPMTOMS_TEMPO=90`
pub const ENV_PREFIX: &str = "BPMTOMS";

/// Initial converter values and logging level.
///
/// Sources, later ones winning: built-in defaults, the config file (if
/// given), environment variables, then command-line overrides applied by the
/// caller through [`Settings::apply_overrides`].
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub beat_fraction: f64,
    pub steps: f64,
    pub tempo: f64,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            beat_fraction: DEFAULT_BEAT_FRACTION,
            steps: DEFAULT_STEPS,
            tempo: DEFAULT_TEMPO,
            log_level: LevelFilter::Debug,
        }
    }
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        Self::load_with_prefix(config_file, ENV_PREFIX)
    }

    pub fn load_with_prefix(config_file: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("beat_fraction", defaults.beat_fraction)?
            .set_default("steps", defaults.steps)?
            .set_default("tempo", defaults.tempo)?
            .set_default("log_level", defaults.log_level.to_string())?;

        if let Some(path) = config_file {
            debug!("Reading settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(Environment::with_prefix(env_prefix))
            .build()?;

        let log_level = config.get_string("log_level")?;
        let log_level = log_level
            .parse::<LevelFilter>()
            .map_err(|_| BpmError::Parse(format!("'{}' is not a log level", log_level)))?;

        let settings = Settings {
            beat_fraction: config.get_float("beat_fraction")?,
            steps: config.get_float("steps")?,
            tempo: config.get_float("tempo")?,
            log_level,
        };
        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Replaces loaded values with the ones given on the command line
    pub fn apply_overrides(
        &mut self,
        beat_fraction: Option<f64>,
        steps: Option<f64>,
        tempo: Option<f64>,
    ) {
        if let Some(beat_fraction) = beat_fraction {
            self.beat_fraction = beat_fraction;
        }
        if let Some(steps) = steps {
            self.steps = steps;
        }
        if let Some(tempo) = tempo {
            self.tempo = tempo;
        }
    }

    /// Validated converter state for a new object
    pub fn initial_state(&self) -> Result<ConverterState> {
        ConverterState::new(self.beat_fraction, self.steps, self.tempo)
    }
}
