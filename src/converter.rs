//! Beat value, step count and tempo to milliseconds.
//!
//! Milliseconds = (beat fraction * steps * 240000) / tempo, where 240000 is
//! the length of a whole note at 1 BPM in ms (60000 ms per beat, 4 beats).

use crate::error::{BpmError, Result};
use crate::message::{Inlet, InletMessage, Value};
use crate::note_value::BeatValue;
use log::{debug, warn};

/// Milliseconds spanned by a whole note at a tempo of 1 BPM
pub const WHOLE_NOTE_MS_AT_1_BPM: f64 = 240_000.0;

pub const DEFAULT_BEAT_FRACTION: f64 = 0.25;
pub const DEFAULT_STEPS: f64 = 1.0;
pub const DEFAULT_TEMPO: f64 = 120.0;

/// The three values the duration is computed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConverterState {
    pub beat_fraction: f64,
    pub steps: f64,
    pub tempo_bpm: f64,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self {
            beat_fraction: DEFAULT_BEAT_FRACTION,
            steps: DEFAULT_STEPS,
            tempo_bpm: DEFAULT_TEMPO,
        }
    }
}

impl ConverterState {
    /// Builds a state from externally supplied values, rejecting anything
    /// the setters would never accept.
    pub fn new(beat_fraction: f64, steps: f64, tempo_bpm: f64) -> Result<Self> {
        if !(beat_fraction > 0.0 && beat_fraction <= 1.0) {
            return Err(BpmError::InvalidSetting {
                name: "beat_fraction",
                value: beat_fraction,
            });
        }
        if !(steps > 0.0) {
            return Err(BpmError::InvalidSetting {
                name: "steps",
                value: steps,
            });
        }
        if !(tempo_bpm > 0.0) {
            return Err(BpmError::InvalidSetting {
                name: "tempo",
                value: tempo_bpm,
            });
        }
        Ok(Self {
            beat_fraction,
            steps,
            tempo_bpm,
        })
    }

    pub fn milliseconds(&self) -> f64 {
        calculate_ms(self.beat_fraction, self.steps, self.tempo_bpm)
    }
}

/// The conversion itself. Tempo is not checked here; every path into
/// `ConverterState` already guarantees it is positive.
pub fn calculate_ms(beat_fraction: f64, steps: f64, tempo_bpm: f64) -> f64 {
    (beat_fraction * steps * WHOLE_NOTE_MS_AT_1_BPM) / tempo_bpm
}

/// Holds the converter state and applies tagged input to it.
///
/// Every accepted input recomputes the duration over the whole state and
/// returns it; rejected input returns `None` and leaves the state alone.
#[derive(Debug, Clone, Default)]
pub struct BeatTimeConverter {
    state: ConverterState,
}

impl BeatTimeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ConverterState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> ConverterState {
        self.state
    }

    /// Current duration in ms, without touching the state
    pub fn milliseconds(&self) -> f64 {
        self.state.milliseconds()
    }

    /// Selects Q/E/S/T by code 1-4. Other codes are ignored.
    pub fn set_beat_subdivision_by_code(&mut self, code: i64) -> Option<f64> {
        let beat = BeatValue::try_from(code).ok()?;
        self.state.beat_fraction = beat.fraction();
        debug!("Beat value set to {} ({})", beat.name(), beat.fraction());
        Some(self.milliseconds())
    }

    /// Sets a custom beat value as a fraction of a whole note (a triplet
    /// quarter is 1/6, a dotted eighth 3/16).
    ///
    /// Non-positive values are ignored. Values above a whole note leave the
    /// beat value as it was but still produce a duration.
    pub fn set_beat_subdivision_by_fraction(&mut self, value: f64) -> Option<f64> {
        if !(value > 0.0) {
            return None;
        }
        if value <= 1.0 {
            self.state.beat_fraction = value;
            debug!("Beat value set to fraction {}", value);
        } else {
            debug!(
                "Beat fraction {} exceeds a whole note, keeping {}",
                value, self.state.beat_fraction
            );
        }
        Some(self.milliseconds())
    }

    pub fn set_steps(&mut self, value: f64) -> Option<f64> {
        if !(value > 0.0) {
            return None;
        }
        self.state.steps = value;
        debug!("Steps set to {}", value);
        Some(self.milliseconds())
    }

    pub fn set_tempo(&mut self, value: f64) -> Option<f64> {
        if !(value > 0.0) {
            return None;
        }
        self.state.tempo_bpm = value;
        debug!("Tempo set to {} BPM", value);
        Some(self.milliseconds())
    }

    /// Routes a message to the setter for its inlet
    pub fn handle(&mut self, message: InletMessage) -> Option<f64> {
        let inlet = match Inlet::from_index(message.inlet) {
            Some(inlet) => inlet,
            None => {
                warn!(
                    "Unknown inlet {} (value {}), ignoring",
                    message.inlet, message.value
                );
                return None;
            }
        };

        match (inlet, message.value) {
            (Inlet::Beat, Value::Int(code)) => self.set_beat_subdivision_by_code(code),
            (Inlet::Beat, Value::Float(fraction)) => {
                self.set_beat_subdivision_by_fraction(fraction)
            }
            (Inlet::Tempo, value) => self.set_tempo(value.as_f64()),
            (Inlet::Steps, value) => self.set_steps(value.as_f64()),
        }
    }
}
