//! Host-facing object: three inlets, one outlet.
//!
//! This is the layer a host adapter talks to. It owns a
//! [`BeatTimeConverter`] and an [`Outlet`], turns `int`/`float` messages into
//! tagged input, and emits one value for every message the converter accepts.

use crate::converter::{BeatTimeConverter, ConverterState};
use crate::error::Result;
use crate::message::{Inlet, InletMessage};
use crate::outlet::Outlet;
use log::{debug, info};

pub const INLET_COUNT: usize = Inlet::COUNT;
pub const OUTLET_COUNT: usize = 1;

/// Which side of the object an assist string describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistKind {
    Inlet,
    Outlet,
}

const BEAT_ASSIST: &str = "int (1-4) sets Q/E/S/T beat value, float (0-1) sets custom beat value";
const TEMPO_ASSIST: &str = "int/float sets tempo";
const STEPS_ASSIST: &str = "int/float sets number of steps";
const OUTLET_ASSIST: &str = "Output (ms)";

/// Description shown by the host when hovering an inlet or outlet
pub fn assist(kind: AssistKind, index: usize) -> Option<&'static str> {
    match kind {
        AssistKind::Outlet if index < OUTLET_COUNT => Some(OUTLET_ASSIST),
        AssistKind::Outlet => None,
        AssistKind::Inlet => Inlet::from_index(index).map(|inlet| match inlet {
            Inlet::Beat => BEAT_ASSIST,
            Inlet::Tempo => TEMPO_ASSIST,
            Inlet::Steps => STEPS_ASSIST,
        }),
    }
}

pub struct BpmToMs<O: Outlet> {
    converter: BeatTimeConverter,
    outlet: O,
}

impl<O: Outlet> BpmToMs<O> {
    /// New object with the default state (quarter note, 1 step, 120 BPM)
    pub fn create(outlet: O) -> Self {
        Self::with_state(ConverterState::default(), outlet)
    }

    pub fn with_state(state: ConverterState, outlet: O) -> Self {
        info!(
            "Created bpmtoms object: beat={}, steps={}, tempo={}",
            state.beat_fraction, state.steps, state.tempo_bpm
        );
        Self {
            converter: BeatTimeConverter::with_state(state),
            outlet,
        }
    }

    /// Releases the object. Nothing is owned beyond plain values, so this
    /// only hands back the outlet.
    pub fn destroy(self) -> O {
        info!("Destroyed bpmtoms object");
        self.outlet
    }

    pub fn state(&self) -> ConverterState {
        self.converter.state()
    }

    pub fn outlet(&self) -> &O {
        &self.outlet
    }

    pub fn int(&mut self, inlet: usize, value: i64) -> Result<Option<f64>> {
        self.message(InletMessage::int(inlet, value))
    }

    pub fn float(&mut self, inlet: usize, value: f64) -> Result<Option<f64>> {
        self.message(InletMessage::float(inlet, value))
    }

    /// Applies a message and emits the resulting duration, if any. When the
    /// outlet refuses the value the state is rolled back, so a message either
    /// fully completes or changes nothing.
    pub fn message(&mut self, message: InletMessage) -> Result<Option<f64>> {
        let previous = self.converter.state();
        match self.converter.handle(message) {
            Some(ms) => {
                debug!("Inlet {} <- {}: output {} ms", message.inlet, message.value, ms);
                if let Err(e) = self.outlet.emit(ms) {
                    self.converter = BeatTimeConverter::with_state(previous);
                    return Err(e);
                }
                Ok(Some(ms))
            }
            None => {
                debug!("Inlet {} <- {}: ignored", message.inlet, message.value);
                Ok(None)
            }
        }
    }

    /// Emits the current duration again without changing anything
    pub fn bang(&mut self) -> Result<f64> {
        let ms = self.converter.milliseconds();
        self.outlet.emit(ms)?;
        Ok(ms)
    }
}
