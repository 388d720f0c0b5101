//! Numeric messages as they arrive from the host, tagged by inlet.

use crate::error::{BpmError, Result};
use std::fmt;
use std::str::FromStr;

/// A number arriving on an inlet. The host keeps ints and floats apart and
/// the beat inlet treats them differently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

impl Value {
    pub fn as_f64(self) -> f64 {
        match self {
            Value::Int(i) => i as f64,
            Value::Float(f) => f,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => write!(f, "{:?}", v),
        }
    }
}

impl FromStr for Value {
    type Err = BpmError;

    /// Integer literals become `Int`, anything else that parses as a number
    /// becomes `Float`, so "1" and "1.0" stay distinct. Integer literals
    /// outside the `i64` range are rejected rather than read as floats.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if is_integer_literal(s) {
            return s
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| BpmError::Parse(format!("integer '{}' is out of range", s)));
        }
        s.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| BpmError::Parse(format!("'{}' is not a number", s)))
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// The three inlets of the object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inlet {
    /// Beat value: int code (1-4) or float fraction of a whole note
    Beat = 0,
    Tempo = 1,
    Steps = 2,
}

impl Inlet {
    pub const COUNT: usize = 3;

    pub const ALL: [Inlet; Inlet::COUNT] = [Inlet::Beat, Inlet::Tempo, Inlet::Steps];

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Inlet::Beat),
            1 => Some(Inlet::Tempo),
            2 => Some(Inlet::Steps),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A value tagged with the index of the inlet it arrived on. The index is
/// kept raw so messages for inlets the object does not have can still be
/// represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletMessage {
    pub inlet: usize,
    pub value: Value,
}

impl InletMessage {
    pub fn new(inlet: usize, value: Value) -> Self {
        Self { inlet, value }
    }

    pub fn int(inlet: usize, value: i64) -> Self {
        Self::new(inlet, Value::Int(value))
    }

    pub fn float(inlet: usize, value: f64) -> Self {
        Self::new(inlet, Value::Float(value))
    }
}

impl FromStr for InletMessage {
    type Err = BpmError;

    /// Parses `"<inlet> <value>"`, e.g. `"0 2"` or `"1 128.5"`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (inlet, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(inlet), Some(value), None) => (inlet, value),
            _ => {
                return Err(BpmError::Parse(format!(
                    "expected '<inlet> <value>', got '{}'",
                    s.trim()
                )))
            }
        };

        let inlet = inlet
            .parse::<usize>()
            .map_err(|_| BpmError::Parse(format!("'{}' is not an inlet index", inlet)))?;
        let value = value.parse::<Value>()?;
        Ok(InletMessage { inlet, value })
    }
}
