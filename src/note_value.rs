//! Beat values selectable by integer code on the beat inlet.

/// Note value selected by integer code. Codes start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeatValue {
    Quarter = 1,
    Eighth,
    Sixteenth,
    ThirtySecond,
}

impl BeatValue {
    /// All beat values in code order
    pub const ALL: [BeatValue; 4] = [
        BeatValue::Quarter,
        BeatValue::Eighth,
        BeatValue::Sixteenth,
        BeatValue::ThirtySecond,
    ];

    /// Fraction of a whole note this value spans
    pub const fn fraction(self) -> f64 {
        match self {
            BeatValue::Quarter => 0.25,
            BeatValue::Eighth => 0.125,
            BeatValue::Sixteenth => 0.0625,
            BeatValue::ThirtySecond => 0.03125,
        }
    }

    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Short label as shown in the beat inlet's assist text (Q/E/S/T)
    pub const fn name(self) -> &'static str {
        match self {
            BeatValue::Quarter => "Q",
            BeatValue::Eighth => "E",
            BeatValue::Sixteenth => "S",
            BeatValue::ThirtySecond => "T",
        }
    }
}

impl TryFrom<i64> for BeatValue {
    type Error = i64;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(BeatValue::Quarter),
            2 => Ok(BeatValue::Eighth),
            3 => Ok(BeatValue::Sixteenth),
            4 => Ok(BeatValue::ThirtySecond),
            other => Err(other),
        }
    }
}
