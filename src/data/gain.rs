//! Gain selection and the pure scaling applied to channel amplitudes before display.

use std::fmt;

use crate::error::ViewerError;

/// The discrete gain factors a channel can be displayed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gain {
    Half,
    #[default]
    One,
    Two,
    Five,
    Ten,
}

impl Gain {
    /// Every selectable gain, in ascending order.
    pub const ALL: [Gain; 5] = [Gain::Half, Gain::One, Gain::Two, Gain::Five, Gain::Ten];

    pub fn factor(self) -> f64 {
        match self {
            Gain::Half => 0.5,
            Gain::One => 1.0,
            Gain::Two => 2.0,
            Gain::Five => 5.0,
            Gain::Ten => 10.0,
        }
    }
}

impl TryFrom<f64> for Gain {
    type Error = ViewerError;

    /// Only exact members of the allowed set convert; nothing is clamped.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Gain::ALL
            .into_iter()
            .find(|g| g.factor() == value)
            .ok_or(ViewerError::InvalidGain(value))
    }
}

impl fmt::Display for Gain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the decimal point: "1.0x", "0.5x".
        write!(f, "{:?}x", self.factor())
    }
}

/// Map a raw `[time, amplitude]` series to its displayed form.
pub fn scale_series(raw: &[[f64; 2]], gain: Gain) -> Vec<[f64; 2]> {
    let k = gain.factor();
    raw.iter().map(|p| [p[0], p[1] * k]).collect()
}
