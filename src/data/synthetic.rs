//! Analytic stand-in waveforms used when channel files are unavailable.

use std::f64::consts::PI;

pub const SAMPLES: usize = 1000;
pub const DURATION_S: f64 = 10.0;

/// Waveform shapes, assigned to channels in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// 1 Hz sine
    Sine,
    /// 0.5 Hz cosine
    Cosine,
    /// 0.25 Hz square
    Square,
}

impl Waveform {
    pub fn for_channel(index: usize) -> Self {
        match index % 3 {
            0 => Waveform::Sine,
            1 => Waveform::Cosine,
            _ => Waveform::Square,
        }
    }

    pub fn frequency_hz(self) -> f64 {
        match self {
            Waveform::Sine => 1.0,
            Waveform::Cosine => 0.5,
            Waveform::Square => 0.25,
        }
    }

    pub fn sample(self, t: f64) -> f64 {
        let phase = 2.0 * PI * self.frequency_hz() * t;
        match self {
            Waveform::Sine => phase.sin(),
            Waveform::Cosine => phase.cos(),
            Waveform::Square => sign(phase.sin()),
        }
    }
}

// f64::signum maps 0.0 to 1.0; a square wave crossing zero should read 0.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Evenly spaced sample times over `[0, DURATION_S]`, both ends included.
pub fn time_axis() -> Vec<f64> {
    let dt = DURATION_S / (SAMPLES - 1) as f64;
    (0..SAMPLES).map(|i| i as f64 * dt).collect()
}

pub fn channel_series(index: usize) -> Vec<[f64; 2]> {
    let shape = Waveform::for_channel(index);
    time_axis().into_iter().map(|t| [t, shape.sample(t)]).collect()
}

/// One synthetic series per channel.
pub fn all_series(count: usize) -> Vec<Vec<[f64; 2]>> {
    (0..count).map(channel_series).collect()
}
