//! Simulated single-channel acquisition through an MCP6S21 programmable-gain amplifier.

use rand::Rng;

use crate::error::ViewerError;

/// Full-scale code of the 10-bit ADC.
pub const ADC_MAX: f64 = 1023.0;
/// ADC reference voltage.
pub const VREF: f64 = 3.3;
/// Vertical divisions shown on the scope screen.
pub const DIVISIONS: f64 = 8.0;
pub const CAPTURE_SAMPLES: usize = 100;
/// Simulated ADC codes are drawn uniformly from this range.
pub const SIM_CODE_RANGE: std::ops::RangeInclusive<u16> = 450..=570;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PgaSetting {
    pub label: &'static str,
    pub gain: f64,
    /// Largest input that stays within the ADC range at this gain, in volts.
    pub max_input: f64,
    pub volts_per_div: f64,
}

impl PgaSetting {
    const fn new(label: &'static str, gain: f64, max_input: f64, volts_per_div: f64) -> Self {
        Self {
            label,
            gain,
            max_input,
            volts_per_div,
        }
    }

    /// Upper end of the plotted voltage range.
    pub fn plot_range(&self) -> f64 {
        self.volts_per_div * DIVISIONS
    }

    pub fn info_line(&self) -> String {
        format!(
            "Gain: {} | Max Input: {} | V/Div: {} | Plot Range: 0 – {}",
            self.label,
            format_voltage(self.max_input),
            format_vdiv(self.volts_per_div),
            format_voltage(self.plot_range())
        )
    }
}

pub static PGA_SETTINGS: [PgaSetting; 8] = [
    PgaSetting::new("1x", 1.0, 3.30, 0.5),
    PgaSetting::new("2x", 2.0, 1.65, 0.25),
    PgaSetting::new("4x", 4.0, 0.825, 0.1),
    PgaSetting::new("5x", 5.0, 0.66, 0.05),
    PgaSetting::new("8x", 8.0, 0.412, 0.02),
    PgaSetting::new("10x", 10.0, 0.33, 0.01),
    PgaSetting::new("16x", 16.0, 0.206, 0.005),
    PgaSetting::new("32x", 32.0, 0.103, 0.002),
];

pub fn setting(label: &str) -> Result<&'static PgaSetting, ViewerError> {
    PGA_SETTINGS
        .iter()
        .find(|s| s.label == label)
        .ok_or_else(|| ViewerError::UnknownPgaSetting(label.to_string()))
}

pub fn format_voltage(value: f64) -> String {
    if value < 1.0 {
        format!("{:.0} mV", value * 1000.0)
    } else {
        format!("{value:.2} V")
    }
}

pub fn format_vdiv(v: f64) -> String {
    if v < 0.001 {
        format!("{:.0} µV/div", v * 1_000_000.0)
    } else if v < 1.0 {
        format!("{:.0} mV/div", v * 1000.0)
    } else {
        format!("{v:.0} V/div")
    }
}

/// Input voltage corresponding to an ADC code read behind the amplifier.
pub fn adc_to_volts(code: u16, gain: f64) -> f64 {
    (f64::from(code) / ADC_MAX) * VREF / gain
}

/// Draw `CAPTURE_SAMPLES` simulated codes and convert them to input voltages.
pub fn simulate_capture<R: Rng + ?Sized>(rng: &mut R, setting: &PgaSetting) -> Vec<f64> {
    (0..CAPTURE_SAMPLES)
        .map(|_| adc_to_volts(rng.gen_range(SIM_CODE_RANGE), setting.gain))
        .collect()
}
