use approx::assert_relative_eq;
use gainscope::app::DaqScopeApp;
use gainscope::data::pga::{
    adc_to_volts, format_vdiv, format_voltage, setting, simulate_capture, CAPTURE_SAMPLES,
    PGA_SETTINGS, VREF,
};
use gainscope::ViewerError;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn settings_cover_every_amplifier_gain() {
    let labels: Vec<&str> = PGA_SETTINGS.iter().map(|s| s.label).collect();
    assert_eq!(labels, ["1x", "2x", "4x", "5x", "8x", "10x", "16x", "32x"]);
    for s in PGA_SETTINGS.iter() {
        assert_relative_eq!(s.max_input * s.gain, VREF, max_relative = 0.01);
    }
}

#[test]
fn unknown_label_is_rejected() {
    assert_eq!(
        setting("3x").unwrap_err(),
        ViewerError::UnknownPgaSetting("3x".to_string())
    );
    assert_eq!(setting("16x").unwrap().gain, 16.0);
}

#[test]
fn voltage_formatting_switches_units() {
    assert_eq!(format_voltage(3.3), "3.30 V");
    assert_eq!(format_voltage(0.825), "825 mV");
    assert_eq!(format_vdiv(0.5), "500 mV/div");
    assert_eq!(format_vdiv(0.002), "2 mV/div");
    assert_eq!(format_vdiv(0.0005), "500 µV/div");
    assert_eq!(format_vdiv(2.0), "2 V/div");
}

#[test]
fn info_line_describes_the_setting() {
    assert_eq!(
        PGA_SETTINGS[0].info_line(),
        "Gain: 1x | Max Input: 3.30 V | V/Div: 500 mV/div | Plot Range: 0 – 4.00 V"
    );
    assert_relative_eq!(setting("32x").unwrap().plot_range(), 0.016);
}

#[test]
fn adc_codes_scale_by_gain() {
    assert_relative_eq!(adc_to_volts(1023, 1.0), 3.3);
    assert_relative_eq!(adc_to_volts(1023, 2.0), 1.65);
    assert_relative_eq!(adc_to_volts(0, 4.0), 0.0);
}

#[test]
fn capture_stays_within_simulated_code_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let s = setting("4x").unwrap();
    let samples = simulate_capture(&mut rng, s);
    assert_eq!(samples.len(), CAPTURE_SAMPLES);
    let lo = adc_to_volts(450, s.gain);
    let hi = adc_to_volts(570, s.gain);
    assert!(samples.iter().all(|v| (lo..=hi).contains(v)));
}

#[test]
fn selecting_a_gain_takes_a_new_capture() {
    let mut app = DaqScopeApp::new(StdRng::seed_from_u64(1));
    assert!(app.samples().is_empty());
    app.select("8x").unwrap();
    assert_eq!(app.setting().label, "8x");
    assert_eq!(app.samples().len(), CAPTURE_SAMPLES);
    assert!(app.info().starts_with("Gain: 8x | Max Input: 412 mV"));

    assert!(app.select("7x").is_err());
    assert_eq!(app.setting().label, "8x");
}
