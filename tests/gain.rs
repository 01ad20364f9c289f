use gainscope::data::channel::{Channel, ChannelLook};
use gainscope::data::gain::{scale_series, Gain};
use gainscope::ViewerError;

#[test]
fn only_allowed_values_convert() {
    assert_eq!(Gain::try_from(0.5), Ok(Gain::Half));
    assert_eq!(Gain::try_from(10.0), Ok(Gain::Ten));
    assert_eq!(Gain::try_from(3.0), Err(ViewerError::InvalidGain(3.0)));
    assert_eq!(Gain::try_from(-1.0), Err(ViewerError::InvalidGain(-1.0)));
}

#[test]
fn gain_labels() {
    let labels: Vec<String> = Gain::ALL.iter().map(|g| g.to_string()).collect();
    assert_eq!(labels, vec!["0.5x", "1.0x", "2.0x", "5.0x", "10.0x"]);
}

#[test]
fn scaling_keeps_time_and_multiplies_amplitude() {
    let raw = [[0.0, 1.0], [0.5, -0.25], [1.0, 0.0]];
    assert_eq!(
        scale_series(&raw, Gain::Five),
        vec![[0.0, 5.0], [0.5, -1.25], [1.0, 0.0]]
    );
    assert_eq!(scale_series(&raw, Gain::One), raw.to_vec());
}

#[test]
fn legend_includes_gain() {
    let ch = Channel::new("Channel 2", ChannelLook::default(), vec![]).with_gain(Gain::Half);
    assert_eq!(ch.legend_label(), "Channel 2 (Gain = 0.5x)");
}
