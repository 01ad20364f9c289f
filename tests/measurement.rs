use approx::assert_relative_eq;
use gainscope::data::cursors::{Axis, CursorStateMachine};
use gainscope::data::measurement::{Frequency, Measurement, MeasurementBoard};

fn pair_of(axis: Axis, a: f64, b: f64) -> CursorStateMachine {
    let mut sm = CursorStateMachine::new();
    sm.press(axis, a, 1e-9);
    sm.press(axis, b, 1e-9);
    sm
}

#[test]
fn time_delta_and_frequency() {
    let sm = pair_of(Axis::Time, 1.0, 1.25);
    let m = Measurement::from_pair(Axis::Time, sm.pair(Axis::Time), 0, "Channel 1").unwrap();
    assert_relative_eq!(m.delta, 0.25);
    assert_relative_eq!(m.frequency.unwrap().hz().unwrap(), 4.0);
    assert_eq!(m.label(), "ΔTime = 0.2500 s\nFreq = 4.00 Hz\n(Channel 1)");
}

#[test]
fn delta_is_absolute() {
    let sm = pair_of(Axis::Time, 3.0, 1.0);
    let m = Measurement::from_pair(Axis::Time, sm.pair(Axis::Time), 0, "c").unwrap();
    assert_relative_eq!(m.delta, 2.0);
}

#[test]
fn coincident_cursors_report_infinite_frequency() {
    let mut sm = CursorStateMachine::new();
    // span 0 disables grabbing, so the second press lands on the same value
    sm.press(Axis::Time, 2.0, 0.0);
    sm.press(Axis::Time, 2.0, 0.0);
    let m = Measurement::from_pair(Axis::Time, sm.pair(Axis::Time), 1, "Channel 2").unwrap();
    assert_eq!(m.delta, 0.0);
    assert_eq!(m.frequency, Some(Frequency::Infinite));
    assert_eq!(m.label(), "ΔTime = 0.0000 s\nFreq = ∞\n(Channel 2)");
}

#[test]
fn amplitude_delta_has_no_frequency() {
    let sm = pair_of(Axis::Amplitude, 0.2, -0.3);
    let m = Measurement::from_pair(Axis::Amplitude, sm.pair(Axis::Amplitude), 0, "Channel 1")
        .unwrap();
    assert_relative_eq!(m.delta, 0.5);
    assert_eq!(m.frequency, None);
    assert_eq!(m.label(), "ΔAmp = 0.5000 V\n(Channel 1)");
}

#[test]
fn incomplete_pair_has_no_measurement() {
    let mut sm = CursorStateMachine::new();
    sm.press(Axis::Time, 1.0, 10.0);
    assert!(Measurement::from_pair(Axis::Time, sm.pair(Axis::Time), 0, "c").is_none());
}

#[test]
fn board_shows_the_most_recent_axis() {
    let v = pair_of(Axis::Time, 1.0, 2.0);
    let h = pair_of(Axis::Amplitude, 0.0, 1.0);
    let mut board = MeasurementBoard::default();

    board.update(Axis::Time, v.pair(Axis::Time), 0, "c");
    assert!(board.is_visible(Axis::Time));

    board.update(Axis::Amplitude, h.pair(Axis::Amplitude), 0, "c");
    assert!(board.is_visible(Axis::Amplitude));
    assert!(!board.is_visible(Axis::Time));
    assert_eq!(board.shown().unwrap().axis, Axis::Amplitude);

    board.update(Axis::Time, v.pair(Axis::Time), 0, "c");
    assert_eq!(board.shown().unwrap().axis, Axis::Time);
}

#[test]
fn hiding_the_shown_axis_leaves_nothing_on_display() {
    let v = pair_of(Axis::Time, 1.0, 2.0);
    let mut board = MeasurementBoard::default();
    board.update(Axis::Time, v.pair(Axis::Time), 0, "c");
    board.hide(Axis::Time);
    assert!(board.shown().is_none());
    assert!(board.get(Axis::Time).is_none());
}
