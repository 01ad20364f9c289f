use gainscope::data::cursors::*;

const SPAN: f64 = 10.0;

#[test]
fn first_and_second_click_fill_the_pair() {
    let mut sm = CursorStateMachine::new();
    assert_eq!(
        sm.press(Axis::Time, 1.0, SPAN),
        PressOutcome::Placed {
            cursor: CursorId::V1,
            restarted: false
        }
    );
    assert_eq!(
        sm.press(Axis::Time, 3.0, SPAN),
        PressOutcome::Placed {
            cursor: CursorId::V2,
            restarted: false
        }
    );
    assert_eq!(sm.v_clicks(), vec![1.0, 3.0]);
    assert!(sm.h_clicks().is_empty());
    assert!(sm.pair(Axis::Time).is_complete());
}

#[test]
fn third_click_restarts_the_pair() {
    let mut sm = CursorStateMachine::new();
    sm.press(Axis::Time, 1.0, SPAN);
    sm.press(Axis::Time, 3.0, SPAN);
    let outcome = sm.press(Axis::Time, 6.0, SPAN);
    assert_eq!(
        outcome,
        PressOutcome::Placed {
            cursor: CursorId::V1,
            restarted: true
        }
    );
    assert_eq!(sm.v_clicks(), vec![6.0]);
}

#[test]
fn press_near_existing_cursor_starts_drag_without_click() {
    let mut sm = CursorStateMachine::new();
    sm.press(Axis::Time, 1.0, SPAN);
    sm.press(Axis::Time, 3.0, SPAN);
    // tolerance is 0.02 * 10 = 0.2
    let outcome = sm.press(Axis::Time, 3.1, SPAN);
    assert_eq!(outcome, PressOutcome::DragStarted(CursorId::V2));
    assert_eq!(sm.drag(), DragState::DraggingV2);
    assert_eq!(sm.v_clicks(), vec![1.0, 3.0]);
}

#[test]
fn press_just_outside_tolerance_places_a_cursor() {
    let mut sm = CursorStateMachine::new();
    sm.press(Axis::Time, 1.0, SPAN);
    let outcome = sm.press(Axis::Time, 1.25, SPAN);
    assert_eq!(
        outcome,
        PressOutcome::Placed {
            cursor: CursorId::V2,
            restarted: false
        }
    );
}

#[test]
fn first_cursor_wins_when_both_are_in_range() {
    let mut sm = CursorStateMachine::new();
    sm.press(Axis::Amplitude, 0.0, 100.0);
    // 0.5 is outside 0.02 * 1.0, so this becomes H2 under a narrow span
    sm.press(Axis::Amplitude, 0.5, 1.0);
    let outcome = sm.press(Axis::Amplitude, 0.25, 100.0);
    assert_eq!(outcome, PressOutcome::DragStarted(CursorId::H1));
}

#[test]
fn drag_updates_value_and_clamps_to_range() {
    let mut sm = CursorStateMachine::new();
    sm.press(Axis::Amplitude, 0.2, 2.0);
    sm.press(Axis::Amplitude, -0.3, 2.0);
    sm.press(Axis::Amplitude, -0.31, 2.0);
    assert_eq!(sm.drag(), DragState::DraggingH2);

    assert_eq!(sm.drag_to(0.7, (-1.0, 1.0)), Some(CursorId::H2));
    assert_eq!(sm.h_clicks(), vec![0.2, 0.7]);

    sm.drag_to(5.0, (-1.0, 1.0));
    assert_eq!(sm.h_clicks(), vec![0.2, 1.0]);
    sm.drag_to(-5.0, (-1.0, 1.0));
    assert_eq!(sm.h_clicks(), vec![0.2, -1.0]);
    assert_eq!(sm.h_clicks().len(), 2);
}

#[test]
fn drag_without_grab_is_a_no_op() {
    let mut sm = CursorStateMachine::new();
    sm.press(Axis::Time, 1.0, SPAN);
    assert_eq!(sm.drag_to(4.0, (0.0, 10.0)), None);
    assert_eq!(sm.v_clicks(), vec![1.0]);
}

#[test]
fn release_only_ends_the_drag() {
    let mut sm = CursorStateMachine::new();
    sm.press(Axis::Time, 1.0, SPAN);
    sm.press(Axis::Time, 1.05, SPAN);
    assert_eq!(sm.drag(), DragState::DraggingV1);
    sm.release();
    assert_eq!(sm.drag(), DragState::Idle);
    assert_eq!(sm.v_clicks(), vec![1.0]);
    sm.release();
    assert_eq!(sm.drag(), DragState::Idle);
}

#[test]
fn new_press_ends_a_stale_drag() {
    let mut sm = CursorStateMachine::new();
    sm.press(Axis::Time, 1.0, SPAN);
    sm.press(Axis::Time, 5.0, SPAN);
    sm.press(Axis::Time, 5.0, SPAN);
    assert_eq!(sm.drag(), DragState::DraggingV2);
    // restart the pair without releasing: V2 no longer exists
    sm.press(Axis::Time, 8.0, SPAN);
    assert_eq!(sm.drag(), DragState::Idle);
    assert_eq!(sm.v_clicks(), vec![8.0]);
}

#[test]
fn clear_is_idempotent() {
    let mut sm = CursorStateMachine::new();
    sm.press(Axis::Time, 1.0, SPAN);
    sm.press(Axis::Amplitude, 0.5, SPAN);
    sm.press(Axis::Amplitude, 0.5, SPAN);
    sm.clear();
    assert!(sm.v_clicks().is_empty());
    assert!(sm.h_clicks().is_empty());
    assert_eq!(sm.drag(), DragState::Idle);
    sm.clear();
    assert!(sm.pair(Axis::Time).is_empty());
}

#[test]
fn pairs_never_exceed_two_entries() {
    let mut sm = CursorStateMachine::new();
    let presses = [0.0, 2.0, 4.0, 4.01, 7.0, 9.0, 1.0, 3.0, 3.0, 5.5];
    for (i, p) in presses.iter().enumerate() {
        let axis = if i % 3 == 0 { Axis::Amplitude } else { Axis::Time };
        sm.press(axis, *p, SPAN);
        sm.drag_to(*p + 0.5, (0.0, 10.0));
        if i % 2 == 0 {
            sm.release();
        }
        assert!(sm.v_clicks().len() <= 2);
        assert!(sm.h_clicks().len() <= 2);
        if let Some(target) = sm.drag().target() {
            assert!(sm.position(target).is_some());
        }
    }
}
