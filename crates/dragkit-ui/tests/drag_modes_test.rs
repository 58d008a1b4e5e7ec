//! Full touch sequences against each drag mode.

use dragkit_testing::{fixture_layout, fixture_layout_with, TouchRobot, COMPANION_ID, HANDLE_ID};
use dragkit_ui::{DragState, IntEdgeInsets, IntRect, IntSize, Visibility};

fn handle_at(left: i32, top: i32) -> Option<IntRect> {
    Some(IntRect::new(left, top, 50, 50))
}

#[test]
fn vertical_mode_moves_handle_within_vertical_bounds() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_vertical(true).expect("vertical");
    let mut robot = TouchRobot::new(layout);

    robot.press(25.0, 25.0);
    assert_eq!(robot.layout().captured_child(), Some(HANDLE_ID));

    robot.move_to(25.0, 100.0);
    assert_eq!(robot.handle_frame(), handle_at(0, 75));

    robot.move_to(25.0, 400.0);
    assert_eq!(robot.handle_frame(), handle_at(0, 250));

    robot.move_to(25.0, -50.0);
    assert_eq!(robot.handle_frame(), handle_at(0, 0));

    robot.release();
    assert_eq!(robot.layout().drag_state(), DragState::Idle);
}

#[test]
fn far_off_pointer_samples_pin_the_handle_to_the_bounds() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_vertical(true).expect("vertical");
    let mut robot = TouchRobot::new(layout);

    robot.press(25.0, 25.0);
    robot.move_to(25.0, 100.0);
    assert_eq!(robot.handle_frame(), handle_at(0, 75));

    robot.move_to(25.0, 3.0e9);
    assert_eq!(robot.handle_frame(), handle_at(0, 250));

    robot.move_to(25.0, -3.0e9);
    assert_eq!(robot.handle_frame(), handle_at(0, 0));

    // The locked horizontal axis stays put however far the pointer goes.
    robot.move_to(3.0e9, -3.0e9);
    assert_eq!(robot.handle_frame(), handle_at(0, 0));
    robot.release();
}

#[test]
fn vertical_mode_ignores_horizontal_motion() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_vertical(true).expect("vertical");
    let mut robot = TouchRobot::new(layout);

    robot.drag((25.0, 25.0), (225.0, 125.0), 4);

    assert_eq!(robot.handle_frame(), handle_at(0, 100));
}

#[test]
fn horizontal_mode_moves_handle_within_horizontal_bounds() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_horizontal(true).expect("horizontal");
    let mut robot = TouchRobot::new(layout);

    robot.drag((25.0, 25.0), (525.0, 225.0), 5);

    assert_eq!(robot.handle_frame(), handle_at(250, 0));
}

#[test]
fn both_axes_move_together() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_horizontal(true).expect("horizontal");
    layout.set_vertical(true).expect("vertical");
    let mut robot = TouchRobot::new(layout);

    robot.drag((25.0, 25.0), (125.0, 85.0), 2);

    assert_eq!(robot.handle_frame(), handle_at(100, 60));
}

#[test]
fn padding_sets_the_leading_bounds() {
    let mut layout = fixture_layout_with(
        IntSize::new(300, 300),
        IntEdgeInsets::uniform(20),
        IntRect::new(20, 20, 50, 50),
    )
    .expect("fixture");
    layout.set_horizontal(true).expect("horizontal");
    layout.set_vertical(true).expect("vertical");
    let mut robot = TouchRobot::new(layout);

    robot.press(45.0, 45.0);
    robot.move_to(-100.0, -100.0);
    assert_eq!(robot.handle_frame(), handle_at(20, 20));

    // Trailing bounds only subtract the handle size.
    robot.move_to(600.0, 600.0);
    assert_eq!(robot.handle_frame(), handle_at(250, 250));
    robot.release();
}

#[test]
fn edge_drag_captures_handle_from_empty_space() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_edge_tracking(true).expect("edge");
    let mut robot = TouchRobot::new(layout);

    robot.press(5.0, 200.0);
    assert_eq!(robot.layout().drag_state(), DragState::Idle);

    robot.move_to(15.0, 200.0);
    assert_eq!(robot.layout().drag_state(), DragState::Dragging);
    assert_eq!(robot.layout().captured_child(), Some(HANDLE_ID));
    assert_eq!(robot.handle_frame(), handle_at(0, 0));

    // Travel since the down is applied on the first move after capture.
    robot.move_to(60.0, 200.0);
    assert_eq!(robot.handle_frame(), handle_at(55, 0));

    // Edge mode clamps horizontally and leaves the vertical axis locked.
    robot.move_to(400.0, 260.0);
    assert_eq!(robot.handle_frame(), handle_at(250, 0));

    robot.release();
    assert_eq!(robot.layout().drag_state(), DragState::Idle);
}

#[test]
fn edge_drag_is_ignored_without_edge_mode() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_horizontal(true).expect("horizontal");
    layout.set_edge_tracking(false).expect("edge off");
    let mut robot = TouchRobot::new(layout);

    robot.drag((5.0, 200.0), (200.0, 200.0), 6);

    assert_eq!(robot.handle_frame(), handle_at(0, 0));
    assert_eq!(robot.layout().captured_child(), None);
}

#[test]
fn edge_drag_away_from_the_edge_band_does_nothing() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_edge_tracking(true).expect("edge");
    let mut robot = TouchRobot::new(layout);

    robot.press(150.0, 200.0);
    robot.move_to(250.0, 200.0);

    assert_eq!(robot.layout().drag_state(), DragState::Idle);
    assert_eq!(robot.handle_frame(), handle_at(0, 0));
}

#[test]
fn capture_restricted_mode_drags_handle_horizontally() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_capture_restricted(true).expect("restricted");
    let mut robot = TouchRobot::new(layout);

    robot.drag((25.0, 25.0), (225.0, 225.0), 4);

    assert_eq!(robot.handle_frame(), handle_at(200, 0));
}

#[test]
fn without_modes_children_capture_but_stay_put() {
    let layout = fixture_layout().expect("fixture");
    assert_eq!(layout.companion_visibility(), Some(Visibility::Visible));
    let mut robot = TouchRobot::new(layout);

    robot.press(25.0, 85.0);
    assert_eq!(robot.layout().captured_child(), Some(COMPANION_ID));

    robot.move_to(125.0, 185.0);
    assert_eq!(
        robot.layout().child(COMPANION_ID).map(|c| c.frame),
        Some(IntRect::new(0, 60, 50, 50))
    );
    assert!(!robot.layout().needs_redraw());
    robot.release();
}

#[test]
fn moving_the_handle_requests_a_redraw() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_vertical(true).expect("vertical");
    layout.take_redraw();
    let mut robot = TouchRobot::new(layout);

    robot.press(25.0, 25.0);
    assert!(!robot.layout().needs_redraw());

    robot.move_to(25.0, 35.0);
    assert!(robot.layout_mut().take_redraw());

    // Pinned against the bound: nothing moved, nothing to draw.
    robot.move_to(25.0, 0.0);
    robot.move_to(25.0, -40.0);
    robot.layout_mut().take_redraw();
    robot.move_to(25.0, -80.0);
    assert!(!robot.layout().needs_redraw());
}

#[test]
fn bounds_follow_layout_changes_between_gestures() {
    let mut layout = fixture_layout().expect("fixture");
    layout.set_vertical(true).expect("vertical");
    let mut robot = TouchRobot::new(layout);

    robot.drag((25.0, 25.0), (25.0, 400.0), 3);
    assert_eq!(robot.handle_frame(), handle_at(0, 250));

    robot.layout_mut().set_size(IntSize::new(300, 200));
    robot.press(25.0, 260.0);
    robot.move_to(25.0, 270.0);

    assert_eq!(robot.handle_frame(), handle_at(0, 150));
}
