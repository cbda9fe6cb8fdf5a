//! End-to-end carousel scenarios through the headless robot.

use sitelift_testing::robot_assertions::{assert_active_range, assert_indicator};
use sitelift_testing::CarouselRobot;

#[test]
fn pricing_cards_follow_arrows_across_breakpoints() {
    let mut robot = CarouselRobot::launch(7, 1280.0);
    assert_indicator(&robot.snapshot(), 3, 0, "desktop");

    robot.click_next();
    robot.click_next();
    assert_active_range(&robot.snapshot(), 2..5, "two steps");

    robot.resize(700.0);
    let snapshot = robot.snapshot();
    assert_eq!(snapshot.visible_count, 2);
    assert_active_range(&snapshot, 2..4, "tablet keeps cursor");
    assert_indicator(&snapshot, 4, 1, "tablet");

    robot.resize(320.0);
    assert_indicator(&robot.snapshot(), 7, 2, "phone");
}

#[test]
fn swipe_left_then_right_returns_home() {
    let mut robot = CarouselRobot::launch(4, 375.0);
    robot.drag(300.0, 100.0);
    assert_eq!(robot.snapshot().cursor, 1);
    robot.drag(100.0, 300.0);
    assert_eq!(robot.snapshot().cursor, 0);
    assert_eq!(robot.snapshot().transform, "translateX(-0%)");
}
