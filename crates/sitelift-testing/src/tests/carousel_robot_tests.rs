use crate::recording::{AutoAdvanceProbe, RecordingSurface};
use crate::robot::CarouselRobot;
use crate::robot_assertions::{
    assert_active_range, assert_approx_eq, assert_cursor_in_bounds, assert_indicator,
};
use sitelift_foundation::PointerEventKind;
use sitelift_ui::{CarouselOptions, SlideMetrics, TrackOffset};

const DESKTOP: f32 = 1280.0;
const TABLET: f32 = 800.0;
const PHONE: f32 = 375.0;

#[test]
fn robot_six_slides_on_desktop_pages_by_three() {
    let mut robot = CarouselRobot::launch(6, DESKTOP);

    let snapshot = robot.snapshot();
    assert_eq!(snapshot.cursor, 0);
    assert_active_range(&snapshot, 0..3, "initial render");
    assert_indicator(&snapshot, 2, 0, "initial render");

    robot.click_indicator(1);
    let snapshot = robot.snapshot();
    assert_eq!(snapshot.cursor, 3);
    assert_active_range(&snapshot, 3..6, "after second dot");
    assert_indicator(&snapshot, 2, 1, "after second dot");
    assert_eq!(snapshot.transform, "translateX(-100%)");
}

#[test]
fn robot_indicator_count_follows_viewport() {
    let mut robot = CarouselRobot::launch(7, DESKTOP);
    assert_eq!(robot.snapshot().indicator_count, 3);

    robot.resize(TABLET);
    assert_eq!(robot.snapshot().indicator_count, 4);

    robot.resize(PHONE);
    assert_eq!(robot.snapshot().indicator_count, 7);
}

#[test]
fn robot_next_wraps_to_start_and_previous_wraps_to_end() {
    let mut robot = CarouselRobot::launch(7, DESKTOP);

    robot.click_prev();
    assert_eq!(robot.snapshot().cursor, 4, "previous from 0 jumps to last valid cursor");

    robot.click_next();
    assert_eq!(robot.snapshot().cursor, 0, "next from last valid cursor restarts");
}

#[test]
fn robot_indicator_past_last_full_page_restarts() {
    // Page 2 of 7 slides at 3 visible targets slide 6, beyond the last valid
    // cursor (4); the carousel loops instead of clamping.
    let mut robot = CarouselRobot::launch(7, DESKTOP);
    robot.click_indicator(1);
    assert_eq!(robot.snapshot().cursor, 3);

    robot.click_indicator(2);
    assert_eq!(robot.snapshot().cursor, 0);
}

#[test]
fn robot_active_page_contains_cursor() {
    let mut robot = CarouselRobot::launch(7, DESKTOP);
    robot.controller_mut().go_to(4);
    let snapshot = robot.snapshot();
    assert_active_range(&snapshot, 4..7, "cursor at last valid index");
    assert_indicator(&snapshot, 3, 1, "cursor at last valid index");
}

#[test]
fn robot_go_to_is_idempotent() {
    let mut robot = CarouselRobot::launch(9, TABLET);
    robot.controller_mut().go_to(5);
    let first = robot.snapshot();
    robot.controller_mut().go_to(5);
    let second = robot.snapshot();

    assert_eq!(first.offset, second.offset);
    assert_eq!(first.active_slides, second.active_slides);
    assert_eq!(second.render_count, first.render_count + 1);
}

#[test]
fn robot_drag_threshold() {
    let mut robot = CarouselRobot::launch(7, DESKTOP);

    robot.drag(200.0, 161.0);
    assert_eq!(robot.snapshot().cursor, 0, "39px drag snaps back");

    robot.drag(200.0, 159.0);
    assert_eq!(robot.snapshot().cursor, 1, "41px left drag advances");

    robot.drag(200.0, 241.0);
    assert_eq!(robot.snapshot().cursor, 0, "41px right drag goes back");

    robot.drag(100.0, 141.0);
    assert_eq!(robot.snapshot().cursor, 4, "right drag from 0 wraps to the end");
}

#[test]
fn robot_tap_is_not_a_swipe() {
    let mut robot = CarouselRobot::launch(5, PHONE);
    robot.press(120.0);
    robot.release();
    assert_eq!(robot.snapshot().cursor, 0);
}

#[test]
fn robot_pointer_phases_without_a_press_are_ignored() {
    let mut robot = CarouselRobot::launch(5, PHONE);
    let renders = robot.snapshot().render_count;

    robot.pointer(PointerEventKind::Move, 10.0);
    robot.pointer(PointerEventKind::Up, 10.0);
    robot.cancel();
    assert!(!robot.controller().is_dragging());
    assert_eq!(robot.snapshot().render_count, renders);

    // A release only commits the distance seen by the last move.
    robot.pointer(PointerEventKind::Down, 200.0);
    robot.pointer(PointerEventKind::Move, 150.0);
    robot.pointer(PointerEventKind::Up, 400.0);
    assert_eq!(robot.snapshot().cursor, 1);
}

#[test]
fn robot_drag_previews_track_and_suspends_transitions() {
    let mut robot = CarouselRobot::launch(6, DESKTOP);
    robot.click_next();

    robot.press(300.0);
    assert!(!robot.surface().transitions_enabled());
    robot.move_pointer(250.0);

    let (offset, delta) = *robot.surface().previews().last().expect("preview");
    assert_eq!(delta, -50.0);
    assert_approx_eq(offset.amount(), 100.0 / 3.0, 1e-3, "preview base offset");
    assert!(robot.surface().track_transform().unwrap().contains("+ -50px"));

    robot.release();
    assert!(robot.surface().transitions_enabled());
    assert!(robot.surface().previews().is_empty());
    assert_eq!(robot.snapshot().cursor, 2);
}

#[test]
fn robot_moves_without_press_are_ignored() {
    let mut robot = CarouselRobot::launch(6, DESKTOP);
    let before = robot.snapshot();
    robot.move_pointer(10.0);
    robot.release();
    assert!(robot.surface().previews().is_empty());
    assert_eq!(robot.snapshot(), before);
}

#[test]
fn robot_cancelled_drag_never_commits() {
    let mut robot = CarouselRobot::launch(6, DESKTOP);
    robot.press(400.0);
    robot.move_pointer(100.0);
    robot.cancel();

    assert_eq!(robot.snapshot().cursor, 0);
    assert!(!robot.controller().is_dragging());
    assert!(robot.surface().transitions_enabled());

    let renders = robot.snapshot().render_count;
    robot.release();
    assert_eq!(robot.snapshot().render_count, renders);
}

#[test]
fn robot_resize_across_breakpoint_renders_once() {
    let mut robot = CarouselRobot::launch(7, 1023.0);
    assert_eq!(robot.snapshot().visible_count, 2);
    let renders = robot.snapshot().render_count;

    assert!(robot.resize(1024.0));
    let snapshot = robot.snapshot();
    assert_eq!(snapshot.visible_count, 3);
    assert_eq!(snapshot.render_count, renders + 1);

    assert!(!robot.resize(1200.0), "same bucket does not re-render");
    assert_eq!(robot.snapshot().render_count, renders + 1);
}

#[test]
fn robot_resize_reclamps_cursor() {
    let mut robot = CarouselRobot::launch(7, TABLET);
    robot.controller_mut().go_to(5);
    assert_eq!(robot.snapshot().cursor, 5);

    robot.resize(DESKTOP);
    let snapshot = robot.snapshot();
    assert_cursor_in_bounds(&snapshot, 7, "after widening");
    assert_eq!(snapshot.cursor, 0, "cursor past the new end loops to start");

    robot.controller_mut().go_to(3);
    robot.resize(PHONE);
    assert_eq!(robot.snapshot().cursor, 3, "cursor still valid when narrowing");
}

#[test]
fn robot_resize_abandons_drag() {
    let mut robot = CarouselRobot::launch(6, DESKTOP);
    robot.press(400.0);
    robot.move_pointer(200.0);

    assert!(robot.resize(DESKTOP), "snap back renders even within a bucket");
    assert!(!robot.controller().is_dragging());
    assert_eq!(robot.snapshot().cursor, 0);
    assert!(robot.surface().previews().is_empty());

    robot.release();
    assert_eq!(robot.snapshot().cursor, 0);
}

#[test]
fn robot_few_slides_stay_static() {
    let mut robot = CarouselRobot::launch(2, DESKTOP);
    assert_indicator(&robot.snapshot(), 1, 0, "two slides on desktop");
    assert_active_range(&robot.snapshot(), 0..2, "two slides on desktop");

    robot.click_next();
    assert_eq!(robot.snapshot().cursor, 0);
    robot.click_prev();
    assert_eq!(robot.snapshot().cursor, 0);
    robot.drag(300.0, 0.0);
    assert_eq!(robot.snapshot().cursor, 0);
}

#[test]
fn robot_empty_carousel_is_inert() {
    let robot = CarouselRobot::try_launch(0, RecordingSurface::new(DESKTOP), CarouselOptions::paged());
    assert!(robot.is_none());
}

#[test]
fn robot_cursor_stays_in_bounds_under_mixed_input() {
    for slides in 1..=9usize {
        for &width in &[PHONE, TABLET, DESKTOP] {
            let mut robot = CarouselRobot::launch(slides, width);
            for step in 0..12usize {
                match step % 6 {
                    0 => robot.click_next(),
                    1 => robot.drag(300.0, 200.0),
                    2 => robot.click_indicator(step % 4),
                    3 => {
                        robot.resize([PHONE, TABLET, DESKTOP][step % 3]);
                    }
                    4 => robot.click_prev(),
                    _ => robot.drag(100.0, 180.0),
                }
                let snapshot = robot.snapshot();
                assert_cursor_in_bounds(&snapshot, slides, "mixed input");
                assert_eq!(
                    snapshot.indicator_count,
                    slides.div_ceil(snapshot.visible_count)
                );
                assert_eq!(
                    snapshot.active_indicator,
                    snapshot.cursor / snapshot.visible_count
                );
            }
        }
    }
}

#[test]
fn robot_measured_rail_uses_pixel_pitch() {
    let surface =
        RecordingSurface::new(DESKTOP).with_metrics(SlideMetrics::new(320.0, 24.0));
    let mut robot =
        CarouselRobot::try_launch(8, surface, CarouselOptions::rail()).expect("rail binds");

    robot.click_next();
    robot.click_next();
    assert_eq!(robot.snapshot().offset, TrackOffset::Pixels(688.0));
    assert_eq!(robot.snapshot().transform, "translateX(-688px)");

    let renders = robot.snapshot().render_count;
    assert!(!robot.resize(1300.0), "same bucket and pitch");

    robot.set_slide_metrics(SlideMetrics::new(360.0, 24.0));
    assert!(robot.resize(1400.0), "pitch changed within bucket");
    assert_eq!(robot.snapshot().offset, TrackOffset::Pixels(768.0));
    assert_eq!(robot.snapshot().render_count, renders + 1);
}

#[test]
fn robot_measured_rail_remeasures_after_breakpoint() {
    let surface = RecordingSurface::new(DESKTOP).with_fluid_slides(24.0);
    let mut robot =
        CarouselRobot::try_launch(8, surface, CarouselOptions::rail()).expect("rail binds");
    assert_eq!(robot.surface().published_visible(), Some(3));

    robot.controller_mut().go_to(2);
    let desktop_pitch = (DESKTOP - 2.0 * 24.0) / 3.0 + 24.0;
    assert_approx_eq(
        robot.snapshot().offset.amount(),
        2.0 * f64::from(desktop_pitch),
        1e-3,
        "desktop rail",
    );

    assert!(robot.resize(TABLET));
    let snapshot = robot.snapshot();
    assert_eq!(robot.surface().published_visible(), Some(2));
    assert_eq!(snapshot.cursor, 2);
    // Two slides of (800 - 24) / 2 plus their gaps.
    assert_eq!(snapshot.offset, TrackOffset::Pixels(824.0));
    assert_eq!(snapshot.transform, "translateX(-824px)");

    assert!(!robot.resize(TABLET), "same bucket, same pitch");
}

#[test]
fn robot_auto_advance_gates() {
    let probe = AutoAdvanceProbe::new();
    let controller = sitelift_ui::CarouselController::initialize(
        "probe",
        6,
        CarouselOptions::paged(),
        RecordingSurface::new(DESKTOP),
    )
    .expect("binds")
    .with_auto_advance(Box::new(probe.clone()));
    let mut robot = CarouselRobot::from_controller(controller);

    assert_eq!(probe.starts(), 1);
    assert!(probe.is_running());

    robot.press(200.0);
    assert_eq!(probe.stops(), 1);
    robot.release();
    assert_eq!(probe.starts(), 2);

    robot.controller_mut().set_hovered(true);
    robot.controller_mut().set_document_hidden(true);
    assert_eq!(probe.stops(), 2, "second closed gate does not stop twice");
    robot.controller_mut().set_hovered(false);
    assert!(!probe.is_running());
    robot.controller_mut().set_document_hidden(false);
    assert!(probe.is_running());
    assert_eq!(probe.starts(), 3);
}

#[test]
fn robot_manual_step_restarts_running_auto_advance() {
    let probe = AutoAdvanceProbe::new();
    let controller = sitelift_ui::CarouselController::initialize(
        "probe",
        6,
        CarouselOptions::paged(),
        RecordingSurface::new(DESKTOP),
    )
    .expect("binds")
    .with_auto_advance(Box::new(probe.clone()));
    let mut robot = CarouselRobot::from_controller(controller);

    robot.click_next();
    assert_eq!((probe.starts(), probe.stops()), (2, 1));
}

#[test]
fn robot_rail_waits_for_visibility() {
    let probe = AutoAdvanceProbe::new();
    let controller = sitelift_ui::CarouselController::initialize(
        "why",
        8,
        CarouselOptions::rail(),
        RecordingSurface::new(DESKTOP),
    )
    .expect("binds")
    .with_auto_advance(Box::new(probe.clone()));
    let mut robot = CarouselRobot::from_controller(controller);

    assert_eq!(probe.starts(), 0, "rail is gated until it scrolls into view");
    robot.controller_mut().set_in_view(true);
    assert!(probe.is_running());
    robot.controller_mut().set_in_view(false);
    assert!(!probe.is_running());
}
