use boardkit_canvas::{Camera, GestureUpdate, Matrix, Mbr, Point};
use boardkit_core::{BoardEvent, CameraEvent, EventBus, EventFilter};
use boardkit_settings::Config;
use parking_lot::Mutex;
use std::sync::Arc;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_zoom_at_pointer_from_identity() {
    let mut camera = Camera::new();
    camera.set_pointer(Point::new(10.0, 10.0));
    camera.zoom_relative_to_pointer_by(2.0);

    let m = camera.matrix();
    assert_eq!(m.translate_x, -10.0);
    assert_eq!(m.translate_y, -10.0);
    assert_eq!(m.scale_x, 2.0);
    assert_eq!(m.scale_y, 2.0);
}

#[test]
fn test_zoom_clamps_to_limits() {
    let mut camera = Camera::new();
    camera.zoom_relative_to_view_center_by(1000.0);
    assert_eq!(camera.scale(), camera.settings().max_scale);

    camera.zoom_relative_to_view_center_by(1e-9);
    assert_eq!(camera.scale(), camera.settings().min_scale);
}

#[test]
fn test_invalid_zoom_factor_is_ignored() {
    let mut camera = Camera::new();
    camera.zoom_relative_to_point_by(-2.0, 0.0, 0.0);
    camera.zoom_relative_to_point_by(f64::NAN, 0.0, 0.0);
    camera.zoom_relative_to_point_by(0.0, 0.0, 0.0);
    assert_eq!(*camera.matrix(), Matrix::IDENTITY);
}

#[test]
fn test_discrete_levels_step_both_ways() {
    let mut camera = Camera::new();
    assert_eq!(camera.zoom_in(), 1.5);
    assert_eq!(camera.zoom_in(), 2.0);
    assert_eq!(camera.zoom_out(), 1.5);
    assert_eq!(camera.zoom_out(), 1.0);
    assert_eq!(camera.zoom_out(), 0.75);
}

#[test]
fn test_zoom_in_stops_at_top_level() {
    let mut camera = Camera::new();
    camera.zoom_to(10.0);
    assert_eq!(camera.next_level_in(), None);
    assert_eq!(camera.zoom_in(), 10.0);
    assert_eq!(camera.next_level_out(), Some(9.0));
}

#[test]
fn test_off_level_scale_steps_to_neighbours() {
    let mut camera = Camera::new();
    camera.zoom_to(1.2);
    assert_eq!(camera.next_level_in(), Some(1.5));
    assert_eq!(camera.next_level_out(), Some(1.0));
}

#[test]
fn test_wheel_zooms_around_cursor() {
    let mut camera = Camera::new();
    let at = Point::new(300.0, 200.0);
    let before = camera.screen_to_world(at);

    camera.wheel(-120.0, at);
    assert!(camera.scale() > 1.0);
    let after = camera.screen_to_world(at);
    assert!(close(before.x, after.x));
    assert!(close(before.y, after.y));

    camera.wheel(120.0, at);
    assert!(close(camera.scale(), 1.0));
}

#[test]
fn test_view_rectangle_centers_and_pads() {
    let mut camera = Camera::new();
    camera.set_viewport_size(1000.0, 1000.0);
    camera.view_rectangle_with_padding(&Mbr::new(0.0, 0.0, 100.0, 50.0), 25.0);

    // Padded box is 150 x 75, width limits the scale
    assert!(close(camera.scale(), 1000.0 / 150.0));
    let center = camera.world_to_screen(Point::new(50.0, 25.0));
    assert!(close(center.x, 500.0));
    assert!(close(center.y, 500.0));
}

#[test]
fn test_view_rectangle_of_tiny_box_is_clamped() {
    let mut camera = Camera::new();
    camera.view_rectangle(&Mbr::new(0.0, 0.0, 0.001, 0.001));
    assert_eq!(camera.scale(), camera.settings().max_scale);
}

#[test]
fn test_visible_area_follows_matrix() {
    let mut camera = Camera::new();
    camera.set_viewport_size(800.0, 600.0);
    camera.zoom_relative_to_point_by(2.0, 0.0, 0.0);
    camera.translate_by(-100.0, -50.0);
    assert_eq!(camera.mbr(), Mbr::new(100.0, 50.0, 500.0, 350.0));
}

#[test]
fn test_pinch_zooms_around_finger_center() {
    let mut camera = Camera::new();
    camera.touch_start(1, Point::new(100.0, 100.0));
    camera.touch_start(2, Point::new(200.0, 100.0));

    let update = camera.touch_move(2, Point::new(300.0, 100.0));
    match update {
        Some(GestureUpdate::Pinch { factor, center }) => {
            assert!(close(factor, 2.0));
            assert_eq!(center, Point::new(200.0, 100.0));
        }
        other => panic!("expected a pinch, got {:?}", other),
    }
    assert!(close(camera.scale(), 2.0));
    let pinned = camera.world_to_screen(Point::new(200.0, 100.0));
    assert!(close(pinned.x, 200.0));
}

#[test]
fn test_two_finger_pan_moves_view() {
    let mut camera = Camera::new();
    camera.zoom_relative_to_point_by(2.0, 0.0, 0.0);
    camera.touch_start(1, Point::new(100.0, 100.0));
    camera.touch_start(2, Point::new(200.0, 100.0));

    // Distance changes by less than the pinch threshold
    let update = camera.touch_move(1, Point::new(100.0, 130.0));
    assert_eq!(update, Some(GestureUpdate::Pan { dx: 0.0, dy: 30.0 }));
    assert_eq!(camera.matrix().translate_x, 0.0);
    assert_eq!(camera.matrix().translate_y, 30.0);

    camera.touch_end(2);
    assert_eq!(camera.touch_move(1, Point::new(0.0, 0.0)), None);
}

#[test]
fn test_camera_changes_are_published() {
    let bus = EventBus::shared();
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    bus.subscribe(EventFilter::All, move |event| sink.lock().push(event));

    let mut camera = Camera::from_config(&Config::default()).with_event_bus(bus);
    camera.zoom_to(2.0);
    camera.translate_by(5.0, 0.0);

    let events = log.lock();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        events[1],
        BoardEvent::Camera(CameraEvent::Changed { scale, .. }) if scale == 2.0
    ));
}

#[test]
fn test_set_matrix_rejects_zero_scale() {
    let mut camera = Camera::new();
    let zoomed = Matrix::scale(2.0, 2.0);
    camera.set_matrix(zoomed);
    assert_eq!(*camera.matrix(), zoomed);

    // Invertible through the shear, but flat along x
    camera.set_matrix(Matrix {
        translate_x: 0.0,
        translate_y: 0.0,
        scale_x: 0.0,
        scale_y: 1.0,
        shear_x: 1.0,
        shear_y: 1.0,
    });
    assert_eq!(*camera.matrix(), zoomed);

    let mut flat_y = Matrix::IDENTITY;
    flat_y.scale_y = 0.0;
    flat_y.shear_x = 1.0;
    flat_y.shear_y = 1.0;
    camera.set_matrix(flat_y);
    assert_eq!(*camera.matrix(), zoomed);

    let mut broken = zoomed;
    broken.translate_x = f64::NAN;
    camera.set_matrix(broken);
    assert_eq!(*camera.matrix(), zoomed);
}
