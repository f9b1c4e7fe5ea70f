use boardkit_canvas::transformer::{get_resize_type, proportional_resize_mbr};
use boardkit_canvas::{
    BoardItem, Camera, GestureTracker, ItemStore, Mbr, Modifiers, Point, ResizeType, Selection,
    ShapeItem, Transformer,
};
use proptest::prelude::*;

fn relative_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn corner() -> impl Strategy<Value = ResizeType> {
    prop_oneof![
        Just(ResizeType::LeftTop),
        Just(ResizeType::RightTop),
        Just(ResizeType::LeftBottom),
        Just(ResizeType::RightBottom),
    ]
}

#[derive(Debug, Clone)]
enum TouchOp {
    Start(u64, f64, f64),
    Move(u64, f64, f64),
    End(u64),
}

fn touch_op() -> impl Strategy<Value = TouchOp> {
    prop_oneof![
        (0u64..4, -500.0..500.0f64, -500.0..500.0f64).prop_map(|(id, x, y)| TouchOp::Start(id, x, y)),
        (0u64..4, -500.0..500.0f64, -500.0..500.0f64).prop_map(|(id, x, y)| TouchOp::Move(id, x, y)),
        (0u64..4).prop_map(TouchOp::End),
    ]
}

proptest! {
    #[test]
    fn zoom_keeps_world_point_under_pointer(
        start in 0.05..5.0f64,
        factor in 0.1..10.0f64,
        x in 0.0..1200.0f64,
        y in 0.0..800.0f64,
    ) {
        let mut camera = Camera::new();
        camera.zoom_to(start);
        let before = camera.screen_to_world(Point::new(x, y));

        camera.zoom_relative_to_point_by(factor, x, y);
        let after = camera.screen_to_world(Point::new(x, y));

        prop_assert!((before.x - after.x).abs() < 1e-6 * before.x.abs().max(1.0));
        prop_assert!((before.y - after.y).abs() < 1e-6 * before.y.abs().max(1.0));
    }

    #[test]
    fn scale_stays_within_limits(factors in prop::collection::vec(1e-3..1e3f64, 1..20)) {
        let mut camera = Camera::new();
        let (min, max) = (camera.settings().min_scale, camera.settings().max_scale);
        for factor in factors {
            camera.zoom_relative_to_view_center_by(factor);
            prop_assert!(camera.scale() >= min && camera.scale() <= max);
        }
    }

    #[test]
    fn far_points_hit_no_anchor(
        x in -400.0..500.0f64,
        y in -400.0..500.0f64,
        scale in 0.05..10.0f64,
    ) {
        let mbr = Mbr::new(0.0, 0.0, 100.0, 100.0);
        let point = Point::new(x, y);
        let threshold = 5.0 / scale;
        prop_assume!(mbr.nearest_edge_point_to(point).distance_to(&point) > threshold * (1.0 + 1e-9));

        prop_assert_eq!(get_resize_type(point, scale, &mbr, 5.0), None);
    }

    #[test]
    fn corner_resize_keeps_ratio(
        width in 1.0..500.0f64,
        height in 1.0..500.0f64,
        resize_type in corner(),
        px in -1000.0..1000.0f64,
        py in -1000.0..1000.0f64,
    ) {
        let start = Mbr::from_size(0.0, 0.0, width, height);
        let opposite = resize_type.opposite_point(&start);
        let resized = proportional_resize_mbr(resize_type, &start, opposite, Point::new(px, py));
        prop_assume!(!resized.is_degenerate());

        prop_assert!(relative_eq(
            resized.width() / resized.height(),
            width / height
        ));
    }

    #[test]
    fn group_resize_keeps_relative_offsets(
        second_left in 60.0..300.0f64,
        second_width in 1.0..100.0f64,
        new_right in 10.0..2000.0f64,
    ) {
        let mut store = ItemStore::new();
        store.insert(Box::new(ShapeItem::new(1, Mbr::new(0.0, 0.0, 50.0, 50.0)))).unwrap();
        store
            .insert(Box::new(ShapeItem::new(
                2,
                Mbr::from_size(second_left, 20.0, second_width, 10.0),
            )))
            .unwrap();
        let mut selection = Selection::new();
        selection.select([1, 2]);
        let group = selection.mbr(&store).unwrap();
        let ratio_before = (second_left - group.left()) / group.width();

        let mut transformer = Transformer::default();
        transformer.begin(&store, &selection, ResizeType::Right, Modifiers::default());
        transformer.update(&mut store, Point::new(new_right, 0.0));
        transformer.end(&mut store);

        let group = selection.mbr(&store).unwrap();
        let item = store.get(2).unwrap().mbr();
        let ratio_after = (item.left() - group.left()) / group.width();
        prop_assert!((ratio_before - ratio_after).abs() < 1e-9);
    }

    #[test]
    fn pinch_baseline_only_with_two_touches(ops in prop::collection::vec(touch_op(), 0..40)) {
        let mut tracker = GestureTracker::new(5.0);
        for op in ops {
            match op {
                TouchOp::Start(id, x, y) => tracker.touch_start(id, Point::new(x, y)),
                TouchOp::Move(id, x, y) => {
                    tracker.touch_move(id, Point::new(x, y));
                }
                TouchOp::End(id) => tracker.touch_end(id),
            }
            let two = tracker.touch_count() == 2;
            prop_assert_eq!(tracker.previous_distance().is_some(), two);
            prop_assert_eq!(tracker.previous_positions().is_some(), two);
            prop_assert!(tracker.touch_count() <= 2);
        }
    }
}
