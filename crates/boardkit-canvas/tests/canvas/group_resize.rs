use boardkit_canvas::{
    AspectRatio, BoardItem, FrameItem, ItemStore, Mbr, Modifiers, Point, ResizeType, Selection,
    ShapeItem, TextItem, Transformer,
};

fn group() -> (ItemStore, Selection) {
    let mut store = ItemStore::new();
    store
        .insert(Box::new(ShapeItem::new(1, Mbr::new(0.0, 0.0, 50.0, 50.0))))
        .unwrap();
    store
        .insert(Box::new(ShapeItem::new(2, Mbr::new(150.0, 50.0, 200.0, 100.0))))
        .unwrap();
    let mut selection = Selection::new();
    selection.select([1, 2]);
    (store, selection)
}

fn drag(store: &mut ItemStore, selection: &Selection, resize_type: ResizeType, path: &[Point]) {
    let mut transformer = Transformer::default();
    assert!(transformer.begin(store, selection, resize_type, Modifiers::default()));
    for point in path {
        transformer.update(store, *point);
    }
    transformer.end(store);
}

#[test]
fn test_group_right_edge_scales_members() {
    let (mut store, selection) = group();
    drag(&mut store, &selection, ResizeType::Right, &[Point::new(400.0, 0.0)]);

    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(store.get(2).unwrap().mbr(), Mbr::new(300.0, 50.0, 400.0, 100.0));
    assert_eq!(selection.mbr(&store), Some(Mbr::new(0.0, 0.0, 400.0, 100.0)));
}

#[test]
fn test_group_left_top_corner_keeps_opposite_fixed() {
    let (mut store, selection) = group();
    drag(
        &mut store,
        &selection,
        ResizeType::LeftTop,
        &[Point::new(100.0, 50.0), Point::new(-200.0, -100.0)],
    );

    assert_eq!(selection.mbr(&store), Some(Mbr::new(-200.0, -100.0, 200.0, 100.0)));
    assert_eq!(
        store.get(1).unwrap().mbr(),
        Mbr::new(-200.0, -100.0, -100.0, 0.0)
    );
    assert_eq!(store.get(2).unwrap().mbr(), Mbr::new(100.0, 0.0, 200.0, 100.0));
}

#[test]
fn test_incremental_steps_match_single_step() {
    let (mut stepped, selection) = group();
    drag(
        &mut stepped,
        &selection,
        ResizeType::Bottom,
        &[
            Point::new(0.0, 150.0),
            Point::new(0.0, 50.0),
            Point::new(0.0, 300.0),
        ],
    );

    let (mut direct, selection) = group();
    drag(&mut direct, &selection, ResizeType::Bottom, &[Point::new(0.0, 300.0)]);

    for id in [1, 2] {
        let a = stepped.get(id).unwrap().mbr();
        let b = direct.get(id).unwrap().mbr();
        assert!((a.top() - b.top()).abs() < 1e-9);
        assert!((a.bottom() - b.bottom()).abs() < 1e-9);
    }
}

#[test]
fn test_degenerate_move_is_skipped() {
    let (mut store, selection) = group();
    let mut transformer = Transformer::default();
    transformer.begin(&store, &selection, ResizeType::Right, Modifiers::default());

    // Pointer exactly on the opposite edge would give zero width
    assert_eq!(
        transformer.update(&mut store, Point::new(0.0, 10.0)),
        Some(Mbr::new(0.0, 0.0, 200.0, 100.0))
    );
    transformer.end(&mut store);
    assert_eq!(store.get(2).unwrap().mbr(), Mbr::new(150.0, 50.0, 200.0, 100.0));
}

#[test]
fn test_frame_preset_released_in_group() {
    let mut store = ItemStore::new();
    store
        .insert(Box::new(FrameItem::new(
            1,
            Mbr::new(0.0, 0.0, 160.0, 90.0),
            AspectRatio::Widescreen,
        )))
        .unwrap();
    store
        .insert(Box::new(ShapeItem::new(2, Mbr::new(200.0, 0.0, 240.0, 90.0))))
        .unwrap();
    let mut selection = Selection::new();
    selection.select([1, 2]);

    drag(&mut store, &selection, ResizeType::Bottom, &[Point::new(0.0, 180.0)]);
    assert_eq!(
        store.get(1).unwrap().aspect_ratio(),
        Some(AspectRatio::Custom)
    );
    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 160.0, 180.0));
}

fn shape_and_text() -> (ItemStore, Selection) {
    let mut store = ItemStore::new();
    store
        .insert(Box::new(ShapeItem::new(1, Mbr::new(0.0, 0.0, 100.0, 100.0))))
        .unwrap();
    // 20 characters: 160 x 16
    store
        .insert(Box::new(TextItem::new(2, Point::new(200.0, 0.0), "a".repeat(20))))
        .unwrap();
    let mut selection = Selection::new();
    selection.select([1, 2]);
    (store, selection)
}

#[test]
fn test_text_reflows_while_shapes_scale() {
    let (mut store, selection) = shape_and_text();
    let group = selection.mbr(&store).unwrap();
    assert_eq!(group, Mbr::new(0.0, 0.0, 360.0, 100.0));

    drag(&mut store, &selection, ResizeType::Right, &[Point::new(720.0, 50.0)]);

    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 200.0, 100.0));
    // Wider layout, same glyph size, same relative offset
    let text = store.get(2).unwrap().mbr();
    assert_eq!(text, Mbr::new(400.0, 0.0, 720.0, 16.0));
    let resized = selection.mbr(&store).unwrap();
    assert!(
        ((text.left() - resized.left()) / resized.width() - 200.0 / 360.0).abs() < 1e-9
    );
}

#[test]
fn test_group_recovers_after_text_width_floor() {
    let (mut store, selection) = shape_and_text();
    let mut transformer = Transformer::default();
    transformer.begin(&store, &selection, ResizeType::Right, Modifiers::default());

    // Text target is 4 wide, below one character
    transformer.update(&mut store, Point::new(9.0, 50.0));
    assert_eq!(store.get(2).unwrap().mbr().width(), 8.0);

    transformer.update(&mut store, Point::new(360.0, 50.0));
    transformer.end(&mut store);

    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(store.get(2).unwrap().mbr(), Mbr::new(200.0, 0.0, 360.0, 16.0));
}

#[test]
fn test_single_text_recovers_after_width_floor() {
    let mut store = ItemStore::new();
    store
        .insert(Box::new(TextItem::new(1, Point::new(0.0, 0.0), "a".repeat(20))))
        .unwrap();
    let mut selection = Selection::new();
    selection.select([1]);

    drag(
        &mut store,
        &selection,
        ResizeType::Right,
        &[Point::new(4.0, 8.0), Point::new(100.0, 8.0)],
    );
    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 100.0, 32.0));
}
