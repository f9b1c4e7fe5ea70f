use std::sync::Arc;

use boardkit_canvas::{
    BoardItem, CommentItem, ItemStore, Mbr, Modifiers, Point, ResizeType, Selection, ShapeItem,
    StickerItem, TextItem, Transformer,
};
use boardkit_core::{BoardEvent, EventBus, EventFilter, RenderEvent, SelectionEvent};
use boardkit_settings::ResizeSettings;
use parking_lot::Mutex;

fn square_store() -> ItemStore {
    let mut store = ItemStore::new();
    store
        .insert(Box::new(ShapeItem::new(1, Mbr::new(0.0, 0.0, 100.0, 100.0))))
        .unwrap();
    store
}

fn selected(ids: &[u64]) -> Selection {
    let mut selection = Selection::new();
    selection.select(ids.iter().copied());
    selection
}

fn record(bus: &EventBus) -> Arc<Mutex<Vec<BoardEvent>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    bus.subscribe(EventFilter::All, move |event| sink.lock().push(event));
    log
}

#[test]
fn test_right_edge_drag_shrinks() {
    let mut store = square_store();
    let selection = selected(&[1]);
    let mut transformer = Transformer::default();

    assert!(transformer.begin(&store, &selection, ResizeType::Right, Modifiers::default()));
    assert_eq!(
        transformer.session().unwrap().opposite_point(),
        Point::new(0.0, 0.0)
    );
    assert_eq!(
        transformer.update(&mut store, Point::new(50.0, 50.0)),
        Some(Mbr::new(0.0, 0.0, 50.0, 100.0))
    );
    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 50.0, 100.0));
}

#[test]
fn test_right_edge_drag_past_opposite_does_not_invert() {
    let mut store = square_store();
    let selection = selected(&[1]);
    let mut transformer = Transformer::default();

    transformer.begin(&store, &selection, ResizeType::Right, Modifiers::default());
    transformer.update(&mut store, Point::new(-50.0, 50.0));
    transformer.end(&mut store);

    let mbr = store.get(1).unwrap().mbr();
    assert_eq!(mbr, Mbr::new(-50.0, 0.0, 0.0, 100.0));
    assert!(mbr.left() <= mbr.right());
}

#[test]
fn test_anchor_detection_drives_begin() {
    let store = square_store();
    let selection = selected(&[1]);
    let mut transformer = Transformer::default();

    assert_eq!(
        transformer.resize_type_at(&store, &selection, Point::new(102.0, 98.0), 1.0),
        Some(ResizeType::RightBottom)
    );
    assert_eq!(
        transformer.resize_type_at(&store, &selection, Point::new(50.0, 50.0), 1.0),
        None
    );
    // At 0.5x the same 5 px radius covers 10 world units
    assert_eq!(
        transformer.resize_type_at(&store, &selection, Point::new(50.0, -8.0), 0.5),
        Some(ResizeType::Top)
    );
    assert_eq!(
        transformer.begin_at(
            &store,
            &selection,
            Point::new(-3.0, 50.0),
            1.0,
            Modifiers::default()
        ),
        Some(ResizeType::Left)
    );
    assert!(transformer.is_resizing());
}

#[test]
fn test_begin_refused_while_active_or_empty() {
    let store = square_store();
    let mut transformer = Transformer::default();

    assert!(!transformer.begin(&store, &Selection::new(), ResizeType::Top, Modifiers::default()));
    assert!(!transformer.is_resizing());

    let selection = selected(&[1]);
    assert!(transformer.begin(&store, &selection, ResizeType::Top, Modifiers::default()));
    assert!(!transformer.begin(&store, &selection, ResizeType::Left, Modifiers::default()));
    assert_eq!(
        transformer.session().unwrap().resize_type(),
        ResizeType::Top
    );
}

#[test]
fn test_update_and_end_when_idle() {
    let mut store = square_store();
    let mut transformer = Transformer::default();
    assert_eq!(transformer.update(&mut store, Point::new(1.0, 1.0)), None);
    assert_eq!(transformer.end(&mut store), None);
    assert_eq!(transformer.cancel(&mut store), None);
}

#[test]
fn test_aspect_lock_keeps_ratio_on_corner() {
    let mut store = ItemStore::new();
    store
        .insert(Box::new(ShapeItem::new(1, Mbr::new(0.0, 0.0, 200.0, 100.0))))
        .unwrap();
    let selection = selected(&[1]);
    let mut transformer = Transformer::default();

    transformer.begin(&store, &selection, ResizeType::RightBottom, Modifiers::aspect_lock());
    transformer.update(&mut store, Point::new(300.0, 120.0));
    transformer.end(&mut store);
    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 300.0, 150.0));
}

#[test]
fn test_single_text_gets_corner_instead_of_bottom() {
    let mut store = ItemStore::new();
    store
        .insert(Box::new(TextItem::new(1, Point::new(0.0, 0.0), "a".repeat(20))))
        .unwrap();
    let selection = selected(&[1]);
    let transformer = Transformer::default();

    // Text box is 160 x 16
    assert_eq!(
        transformer.resize_type_at(&store, &selection, Point::new(150.0, 17.0), 1.0),
        Some(ResizeType::RightBottom)
    );
    assert_eq!(
        transformer.cursor_at(&store, &selection, Point::new(10.0, -1.0), 1.0),
        Some(ResizeType::LeftTop.cursor())
    );
}

#[test]
fn test_text_right_edge_reflows_width() {
    let mut store = ItemStore::new();
    store
        .insert(Box::new(TextItem::new(1, Point::new(0.0, 0.0), "a".repeat(20))))
        .unwrap();
    let selection = selected(&[1]);
    let mut transformer = Transformer::default();

    transformer.begin(&store, &selection, ResizeType::Right, Modifiers::default());
    transformer.update(&mut store, Point::new(80.0, 5.0));
    transformer.end(&mut store);

    // Same glyph size, two lines
    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 80.0, 32.0));
}

#[test]
fn test_sticker_in_group_moves_on_edge_drag() {
    let mut store = square_store();
    store
        .insert(Box::new(StickerItem::new(2, Mbr::new(150.0, 0.0, 200.0, 50.0))))
        .unwrap();
    let selection = selected(&[1, 2]);
    let mut transformer = Transformer::default();

    transformer.begin(&store, &selection, ResizeType::Right, Modifiers::default());
    transformer.update(&mut store, Point::new(400.0, 10.0));
    transformer.end(&mut store);

    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 200.0, 100.0));
    // Sticker keeps its size and its relative position
    assert_eq!(store.get(2).unwrap().mbr(), Mbr::new(300.0, 0.0, 350.0, 50.0));
}

#[test]
fn test_comment_follows_resized_target() {
    let mut store = square_store();
    store
        .insert(Box::new(CommentItem::new(3, Point::new(50.0, 10.0), Some(1))))
        .unwrap();
    let selection = selected(&[1]);
    let mut transformer = Transformer::default();

    transformer.begin(&store, &selection, ResizeType::Right, Modifiers::default());
    assert_eq!(transformer.session().unwrap().batch(), &[1, 3]);
    // Followers do not count toward the resized box
    assert_eq!(
        transformer.session().unwrap().start_mbr(),
        Mbr::new(0.0, 0.0, 100.0, 100.0)
    );
    transformer.update(&mut store, Point::new(200.0, 10.0));
    transformer.end(&mut store);

    let comment = store.get(3).unwrap().mbr();
    assert_eq!(comment.top_left(), Point::new(100.0, 10.0));
    assert_eq!(comment.width(), 24.0);
}

#[test]
fn test_ordinary_drag_event_sequence() {
    let bus = EventBus::shared();
    let log = record(&bus);
    let mut store = square_store();
    let selection = selected(&[1]);
    let mut transformer = Transformer::default().with_event_bus(bus);

    transformer.begin(&store, &selection, ResizeType::Bottom, Modifiers::default());
    transformer.update(&mut store, Point::new(0.0, 150.0));
    transformer.end(&mut store);

    let events = log.lock();
    assert_eq!(
        *events,
        vec![
            BoardEvent::Selection(SelectionEvent::ResizeStarted {
                resize_type: "bottom".to_string(),
                item_ids: vec![1],
            }),
            BoardEvent::Selection(SelectionEvent::Resized { item_ids: vec![1] }),
            BoardEvent::Selection(SelectionEvent::ResizeFinished { item_ids: vec![1] }),
        ]
    );
}

fn long_text_transformer(bus: Arc<EventBus>) -> Transformer {
    let settings = ResizeSettings {
        long_text_threshold: 10,
        ..ResizeSettings::default()
    };
    Transformer::new(settings).with_event_bus(bus)
}

#[test]
fn test_long_text_commits_once_on_end() {
    let bus = EventBus::shared();
    let log = record(&bus);
    let mut store = ItemStore::new();
    store
        .insert(Box::new(TextItem::new(1, Point::new(0.0, 0.0), "a".repeat(40))))
        .unwrap();
    let selection = selected(&[1]);
    let mut transformer = long_text_transformer(bus);

    transformer.begin(&store, &selection, ResizeType::Right, Modifiers::default());
    assert!(transformer.session().unwrap().is_deferred());

    // Pointer is held 100 units from the left edge
    assert_eq!(
        transformer.update(&mut store, Point::new(50.0, 8.0)),
        Some(Mbr::new(0.0, 0.0, 100.0, 16.0))
    );
    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 320.0, 16.0));

    transformer.end(&mut store);
    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 100.0, 64.0));

    let events = log.lock();
    assert_eq!(
        events[1],
        BoardEvent::Render(RenderEvent::ContentVisibility { visible: false })
    );
    assert_eq!(
        events[2],
        BoardEvent::Render(RenderEvent::CursorChanged {
            cursor: ResizeType::Right.cursor().to_string()
        })
    );
    let n = events.len();
    assert_eq!(
        events[n - 3],
        BoardEvent::Render(RenderEvent::ContentVisibility { visible: true })
    );
    assert_eq!(
        events[n - 2],
        BoardEvent::Render(RenderEvent::CursorChanged {
            cursor: "default".to_string()
        })
    );
    assert!(matches!(
        events[n - 1],
        BoardEvent::Selection(SelectionEvent::ResizeFinished { .. })
    ));
}

#[test]
fn test_cancelling_long_text_still_commits() {
    let bus = EventBus::shared();
    let mut store = ItemStore::new();
    store
        .insert(Box::new(TextItem::new(1, Point::new(0.0, 0.0), "a".repeat(40))))
        .unwrap();
    let selection = selected(&[1]);
    let mut transformer = long_text_transformer(bus);

    transformer.begin(&store, &selection, ResizeType::Right, Modifiers::default());
    transformer.update(&mut store, Point::new(160.0, 8.0));
    assert_eq!(
        transformer.cancel(&mut store),
        Some(Mbr::new(0.0, 0.0, 160.0, 16.0))
    );
    assert!(!transformer.is_resizing());
    assert_eq!(store.get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 160.0, 32.0));
}
