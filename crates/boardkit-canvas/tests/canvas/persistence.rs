use boardkit_canvas::{Camera, Matrix, Point};
use boardkit_settings::{camera_key, FileViewStore, MemoryViewStore, ViewStateStore};
use tempfile::TempDir;

#[test]
fn test_view_survives_reopen() {
    let dir = TempDir::new().unwrap();

    let mut camera = Camera::new();
    assert!(!camera.attach_store(Box::new(FileViewStore::new(dir.path())), "doc-1"));
    camera.zoom_relative_to_point_by(2.0, 100.0, 100.0);
    camera.translate_by(15.0, -5.0);
    let saved = *camera.matrix();

    let mut reopened = Camera::new();
    assert!(reopened.attach_store(Box::new(FileViewStore::new(dir.path())), "doc-1"));
    assert_eq!(*reopened.matrix(), saved);
    assert_eq!(reopened.document_id(), Some("doc-1"));
}

#[test]
fn test_documents_keep_separate_views() {
    let dir = TempDir::new().unwrap();

    let mut camera = Camera::new();
    camera.attach_store(Box::new(FileViewStore::new(dir.path())), "a");
    camera.zoom_to(3.0);

    let mut other = Camera::new();
    assert!(!other.attach_store(Box::new(FileViewStore::new(dir.path())), "b"));
    assert_eq!(*other.matrix(), Matrix::IDENTITY);
}

#[test]
fn test_corrupt_slot_is_ignored() {
    let dir = TempDir::new().unwrap();
    let mut store = FileViewStore::new(dir.path());
    store.write(&camera_key("doc"), "{not json").unwrap();

    let mut camera = Camera::new();
    assert!(!camera.attach_store(Box::new(store), "doc"));
    assert_eq!(*camera.matrix(), Matrix::IDENTITY);

    // The next change overwrites the corrupt value
    camera.zoom_to(2.0);
    let reread = FileViewStore::new(dir.path());
    assert!(reread.read(&camera_key("doc")).unwrap().contains("\"scaleX\":2"));
}

#[test]
fn test_restored_scale_is_clamped() {
    let mut store = MemoryViewStore::new();
    store
        .write(
            &camera_key("doc"),
            r#"{"translateX":0,"translateY":0,"scaleX":500,"scaleY":500,"shearX":0,"shearY":0}"#,
        )
        .unwrap();

    let mut camera = Camera::new();
    assert!(camera.attach_store(Box::new(store), "doc"));
    assert_eq!(camera.scale(), camera.settings().max_scale);
}

#[test]
fn test_detached_camera_stops_writing() {
    let mut camera = Camera::new();
    camera.attach_store(Box::new(MemoryViewStore::new()), "doc");
    camera.translate_by(1.0, 0.0);
    let store = camera.detach_store().unwrap();
    assert!(store.read(&camera_key("doc")).is_some());

    camera.translate_by(1.0, 0.0);
    assert_eq!(camera.document_id(), None);
    assert_eq!(camera.screen_to_world(Point::new(2.0, 0.0)), Point::new(0.0, 0.0));
}
