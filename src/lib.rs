//! # BoardKit
//!
//! Viewport camera and interactive resize engine for a 2D whiteboard:
//! - Pan, zoom to point, discrete zoom levels, fit to rectangle
//! - Two-finger pinch and pan recognition
//! - Anchor hit-testing and resize drags for single items and groups
//! - Per-item resize policies (uniform scale, text reflow, locked aspect)
//! - Per-document viewport persistence
//!
//! ## Architecture
//!
//! BoardKit is organized as a workspace with multiple crates:
//!
//! 1. **boardkit-core** - Error types, ids, constants, event bus
//! 2. **boardkit-settings** - Configuration and camera snapshot storage
//! 3. **boardkit-canvas** - Geometry, camera, items, selection, transformer
//! 4. **boardkit** - This crate: re-exports, logging setup, and the
//!    headless `replay` binary

pub mod replay;

pub use boardkit_core::{
    BoardEvent, CameraEvent, EventBus, EventCategory, EventFilter, GeometryError, ItemId,
    RenderEvent, SelectionEvent, SubscriptionId, TouchId,
};

pub use boardkit_settings::{
    CameraSnapshot, Config, FileViewStore, GestureSettings, MemoryViewStore, PersistenceSettings,
    ResizeSettings, ViewStateStore, ViewportSettings,
};

pub use boardkit_canvas::{
    AspectRatio, Board, BoardItem, Camera, CommentItem, FrameItem, GestureTracker, GestureUpdate,
    ItemStore, Matrix, Mbr, Modifiers, Point, PointerDown, ResizePolicy, ResizeType, Selection,
    ShapeItem, SpatialQuery, StickerItem, TextItem, TextReflow, Transformer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty output on stderr, leaving stdout for command results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
