//! # BoardKit Canvas
//!
//! Viewport transform and interactive resize engine for a 2D whiteboard.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Matrix`] (6-parameter affine transform), [`Mbr`]
//!   (normalized bounding box), [`Point`]
//! - **Camera**: pan, zoom to point, discrete zoom levels, fit to rectangle,
//!   two-finger pinch/pan recognition, per-document view persistence
//! - **Items**: the [`BoardItem`] capability trait with uniform-scale,
//!   text-reflow and locked-aspect resize policies, reference item types,
//!   and an [`ItemStore`] with spatial queries
//! - **Selection**: selected ids, group box, follower resolution
//! - **Transformer**: anchor detection, resize drag state machine, resize
//!   matrices, per-item dispatch and group resize
//! - **Board**: input facade routing screen-space pointer, wheel and touch
//!   events through the camera
//!
//! ## Architecture
//!
//! ```text
//! Board (input facade)
//!   ├── Camera (screen <-> world, gestures)
//!   ├── Selection ── ItemStore (items, followers, spatial queries)
//!   └── Transformer (anchors, drag session, resize dispatch)
//!
//! EventBus (camera / selection / render notifications)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use boardkit_canvas::{Board, Mbr, Modifiers, Point, ShapeItem};
//!
//! let mut board = Board::default();
//! board
//!     .add_item(Box::new(ShapeItem::new(1, Mbr::new(0.0, 0.0, 100.0, 100.0))))
//!     .unwrap();
//! board.select([1]);
//!
//! // Drag the right edge to x = 50
//! board.pointer_down(Point::new(100.0, 50.0), Modifiers::default());
//! board.pointer_up(Point::new(50.0, 50.0));
//!
//! assert_eq!(board.store().get(1).unwrap().mbr(), Mbr::new(0.0, 0.0, 50.0, 100.0));
//! ```

pub mod board;
pub mod camera;
pub mod geometry;
pub mod item;
pub mod selection;
pub mod transformer;

pub use board::{Board, PointerDown};
pub use camera::{Camera, Direction, GestureTracker, GestureUpdate};
pub use geometry::{Matrix, Mbr, Point};
pub use item::{
    AspectRatio, BoardItem, CommentItem, FrameItem, ItemStore, ItemStoreError, ResizePolicy,
    ShapeItem, SimpleTextLayout, SpatialQuery, StickerItem, TextItem, TextReflow,
};
pub use selection::Selection;
pub use transformer::{DragSession, Modifiers, ResizeStep, ResizeType, Transformer};
