//! Event type definitions for the event bus.
//!
//! This module defines the notifications the board publishes, organized by
//! category. Events are cloneable and serializable so they can be logged or
//! replayed.

use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// Root event enum for all board events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// Viewport transform changes
    Camera(CameraEvent),
    /// Selection membership and resize lifecycle
    Selection(SelectionEvent),
    /// Hints for the render scheduler
    Render(RenderEvent),
}

impl BoardEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            BoardEvent::Camera(_) => EventCategory::Camera,
            BoardEvent::Selection(_) => EventCategory::Selection,
            BoardEvent::Render(_) => EventCategory::Render,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            BoardEvent::Camera(e) => e.description(),
            BoardEvent::Selection(e) => e.description(),
            BoardEvent::Render(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Camera events.
    Camera,
    /// Selection events.
    Selection,
    /// Render scheduling events.
    Render,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Camera => write!(f, "Camera"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Render => write!(f, "Render"),
        }
    }
}

/// Camera-related events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CameraEvent {
    /// The world-to-screen matrix changed.
    Changed {
        /// Horizontal scale after the change.
        scale: f64,
        /// Horizontal translation in pixels.
        translate_x: f64,
        /// Vertical translation in pixels.
        translate_y: f64,
    },
    /// A persisted matrix was restored for a document.
    Restored {
        /// Document whose view was restored.
        document_id: String,
    },
}

impl CameraEvent {
    fn description(&self) -> String {
        match self {
            CameraEvent::Changed {
                scale,
                translate_x,
                translate_y,
            } => format!(
                "Camera scale {:.3} at ({:.1}, {:.1})",
                scale, translate_x, translate_y
            ),
            CameraEvent::Restored { document_id } => {
                format!("Camera restored for {}", document_id)
            }
        }
    }
}

/// Selection-related events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// Selection membership changed.
    Changed {
        /// Items now selected.
        item_ids: Vec<ItemId>,
    },
    /// A resize drag started on an anchor.
    ResizeStarted {
        /// Anchor being dragged.
        resize_type: String,
        /// Items taking part in the resize.
        item_ids: Vec<ItemId>,
    },
    /// Items were resized (continuous or committed).
    Resized {
        /// Items whose geometry changed.
        item_ids: Vec<ItemId>,
    },
    /// A resize drag ended.
    ResizeFinished {
        /// Items that took part in the resize.
        item_ids: Vec<ItemId>,
    },
}

impl SelectionEvent {
    fn description(&self) -> String {
        match self {
            SelectionEvent::Changed { item_ids } => {
                format!("Selection changed ({} items)", item_ids.len())
            }
            SelectionEvent::ResizeStarted {
                resize_type,
                item_ids,
            } => format!(
                "Resize {} started on {} items",
                resize_type,
                item_ids.len()
            ),
            SelectionEvent::Resized { item_ids } => format!("Resized {} items", item_ids.len()),
            SelectionEvent::ResizeFinished { item_ids } => {
                format!("Resize finished on {} items", item_ids.len())
            }
        }
    }
}

/// Render scheduling hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderEvent {
    /// Whether item content should be drawn or only its provisional box.
    ContentVisibility {
        /// `false` while a deferred resize is in progress.
        visible: bool,
    },
    /// The pointer cursor the host should display.
    CursorChanged {
        /// CSS-style cursor name, e.g. `nwse-resize`.
        cursor: String,
    },
}

impl RenderEvent {
    fn description(&self) -> String {
        match self {
            RenderEvent::ContentVisibility { visible } => {
                format!("Content {}", if *visible { "shown" } else { "hidden" })
            }
            RenderEvent::CursorChanged { cursor } => format!("Cursor {}", cursor),
        }
    }
}
