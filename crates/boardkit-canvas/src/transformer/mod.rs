//! Interactive resize tool.
//!
//! The transformer is idle until [`Transformer::begin`] starts a drag on
//! one of the selection's anchors, and idle again after
//! [`Transformer::end`]. While resizing, each pointer move produces a new
//! group box. Ordinary drags immediately move every item to where the step
//! from the start box puts its start box; deferred drags (very long text)
//! only move the provisional box and commit once at the end.
//!
//! All pointer coordinates are in world units.

mod anchor;
mod dispatch;
mod resize;
mod resize_type;
mod session;

pub use anchor::{anchor_threshold, get_resize_type, get_text_resize_type};
pub use dispatch::{apply_resize, ResizeStep};
pub use resize::{
    clamp_deferred_pointer, free_resize_mbr, group_item_translation, item_world_matrix,
    proportional_resize_mbr, resize_matrix,
};
pub use resize_type::ResizeType;
pub use session::DragSession;

use std::sync::Arc;

use boardkit_core::{BoardEvent, EventBus, ItemId, RenderEvent, SelectionEvent};
use boardkit_settings::{Config, ResizeSettings};
use serde::{Deserialize, Serialize};

use crate::geometry::{Mbr, Point};
use crate::item::{ItemStore, ResizePolicy};
use crate::selection::Selection;

/// Cursor restored when a deferred drag ends.
pub const DEFAULT_CURSOR: &str = "default";

/// Keyboard modifiers held during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Keep the aspect ratio on corner drags (Shift).
    pub aspect_lock: bool,
}

impl Modifiers {
    pub fn aspect_lock() -> Self {
        Self { aspect_lock: true }
    }
}

/// Resize tool state machine.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    settings: ResizeSettings,
    session: Option<DragSession>,
    events: Option<Arc<EventBus>>,
}

impl Transformer {
    pub fn new(settings: ResizeSettings) -> Self {
        Self {
            settings,
            session: None,
            events: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resize.clone())
    }

    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn settings(&self) -> &ResizeSettings {
        &self.settings
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Live box of the active drag.
    pub fn current_mbr(&self) -> Option<Mbr> {
        self.session.as_ref().map(|s| s.current_mbr())
    }

    /// Anchor of the selection box under `point`.
    ///
    /// A selection made of a single text item only offers corner and
    /// left/right anchors.
    pub fn resize_type_at(
        &self,
        store: &ItemStore,
        selection: &Selection,
        point: Point,
        camera_scale: f64,
    ) -> Option<ResizeType> {
        let mbr = selection.mbr(store)?;
        let radius = self.settings.anchor_radius_px;
        let single_text = match selection.ids() {
            [only] => store
                .get(*only)
                .is_some_and(|item| item.resize_policy() == ResizePolicy::TextReflow),
            _ => false,
        };
        if single_text {
            get_text_resize_type(point, camera_scale, &mbr, radius)
        } else {
            get_resize_type(point, camera_scale, &mbr, radius)
        }
    }

    /// Hover cursor for `point`, if it is over an anchor.
    pub fn cursor_at(
        &self,
        store: &ItemStore,
        selection: &Selection,
        point: Point,
        camera_scale: f64,
    ) -> Option<&'static str> {
        self.resize_type_at(store, selection, point, camera_scale)
            .map(|t| t.cursor())
    }

    /// Starts a drag of `resize_type` on the current selection.
    ///
    /// Returns false, leaving the transformer unchanged, when a drag is
    /// already active or the selection has no items in `store`.
    pub fn begin(
        &mut self,
        store: &ItemStore,
        selection: &Selection,
        resize_type: ResizeType,
        modifiers: Modifiers,
    ) -> bool {
        if self.session.is_some() {
            tracing::warn!("Ignoring resize start: a resize is already active");
            return false;
        }
        let Some(start_mbr) = selection.mbr(store) else {
            return false;
        };

        let selected: Vec<ItemId> = selection
            .ids()
            .iter()
            .copied()
            .filter(|id| store.contains(*id))
            .collect();
        let batch = store.with_followers(&selected);
        let item_starts: Vec<(ItemId, Mbr)> = batch
            .iter()
            .filter_map(|id| store.get(*id).map(|item| (*id, item.mbr())))
            .collect();

        let proportional = modifiers.aspect_lock
            || batch
                .iter()
                .filter_map(|id| store.get(*id))
                .any(|item| item.requires_proportional_resize());
        let threshold = self.settings.long_text_threshold;
        let deferred = batch
            .iter()
            .filter_map(|id| store.get(*id))
            .filter_map(|item| item.text_reflow())
            .any(|text| text.text_length() > threshold);

        tracing::debug!(
            "Resize {} started on {} (proportional: {}, deferred: {})",
            resize_type,
            start_mbr,
            proportional,
            deferred
        );
        self.publish(BoardEvent::Selection(SelectionEvent::ResizeStarted {
            resize_type: resize_type.to_string(),
            item_ids: batch.clone(),
        }));
        if deferred {
            self.publish(BoardEvent::Render(RenderEvent::ContentVisibility {
                visible: false,
            }));
            self.publish(BoardEvent::Render(RenderEvent::CursorChanged {
                cursor: resize_type.cursor().to_string(),
            }));
        }

        self.session = Some(DragSession::new(
            resize_type,
            start_mbr,
            selected,
            batch,
            item_starts,
            modifiers,
            proportional,
            deferred,
        ));
        true
    }

    /// Detects the anchor under `point` and starts a drag on it.
    pub fn begin_at(
        &mut self,
        store: &ItemStore,
        selection: &Selection,
        point: Point,
        camera_scale: f64,
        modifiers: Modifiers,
    ) -> Option<ResizeType> {
        if self.session.is_some() {
            return None;
        }
        let resize_type = self.resize_type_at(store, selection, point, camera_scale)?;
        self.begin(store, selection, resize_type, modifiers)
            .then_some(resize_type)
    }

    /// Feeds a pointer move into the active drag and returns the live box.
    ///
    /// Moves that would collapse the box to zero width or height are
    /// dropped. Returns `None` when idle.
    pub fn update(&mut self, store: &mut ItemStore, pointer: Point) -> Option<Mbr> {
        let min_extent = self.settings.deferred_min_extent;
        let session = self.session.as_mut()?;

        let mut pointer = pointer.finite_or_zero();
        if session.is_deferred() {
            pointer = clamp_deferred_pointer(
                session.resize_type(),
                session.opposite_point(),
                pointer,
                min_extent,
            );
        }

        let resize_type = session.resize_type();
        let start = session.start_mbr();
        let next = if session.is_proportional() && resize_type.is_corner() {
            proportional_resize_mbr(resize_type, &start, session.opposite_point(), pointer)
        } else {
            free_resize_mbr(resize_type, &start, session.opposite_point(), pointer)
        };

        let previous = session.current_mbr();
        if next.is_degenerate() || next == previous {
            return Some(previous);
        }

        if !session.is_deferred() {
            let step = ResizeStep {
                resize_type,
                from: start,
                matrix: resize_matrix(&start, &next),
                proportional: session.is_proportional(),
                aspect_lock: session.modifiers().aspect_lock,
            };
            apply_to_batch(store, session.item_starts(), &step);
        }
        session.set_current_mbr(next);
        tracing::trace!("Resize {} to {}", resize_type, next);

        let item_ids = session.batch().to_vec();
        self.publish(BoardEvent::Selection(SelectionEvent::Resized { item_ids }));
        Some(next)
    }

    /// Ends the active drag, committing a deferred one. Returns the final
    /// box, or `None` when idle.
    pub fn end(&mut self, store: &mut ItemStore) -> Option<Mbr> {
        let session = self.session.take()?;
        let current = session.current_mbr();

        if session.is_deferred() {
            let start = session.start_mbr();
            if current != start {
                let step = ResizeStep {
                    resize_type: session.resize_type(),
                    from: start,
                    matrix: resize_matrix(&start, &current),
                    proportional: session.is_proportional(),
                    aspect_lock: session.modifiers().aspect_lock,
                };
                apply_to_batch(store, session.item_starts(), &step);
                tracing::debug!("Committed deferred resize {} -> {}", start, current);
            }
            self.publish(BoardEvent::Render(RenderEvent::ContentVisibility {
                visible: true,
            }));
            self.publish(BoardEvent::Render(RenderEvent::CursorChanged {
                cursor: DEFAULT_CURSOR.to_string(),
            }));
        }

        tracing::debug!("Resize {} finished at {}", session.resize_type(), current);
        self.publish(BoardEvent::Selection(SelectionEvent::ResizeFinished {
            item_ids: session.batch().to_vec(),
        }));
        Some(current)
    }

    /// Aborts the active drag.
    ///
    /// Ordinary drags have already been applied move by move, so there is
    /// nothing to roll back. Deferred drags still commit their last box,
    /// exactly as on pointer-up.
    pub fn cancel(&mut self, store: &mut ItemStore) -> Option<Mbr> {
        if self.session.as_ref().is_some_and(|s| s.is_deferred()) {
            tracing::debug!("Cancelling a deferred resize commits it");
        }
        self.end(store)
    }

    fn publish(&self, event: BoardEvent) {
        if let Some(events) = &self.events {
            events.publish(event);
        }
    }
}

fn apply_to_batch(store: &mut ItemStore, item_starts: &[(ItemId, Mbr)], step: &ResizeStep) {
    for (id, start) in item_starts {
        match store.get_mut(*id) {
            Some(item) => apply_resize(item, step, start),
            None => tracing::warn!("Resized item {} is no longer in the store", id),
        }
    }
}
