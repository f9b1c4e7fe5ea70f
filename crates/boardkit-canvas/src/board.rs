//! Input facade tying camera, items, selection and the resize tool together.
//!
//! Hosts feed raw screen-space input into a [`Board`]; it converts pointer
//! positions to world coordinates through the camera and routes them to the
//! resize tool, the selection, or a pan.

use std::sync::Arc;

use boardkit_core::{EventBus, ItemId, TouchId};
use boardkit_settings::Config;

use crate::camera::{Camera, GestureUpdate};
use crate::geometry::{Mbr, Point};
use crate::item::{BoardItem, ItemStore, ItemStoreError, SpatialQuery};
use crate::selection::Selection;
use crate::transformer::{Modifiers, ResizeType, Transformer};

/// What a pointer-down started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown {
    /// A resize drag on the selection's anchor.
    Resize(ResizeType),
    /// The topmost item under the pointer became the selection.
    Select(ItemId),
    /// Empty board: the selection was cleared and dragging pans the view.
    Pan,
}

#[derive(Debug)]
pub struct Board {
    camera: Camera,
    store: ItemStore,
    selection: Selection,
    transformer: Transformer,
    events: Arc<EventBus>,
    pan_from: Option<Point>,
}

impl Board {
    pub fn new(config: &Config) -> Self {
        let events = EventBus::shared();
        Self {
            camera: Camera::from_config(config).with_event_bus(events.clone()),
            store: ItemStore::new(),
            selection: Selection::new().with_event_bus(events.clone()),
            transformer: Transformer::from_config(config).with_event_bus(events.clone()),
            events,
            pan_from: None,
        }
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    pub fn add_item(&mut self, item: Box<dyn BoardItem>) -> Result<ItemId, ItemStoreError> {
        self.store.insert(item)
    }

    /// Removes an item and drops it from the selection. Refused while a
    /// resize is active.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Box<dyn BoardItem>> {
        if self.transformer.is_resizing() {
            tracing::warn!("Cannot remove item {} during a resize", id);
            return None;
        }
        let removed = self.store.remove(id)?;
        self.selection.retain_existing(&self.store);
        Some(removed)
    }

    pub fn select(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        self.selection.select(ids);
    }

    /// Selects the items overlapping a world rectangle.
    pub fn select_in_rect(&mut self, rect: &Mbr, multi: bool) {
        self.selection.select_in_rect(&self.store, rect, multi);
    }

    /// Cursor for hovering `screen`, when it is over a resize anchor.
    pub fn hover_cursor(&self, screen: Point) -> Option<&'static str> {
        let world = self.camera.screen_to_world(screen);
        self.transformer
            .cursor_at(&self.store, &self.selection, world, self.camera.scale())
    }

    /// Starts a gesture under `screen`. While a resize is active the press
    /// is ignored and the ongoing resize is reported.
    pub fn pointer_down(&mut self, screen: Point, modifiers: Modifiers) -> PointerDown {
        if let Some(session) = self.transformer.session() {
            tracing::debug!("Ignoring pointer down during resize {}", session.resize_type());
            return PointerDown::Resize(session.resize_type());
        }

        self.camera.set_pointer(screen);
        let screen = self.camera.pointer();
        let world = self.camera.screen_to_world(screen);

        if let Some(resize_type) = self.transformer.begin_at(
            &self.store,
            &self.selection,
            world,
            self.camera.scale(),
            modifiers,
        ) {
            return PointerDown::Resize(resize_type);
        }

        if let Some(id) = self.store.under_point(world).last().copied() {
            self.selection.select([id]);
            return PointerDown::Select(id);
        }

        self.selection.clear();
        self.pan_from = Some(screen);
        PointerDown::Pan
    }

    /// Drives the active resize or pan. Returns the live resize box.
    pub fn pointer_move(&mut self, screen: Point) -> Option<Mbr> {
        self.camera.set_pointer(screen);
        let screen = self.camera.pointer();

        if self.transformer.is_resizing() {
            let world = self.camera.screen_to_world(screen);
            return self.transformer.update(&mut self.store, world);
        }

        if let Some(from) = self.pan_from {
            let (sx, sy) = (self.camera.matrix().scale_x, self.camera.matrix().scale_y);
            self.camera
                .translate_by((screen.x - from.x) / sx, (screen.y - from.y) / sy);
            self.pan_from = Some(screen);
        }
        None
    }

    /// Finishes the active resize or pan. Returns the final resize box.
    pub fn pointer_up(&mut self, screen: Point) -> Option<Mbr> {
        let live = self.pointer_move(screen);
        self.pan_from = None;
        if self.transformer.is_resizing() {
            return self.transformer.end(&mut self.store).or(live);
        }
        None
    }

    /// Aborts the active gesture (Escape).
    pub fn cancel(&mut self) -> Option<Mbr> {
        self.pan_from = None;
        self.transformer.cancel(&mut self.store)
    }

    pub fn wheel(&mut self, delta_y: f64, screen: Point) {
        self.camera.wheel(delta_y, screen);
    }

    pub fn touch_start(&mut self, id: TouchId, screen: Point) {
        self.camera.touch_start(id, screen);
    }

    pub fn touch_move(&mut self, id: TouchId, screen: Point) -> Option<GestureUpdate> {
        self.camera.touch_move(id, screen)
    }

    pub fn touch_end(&mut self, id: TouchId) {
        self.camera.touch_end(id);
    }

    /// Fits every item into the view. Does nothing on an empty board.
    pub fn zoom_to_fit(&mut self) {
        if let Some(mbr) = self.store.mbr_of(&self.store.ids()) {
            self.camera.view_rectangle(&mbr);
        }
    }

    /// Fits the selection into the view. Does nothing without a selection.
    pub fn zoom_to_selection(&mut self) {
        if let Some(mbr) = self.selection.mbr(&self.store) {
            self.camera.view_rectangle(&mbr);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
