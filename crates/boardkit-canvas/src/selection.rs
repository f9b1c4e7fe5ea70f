use std::sync::Arc;

use boardkit_core::{BoardEvent, EventBus, ItemId, SelectionEvent};

use crate::geometry::Mbr;
use crate::item::{ItemStore, SpatialQuery};

/// Tracks which items are selected.
///
/// # Selection Model
///
/// - Ids are kept in the order they were selected, without duplicates.
/// - Followers (comments pinned to a selected item) are not members; they
///   are resolved on demand with [`Selection::with_followers`] so that a
///   resize moves them along with their targets.
/// - Every membership change publishes [`SelectionEvent::Changed`] on the
///   attached event bus.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: Vec<ItemId>,
    events: Option<Arc<EventBus>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    /// Replaces the selection with `ids`.
    pub fn select(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        let mut next = Vec::new();
        for id in ids {
            if !next.contains(&id) {
                next.push(id);
            }
        }
        if next != self.ids {
            self.ids = next;
            self.changed();
        }
    }

    /// Adds `id` if it is not selected yet.
    pub fn add(&mut self, id: ItemId) {
        if !self.contains(id) {
            self.ids.push(id);
            self.changed();
        }
    }

    pub fn remove(&mut self, id: ItemId) {
        let before = self.ids.len();
        self.ids.retain(|selected| *selected != id);
        if self.ids.len() != before {
            self.changed();
        }
    }

    /// Selects `id` if unselected, deselects it otherwise (Shift+click).
    pub fn toggle(&mut self, id: ItemId) {
        if self.contains(id) {
            self.remove(id);
        } else {
            self.add(id);
        }
    }

    pub fn clear(&mut self) {
        if !self.ids.is_empty() {
            self.ids.clear();
            self.changed();
        }
    }

    /// Selects every item overlapping `rect`. With `multi`, the hits are
    /// added to the current selection instead of replacing it.
    pub fn select_in_rect(&mut self, query: &dyn SpatialQuery, rect: &Mbr, multi: bool) {
        let hits = query.enclosed_or_crossed_by(rect);
        if multi {
            let merged: Vec<ItemId> = self.ids.iter().copied().chain(hits).collect();
            self.select(merged);
        } else {
            self.select(hits);
        }
    }

    /// Drops ids that are no longer in the store.
    pub fn retain_existing(&mut self, store: &ItemStore) {
        let before = self.ids.len();
        self.ids.retain(|id| store.contains(*id));
        if self.ids.len() != before {
            self.changed();
        }
    }

    /// Bounding box of the selected items, without followers.
    pub fn mbr(&self, store: &ItemStore) -> Option<Mbr> {
        store.mbr_of(&self.ids)
    }

    /// Selected ids followed by every item following them.
    pub fn with_followers(&self, store: &ItemStore) -> Vec<ItemId> {
        store.with_followers(&self.ids)
    }

    fn changed(&self) {
        tracing::debug!("Selection changed: {:?}", self.ids);
        if let Some(events) = &self.events {
            events.publish(BoardEvent::Selection(SelectionEvent::Changed {
                item_ids: self.ids.clone(),
            }));
        }
    }
}
