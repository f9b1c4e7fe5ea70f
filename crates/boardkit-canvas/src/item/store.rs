//! Item storage in draw order.

use std::collections::HashSet;

use boardkit_core::ItemId;
use thiserror::Error;

use super::BoardItem;
use crate::geometry::Mbr;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemStoreError {
    #[error("Item {0} already exists")]
    DuplicateId(ItemId),
    #[error("Item id {0} is out of range")]
    IdOutOfRange(ItemId),
    #[error("No item ids left")]
    IdsExhausted,
}

/// Owns the board's items. Iteration follows draw order (first inserted is
/// drawn first).
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Box<dyn BoardItem>>,
    next_id: ItemId,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns an id not used by any stored item. `ItemId::MAX` is never
    /// handed out.
    pub fn generate_id(&mut self) -> Result<ItemId, ItemStoreError> {
        let id = self.next_id.max(1);
        self.next_id = id.checked_add(1).ok_or(ItemStoreError::IdsExhausted)?;
        Ok(id)
    }

    /// Adds an item on top of the draw order.
    pub fn insert(&mut self, item: Box<dyn BoardItem>) -> Result<ItemId, ItemStoreError> {
        let id = item.id();
        if self.contains(id) {
            return Err(ItemStoreError::DuplicateId(id));
        }
        let after = id
            .checked_add(1)
            .ok_or(ItemStoreError::IdOutOfRange(id))?;
        self.next_id = self.next_id.max(after);
        tracing::debug!("Added {} item {}", item.kind(), id);
        self.items.push(item);
        Ok(id)
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Box<dyn BoardItem>> {
        let index = self.index_of(id)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: ItemId) -> Option<&dyn BoardItem> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .map(|item| item.as_ref())
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut (dyn BoardItem + 'static)> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .map(|item| item.as_mut())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn BoardItem> {
        self.items.iter().map(|item| item.as_ref())
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id()).collect()
    }

    /// Union of the boxes of the given items. Unknown ids are skipped.
    pub fn mbr_of(&self, ids: &[ItemId]) -> Option<Mbr> {
        let boxes: Vec<Mbr> = ids
            .iter()
            .filter_map(|id| self.get(*id))
            .map(|item| item.mbr())
            .collect();
        Mbr::union_all(boxes.iter())
    }

    /// Every item that follows `id`, directly or through other followers.
    pub fn followers_of(&self, id: ItemId) -> Vec<ItemId> {
        self.with_followers(&[id])
            .into_iter()
            .filter(|f| *f != id)
            .collect()
    }

    /// `ids` followed by every item that follows one of them, transitively.
    ///
    /// Duplicates are dropped and cycles terminate.
    pub fn with_followers(&self, ids: &[ItemId]) -> Vec<ItemId> {
        let mut result: Vec<ItemId> = Vec::with_capacity(ids.len());
        let mut seen: HashSet<ItemId> = HashSet::new();
        for id in ids {
            if seen.insert(*id) {
                result.push(*id);
            }
        }

        let mut cursor = 0;
        while cursor < result.len() {
            let leader = result[cursor];
            for item in &self.items {
                if item.follows() == Some(leader) && seen.insert(item.id()) {
                    result.push(item.id());
                }
            }
            cursor += 1;
        }
        result
    }

    fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}
