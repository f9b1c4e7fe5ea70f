//! Rectangle and point queries over items.

use boardkit_core::ItemId;

use super::ItemStore;
use crate::geometry::{Mbr, Point};

/// Hit-testing queries. Results are in draw order.
pub trait SpatialQuery {
    /// Items whose box overlaps `rect` or lies inside it.
    fn enclosed_or_crossed_by(&self, rect: &Mbr) -> Vec<ItemId>;

    /// Items whose box lies entirely inside `rect`.
    fn enclosed_by(&self, rect: &Mbr) -> Vec<ItemId>;

    /// Items whose box contains `point`.
    fn under_point(&self, point: Point) -> Vec<ItemId>;
}

/// Linear scan; adequate for boards of a few thousand items.
impl SpatialQuery for ItemStore {
    fn enclosed_or_crossed_by(&self, rect: &Mbr) -> Vec<ItemId> {
        self.iter()
            .filter(|item| item.mbr().is_enclosed_or_crossed_by(rect))
            .map(|item| item.id())
            .collect()
    }

    fn enclosed_by(&self, rect: &Mbr) -> Vec<ItemId> {
        self.iter()
            .filter(|item| item.mbr().is_enclosed_by(rect))
            .map(|item| item.id())
            .collect()
    }

    fn under_point(&self, point: Point) -> Vec<ItemId> {
        self.iter()
            .filter(|item| item.mbr().is_under_point(point))
            .map(|item| item.id())
            .collect()
    }
}
