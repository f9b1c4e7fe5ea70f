use boardkit_core::ItemId;
use serde::{Deserialize, Serialize};

use super::BoardItem;
use crate::geometry::{Matrix, Mbr, Point};

/// Side of the square comment marker, in world units.
pub const COMMENT_MARKER_SIZE: f64 = 24.0;

/// Comment marker pinned to another item.
///
/// The marker is a fixed-size square anchored at its top-left corner. Resizes
/// move the anchor but never change the marker size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentItem {
    pub id: ItemId,
    pub anchor: Point,
    pub target: Option<ItemId>,
}

impl CommentItem {
    pub fn new(id: ItemId, anchor: Point, target: Option<ItemId>) -> Self {
        Self { id, anchor, target }
    }
}

impl BoardItem for CommentItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn mbr(&self) -> Mbr {
        Mbr::from_size(
            self.anchor.x,
            self.anchor.y,
            COMMENT_MARKER_SIZE,
            COMMENT_MARKER_SIZE,
        )
    }

    fn apply_matrix(&mut self, matrix: &Matrix) {
        self.anchor = matrix.apply(self.anchor).finite_or_zero();
    }

    fn kind(&self) -> &'static str {
        "comment"
    }

    fn follows(&self) -> Option<ItemId> {
        self.target
    }
}
