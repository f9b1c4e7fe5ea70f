use boardkit_core::ItemId;
use serde::{Deserialize, Serialize};

use super::BoardItem;
use crate::geometry::{Matrix, Mbr};

/// Generic geometric item: rectangles, ellipses, images, drawings.
///
/// The item is fully described by its bounding box and stretches freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeItem {
    pub id: ItemId,
    pub mbr: Mbr,
}

impl ShapeItem {
    pub fn new(id: ItemId, mbr: Mbr) -> Self {
        Self { id, mbr }
    }
}

impl BoardItem for ShapeItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn mbr(&self) -> Mbr {
        self.mbr
    }

    fn apply_matrix(&mut self, matrix: &Matrix) {
        self.mbr.transform(matrix);
    }

    fn kind(&self) -> &'static str {
        "shape"
    }
}
