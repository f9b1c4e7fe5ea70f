use boardkit_core::ItemId;
use serde::{Deserialize, Serialize};

use super::{BoardItem, ResizePolicy};
use crate::geometry::{Matrix, Mbr};

/// Sticky note whose content must never be distorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerItem {
    pub id: ItemId,
    pub mbr: Mbr,
}

impl StickerItem {
    pub fn new(id: ItemId, mbr: Mbr) -> Self {
        Self { id, mbr }
    }
}

impl BoardItem for StickerItem {
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
        "sticker"
    }

    fn resize_policy(&self) -> ResizePolicy {
        ResizePolicy::LockedAspectContent
    }
}
