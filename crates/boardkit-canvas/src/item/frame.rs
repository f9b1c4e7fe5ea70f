use boardkit_core::ItemId;
use serde::{Deserialize, Serialize};

use super::{AspectRatio, BoardItem};
use crate::geometry::{Matrix, Mbr};

/// Container area with an optional named aspect ratio preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameItem {
    pub id: ItemId,
    pub mbr: Mbr,
    pub aspect_ratio: AspectRatio,
    /// When set, the preset survives free resizes and corner drags keep it.
    #[serde(default)]
    pub ratio_locked: bool,
}

impl FrameItem {
    pub fn new(id: ItemId, mbr: Mbr, aspect_ratio: AspectRatio) -> Self {
        Self {
            id,
            mbr,
            aspect_ratio,
            ratio_locked: false,
        }
    }

    pub fn with_ratio_locked(mut self, locked: bool) -> Self {
        self.ratio_locked = locked;
        self
    }
}

impl BoardItem for FrameItem {
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
        "frame"
    }

    fn aspect_ratio(&self) -> Option<AspectRatio> {
        Some(self.aspect_ratio)
    }

    fn can_change_ratio(&self) -> bool {
        !self.ratio_locked
    }

    fn set_aspect_ratio(&mut self, ratio: AspectRatio) {
        if self.ratio_locked {
            tracing::debug!("Frame {} keeps locked ratio {:?}", self.id, self.aspect_ratio);
            return;
        }
        self.aspect_ratio = ratio;
    }
}
