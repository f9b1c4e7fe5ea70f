//! Board items as seen by the resize engine.
//!
//! The engine never inspects concrete item types. Each item declares a
//! [`ResizePolicy`] and, where relevant, exposes the [`TextReflow`]
//! capability or an [`AspectRatio`] preset; the transformer matches on those.

mod comment;
mod frame;
mod shape;
mod spatial;
mod sticker;
mod store;
mod text;

pub use comment::CommentItem;
pub use frame::FrameItem;
pub use shape::ShapeItem;
pub use spatial::SpatialQuery;
pub use sticker::StickerItem;
pub use store::{ItemStore, ItemStoreError};
pub use text::{SimpleTextLayout, TextItem};

use std::fmt;

use boardkit_core::ItemId;
use serde::{Deserialize, Serialize};

use crate::geometry::{Matrix, Mbr};

/// How an item reacts to a resize drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Position and size follow the resize matrix directly.
    UniformScale,
    /// Width changes set the layout width instead of stretching glyphs;
    /// height follows the content.
    TextReflow,
    /// Content keeps its proportions: edge drags only move the item, corner
    /// drags in a proportional session scale it.
    LockedAspectContent,
}

/// Text layout contract, in world units.
pub trait TextReflow {
    /// Constrains the layout to `width` and re-flows the text.
    fn set_max_width(&mut self, width: f64);

    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Number of characters in the text.
    fn text_length(&self) -> usize;
}

/// Named aspect ratio presets for frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectRatio {
    /// Any proportions.
    Custom,
    Square,
    /// 16:9 landscape.
    Widescreen,
    /// 4:3 landscape.
    Standard,
    /// ISO 216 A4 portrait.
    A4,
    /// US letter portrait.
    Letter,
}

impl AspectRatio {
    /// Width over height, or `None` for [`AspectRatio::Custom`].
    pub fn ratio(&self) -> Option<f64> {
        match self {
            AspectRatio::Custom => None,
            AspectRatio::Square => Some(1.0),
            AspectRatio::Widescreen => Some(16.0 / 9.0),
            AspectRatio::Standard => Some(4.0 / 3.0),
            AspectRatio::A4 => Some(210.0 / 297.0),
            AspectRatio::Letter => Some(8.5 / 11.0),
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.ratio().is_some()
    }
}

/// An item placed on the board.
///
/// Only `id`, `mbr`, `apply_matrix` and `kind` are required; the remaining
/// methods describe optional capabilities and default to "not supported".
pub trait BoardItem: fmt::Debug {
    fn id(&self) -> ItemId;

    /// Bounding box in world coordinates.
    fn mbr(&self) -> Mbr;

    /// Applies a world-space transform to the item's position and size.
    fn apply_matrix(&mut self, matrix: &Matrix);

    /// Short type name used in logs and replay output.
    fn kind(&self) -> &'static str;

    fn resize_policy(&self) -> ResizePolicy {
        ResizePolicy::UniformScale
    }

    fn text_reflow(&self) -> Option<&dyn TextReflow> {
        None
    }

    fn text_reflow_mut(&mut self) -> Option<&mut dyn TextReflow> {
        None
    }

    /// Aspect ratio preset, for items that have one.
    fn aspect_ratio(&self) -> Option<AspectRatio> {
        None
    }

    /// Whether a free resize may replace the preset with
    /// [`AspectRatio::Custom`].
    fn can_change_ratio(&self) -> bool {
        false
    }

    fn set_aspect_ratio(&mut self, _ratio: AspectRatio) {}

    /// Item this one is pinned to, such as the target of a comment.
    fn follows(&self) -> Option<ItemId> {
        None
    }

    /// True when corner drags on this item must keep its proportions even
    /// without the aspect-lock modifier.
    fn requires_proportional_resize(&self) -> bool {
        match self.resize_policy() {
            ResizePolicy::TextReflow | ResizePolicy::LockedAspectContent => true,
            ResizePolicy::UniformScale => {
                self.aspect_ratio().is_some_and(|r| r.is_fixed()) && !self.can_change_ratio()
            }
        }
    }
}
