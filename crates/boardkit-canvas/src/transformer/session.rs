use boardkit_core::ItemId;

use super::{Modifiers, ResizeType};
use crate::geometry::{Mbr, Point};

/// State of one resize drag, from pointer-down to pointer-up.
///
/// Everything except the live box is fixed when the drag starts.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    resize_type: ResizeType,
    opposite_point: Point,
    start_mbr: Mbr,
    current_mbr: Mbr,
    selected: Vec<ItemId>,
    batch: Vec<ItemId>,
    item_starts: Vec<(ItemId, Mbr)>,
    modifiers: Modifiers,
    proportional: bool,
    deferred: bool,
}

impl DragSession {
    pub(crate) fn new(
        resize_type: ResizeType,
        start_mbr: Mbr,
        selected: Vec<ItemId>,
        batch: Vec<ItemId>,
        item_starts: Vec<(ItemId, Mbr)>,
        modifiers: Modifiers,
        proportional: bool,
        deferred: bool,
    ) -> Self {
        Self {
            resize_type,
            opposite_point: resize_type.opposite_point(&start_mbr),
            start_mbr,
            current_mbr: start_mbr,
            selected,
            batch,
            item_starts,
            modifiers,
            proportional,
            deferred,
        }
    }

    pub fn resize_type(&self) -> ResizeType {
        self.resize_type
    }

    pub fn opposite_point(&self) -> Point {
        self.opposite_point
    }

    pub fn start_mbr(&self) -> Mbr {
        self.start_mbr
    }

    /// Box at the last accepted pointer move.
    pub fn current_mbr(&self) -> Mbr {
        self.current_mbr
    }

    pub(crate) fn set_current_mbr(&mut self, mbr: Mbr) {
        self.current_mbr = mbr;
    }

    /// Items whose union is the resized box.
    pub fn selected(&self) -> &[ItemId] {
        &self.selected
    }

    /// Selected items plus their followers; everything the drag moves.
    pub fn batch(&self) -> &[ItemId] {
        &self.batch
    }

    /// Box of every batch item when the drag started.
    pub fn item_starts(&self) -> &[(ItemId, Mbr)] {
        &self.item_starts
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Corner drags keep the start aspect ratio.
    pub fn is_proportional(&self) -> bool {
        self.proportional
    }

    /// Items are only updated once, when the drag ends.
    pub fn is_deferred(&self) -> bool {
        self.deferred
    }
}
