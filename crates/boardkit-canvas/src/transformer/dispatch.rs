//! Per-item application of a resize step.

use super::resize::{item_world_matrix, resize_matrix};
use super::ResizeType;
use crate::geometry::{Matrix, Mbr, Point};
use crate::item::{AspectRatio, BoardItem, ResizePolicy};

/// One resize step shared by every item of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeStep {
    pub resize_type: ResizeType,
    /// Group box when the drag started.
    pub from: Mbr,
    /// Resize matrix from `from` to the live box, relative to `from`'s
    /// top-left corner.
    pub matrix: Matrix,
    /// Corner drags keep the aspect ratio.
    pub proportional: bool,
    /// The aspect-lock modifier is held.
    pub aspect_lock: bool,
}

impl ResizeStep {
    /// Box an item that started the drag at `start` should occupy now.
    pub fn target_of(&self, start: &Mbr) -> Mbr {
        start.transformed(&item_world_matrix(&self.matrix, &self.from, start))
    }
}

/// Brings `item`, whose box was `start` when the drag began, to its place
/// in the current step according to its resize policy.
///
/// Targets are always derived from the start boxes, so an item that cannot
/// take its exact target (a text layout floored at one character) does not
/// skew later steps.
pub fn apply_resize(item: &mut dyn BoardItem, step: &ResizeStep, start: &Mbr) {
    let target = step.target_of(start);
    let current = item.mbr();
    let shift = target.top_left() - current.top_left();

    match item.resize_policy() {
        ResizePolicy::UniformScale => {
            item.apply_matrix(&fit_matrix(&current, &target));
            release_preset(item, step);
        }
        ResizePolicy::TextReflow => reflow_text(item, step.resize_type, &current, &target),
        ResizePolicy::LockedAspectContent => {
            if step.resize_type.is_corner() && step.proportional {
                item.apply_matrix(&fit_matrix(&current, &target));
            } else {
                item.apply_matrix(&Matrix::translation(shift.x, shift.y));
            }
        }
    }
}

/// Transform taking `current` onto `target`, scaling about its top-left.
fn fit_matrix(current: &Mbr, target: &Mbr) -> Matrix {
    let m = resize_matrix(current, target);
    Matrix::scale_about(
        current.top_left(),
        m.scale_x,
        m.scale_y,
        Point::new(m.translate_x, m.translate_y),
    )
}

fn reflow_text(item: &mut dyn BoardItem, resize_type: ResizeType, current: &Mbr, target: &Mbr) {
    let shift = target.top_left() - current.top_left();
    match resize_type {
        ResizeType::Left | ResizeType::Right => {
            if let Some(text) = item.text_reflow_mut() {
                text.set_max_width(target.width());
            }
            item.apply_matrix(&Matrix::translation(shift.x, 0.0));
        }
        ResizeType::Top | ResizeType::Bottom => {
            item.apply_matrix(&Matrix::translation(0.0, shift.y));
        }
        _ => {
            let scale = resize_matrix(current, target).scale_x;
            let uniform = Matrix::scale_about(current.top_left(), scale, scale, shift);
            item.apply_matrix(&uniform);
            if let Some(text) = item.text_reflow_mut() {
                text.set_max_width(target.width());
            }
        }
    }
}

/// A free resize of an item with a fixed preset switches it to a custom
/// ratio, when the item allows that.
fn release_preset(item: &mut dyn BoardItem, step: &ResizeStep) {
    let keeps_ratio = step.resize_type.is_corner() && step.proportional;
    if step.aspect_lock || keeps_ratio || !item.can_change_ratio() {
        return;
    }
    if item.aspect_ratio().is_some_and(|r| r.is_fixed()) {
        tracing::debug!("Item {} switched to a custom aspect ratio", item.id());
        item.set_aspect_ratio(AspectRatio::Custom);
    }
}
