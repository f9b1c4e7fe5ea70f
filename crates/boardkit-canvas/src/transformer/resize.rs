//! Resize geometry: the box a drag produces and the matrix describing it.
//!
//! A resize matrix is expressed relative to the top-left corner of the box
//! it was computed from: `scale_x = new_width / old_width` and
//! `translate_x = new_left - old_left` (same on y). Applying it to a box
//! whose top-left is at the origin yields the resized box directly;
//! [`item_world_matrix`] turns it into a world transform for any member of
//! a resized group.

use super::ResizeType;
use crate::geometry::{Matrix, Mbr, Point};

/// Box for a free drag: each resized axis spans from the opposite point to
/// the pointer, whichever side of it the pointer is on, so the box never
/// inverts. Axes the anchor does not resize keep their start extent.
pub fn free_resize_mbr(
    resize_type: ResizeType,
    start: &Mbr,
    opposite: Point,
    pointer: Point,
) -> Mbr {
    let (left, right) = if resize_type.resizes_width() {
        (pointer.x.min(opposite.x), pointer.x.max(opposite.x))
    } else {
        (start.left(), start.right())
    };
    let (top, bottom) = if resize_type.resizes_height() {
        (pointer.y.min(opposite.y), pointer.y.max(opposite.y))
    } else {
        (start.top(), start.bottom())
    };
    Mbr::new(left, top, right, bottom)
}

/// Box for a proportional corner drag.
///
/// Both axes scale by the larger of the pointer's two distance ratios, and
/// the box grows from the opposite corner toward the pointer's side of it.
/// Edge anchors and zero-size start boxes fall back to the free box.
pub fn proportional_resize_mbr(
    resize_type: ResizeType,
    start: &Mbr,
    opposite: Point,
    pointer: Point,
) -> Mbr {
    if !resize_type.is_corner() || start.is_degenerate() {
        return free_resize_mbr(resize_type, start, opposite, pointer);
    }

    let width = start.width();
    let height = start.height();
    let scale = ((pointer.x - opposite.x).abs() / width)
        .max((pointer.y - opposite.y).abs() / height);
    let new_width = width * scale;
    let new_height = height * scale;

    let (left, right) = if pointer.x >= opposite.x {
        (opposite.x, opposite.x + new_width)
    } else {
        (opposite.x - new_width, opposite.x)
    };
    let (top, bottom) = if pointer.y >= opposite.y {
        (opposite.y, opposite.y + new_height)
    } else {
        (opposite.y - new_height, opposite.y)
    };
    Mbr::new(left, top, right, bottom)
}

/// Matrix taking `from` to `to`, relative to `from`'s top-left corner.
///
/// A zero extent on either axis yields a scale of 1 on that axis.
pub fn resize_matrix(from: &Mbr, to: &Mbr) -> Matrix {
    let scale_x = ratio(to.width(), from.width());
    let scale_y = ratio(to.height(), from.height());
    Matrix::new(
        to.left() - from.left(),
        to.top() - from.top(),
        scale_x,
        scale_y,
        0.0,
        0.0,
    )
}

fn ratio(new: f64, old: f64) -> f64 {
    if old.abs() <= f64::EPSILON {
        return 1.0;
    }
    let r = new / old;
    if r.is_finite() {
        r
    } else {
        1.0
    }
}

/// New translation of a group member on one axis.
///
/// `offset` is the member's distance from the group's edge on that axis. It
/// scales with the group, so `translate' = offset * scale - offset +
/// translate`.
pub fn group_item_translation(offset: f64, scale: f64, translate: f64) -> f64 {
    offset * scale - offset + translate
}

/// World transform for an item inside a group that resizes from `group` by
/// `resize` (see [`resize_matrix`]).
///
/// The item scales about its own top-left corner and then moves by its
/// group translation, which keeps its position relative to the group.
pub fn item_world_matrix(resize: &Matrix, group: &Mbr, item: &Mbr) -> Matrix {
    let offset_x = item.left() - group.left();
    let offset_y = item.top() - group.top();
    let translate = Point::new(
        group_item_translation(offset_x, resize.scale_x, resize.translate_x),
        group_item_translation(offset_y, resize.scale_y, resize.translate_y),
    );
    Matrix::scale_about(item.top_left(), resize.scale_x, resize.scale_y, translate)
}

/// Keeps a deferred drag at least `min_extent` away from the opposite
/// point on each resized axis, on the side of the grabbed anchor.
pub fn clamp_deferred_pointer(
    resize_type: ResizeType,
    opposite: Point,
    pointer: Point,
    min_extent: f64,
) -> Point {
    let min_extent = min_extent.max(0.0);
    let x = match resize_type.x_direction() {
        -1 => pointer.x.min(opposite.x - min_extent),
        1 => pointer.x.max(opposite.x + min_extent),
        _ => pointer.x,
    };
    let y = match resize_type.y_direction() {
        -1 => pointer.y.min(opposite.y - min_extent),
        1 => pointer.y.max(opposite.y + min_extent),
        _ => pointer.y,
    };
    Point::new(x, y)
}
