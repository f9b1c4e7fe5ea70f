//! Anchor hit-testing.
//!
//! The hit radius is given in screen pixels and converted to world units
//! with the camera scale, so anchors keep the same on-screen size at any
//! zoom.

use super::ResizeType;
use crate::geometry::{Mbr, Point};

/// World-space hit radius for a pixel radius at `camera_scale`.
///
/// Non-positive or non-finite scales are treated as 1.
pub fn anchor_threshold(anchor_radius_px: f64, camera_scale: f64) -> f64 {
    let scale = if camera_scale.is_finite() && camera_scale > 0.0 {
        camera_scale
    } else {
        tracing::warn!("Invalid camera scale {} for anchor detection", camera_scale);
        1.0
    };
    anchor_radius_px.max(0.0) / scale
}

/// Which anchor of `mbr`, if any, is under `point` (world coordinates).
///
/// Corners are tested first by distance. Otherwise the nearest point on the
/// boundary decides, classified top, right, bottom, left in that order.
pub fn get_resize_type(
    point: Point,
    camera_scale: f64,
    mbr: &Mbr,
    anchor_radius_px: f64,
) -> Option<ResizeType> {
    let point = point.finite_or_zero();
    let threshold = anchor_threshold(anchor_radius_px, camera_scale);

    let [lt, rt, rb, lb] = mbr.corners();
    let corners = [
        (lt, ResizeType::LeftTop),
        (rt, ResizeType::RightTop),
        (rb, ResizeType::RightBottom),
        (lb, ResizeType::LeftBottom),
    ];
    if let Some((_, corner)) = corners
        .iter()
        .find(|(c, _)| c.distance_to(&point) <= threshold)
    {
        return Some(*corner);
    }

    let edge = mbr.nearest_edge_point_to(point);
    if edge.distance_to(&point) > threshold {
        return None;
    }
    if edge.y == mbr.top() {
        Some(ResizeType::Top)
    } else if edge.x == mbr.right() {
        Some(ResizeType::Right)
    } else if edge.y == mbr.bottom() {
        Some(ResizeType::Bottom)
    } else if edge.x == mbr.left() {
        Some(ResizeType::Left)
    } else {
        None
    }
}

/// Anchor detection for text boxes, which have no top or bottom handles.
///
/// A hit on the top or bottom edge becomes the corner on the pointer's side
/// of the box's horizontal center.
pub fn get_text_resize_type(
    point: Point,
    camera_scale: f64,
    mbr: &Mbr,
    anchor_radius_px: f64,
) -> Option<ResizeType> {
    let point = point.finite_or_zero();
    let left_half = point.x < mbr.center().x;
    match get_resize_type(point, camera_scale, mbr, anchor_radius_px)? {
        ResizeType::Top if left_half => Some(ResizeType::LeftTop),
        ResizeType::Top => Some(ResizeType::RightTop),
        ResizeType::Bottom if left_half => Some(ResizeType::LeftBottom),
        ResizeType::Bottom => Some(ResizeType::RightBottom),
        other => Some(other),
    }
}
