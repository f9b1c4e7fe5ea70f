use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{Mbr, Point};

/// The anchor being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeType {
    Left,
    Top,
    Right,
    Bottom,
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
}

impl ResizeType {
    pub const ALL: [ResizeType; 8] = [
        ResizeType::Left,
        ResizeType::Top,
        ResizeType::Right,
        ResizeType::Bottom,
        ResizeType::LeftTop,
        ResizeType::RightTop,
        ResizeType::LeftBottom,
        ResizeType::RightBottom,
    ];

    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            ResizeType::LeftTop
                | ResizeType::RightTop
                | ResizeType::LeftBottom
                | ResizeType::RightBottom
        )
    }

    /// Which way the dragged side faces horizontally: -1 for left, 1 for
    /// right, 0 when the width is not resized.
    pub fn x_direction(&self) -> i8 {
        match self {
            ResizeType::Left | ResizeType::LeftTop | ResizeType::LeftBottom => -1,
            ResizeType::Right | ResizeType::RightTop | ResizeType::RightBottom => 1,
            ResizeType::Top | ResizeType::Bottom => 0,
        }
    }

    /// Which way the dragged side faces vertically: -1 for top, 1 for
    /// bottom, 0 when the height is not resized.
    pub fn y_direction(&self) -> i8 {
        match self {
            ResizeType::Top | ResizeType::LeftTop | ResizeType::RightTop => -1,
            ResizeType::Bottom | ResizeType::LeftBottom | ResizeType::RightBottom => 1,
            ResizeType::Left | ResizeType::Right => 0,
        }
    }

    pub fn resizes_width(&self) -> bool {
        self.x_direction() != 0
    }

    pub fn resizes_height(&self) -> bool {
        self.y_direction() != 0
    }

    /// The point held fixed while this anchor is dragged.
    ///
    /// Corners oppose the diagonal corner. Edges oppose a corner of the
    /// opposite edge, so that `top` opposes `(left, bottom)`.
    pub fn opposite_point(&self, mbr: &Mbr) -> Point {
        let (x, y) = match self {
            ResizeType::LeftTop => (mbr.right(), mbr.bottom()),
            ResizeType::RightTop => (mbr.left(), mbr.bottom()),
            ResizeType::LeftBottom => (mbr.right(), mbr.top()),
            ResizeType::RightBottom => (mbr.left(), mbr.top()),
            ResizeType::Top => (mbr.left(), mbr.bottom()),
            ResizeType::Bottom => (mbr.left(), mbr.top()),
            ResizeType::Left => (mbr.right(), mbr.top()),
            ResizeType::Right => (mbr.left(), mbr.top()),
        };
        Point::new(x, y)
    }

    /// CSS cursor name shown while hovering or dragging this anchor.
    pub fn cursor(&self) -> &'static str {
        match self {
            ResizeType::Left => "w-resize",
            ResizeType::Right => "e-resize",
            ResizeType::Top => "n-resize",
            ResizeType::Bottom => "s-resize",
            ResizeType::LeftTop | ResizeType::RightBottom => "nwse-resize",
            ResizeType::RightTop | ResizeType::LeftBottom => "nesw-resize",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResizeType::Left => "left",
            ResizeType::Top => "top",
            ResizeType::Right => "right",
            ResizeType::Bottom => "bottom",
            ResizeType::LeftTop => "leftTop",
            ResizeType::RightTop => "rightTop",
            ResizeType::LeftBottom => "leftBottom",
            ResizeType::RightBottom => "rightBottom",
        }
    }
}

impl fmt::Display for ResizeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown resize type: {}", s))
    }
}
