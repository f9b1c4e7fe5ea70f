//! Text items and a fixed-advance layout.
//!
//! [`SimpleTextLayout`] stands in for a rich-text engine: every character
//! advances by the same width, paragraphs are separated by `'\n'`, and when a
//! maximum width is set paragraphs wrap at the character that would overflow
//! it. That is enough to give text items realistic reflow behavior (narrower
//! box, taller text) without a font stack.

use boardkit_core::{finite_or, ItemId};
use serde::{Deserialize, Serialize};

use super::{BoardItem, ResizePolicy, TextReflow};
use crate::geometry::{Matrix, Mbr, Point};

/// Default advance of one character, in layout units.
pub const DEFAULT_CHAR_WIDTH: f64 = 8.0;

/// Default height of one line, in layout units.
pub const DEFAULT_LINE_HEIGHT: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleTextLayout {
    pub text: String,
    pub char_width: f64,
    pub line_height: f64,
    /// Wrapping width; `None` lays every paragraph out on a single line.
    pub max_width: Option<f64>,
}

impl SimpleTextLayout {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            char_width: DEFAULT_CHAR_WIDTH,
            line_height: DEFAULT_LINE_HEIGHT,
            max_width: None,
        }
    }

    fn chars_per_line(&self) -> Option<usize> {
        let max_width = self.max_width?;
        Some(((max_width / self.char_width).floor() as usize).max(1))
    }

    /// Number of laid-out lines. Empty paragraphs still take a line.
    pub fn line_count(&self) -> usize {
        let per_line = self.chars_per_line();
        self.text
            .split('\n')
            .map(|paragraph| {
                let len = paragraph.chars().count();
                match per_line {
                    Some(per_line) => len.div_ceil(per_line).max(1),
                    None => 1,
                }
            })
            .sum()
    }

    pub fn width(&self) -> f64 {
        match self.max_width {
            Some(max_width) => max_width,
            None => {
                let longest = self
                    .text
                    .split('\n')
                    .map(|p| p.chars().count())
                    .max()
                    .unwrap_or(0);
                longest as f64 * self.char_width
            }
        }
    }

    pub fn height(&self) -> f64 {
        self.line_count() as f64 * self.line_height
    }

    /// Sets the wrapping width. It never drops below one character.
    pub fn set_max_width(&mut self, width: f64) {
        if !(width.is_finite() && width > 0.0) {
            tracing::warn!("Ignoring text max width {}", width);
            return;
        }
        self.max_width = Some(width.max(self.char_width));
    }

    pub fn text_length(&self) -> usize {
        self.text.chars().count()
    }
}

/// Text block positioned by its top-left corner.
///
/// `scale` magnifies the layout uniformly; layout widths are in unscaled
/// units, while the [`TextReflow`] methods speak world units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub id: ItemId,
    pub position: Point,
    pub scale: f64,
    pub layout: SimpleTextLayout,
}

impl TextItem {
    pub fn new(id: ItemId, position: Point, text: impl Into<String>) -> Self {
        Self {
            id,
            position,
            scale: 1.0,
            layout: SimpleTextLayout::new(text),
        }
    }

    /// Starts with the layout constrained to `width` world units.
    pub fn with_max_width(mut self, width: f64) -> Self {
        TextReflow::set_max_width(&mut self, width);
        self
    }
}

impl BoardItem for TextItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn mbr(&self) -> Mbr {
        Mbr::from_size(
            self.position.x,
            self.position.y,
            TextReflow::width(self),
            TextReflow::height(self),
        )
    }

    /// Moves the top-left corner through `matrix` and multiplies the text
    /// scale by its horizontal factor.
    fn apply_matrix(&mut self, matrix: &Matrix) {
        self.position = matrix.apply(self.position).finite_or_zero();
        let factor = finite_or(matrix.scale_x, 1.0);
        if factor > 0.0 {
            self.scale *= factor;
        }
    }

    fn kind(&self) -> &'static str {
        "text"
    }

    fn resize_policy(&self) -> ResizePolicy {
        ResizePolicy::TextReflow
    }

    fn text_reflow(&self) -> Option<&dyn TextReflow> {
        Some(self)
    }

    fn text_reflow_mut(&mut self) -> Option<&mut dyn TextReflow> {
        Some(self)
    }
}

impl TextReflow for TextItem {
    fn set_max_width(&mut self, width: f64) {
        if self.scale > 0.0 {
            self.layout.set_max_width(width / self.scale);
        }
    }

    fn width(&self) -> f64 {
        self.layout.width() * self.scale
    }

    fn height(&self) -> f64 {
        self.layout.height() * self.scale
    }

    fn text_length(&self) -> usize {
        self.layout.text_length()
    }
}
