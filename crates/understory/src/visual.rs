//! Visuals measure and render content at a given width.

use std::fmt::Debug;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::{
    render::{Segment, Strip},
    style::Style,
};

/// Something that can be laid out into rows.
pub trait Visual: Debug {
    /// Number of rows needed at `width` cells.
    fn height(&self, width: usize) -> usize;

    /// The width this visual would like, given the space available.
    fn optimal_width(&self, container_width: usize) -> usize;

    /// Render into rows at `width` cells.
    fn to_strips(&self, width: usize, style: Style) -> Vec<Strip>;
}

/// Truncate a line to at most `width` cells without splitting a grapheme.
fn truncate(line: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, g) in line.grapheme_indices(true) {
        used += g.width();
        if used > width {
            return &line[..i];
        }
    }
    line
}

/// Plain text, optionally word-wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextVisual {
    /// The text.
    text: String,
    /// Wrap long lines rather than truncating them.
    wrap: bool,
}

impl TextVisual {
    /// Construct a text visual.
    pub fn new(text: impl Into<String>, wrap: bool) -> Self {
        Self {
            text: text.into(),
            wrap,
        }
    }

    /// Lay the text out into lines at `width` cells.
    pub fn lines(&self, width: usize) -> Vec<String> {
        if self.wrap {
            textwrap::wrap(&self.text, width.max(1))
                .into_iter()
                .map(|l| l.into_owned())
                .collect()
        } else {
            self.text
                .split('\n')
                .map(|l| truncate(l, width).to_string())
                .collect()
        }
    }
}

impl Visual for TextVisual {
    fn height(&self, width: usize) -> usize {
        self.lines(width).len().max(1)
    }

    fn optimal_width(&self, _container_width: usize) -> usize {
        self.text.split('\n').map(|l| l.width()).max().unwrap_or(0)
    }

    fn to_strips(&self, width: usize, style: Style) -> Vec<Strip> {
        self.lines(width)
            .into_iter()
            .map(|l| Strip::new(vec![Segment::new(l, style)]))
            .collect()
    }
}
