//! Rendered rows.
//!
//! A [`Strip`] is one row of styled text, made of [`Segment`]s, with an
//! optional option index attached so that mouse events on the row can be
//! traced back to the option that produced it.

use unicode_width::UnicodeWidthStr;

use crate::style::Style;

/// A run of text in a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Text content.
    pub text: String,
    /// Style for the text.
    pub style: Style,
}

impl Segment {
    /// Construct a segment.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Width of the segment in terminal cells.
    pub fn cell_length(&self) -> usize {
        self.text.width()
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Strip {
    /// Segments, left to right.
    segments: Vec<Segment>,
    /// Total width in cells.
    cell_length: usize,
    /// Index of the option this row belongs to.
    option: Option<usize>,
}

impl Strip {
    /// Construct a strip from segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        let cell_length = segments.iter().map(Segment::cell_length).sum();
        Self {
            segments,
            cell_length,
            option: None,
        }
    }

    /// An empty row of `width` cells.
    pub fn blank(width: usize, style: Style) -> Self {
        Self::new(vec![Segment::new(" ".repeat(width), style)])
    }

    /// A horizontal rule `width` cells wide.
    pub fn rule(width: usize, style: Style) -> Self {
        Self::new(vec![Segment::new("─".repeat(width), style)])
    }

    /// Pad with spaces in `style` up to `width` cells. Wider strips are left
    /// unchanged.
    pub fn extend_cell_length(mut self, width: usize, style: Style) -> Self {
        if self.cell_length < width {
            let pad = width - self.cell_length;
            self.segments.push(Segment::new(" ".repeat(pad), style));
            self.cell_length = width;
        }
        self
    }

    /// Tag this row with the index of the option that produced it.
    pub fn with_option(mut self, index: usize) -> Self {
        self.option = Some(index);
        self
    }

    /// The option index this row is tagged with.
    pub fn option(&self) -> Option<usize> {
        self.option
    }

    /// Width in cells.
    pub fn cell_length(&self) -> usize {
        self.cell_length
    }

    /// Segments in this row.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The row's text without styling.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn extend() {
        let s = Strip::new(vec![Segment::new("ab", Style::default())])
            .extend_cell_length(5, Style::default().bg(Color::Blue))
            .with_option(3);
        assert_eq!(s.text(), "ab   ");
        assert_eq!(s.cell_length(), 5);
        assert_eq!(s.option(), Some(3));
        assert_eq!(s.segments().len(), 2);

        let wide = Strip::new(vec![Segment::new("界界", Style::default())]);
        assert_eq!(wide.cell_length(), 4);
        assert_eq!(wide.clone().extend_cell_length(3, Style::default()), wide);
        assert_eq!(Strip::blank(3, Style::default()).text(), "   ");
        assert_eq!(Strip::rule(2, Style::default()).cell_length(), 2);
    }
}
