//! Minimal geometry used by widgets: sizes, points and vertical row spans.

/// An `Expanse` is a rectangle that has a width and height but no location.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width in cells.
    pub w: u32,
    /// Height in cells.
    pub h: u32,
}

impl Expanse {
    /// Construct an expanse.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The area of this expanse.
    pub fn area(&self) -> u32 {
        self.w * self.h
    }

    /// True if this expanse can completely enclose the target in both dimensions.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

/// A location in cell coordinates.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Point {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl From<(u32, u32)> for Point {
    fn from(v: (u32, u32)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

/// A half-open range of rows `[start, start + len)`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct RowSpan {
    /// First row.
    pub start: usize,
    /// Number of rows.
    pub len: usize,
}

impl RowSpan {
    /// Construct a span.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// One past the last row.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Does this span contain the row?
    pub fn contains(&self, row: usize) -> bool {
        row >= self.start && row < self.end()
    }

    /// Compute the new start of a viewport of height `self.len` that shows
    /// `target`. With `top`, the target is aligned to the top of the view;
    /// otherwise the view moves the minimum distance needed.
    pub fn scroll_to(&self, target: Self, top: bool) -> usize {
        if top || target.start < self.start {
            return target.start;
        }
        if target.end() > self.end() {
            if target.len >= self.len {
                return target.start;
            }
            return target.end() - self.len;
        }
        self.start
    }
}
