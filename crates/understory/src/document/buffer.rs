use ropey::Rope;

use super::edit::EditResult;

/// A location in a document, as a row and a char offset within that row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// Row index (0-based).
    pub row: usize,
    /// Char offset within the row (0-based).
    pub column: usize,
}

impl Location {
    /// Construct a location.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The location reached by writing `text` starting here.
    pub fn advance(self, text: &str) -> Self {
        let mut out = self;
        for (i, part) in text.split('\n').enumerate() {
            let n = part.chars().count();
            if i == 0 {
                out.column = out.column.saturating_add(n);
            } else {
                out.row = out.row.saturating_add(1);
                out.column = n;
            }
        }
        out
    }
}

impl From<(usize, usize)> for Location {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

/// Rope-backed text document. Only `\n` breaks lines.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Document contents.
    rope: Rope,
}

impl Document {
    /// Create a document from an initial string.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// The full document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Number of rows. An empty document has one row.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of a row in chars, excluding its newline.
    pub fn line_len(&self, row: usize) -> usize {
        let row = row.min(self.line_count().saturating_sub(1));
        let len = self.rope.line(row).len_chars();
        if row + 1 < self.line_count() {
            len.saturating_sub(1)
        } else {
            len
        }
    }

    /// The text of a row without its newline.
    pub fn line(&self, row: usize) -> String {
        let row = row.min(self.line_count().saturating_sub(1));
        let mut text = self.rope.line(row).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        text
    }

    /// The location just past the last character.
    pub fn end(&self) -> Location {
        let row = self.line_count().saturating_sub(1);
        Location::new(row, self.line_len(row))
    }

    /// Clamp a location into the document.
    pub fn clamp(&self, loc: Location) -> Location {
        let row = loc.row.min(self.line_count().saturating_sub(1));
        Location::new(row, loc.column.min(self.line_len(row)))
    }

    /// Convert a rope char index to a location.
    fn location(&self, index: usize) -> Location {
        let index = index.min(self.rope.len_chars());
        let row = self.rope.char_to_line(index);
        Location::new(row, index - self.rope.line_to_char(row))
    }

    /// Convert a location to a rope char index.
    fn char_index(&self, loc: Location) -> usize {
        let loc = self.clamp(loc);
        self.rope.line_to_char(loc.row).saturating_add(loc.column)
    }

    /// Order and clamp a pair of locations.
    fn span(&self, from: Location, to: Location) -> (Location, Location) {
        let (a, b) = if from <= to { (from, to) } else { (to, from) };
        (self.clamp(a), self.clamp(b))
    }

    /// The text between two locations, in either order.
    pub fn get_text_range(&self, from: Location, to: Location) -> String {
        let (a, b) = self.span(from, to);
        self.rope
            .slice(self.char_index(a)..self.char_index(b))
            .to_string()
    }

    /// Replace the text between two locations, returning where the inserted
    /// text ends and what it replaced.
    pub fn replace_range(&mut self, from: Location, to: Location, text: &str) -> EditResult {
        let (a, b) = self.span(from, to);
        let start = self.char_index(a);
        let end = self.char_index(b);
        let replaced_text = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        self.rope.insert(start, text);
        EditResult {
            end_location: self.location(start + text.chars().count()),
            replaced_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::{char, prelude::*};

    use super::*;

    #[test]
    fn lines() {
        let d = Document::new("ab\ncde\n");
        assert_eq!(d.line_count(), 3);
        assert_eq!(d.line(1), "cde");
        assert_eq!(d.line_len(1), 3);
        assert_eq!(d.line(2), "");
        assert_eq!(d.end(), Location::new(2, 0));
        assert_eq!(d.clamp(Location::new(0, 10)), Location::new(0, 2));
        assert_eq!(d.clamp(Location::new(9, 9)), Location::new(2, 0));
    }

    #[test]
    fn replace() {
        let mut d = Document::new("hello\nworld");
        let r = d.replace_range(Location::new(0, 1), Location::new(1, 2), "ipp\no");
        assert_eq!(d.text(), "hipp\norld");
        assert_eq!(r.replaced_text, "ello\nwo");
        assert_eq!(r.end_location, Location::new(1, 1));

        let r = d.replace_range(Location::new(1, 4), Location::new(1, 0), "");
        assert_eq!(r.replaced_text, "orld");
        assert_eq!(d.text(), "hipp\n");
        assert_eq!(d.get_text_range(Location::new(0, 3), Location::new(1, 0)), "p\n");
    }

    #[test]
    fn only_newline_breaks_lines() {
        for text in ["a\rb", "a\r\nb", "x\u{2028}y\u{85}z"] {
            let mut d = Document::new("");
            let r = d.replace_range(Location::default(), Location::default(), text);
            assert_eq!(r.end_location, Location::default().advance(text));
            assert_eq!(d.line_count(), text.matches('\n').count() + 1);

            let r = d.replace_range(Location::default(), r.end_location, "");
            assert_eq!(r.replaced_text, text);
            assert_eq!(d.text(), "");
        }
    }

    proptest! {
        #[test]
        fn replace_range_matches_string(
            text in text_strategy(),
            insert in text_strategy(),
            start in 0usize..=60,
            end in 0usize..=60,
        ) {
            let n = text.chars().count();
            let (a, b) = (start.min(end).min(n), start.max(end).min(n));
            let mut d = Document::new(&text);
            let r = d.replace_range(location_of(&text, a), location_of(&text, b), &insert);

            let expected: String = text
                .chars()
                .take(a)
                .chain(insert.chars())
                .chain(text.chars().skip(b))
                .collect();
            prop_assert_eq!(d.text(), expected.clone());
            prop_assert_eq!(r.end_location, location_of(&expected, a + insert.chars().count()));
        }
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        let chars = prop_oneof![
            Just('\n'),
            Just('\r'),
            Just('\u{2028}'),
            Just('é'),
            Just('界'),
            char::range('a', 'z'),
        ];
        prop::collection::vec(chars, 0..30).prop_map(|v| v.into_iter().collect::<String>())
    }

    fn location_of(text: &str, index: usize) -> Location {
        Location::default().advance(&text.chars().take(index).collect::<String>())
    }
}
