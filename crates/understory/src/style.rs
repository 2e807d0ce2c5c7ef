//! Text styles for rendered rows.

/// A terminal color.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    /// Black.
    Black,
    /// Dark grey.
    DarkGrey,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Blue.
    Blue,
    /// Magenta.
    Magenta,
    /// Cyan.
    Cyan,
    /// White.
    White,
    /// Grey.
    Grey,
    /// RGB color.
    Rgb {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
    },
}

/// A text attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attr {
    /// Bold text.
    Bold,
    /// Dim text.
    Dim,
    /// Italic text.
    Italic,
    /// Reversed foreground and background.
    Reverse,
    /// Underlined text.
    Underline,
}

/// A set of active text attributes.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct AttrSet {
    /// Bold flag.
    pub bold: bool,
    /// Dim flag.
    pub dim: bool,
    /// Italic flag.
    pub italic: bool,
    /// Reverse flag.
    pub reverse: bool,
    /// Underline flag.
    pub underline: bool,
}

impl AttrSet {
    /// Is this attribute set empty?
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// A helper for progressive construction of attribute sets.
    pub fn with(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::Dim => self.dim = true,
            Attr::Italic => self.italic = true,
            Attr::Reverse => self.reverse = true,
            Attr::Underline => self.underline = true,
        };
        self
    }
}

/// Foreground, background and attributes for a run of text. Unset colors
/// inherit from whatever the text is drawn over.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Text attributes.
    pub attrs: AttrSet,
}

impl Style {
    /// Set the foreground color.
    pub fn fg(mut self, c: Color) -> Self {
        self.fg = Some(c);
        self
    }

    /// Set the background color.
    pub fn bg(mut self, c: Color) -> Self {
        self.bg = Some(c);
        self
    }

    /// Add an attribute.
    pub fn attr(mut self, a: Attr) -> Self {
        self.attrs = self.attrs.with(a);
        self
    }
}

/// Styles used by the option list for each row state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionListStyles {
    /// Plain options.
    pub option: Style,
    /// Disabled options.
    pub disabled: Style,
    /// The highlighted option while the list has focus.
    pub highlighted: Style,
    /// The highlighted option while the list does not have focus.
    pub highlighted_blurred: Style,
    /// The option under the mouse.
    pub hover: Style,
    /// Divider rows.
    pub separator: Style,
}

impl Default for OptionListStyles {
    fn default() -> Self {
        Self {
            option: Style::default(),
            disabled: Style::default().fg(Color::DarkGrey),
            highlighted: Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .attr(Attr::Bold),
            highlighted_blurred: Style::default().bg(Color::DarkGrey),
            hover: Style::default().bg(Color::Grey),
            separator: Style::default().fg(Color::DarkGrey).attr(Attr::Dim),
        }
    }
}
