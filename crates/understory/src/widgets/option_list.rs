//! A vertical list of selectable options.
//!
//! Options may span several rows when their prompts wrap. The list keeps a
//! line cache mapping each virtual row to the option and sub-row it shows,
//! extended lazily as options are appended, and an LRU cache of rendered
//! rows keyed by option and style. Both caches are tagged with the list's
//! generation, which is bumped whenever the layout goes stale.

use std::{
    collections::HashMap,
    mem,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    bindings::{Binding, Bindings},
    cache::LruCache,
    config::OptionListConfig,
    dispatch::{self, KeyTarget},
    error::{Error, Result},
    event::{
        Event,
        key::KeyEvent,
        mouse::{Action, Button, MouseEvent},
    },
    geom::{Expanse, RowSpan},
    key_handlers,
    navigation::{self, Direction, Disableable},
    render::Strip,
    style::{OptionListStyles, Style},
    visual::{TextVisual, Visual},
};

/// Source of list identities.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies an option list in notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(u64);

/// Identifies an option within its list. Assigned when the option is added
/// and stable across removals of other options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionKey(u64);

/// Where an option's visual came from.
#[derive(Debug)]
enum VisualSource {
    /// Built from the prompt; rebuilt when wrapping changes.
    Memo(Box<dyn Visual>),
    /// Supplied by the caller; kept as is.
    Custom(Box<dyn Visual>),
}

/// One entry in an [`OptionList`].
#[derive(Debug)]
pub struct OptionItem {
    /// Key assigned by the owning list.
    key: OptionKey,
    /// Prompt text.
    prompt: String,
    /// Optional unique ID.
    id: Option<String>,
    /// Disabled options can't be highlighted by the cursor or selected.
    disabled: bool,
    /// A divider row follows this option.
    divider: bool,
    /// Visual for the option, memoized on first use unless supplied.
    visual: Option<VisualSource>,
}

impl OptionItem {
    /// An enabled option with no ID.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            key: OptionKey::default(),
            prompt: prompt.into(),
            id: None,
            disabled: false,
            divider: false,
            visual: None,
        }
    }

    /// Set the option's ID.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the disabled flag.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Render the option with a custom visual rather than its prompt text.
    pub fn with_visual(mut self, visual: Box<dyn Visual>) -> Self {
        self.visual = Some(VisualSource::Custom(visual));
        self
    }

    /// The key assigned by the owning list.
    pub fn key(&self) -> OptionKey {
        self.key
    }

    /// The prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The option's ID, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Is this option disabled?
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Is this option followed by a divider?
    pub fn has_divider(&self) -> bool {
        self.divider
    }

    /// The option's visual, built from the prompt on first use.
    fn visual(&mut self, wrap: bool) -> &dyn Visual {
        let prompt = &self.prompt;
        match self
            .visual
            .get_or_insert_with(|| VisualSource::Memo(Box::new(TextVisual::new(prompt.clone(), wrap))))
        {
            VisualSource::Memo(v) | VisualSource::Custom(v) => &**v,
        }
    }

    /// Drop a visual memoized from the prompt. Custom visuals are kept.
    fn forget_visual(&mut self) {
        if matches!(self.visual, Some(VisualSource::Memo(_))) {
            self.visual = None;
        }
    }
}

impl Disableable for OptionItem {
    fn disabled(&self) -> bool {
        self.disabled
    }
}

impl From<&str> for OptionItem {
    fn from(prompt: &str) -> Self {
        Self::new(prompt)
    }
}

impl From<String> for OptionItem {
    fn from(prompt: String) -> Self {
        Self::new(prompt)
    }
}

/// Payload for option list notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMessage {
    /// The list that posted the message.
    pub list: ListId,
    /// The option concerned.
    pub option: OptionKey,
    /// The option's ID, if it has one.
    pub option_id: Option<String>,
    /// Index of the option at the time of posting.
    pub index: usize,
}

/// Notifications posted by an [`OptionList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionListMessage {
    /// The highlight moved to an option.
    Highlighted(OptionMessage),
    /// An option was selected.
    Selected(OptionMessage),
}

impl OptionListMessage {
    /// The message payload.
    pub fn payload(&self) -> &OptionMessage {
        match self {
            Self::Highlighted(m) | Self::Selected(m) => m,
        }
    }
}

/// Row layout of the options at the current width.
#[derive(Debug, Default)]
struct LineCache {
    /// `(option index, sub-row)` for every virtual row.
    lines: Vec<(usize, usize)>,
    /// Rows used by each materialized option, including its divider.
    heights: Vec<usize>,
    /// First row of each materialized option.
    index_to_line: Vec<usize>,
    /// Generation the layout was built in.
    generation: u64,
}

impl LineCache {
    /// Empty the cache if it was built in another generation.
    fn sync(&mut self, generation: u64) {
        if self.generation != generation {
            self.clear();
            self.generation = generation;
        }
    }

    /// Drop everything.
    fn clear(&mut self) {
        self.lines.clear();
        self.heights.clear();
        self.index_to_line.clear();
    }

    /// Number of options laid out so far.
    fn materialized(&self) -> usize {
        self.heights.len()
    }

    /// Drop the layout from option `index` onwards.
    fn truncate(&mut self, index: usize) {
        if let Some(&line) = self.index_to_line.get(index) {
            self.lines.truncate(line);
            self.heights.truncate(index);
            self.index_to_line.truncate(index);
        }
    }

    /// Append the rows for the next option.
    fn push(&mut self, index: usize, height: usize) {
        self.index_to_line.push(self.lines.len());
        self.heights.push(height);
        self.lines.extend((0..height).map(|row| (index, row)));
    }
}

/// A scrollable list of options with a keyboard-driven highlight.
pub struct OptionList {
    /// Identity used in notifications.
    list_id: ListId,
    /// Options in display order.
    options: Vec<OptionItem>,
    /// Option ID to option key.
    ids: HashMap<String, OptionKey>,
    /// Option key to index in `options`.
    indices: HashMap<OptionKey, usize>,
    /// Next option key to hand out.
    next_key: u64,
    /// The highlighted option.
    highlighted: Option<usize>,
    /// The option under the mouse.
    hover: Option<usize>,
    /// Viewport size.
    size: Expanse,
    /// First visible row.
    scroll_offset: usize,
    /// Does the list have focus?
    focused: bool,
    /// Wrap long prompts.
    wrap: bool,
    /// Styles for each row state.
    styles: OptionListStyles,
    /// Row layout.
    line_cache: LineCache,
    /// Rendered rows by option and style.
    render_cache: LruCache<(OptionKey, Style), Vec<Strip>>,
    /// Bumped whenever cached layout or rendering goes stale.
    generation: u64,
    /// Pending notifications.
    messages: Vec<OptionListMessage>,
    /// Key bindings.
    bindings: Bindings,
}

#[key_handlers]
impl OptionList {
    /// Construct an empty list with default settings.
    pub fn new() -> Result<Self> {
        Self::from_config(&OptionListConfig::default())
    }

    /// Construct an empty list from configuration.
    pub fn from_config(cfg: &OptionListConfig) -> Result<Self> {
        Ok(Self {
            list_id: ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)),
            options: Vec::new(),
            ids: HashMap::new(),
            indices: HashMap::new(),
            next_key: 1,
            highlighted: None,
            hover: None,
            size: Expanse::default(),
            scroll_offset: 0,
            focused: false,
            wrap: cfg.wrap,
            styles: OptionListStyles::default(),
            line_cache: LineCache::default(),
            render_cache: LruCache::new(cfg.render_cache_size),
            generation: 0,
            messages: Vec::new(),
            bindings: Self::default_bindings()?,
        })
    }

    /// The list's navigation bindings. None are shown in help.
    pub fn default_bindings() -> Result<Bindings> {
        Bindings::new(
            [
                ("down", "cursor_down", "Down"),
                ("end", "last", "Last"),
                ("enter", "select", "Select"),
                ("home", "first", "First"),
                ("pagedown", "page_down", "Page Down"),
                ("pageup", "page_up", "Page Up"),
                ("up", "cursor_up", "Up"),
            ]
            .map(|b| Binding::from(b).with_show(false)),
        )
    }

    /// Identity used in this list's notifications.
    pub fn id(&self) -> ListId {
        self.list_id
    }

    /// Mark every cache as stale.
    fn invalidate(&mut self) {
        self.generation += 1;
        tracing::trace!("option list generation {}", self.generation);
    }

    /// Append options. A `None` entry puts a divider after the preceding
    /// option. Fails on the first option whose ID is already in use; that
    /// option and the entries after it are not added.
    pub fn add_options<I>(&mut self, options: I) -> Result<()>
    where
        I: IntoIterator<Item = Option<OptionItem>>,
    {
        for entry in options {
            match entry {
                Some(option) => self.push_option(option)?,
                None => self.set_trailing_divider(),
            }
        }
        Ok(())
    }

    /// Append a single option.
    pub fn add_option(&mut self, option: impl Into<OptionItem>) -> Result<()> {
        self.push_option(option.into())
    }

    /// Put a divider after the last option.
    pub fn add_divider(&mut self) {
        self.set_trailing_divider();
    }

    /// Register and append an option.
    fn push_option(&mut self, mut option: OptionItem) -> Result<()> {
        if let Some(id) = &option.id
            && self.ids.contains_key(id)
        {
            return Err(Error::DuplicateId(id.clone()));
        }
        option.key = OptionKey(self.next_key);
        self.next_key += 1;
        if let Some(id) = &option.id {
            self.ids.insert(id.clone(), option.key);
        }
        self.indices.insert(option.key, self.options.len());
        self.options.push(option);
        Ok(())
    }

    /// Mark the last option as followed by a divider.
    fn set_trailing_divider(&mut self) {
        let Some(last) = self.options.last_mut() else {
            return;
        };
        if last.divider {
            return;
        }
        last.divider = true;
        let index = self.options.len() - 1;
        if index < self.line_cache.materialized() {
            tracing::trace!("divider on laid out option {}, truncating line cache", index);
            self.line_cache.truncate(index);
            self.render_cache.clear();
        }
    }

    /// Remove all options.
    pub fn clear_options(&mut self) {
        self.options.clear();
        self.ids.clear();
        self.indices.clear();
        self.highlighted = None;
        self.hover = None;
        self.scroll_offset = 0;
        self.invalidate();
    }

    /// Remove the option with the given ID.
    pub fn remove_option(&mut self, id: &str) -> Result<()> {
        let index = self.get_option_index(id)?;
        self.remove_option_at_index(index)
    }

    /// Remove the option at an index. Later options move up by one.
    pub fn remove_option_at_index(&mut self, index: usize) -> Result<()> {
        if index >= self.options.len() {
            return Err(Error::OptionDoesNotExist(format!("index {index}")));
        }
        let option = self.options.remove(index);
        for later in &self.options[index..] {
            if let Some(i) = self.indices.get_mut(&later.key) {
                *i -= 1;
            }
        }
        self.indices.remove(&option.key);
        if let Some(id) = &option.id {
            self.ids.remove(id);
        }
        self.hover = None;
        self.highlighted = self.validate_highlighted(self.highlighted);
        self.invalidate();
        Ok(())
    }

    /// The option with the given ID.
    pub fn get_option(&self, id: &str) -> Result<&OptionItem> {
        let index = self.get_option_index(id)?;
        self.get_option_at_index(index)
    }

    /// Index of the option with the given ID.
    pub fn get_option_index(&self, id: &str) -> Result<usize> {
        self.ids
            .get(id)
            .and_then(|key| self.indices.get(key))
            .copied()
            .ok_or_else(|| Error::OptionDoesNotExist(format!("id {id:?}")))
    }

    /// The option at an index.
    pub fn get_option_at_index(&self, index: usize) -> Result<&OptionItem> {
        self.options
            .get(index)
            .ok_or_else(|| Error::OptionDoesNotExist(format!("index {index}")))
    }

    /// Index of the option with the given key.
    pub fn index_of(&self, key: OptionKey) -> Option<usize> {
        self.indices.get(&key).copied()
    }

    /// All options, in order.
    pub fn options(&self) -> &[OptionItem] {
        &self.options
    }

    /// Number of options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Set the disabled flag of the option at an index. Disabling the
    /// highlighted option moves the highlight to the next enabled option, or
    /// clears it if there is none.
    fn set_option_disabled(&mut self, index: usize, disabled: bool) -> Result<()> {
        let option = self
            .options
            .get_mut(index)
            .ok_or_else(|| Error::OptionDoesNotExist(format!("index {index}")))?;
        option.disabled = disabled;
        if disabled && self.highlighted == Some(index) {
            let next =
                navigation::find_next_enabled(&self.options, Some(index), Direction::Forward, false);
            self.set_highlighted(next);
        }
        Ok(())
    }

    /// Enable the option at an index.
    pub fn enable_option_at_index(&mut self, index: usize) -> Result<()> {
        self.set_option_disabled(index, false)
    }

    /// Disable the option at an index.
    pub fn disable_option_at_index(&mut self, index: usize) -> Result<()> {
        self.set_option_disabled(index, true)
    }

    /// Enable the option with the given ID.
    pub fn enable_option(&mut self, id: &str) -> Result<()> {
        let index = self.get_option_index(id)?;
        self.enable_option_at_index(index)
    }

    /// Disable the option with the given ID.
    pub fn disable_option(&mut self, id: &str) -> Result<()> {
        let index = self.get_option_index(id)?;
        self.disable_option_at_index(index)
    }

    /// The highlighted option index.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// The highlighted option.
    pub fn highlighted_option(&self) -> Option<&OptionItem> {
        self.highlighted.and_then(|i| self.options.get(i))
    }

    /// Clamp a highlight value into the valid range.
    fn validate_highlighted(&self, highlighted: Option<usize>) -> Option<usize> {
        let last = self.options.len().checked_sub(1)?;
        highlighted.map(|h| h.min(last))
    }

    /// Move the highlight. Out of range values are clamped to the last
    /// option. A change posts [`OptionListMessage::Highlighted`] and scrolls
    /// an enabled option into view.
    pub fn set_highlighted(&mut self, highlighted: Option<usize>) {
        let highlighted = self.validate_highlighted(highlighted);
        if highlighted == self.highlighted {
            return;
        }
        self.highlighted = highlighted;
        let Some(index) = highlighted else {
            return;
        };
        if !self.options[index].disabled {
            self.scroll_to_highlight(false);
        }
        let message = self.message_for(index);
        self.messages.push(OptionListMessage::Highlighted(message));
    }

    /// Build a notification payload for the option at `index`.
    fn message_for(&self, index: usize) -> OptionMessage {
        let option = &self.options[index];
        OptionMessage {
            list: self.list_id,
            option: option.key,
            option_id: option.id.clone(),
            index,
        }
    }

    /// Drain pending notifications.
    pub fn take_messages(&mut self) -> Vec<OptionListMessage> {
        mem::take(&mut self.messages)
    }

    /// The option under the mouse.
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Does the list have focus?
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Set focus. The highlighted option is drawn in the blurred style while
    /// the list is not focused.
    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Current styles.
    pub fn styles(&self) -> &OptionListStyles {
        &self.styles
    }

    /// Replace the styles.
    pub fn set_styles(&mut self, styles: OptionListStyles) {
        self.styles = styles;
        self.invalidate();
    }

    /// Switch prompt wrapping. Visuals built from prompts are rebuilt;
    /// custom visuals are untouched.
    pub fn set_wrap(&mut self, wrap: bool) {
        if wrap == self.wrap {
            return;
        }
        self.wrap = wrap;
        for option in &mut self.options {
            option.forget_visual();
        }
        self.invalidate();
    }

    /// Resize the viewport.
    pub fn resize(&mut self, size: Expanse) {
        if size == self.size {
            return;
        }
        self.size = size;
        self.invalidate();
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Viewport size.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// First visible row.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Largest valid scroll offset.
    fn max_scroll(&mut self) -> usize {
        self.virtual_height().saturating_sub(self.size.h as usize)
    }

    /// Scroll so that `row` is the first visible row, clamped to the content.
    pub fn scroll_to(&mut self, row: usize) {
        self.scroll_offset = row.min(self.max_scroll());
    }

    /// Bring the highlighted option into view. With `top` it is aligned to
    /// the top of the viewport.
    pub fn scroll_to_highlight(&mut self, top: bool) {
        let Some(index) = self.highlighted else {
            return;
        };
        if self.size.h == 0 {
            return;
        }
        self.update_lines();
        let (Some(&line), Some(&height)) = (
            self.line_cache.index_to_line.get(index),
            self.line_cache.heights.get(index),
        ) else {
            return;
        };
        let height = height - usize::from(self.options[index].divider);
        let view = RowSpan::new(self.scroll_offset, self.size.h as usize);
        let target = view.scroll_to(RowSpan::new(line, height), top);
        self.scroll_to(target);
    }

    /// Extend the line cache over any options not yet laid out.
    fn update_lines(&mut self) {
        self.line_cache.sync(self.generation);
        let start = self.line_cache.materialized();
        if start >= self.options.len() {
            return;
        }
        let width = self.size.w as usize;
        for index in start..self.options.len() {
            let option = &mut self.options[index];
            let divider = usize::from(option.divider);
            let height = option.visual(self.wrap).height(width) + divider;
            self.line_cache.push(index, height);
        }
        tracing::trace!(
            "line cache extended from option {} to {} ({} rows)",
            start,
            self.options.len(),
            self.line_cache.lines.len()
        );
    }

    /// `(option index, sub-row)` for each virtual row.
    pub fn lines(&mut self) -> &[(usize, usize)] {
        self.update_lines();
        &self.line_cache.lines
    }

    /// Total virtual rows. A divider after the final option is not counted.
    pub fn virtual_height(&mut self) -> usize {
        self.update_lines();
        let trailing = self.options.last().is_some_and(|o| o.divider);
        self.line_cache.lines.len() - usize::from(trailing)
    }

    /// Rendered rows for an option in a style.
    fn option_render(&mut self, index: usize, style: Style) -> &[Strip] {
        self.render_cache.sync(self.generation);
        let key = (self.options[index].key, style);
        if !self.render_cache.contains(&key) {
            let width = self.size.w as usize;
            let separator = self.styles.separator;
            let option = &mut self.options[index];
            let mut strips: Vec<Strip> = option
                .visual(self.wrap)
                .to_strips(width, style)
                .into_iter()
                .map(|s| s.extend_cell_length(width, style).with_option(index))
                .collect();
            if option.divider {
                strips.push(Strip::rule(width, separator));
            }
            self.render_cache.insert(key, strips);
        }
        self.render_cache.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Style for an option given its state.
    fn option_style(&self, index: usize) -> Style {
        if self.options[index].disabled {
            self.styles.disabled
        } else if self.highlighted == Some(index) {
            if self.focused {
                self.styles.highlighted
            } else {
                self.styles.highlighted_blurred
            }
        } else if self.hover == Some(index) {
            self.styles.hover
        } else {
            self.styles.option
        }
    }

    /// Render viewport row `y`. Rows past the end of the content are blank.
    pub fn render_line(&mut self, y: usize) -> Strip {
        let width = self.size.w as usize;
        self.update_lines();
        let Some(&(index, offset)) = self.line_cache.lines.get(self.scroll_offset + y) else {
            return Strip::blank(width, Style::default());
        };
        let style = self.option_style(index);
        self.option_render(index, style)
            .get(offset)
            .cloned()
            .unwrap_or_else(|| Strip::blank(width, style))
    }

    /// Render every viewport row.
    pub fn render(&mut self) -> Vec<Strip> {
        (0..self.size.h as usize).map(|y| self.render_line(y)).collect()
    }

    /// The widest option's preferred width.
    pub fn content_width(&mut self, container_width: usize) -> usize {
        let wrap = self.wrap;
        self.options
            .iter_mut()
            .map(|o| o.visual(wrap).optimal_width(container_width))
            .max()
            .unwrap_or(0)
    }

    /// Rows needed to show every option at `width`.
    pub fn content_height(&mut self, width: usize) -> usize {
        let wrap = self.wrap;
        let count = self.options.len();
        self.options
            .iter_mut()
            .enumerate()
            .map(|(i, o)| {
                let divider = o.divider && i + 1 < count;
                o.visual(wrap).height(width) + usize::from(divider)
            })
            .sum()
    }

    /// The option drawn at viewport row `y`. Divider rows belong to no option.
    fn option_at_row(&mut self, y: usize) -> Option<usize> {
        self.render_line(y).option()
    }

    /// Handle a mouse event located relative to the list. Returns true if the
    /// event was consumed.
    pub fn on_mouse(&mut self, event: &MouseEvent) -> bool {
        let y = event.location.y as usize;
        match (event.action, event.button) {
            (Action::Down, Button::Left) => {
                let Some(index) = self.option_at_row(y) else {
                    return false;
                };
                if self.options[index].disabled {
                    return false;
                }
                self.set_highlighted(Some(index));
                self.action_select();
                true
            }
            (Action::Moved, _) => {
                self.hover = self.option_at_row(y);
                true
            }
            (Action::ScrollDown, _) => {
                self.scroll_to(self.scroll_offset + 1);
                true
            }
            (Action::ScrollUp, _) => {
                self.scroll_to(self.scroll_offset.saturating_sub(1));
                true
            }
            _ => false,
        }
    }

    /// Offer an input event. A terminal resize sizes the viewport to the
    /// terminal; focus changes switch the highlight style. Returns true if
    /// the event was consumed.
    pub fn on_event(&mut self, event: &Event) -> Result<bool> {
        match event {
            Event::Key(k) => dispatch::handle_key(self, &KeyEvent::from(*k)),
            Event::Mouse(m) => Ok(self.on_mouse(m)),
            Event::Resize(size) => {
                self.resize(*size);
                Ok(true)
            }
            Event::FocusGained => {
                self.set_focus(true);
                Ok(true)
            }
            Event::FocusLost => {
                self.set_focus(false);
                Ok(true)
            }
            Event::Paste(_) => Ok(false),
        }
    }

    /// The mouse left the list.
    pub fn on_leave(&mut self) {
        self.hover = None;
    }

    /// Move the highlight to the previous enabled option, wrapping.
    pub fn action_cursor_up(&mut self) {
        self.move_cursor(Direction::Backward);
    }

    /// Move the highlight to the next enabled option, wrapping.
    pub fn action_cursor_down(&mut self) {
        self.move_cursor(Direction::Forward);
    }

    /// Step the highlight. Nothing happens if no option is enabled.
    fn move_cursor(&mut self, direction: Direction) {
        if let Some(next) =
            navigation::find_next_enabled(&self.options, self.highlighted, direction, false)
        {
            self.set_highlighted(Some(next));
        }
    }

    /// Move the highlight to the first enabled option.
    pub fn action_first(&mut self) {
        self.set_highlighted(navigation::find_first_enabled(&self.options));
    }

    /// Move the highlight to the last enabled option.
    pub fn action_last(&mut self) {
        self.set_highlighted(navigation::find_last_enabled(&self.options));
    }

    /// Move the highlight up by a viewport's worth of rows.
    pub fn action_page_up(&mut self) {
        self.move_page(Direction::Backward);
    }

    /// Move the highlight down by a viewport's worth of rows.
    pub fn action_page_down(&mut self) {
        self.move_page(Direction::Forward);
    }

    /// Move by a page of rows, then settle on the nearest enabled option in
    /// the direction of travel without wrapping.
    fn move_page(&mut self, direction: Direction) {
        self.update_lines();
        let lines = &self.line_cache.lines;
        let Some(last_row) = lines.len().checked_sub(1) else {
            return;
        };
        let height = self.size.h as usize;
        let current = self.highlighted.unwrap_or(0);
        let row = self.line_cache.index_to_line.get(current).copied().unwrap_or(0);
        let target_row = match direction {
            Direction::Forward => (row + height).min(last_row),
            Direction::Backward => row.saturating_sub(height),
        };
        let anchor = lines[target_row].0;
        if let Some(target) =
            navigation::find_next_enabled_no_wrap(&self.options, Some(anchor), direction, true)
        {
            self.set_highlighted(Some(target));
        }
    }

    /// Select the highlighted option, if it is enabled.
    pub fn action_select(&mut self) {
        let Some(index) = self.highlighted else {
            return;
        };
        if !self.options[index].disabled {
            let message = self.message_for(index);
            self.messages.push(OptionListMessage::Selected(message));
        }
    }
}

impl KeyTarget for OptionList {
    fn bindings(&self) -> Option<&Bindings> {
        Some(&self.bindings)
    }
}
