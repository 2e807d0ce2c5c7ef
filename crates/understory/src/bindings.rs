//! Binding tables map key names to named actions.
//!
//! A binding key may name several keys at once, separated by commas
//! (`"down,j"`). Tables expand these into one [`Binding`] per key, and later
//! entries for the same key replace earlier ones in place.

use std::{collections::HashMap, sync::LazyLock};

use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use convert_case::{Case, Casing};
use regex::Regex;

use crate::{
    error::{Error, Result},
    event::key::{Key, suggest_binding_key},
};

/// Accepted shape of a single binding key: identifier components joined by
/// `+`.
static KEY_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+(\+[A-Za-z0-9_]+)*$").ok());

/// A single key bound to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// A single key name, e.g. `ctrl+z`.
    pub key: String,
    /// The action to run, without the `action_` prefix.
    pub action: String,
    /// Human-readable description for help displays.
    pub description: String,
    /// Show this binding in help and footer displays.
    pub show: bool,
    /// Override for how the key is displayed.
    pub key_display: Option<String>,
    /// Universal bindings are checked before all others.
    pub universal: bool,
}

impl Binding {
    /// A shown, non-universal binding.
    pub fn new(key: impl Into<String>, action: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            description: description.into(),
            show: true,
            key_display: None,
            universal: false,
        }
    }

    /// Set whether the binding appears in help displays.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Override the displayed key.
    pub fn with_key_display(mut self, display: impl Into<String>) -> Self {
        self.key_display = Some(display.into());
        self
    }

    /// Mark the binding universal.
    pub fn universal(mut self) -> Self {
        self.universal = true;
        self
    }

    /// The label shown for this binding's key.
    pub fn display_key(&self) -> String {
        if let Some(d) = &self.key_display {
            return d.clone();
        }
        self.key
            .parse::<Key>()
            .map(|k| k.display())
            .unwrap_or_else(|_| self.key.clone())
    }

    /// The description, falling back to the title-cased action name.
    pub fn display_description(&self) -> String {
        if self.description.is_empty() {
            self.action.to_case(Case::Title)
        } else {
            self.description.clone()
        }
    }
}

impl From<(&str, &str, &str)> for Binding {
    fn from((key, action, description): (&str, &str, &str)) -> Self {
        Self::new(key, action, description)
    }
}

impl From<(String, String, String)> for Binding {
    fn from((key, action, description): (String, String, String)) -> Self {
        Self::new(key, action, description)
    }
}

/// Optional fields for [`Bindings::bind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOptions {
    /// Human-readable description.
    pub description: String,
    /// Show in help displays.
    pub show: bool,
    /// Override for how the key is displayed.
    pub key_display: Option<String>,
    /// Universal binding.
    pub universal: bool,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            description: String::new(),
            show: true,
            key_display: None,
            universal: false,
        }
    }
}

/// Check a single key against the accepted key shape.
fn validate_key(key: &str) -> Result<()> {
    let valid = match KEY_RE.as_ref() {
        Some(re) => re.is_match(key),
        None => return Err(Error::Internal("binding key pattern failed to compile".into())),
    };
    if valid {
        return Ok(());
    }
    let msg = match suggest_binding_key(key) {
        Some(s) => format!("{key:?} is not a valid key name; did you mean {s:?}?"),
        None => format!("{key:?} is not a valid key name"),
    };
    Err(Error::InvalidBinding(msg))
}

/// Split a comma-separated key spec into validated single keys.
fn split_keys(keys: &str) -> Result<Vec<String>> {
    keys.split(',')
        .map(str::trim)
        .map(|k| validate_key(k).map(|_| k.to_string()))
        .collect()
}

/// An insertion-ordered table of bindings, unique per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    /// Bindings in insertion order.
    entries: Vec<Binding>,
    /// Key to position in `entries`.
    index: HashMap<String, usize>,
}

impl Bindings {
    /// Build a table, expanding comma-separated keys. Later entries for the
    /// same key override earlier ones.
    pub fn new<I, B>(bindings: I) -> Result<Self>
    where
        I: IntoIterator<Item = B>,
        B: Into<Binding>,
    {
        let mut table = Self::default();
        for b in bindings {
            let b: Binding = b.into();
            for key in split_keys(&b.key)? {
                table.insert(Binding { key, ..b.clone() });
            }
        }
        Ok(table)
    }

    /// Merge tables into a new table. Keys in later tables win.
    pub fn merge<'a>(tables: impl IntoIterator<Item = &'a Self>) -> Self {
        let mut out = Self::default();
        for t in tables {
            for b in &t.entries {
                out.insert(b.clone());
            }
        }
        out
    }

    /// Insert or replace a single-key binding, keeping the original position
    /// on replacement.
    fn insert(&mut self, binding: Binding) {
        match self.index.get(&binding.key) {
            Some(&i) => self.entries[i] = binding,
            None => {
                self.index.insert(binding.key.clone(), self.entries.len());
                self.entries.push(binding);
            }
        }
    }

    /// Bind one or more comma-separated keys to an action. No keys are bound
    /// if any of them is invalid.
    pub fn bind(&mut self, keys: &str, action: &str, opts: &BindOptions) -> Result<()> {
        for key in split_keys(keys)? {
            self.insert(Binding {
                key,
                action: action.to_string(),
                description: opts.description.clone(),
                show: opts.show,
                key_display: opts.key_display.clone(),
                universal: opts.universal,
            });
        }
        Ok(())
    }

    /// Look up the binding for a key.
    pub fn get_key(&self, key: &str) -> Result<&Binding> {
        self.get(key).ok_or_else(|| Error::NoBinding(key.to_string()))
    }

    /// Look up the binding for a key, if any.
    pub fn get(&self, key: &str) -> Option<&Binding> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Bindings that should be shown to the user, in insertion order.
    pub fn shown_keys(&self) -> Vec<&Binding> {
        self.entries.iter().filter(|b| b.show).collect()
    }

    /// All bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.entries.iter()
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render shown bindings as a two-column text table.
    pub fn help_table(&self) -> String {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.load_preset(UTF8_FULL);
        for b in self.shown_keys() {
            table.add_row(vec![
                Cell::new(b.display_key()).fg(Color::Green),
                Cell::new(b.display_description()),
            ]);
        }
        table.to_string()
    }
}
