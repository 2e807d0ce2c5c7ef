//! Runtime configuration.
//!
//! Configuration is read from JSON or from `UNDERSTORY_*` environment
//! variables. Every field has a default, and invalid environment values fall
//! back to it. `max_fps` and `animation_level` are host settings: they are
//! parsed and passed through, but the widgets here don't consume them.

use std::{env, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How much animation the host should run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationLevel {
    /// No animation.
    None,
    /// Only essential animation.
    Basic,
    /// All animation.
    #[default]
    Full,
}

impl FromStr for AnimationLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "basic" => Ok(Self::Basic),
            "full" => Ok(Self::Full),
            _ => Err(Error::Config(format!("unknown animation level {s:?}"))),
        }
    }
}

/// Edit history batching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Seconds between edits after which a new batch starts.
    pub checkpoint_timer: f64,
    /// Maximum chars in a batch.
    pub checkpoint_max_characters: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            checkpoint_timer: 2.0,
            checkpoint_max_characters: 100,
        }
    }
}

/// Option list behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionListConfig {
    /// Wrap long prompts onto several rows.
    pub wrap: bool,
    /// Number of rendered rows kept in the render cache.
    pub render_cache_size: usize,
}

impl Default for OptionListConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            render_cache_size: 1024,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Debug mode raises the log level.
    pub debug: bool,
    /// Log to this file rather than stderr.
    pub log_file: Option<PathBuf>,
    /// Frame rate cap for the host's render loop. Carried for the host;
    /// no widget in this crate reads it.
    pub max_fps: u32,
    /// Animation level for the host. Carried for the host; no widget in this
    /// crate animates.
    pub animation_level: AnimationLevel,
    /// Edit history settings.
    pub history: HistoryConfig,
    /// Option list settings.
    pub option_list: OptionListConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_file: None,
            max_fps: 60,
            animation_level: AnimationLevel::Full,
            history: HistoryConfig::default(),
            option_list: OptionListConfig::default(),
        }
    }
}

/// Parse a value, keeping the default on failure.
fn parse_or<T: FromStr>(name: &str, value: &str, default: T) -> T {
    match value.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!("ignoring invalid value {:?} for {}", value, name);
            default
        }
    }
}

impl Config {
    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(env::vars())
    }

    /// Read configuration from a set of variables. Unknown names are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut cfg = Self::default();
        for (k, v) in vars {
            let (k, v) = (k.as_ref(), v.as_ref());
            match k {
                "UNDERSTORY_DEBUG" => cfg.debug = v == "1",
                "UNDERSTORY_LOG" if !v.is_empty() => cfg.log_file = Some(PathBuf::from(v)),
                "UNDERSTORY_FPS" => cfg.max_fps = parse_or(k, v, cfg.max_fps),
                "UNDERSTORY_ANIMATIONS" => {
                    cfg.animation_level = parse_or(k, v, AnimationLevel::Full)
                }
                "UNDERSTORY_CHECKPOINT_TIMER" => {
                    cfg.history.checkpoint_timer = parse_or(k, v, cfg.history.checkpoint_timer)
                }
                "UNDERSTORY_CHECKPOINT_MAX_CHARACTERS" => {
                    cfg.history.checkpoint_max_characters =
                        parse_or(k, v, cfg.history.checkpoint_max_characters)
                }
                _ => {}
            }
        }
        cfg
    }
}
