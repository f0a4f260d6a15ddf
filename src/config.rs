//! Behavior configuration.
//!
//! Every tunable number the components use (scroll threshold, anchor offset,
//! reveal threshold, fade duration, reset delay) lives here with the defaults
//! the markup and stylesheet were designed against. A site can override any of
//! them, either with a `pagewire.toml` next to its content (read by the CLI) or
//! with a JSON block embedded in the page (read by the browser entry point):
//!
//! ```html
//! <script type="application/json" id="pagewire-config">
//!   {"navigation": {"scroll_threshold": 120}}
//! </script>
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [navigation]
//! scroll_threshold = 50.0   # px scrolled before the navbar gets `scrolled`
//!
//! [scroll]
//! offset_padding = 20.0     # px left between navbar and anchor target
//!
//! [reveal]
//! threshold = 0.1           # fraction visible before an element reveals
//! bottom_margin = 50.0      # px inset from the viewport bottom
//!
//! [gallery]
//! all_token = "all"         # filter token that shows every item
//! fade_duration_ms = 500    # fade-in duration for shown items
//!
//! [form]
//! reset_delay_ms = 5000     # success message lifetime before the form returns
//! required_fields = ["firstName", "lastName", "email", "subject", "message"]
//! ```
//!
//! Config is sparse: override only what you need. Unknown keys are rejected
//! to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE: &str = "pagewire.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tunables for every component. All fields have defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    pub navigation: NavigationConfig,
    pub scroll: ScrollConfig,
    pub reveal: RevealConfig,
    pub gallery: GalleryConfig,
    pub form: FormConfig,
}

impl BehaviorConfig {
    /// Parse the JSON config block embedded in a page.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BehaviorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Validation(
                "reveal.threshold must be between 0.0 and 1.0".into(),
            ));
        }
        if self.reveal.bottom_margin < 0.0 {
            return Err(ConfigError::Validation(
                "reveal.bottom_margin must not be negative".into(),
            ));
        }
        if self.navigation.scroll_threshold < 0.0 {
            return Err(ConfigError::Validation(
                "navigation.scroll_threshold must not be negative".into(),
            ));
        }
        if self.gallery.all_token.is_empty() {
            return Err(ConfigError::Validation(
                "gallery.all_token must not be empty".into(),
            ));
        }
        if !self.form.required_fields.iter().any(|f| f == "email") {
            return Err(ConfigError::Validation(
                "form.required_fields must include \"email\"".into(),
            ));
        }
        Ok(())
    }
}

/// Navbar styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Vertical scroll, in pixels, above which the navbar carries `scrolled`.
    /// Exactly this offset still counts as not scrolled.
    pub scroll_threshold: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
        }
    }
}

/// In-page anchor scrolling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Extra space, in pixels, between the bottom of the navbar and the target.
    pub offset_padding: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            offset_padding: 20.0,
        }
    }
}

/// Entrance animations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Fraction of the element that must be inside the viewport.
    pub threshold: f64,
    /// Inset of the viewport's bottom edge, in pixels.
    pub bottom_margin: f64,
}

impl RevealConfig {
    /// CSS `rootMargin` for the intersection watcher.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
        }
    }
}

/// Gallery filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Filter token that matches every item.
    pub all_token: String,
    /// Duration of the fade-in applied to items that are shown.
    pub fade_duration_ms: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            all_token: "all".to_string(),
            fade_duration_ms: 500,
        }
    }
}

/// Contact form handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// How long the success message stays before the empty form returns.
    pub reset_delay_ms: u32,
    /// Fields that must be present and non-empty, checked in this order.
    pub required_fields: Vec<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: 5000,
            required_fields: ["firstName", "lastName", "email", "subject", "message"]
                .map(String::from)
                .to_vec(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(BehaviorConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `pagewire.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<BehaviorConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: BehaviorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `pagewire.toml` in `dir`, on top of stock defaults.
pub fn load_config(dir: &Path) -> Result<BehaviorConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Returns a fully-commented stock `pagewire.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# pagewire configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# ---------------------------------------------------------------------------
# Navigation bar
# ---------------------------------------------------------------------------
[navigation]
# Pixels scrolled before the navbar gets the `scrolled` class.
# Scrolling exactly this far does not count.
scroll_threshold = 50.0

# ---------------------------------------------------------------------------
# In-page anchor links
# ---------------------------------------------------------------------------
[scroll]
# Space left between the bottom of the navbar and the anchor target.
offset_padding = 20.0

# ---------------------------------------------------------------------------
# Entrance animations (.fade-in, .slide-left, .slide-right)
# ---------------------------------------------------------------------------
[reveal]
# Fraction of the element that must be visible (0.0 - 1.0).
threshold = 0.1

# Pixels trimmed off the bottom of the viewport when testing visibility.
bottom_margin = 50.0

# ---------------------------------------------------------------------------
# Gallery filter
# ---------------------------------------------------------------------------
[gallery]
# data-filter token that shows every item.
all_token = "all"

# Fade-in duration for items that are shown.
fade_duration_ms = 500

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[form]
# Milliseconds the success message stays before the empty form returns.
reset_delay_ms = 5000

# Fields that must be filled in. Must include "email".
required_fields = ["firstName", "lastName", "email", "subject", "message"]
"##
}
