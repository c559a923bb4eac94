#![forbid(unsafe_code)]

//! Site configuration as data.
//!
//! Storage keys and the DOM contract (attribute names, selectors, element
//! ids, class names) are grouped into a single [`SiteConfig`] that can be
//! loaded from JSON at startup. Every field has a default matching the
//! site's markup, so `SiteConfig::default()` needs no JSON at all.
//!
//! ```json
//! { "storage": { "language_key": "site.lang" }, "dom": { "active_class": "is-active" } }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub storage: StorageConfig,
    pub dom: DomConfig,
}

/// Browser-local storage keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Key holding the persisted language code.
    pub language_key: String,
    /// Key holding the JSON array of reservations.
    pub reservations_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            language_key: "lang".into(),
            reservations_key: "reservations".into(),
        }
    }
}

/// Names the DOM adapter looks for on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    /// Attribute carrying a dictionary key on translatable elements.
    pub translate_attribute: String,
    /// Attribute carrying a language code on language buttons.
    pub language_attribute: String,
    pub language_button_selector: String,
    /// Id of the fallback `<select>` language control.
    pub language_select_id: String,
    pub nav_toggle_selector: String,
    /// Class marking the active language button.
    pub active_class: String,
    /// Class marking an expanded navigation menu.
    pub open_class: String,
    pub reserve_form_id: String,
    pub reserve_result_id: String,
    /// Id of the demo button that alerts its localized label.
    pub action_id: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            translate_attribute: "data-i18n".into(),
            language_attribute: "data-lang".into(),
            language_button_selector: ".lang-btn".into(),
            language_select_id: "lang-select".into(),
            nav_toggle_selector: ".nav-toggle".into(),
            active_class: "active".into(),
            open_class: "open".into(),
            reserve_form_id: "reserve-form".into(),
            reserve_result_id: "reserve-result".into(),
            action_id: "action".into(),
        }
    }
}

impl DomConfig {
    /// Selector matching every translatable element.
    #[must_use]
    pub fn translate_selector(&self) -> String {
        format!("[{}]", self.translate_attribute)
    }
}

impl SiteConfig {
    /// Load from a JSON string and validate.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Check every field. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let fields = [
            ("storage.language_key", &self.storage.language_key),
            ("storage.reservations_key", &self.storage.reservations_key),
            ("dom.translate_attribute", &self.dom.translate_attribute),
            ("dom.language_attribute", &self.dom.language_attribute),
            (
                "dom.language_button_selector",
                &self.dom.language_button_selector,
            ),
            ("dom.language_select_id", &self.dom.language_select_id),
            ("dom.nav_toggle_selector", &self.dom.nav_toggle_selector),
            ("dom.active_class", &self.dom.active_class),
            ("dom.open_class", &self.dom.open_class),
            ("dom.reserve_form_id", &self.dom.reserve_form_id),
            ("dom.reserve_result_id", &self.dom.reserve_result_id),
            ("dom.action_id", &self.dom.action_id),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                errors.push(format!("{name} must not be empty"));
            }
        }

        if self.storage.language_key == self.storage.reservations_key {
            errors.push(format!(
                "storage.language_key and storage.reservations_key must differ (both '{}')",
                self.storage.language_key
            ));
        }

        errors
    }
}

/// Errors from loading a [`SiteConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// JSON parse error.
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => write!(f, "validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
