#![forbid(unsafe_code)]

//! The closed language whitelist and initial-language resolution.
//!
//! Every value that reaches the catalog or browser storage has passed through
//! [`Language::parse`]. Untrusted input (a stored preference, the browser
//! locale) is never used as-is.

use serde::{Deserialize, Serialize};

/// A whitelisted site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the primary language.
    En,
    /// Dutch.
    Nl,
}

impl Language {
    /// All supported languages in priority order (default first).
    pub const ALL: [Self; 2] = [Self::En, Self::Nl];

    /// The fixed fallback language.
    pub const DEFAULT: Self = Self::En;

    /// Lowercase code used in storage, `lang` attributes and `data-lang` controls.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
        }
    }

    /// Parse an exact whitelisted code. Anything else yields `None`.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Best-effort match of a browser locale tag such as `nl-BE` or `en_US`.
    #[must_use]
    pub fn from_locale_tag(tag: &str) -> Option<Self> {
        let primary = primary_subtag(tag)?.to_ascii_lowercase();
        Self::parse(&primary)
    }

    /// Whether this is the fixed default language.
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::En)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Text direction attribute value for a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the document's `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for TextDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary subtag of a locale tag: the text before the first `-` or `_`.
///
/// Returns `None` for empty or whitespace-only tags.
#[must_use]
pub fn primary_subtag(tag: &str) -> Option<&str> {
    let primary = tag.trim().split(['-', '_']).next()?;
    if primary.is_empty() {
        None
    } else {
        Some(primary)
    }
}

/// Resolve the language to apply on page load.
///
/// Order: a whitelisted stored preference, then the browser locale's primary
/// subtag if whitelisted, then [`Language::DEFAULT`]. Invalid or absent values
/// fall through without error.
#[must_use]
pub fn resolve_initial_language(stored: Option<&str>, browser_locale: Option<&str>) -> Language {
    stored
        .and_then(Language::parse)
        .or_else(|| browser_locale.and_then(Language::from_locale_tag))
        .unwrap_or(Language::DEFAULT)
}
