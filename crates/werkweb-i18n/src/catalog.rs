#![forbid(unsafe_code)]

//! Immutable translation catalog.
//!
//! A [`Catalog`] holds one [`Dictionary`] per whitelisted [`Language`]. It is
//! built once at startup and never mutated afterwards; language switches only
//! change which dictionary the controller reads.

use std::collections::{BTreeMap, BTreeSet};

use crate::language::{Language, TextDirection};

/// Key whose value doubles as the document title.
pub const TITLE_KEY: &str = "title";

/// Key → localized string table for one language, plus its text direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    dir: TextDirection,
    entries: BTreeMap<String, String>,
}

impl Dictionary {
    /// Create an empty left-to-right dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dictionary with the given direction.
    #[must_use]
    pub fn with_direction(dir: TextDirection) -> Self {
        Self {
            dir,
            entries: BTreeMap::new(),
        }
    }

    /// Build a dictionary from static `(key, value)` pairs.
    #[must_use]
    pub fn from_pairs(dir: TextDirection, pairs: &[(&str, &str)]) -> Self {
        let mut dict = Self::with_direction(dir);
        for (key, value) in pairs {
            dict.insert(*key, *value);
        }
        dict
    }

    /// Insert or replace one entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` has an entry.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Document title, if the dictionary defines one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.get(TITLE_KEY)
    }

    /// Text direction.
    #[must_use]
    pub const fn dir(&self) -> TextDirection {
        self.dir
    }

    /// Iterate over keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Catalog construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A whitelisted language has no dictionary.
    MissingLanguage(Language),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLanguage(lang) => write!(f, "no dictionary for language '{lang}'"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Mapping from every whitelisted language to its dictionary.
///
/// # Invariants
///
/// 1. Every [`Language`] in [`Language::ALL`] has a dictionary.
/// 2. The catalog is immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    dictionaries: BTreeMap<Language, Dictionary>,
}

impl Catalog {
    /// Build a catalog, failing if any whitelisted language is missing.
    ///
    /// Later entries for the same language replace earlier ones.
    pub fn from_dictionaries(
        dictionaries: impl IntoIterator<Item = (Language, Dictionary)>,
    ) -> Result<Self, CatalogError> {
        let dictionaries: BTreeMap<Language, Dictionary> = dictionaries.into_iter().collect();
        if let Some(missing) = Language::ALL
            .into_iter()
            .find(|lang| !dictionaries.contains_key(lang))
        {
            return Err(CatalogError::MissingLanguage(missing));
        }
        Ok(Self { dictionaries })
    }

    /// The site's built-in English and Dutch catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let dictionaries = Language::ALL
            .into_iter()
            .map(|lang| (lang, crate::builtin::dictionary(lang)))
            .collect();
        Self { dictionaries }
    }

    /// Dictionary for `lang`, falling back to the default language's.
    #[must_use]
    pub fn dictionary(&self, lang: Language) -> &Dictionary {
        let found = self
            .dictionaries
            .get(&lang)
            .or_else(|| self.dictionaries.get(&Language::DEFAULT));
        match found {
            Some(dict) => dict,
            None => empty_dictionary(),
        }
    }

    /// Localized message for non-DOM text (result messages, alerts).
    ///
    /// Unlike DOM application, a key missing from `lang` falls back to the
    /// default language's entry.
    #[must_use]
    pub fn message(&self, lang: Language, key: &str) -> Option<&str> {
        self.dictionary(lang)
            .get(key)
            .or_else(|| self.dictionary(Language::DEFAULT).get(key))
    }

    /// Compare every language against the union of all keys.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all_keys: BTreeSet<&str> = self
            .dictionaries
            .values()
            .flat_map(Dictionary::keys)
            .collect();
        let total_keys = all_keys.len();

        let languages = self
            .dictionaries
            .iter()
            .map(|(&language, dict)| {
                let missing: Vec<String> = all_keys
                    .iter()
                    .filter(|key| !dict.contains(key))
                    .map(|key| (*key).to_owned())
                    .collect();
                let present = total_keys - missing.len();
                let coverage_percent = if total_keys == 0 {
                    100.0
                } else {
                    present as f64 * 100.0 / total_keys as f64
                };
                LanguageCoverage {
                    language,
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys,
            languages,
        }
    }
}

fn empty_dictionary() -> &'static Dictionary {
    static EMPTY: std::sync::OnceLock<Dictionary> = std::sync::OnceLock::new();
    EMPTY.get_or_init(Dictionary::new)
}

/// Per-language key coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageCoverage {
    pub language: Language,
    pub present: usize,
    /// Keys defined by some other language but not this one, sorted.
    pub missing: Vec<String>,
    /// `present / total_keys` as a percentage in `[0, 100]`.
    pub coverage_percent: f64,
}

/// Key coverage across the whole catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Size of the union of keys across all languages.
    pub total_keys: usize,
    pub languages: Vec<LanguageCoverage>,
}

impl CoverageReport {
    /// True when no language is missing any key.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.languages.iter().all(|lc| lc.missing.is_empty())
    }
}
