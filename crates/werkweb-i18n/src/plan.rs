#![forbid(unsafe_code)]

//! Pure translation planning.
//!
//! The DOM adapter scans the page for translatable elements, describes each
//! one as a [`TranslatableElement`], and asks [`plan_translations`] what to
//! write where. Nothing in this module touches the DOM, so the same plan can
//! be checked in native tests.
//!
//! # Invariants
//!
//! 1. An element whose key is absent from the dictionary gets no assignment;
//!    its current content is left as-is. There is no per-key fallback to the
//!    default language.
//! 2. Planning is a pure function of its inputs, so applying a plan twice
//!    leaves the same state as applying it once.

use crate::catalog::Dictionary;
use crate::language::{Language, TextDirection};

/// How an element receives its localized string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Replace the element's text content.
    Text,
    /// Replace the `placeholder` of an input or textarea.
    Placeholder,
}

impl ElementKind {
    /// Classify an element from its tag name and whether it carries a
    /// `placeholder` attribute.
    #[must_use]
    pub fn classify(tag_name: &str, has_placeholder: bool) -> Self {
        let placeholder_bearing = tag_name.eq_ignore_ascii_case("input")
            || tag_name.eq_ignore_ascii_case("textarea");
        if placeholder_bearing && has_placeholder {
            Self::Placeholder
        } else {
            Self::Text
        }
    }
}

/// Descriptor of one translatable element found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableElement {
    pub key: String,
    pub kind: ElementKind,
}

impl TranslatableElement {
    #[must_use]
    pub fn new(key: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Shorthand for a text element.
    #[must_use]
    pub fn text(key: impl Into<String>) -> Self {
        Self::new(key, ElementKind::Text)
    }

    /// Shorthand for a placeholder-bearing input.
    #[must_use]
    pub fn placeholder(key: impl Into<String>) -> Self {
        Self::new(key, ElementKind::Placeholder)
    }
}

/// What part of the element receives the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentTarget {
    TextContent,
    Placeholder,
}

impl From<ElementKind> for AssignmentTarget {
    fn from(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => Self::TextContent,
            ElementKind::Placeholder => Self::Placeholder,
        }
    }
}

/// One write to perform: `value` goes into `target` of element `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    /// Index into the element slice passed to [`plan_translations`].
    pub index: usize,
    pub target: AssignmentTarget,
    pub value: &'a str,
}

/// Map a dictionary onto element descriptors.
#[must_use]
pub fn plan_translations<'a>(
    dict: &'a Dictionary,
    elements: &[TranslatableElement],
) -> Vec<Assignment<'a>> {
    elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| {
            dict.get(&element.key).map(|value| Assignment {
                index,
                target: element.kind.into(),
                value,
            })
        })
        .collect()
}

/// Document-level attributes for a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpdate<'a> {
    /// New document title; `None` leaves the current title.
    pub title: Option<&'a str>,
    pub lang: &'static str,
    pub dir: TextDirection,
}

/// Document title, `lang` and `dir` for `lang` rendered with `dict`.
#[must_use]
pub fn plan_document(lang: Language, dict: &Dictionary) -> DocumentUpdate<'_> {
    DocumentUpdate {
        title: dict.title(),
        lang: lang.code(),
        dir: dict.dir(),
    }
}
