#![forbid(unsafe_code)]

//! Localization foundation for the Werkweb brochure site.
//!
//! Provides the closed language whitelist, initial-language resolution,
//! the immutable translation [`Catalog`], and a pure planner that maps a
//! dictionary onto translatable element descriptors.
//!
//! # How it fits in the system
//! `werkweb-web` owns the mutable language state and the DOM adapter. This
//! crate never touches the DOM or browser storage, so every rule here can be
//! tested natively.

pub mod builtin;
pub mod catalog;
pub mod language;
pub mod plan;

pub use catalog::{Catalog, CatalogError, CoverageReport, Dictionary, LanguageCoverage};
pub use language::{Language, TextDirection, primary_subtag, resolve_initial_language};
pub use plan::{
    Assignment, AssignmentTarget, DocumentUpdate, ElementKind, TranslatableElement,
    plan_document, plan_translations,
};
