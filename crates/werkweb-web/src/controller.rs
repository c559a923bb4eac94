#![forbid(unsafe_code)]

//! Language controller: owns the active language and announces changes.
//!
//! # Design
//!
//! The controller holds the immutable [`Catalog`], the storage capability and
//! the current [`Language`]. DOM code never mutates language state; it
//! subscribes with [`LanguageController::subscribe`] and re-renders from the
//! [`LanguageChange`] it receives.
//!
//! # Invariants
//!
//! 1. The current language is always whitelisted.
//! 2. `apply` persists the code before notifying; a failed write is logged
//!    and otherwise ignored, so the in-memory language still changes.
//! 3. Subscribers are notified in registration order; dropped
//!    [`Subscription`] guards are pruned lazily on the next notification.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::{debug, warn};
use werkweb_i18n::{Catalog, Dictionary, Language, resolve_initial_language};

use crate::storage::KeyValueStore;

type CallbackRc = Rc<dyn Fn(&LanguageChange<'_>)>;
type CallbackWeak = Weak<dyn Fn(&LanguageChange<'_>)>;

/// Payload delivered to subscribers after a language is applied.
#[derive(Debug, Clone, Copy)]
pub struct LanguageChange<'a> {
    pub language: Language,
    pub dictionary: &'a Dictionary,
}

/// RAII guard for a subscriber callback. Dropping it unsubscribes.
pub struct Subscription {
    _guard: CallbackRc,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Owner of the active language.
pub struct LanguageController<S> {
    catalog: Rc<Catalog>,
    store: S,
    language_key: String,
    current: Cell<Language>,
    subscribers: RefCell<Vec<CallbackWeak>>,
}

impl<S: std::fmt::Debug> std::fmt::Debug for LanguageController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageController")
            .field("store", &self.store)
            .field("language_key", &self.language_key)
            .field("current", &self.current.get())
            .field("subscriber_count", &self.subscribers.borrow().len())
            .finish()
    }
}

impl<S: KeyValueStore> LanguageController<S> {
    /// Create a controller whose initial language is resolved from the
    /// stored preference under `language_key` and the browser locale.
    ///
    /// Nothing is rendered or persisted until [`apply`](Self::apply) is called.
    pub fn start(
        catalog: Rc<Catalog>,
        store: S,
        language_key: impl Into<String>,
        browser_locale: Option<&str>,
    ) -> Self {
        let language_key = language_key.into();
        let stored = match store.get(&language_key) {
            Ok(stored) => stored,
            Err(err) => {
                debug!(
                    target: "werkweb_web::controller",
                    key = language_key.as_str(),
                    error = %err,
                    "stored language preference unreadable; ignoring"
                );
                None
            }
        };
        let initial = resolve_initial_language(stored.as_deref(), browser_locale);
        debug!(
            target: "werkweb_web::controller",
            stored = stored.as_deref().unwrap_or(""),
            browser_locale = browser_locale.unwrap_or(""),
            initial = initial.code(),
            "resolved initial language"
        );
        Self {
            catalog,
            store,
            language_key,
            current: Cell::new(initial),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// The active language.
    #[must_use]
    pub fn current(&self) -> Language {
        self.current.get()
    }

    /// Dictionary of the active language.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        self.catalog.dictionary(self.current.get())
    }

    /// Shared catalog.
    #[must_use]
    pub fn catalog(&self) -> &Rc<Catalog> {
        &self.catalog
    }

    /// Localized non-DOM message for the active language, with default-language fallback.
    #[must_use]
    pub fn message(&self, key: &str) -> Option<&str> {
        self.catalog.message(self.current.get(), key)
    }

    /// Make `language` active, persist it, and notify subscribers.
    ///
    /// Applying the active language again re-notifies, which re-renders the
    /// same state.
    pub fn apply(&self, language: Language) {
        let previous = self.current.replace(language);

        // Persistence is best effort; the page keeps working without it.
        if let Err(err) = self.store.set(&self.language_key, language.code()) {
            warn!(
                target: "werkweb_web::controller",
                key = self.language_key.as_str(),
                language = language.code(),
                error = %err,
                "failed to persist language preference"
            );
        }

        debug!(
            target: "werkweb_web::controller",
            from = previous.code(),
            to = language.code(),
            "applied language"
        );
        self.notify(language);
    }

    /// Apply an untrusted code from a language control.
    ///
    /// Returns `false` and changes nothing when `code` is not whitelisted.
    pub fn apply_code(&self, code: &str) -> bool {
        match Language::parse(code) {
            Some(language) => {
                self.apply(language);
                true
            }
            None => {
                debug!(
                    target: "werkweb_web::controller",
                    code,
                    "ignored non-whitelisted language code"
                );
                false
            }
        }
    }

    /// Register a callback invoked after every [`apply`](Self::apply).
    pub fn subscribe(&self, callback: impl Fn(&LanguageChange<'_>) + 'static) -> Subscription {
        let strong: CallbackRc = Rc::new(callback);
        self.subscribers.borrow_mut().push(Rc::downgrade(&strong));
        Subscription { _guard: strong }
    }

    /// Registered subscribers, including dropped ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    fn notify(&self, language: Language) {
        // Collect first so callbacks may subscribe without a borrow conflict.
        let callbacks: Vec<CallbackRc> = {
            let mut subscribers = self.subscribers.borrow_mut();
            subscribers.retain(|w| w.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        let change = LanguageChange {
            language,
            dictionary: self.catalog.dictionary(language),
        };
        for cb in &callbacks {
            cb(&change);
        }
    }
}
