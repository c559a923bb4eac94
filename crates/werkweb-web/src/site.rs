#![forbid(unsafe_code)]

//! Page-level facade shared by the wasm adapter and native tests.
//!
//! [`Site`] wires the language controller and the reservation book to one
//! shared store and turns their outcomes into the localized strings the page
//! displays. No JS/WASM types here.

use std::rc::Rc;

use werkweb_i18n::Catalog;

use crate::clock::Clock;
use crate::config::SiteConfig;
use crate::controller::LanguageController;
use crate::reservation::{Receipt, ReservationBook, ReservationError, ReservationForm};
use crate::storage::KeyValueStore;

const RESERVE_SUCCESS_KEY: &str = "reserve_success";
const RESERVE_REQUIRED_KEY: &str = "reserve_error_required";
const ACTION_KEY: &str = "button";

const FALLBACK_SUCCESS: &str =
    "Reservation received — the admin will propose times and location (Doppio).";
const FALLBACK_REQUIRED: &str = "Please provide name and contact.";
const FALLBACK_ACTION: &str = "Clicked";

/// What the page shows after a reservation submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResponse {
    /// Localized text for the result area.
    pub message: String,
    /// Whether the form fields should be cleared.
    pub clear_form: bool,
    /// `None` when validation rejected the submission.
    pub receipt: Option<Receipt>,
}

/// Language controller plus reservation capture over one store.
pub struct Site<S> {
    controller: LanguageController<Rc<S>>,
    book: ReservationBook<Rc<S>>,
    clock: Box<dyn Clock>,
}

impl<S: KeyValueStore> Site<S> {
    /// Resolve the initial language and prepare the reservation book.
    ///
    /// Nothing is rendered until the caller applies the current language.
    pub fn new(
        catalog: Rc<Catalog>,
        store: Rc<S>,
        config: &SiteConfig,
        browser_locale: Option<&str>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let controller = LanguageController::start(
            catalog,
            Rc::clone(&store),
            config.storage.language_key.as_str(),
            browser_locale,
        );
        let book = ReservationBook::new(store, config.storage.reservations_key.as_str());
        Self {
            controller,
            book,
            clock,
        }
    }

    #[must_use]
    pub fn controller(&self) -> &LanguageController<Rc<S>> {
        &self.controller
    }

    #[must_use]
    pub fn book(&self) -> &ReservationBook<Rc<S>> {
        &self.book
    }

    /// Validate and store a reservation, returning the message to show.
    pub fn submit_reservation(&self, form: &ReservationForm) -> SubmitResponse {
        match self.book.submit(form, self.clock.as_ref()) {
            Ok(receipt) => SubmitResponse {
                message: self
                    .controller
                    .message(RESERVE_SUCCESS_KEY)
                    .unwrap_or(FALLBACK_SUCCESS)
                    .to_owned(),
                clear_form: true,
                receipt: Some(receipt),
            },
            Err(ReservationError::MissingRequired) => SubmitResponse {
                message: self
                    .controller
                    .message(RESERVE_REQUIRED_KEY)
                    .unwrap_or(FALLBACK_REQUIRED)
                    .to_owned(),
                clear_form: false,
                receipt: None,
            },
        }
    }

    /// Localized label alerted by the demo action button.
    #[must_use]
    pub fn action_message(&self) -> String {
        self.controller
            .message(ACTION_KEY)
            .unwrap_or(FALLBACK_ACTION)
            .to_owned()
    }
}
