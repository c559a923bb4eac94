#![forbid(unsafe_code)]

//! End-to-end page scenarios against a simulated document.
//!
//! The simulated page renders through the same pure planner the wasm adapter
//! uses, so these tests cover everything except the `web-sys` calls.
//!
//! Run:
//!   cargo test -p werkweb-web --test page_scenarios

use std::cell::RefCell;
use std::rc::Rc;

use chrono::DateTime;
use pretty_assertions::assert_eq;
use werkweb_i18n::{
    AssignmentTarget, Catalog, Dictionary, ElementKind, Language, TextDirection,
    TranslatableElement, plan_document, plan_translations,
};
use werkweb_web::{
    FixedClock, LanguageChange, MemoryStore, ReservationForm, Site, SiteConfig, StorageError,
    Subscription,
};

// ============================================================================
// Simulated document
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct FakeElement {
    tag: &'static str,
    key: &'static str,
    has_placeholder: bool,
    text: String,
    placeholder: String,
}

impl FakeElement {
    fn text(tag: &'static str, key: &'static str, text: &str) -> Self {
        Self {
            tag,
            key,
            has_placeholder: false,
            text: text.to_owned(),
            placeholder: String::new(),
        }
    }

    fn input(key: &'static str) -> Self {
        Self {
            tag: "INPUT",
            key,
            has_placeholder: true,
            text: String::new(),
            placeholder: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FakeDocument {
    title: String,
    lang: String,
    dir: String,
    elements: Vec<FakeElement>,
}

impl FakeDocument {
    fn brochure() -> Self {
        Self {
            title: String::new(),
            lang: String::new(),
            dir: String::new(),
            elements: vec![
                FakeElement::text("H1", "heading", "static heading"),
                FakeElement::text("A", "nav_reserve", "static nav"),
                FakeElement::input("form_name"),
                FakeElement::text("P", "only_in_english", "original"),
            ],
        }
    }

    fn render(&mut self, change: &LanguageChange<'_>) {
        let update = plan_document(change.language, change.dictionary);
        if let Some(title) = update.title {
            self.title = title.to_owned();
        }
        self.lang = update.lang.to_owned();
        self.dir = update.dir.as_str().to_owned();

        let descriptors: Vec<TranslatableElement> = self
            .elements
            .iter()
            .map(|el| {
                TranslatableElement::new(el.key, ElementKind::classify(el.tag, el.has_placeholder))
            })
            .collect();
        for assignment in plan_translations(change.dictionary, &descriptors) {
            let element = &mut self.elements[assignment.index];
            match assignment.target {
                AssignmentTarget::TextContent => element.text = assignment.value.to_owned(),
                AssignmentTarget::Placeholder => {
                    element.placeholder = assignment.value.to_owned();
                }
            }
        }
    }
}

struct Harness {
    store: Rc<MemoryStore>,
    site: Site<MemoryStore>,
    document: Rc<RefCell<FakeDocument>>,
    _render: Subscription,
}

impl Harness {
    fn boot(catalog: Catalog, store: MemoryStore, locale: Option<&str>) -> Self {
        let store = Rc::new(store);
        let site = Site::new(
            Rc::new(catalog),
            Rc::clone(&store),
            &SiteConfig::default(),
            locale,
            Box::new(FixedClock(1_740_821_400_123)),
        );
        let document = Rc::new(RefCell::new(FakeDocument::brochure()));
        let sink = Rc::clone(&document);
        let render = site
            .controller()
            .subscribe(move |change| sink.borrow_mut().render(change));
        let controller = site.controller();
        controller.apply(controller.current());
        Self {
            store,
            site,
            document,
            _render: render,
        }
    }

    fn snapshot(&self) -> FakeDocument {
        self.document.borrow().clone()
    }
}

fn english_only_key_catalog() -> Catalog {
    let mut en = werkweb_i18n::builtin::dictionary(Language::En);
    en.insert("only_in_english", "English only");
    let nl = werkweb_i18n::builtin::dictionary(Language::Nl);
    Catalog::from_dictionaries([(Language::En, en), (Language::Nl, nl)]).expect("complete")
}

fn alice() -> ReservationForm {
    ReservationForm {
        name: "Alice".into(),
        contact: "alice@example.com".into(),
        prefs: "mornings".into(),
        voicemail: true,
        admin_propose: false,
    }
}

// ============================================================================
// Language scenarios
// ============================================================================

#[test]
fn apply_sets_lang_and_dir_for_every_language() {
    let harness = Harness::boot(Catalog::builtin(), MemoryStore::new(), None);
    let catalog = Catalog::builtin();
    for lang in Language::ALL {
        harness.site.controller().apply(lang);
        let doc = harness.snapshot();
        assert_eq!(doc.lang, lang.code());
        assert_eq!(doc.dir, catalog.dictionary(lang).dir().as_str());
    }
}

#[test]
fn rtl_dictionary_sets_rtl_dir() {
    let source = werkweb_i18n::builtin::dictionary(Language::Nl);
    let mut nl = Dictionary::with_direction(TextDirection::Rtl);
    for key in source.keys() {
        if let Some(value) = source.get(key) {
            nl.insert(key, value);
        }
    }
    let catalog = Catalog::from_dictionaries([
        (Language::En, werkweb_i18n::builtin::dictionary(Language::En)),
        (Language::Nl, nl),
    ])
    .expect("complete");
    let harness = Harness::boot(catalog, MemoryStore::new(), Some("nl"));
    assert_eq!(harness.snapshot().dir, "rtl");
    harness.site.controller().apply(Language::En);
    assert_eq!(harness.snapshot().dir, "ltr");
}

#[test]
fn applying_twice_equals_applying_once() {
    let harness = Harness::boot(Catalog::builtin(), MemoryStore::new(), None);
    harness.site.controller().apply(Language::Nl);
    let once = harness.snapshot();
    harness.site.controller().apply(Language::Nl);
    assert_eq!(harness.snapshot(), once);
}

#[test]
fn texts_and_placeholders_follow_language() {
    let harness = Harness::boot(Catalog::builtin(), MemoryStore::new(), None);
    let doc = harness.snapshot();
    assert_eq!(doc.title, "Document");
    assert_eq!(doc.elements[0].text, "Welcome");
    assert_eq!(doc.elements[1].text, "Reserve");
    assert_eq!(doc.elements[2].placeholder, "Name");
    assert_eq!(doc.elements[2].text, "");

    harness.site.controller().apply(Language::Nl);
    let doc = harness.snapshot();
    assert_eq!(doc.elements[0].text, "Welkom");
    assert_eq!(doc.elements[1].text, "Reserveren");
    assert_eq!(doc.elements[2].placeholder, "Naam");
}

#[test]
fn key_missing_in_active_language_keeps_prior_text() {
    let harness = Harness::boot(english_only_key_catalog(), MemoryStore::new(), None);
    assert_eq!(harness.snapshot().elements[3].text, "English only");

    harness.site.controller().apply(Language::Nl);
    let doc = harness.snapshot();
    assert_eq!(doc.elements[3].text, "English only");
    assert_eq!(doc.elements[0].text, "Welkom");
}

#[test]
fn key_missing_everywhere_keeps_original_text() {
    let harness = Harness::boot(Catalog::builtin(), MemoryStore::new(), Some("nl"));
    assert_eq!(harness.snapshot().elements[3].text, "original");
}

#[test]
fn initial_language_scenarios() {
    let harness = Harness::boot(Catalog::builtin(), MemoryStore::new(), Some("nl-BE"));
    assert_eq!(harness.site.controller().current(), Language::Nl);
    assert_eq!(harness.snapshot().lang, "nl");

    let harness = Harness::boot(Catalog::builtin(), MemoryStore::new(), Some("fr-FR"));
    assert_eq!(harness.site.controller().current(), Language::En);
    assert_eq!(harness.snapshot().lang, "en");
}

#[test]
fn stored_preference_survives_reload() {
    let harness = Harness::boot(Catalog::builtin(), MemoryStore::new(), Some("en-GB"));
    harness.site.controller().apply(Language::Nl);
    let saved = harness.store.peek("lang").expect("persisted");

    let reloaded = Harness::boot(
        Catalog::builtin(),
        MemoryStore::with_entries([("lang", saved.as_str())]),
        Some("en-GB"),
    );
    assert_eq!(reloaded.site.controller().current(), Language::Nl);
}

#[test]
fn tampered_preference_is_ignored() {
    let harness = Harness::boot(
        Catalog::builtin(),
        MemoryStore::with_entries([("lang", "<script>")]),
        Some("fr-FR"),
    );
    assert_eq!(harness.site.controller().current(), Language::En);
    assert_eq!(harness.store.peek("lang").as_deref(), Some("en"));
}

#[test]
fn language_still_applies_when_storage_is_disabled() {
    let store = MemoryStore::new();
    store.fail_reads(Some(StorageError::Unavailable));
    store.fail_writes(Some(StorageError::Unavailable));
    let harness = Harness::boot(Catalog::builtin(), store, Some("nl"));
    assert_eq!(harness.snapshot().lang, "nl");
    harness.site.controller().apply(Language::En);
    assert_eq!(harness.snapshot().elements[0].text, "Welcome");
}

// ============================================================================
// Reservation scenarios
// ============================================================================

#[test]
fn reservation_round_trip() {
    let harness = Harness::boot(Catalog::builtin(), MemoryStore::new(), None);
    let before = harness.site.book().entries().len();
    let response = harness.site.submit_reservation(&alice());
    assert!(response.clear_form);

    let entries = harness.site.book().entries();
    assert_eq!(entries.len(), before + 1);
    let entry = entries.last().expect("new entry");
    assert_eq!(entry.name, "Alice");
    assert_eq!(entry.contact, "alice@example.com");
    assert_eq!(entry.prefs, "mornings");
    assert!(entry.voicemail);
    assert!(!entry.admin_propose);
    assert!(DateTime::parse_from_rfc3339(&entry.created_at).is_ok());
    assert!(entry.created_at.ends_with('Z'));
}

#[test]
fn empty_name_shows_localized_error_and_keeps_list() {
    let harness = Harness::boot(Catalog::builtin(), MemoryStore::new(), None);
    harness.site.submit_reservation(&alice());
    let stored = harness.store.peek("reservations");

    harness.site.controller().apply(Language::Nl);
    let response = harness.site.submit_reservation(&ReservationForm {
        name: String::new(),
        ..alice()
    });

    assert_eq!(response.message, "Vul alstublieft naam en contact in.");
    assert!(!response.clear_form);
    assert_eq!(harness.store.peek("reservations"), stored);
}

#[test]
fn reservation_write_failure_still_reports_success() {
    let store = MemoryStore::new();
    store.fail_writes(Some(StorageError::QuotaExceeded));
    let harness = Harness::boot(Catalog::builtin(), store, None);
    let response = harness.site.submit_reservation(&alice());
    assert_eq!(
        response.message,
        "Reservation received — the admin will propose times and location (Doppio)."
    );
    assert!(response.clear_form);
    assert_eq!(response.receipt.map(|r| r.persisted), Some(false));
}
