#![forbid(unsafe_code)]

//! Swallowed storage failures must still leave a `warn!` trail.
//!
//! Run:
//!   cargo test -p werkweb-web --test storage_failure_logging

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};
use werkweb_web::{
    Catalog, FixedClock, Language, LanguageController, MemoryStore, ReservationBook,
    ReservationForm, StorageError,
};

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    target: String,
    message: String,
    error: Option<String>,
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    error: Option<String>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "error" => self.error = Some(format!("{value:?}")),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_owned(),
            "error" => self.error = Some(value.to_owned()),
            _ => {}
        }
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl<S: tracing::Subscriber> Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_owned(),
            message: visitor.message,
            error: visitor.error,
        });
    }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedEvent>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default().with(EventCapture {
        events: Arc::clone(&events),
    });
    let result = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().unwrap().clone();
    (result, events)
}

fn warnings(events: &[CapturedEvent]) -> Vec<&CapturedEvent> {
    events
        .iter()
        .filter(|e| e.level == tracing::Level::WARN)
        .collect()
}

fn alice() -> ReservationForm {
    ReservationForm {
        name: "Alice".into(),
        contact: "alice@example.com".into(),
        ..ReservationForm::default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn language_write_failure_is_logged() {
    let store = MemoryStore::new();
    store.fail_writes(Some(StorageError::QuotaExceeded));
    let controller = LanguageController::start(Rc::new(Catalog::builtin()), &store, "lang", None);

    let ((), events) = capture(|| controller.apply(Language::Nl));

    let warns = warnings(&events);
    assert_eq!(warns.len(), 1, "events: {events:?}");
    assert_eq!(warns[0].target, "werkweb_web::controller");
    assert_eq!(warns[0].message, "failed to persist language preference");
    assert_eq!(warns[0].error.as_deref(), Some("storage quota exceeded"));
    assert_eq!(controller.current(), Language::Nl);
}

#[test]
fn reservation_write_failure_is_logged() {
    let store = MemoryStore::new();
    store.fail_writes(Some(StorageError::Unavailable));
    let book = ReservationBook::new(&store, "reservations");

    let (receipt, events) = capture(|| book.submit(&alice(), &FixedClock(0)));

    assert!(!receipt.expect("valid form").persisted);
    let warns = warnings(&events);
    assert_eq!(warns.len(), 1, "events: {events:?}");
    assert_eq!(warns[0].target, "werkweb_web::reservation");
    assert_eq!(warns[0].message, "failed to persist reservation");
}

#[test]
fn corrupt_reservation_list_is_logged() {
    let store = MemoryStore::with_entries([("reservations", "not json")]);
    let book = ReservationBook::new(&store, "reservations");

    let (receipt, events) = capture(|| book.submit(&alice(), &FixedClock(0)));

    assert!(receipt.expect("valid form").persisted);
    let warns = warnings(&events);
    assert_eq!(warns.len(), 1, "events: {events:?}");
    assert!(warns[0].message.contains("not a JSON array"));
}

#[test]
fn reservation_read_failure_skips_the_write() {
    let store = MemoryStore::with_entries([("reservations", r#"[{"name":"Bob"}]"#)]);
    store.fail_reads(Some(StorageError::Backend("read denied".into())));
    let book = ReservationBook::new(&store, "reservations");

    let (receipt, events) = capture(|| book.submit(&alice(), &FixedClock(0)));

    assert!(!receipt.expect("valid form").persisted);
    assert_eq!(store.write_count(), 0);
    assert_eq!(
        store.peek("reservations").as_deref(),
        Some(r#"[{"name":"Bob"}]"#)
    );
    let warns = warnings(&events);
    assert_eq!(warns.len(), 1, "events: {events:?}");
    assert_eq!(warns[0].target, "werkweb_web::reservation");
    assert_eq!(warns[0].message, "failed to read reservations; not writing");
    assert_eq!(warns[0].error.as_deref(), Some("storage error: read denied"));
}

#[test]
fn rejected_submission_does_not_warn() {
    let book = ReservationBook::new(MemoryStore::new(), "reservations");

    let (result, events) = capture(|| book.submit(&ReservationForm::default(), &FixedClock(0)));

    assert!(result.is_err());
    assert!(warnings(&events).is_empty());
}
