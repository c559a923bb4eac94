#![forbid(unsafe_code)]

//! Fallible key/value storage capability.
//!
//! Browser `localStorage` can be disabled, full, or throw on access. Every
//! operation therefore returns a [`StorageResult`]; callers that choose to
//! ignore a failure do so explicitly at the call site.
//!
//! All methods take `&self`: the page is single-threaded and the same store
//! is shared by the language controller and the reservation book.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Storage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is disabled or not exposed by the host.
    Unavailable,
    /// The write exceeded the host's quota.
    QuotaExceeded,
    /// Any other host error, with its message.
    Backend(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "storage unavailable"),
            Self::QuotaExceeded => write!(f, "storage quota exceeded"),
            Self::Backend(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key/value store with browser-local semantics.
pub trait KeyValueStore {
    /// Read a key. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

/// In-memory store.
///
/// Used natively and in tests. Failures can be injected to exercise the
/// soft-failure paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    read_failure: RefCell<Option<StorageError>>,
    write_failure: RefCell<Option<StorageError>>,
    writes: Cell<u64>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `(key, value)` pairs.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned())),
        );
        store
    }

    /// Make every subsequent read fail with `error` (or succeed again with `None`).
    pub fn fail_reads(&self, error: Option<StorageError>) {
        *self.read_failure.borrow_mut() = error;
    }

    /// Make every subsequent write fail with `error` (or succeed again with `None`).
    pub fn fail_writes(&self, error: Option<StorageError>) {
        *self.write_failure.borrow_mut() = error;
    }

    /// Raw value of a key, bypassing injected failures.
    #[must_use]
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> u64 {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if let Some(err) = self.read_failure.borrow().clone() {
            return Err(err);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(err) = self.write_failure.borrow().clone() {
            return Err(err);
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
