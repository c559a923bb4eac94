#![forbid(unsafe_code)]

//! Reservation capture into browser-local storage.
//!
//! Each valid submission appends one [`ReservationEntry`] to a JSON array
//! stored under the configured reservations key. Entries are never mutated
//! or deleted here.
//!
//! # Failure Modes
//!
//! - **Absent or unparseable list**: treated as an empty list. Never fails.
//! - **Storage read failure**: nothing is written, so entries already
//!   stored stay intact. Logged with `warn!` and reported as
//!   [`Receipt::persisted`] `== false`.
//! - **Storage write failure**: logged with `warn!` and reported as
//!   [`Receipt::persisted`] `== false`. The submission itself still succeeds.
//! - **Concurrent tabs**: the read-modify-write is not atomic. Two tabs
//!   submitting at the same moment can each overwrite the other's append,
//!   dropping one entry.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::clock::{Clock, iso_timestamp};
use crate::storage::{KeyValueStore, StorageResult};

/// Raw values read from the reservation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationForm {
    pub name: String,
    pub contact: String,
    /// Free-text preferred times.
    pub prefs: String,
    pub voicemail: bool,
    pub admin_propose: bool,
}

/// One persisted reservation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationEntry {
    /// Creation time in Unix epoch milliseconds.
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub prefs: String,
    pub voicemail: bool,
    pub admin_propose: bool,
    /// ISO-8601 UTC creation time with millisecond precision.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Rejected submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationError {
    /// Name or contact is empty after trimming.
    MissingRequired,
}

impl std::fmt::Display for ReservationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "name and contact are required"),
        }
    }
}

impl std::error::Error for ReservationError {}

/// Outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub entry: ReservationEntry,
    /// False when the list could not be written back.
    pub persisted: bool,
}

/// Append-only reservation list backed by a [`KeyValueStore`].
#[derive(Debug)]
pub struct ReservationBook<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ReservationBook<S> {
    #[must_use]
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Validate `form` and append it to the stored list.
    ///
    /// On [`ReservationError::MissingRequired`] storage is not touched.
    pub fn submit(
        &self,
        form: &ReservationForm,
        clock: &dyn Clock,
    ) -> Result<Receipt, ReservationError> {
        let name = form.name.trim();
        let contact = form.contact.trim();
        if name.is_empty() || contact.is_empty() {
            debug!(
                target: "werkweb_web::reservation",
                name_present = !name.is_empty(),
                contact_present = !contact.is_empty(),
                "rejected reservation with missing required fields"
            );
            return Err(ReservationError::MissingRequired);
        }

        let now = clock.now_millis();
        let entry = ReservationEntry {
            id: now,
            name: name.to_owned(),
            contact: contact.to_owned(),
            prefs: form.prefs.clone(),
            voicemail: form.voicemail,
            admin_propose: form.admin_propose,
            created_at: iso_timestamp(now),
        };

        let persisted = self.append(&entry);
        Ok(Receipt { entry, persisted })
    }

    /// Well-formed entries currently stored, oldest first.
    ///
    /// Records that do not match [`ReservationEntry`] are skipped. An
    /// unreadable store yields no entries.
    #[must_use]
    pub fn entries(&self) -> Vec<ReservationEntry> {
        let list = match self.load_raw() {
            Ok(list) => list,
            Err(err) => {
                warn!(
                    target: "werkweb_web::reservation",
                    key = self.key.as_str(),
                    error = %err,
                    "failed to read reservations"
                );
                return Vec::new();
            }
        };
        list.into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    }

    fn append(&self, entry: &ReservationEntry) -> bool {
        let mut list = match self.load_raw() {
            Ok(list) => list,
            Err(err) => {
                warn!(
                    target: "werkweb_web::reservation",
                    key = self.key.as_str(),
                    error = %err,
                    "failed to read reservations; not writing"
                );
                return false;
            }
        };
        match serde_json::to_value(entry) {
            Ok(value) => list.push(value),
            Err(err) => {
                warn!(
                    target: "werkweb_web::reservation",
                    error = %err,
                    "failed to encode reservation"
                );
                return false;
            }
        }

        let encoded = match serde_json::to_string(&list) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(
                    target: "werkweb_web::reservation",
                    error = %err,
                    "failed to encode reservation list"
                );
                return false;
            }
        };

        match self.store.set(&self.key, &encoded) {
            Ok(()) => {
                debug!(
                    target: "werkweb_web::reservation",
                    id = entry.id,
                    stored = list.len(),
                    "stored reservation"
                );
                true
            }
            Err(err) => {
                warn!(
                    target: "werkweb_web::reservation",
                    key = self.key.as_str(),
                    error = %err,
                    "failed to persist reservation"
                );
                false
            }
        }
    }

    /// Stored list as raw JSON values so records of unknown shape survive a
    /// rewrite. Absent or unparseable data reads as empty; only the store
    /// itself failing is an error.
    fn load_raw(&self) -> StorageResult<Vec<Value>> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        Ok(match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(list) => list,
            Err(err) => {
                warn!(
                    target: "werkweb_web::reservation",
                    key = self.key.as_str(),
                    error = %err,
                    "stored reservations are not a JSON array; starting from an empty list"
                );
                Vec::new()
            }
        })
    }
}
