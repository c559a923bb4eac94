#![forbid(unsafe_code)]

//! Browser-side behaviour of the Werkweb brochure site.
//!
//! Design goals:
//! - **Pure core**: the language controller, reservation capture and
//!   navigation disclosure run natively against a [`storage::KeyValueStore`],
//!   so every behaviour is testable without a page.
//! - **Thin adapter**: on `wasm32` the `wasm` module scans the DOM, feeds the
//!   core, and writes the results back.
//! - **Soft failures**: storage problems are logged and ignored; the only
//!   user-visible error is the required-fields message.

pub mod clock;
pub mod config;
pub mod controller;
pub mod nav;
pub mod reservation;
pub mod site;
pub mod storage;

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{WerkwebPage, current_page, start};

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, DomConfig, SiteConfig, StorageConfig};
pub use controller::{LanguageChange, LanguageController, Subscription};
pub use nav::{NavDisclosure, NavUpdate};
pub use reservation::{
    Receipt, ReservationBook, ReservationEntry, ReservationError, ReservationForm,
};
pub use site::{Site, SubmitResponse};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
pub use werkweb_i18n::{Catalog, Language};
