//! Persisted user settings
//!
//! A single flat JSON object on disk. Only `volume` is recognised today.
//!
//! # Architecture
//!
//! - `types`: `Settings` and `SettingsError`
//! - `store`: `SettingsStore` for reading and writing the file
//!
//! Reads never fail: a missing or unreadable file yields the defaults.
//! Writes replace the whole file at once and report failure to the caller.

pub mod store;
pub mod types;

pub use store::SettingsStore;
pub use types::*;
