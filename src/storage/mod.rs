//! # Storage Layer
//!
//! Named JSON documents kept in one directory per application.
//!
//! ## Layout
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Documents | Compact JSON (any value) | `<home>/<app_dir>/{name}.json` |
//! | Key-value documents | Compact JSON object | `<home>/<app_dir>/{name}.json` |
//!
//! ## Reading Missing Documents
//!
//! Opening a document that doesn't exist creates it empty. A plain load of
//! such a document fails with [`StoreError::EndOfInput`]; [`JsonStore::set`]
//! treats that case as an empty object so the first key can be written.
//!
//! ## Concurrency
//!
//! None. There is no locking and writes overwrite the file in place, so a
//! document should have a single writer.
//!
//! ## Key Types
//!
//! - [`JsonStore`] - Load, store, get and set documents
//! - [`HomeProvider`] - Where the application directory is created
//! - [`StoreError`] - Every failure the store reports

mod error;
mod file;
mod home;
mod json_store;

pub use error::{Result, StoreError};
pub use file::{open_for_read_write, read_json, write_json};
pub use home::{FixedHome, HomeProvider, UserHome};
pub use json_store::{Document, JsonStore};
