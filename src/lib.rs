//! localstore - Named JSON documents under the user's home directory
//!
//! Each application gets one directory, `~/<app_dir>`, holding one
//! `<name>.json` file per document. Whole documents are stored and loaded
//! as any serde type, and object documents can be read and written one key
//! at a time.
//!
//! ```no_run
//! use localstore::JsonStore;
//!
//! let store = JsonStore::new(".myapp", "config")?;
//! store.set_default("theme", "dark")?;
//! assert_eq!(store.get_default("theme")?, "dark");
//! # Ok::<(), localstore::StoreError>(())
//! ```

pub mod storage;

pub use storage::{Document, FixedHome, HomeProvider, JsonStore, Result, StoreError, UserHome};
