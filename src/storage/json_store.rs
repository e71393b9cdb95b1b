//! JSON document store
//!
//! Documents live in `<home>/<app_dir>/<name>.json`. Whole documents can be
//! stored and loaded as any serde type; documents that are a flat JSON
//! object also support reading and writing single keys.

use std::fs::{self, DirBuilder};
use std::io;
use std::path::{Component, Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::error::{Result, StoreError};
use super::file::{read_json, write_json};
use super::home::{HomeProvider, UserHome};

/// Extension appended to every document name
const EXTENSION: &str = "json";

/// A key-value document: a JSON object with string keys
pub type Document = Map<String, Value>;

/// Store for named JSON documents in a single application directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    /// Directory containing the document files
    dir: PathBuf,

    /// Document used by the `*_default` methods
    default_name: String,
}

impl JsonStore {
    /// Opens a store in `app_dir` under the current user's home directory
    pub fn new(app_dir: impl AsRef<Path>, default_name: impl Into<String>) -> Result<Self> {
        Self::with_home(&UserHome, app_dir, default_name)
    }

    /// Opens a store in `app_dir` under the directory given by `home`
    ///
    /// The application directory is created if missing. Only one level is
    /// created: the home directory itself must already exist.
    pub fn with_home(
        home: &impl HomeProvider,
        app_dir: impl AsRef<Path>,
        default_name: impl Into<String>,
    ) -> Result<Self> {
        let home_dir = home.home_dir().ok_or(StoreError::Environment)?;
        let dir = nested(&home_dir, app_dir.as_ref());

        match fs::metadata(&dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(StoreError::io(
                    &dir,
                    io::Error::other("exists but is not a directory"),
                ));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => create_dir(&dir)?,
            Err(e) => return Err(StoreError::io(&dir, e)),
        }

        Ok(Self {
            dir,
            default_name: default_name.into(),
        })
    }

    /// Returns the directory containing the documents
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the name of the default document
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Returns the path to a document file
    ///
    /// Leading roots in `name` are dropped so the path stays inside [`dir`](Self::dir).
    pub fn path_for(&self, name: &str) -> PathBuf {
        let file_name = format!("{}.{}", name, EXTENSION);
        nested(&self.dir, Path::new(&file_name))
    }

    /// Loads a whole document
    ///
    /// A document that was never stored is created empty on disk and the
    /// load fails with [`StoreError::EndOfInput`].
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        read_json(&self.path_for(name))
    }

    /// Loads the default document
    pub fn load_default<T: DeserializeOwned>(&self) -> Result<T> {
        self.load(&self.default_name)
    }

    /// Replaces a whole document with `value`
    pub fn store<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        write_json(&self.path_for(name), value)
    }

    /// Replaces the default document with `value`
    pub fn store_default<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        self.store(&self.default_name, value)
    }

    /// Returns the value stored under `key` in a document
    ///
    /// Fails with [`StoreError::KeyNotFound`] if the document has no such
    /// key. A document that was never stored fails earlier, with
    /// [`StoreError::EndOfInput`], not with `KeyNotFound`.
    pub fn get(&self, name: &str, key: &str) -> Result<Value> {
        let mut doc: Document = self.load(name)?;
        doc.remove(key)
            .ok_or_else(|| StoreError::KeyNotFound(key.to_string()))
    }

    /// Returns the value stored under `key` in the default document
    pub fn get_default(&self, key: &str) -> Result<Value> {
        self.get(&self.default_name, key)
    }

    /// Returns the value under `key` decoded as `T`
    pub fn get_as<T: DeserializeOwned>(&self, name: &str, key: &str) -> Result<T> {
        let value = self.get(name, key)?;
        serde_json::from_value(value).map_err(|source| StoreError::Deserialize {
            path: self.path_for(name),
            source,
        })
    }

    /// Returns the value under `key` in the default document decoded as `T`
    pub fn get_default_as<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.get_as(&self.default_name, key)
    }

    /// Sets `key` to `value` in a document, rewriting the whole file
    ///
    /// A document that was never stored starts out as an empty object.
    pub fn set<T: Serialize + ?Sized>(&self, name: &str, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value).map_err(StoreError::Serialize)?;

        let mut doc: Document = match self.load(name) {
            Ok(doc) => doc,
            Err(StoreError::EndOfInput { .. }) => Document::new(),
            Err(e) => return Err(e),
        };

        doc.insert(key.to_string(), value);
        self.store(name, &doc)
    }

    /// Sets `key` to `value` in the default document
    pub fn set_default<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        self.set(&self.default_name, key, value)
    }
}

/// Joins `rel` onto `base` without letting a root or drive prefix replace `base`
fn nested(base: &Path, rel: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    for component in rel.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => path.push(other),
        }
    }
    path
}

/// Creates a single directory level, tolerating a concurrent creator
fn create_dir(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }

    match builder.create(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(StoreError::io(dir, e)),
    }
}
