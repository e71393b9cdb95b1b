//! File primitives for JSON documents
//!
//! Every function here opens, uses and drops its file handle within the call.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{Result, StoreError};

/// Opens a file for reading and writing, creating it empty if it doesn't exist
pub fn open_for_read_write(path: &Path) -> Result<File> {
    match OpenOptions::new().read(true).write(true).open(path) {
        Ok(file) => Ok(file),
        Err(e) if e.kind() == io::ErrorKind::NotFound => OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| StoreError::io(path, e)),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

/// Reads the first JSON value in the file at `path`
///
/// A missing file is created empty first, so reading a document that was
/// never written fails with [`StoreError::EndOfInput`].
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let mut content = Vec::new();
    {
        let mut file = open_for_read_write(path)?;
        file.read_to_end(&mut content)
            .map_err(|e| StoreError::io(path, e))?;
    }

    if content.iter().all(u8::is_ascii_whitespace) {
        return Err(StoreError::EndOfInput {
            path: path.to_path_buf(),
        });
    }

    // Anything after the first value is ignored
    let mut de = serde_json::Deserializer::from_slice(&content);
    T::deserialize(&mut de).map_err(|source| StoreError::Deserialize {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `value` as compact JSON and overwrites the file at `path`
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_vec(value).map_err(StoreError::Serialize)?;
    fs::write(path, content).map_err(|e| StoreError::io(path, e))
}
