//! JSON data files
//!
//! Writes go through a sibling `.tmp` file that is synced and renamed over
//! the target, so a data file is either fully replaced or left as it was.

use std::fmt::Display;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FlowError;

fn storage_error(action: &str, path: &Path, cause: impl Display) -> FlowError {
    FlowError::Storage(format!("{} {}: {}", action, path.display(), cause))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read a JSON data file; a missing file yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, FlowError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("Failed to read", path, e)),
    };

    serde_json::from_slice(&bytes).map_err(|e| storage_error("Failed to parse", path, e))
}

/// Replace a JSON data file in one step
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), FlowError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| storage_error("Failed to create", dir, e))?;
    }

    let mut contents = serde_json::to_vec_pretty(data)
        .map_err(|e| storage_error("Failed to serialize", path, e))?;
    contents.push(b'\n');

    let temp_path = temp_path_for(path);
    let result = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .and_then(|mut file| {
            file.write_all(&contents)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_path, path));

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("Failed to write", path, e));
    }

    tracing::trace!(path = %path.display(), bytes = contents.len(), "Wrote data file");
    Ok(())
}
