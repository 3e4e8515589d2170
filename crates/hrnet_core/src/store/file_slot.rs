//! JSON file slot adapter.
//!
//! # Invariants
//! - The slot lives at `<dir>/<slot_name>.json`.
//! - Writes go to a sibling temp file first and are renamed into place,
//!   so a crash mid-write leaves the previous snapshot intact.
//! - An unreadable slot file is renamed to `<slot_name>.json.corrupt[.N]`
//!   and never replaced by a save.

use super::persistence::{
    decode_collection, encode_collection, preserved_names, EmployeePersistence, StorageError,
    StorageResult,
};
use crate::model::employee::Employee;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Slot persisted as one JSON file.
#[derive(Debug, Clone)]
pub struct FileSlotPersistence {
    slot_name: String,
    path: PathBuf,
}

impl FileSlotPersistence {
    pub fn new(dir: impl AsRef<Path>, slot_name: impl Into<String>) -> Self {
        let slot_name = slot_name.into();
        let path = dir.as_ref().join(format!("{slot_name}.json"));
        Self { slot_name, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl EmployeePersistence for FileSlotPersistence {
    fn load(&self) -> StorageResult<Vec<Employee>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => decode_collection(&self.slot_name, &payload),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(self.io_error(&self.path, err)),
        }
    }

    fn save(&mut self, employees: &[Employee]) -> StorageResult<()> {
        let payload = encode_collection(employees)?;
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|err| self.io_error(dir, err))?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, payload).map_err(|err| self.io_error(&tmp_path, err))?;
        fs::rename(&tmp_path, &self.path).map_err(|err| self.io_error(&self.path, err))?;
        Ok(())
    }

    fn preserve_unreadable(&mut self) -> StorageResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file_name = format!("{}.json", self.slot_name);
        let target = preserved_names(&file_name)
            .map(|name| self.path.with_file_name(name))
            .find(|candidate| !candidate.exists())
            .ok_or_else(|| {
                StorageError::Unavailable("no free name for preserved slot file".to_string())
            })?;

        fs::rename(&self.path, &target).map_err(|err| self.io_error(&self.path, err))?;
        Ok(Some(target.display().to_string()))
    }
}
