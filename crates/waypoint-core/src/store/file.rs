//! Directory-of-JSON-files plan store.
//!
//! Each plan is a pretty-printed JSON document at `<root>/<name>.json`.
//! Writes go to a temporary file in the same directory which is then renamed
//! over the target, so a concurrent reader sees the old or the new document.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::debug;
use tempfile::NamedTempFile;

use super::Store;
use crate::{
    error::{FsResultExt, PlanError, Result},
    models::Plan,
};

const RECORD_EXTENSION: &str = "json";

/// Plan store backed by a directory of JSON documents.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Uses `root` as the record directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        debug!("Opening plan directory at {}", root.display());
        fs::create_dir_all(&root).fs_context(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.{RECORD_EXTENSION}"))
    }

    /// Plan name for a directory entry, if the entry is a record.
    fn record_name(path: &Path) -> Option<String> {
        if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
            return None;
        }
        let stem = path.file_stem()?.to_str()?;
        if stem.is_empty() || stem.starts_with('.') {
            return None;
        }
        Some(stem.to_string())
    }
}

impl Store for FileStore {
    fn read(&self, name: &str) -> Result<Plan> {
        let path = self.record_path(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(PlanError::plan_not_found(name));
            }
            Err(e) => return Err(e).fs_context(&path),
        };

        serde_json::from_slice(&bytes).map_err(|source| PlanError::MalformedRecord {
            name: name.to_string(),
            source,
        })
    }

    fn write(&mut self, name: &str, plan: &Plan) -> Result<()> {
        let path = self.record_path(name);
        debug!("Writing plan '{name}' to {}", path.display());

        let mut contents =
            serde_json::to_vec_pretty(plan).map_err(|source| PlanError::MalformedRecord {
                name: name.to_string(),
                source,
            })?;
        contents.push(b'\n');

        let mut temp = NamedTempFile::new_in(&self.root).fs_context(&self.root)?;
        temp.write_all(&contents).fs_context(temp.path())?;
        temp.as_file().sync_all().fs_context(temp.path())?;
        temp.persist(&path)
            .map_err(|e| PlanError::FileSystem {
                path: path.clone(),
                source: e.error,
            })?;

        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let path = self.record_path(name);
        debug!("Deleting plan '{name}' at {}", path.display());

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PlanError::plan_not_found(name)),
            Err(e) => Err(e).fs_context(&path),
        }
    }

    fn enumerate(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).fs_context(&self.root)? {
            let entry = entry.fs_context(&self.root)?;
            if !entry.file_type().fs_context(&entry.path())?.is_file() {
                continue;
            }
            if let Some(name) = Self::record_name(&entry.path()) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn exists(&self, name: &str) -> Result<bool> {
        let path = self.record_path(name);
        path.try_exists().fs_context(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_name_filters_entries() {
        assert_eq!(
            FileStore::record_name(Path::new("/plans/p1.json")),
            Some("p1".to_string())
        );
        assert_eq!(FileStore::record_name(Path::new("/plans/p1.txt")), None);
        assert_eq!(FileStore::record_name(Path::new("/plans/.tmpX1.json")), None);
        assert_eq!(FileStore::record_name(Path::new("/plans/.tmpAb12")), None);
        assert_eq!(FileStore::record_name(Path::new("/plans/README")), None);
    }
}
