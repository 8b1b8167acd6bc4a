//! Builder for creating and configuring PlanManager instances.

use std::path::{Path, PathBuf};

use super::PlanManager;
use crate::{
    error::{FsResultExt, PlanError, Result},
    store::{FileStore, SqliteStore},
};

const XDG_PREFIX: &str = "waypoint";
const DEFAULT_DATABASE_FILE: &str = "waypoint.db";
const DEFAULT_PLAN_DIRECTORY: &str = "plans";

/// Storage medium used by a built manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Single SQLite database file
    #[default]
    Sqlite,

    /// Directory with one JSON document per plan
    Files,
}

/// Builder for creating and configuring PlanManager instances.
#[derive(Debug, Clone, Default)]
pub struct PlanManagerBuilder {
    backend: Backend,
    database_path: Option<PathBuf>,
    plan_directory: Option<PathBuf>,
}

impl PlanManagerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the storage backend. Defaults to [`Backend::Sqlite`].
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom record directory for [`Backend::Files`].
    ///
    /// If not specified, uses `$XDG_DATA_HOME/waypoint/plans/`.
    pub fn with_plan_directory<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plan_directory = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the configured store and wraps it in a manager.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::XdgDirectory` if no default location can be
    /// resolved, `PlanError::FileSystem` if directories cannot be created and
    /// `PlanError::Database` if database initialization fails.
    pub fn build(self) -> Result<PlanManager> {
        match self.backend {
            Backend::Sqlite => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };

                if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).fs_context(parent)?;
                }

                Ok(PlanManager::new(SqliteStore::open(&db_path)?))
            }
            Backend::Files => {
                let directory = match self.plan_directory {
                    Some(path) => path,
                    None => Self::default_plan_directory()?,
                };

                Ok(PlanManager::new(FileStore::open(directory)?))
            }
        }
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .place_data_file(DEFAULT_DATABASE_FILE)
            .map_err(|e| PlanError::XdgDirectory(e.to_string()))
    }

    fn default_plan_directory() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .create_data_directory(DEFAULT_PLAN_DIRECTORY)
            .map_err(|e| PlanError::XdgDirectory(e.to_string()))
    }
}
