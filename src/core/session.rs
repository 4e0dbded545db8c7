//! core::session
//!
//! Per-chain session persistence: which project directory is "current".
//!
//! # Storage Layout
//!
//! One plain-text marker file per chain under the store root:
//!
//! ```text
//! <root>/icp_session.txt    <- single line: absolute project path
//! <root>/projects/<name>/   <- default location for new projects
//! ```
//!
//! # Design
//!
//! The store takes its root directory at construction, and every command
//! handler is handed a store instance rather than reaching for hidden
//! module state. Tests isolate themselves with a temp-dir root. The
//! default root resolves `$CANISTRY_DATA_DIR` first, then the platform
//! data directory.
//!
//! There is no cross-process locking. Concurrent `set` calls for the same
//! chain race and the last write wins; the tool assumes one interactive
//! user per machine. Markers are never deleted automatically — a recorded
//! path may no longer exist on disk, and callers must check.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::chain::Chain;

/// Environment variable overriding the default store root.
pub const DATA_DIR_ENV: &str = "CANISTRY_DATA_DIR";

/// Directory name under the platform data dir.
const APP_DIR: &str = "canistry";

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read session marker '{path}': {source}")]
    ReadMarker {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write session marker '{path}': {source}")]
    WriteMarker {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("platform data directory not found")]
    NoDataDir,
}

/// Marker-file store for the active project path of each chain.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at an explicit directory.
    ///
    /// The directory does not need to exist yet; it is created on the
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store at the default per-user location.
    ///
    /// Resolution order:
    /// 1. `$CANISTRY_DATA_DIR` if set
    /// 2. `<platform data dir>/canistry`
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoDataDir` if neither can be resolved.
    pub fn open_default() -> Result<Self, SessionError> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(Self::new(dir));
            }
        }
        let base = dirs::data_dir().ok_or(SessionError::NoDataDir)?;
        Ok(Self::new(base.join(APP_DIR)))
    }

    /// The store's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Default directory for a named project under this store.
    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.root.join("projects").join(name)
    }

    /// Record `path` as the active project for `chain`.
    ///
    /// Creates `path` (and the store root) if needed, then overwrites the
    /// chain's marker. Pre-existing directories are not an error; a prior
    /// session for the same chain is silently replaced.
    pub fn set(&self, chain: Chain, path: &Path) -> Result<(), SessionError> {
        fs::create_dir_all(path).map_err(|e| SessionError::CreateDir {
            path: path.to_path_buf(),
            source: e,
        })?;
        fs::create_dir_all(&self.root).map_err(|e| SessionError::CreateDir {
            path: self.root.clone(),
            source: e,
        })?;

        let marker = self.marker_path(chain);
        // Write to a temp file first, then rename, so a torn write never
        // leaves a half-written marker.
        let temp = marker.with_extension("tmp");
        fs::write(&temp, format!("{}", path.display())).map_err(|e| {
            SessionError::WriteMarker {
                path: marker.clone(),
                source: e,
            }
        })?;
        fs::rename(&temp, &marker).map_err(|e| SessionError::WriteMarker {
            path: marker,
            source: e,
        })?;
        Ok(())
    }

    /// Read the active project path for `chain`.
    ///
    /// Returns `Ok(None)` if no session was ever recorded for the chain —
    /// distinct from any valid path, so callers branch explicitly instead
    /// of treating an empty string as a path. The returned path is not
    /// checked for existence.
    pub fn get(&self, chain: Chain) -> Result<Option<PathBuf>, SessionError> {
        let marker = self.marker_path(chain);
        match fs::read_to_string(&marker) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(PathBuf::from(trimmed)))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::ReadMarker {
                path: marker,
                source: e,
            }),
        }
    }

    /// Path of the marker file for `chain`.
    fn marker_path(&self, chain: Chain) -> PathBuf {
        self.root.join(chain.session_marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_on_unset_chain_is_none() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.get(Chain::Icp).unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        let project = dir.path().join("projects").join("dragon");

        store.set(Chain::Icp, &project).unwrap();
        assert_eq!(store.get(Chain::Icp).unwrap(), Some(project.clone()));
        assert!(project.is_dir());
    }

    #[test]
    fn set_overwrites_prior_session() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        let first = dir.path().join("first");
        let second = dir.path().join("second");

        store.set(Chain::Icp, &first).unwrap();
        store.set(Chain::Icp, &second).unwrap();
        assert_eq!(store.get(Chain::Icp).unwrap(), Some(second));
    }

    #[test]
    fn set_tolerates_existing_directory() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        let project = dir.path().join("existing");
        fs::create_dir_all(&project).unwrap();

        store.set(Chain::Icp, &project).unwrap();
        assert_eq!(store.get(Chain::Icp).unwrap(), Some(project));
    }

    #[test]
    fn marker_holds_a_single_line() {
        let dir = TempDir::new().unwrap();
        let store = SessionStore::new(dir.path());
        let project = dir.path().join("p");
        store.set(Chain::Icp, &project).unwrap();

        let raw = fs::read_to_string(dir.path().join("icp_session.txt")).unwrap();
        assert_eq!(raw, format!("{}", project.display()));
        assert!(!raw.contains('\n'));
    }
}
