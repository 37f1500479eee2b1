use crate::error::StateError;
use crate::snapshot::Snapshot;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Holds the single most recent snapshot as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored snapshot.
    ///
    /// Returns `None` when there is no record yet, and also when the record cannot be read or
    /// parsed; the failure is logged and the caller takes the first-run path.
    pub fn load(&self) -> Option<Snapshot> {
        match self.try_load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                ::log::warn!("Error loading state, treating as first run: {}", e);
                None
            }
        }
    }

    /// Load the stored snapshot, reporting read and parse failures
    pub fn try_load(&self) -> Result<Option<Snapshot>, StateError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StateError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| StateError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Replace the stored snapshot.
    ///
    /// Writes a sibling temp file and renames it over the record, so a crash mid-write leaves
    /// the previous record intact.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StateError> {
        let json = serde_json::to_string_pretty(snapshot)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| self.write_error(source))?;
            }
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|source| self.write_error(source))?;
        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.write_error(source));
        }

        ::log::debug!("Saved snapshot to {:?}", self.path);
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> StateError {
        StateError::Write {
            path: self.path.clone(),
            source,
        }
    }
}
