//! Camera snapshot persistence
//!
//! Stores the viewport matrix of each open document in a durable key-value
//! slot so the view can be restored when the document is reopened.
//!
//! The stored value is a flat JSON object with the six matrix fields:
//!
//! ```json
//! {"translateX":0,"translateY":0,"scaleX":1,"scaleY":1,"shearX":0,"shearY":0}
//! ```
//!
//! Reading is forgiving: a missing slot, a parse failure, a missing field, or
//! a degenerate scale all mean "no snapshot". Nothing is surfaced as an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{PersistenceError, PersistenceResult};

/// Persisted form of a camera matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSnapshot {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub shear_x: f64,
    pub shear_y: f64,
}

impl CameraSnapshot {
    /// Parse a stored value, returning `None` for anything that is not a
    /// complete, usable snapshot.
    pub fn from_json(raw: &str) -> Option<Self> {
        let snapshot: Self = match serde_json::from_str(raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!("Discarding camera snapshot: {}", e);
                return None;
            }
        };
        if !snapshot.is_usable() {
            tracing::warn!("Discarding degenerate camera snapshot {:?}", snapshot);
            return None;
        }
        Some(snapshot)
    }

    /// Serialize to the flat JSON form.
    pub fn to_json(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn is_usable(&self) -> bool {
        let fields = [
            self.translate_x,
            self.translate_y,
            self.scale_x,
            self.scale_y,
            self.shear_x,
            self.shear_y,
        ];
        fields.iter().all(|v| v.is_finite()) && self.scale_x != 0.0 && self.scale_y != 0.0
    }
}

/// Storage key of the camera slot for a document
pub fn camera_key(document_id: &str) -> String {
    format!("camera-{}", document_id)
}

/// Durable key-value slot storage for viewport state
pub trait ViewStateStore {
    /// Read the raw value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> PersistenceResult<()>;
}

/// Load the snapshot for a document, treating every failure as absence.
pub fn load_snapshot(store: &dyn ViewStateStore, document_id: &str) -> Option<CameraSnapshot> {
    let raw = store.read(&camera_key(document_id))?;
    CameraSnapshot::from_json(&raw)
}

/// Write the snapshot for a document.
pub fn save_snapshot(
    store: &mut dyn ViewStateStore,
    document_id: &str,
    snapshot: &CameraSnapshot,
) -> PersistenceResult<()> {
    store.write(&camera_key(document_id), &snapshot.to_json()?)
}

/// In-memory store, useful for tests and for hosts without durable storage
#[derive(Debug, Clone, Default)]
pub struct MemoryViewStore {
    slots: HashMap<String, String>,
}

impl MemoryViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl ViewStateStore for MemoryViewStore {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that keeps one JSON file per slot in a directory
#[derive(Debug, Clone)]
pub struct FileViewStore {
    directory: PathBuf,
}

impl FileViewStore {
    /// Create a store rooted at `directory`. The directory is created on the
    /// first write.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Create a store in the platform data directory
    pub fn in_data_dir() -> PersistenceResult<Self> {
        let base = dirs::data_dir().ok_or(PersistenceError::NoDirectory)?;
        Ok(Self::new(base.join("boardkit").join("views")))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn slot_path(&self, key: &str) -> PersistenceResult<PathBuf> {
        if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.directory.join(format!("{}.json", key)))
    }
}

impl ViewStateStore for FileViewStore {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.slot_path(key).ok()?;
        std::fs::read_to_string(path).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        let path = self.slot_path(key)?;
        std::fs::create_dir_all(&self.directory)?;
        std::fs::write(path, value)?;
        Ok(())
    }
}
