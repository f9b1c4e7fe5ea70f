//! BoardKit Settings Crate
//!
//! Handles configuration loading/validation and the per-document camera
//! snapshot store.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, GestureSettings, PersistenceSettings, ResizeSettings, ViewportSettings};
pub use error::{
    ConfigError, ConfigResult, PersistenceError, PersistenceResult, SettingsError, SettingsResult,
};
pub use persistence::{
    camera_key, load_snapshot, save_snapshot, CameraSnapshot, FileViewStore, MemoryViewStore,
    ViewStateStore,
};
