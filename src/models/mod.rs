//! Data models for the exporter configuration.
//!
//! - [`SceneState`]: the host-owned settings the UI edits (paths, version, keys, toggles, texture hints)
//! - [`ExportDocument`]: the shape of `config.json` as written to and read from disk
//! - [`TextureMapping`]: candidate texture names per UV channel and [`TextureCategory`]
//!
//! # Architecture Note
//!
//! `SceneState` and `ExportDocument` are deliberately separate: the document renames,
//! regroups and filters what the scene holds. The translation between them lives in
//! [`Config`](crate::config::Config) and the [`services`](crate::services) helpers.

pub mod config;
pub mod scene_state;
pub mod textures;

pub use config::{DOCUMENTATION_URL, EncryptionKeyRecord, ExportDocument};
pub use scene_state::{CustomOption, EncryptionKeyEntry, SceneState, TextureHints};
pub use textures::{TextureCategory, TextureCategorySet, TextureMapping, TextureSlot, UvChannel};
