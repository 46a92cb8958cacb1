// umap-config - persistence of the BlenderUmap exporter settings
//
// This is the library crate: the scene-settings model, the config.json document and
// the translation between them. The binary crate (main.rs) is a headless front end.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{CONFIG_FILE_NAME, Config, ConfigError};
pub use models::{ExportDocument, SceneState, TextureMapping};
pub use state::{SceneHost, SceneStore};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
