use crate::models::SceneState;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// YAML persistence for a [`SceneState`].
///
/// Stands in for the host application's own scene file when running headless:
/// the exporter settings a user edited survive between sessions in `scene.yaml`.
#[derive(Debug, Clone)]
pub struct SceneStore {
    path: Utf8PathBuf,
}

impl SceneStore {
    /// Create a store backed by the given YAML file.
    ///
    /// The parent directory is created if it doesn't exist.
    pub fn new<P: AsRef<Utf8Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create scene directory: {}", parent))?;
        }

        Ok(Self { path })
    }

    /// Load the scene state.
    ///
    /// # Returns
    /// The loaded SceneState, or default if the file doesn't exist
    pub fn load(&self) -> Result<SceneState> {
        if !self.path.exists() {
            tracing::warn!("Scene file not found at {}, using defaults", self.path);
            return Ok(SceneState::default());
        }

        let file_contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read scene file: {}", self.path))?;

        let state: SceneState = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse scene file: {}", self.path))?;

        tracing::info!("Loaded scene state from {}", self.path);
        Ok(state)
    }

    /// Save the scene state, replacing the file.
    pub fn save(&self, state: &SceneState) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(state).context("Failed to serialize scene state to YAML")?;

        fs::write(&self.path, yaml_string)
            .with_context(|| format!("Failed to write scene file: {}", self.path))?;

        tracing::info!("Saved scene state to {}", self.path);
        Ok(())
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}
