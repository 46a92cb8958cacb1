use crate::models::{
    CustomOption, DOCUMENTATION_URL, EncryptionKeyEntry, ExportDocument, TextureMapping,
};
use crate::services::{self, VersionSelection};
use crate::state::SceneHost;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use thiserror::Error;

/// File name of the exported configuration, inside the export directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can occur while writing or reading `config.json`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON: {source}")]
    Malformed {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but a required key is missing or has the wrong type.
    #[error("{path} is not a valid exporter config: {source}")]
    InvalidDocument {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    fn from_parse(path: &Utf8Path, source: serde_json::Error) -> Self {
        let path = path.to_path_buf();
        if source.is_data() {
            ConfigError::InvalidDocument { path, source }
        } else {
            ConfigError::Malformed { path, source }
        }
    }
}

/// Snapshot of the exporter settings, and the entry point for `config.json` persistence.
///
/// A `Config` is taken from a [`SceneHost`] with [`snapshot`](Self::snapshot). Exporting
/// re-reads the texture hints and the primary key from the host rather than using the
/// snapshot, so whatever the UI shows at export time is what gets written. Loading pushes
/// every field of the file back into the host.
///
/// # Usage
///
/// ```ignore
/// let config = Config::snapshot(&scene);
/// config.dump(&scene, config.export_path())?;
///
/// // later, restore the settings the file holds
/// Config::snapshot(&scene).load(&mut scene)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub paks_directory: String,
    pub export_path: Utf8PathBuf,

    pub use_custom_version: bool,
    pub custom_version: String,
    pub ue_version: String,

    pub encryption_keys: Vec<EncryptionKeyEntry>,

    pub dump_assets: bool,
    pub object_cache_size: i32,
    pub read_materials: bool,
    pub export_to_dds: bool,
    pub export_building_foundations: bool,
    pub export_package: String,

    pub textures: TextureMapping,
    pub custom_options: Vec<CustomOption>,
}

impl Config {
    /// Read every exporter field from the host.
    pub fn snapshot<H: SceneHost + ?Sized>(host: &H) -> Self {
        Self {
            paks_directory: host.paks_directory(),
            export_path: Utf8PathBuf::from(host.export_path()),
            use_custom_version: host.use_custom_version(),
            custom_version: host.custom_version(),
            ue_version: host.ue_version(),
            encryption_keys: host.encryption_keys(),
            dump_assets: host.dump_assets(),
            object_cache_size: host.object_cache_size(),
            read_materials: host.read_materials(),
            export_to_dds: host.export_to_dds(),
            export_building_foundations: host.export_building_foundations(),
            export_package: host.export_package(),
            textures: TextureMapping::from_host(host),
            custom_options: host.custom_options(),
        }
    }

    pub fn export_path(&self) -> &Utf8Path {
        &self.export_path
    }

    /// Path of the config file inside `directory`.
    pub fn config_path_in(directory: &Utf8Path) -> Utf8PathBuf {
        directory.join(CONFIG_FILE_NAME)
    }

    /// Build the document to write.
    ///
    /// The primary key, the texture hints and the custom-options toggle are read from
    /// `host` at call time; everything else comes from the snapshot.
    pub fn to_document<H: SceneHost + ?Sized>(&self, host: &H) -> ExportDocument {
        let options_overrides = host
            .use_custom_options()
            .then(|| services::overrides_map(&self.custom_options));

        ExportDocument {
            documentation: DOCUMENTATION_URL.to_string(),
            paks_directory: self.paks_directory.clone(),
            export_path: Some(self.export_path.to_string()),
            ue_version: services::effective_version(
                self.use_custom_version,
                &self.custom_version,
                &self.ue_version,
            ),
            dump_assets: self.dump_assets,
            object_cache_size: self.object_cache_size,
            read_materials: self.read_materials,
            export_to_dds: self.export_to_dds,
            export_building_foundations: self.export_building_foundations,
            export_package: self.export_package.clone(),
            encryption_keys: services::to_export_list(&self.encryption_keys, &host.default_key()),
            textures: TextureMapping::from_host(host),
            options_overrides,
        }
    }

    /// The document as 4-space indented JSON.
    pub fn to_json<H: SceneHost + ?Sized>(&self, host: &H) -> Result<String, ConfigError> {
        let document = self.to_document(host);

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        document.serialize(&mut serializer)?;

        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Write `config.json` into `directory`, replacing any existing file.
    ///
    /// # Returns
    /// The path of the written file
    pub fn dump<H: SceneHost + ?Sized>(
        &self,
        host: &H,
        directory: &Utf8Path,
    ) -> Result<Utf8PathBuf, ConfigError> {
        let path = Self::config_path_in(directory);
        let json = self.to_json(host)?;

        fs::write(&path, json).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!("Saved exporter config to {}", path);
        Ok(path)
    }

    /// Read and validate a config file.
    ///
    /// # Returns
    /// `None` if the file doesn't exist
    pub fn read_document(path: &Utf8Path) -> Result<Option<ExportDocument>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // Undecodable UTF-8 surfaces as a syntax error, not an I/O failure
        let document = serde_json::from_slice(&bytes)
            .map_err(|source| ConfigError::from_parse(path, source))?;

        Ok(Some(document))
    }

    /// Load `<ExportPath>/config.json` into the host.
    ///
    /// # Returns
    /// `false` if there was no file to load, in which case the host is untouched
    pub fn load<H: SceneHost + ?Sized>(&self, host: &mut H) -> Result<bool, ConfigError> {
        self.load_from(host, &self.export_path)
    }

    /// Load `config.json` from `directory` into the host.
    ///
    /// The whole file is validated before any host field is written.
    pub fn load_from<H: SceneHost + ?Sized>(
        &self,
        host: &mut H,
        directory: &Utf8Path,
    ) -> Result<bool, ConfigError> {
        let path = Self::config_path_in(directory);

        let Some(document) = Self::read_document(&path)? else {
            tracing::debug!("No exporter config at {}, nothing to load", path);
            return Ok(false);
        };

        self.apply_document(host, document);

        tracing::info!("Loaded exporter config from {}", path);
        Ok(true)
    }

    /// Write every field of a document into the host.
    pub fn apply_document<H: SceneHost + ?Sized>(&self, host: &mut H, document: ExportDocument) {
        host.set_paks_directory(document.paks_directory);

        let export_path = document
            .export_path
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| self.export_path.to_string());
        host.set_export_path(export_path);

        VersionSelection::classify(&document.ue_version).apply_to(host);

        host.set_dump_assets(document.dump_assets);
        host.set_object_cache_size(document.object_cache_size);
        host.set_read_materials(document.read_materials);
        host.set_export_to_dds(document.export_to_dds);
        host.set_export_building_foundations(document.export_building_foundations);
        host.set_export_package(document.export_package);

        services::apply_export_list(&document.encryption_keys, host);

        services::apply_overrides(&document.options_overrides.unwrap_or_default(), host);

        document.textures.apply_to(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SceneState, TextureCategory, TextureSlot, UvChannel};
    use crate::state::MockSceneHost;
    use tempfile::TempDir;

    fn create_test_dir() -> (TempDir, Utf8PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        (temp_dir, dir)
    }

    fn sample_scene(export_path: &Utf8Path) -> SceneState {
        let mut scene = SceneState::default();
        scene.paks_directory = "C:/Fortnite/FortniteGame/Content/Paks".to_string();
        scene.export_path = export_path.to_string();
        scene.ue_version = "GAME_UE4_26".to_string();
        scene.default_key = "0xPRIMARY".to_string();
        scene.push_encryption_key(EncryptionKeyEntry::new("", "pakchunk1000-*", "0x1000"));
        scene.dump_assets = true;
        scene.object_cache_size = 300;
        scene.export_package = "/Game/Athena/Apollo/Maps/Apollo_Terrain".to_string();
        scene
    }

    #[test]
    fn test_document_key_order_and_indent() {
        let (_temp_dir, dir) = create_test_dir();
        let scene = sample_scene(&dir);

        let json = Config::snapshot(&scene).to_json(&scene).unwrap();
        assert!(json.starts_with("{\n    \"_Documentation\": "));
        assert!(json.contains("\n        \"UV1\": {"));

        let documentation = json.find("_Documentation").unwrap();
        let paks = json.find("PaksDirectory").unwrap();
        let keys = json.find("EncryptionKeys").unwrap();
        let textures = json.find("Textures").unwrap();
        assert!(documentation < paks && paks < keys && keys < textures);
        assert!(!json.contains("OptionsOverrides"));
    }

    #[test]
    fn test_custom_version_is_exported_when_enabled() {
        let (_temp_dir, dir) = create_test_dir();
        let mut scene = sample_scene(&dir);
        scene.use_custom_version = true;
        scene.custom_version = "5.3".to_string();

        let document = Config::snapshot(&scene).to_document(&scene);
        assert_eq!(document.ue_version, "5.3");
    }

    #[test]
    fn test_options_gated_by_current_toggle() {
        let (_temp_dir, dir) = create_test_dir();
        let mut scene = sample_scene(&dir);
        scene.push_custom_option(CustomOption::new("bExportLights", true));
        let config = Config::snapshot(&scene);

        assert_eq!(config.to_document(&scene).options_overrides, None);

        scene.use_custom_options = true;
        let overrides = config.to_document(&scene).options_overrides.unwrap();
        assert_eq!(overrides.len(), 1);
        assert!(overrides["bExportLights"]);
    }

    #[test]
    fn test_export_rereads_default_key_and_textures() {
        let slot = TextureSlot::new(UvChannel::Uv1, TextureCategory::Diffuse);
        let config = Config::snapshot(&SceneState::default());

        let mut host = MockSceneHost::new();
        host.expect_default_key().times(1).return_const("  0xLIVE  ".to_string());
        host.expect_use_custom_options().return_const(false);
        host.expect_texture_hint()
            .returning(move |s| if s == slot { "LiveAlbedo".to_string() } else { String::new() });

        let document = config.to_document(&host);
        assert_eq!(document.encryption_keys[0].key, "0xLIVE");
        assert_eq!(document.textures.candidates(slot), ["LiveAlbedo"]);
        assert_eq!(document.textures.uv2, TextureMapping::default().uv2);
    }

    #[test]
    fn test_load_without_file_touches_nothing() {
        let (_temp_dir, dir) = create_test_dir();
        let config = Config::snapshot(&sample_scene(&dir));

        // No expectations: any host call would panic.
        let mut host = MockSceneHost::new();
        assert!(!config.load(&mut host).unwrap());
    }

    #[test]
    fn test_dump_then_load_restores_scene() {
        let (_temp_dir, dir) = create_test_dir();
        let mut scene = sample_scene(&dir);
        scene.use_custom_options = true;
        scene.push_custom_option(CustomOption::new("bSkipWater", false));

        let config = Config::snapshot(&scene);
        let path = config.dump(&scene, &dir).unwrap();
        assert_eq!(path, dir.join("config.json"));

        let mut restored = SceneState::default();
        restored.export_path = dir.to_string();
        restored.push_encryption_key(EncryptionKeyEntry::new("STALE", "", "0x0"));
        assert!(Config::snapshot(&restored).load(&mut restored).unwrap());

        assert_eq!(restored.paks_directory, scene.paks_directory);
        assert_eq!(restored.ue_version, "GAME_UE4_26");
        assert_eq!(restored.default_key, "0xPRIMARY");
        assert_eq!(restored.encryption_keys, scene.encryption_keys);
        assert_eq!(restored.custom_options, scene.custom_options);
        assert_eq!(restored.object_cache_size, 300);
        assert!(restored.dump_assets);
        assert_eq!(restored.texture_hints, scene.texture_hints);
    }

    #[test]
    fn test_empty_export_path_falls_back() {
        let (_temp_dir, dir) = create_test_dir();
        let scene = sample_scene(&dir);
        let mut document = Config::snapshot(&scene).to_document(&scene);
        document.export_path = Some(String::new());

        let mut target = SceneState::default();
        let config = Config::snapshot(&scene);
        config.apply_document(&mut target, document);
        assert_eq!(target.export_path, dir.as_str());
    }

    #[test]
    fn test_missing_required_key_leaves_host_untouched() {
        let (_temp_dir, dir) = create_test_dir();
        let scene = sample_scene(&dir);
        let config = Config::snapshot(&scene);
        let path = config.dump(&scene, &dir).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
        value.as_object_mut().unwrap().remove("ExportPackage");
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

        let mut target = SceneState::default();
        let err = config.load(&mut target).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDocument { .. }));
        assert_eq!(target, SceneState::default());
    }

    #[test]
    fn test_malformed_json() {
        let (_temp_dir, dir) = create_test_dir();
        fs::write(dir.join("config.json"), "{ \"PaksDirectory\": ").unwrap();

        let err = Config::read_document(&dir.join("config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let (_temp_dir, dir) = create_test_dir();
        fs::write(dir.join("config.json"), b"{\"PaksDirectory\": \"\xff\xfe\"}").unwrap();

        let mut scene = SceneState::default();
        scene.export_path = dir.to_string();
        let err = Config::snapshot(&scene).load(&mut scene).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
        assert_eq!(scene.paks_directory, "");
    }

    #[test]
    fn test_dump_into_missing_directory_fails() {
        let (_temp_dir, dir) = create_test_dir();
        let scene = sample_scene(&dir);
        let err = Config::snapshot(&scene)
            .dump(&scene, &dir.join("does").join("not").join("exist"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
