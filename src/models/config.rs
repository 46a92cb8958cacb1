use crate::models::textures::TextureMapping;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Link written into every exported document for people opening it by hand.
pub const DOCUMENTATION_URL: &str = "https://github.com/Amrsatrio/BlenderUmap/blob/master/README.md";

/// The on-disk `config.json` consumed by the exporter.
///
/// Field order here is the key order of the written file. Every field without a
/// `default` is required when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Informational only; ignored on load.
    #[serde(rename = "_Documentation", default)]
    pub documentation: String,

    #[serde(rename = "PaksDirectory")]
    pub paks_directory: String,

    /// Absent, `null` or empty falls back to the export path already in memory.
    #[serde(rename = "ExportPath", default)]
    pub export_path: Option<String>,

    /// An enumerated engine tag (`GAME_UE4_26`) or a free-form custom version.
    #[serde(rename = "UEVersion")]
    pub ue_version: String,

    #[serde(rename = "bDumpAssets")]
    pub dump_assets: bool,

    #[serde(rename = "ObjectCacheSize")]
    pub object_cache_size: i32,

    #[serde(rename = "bReadMaterials")]
    pub read_materials: bool,

    #[serde(rename = "bExportToDDSWhenPossible")]
    pub export_to_dds: bool,

    #[serde(rename = "bExportBuildingFoundations")]
    pub export_building_foundations: bool,

    #[serde(rename = "ExportPackage")]
    pub export_package: String,

    #[serde(rename = "EncryptionKeys")]
    pub encryption_keys: Vec<EncryptionKeyRecord>,

    #[serde(rename = "Textures")]
    pub textures: TextureMapping,

    /// Only written while custom options are enabled; read whenever present.
    ///
    /// An explicit `null` is accepted and loads the same as an absent key (no overrides).
    #[serde(rename = "OptionsOverrides", default, skip_serializing_if = "Option::is_none")]
    pub options_overrides: Option<IndexMap<String, bool>>,
}

/// One element of the exported `EncryptionKeys` array.
///
/// `Guid` and `FileName` are omitted when empty; `Key` is always present and
/// required on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionKeyRecord {
    #[serde(rename = "Guid", default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    #[serde(rename = "FileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    #[serde(rename = "Key")]
    pub key: String,
}
