use crate::models::textures::{TextureMapping, TextureSlot};
use indexmap::IndexMap;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Engine version tag selected when nothing else has been chosen.
pub const DEFAULT_UE_VERSION: &str = "GAME_UE5_1";

/// Object cache size the exporter starts with.
pub const DEFAULT_OBJECT_CACHE_SIZE: i32 = 100;

/// A per-archive decryption key as edited in the host's key list.
///
/// An entry identifies its archive by GUID, by file-name pattern, or both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EncryptionKeyEntry {
    #[serde(default)]
    pub guid: String,

    #[serde(default)]
    pub file_name: String,

    #[serde(default)]
    pub key: String,
}

impl EncryptionKeyEntry {
    pub fn new(guid: impl Into<String>, file_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            file_name: file_name.into(),
            key: key.into(),
        }
    }
}

/// A named boolean override of an exporter option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomOption {
    pub name: String,
    pub value: bool,
}

impl CustomOption {
    pub fn new(name: impl Into<String>, value: bool) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// The twenty comma-separated texture hint fields (`diffuse_1` .. `mask_4`).
///
/// Persisted as a flat map keyed by field name; names are matched case-insensitively
/// and fields missing from the map keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureHints([[String; 5]; 4]);

impl TextureHints {
    pub fn get(&self, slot: TextureSlot) -> &str {
        &self.0[slot.channel.index()][slot.category.index()]
    }

    pub fn set(&mut self, slot: TextureSlot, value: String) {
        self.0[slot.channel.index()][slot.category.index()] = value;
    }
}

impl Default for TextureHints {
    /// Built-in candidate lists, comma-joined.
    fn default() -> Self {
        let mapping = TextureMapping::default();
        let mut hints = TextureHints(Default::default());
        for slot in TextureSlot::all() {
            hints.set(slot, mapping.joined(slot));
        }
        hints
    }
}

impl Serialize for TextureHints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(TextureSlot::all().map(|slot| (slot.field_name(), self.get(slot))))
    }
}

impl<'de> Deserialize<'de> for TextureHints {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = IndexMap::<String, String>::deserialize(deserializer)?;
        let mut hints = TextureHints::default();
        for (name, value) in fields {
            let slot = TextureSlot::from_field_name(&name)
                .ok_or_else(|| de::Error::custom(format!("unknown texture hint field `{name}`")))?;
            hints.set(slot, value);
        }
        Ok(hints)
    }
}

/// The exporter's scene-level settings, as the host application holds them.
///
/// This is the live source of truth the UI edits. [`Config`](crate::config::Config)
/// snapshots it for export and writes into it on load, always through the
/// [`SceneHost`](crate::state::SceneHost) interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneState {
    // Paths
    pub paks_directory: String,
    pub export_path: String,

    // Engine version
    pub ue_version: String,
    pub use_custom_version: bool,
    pub custom_version: String,

    // Encryption keys
    pub default_key: String,
    pub encryption_keys: Vec<EncryptionKeyEntry>,
    pub encryption_key_index: usize,

    // Export toggles
    pub dump_assets: bool,
    pub object_cache_size: i32,
    pub read_materials: bool,
    pub export_to_dds: bool,
    pub export_building_foundations: bool,
    pub export_package: String,

    // Option overrides
    pub use_custom_options: bool,
    pub custom_options: Vec<CustomOption>,
    pub custom_option_index: usize,

    pub texture_hints: TextureHints,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            paks_directory: String::new(),
            export_path: String::new(),

            ue_version: DEFAULT_UE_VERSION.to_string(),
            use_custom_version: false,
            custom_version: String::new(),

            default_key: String::new(),
            encryption_keys: Vec::new(),
            encryption_key_index: 0,

            dump_assets: false,
            object_cache_size: DEFAULT_OBJECT_CACHE_SIZE,
            read_materials: false,
            export_to_dds: false,
            export_building_foundations: false,
            export_package: String::new(),

            use_custom_options: false,
            custom_options: Vec::new(),
            custom_option_index: 0,

            texture_hints: TextureHints::default(),
        }
    }
}

impl SceneState {
    /// Append a key entry and move the list cursor onto it.
    pub fn push_encryption_key(&mut self, entry: EncryptionKeyEntry) {
        self.encryption_key_index = self.encryption_keys.len();
        self.encryption_keys.push(entry);
    }

    pub fn clear_encryption_keys(&mut self) {
        self.encryption_keys.clear();
        self.encryption_key_index = 0;
    }

    /// Append an option override and move the list cursor onto it.
    pub fn push_custom_option(&mut self, option: CustomOption) {
        self.custom_option_index = self.custom_options.len();
        self.custom_options.push(option);
    }

    pub fn clear_custom_options(&mut self) {
        self.custom_options.clear();
        self.custom_option_index = 0;
    }
}
