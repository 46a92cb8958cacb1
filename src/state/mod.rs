// Host state interface
//
// The host application owns the scene settings; this module defines the narrow
// interface the configuration code reads and writes them through.

pub mod store;

use crate::models::{CustomOption, EncryptionKeyEntry, SceneState, TextureSlot};

pub use store::SceneStore;

/// Field-level access to the host's live scene settings.
///
/// Every configuration operation takes the host explicitly; nothing reaches for
/// a global scene. Scalars have a getter/setter pair; the two list collections
/// are rebuilt with `clear_*` followed by one `add_*` per element, and the host
/// keeps its list cursor on the last appended element.
///
/// # Related Types
///
/// - [`SceneState`]: the in-process implementation
/// - [`crate::config::Config`]: snapshots from and loads into a host
#[cfg_attr(test, mockall::automock)]
pub trait SceneHost {
    fn paks_directory(&self) -> String;
    fn set_paks_directory(&mut self, value: String);

    fn export_path(&self) -> String;
    fn set_export_path(&mut self, value: String);

    /// Enumerated engine version tag, e.g. `GAME_UE4_26`.
    fn ue_version(&self) -> String;
    fn set_ue_version(&mut self, value: String);

    fn use_custom_version(&self) -> bool;
    fn set_use_custom_version(&mut self, value: bool);

    fn custom_version(&self) -> String;
    fn set_custom_version(&mut self, value: String);

    /// Primary decryption key, as currently typed by the user.
    fn default_key(&self) -> String;
    fn set_default_key(&mut self, value: String);

    fn encryption_keys(&self) -> Vec<EncryptionKeyEntry>;
    fn clear_encryption_keys(&mut self);
    fn add_encryption_key(&mut self, entry: EncryptionKeyEntry);

    fn dump_assets(&self) -> bool;
    fn set_dump_assets(&mut self, value: bool);

    fn object_cache_size(&self) -> i32;
    fn set_object_cache_size(&mut self, value: i32);

    fn read_materials(&self) -> bool;
    fn set_read_materials(&mut self, value: bool);

    fn export_to_dds(&self) -> bool;
    fn set_export_to_dds(&mut self, value: bool);

    fn export_building_foundations(&self) -> bool;
    fn set_export_building_foundations(&mut self, value: bool);

    fn export_package(&self) -> String;
    fn set_export_package(&mut self, value: String);

    fn use_custom_options(&self) -> bool;
    fn set_use_custom_options(&mut self, value: bool);

    fn custom_options(&self) -> Vec<CustomOption>;
    fn clear_custom_options(&mut self);
    fn add_custom_option(&mut self, option: CustomOption);

    /// Comma-separated candidate names for one texture slot.
    fn texture_hint(&self, slot: TextureSlot) -> String;
    fn set_texture_hint(&mut self, slot: TextureSlot, value: String);
}

impl SceneHost for SceneState {
    fn paks_directory(&self) -> String {
        self.paks_directory.clone()
    }

    fn set_paks_directory(&mut self, value: String) {
        self.paks_directory = value;
    }

    fn export_path(&self) -> String {
        self.export_path.clone()
    }

    fn set_export_path(&mut self, value: String) {
        self.export_path = value;
    }

    fn ue_version(&self) -> String {
        self.ue_version.clone()
    }

    fn set_ue_version(&mut self, value: String) {
        self.ue_version = value;
    }

    fn use_custom_version(&self) -> bool {
        self.use_custom_version
    }

    fn set_use_custom_version(&mut self, value: bool) {
        self.use_custom_version = value;
    }

    fn custom_version(&self) -> String {
        self.custom_version.clone()
    }

    fn set_custom_version(&mut self, value: String) {
        self.custom_version = value;
    }

    fn default_key(&self) -> String {
        self.default_key.clone()
    }

    fn set_default_key(&mut self, value: String) {
        self.default_key = value;
    }

    fn encryption_keys(&self) -> Vec<EncryptionKeyEntry> {
        self.encryption_keys.clone()
    }

    fn clear_encryption_keys(&mut self) {
        SceneState::clear_encryption_keys(self);
    }

    fn add_encryption_key(&mut self, entry: EncryptionKeyEntry) {
        self.push_encryption_key(entry);
    }

    fn dump_assets(&self) -> bool {
        self.dump_assets
    }

    fn set_dump_assets(&mut self, value: bool) {
        self.dump_assets = value;
    }

    fn object_cache_size(&self) -> i32 {
        self.object_cache_size
    }

    fn set_object_cache_size(&mut self, value: i32) {
        self.object_cache_size = value;
    }

    fn read_materials(&self) -> bool {
        self.read_materials
    }

    fn set_read_materials(&mut self, value: bool) {
        self.read_materials = value;
    }

    fn export_to_dds(&self) -> bool {
        self.export_to_dds
    }

    fn set_export_to_dds(&mut self, value: bool) {
        self.export_to_dds = value;
    }

    fn export_building_foundations(&self) -> bool {
        self.export_building_foundations
    }

    fn set_export_building_foundations(&mut self, value: bool) {
        self.export_building_foundations = value;
    }

    fn export_package(&self) -> String {
        self.export_package.clone()
    }

    fn set_export_package(&mut self, value: String) {
        self.export_package = value;
    }

    fn use_custom_options(&self) -> bool {
        self.use_custom_options
    }

    fn set_use_custom_options(&mut self, value: bool) {
        self.use_custom_options = value;
    }

    fn custom_options(&self) -> Vec<CustomOption> {
        self.custom_options.clone()
    }

    fn clear_custom_options(&mut self) {
        SceneState::clear_custom_options(self);
    }

    fn add_custom_option(&mut self, option: CustomOption) {
        self.push_custom_option(option);
    }

    fn texture_hint(&self, slot: TextureSlot) -> String {
        self.texture_hints.get(slot).to_string()
    }

    fn set_texture_hint(&mut self, slot: TextureSlot, value: String) {
        self.texture_hints.set(slot, value);
    }
}
