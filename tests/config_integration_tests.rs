//! Integration tests for Config and config.json handling
//!
//! These tests verify:
//! - Exported document shape and key names
//! - Encryption key export and import rules
//! - Texture hint round-trips through the file
//! - Version dispatch and option overrides on load
//! - Integration with SceneStore

use camino::Utf8PathBuf;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use umap_config::models::{
    CustomOption, EncryptionKeyEntry, TextureCategory, TextureSlot, UvChannel,
};
use umap_config::services::{DEFAULT_KEY_GUID, EMPTY_KEY_PLACEHOLDER};
use umap_config::{Config, ConfigError, SceneState, SceneStore};

fn create_test_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let dir = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, dir)
}

fn scene_exporting_to(dir: &Utf8PathBuf) -> SceneState {
    SceneState {
        paks_directory: "C:/Program Files/Epic Games/Fortnite/FortniteGame/Content/Paks".to_string(),
        export_path: dir.to_string(),
        export_package: "/Game/Athena/Artemis/Maps/Artemis_Terrain".to_string(),
        ..SceneState::default()
    }
}

fn dump_as_value(scene: &SceneState, dir: &Utf8PathBuf) -> Value {
    let path = Config::snapshot(scene).dump(scene, dir).unwrap();
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn write_document(dir: &Utf8PathBuf, value: &Value) {
    fs::write(dir.join("config.json"), serde_json::to_string_pretty(value).unwrap()).unwrap();
}

#[test]
fn test_exported_document_keys() {
    let (_temp_dir, dir) = create_test_dir();
    let scene = scene_exporting_to(&dir);

    let value = dump_as_value(&scene, &dir);
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

    for expected in [
        "_Documentation",
        "PaksDirectory",
        "ExportPath",
        "UEVersion",
        "bDumpAssets",
        "ObjectCacheSize",
        "bReadMaterials",
        "bExportToDDSWhenPossible",
        "bExportBuildingFoundations",
        "ExportPackage",
        "EncryptionKeys",
        "Textures",
    ] {
        assert!(keys.contains(&expected), "missing {expected}");
    }
    assert!(!keys.contains(&"OptionsOverrides"));
    assert_eq!(value["UEVersion"], "GAME_UE5_1");
    assert_eq!(value["ObjectCacheSize"], 100);
}

#[test]
fn test_default_key_record_comes_first() {
    let (_temp_dir, dir) = create_test_dir();
    let mut scene = scene_exporting_to(&dir);
    scene.default_key = " \t ".to_string();
    scene.push_encryption_key(EncryptionKeyEntry::new("A1B2", "", "0x42"));

    let value = dump_as_value(&scene, &dir);
    let keys = value["EncryptionKeys"].as_array().unwrap();

    assert_eq!(keys[0], json!({ "Guid": DEFAULT_KEY_GUID, "Key": EMPTY_KEY_PLACEHOLDER }));
    assert_eq!(EMPTY_KEY_PLACEHOLDER.len(), 66);
    assert_eq!(keys[1], json!({ "Guid": "A1B2", "Key": "0x42" }));

    scene.default_key = "0xFEED".to_string();
    let value = dump_as_value(&scene, &dir);
    assert_eq!(value["EncryptionKeys"][0]["Key"], "0xFEED");
}

#[test]
fn test_incomplete_key_entries_are_not_exported() {
    let (_temp_dir, dir) = create_test_dir();
    let mut scene = scene_exporting_to(&dir);
    scene.push_encryption_key(EncryptionKeyEntry::new("", "", "0x01"));
    scene.push_encryption_key(EncryptionKeyEntry::new("C0FFEE", "", ""));
    scene.push_encryption_key(EncryptionKeyEntry::new("", "pakchunk1010-*", "0x02"));

    let value = dump_as_value(&scene, &dir);
    let keys = value["EncryptionKeys"].as_array().unwrap();

    assert_eq!(keys.len(), 2);
    assert_eq!(keys[1], json!({ "FileName": "pakchunk1010-*", "Key": "0x02" }));
}

#[test]
fn test_texture_hints_round_trip_through_file() {
    let (_temp_dir, dir) = create_test_dir();
    let slot = TextureSlot::new(UvChannel::Uv1, TextureCategory::Diffuse);

    let mut scene = scene_exporting_to(&dir);
    scene.texture_hints.set(slot, "A, B ,C".to_string());

    let value = dump_as_value(&scene, &dir);
    assert_eq!(value["Textures"]["UV1"]["Diffuse"], json!(["A", "B", "C"]));
    assert_eq!(value["Textures"]["UV3"]["MaskTexture"], json!(["MaskTexture_3"]));

    let mut restored = scene_exporting_to(&dir);
    Config::snapshot(&restored).load(&mut restored).unwrap();
    assert_eq!(restored.texture_hints.get(slot), "A,B,C");
}

#[test]
fn test_engine_version_tag_on_load() {
    let (_temp_dir, dir) = create_test_dir();
    let scene = scene_exporting_to(&dir);
    let mut value = dump_as_value(&scene, &dir);
    value["UEVersion"] = json!("GAME_UE4_26");
    write_document(&dir, &value);

    let mut restored = scene_exporting_to(&dir);
    Config::snapshot(&restored).load(&mut restored).unwrap();

    assert_eq!(restored.ue_version, "GAME_UE4_26");
    assert!(!restored.use_custom_version);
}

#[test]
fn test_custom_version_on_load() {
    let (_temp_dir, dir) = create_test_dir();
    let scene = scene_exporting_to(&dir);
    let mut value = dump_as_value(&scene, &dir);
    value["UEVersion"] = json!("Custom_5.1");
    write_document(&dir, &value);

    let mut restored = scene_exporting_to(&dir);
    Config::snapshot(&restored).load(&mut restored).unwrap();

    assert!(restored.use_custom_version);
    assert_eq!(restored.custom_version, "Custom_5.1");
    assert_eq!(restored.ue_version, "GAME_UE5_1");
}

#[test]
fn test_overrides_loaded_regardless_of_toggle() {
    let (_temp_dir, dir) = create_test_dir();
    let scene = scene_exporting_to(&dir);
    let mut value = dump_as_value(&scene, &dir);
    value["OptionsOverrides"] = json!({ "bExportLights": true, "bSkipWater": false });
    write_document(&dir, &value);

    let mut restored = scene_exporting_to(&dir);
    restored.use_custom_options = false;
    restored.push_custom_option(CustomOption::new("Stale", true));
    Config::snapshot(&restored).load(&mut restored).unwrap();

    assert!(!restored.use_custom_options);
    assert_eq!(
        restored.custom_options,
        vec![
            CustomOption::new("bExportLights", true),
            CustomOption::new("bSkipWater", false),
        ]
    );
}

#[test]
fn test_missing_overrides_clear_the_list() {
    let (_temp_dir, dir) = create_test_dir();
    let scene = scene_exporting_to(&dir);
    dump_as_value(&scene, &dir);

    let mut restored = scene_exporting_to(&dir);
    restored.push_custom_option(CustomOption::new("Stale", true));
    Config::snapshot(&restored).load(&mut restored).unwrap();

    assert!(restored.custom_options.is_empty());
}

#[test]
fn test_load_from_override_directory() {
    let (_temp_dir, dir) = create_test_dir();
    let elsewhere = dir.join("elsewhere");
    fs::create_dir_all(&elsewhere).unwrap();

    let mut scene = scene_exporting_to(&dir);
    scene.read_materials = true;
    Config::snapshot(&scene).dump(&scene, &elsewhere).unwrap();

    let mut restored = scene_exporting_to(&dir);
    let config = Config::snapshot(&restored);
    assert!(!config.load(&mut restored).unwrap());
    assert!(!restored.read_materials);

    assert!(config.load_from(&mut restored, &elsewhere).unwrap());
    assert!(restored.read_materials);
}

#[test]
fn test_missing_texture_channel_is_an_error() {
    let (_temp_dir, dir) = create_test_dir();
    let scene = scene_exporting_to(&dir);
    let mut value = dump_as_value(&scene, &dir);
    value["Textures"].as_object_mut().unwrap().remove("UV4");
    write_document(&dir, &value);

    let mut restored = scene_exporting_to(&dir);
    let err = Config::snapshot(&restored).load(&mut restored).unwrap_err();
    assert!(err.to_string().contains("UV4"));
}

#[test]
fn test_unreadable_config_is_an_io_error() {
    let (_temp_dir, dir) = create_test_dir();
    fs::create_dir_all(dir.join("config.json")).unwrap();

    let mut restored = scene_exporting_to(&dir);
    let err = Config::snapshot(&restored).load(&mut restored).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert_eq!(restored, scene_exporting_to(&dir));
}

#[test]
fn test_import_into_stored_scene() {
    let (_temp_dir, dir) = create_test_dir();
    let store = SceneStore::new(dir.join("scene.yaml")).unwrap();

    let mut scene = scene_exporting_to(&dir);
    scene.export_building_foundations = true;
    scene.object_cache_size = 512;
    Config::snapshot(&scene).dump(&scene, &dir).unwrap();

    // A fresh scene that only knows where to look
    store.save(&scene_exporting_to(&dir)).unwrap();
    let mut loaded = store.load().unwrap();
    Config::snapshot(&loaded).load(&mut loaded).unwrap();
    store.save(&loaded).unwrap();

    let reloaded = store.load().unwrap();
    assert!(reloaded.export_building_foundations);
    assert_eq!(reloaded.object_cache_size, 512);
}
