//! Texture name hints per UV channel.
//!
//! The exporter matches texture parameters by substring: for each UV channel an asset may
//! use, every [`TextureCategory`] carries a list of candidate names. The host stores each
//! list as one comma-separated string field (`diffuse_1`, `normal_1`, ... `mask_4`); the
//! exported `config.json` stores them as a nested object:
//!
//! ```json
//! "Textures": {
//!     "UV1": { "Diffuse": [...], "Normal": [...], "Specular": [...], "Emission": [...], "MaskTexture": [...] },
//!     "UV2": { ... }
//! }
//! ```

use crate::state::SceneHost;
use serde::{Deserialize, Serialize};

/// One of the four texture-coordinate sets an asset can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UvChannel {
    Uv1,
    Uv2,
    Uv3,
    Uv4,
}

impl UvChannel {
    pub const ALL: [UvChannel; 4] = [UvChannel::Uv1, UvChannel::Uv2, UvChannel::Uv3, UvChannel::Uv4];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Semantic role of a texture, matched by name substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureCategory {
    Diffuse,
    Normal,
    Specular,
    Emission,
    Mask,
}

impl TextureCategory {
    pub const ALL: [TextureCategory; 5] = [
        TextureCategory::Diffuse,
        TextureCategory::Normal,
        TextureCategory::Specular,
        TextureCategory::Emission,
        TextureCategory::Mask,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Host field names, indexed by `[channel][category]`.
const FIELD_NAMES: [[&str; 5]; 4] = [
    ["diffuse_1", "normal_1", "specular_1", "emission_1", "mask_1"],
    ["diffuse_2", "normal_2", "specular_2", "emission_2", "mask_2"],
    ["diffuse_3", "normal_3", "specular_3", "emission_3", "mask_3"],
    ["diffuse_4", "normal_4", "specular_4", "emission_4", "mask_4"],
];

/// A (channel, category) cell of the 4×5 texture hint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot {
    pub channel: UvChannel,
    pub category: TextureCategory,
}

impl TextureSlot {
    pub const fn new(channel: UvChannel, category: TextureCategory) -> Self {
        Self { channel, category }
    }

    /// All twenty slots, channel-major.
    pub fn all() -> impl Iterator<Item = TextureSlot> {
        UvChannel::ALL.into_iter().flat_map(|channel| {
            TextureCategory::ALL
                .into_iter()
                .map(move |category| TextureSlot::new(channel, category))
        })
    }

    /// Name of the host string field backing this slot, e.g. `diffuse_1`.
    pub fn field_name(self) -> &'static str {
        FIELD_NAMES[self.channel.index()][self.category.index()]
    }

    /// Resolve a host field name (case-insensitive) back to its slot.
    pub fn from_field_name(name: &str) -> Option<Self> {
        TextureSlot::all().find(|slot| slot.field_name().eq_ignore_ascii_case(name))
    }
}

/// Split a comma-separated hint field into trimmed candidate names.
///
/// Returns `None` when the field holds nothing at all (a blank or whitespace-only
/// string), in which case the existing candidates should be kept.
pub fn split_hint(value: &str) -> Option<Vec<String>> {
    let candidates: Vec<String> = value.split(',').map(|s| s.trim().to_string()).collect();
    if candidates.len() == 1 && candidates[0].is_empty() {
        None
    } else {
        Some(candidates)
    }
}

/// Candidate texture names for each category of one UV channel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextureCategorySet {
    #[serde(rename = "Diffuse")]
    pub diffuse: Vec<String>,

    #[serde(rename = "Normal")]
    pub normal: Vec<String>,

    #[serde(rename = "Specular")]
    pub specular: Vec<String>,

    #[serde(rename = "Emission")]
    pub emission: Vec<String>,

    #[serde(rename = "MaskTexture")]
    pub mask: Vec<String>,
}

impl TextureCategorySet {
    fn seeded(
        diffuse: &[&str],
        normal: &[&str],
        specular: &[&str],
        emission: &[&str],
        mask: &[&str],
    ) -> Self {
        let owned = |names: &[&str]| -> Vec<String> { names.iter().map(|s| s.to_string()).collect() };
        Self {
            diffuse: owned(diffuse),
            normal: owned(normal),
            specular: owned(specular),
            emission: owned(emission),
            mask: owned(mask),
        }
    }

    /// Suffix-numbered naming used by the secondary UV channels.
    fn numbered(channel: usize) -> Self {
        Self {
            diffuse: vec![format!("Diffuse_Texture_{channel}")],
            normal: vec![format!("Normals_Texture_{channel}")],
            specular: vec![format!("Specular_Texture_{channel}")],
            emission: vec![format!("Emissive_Texture_{channel}")],
            mask: vec![format!("MaskTexture_{channel}")],
        }
    }

    pub fn get(&self, category: TextureCategory) -> &[String] {
        match category {
            TextureCategory::Diffuse => &self.diffuse,
            TextureCategory::Normal => &self.normal,
            TextureCategory::Specular => &self.specular,
            TextureCategory::Emission => &self.emission,
            TextureCategory::Mask => &self.mask,
        }
    }

    pub fn get_mut(&mut self, category: TextureCategory) -> &mut Vec<String> {
        match category {
            TextureCategory::Diffuse => &mut self.diffuse,
            TextureCategory::Normal => &mut self.normal,
            TextureCategory::Specular => &mut self.specular,
            TextureCategory::Emission => &mut self.emission,
            TextureCategory::Mask => &mut self.mask,
        }
    }
}

/// Texture name hints for all four UV channels.
///
/// Serializes directly to the export shape (`UV1`..`UV4`, with `MaskTexture`). Deserializing
/// fails if any channel or category key is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureMapping {
    #[serde(rename = "UV1")]
    pub uv1: TextureCategorySet,

    #[serde(rename = "UV2")]
    pub uv2: TextureCategorySet,

    #[serde(rename = "UV3")]
    pub uv3: TextureCategorySet,

    #[serde(rename = "UV4")]
    pub uv4: TextureCategorySet,
}

impl Default for TextureMapping {
    fn default() -> Self {
        Self {
            uv1: TextureCategorySet::seeded(
                &["Trunk_BaseColor", "Diffuse", "DiffuseTexture", "Base_Color_Tex", "Tex_Color"],
                &["Trunk_Normal", "Normals", "Normal", "Base_Normal_Tex", "Tex_Normal"],
                &["Trunk_Specular", "SpecularMasks"],
                &["EmissiveTexture"],
                &["MaskTexture"],
            ),
            uv2: TextureCategorySet::numbered(2),
            uv3: TextureCategorySet::numbered(3),
            uv4: TextureCategorySet::numbered(4),
        }
    }
}

impl TextureMapping {
    /// Build a mapping from the host's current hint fields, on top of the built-in defaults.
    pub fn from_host<H: SceneHost + ?Sized>(host: &H) -> Self {
        let mut mapping = Self::default();
        mapping.populate_from(host);
        mapping
    }

    pub fn channel(&self, channel: UvChannel) -> &TextureCategorySet {
        match channel {
            UvChannel::Uv1 => &self.uv1,
            UvChannel::Uv2 => &self.uv2,
            UvChannel::Uv3 => &self.uv3,
            UvChannel::Uv4 => &self.uv4,
        }
    }

    pub fn channel_mut(&mut self, channel: UvChannel) -> &mut TextureCategorySet {
        match channel {
            UvChannel::Uv1 => &mut self.uv1,
            UvChannel::Uv2 => &mut self.uv2,
            UvChannel::Uv3 => &mut self.uv3,
            UvChannel::Uv4 => &mut self.uv4,
        }
    }

    pub fn candidates(&self, slot: TextureSlot) -> &[String] {
        self.channel(slot.channel).get(slot.category)
    }

    pub fn set_candidates(&mut self, slot: TextureSlot, candidates: Vec<String>) {
        *self.channel_mut(slot.channel).get_mut(slot.category) = candidates;
    }

    /// Comma-joined form of a slot, as stored in the host field.
    pub fn joined(&self, slot: TextureSlot) -> String {
        self.candidates(slot).join(",")
    }

    /// Overwrite slots from the host's comma-separated hint fields.
    ///
    /// Slots whose host field is blank keep their current candidates.
    pub fn populate_from<H: SceneHost + ?Sized>(&mut self, host: &H) {
        for slot in TextureSlot::all() {
            if let Some(candidates) = split_hint(&host.texture_hint(slot)) {
                self.set_candidates(slot, candidates);
            }
        }
    }

    /// Write every slot back into the host as a comma-joined field.
    pub fn apply_to<H: SceneHost + ?Sized>(&self, host: &mut H) {
        for slot in TextureSlot::all() {
            host.set_texture_hint(slot, self.joined(slot));
        }
    }
}
