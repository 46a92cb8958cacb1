//! Engine version selection.
//!
//! The host offers a list of known engine tags (`GAME_UE4_26`, `GAME_UE5_1`, ...) plus a
//! free-form custom version gated by a flag. The exported document has a single
//! `UEVersion` string, so on load it must be told apart again.

use crate::state::SceneHost;
use regex::Regex;
use std::sync::LazyLock;

/// Matches an enumerated engine tag anywhere in the string, case-insensitively.
static ENGINE_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)game_ue\d_\d+").expect("Invalid engine tag regex"));

/// How a `UEVersion` string maps onto the host's version fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSelection {
    /// One of the host's enumerated engine tags.
    Engine(String),
    /// Anything else, stored verbatim as the custom version.
    Custom(String),
}

impl VersionSelection {
    pub fn classify(version: &str) -> Self {
        if ENGINE_TAG_PATTERN.is_match(version) {
            VersionSelection::Engine(version.to_string())
        } else {
            VersionSelection::Custom(version.to_string())
        }
    }

    /// Write this selection into the host.
    ///
    /// An engine tag only sets the tag; the custom flag is left as it is.
    pub fn apply_to<H: SceneHost + ?Sized>(self, host: &mut H) {
        match self {
            VersionSelection::Engine(tag) => {
                tracing::debug!("Selecting engine version {}", tag);
                host.set_ue_version(tag);
            }
            VersionSelection::Custom(version) => {
                tracing::debug!("Selecting custom engine version {}", version);
                host.set_use_custom_version(true);
                host.set_custom_version(version);
            }
        }
    }
}

/// The version string the exporter should use, given the host's current choice.
pub fn effective_version(use_custom_version: bool, custom_version: &str, ue_version: &str) -> String {
    if use_custom_version {
        custom_version.to_string()
    } else {
        ue_version.to_string()
    }
}
