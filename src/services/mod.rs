//! Services module - translation rules between the host's scene settings and `config.json`.
//!
//! Each service covers one field group whose exported shape differs from how the host
//! stores it. They are pure functions over explicit inputs and a [`SceneHost`](crate::state::SceneHost).
//!
//! # Components
//!
//! - [`encryption_keys`]: the key list, with the synthesized primary-key record and the
//!   filtering of incomplete entries
//! - [`version`]: telling an enumerated engine tag from a custom version string
//! - [`options`]: option overrides, a list on the host but a flat object on disk

pub mod encryption_keys;
pub mod options;
pub mod version;

pub use encryption_keys::{DEFAULT_KEY_GUID, EMPTY_KEY_PLACEHOLDER, apply_export_list, to_export_list};
pub use options::{apply_overrides, overrides_map};
pub use version::{VersionSelection, effective_version};
