//! Translation between the host's key list and the exported `EncryptionKeys` array.
//!
//! The exported array always starts with a synthesized record for the primary key,
//! identified by the all-zero GUID. The host never stores that record in its list;
//! the primary key lives in its own field.

use crate::models::{EncryptionKeyEntry, EncryptionKeyRecord};
use crate::state::SceneHost;

/// GUID marking the primary (default) key record.
pub const DEFAULT_KEY_GUID: &str = "00000000000000000000000000000000";

/// Key written for the primary record when the user hasn't typed one.
pub const EMPTY_KEY_PLACEHOLDER: &str =
    "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Why a named entry was left out of the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Neither a file-name pattern nor a key.
    Blank,
    /// Neither a GUID nor a file-name pattern to identify the archive.
    Unidentified,
    /// Identified, but no key.
    MissingKey,
}

/// Decide whether a named entry can be exported.
pub fn skip_reason(entry: &EncryptionKeyEntry) -> Option<SkipReason> {
    if entry.file_name.is_empty() && entry.key.is_empty() {
        Some(SkipReason::Blank)
    } else if entry.guid.is_empty() && entry.file_name.is_empty() {
        Some(SkipReason::Unidentified)
    } else if entry.key.is_empty() {
        Some(SkipReason::MissingKey)
    } else {
        None
    }
}

/// The synthesized primary key record.
///
/// A blank (or whitespace-only) key is replaced with [`EMPTY_KEY_PLACEHOLDER`].
pub fn default_key_record(default_key: &str) -> EncryptionKeyRecord {
    let trimmed = default_key.trim();
    let key = if trimmed.is_empty() {
        EMPTY_KEY_PLACEHOLDER
    } else {
        trimmed
    };

    EncryptionKeyRecord {
        guid: Some(DEFAULT_KEY_GUID.to_string()),
        file_name: None,
        key: key.to_string(),
    }
}

/// Build the exported key array: the primary record, then every exportable named entry in order.
pub fn to_export_list(entries: &[EncryptionKeyEntry], default_key: &str) -> Vec<EncryptionKeyRecord> {
    let mut records = Vec::with_capacity(entries.len() + 1);
    records.push(default_key_record(default_key));

    for (index, entry) in entries.iter().enumerate() {
        if let Some(reason) = skip_reason(entry) {
            tracing::debug!("Skipping encryption key entry {}: {:?}", index, reason);
            continue;
        }

        records.push(EncryptionKeyRecord {
            guid: Some(entry.guid.clone()).filter(|g| !g.is_empty()),
            file_name: Some(entry.file_name.clone()).filter(|f| !f.is_empty()),
            key: entry.key.clone(),
        });
    }

    records
}

/// Rebuild the host's key list from an exported array.
///
/// The list is cleared first. A record carrying [`DEFAULT_KEY_GUID`] sets the host's
/// primary key instead of being appended.
pub fn apply_export_list<H: SceneHost + ?Sized>(records: &[EncryptionKeyRecord], host: &mut H) {
    host.clear_encryption_keys();

    for record in records {
        if record.guid.as_deref() == Some(DEFAULT_KEY_GUID) {
            host.set_default_key(record.key.clone());
            continue;
        }

        host.add_encryption_key(EncryptionKeyEntry {
            guid: record.guid.clone().unwrap_or_default(),
            file_name: record.file_name.clone().unwrap_or_default(),
            key: record.key.clone(),
        });
    }
}
