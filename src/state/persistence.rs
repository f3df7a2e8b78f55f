use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::{GuestInput, Item, ItemParameters, ParameterTable};
use crate::planner::constants::{default_parameters, STORAGE_KEY};

/// One stored parameter entry. Absent fields fall back to the item's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_adult_grams: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_child_grams: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl StoredParameters {
    pub fn over(&self, defaults: ItemParameters) -> ItemParameters {
        ItemParameters {
            base_adult_grams: self.base_adult_grams.unwrap_or(defaults.base_adult_grams),
            base_child_grams: self.base_child_grams.unwrap_or(defaults.base_child_grams),
            enabled: self.enabled.unwrap_or(defaults.enabled),
        }
    }
}

impl From<ItemParameters> for StoredParameters {
    fn from(p: ItemParameters) -> Self {
        Self {
            base_adult_grams: Some(p.base_adult_grams),
            base_child_grams: Some(p.base_child_grams),
            enabled: Some(p.enabled),
        }
    }
}

/// The persisted session blob. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_input: Option<GuestInput>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<BTreeMap<Item, StoredParameters>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_buffer: Option<bool>,
}

impl StoredSession {
    /// Stored parameters laid over the defaults; missing items keep defaults.
    pub fn parameter_table(&self) -> ParameterTable {
        let mut table = default_parameters();
        if let Some(stored) = &self.params {
            for (item, p) in stored {
                let slot = table.get_mut(*item);
                *slot = p.over(*slot);
            }
        }
        table
    }

    /// Overlay `update` on `self`; fields present in `update` win.
    pub fn merged(self, update: &StoredSession) -> StoredSession {
        StoredSession {
            guest_input: update.guest_input.or(self.guest_input),
            params: update.params.clone().or(self.params),
            include_buffer: update.include_buffer.or(self.include_buffer),
        }
    }

    pub fn from_table(table: &ParameterTable) -> BTreeMap<Item, StoredParameters> {
        table.iter().map(|(item, p)| (item, (*p).into())).collect()
    }

    /// Decode a stored blob one field at a time.
    ///
    /// A malformed field or parameter entry is logged and dropped; the rest
    /// of the session survives.
    pub fn from_blob(blob: &Value) -> StoredSession {
        let Some(fields) = blob.as_object() else {
            log::warn!("Stored session is not a JSON object, ignoring it");
            return StoredSession::default();
        };
        StoredSession {
            guest_input: decode_field(fields, "guest_input"),
            params: fields.get("params").and_then(decode_params),
            include_buffer: decode_field(fields, "include_buffer"),
        }
    }
}

fn decode_field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &str) -> Option<T> {
    let value = fields.get(key).filter(|v| !v.is_null())?;
    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            log::warn!("Ignoring stored {}: {}", key, e);
            None
        }
    }
}

fn decode_params(value: &Value) -> Option<BTreeMap<Item, StoredParameters>> {
    if value.is_null() {
        return None;
    }
    let Some(entries) = value.as_object() else {
        log::warn!("Ignoring stored params: expected an object");
        return None;
    };

    let mut params = BTreeMap::new();
    for (key, entry) in entries {
        let item = match key.parse::<Item>() {
            Ok(item) => item,
            Err(e) => {
                log::warn!("Ignoring stored params entry: {}", e);
                continue;
            }
        };
        match serde_json::from_value::<StoredParameters>(entry.clone()) {
            Ok(p) => {
                params.insert(item, p);
            }
            Err(e) => log::warn!("Ignoring stored params for {}: {}", key, e),
        }
    }
    Some(params)
}

/// Read the whole key-value store; a missing file is an empty store.
fn read_store(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_store(path: &Path, store: &Map<String, Value>) -> Result<()> {
    let json = serde_json::to_string_pretty(store)?;
    fs::write(path, json)?;
    Ok(())
}

fn try_load(path: &Path) -> Result<StoredSession> {
    let store = read_store(path)?;
    match store.get(STORAGE_KEY) {
        Some(blob) => Ok(StoredSession::from_blob(blob)),
        None => Ok(StoredSession::default()),
    }
}

fn try_save(path: &Path, update: &StoredSession) -> Result<()> {
    let existing = load_session(path);
    let merged = existing.merged(update);

    // A corrupt store is replaced rather than preserved.
    let mut store = read_store(path).unwrap_or_default();
    store.insert(STORAGE_KEY.to_string(), serde_json::to_value(&merged)?);
    write_store(path, &store)
}

fn try_clear(path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let mut store = read_store(path)?;
    if store.remove(STORAGE_KEY).is_some() {
        write_store(path, &store)?;
    }
    Ok(())
}

/// Load the stored session.
///
/// Never fails: unreadable or corrupt data is logged and treated as
/// "nothing stored".
pub fn load_session<P: AsRef<Path>>(path: P) -> StoredSession {
    let path = path.as_ref();
    try_load(path).unwrap_or_else(|e| {
        log::warn!("Failed to load session from {}: {}", path.display(), e);
        StoredSession::default()
    })
}

/// Merge `update` into the stored session and write it back.
///
/// Failures are logged and swallowed.
pub fn save_session<P: AsRef<Path>>(path: P, update: &StoredSession) {
    let path = path.as_ref();
    if let Err(e) = try_save(path, update) {
        log::warn!("Failed to save session to {}: {}", path.display(), e);
    }
}

/// Remove the stored session, leaving any other keys in the file intact.
pub fn clear_session<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    if let Err(e) = try_clear(path) {
        log::warn!("Failed to clear session in {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appetite;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_yields_empty_session() {
        let dir = TempDir::new().unwrap();
        let session = load_session(dir.path().join("absent.json"));
        assert_eq!(session, StoredSession::default());
        assert_eq!(session.parameter_table(), default_parameters());
    }

    #[test]
    fn test_corrupt_file_is_swallowed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let session = load_session(file.path());
        assert_eq!(session, StoredSession::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let guests = GuestInput {
            adults_omnivore: 8,
            adults_veg: 2,
            appetite: Appetite::High,
            ..Default::default()
        };
        save_session(
            &path,
            &StoredSession {
                guest_input: Some(guests),
                include_buffer: Some(true),
                ..Default::default()
            },
        );

        let loaded = load_session(&path);
        assert_eq!(loaded.guest_input, Some(guests));
        assert_eq!(loaded.include_buffer, Some(true));
        assert!(loaded.params.is_none());
    }

    #[test]
    fn test_save_merges_with_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        save_session(
            &path,
            &StoredSession {
                include_buffer: Some(true),
                ..Default::default()
            },
        );

        let mut table = default_parameters();
        table.tofu.enabled = false;
        save_session(
            &path,
            &StoredSession {
                params: Some(StoredSession::from_table(&table)),
                ..Default::default()
            },
        );

        let loaded = load_session(&path);
        assert_eq!(loaded.include_buffer, Some(true));
        assert!(!loaded.parameter_table().tofu.enabled);
    }

    #[test]
    fn test_partial_params_fall_back_to_defaults() {
        let json = r#"{
            "grigliata-planner": {
                "params": {
                    "manzo": {"base_adult_grams": 250, "base_child_grams": 150, "enabled": true}
                }
            }
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let table = load_session(file.path()).parameter_table();
        assert_eq!(table.manzo.base_adult_grams, 250.0);
        assert_eq!(table.pollo, default_parameters().pollo);
    }

    #[test]
    fn test_incomplete_params_entry_keeps_session() {
        let json = r#"{
            "grigliata-planner": {
                "guest_input": {"adults_omnivore": 5},
                "include_buffer": true,
                "params": {"manzo": {"base_adult_grams": 250}}
            }
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let session = load_session(file.path());
        assert_eq!(session.guest_input.map(|g| g.adults_omnivore), Some(5));
        assert_eq!(session.include_buffer, Some(true));

        let table = session.parameter_table();
        assert_eq!(table.manzo.base_adult_grams, 250.0);
        assert_eq!(table.manzo.base_child_grams, 120.0);
        assert!(table.manzo.enabled);
    }

    #[test]
    fn test_bad_entries_are_skipped_individually() {
        let json = r#"{
            "grigliata-planner": {
                "guest_input": {"adults_omnivore": "many"},
                "include_buffer": true,
                "params": {
                    "agnello": {"base_adult_grams": 300},
                    "pollo": {"base_adult_grams": "lots"},
                    "tofu": {"enabled": false}
                }
            }
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let session = load_session(file.path());
        assert!(session.guest_input.is_none());
        assert_eq!(session.include_buffer, Some(true));

        let stored = session.params.as_ref().unwrap();
        assert_eq!(stored.len(), 1);
        let table = session.parameter_table();
        assert_eq!(table.pollo, default_parameters().pollo);
        assert!(!table.tofu.enabled);
        assert_eq!(table.tofu.base_adult_grams, 150.0);
    }

    #[test]
    fn test_non_object_blob_is_ignored() {
        let json = r#"{"grigliata-planner": [1, 2, 3]}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert_eq!(load_session(file.path()), StoredSession::default());
    }

    #[test]
    fn test_clear_keeps_other_keys() {
        let json = r#"{"other-app": {"x": 1}, "grigliata-planner": {"include_buffer": true}}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        clear_session(file.path());

        assert_eq!(load_session(file.path()), StoredSession::default());
        let raw = fs::read_to_string(file.path()).unwrap();
        assert!(raw.contains("other-app"));
    }
}
