//! Custom Profile Store
//!
//! Persists user-defined profiles as a single file mapping id -> profile.
//! `.yaml`/`.yml` files are read and written as YAML, anything else as JSON.
//!
//! The document helpers here are shared with [`super::history`].

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{NameGenError, StoreError};
use super::profile::LanguageProfile;
use super::registry::ProfileRegistry;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Stored profiles, keyed by id.
pub type ProfileMap = IndexMap<String, LanguageProfile>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StoreFormat {
    Json,
    Yaml,
}

impl StoreFormat {
    pub(crate) fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

// ============================================================================
// Document helpers
// ============================================================================

/// Read and parse a whole document. `Ok(None)` when the file does not exist.
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> StoreResult<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::read_failed(path, e)),
    };

    let format = StoreFormat::for_path(path);
    let value = match format {
        StoreFormat::Json => serde_json::from_str(&content)
            .map_err(|e| StoreError::parse_failed(path, format.label(), e))?,
        StoreFormat::Yaml => serde_yaml_ng::from_str(&content)
            .map_err(|e| StoreError::parse_failed(path, format.label(), e))?,
    };
    Ok(Some(value))
}

/// Serialize `value` and overwrite `path`, creating parent directories.
pub(crate) fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> StoreResult<()> {
    let content = match StoreFormat::for_path(path) {
        StoreFormat::Json => {
            serde_json::to_string_pretty(value).map_err(|e| StoreError::SerializeFailed {
                reason: e.to_string(),
            })?
        }
        StoreFormat::Yaml => {
            serde_yaml_ng::to_string(value).map_err(|e| StoreError::SerializeFailed {
                reason: e.to_string(),
            })?
        }
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::write_failed(parent, e))?;
    }
    fs::write(path, content).map_err(|e| StoreError::write_failed(path, e))
}

/// `<file>.bak` next to `path`.
pub(crate) fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".bak");
    path.with_file_name(name)
}

/// Move `path` aside to its backup path, replacing an older backup.
pub(crate) fn move_to_backup(path: &Path) -> StoreResult<PathBuf> {
    let backup = backup_path(path);
    fs::rename(path, &backup).map_err(|e| StoreError::write_failed(&backup, e))?;
    log::warn!("Moved {} to {}", path.display(), backup.display());
    Ok(backup)
}

// ============================================================================
// Profile Store
// ============================================================================

/// What [`ProfileStore::load_into_lenient`] found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Stored profiles were read; this many were registered.
    Loaded(usize),
    /// The file exists but does not parse. Nothing was registered.
    Unreadable { reason: String },
}

impl LoadOutcome {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable { .. })
    }
}

/// File-backed store of custom profiles.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all stored profiles. A missing file yields an empty map.
    pub fn load(&self) -> StoreResult<ProfileMap> {
        match read_document(&self.path)? {
            Some(profiles) => Ok(profiles),
            None => {
                log::debug!("No custom profiles at {}", self.path.display());
                Ok(ProfileMap::new())
            }
        }
    }

    /// Overwrite the file with `profiles`, creating parent directories.
    pub fn save(&self, profiles: &ProfileMap) -> StoreResult<()> {
        write_document(&self.path, profiles)?;
        log::info!(
            "Saved {} custom profile(s) to {}",
            profiles.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Persist the registry's custom profiles.
    pub fn save_registry(&self, registry: &ProfileRegistry) -> StoreResult<()> {
        let profiles: ProfileMap = registry
            .custom_profiles()
            .map(|p| (p.id.clone(), p.clone()))
            .collect();
        self.save(&profiles)
    }

    /// Persist the registry after a lenient load.
    ///
    /// When the load found an unreadable file, that file is first moved to
    /// `<file>.bak` so its content is never overwritten.
    pub fn save_registry_after(
        &self,
        registry: &ProfileRegistry,
        outcome: &LoadOutcome,
    ) -> StoreResult<()> {
        if outcome.is_unreadable() && self.path.exists() {
            move_to_backup(&self.path)?;
        }
        self.save_registry(registry)
    }

    /// Load stored profiles into `registry`, returning how many were added.
    ///
    /// Entries that shadow a built-in or fail validation are skipped.
    pub fn load_into(&self, registry: &mut ProfileRegistry) -> StoreResult<usize> {
        let mut added = 0;
        for (key, mut profile) in self.load()? {
            if profile.id.is_empty() {
                profile.id = key;
            }
            let id = profile.id.clone();
            match registry.insert_custom(profile) {
                Ok(()) => added += 1,
                Err(NameGenError::Store(e)) => return Err(e),
                Err(e) => log::warn!("Skipping stored profile '{}': {}", id, e),
            }
        }
        Ok(added)
    }

    /// Like [`Self::load_into`], but an unparseable file leaves the registry
    /// with the built-ins only instead of failing. I/O errors still fail.
    pub fn load_into_lenient(&self, registry: &mut ProfileRegistry) -> StoreResult<LoadOutcome> {
        match self.load_into(registry) {
            Ok(added) => Ok(LoadOutcome::Loaded(added)),
            Err(e) if e.is_parse_failure() => {
                log::warn!("{e}; continuing with built-in presets only");
                Ok(LoadOutcome::Unreadable {
                    reason: e.to_string(),
                })
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::name_gen::presets::builtin_preset;
    use crate::core::name_gen::profile::OverrideProfile;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path().join("none.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_json_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path().join("nested").join("custom.json"));

        let mut registry = ProfileRegistry::with_builtins();
        let ov = OverrideProfile::new().with_consonants(["v", "w"]);
        let id = registry.save_custom("noble", "Vale Court", Some(&ov)).unwrap();
        store.save_registry(&registry).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[&id].name, "Vale Court");
        assert_eq!(loaded[&id].phonemes.consonants, ["v", "w"]);

        // Stored file uses the wire shape
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"pluralRule\""));
    }

    #[test]
    fn test_yaml_format_by_extension() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path().join("custom.yaml"));

        let mut profile = builtin_preset("barbar").unwrap();
        profile.id = "custom_clans".to_string();
        let mut map = ProfileMap::new();
        map.insert(profile.id.clone(), profile.clone());
        store.save(&map).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("pluralRule: uk"));
        assert_eq!(store.load().unwrap()["custom_clans"], profile);
    }

    #[test]
    fn test_parse_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ProfileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::ParseFailed { ref format, .. } if format == "JSON"));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_unreadable_file_falls_back_to_builtins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom_profiles.json");
        fs::write(&path, "{ broken").unwrap();
        let store = ProfileStore::new(&path);

        let mut registry = ProfileRegistry::with_builtins();
        let outcome = store.load_into_lenient(&mut registry).unwrap();
        assert!(outcome.is_unreadable());
        assert_eq!(registry.len(), 5);
        assert!(registry.generate_names("noble", 2, None, false).is_ok());

        // Strict loading still reports the problem
        assert!(store.load_into(&mut registry).unwrap_err().is_parse_failure());
    }

    #[test]
    fn test_save_after_unreadable_load_keeps_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom_profiles.json");
        fs::write(&path, "{ broken").unwrap();
        let store = ProfileStore::new(&path);

        let mut registry = ProfileRegistry::with_builtins();
        let outcome = store.load_into_lenient(&mut registry).unwrap();
        let id = registry.save_custom("shadow", "Umbral", None).unwrap();
        store.save_registry_after(&registry, &outcome).unwrap();

        let backup = dir.path().join("custom_profiles.json.bak");
        assert_eq!(fs::read_to_string(&backup).unwrap(), "{ broken");
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key(&id));
    }

    #[test]
    fn test_save_after_clean_load_makes_no_backup() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path().join("custom_profiles.json"));

        let mut registry = ProfileRegistry::with_builtins();
        let outcome = store.load_into_lenient(&mut registry).unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded(0));
        store.save_registry_after(&registry, &outcome).unwrap();
        assert!(!dir.path().join("custom_profiles.json.bak").exists());
    }

    #[test]
    fn test_unknown_tone_keys_survive_store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path().join("custom.json"));

        let mut profile = builtin_preset("noble").unwrap();
        profile.id = "custom_warm".to_string();
        profile
            .tone
            .extra
            .insert("warmth".to_string(), serde_json::json!(0.9));
        let mut map = ProfileMap::new();
        map.insert(profile.id.clone(), profile.clone());
        store.save(&map).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded["custom_warm"].tone.extra["warmth"], 0.9);
        assert_eq!(loaded["custom_warm"], profile);
    }

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("/data/custom_profiles.json")),
            PathBuf::from("/data/custom_profiles.json.bak")
        );
    }

    #[test]
    fn test_load_into_skips_builtins_and_invalid() {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::new(dir.path().join("custom.json"));

        let mut good = builtin_preset("mystic").unwrap();
        good.id = "custom_good".to_string();
        let shadowing = builtin_preset("shadow").unwrap();
        let mut invalid = builtin_preset("noble").unwrap();
        invalid.id = "custom_invalid".to_string();
        invalid.patterns.clear();

        let mut map = ProfileMap::new();
        for p in [good, shadowing, invalid] {
            map.insert(p.id.clone(), p);
        }
        store.save(&map).unwrap();

        let mut registry = ProfileRegistry::with_builtins();
        assert_eq!(store.load_into(&mut registry).unwrap(), 1);
        assert!(registry.contains("custom_good"));
        assert!(!registry.contains("custom_invalid"));
        assert_eq!(registry.len(), 6);
    }
}
