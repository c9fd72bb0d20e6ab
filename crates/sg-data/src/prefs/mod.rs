//! Key-value preference persistence
//!
//! Preferences live in one JSON object under fixed string keys, written to
//! the platform config directory. Malformed values are logged and replaced
//! by defaults, never surfaced to the user.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::catalog::StoreId;
use crate::favorites::FavoriteSet;
use crate::i18n::Language;
use crate::{DataError, Result};

/// Fixed storage keys
pub mod keys {
    pub const FAVORITES: &str = "storeguide_favorites";
    pub const LANGUAGE: &str = "storeguide_language";
    pub const THEME: &str = "storeguide_theme";
}

/// Visual theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

/// Flat key-value store persisted as a single JSON object
pub struct PrefStore {
    /// None when no config directory could be resolved; the store then
    /// works in memory only and `save` is a no-op.
    path: Option<PathBuf>,
    values: Map<String, Value>,
}

impl PrefStore {
    /// Open the store at the platform default location. Falls back to a
    /// memory-only store when the config directory cannot be resolved.
    pub fn open_default() -> Self {
        match default_path() {
            Ok(path) => Self::open(path),
            Err(e) => {
                warn!("preferences unavailable: {}", e);
                Self {
                    path: None,
                    values: Map::new(),
                }
            }
        }
    }

    /// Open the store at an explicit path, loading existing values.
    /// A missing file is an empty store; a corrupt file is logged and
    /// replaced by an empty store.
    pub fn open(path: PathBuf) -> Self {
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(map)) => map,
                Ok(_) => {
                    error!("preference file {:?} is not a JSON object, resetting", path);
                    Map::new()
                }
                Err(e) => {
                    error!("failed to parse preferences {:?}: {}", path, e);
                    Map::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Map::new(),
            Err(e) => {
                error!("failed to read preferences {:?}: {}", path, e);
                Map::new()
            }
        };
        Self {
            path: Some(path),
            values,
        }
    }

    /// Write the store back to disk. Memory-only stores skip the write.
    pub fn save(&self) -> Result<()> {
        let path = match &self.path {
            Some(path) => path,
            None => {
                warn!("skipping preference save, no backing file");
                return Ok(());
            }
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(self.values.clone()))?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Typed read of one key. A malformed stored value is logged and
    /// treated as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                error!("ignoring malformed preference {:?}: {}", key, e);
                None
            }
        }
    }

    /// Typed write of one key. Unrelated keys are left untouched.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.values.insert(key.to_string(), json);
            }
            Err(e) => error!("failed to encode preference {:?}: {}", key, e),
        }
    }

    pub fn favorites(&self) -> FavoriteSet {
        let ids: Vec<String> = self.get(keys::FAVORITES).unwrap_or_default();
        FavoriteSet::from_ids(ids.into_iter().map(StoreId::new))
    }

    pub fn set_favorites(&mut self, favorites: &FavoriteSet) {
        let ids: Vec<String> = favorites
            .sorted_ids()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect();
        self.set(keys::FAVORITES, &ids);
    }

    pub fn language(&self) -> Language {
        self.get(keys::LANGUAGE).unwrap_or_default()
    }

    pub fn set_language(&mut self, language: Language) {
        self.set(keys::LANGUAGE, &language);
    }

    pub fn theme(&self) -> ThemeChoice {
        self.get(keys::THEME).unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: ThemeChoice) {
        self.set(keys::THEME, &theme);
    }
}

fn default_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "storeguide", "storeguide").ok_or(DataError::ConfigDirNotFound)?;
    Ok(dirs.config_dir().join("prefs.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sg-prefs-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_round_trip() {
        let path = temp_path("roundtrip");
        let _ = std::fs::remove_file(&path);

        let mut prefs = PrefStore::open(path.clone());
        let mut favorites = FavoriteSet::new();
        favorites.toggle(&StoreId::new("mac"));
        favorites.toggle(&StoreId::new("sephora"));
        prefs.set_favorites(&favorites);
        prefs.set_language(Language::Ru);
        prefs.set_theme(ThemeChoice::Dark);
        prefs.save().unwrap();

        let reloaded = PrefStore::open(path.clone());
        assert!(reloaded.favorites().contains(&StoreId::new("mac")));
        assert_eq!(reloaded.favorites().len(), 2);
        assert_eq!(reloaded.language(), Language::Ru);
        assert_eq!(reloaded.theme(), ThemeChoice::Dark);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_defaults() {
        let path = temp_path("corrupt");
        std::fs::write(&path, "not json at all").unwrap();

        let prefs = PrefStore::open(path.clone());
        assert!(prefs.favorites().is_empty());
        assert_eq!(prefs.language(), Language::Ar);
        assert_eq!(prefs.theme(), ThemeChoice::Light);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_value_defaults_without_losing_others() {
        let path = temp_path("malformed");
        std::fs::write(
            &path,
            r#"{"storeguide_language": 42, "storeguide_theme": "dark", "other_tool_key": true}"#,
        )
        .unwrap();

        let prefs = PrefStore::open(path.clone());
        assert_eq!(prefs.language(), Language::Ar);
        assert_eq!(prefs.theme(), ThemeChoice::Dark);

        // Keys this app does not own survive a save
        let mut prefs = prefs;
        prefs.set_language(Language::Ru);
        prefs.save().unwrap();
        let reloaded = PrefStore::open(path.clone());
        assert_eq!(reloaded.get::<bool>("other_tool_key"), Some(true));
        assert_eq!(reloaded.language(), Language::Ru);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_memory_only_store_saves_silently() {
        let prefs = PrefStore {
            path: None,
            values: Map::new(),
        };
        assert!(prefs.save().is_ok());
    }
}
