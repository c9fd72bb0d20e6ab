//! Data layer for the store guide: catalog, favorites, preferences and localization

pub mod catalog;
pub mod favorites;
pub mod i18n;
pub mod prefs;

use thiserror::Error;

// Re-exports
pub use catalog::{builtin_catalog, Catalog, Category, Store, StoreId};
pub use favorites::FavoriteSet;
pub use i18n::{label, Language, LocalizedText, UiLabel};
pub use prefs::{PrefStore, ThemeChoice};

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No platform config directory available")]
    ConfigDirNotFound,
}

pub type Result<T> = std::result::Result<T, DataError>;
