//! User interface components for the store guide
//!
//! This crate provides the egui-based widgets: themed chrome, store and
//! category cards, and the similar-stores carousel.

pub mod cards;
pub mod carousel;
pub mod shell;
pub mod theme;
pub mod widget_utils;

// Re-export commonly used types
pub use cards::{category_chip, store_card, StoreCardResponse};
pub use carousel::{carousel_ui, CarouselResponse};
pub use shell::{top_bar, ShellAction};
pub use theme::{accent_color, apply_theme, favorite_color, rating_color};
pub use widget_utils::{widget_id, WidgetId};

// Common icon definitions
pub mod icons {
    pub const HEART: &str = "❤";
    pub const HEART_OUTLINE: &str = "♡";
    pub const STAR: &str = "⭐";
    pub const MOON: &str = "🌙";
    pub const SUN: &str = "☀";
    pub const STORE: &str = "🏬";
    pub const BACK: &str = "◀";
}
