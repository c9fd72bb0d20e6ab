use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use sg_data::{Catalog, FavoriteSet, Language, Store, StoreId, ThemeChoice};

use crate::carousel::CarouselEngine;
use crate::events::{events, EventBus};

/// The main application state
///
/// Everything here is session-scoped and handed down explicitly; there is
/// no process-global state. Page routing and transient UI state belong to
/// the app layer.
pub struct GuideState {
    /// The store catalog being browsed
    pub catalog: Arc<Catalog>,

    /// The user's favorited stores
    pub favorites: Arc<RwLock<FavoriteSet>>,

    /// Language and theme choices
    pub settings: Arc<RwLock<UserSettings>>,

    /// The event bus
    pub event_bus: Arc<EventBus>,
}

/// User-facing settings
#[derive(Debug, Clone, Copy, Default)]
pub struct UserSettings {
    pub language: Language,
    pub theme: ThemeChoice,
}

impl GuideState {
    /// Create a new application state over a catalog
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            favorites: Arc::new(RwLock::new(FavoriteSet::new())),
            settings: Arc::new(RwLock::new(UserSettings::default())),
            event_bus: Arc::new(EventBus::new()),
        }
    }

    /// Flip a store's favorite status and publish the change
    pub fn toggle_favorite(&self, id: &StoreId) -> bool {
        let (favorited, count) = {
            let mut favorites = self.favorites.write();
            let favorited = favorites.toggle(id);
            (favorited, favorites.len())
        };
        self.event_bus.publish(events::FavoriteToggled {
            store_id: id.clone(),
            favorited,
            favorite_count: count,
        });
        favorited
    }

    /// Switch the UI language
    pub fn set_language(&self, language: Language) {
        {
            let mut settings = self.settings.write();
            if settings.language == language {
                return;
            }
            settings.language = language;
        }
        self.event_bus.publish(events::LanguageChanged { language });
    }

    /// Switch the visual theme
    pub fn set_theme(&self, theme: ThemeChoice) {
        {
            let mut settings = self.settings.write();
            if settings.theme == theme {
                return;
            }
            settings.theme = theme;
        }
        self.event_bus.publish(events::ThemeChanged { theme });
    }

    /// Build the session behind a store's detail view. Returns None for an
    /// unknown store id.
    pub fn open_detail(&self, id: &StoreId, viewport_width: f32) -> Option<DetailSession> {
        if self.catalog.get(id).is_none() {
            debug!("detail requested for unknown store {}", id);
            return None;
        }
        let similar: Vec<StoreId> = self
            .catalog
            .similar_to(id)
            .iter()
            .map(|store| store.id.clone())
            .collect();
        let carousel = Arc::new(CarouselEngine::new(similar.len(), viewport_width));

        self.event_bus
            .publish(events::StoreOpened { store_id: id.clone() });

        Some(DetailSession {
            store_id: id.clone(),
            similar,
            carousel,
        })
    }
}

/// State owned by one open detail view
///
/// The carousel engine lives and dies with the session; reopening a detail
/// view builds a fresh one.
pub struct DetailSession {
    pub store_id: StoreId,
    /// Similar stores in display order, feeding the carousel
    pub similar: Vec<StoreId>,
    pub carousel: Arc<CarouselEngine>,
}

impl DetailSession {
    /// Resolve the similar ids against the catalog, skipping any that have
    /// disappeared
    pub fn similar_stores<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Store> {
        self.similar
            .iter()
            .filter_map(|id| catalog.get(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_data::builtin_catalog;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_toggle_favorite_publishes_count() {
        let state = GuideState::new(builtin_catalog());
        let published = Arc::new(AtomicUsize::new(0));

        let counter = published.clone();
        state
            .event_bus
            .subscribe::<events::FavoriteToggled>(crate::events::handler_from_fn(move |event| {
                let toggled = event
                    .as_any()
                    .downcast_ref::<events::FavoriteToggled>()
                    .expect("favorite handler");
                counter.store(toggled.favorite_count, Ordering::SeqCst);
            }));

        let id = StoreId::new("sephora");
        assert!(state.toggle_favorite(&id));
        assert_eq!(published.load(Ordering::SeqCst), 1);
        assert!(!state.toggle_favorite(&id));
        assert_eq!(published.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_open_detail_builds_session_around_similar_stores() {
        let state = GuideState::new(builtin_catalog());
        let id = StoreId::new("sephora");
        let session = state.open_detail(&id, 1024.0).expect("known store");

        assert_eq!(session.store_id, id);
        assert!(!session.similar.is_empty());
        assert!(!session.similar.contains(&id));

        let expected_slides = (session.similar.len() + 2) / 3;
        assert_eq!(session.carousel.context().total_slides, expected_slides);
    }

    #[test]
    fn test_open_detail_unknown_store_is_none() {
        let state = GuideState::new(builtin_catalog());
        assert!(state.open_detail(&StoreId::new("nope"), 1024.0).is_none());
    }

    #[test]
    fn test_set_language_skips_redundant_updates() {
        let state = GuideState::new(builtin_catalog());
        let published = Arc::new(AtomicUsize::new(0));

        let counter = published.clone();
        state
            .event_bus
            .subscribe::<events::LanguageChanged>(crate::events::handler_from_fn(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }));

        state.set_language(Language::Ar); // already the default
        assert_eq!(published.load(Ordering::SeqCst), 0);
        state.set_language(Language::Ru);
        assert_eq!(published.load(Ordering::SeqCst), 1);
    }
}
