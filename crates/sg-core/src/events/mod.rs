use ahash::AHashMap;
use parking_lot::Mutex;
use std::sync::Arc;

/// System-wide event bus
pub struct EventBus {
    handlers: Arc<Mutex<AHashMap<std::any::TypeId, Vec<Box<dyn EventHandler>>>>>,
}

/// Event trait that all events must implement
pub trait Event: Send + Sync + 'static {
    fn as_any(&self) -> &dyn std::any::Any;
}

/// Handler trait for event handlers
pub trait EventHandler: Send + Sync {
    fn handle(&mut self, event: &dyn Event);
}

/// Events the guide publishes while the user browses
pub mod events {
    use super::Event;
    use sg_data::{Language, StoreId, ThemeChoice};

    /// A store was favorited or unfavorited
    #[derive(Debug, Clone)]
    pub struct FavoriteToggled {
        pub store_id: StoreId,
        pub favorited: bool,
        pub favorite_count: usize,
    }

    /// A store's detail view was opened
    #[derive(Debug, Clone)]
    pub struct StoreOpened {
        pub store_id: StoreId,
    }

    /// A category filter was selected on the home page
    #[derive(Debug, Clone)]
    pub struct CategorySelected {
        /// None means "all categories"
        pub category_id: Option<String>,
    }

    /// The UI language changed
    #[derive(Debug, Clone)]
    pub struct LanguageChanged {
        pub language: Language,
    }

    /// The visual theme changed
    #[derive(Debug, Clone)]
    pub struct ThemeChanged {
        pub theme: ThemeChoice,
    }

    // Implement Event trait for all event types
    macro_rules! impl_event {
        ($($t:ty),*) => {
            $(
                impl Event for $t {
                    fn as_any(&self) -> &dyn std::any::Any {
                        self
                    }
                }
            )*
        }
    }

    impl_event!(
        FavoriteToggled,
        StoreOpened,
        CategorySelected,
        LanguageChanged,
        ThemeChanged
    );
}

impl EventBus {
    /// Create a new event bus
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Mutex::new(AHashMap::new())),
        }
    }

    /// Subscribe to events of a specific type
    pub fn subscribe<E: Event>(&self, handler: Box<dyn EventHandler>) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();
        handlers.entry(type_id).or_insert_with(Vec::new).push(handler);
    }

    /// Publish an event
    pub fn publish<E: Event>(&self, event: E) {
        let type_id = std::any::TypeId::of::<E>();
        let mut handlers = self.handlers.lock();

        if let Some(event_handlers) = handlers.get_mut(&type_id) {
            for handler in event_handlers.iter_mut() {
                handler.handle(&event);
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper struct for creating event handlers from closures
pub struct ClosureEventHandler<F> {
    handler: F,
}

impl<F> EventHandler for ClosureEventHandler<F>
where
    F: FnMut(&dyn Event) + Send + Sync,
{
    fn handle(&mut self, event: &dyn Event) {
        (self.handler)(event);
    }
}

/// Create an event handler from a closure
pub fn handler_from_fn<F>(f: F) -> Box<dyn EventHandler>
where
    F: FnMut(&dyn Event) + Send + Sync + 'static,
{
    Box::new(ClosureEventHandler { handler: f })
}

#[cfg(test)]
mod tests {
    use super::events::{FavoriteToggled, StoreOpened};
    use super::*;
    use sg_data::StoreId;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_reaches_subscribed_type_only() {
        let bus = EventBus::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = seen.clone();
        bus.subscribe::<FavoriteToggled>(handler_from_fn(move |event| {
            let toggled = event
                .as_any()
                .downcast_ref::<FavoriteToggled>()
                .expect("handler registered for FavoriteToggled");
            assert_eq!(toggled.store_id.as_str(), "mac");
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        bus.publish(FavoriteToggled {
            store_id: StoreId::new("mac"),
            favorited: true,
            favorite_count: 1,
        });
        bus.publish(StoreOpened {
            store_id: StoreId::new("mac"),
        });

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }
}
