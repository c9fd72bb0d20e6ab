use super::CarouselContext;

/// Receives notifications whenever the carousel position or geometry changes
pub trait CarouselSubscriber: Send + Sync {
    fn on_carousel_change(&self, context: &CarouselContext);
}
