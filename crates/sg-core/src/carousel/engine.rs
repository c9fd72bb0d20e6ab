//! Carousel engine implementation

use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::debug;

use super::layout::SlideLayout;
use super::{CarouselCommand, CarouselContext, CarouselSubscriber};

/// Ephemeral pointer session while a drag is in progress
#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_x: f32,
    last_x: f32,
}

impl DragSession {
    fn diff(&self) -> f32 {
        self.last_x - self.start_x
    }
}

/// Carousel state stored internally
#[derive(Debug, Clone)]
struct CarouselState {
    layout: SlideLayout,
    item_count: usize,
    total_slides: usize,
    current: usize,
    /// Canonical offset of `current`; baseline for drag feedback
    baseline: f32,
    /// Live track offset; equals `baseline` outside a drag
    translate: f32,
    drag: Option<DragSession>,
}

/// The carousel controller
///
/// One engine exists per detail-view session and is rebuilt whenever the
/// similar-item set changes. All mutation goes through [`apply`].
///
/// [`apply`]: CarouselEngine::apply
pub struct CarouselEngine {
    state: Arc<RwLock<CarouselState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn CarouselSubscriber>>>>,
}

impl CarouselEngine {
    /// Create an engine for `item_count` items at the given viewport width
    pub fn new(item_count: usize, viewport_width: f32) -> Self {
        let layout = SlideLayout::for_viewport(viewport_width);
        let state = CarouselState {
            layout,
            item_count,
            total_slides: layout.slide_count(item_count),
            current: 0,
            baseline: 0.0,
            translate: 0.0,
            drag: None,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Process one command through the state machine
    pub fn apply(&self, command: CarouselCommand) {
        match command {
            CarouselCommand::DragStart { pointer_x } => self.drag_start(pointer_x),
            CarouselCommand::DragMove { pointer_x } => self.drag_move(pointer_x),
            CarouselCommand::DragEnd => self.drag_end(),
            CarouselCommand::Resize { viewport_width } => self.resize(viewport_width),
            CarouselCommand::GoToSlide(index) => self.go_to_slide(index),
        }
    }

    /// Snapshot of the current state for rendering
    pub fn context(&self) -> CarouselContext {
        let state = self.state.read();
        CarouselContext {
            current_slide: state.current,
            total_slides: state.total_slides,
            layout: state.layout,
            translate: state.translate,
            dragging: state.drag.is_some(),
        }
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn CarouselSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Navigate directly to a slide; out-of-range requests are ignored
    fn go_to_slide(&self, index: usize) {
        {
            let mut state = self.state.write();
            if index >= state.total_slides {
                debug!(
                    "ignoring slide request {} (total {})",
                    index, state.total_slides
                );
                return;
            }
            state.current = index;
            let offset = state.layout.offset(index);
            state.baseline = offset;
            state.translate = offset;
        }
        self.notify_subscribers();
    }

    fn drag_start(&self, pointer_x: f32) {
        let mut state = self.state.write();
        if state.total_slides == 0 {
            return;
        }
        if state.drag.is_some() {
            // A start while already dragging means the previous release was
            // lost; discard the stale session and anchor at the new pointer.
            debug!("drag start while dragging, resetting session");
            state.translate = state.baseline;
        }
        state.drag = Some(DragSession {
            start_x: pointer_x,
            last_x: pointer_x,
        });
    }

    fn drag_move(&self, pointer_x: f32) {
        let state = &mut *self.state.write();
        if let Some(drag) = state.drag.as_mut() {
            drag.last_x = pointer_x;
            let diff = drag.diff();
            state.translate = state.baseline + diff;
        }
    }

    fn drag_end(&self) {
        {
            let mut state = self.state.write();
            if state.drag.take().is_none() {
                return;
            }
            let moved_by = state.translate - state.baseline;
            if moved_by.abs() > state.layout.commit_distance() {
                if moved_by < 0.0 && state.current + 1 < state.total_slides {
                    state.current += 1;
                } else if moved_by > 0.0 && state.current > 0 {
                    state.current -= 1;
                }
                // At a boundary the threshold is met but nothing moves; the
                // snap below still returns the track to its slide.
            }
            let offset = state.layout.offset(state.current);
            state.baseline = offset;
            state.translate = offset;
        }
        self.notify_subscribers();
    }

    fn resize(&self, viewport_width: f32) {
        {
            let state = &mut *self.state.write();
            let layout = SlideLayout::for_viewport(viewport_width);
            if layout == state.layout {
                return;
            }
            state.layout = layout;
            state.total_slides = layout.slide_count(state.item_count);
            state.current = state.current.min(state.total_slides.saturating_sub(1));
            state.baseline = layout.offset(state.current);
            // A resize does not cancel an in-progress drag; live feedback is
            // re-derived against the new baseline.
            state.translate = match &state.drag {
                Some(drag) => state.baseline + drag.diff(),
                None => state.baseline,
            };
        }
        self.notify_subscribers();
    }

    /// Notify all live subscribers of a position or geometry change
    fn notify_subscribers(&self) {
        let context = self.context();
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_carousel_change(&context);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::layout::ITEM_SPAN;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const WIDE: f32 = 1024.0; // 3 items per slide
    const NARROW: f32 = 500.0; // 2 items per slide

    fn drag(engine: &CarouselEngine, from: f32, to: f32) {
        engine.apply(CarouselCommand::DragStart { pointer_x: from });
        engine.apply(CarouselCommand::DragMove { pointer_x: to });
        engine.apply(CarouselCommand::DragEnd);
    }

    #[test]
    fn test_new_engine_starts_at_first_slide() {
        let engine = CarouselEngine::new(7, WIDE);
        let ctx = engine.context();
        assert_eq!(ctx.current_slide, 0);
        assert_eq!(ctx.total_slides, 3);
        assert_eq!(ctx.translate, 0.0);
        assert!(!ctx.dragging);
    }

    #[test]
    fn test_empty_carousel_has_no_slides() {
        let engine = CarouselEngine::new(0, WIDE);
        assert_eq!(engine.context().total_slides, 0);

        // Nothing to navigate to, nothing to drag
        engine.apply(CarouselCommand::GoToSlide(0));
        engine.apply(CarouselCommand::DragStart { pointer_x: 10.0 });
        engine.apply(CarouselCommand::DragMove { pointer_x: 500.0 });
        engine.apply(CarouselCommand::DragEnd);
        let ctx = engine.context();
        assert_eq!(ctx.current_slide, 0);
        assert_eq!(ctx.translate, 0.0);
    }

    #[test]
    fn test_go_to_slide_in_range() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::GoToSlide(2));
        let ctx = engine.context();
        assert_eq!(ctx.current_slide, 2);
        assert_eq!(ctx.translate, -2.0 * 3.0 * ITEM_SPAN);
    }

    #[test]
    fn test_go_to_slide_out_of_range_is_ignored() {
        // 7 items at 3 per slide is 3 slides
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::GoToSlide(2));
        let before = engine.context();

        engine.apply(CarouselCommand::GoToSlide(5));
        let after = engine.context();
        assert_eq!(after.current_slide, 2);
        assert_eq!(after.translate, before.translate);
    }

    #[test]
    fn test_go_to_current_slide_is_idempotent() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::GoToSlide(1));
        let first = engine.context();
        engine.apply(CarouselCommand::GoToSlide(1));
        assert_eq!(engine.context(), first);
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let engine = CarouselEngine::new(7, WIDE);
        // Well below the 30% commit distance
        drag(&engine, 300.0, 250.0);
        let ctx = engine.context();
        assert_eq!(ctx.current_slide, 0);
        assert_eq!(ctx.translate, 0.0);
        assert!(!ctx.dragging);
    }

    #[test]
    fn test_zero_distance_drag_is_a_no_op() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::GoToSlide(1));
        let before = engine.context();
        drag(&engine, 300.0, 300.0);
        assert_eq!(engine.context(), before);
    }

    #[test]
    fn test_drag_left_by_one_item_advances() {
        let engine = CarouselEngine::new(7, WIDE);
        drag(&engine, 400.0, 400.0 - ITEM_SPAN);
        let ctx = engine.context();
        assert_eq!(ctx.current_slide, 1);
        assert_eq!(ctx.translate, -1.0 * 3.0 * ITEM_SPAN);
    }

    #[test]
    fn test_drag_right_at_first_slide_stays_clamped() {
        let engine = CarouselEngine::new(7, WIDE);
        drag(&engine, 100.0, 100.0 + 2.0 * ITEM_SPAN);
        let ctx = engine.context();
        assert_eq!(ctx.current_slide, 0);
        assert_eq!(ctx.translate, 0.0);
    }

    #[test]
    fn test_drag_left_at_last_slide_stays_clamped() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::GoToSlide(2));
        drag(&engine, 400.0, 400.0 - 2.0 * ITEM_SPAN);
        let ctx = engine.context();
        assert_eq!(ctx.current_slide, 2);
        assert_eq!(ctx.translate, -2.0 * 3.0 * ITEM_SPAN);
    }

    #[test]
    fn test_drag_right_retreats() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::GoToSlide(2));
        drag(&engine, 100.0, 100.0 + ITEM_SPAN);
        assert_eq!(engine.context().current_slide, 1);
    }

    #[test]
    fn test_move_gives_continuous_feedback() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::DragStart { pointer_x: 300.0 });
        engine.apply(CarouselCommand::DragMove { pointer_x: 260.0 });
        let ctx = engine.context();
        assert!(ctx.dragging);
        assert_eq!(ctx.translate, -40.0);
    }

    #[test]
    fn test_move_and_end_without_start_are_ignored() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::DragMove { pointer_x: 50.0 });
        engine.apply(CarouselCommand::DragEnd);
        let ctx = engine.context();
        assert_eq!(ctx.current_slide, 0);
        assert_eq!(ctx.translate, 0.0);
    }

    #[test]
    fn test_reentrant_drag_start_resets_the_session() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::DragStart { pointer_x: 100.0 });
        engine.apply(CarouselCommand::DragMove { pointer_x: 150.0 });

        // Second start discards the stale anchor
        engine.apply(CarouselCommand::DragStart { pointer_x: 200.0 });
        assert_eq!(engine.context().translate, 0.0);

        engine.apply(CarouselCommand::DragMove { pointer_x: 190.0 });
        assert_eq!(engine.context().translate, -10.0);

        engine.apply(CarouselCommand::DragEnd);
        assert_eq!(engine.context().current_slide, 0);
    }

    #[test]
    fn test_resize_recomputes_and_clamps() {
        // 3 items: two slides when narrow, a single slide when wide
        let engine = CarouselEngine::new(3, NARROW);
        engine.apply(CarouselCommand::GoToSlide(1));
        assert_eq!(engine.context().total_slides, 2);

        engine.apply(CarouselCommand::Resize {
            viewport_width: WIDE,
        });
        let ctx = engine.context();
        assert_eq!(ctx.total_slides, 1);
        assert_eq!(ctx.current_slide, 0);
        assert_eq!(ctx.translate, 0.0);
    }

    #[test]
    fn test_resize_keeps_index_when_still_valid() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::GoToSlide(2));

        engine.apply(CarouselCommand::Resize {
            viewport_width: NARROW,
        });
        let ctx = engine.context();
        assert_eq!(ctx.total_slides, 4);
        assert_eq!(ctx.current_slide, 2);
        assert_eq!(ctx.translate, -2.0 * 2.0 * ITEM_SPAN);
    }

    #[test]
    fn test_resize_survives_an_active_drag() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::DragStart { pointer_x: 300.0 });
        engine.apply(CarouselCommand::DragMove { pointer_x: 250.0 });

        engine.apply(CarouselCommand::Resize {
            viewport_width: NARROW,
        });
        let ctx = engine.context();
        assert!(ctx.dragging);
        assert_eq!(ctx.translate, -50.0);

        // The session keeps going and can still commit
        engine.apply(CarouselCommand::DragMove { pointer_x: 300.0 - ITEM_SPAN });
        engine.apply(CarouselCommand::DragEnd);
        assert_eq!(engine.context().current_slide, 1);
    }

    #[test]
    fn test_resize_to_same_layout_changes_nothing() {
        let engine = CarouselEngine::new(7, WIDE);
        engine.apply(CarouselCommand::GoToSlide(1));
        let before = engine.context();
        engine.apply(CarouselCommand::Resize {
            viewport_width: WIDE + 100.0,
        });
        assert_eq!(engine.context(), before);
    }

    struct CountingSubscriber {
        calls: AtomicUsize,
    }

    impl CarouselSubscriber for CountingSubscriber {
        fn on_carousel_change(&self, _context: &CarouselContext) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_subscribers_hear_committed_changes_only_while_alive() {
        let engine = CarouselEngine::new(7, WIDE);
        let subscriber = Arc::new(CountingSubscriber {
            calls: AtomicUsize::new(0),
        });
        engine.add_subscriber(subscriber.clone());

        engine.apply(CarouselCommand::GoToSlide(1));
        engine.apply(CarouselCommand::GoToSlide(9)); // rejected, no notification
        assert_eq!(subscriber.calls.load(Ordering::SeqCst), 1);

        drop(subscriber);
        engine.apply(CarouselCommand::GoToSlide(2)); // must not panic
    }
}
