//! The similar-stores carousel controller
//!
//! The controller is a small state machine driven by [`CarouselCommand`]s.
//! Pointer handling, slide bookkeeping and offset projection live here so
//! the whole interaction is testable without a live UI surface; the widget
//! layer only feeds commands in and paints the resulting context.

mod engine;
mod layout;
mod subscriber;

pub use engine::CarouselEngine;
pub use layout::{SlideLayout, ITEM_GAP, ITEM_SPAN, ITEM_WIDTH};
pub use subscriber::CarouselSubscriber;

/// Commands accepted by the carousel engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselCommand {
    /// Pointer went down on the track
    DragStart { pointer_x: f32 },
    /// Pointer moved while down
    DragMove { pointer_x: f32 },
    /// Pointer released
    DragEnd,
    /// Viewport width changed
    Resize { viewport_width: f32 },
    /// Direct navigation, e.g. from an indicator dot
    GoToSlide(usize),
}

/// Snapshot handed to subscribers and the render layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselContext {
    pub current_slide: usize,
    pub total_slides: usize,
    pub layout: SlideLayout,
    /// Live horizontal track offset in points; equals the canonical offset
    /// of `current_slide` whenever no drag is in progress
    pub translate: f32,
    pub dragging: bool,
}
