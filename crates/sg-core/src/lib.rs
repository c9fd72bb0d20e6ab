//! Core functionality for the store guide
//!
//! This crate provides the carousel controller, the event bus and the
//! per-session application state the UI layers are built on.

pub mod carousel;
pub mod events;
pub mod state;

// Re-export commonly used types
pub use carousel::{
    CarouselCommand, CarouselContext, CarouselEngine, CarouselSubscriber, SlideLayout,
};
pub use state::{DetailSession, GuideState, UserSettings};
