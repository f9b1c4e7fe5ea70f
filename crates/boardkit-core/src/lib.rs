//! # BoardKit Core
//!
//! Core types, constants, and utilities shared by the BoardKit crates.
//! Provides the error taxonomy, id aliases, and the synchronous event bus
//! that camera, selection, and transformer use to notify renderers.

pub mod constants;
pub mod error;
pub mod event_bus;
pub mod types;

pub use error::GeometryError;

pub use event_bus::{
    BoardEvent, CameraEvent, EventBus, EventCategory, EventFilter, RenderEvent, SelectionEvent,
    SubscriptionId,
};

pub use types::{finite_or, finite_or_zero, ItemId, TouchId};
