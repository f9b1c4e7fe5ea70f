//! # Event Bus Module
//!
//! Publish/subscribe hub that replaces ad-hoc change callbacks between the
//! camera, the selection, the transformer, and the render scheduler.
//!
//! ## Overview
//!
//! - Publishers emit typed [`BoardEvent`]s without knowing subscribers
//! - Subscribers filter by [`EventCategory`] and receive matching events
//! - Delivery is synchronous and ordered by subscription time
//!
//! ## Usage
//!
//! ```rust
//! use boardkit_core::event_bus::{BoardEvent, CameraEvent, EventBus, EventCategory, EventFilter};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Camera]),
//!     |event| {
//!         if let BoardEvent::Camera(camera) = event {
//!             println!("Camera event: {:?}", camera);
//!         }
//!     },
//! );
//!
//! bus.publish(BoardEvent::Camera(CameraEvent::Changed {
//!     scale: 2.0,
//!     translate_x: -10.0,
//!     translate_y: -10.0,
//! }));
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
