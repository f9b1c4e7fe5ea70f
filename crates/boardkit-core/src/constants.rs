//! Default values for viewport, gesture, and resize behaviour.
//!
//! These are the built-in defaults; every one of them can be overridden
//! through `boardkit_settings::Config`.

/// Predefined zoom levels used by discrete zoom in/out, largest first.
pub const DEFAULT_SCALE_LEVELS: &[f64] = &[
    10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.5, 1.0, 0.75, 0.5, 0.4, 0.3, 0.25, 0.2, 0.15,
    0.1, 0.075, 0.05, 0.025, 0.01,
];

/// Smallest camera scale.
pub const MIN_SCALE: f64 = 0.01;

/// Largest camera scale.
pub const MAX_SCALE: f64 = 10.0;

/// Padding applied around a rectangle when fitting it into the view, in
/// percent of the rectangle's own size.
pub const VIEW_PADDING_PERCENT: f64 = 10.0;

/// Default viewport size in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1200.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

/// Zoom factor applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Minimum change in finger distance (pixels) for a two-finger move to count
/// as a pinch rather than a pan.
pub const PINCH_DISTANCE_THRESHOLD_PX: f64 = 5.0;

/// Radius of a resize anchor in screen pixels.
pub const ANCHOR_RADIUS_PX: f64 = 5.0;

/// Text length above which reflow is deferred until the drag ends.
pub const LONG_TEXT_THRESHOLD: usize = 5000;

/// Closest the pointer may get to the opposite edge during a deferred
/// resize, in world units.
pub const DEFERRED_MIN_EXTENT: f64 = 100.0;
