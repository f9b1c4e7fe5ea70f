//! Viewport camera.
//!
//! The camera owns the world-to-screen [`Matrix`]. Screen coordinates are
//! viewport pixels with the origin at the top-left corner; world coordinates
//! are the board's own space. Every change is published on the event bus
//! (when one is attached) and written to the per-document snapshot store
//! (when one is attached).

mod gesture;

pub use gesture::{Direction, GestureTracker, GestureUpdate};

use std::fmt;
use std::sync::Arc;

use boardkit_core::{finite_or_zero, BoardEvent, CameraEvent, EventBus, TouchId};
use boardkit_settings::{
    load_snapshot, save_snapshot, CameraSnapshot, Config, GestureSettings, ViewStateStore,
    ViewportSettings,
};

use crate::geometry::{Matrix, Mbr, Point};

/// Levels closer than this are treated as the same level when stepping.
const LEVEL_EPSILON: f64 = 1e-9;

impl From<CameraSnapshot> for Matrix {
    fn from(s: CameraSnapshot) -> Self {
        Matrix::new(
            s.translate_x,
            s.translate_y,
            s.scale_x,
            s.scale_y,
            s.shear_x,
            s.shear_y,
        )
    }
}

impl From<Matrix> for CameraSnapshot {
    fn from(m: Matrix) -> Self {
        CameraSnapshot {
            translate_x: m.translate_x,
            translate_y: m.translate_y,
            scale_x: m.scale_x,
            scale_y: m.scale_y,
            shear_x: m.shear_x,
            shear_y: m.shear_y,
        }
    }
}

struct AttachedStore {
    store: Box<dyn ViewStateStore>,
    document_id: String,
}

/// Pan/zoom state of the board view.
pub struct Camera {
    matrix: Matrix,
    settings: ViewportSettings,
    pointer: Point,
    gesture: GestureTracker,
    store: Option<AttachedStore>,
    events: Option<Arc<EventBus>>,
}

impl Camera {
    /// Creates a camera with default viewport and gesture settings.
    pub fn new() -> Self {
        Self::with_settings(ViewportSettings::default(), &GestureSettings::default())
    }

    /// Creates a camera with an identity matrix and the given settings.
    pub fn with_settings(settings: ViewportSettings, gesture: &GestureSettings) -> Self {
        Self {
            matrix: Matrix::IDENTITY,
            settings,
            pointer: Point::ORIGIN,
            gesture: GestureTracker::new(gesture.pinch_distance_threshold_px),
            store: None,
            events: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_settings(config.viewport.clone(), &config.gesture)
    }

    /// Publishes camera changes on `events`.
    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Current zoom factor.
    pub fn scale(&self) -> f64 {
        self.matrix.scale_x
    }

    pub fn settings(&self) -> &ViewportSettings {
        &self.settings
    }

    pub fn gesture(&self) -> &GestureTracker {
        &self.gesture
    }

    /// Last pointer position reported by [`Camera::set_pointer`], in screen
    /// pixels.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn set_pointer(&mut self, point: Point) {
        self.pointer = point.finite_or_zero();
    }

    pub fn viewport_size(&self) -> (f64, f64) {
        (self.settings.width, self.settings.height)
    }

    /// Sets the viewport size in pixels. Non-positive sizes are ignored.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            tracing::warn!("Ignoring viewport size {}x{}", width, height);
            return;
        }
        self.settings.width = width;
        self.settings.height = height;
        self.changed();
    }

    /// The world rectangle currently visible in the viewport.
    pub fn mbr(&self) -> Mbr {
        Mbr::from_size(0.0, 0.0, self.settings.width, self.settings.height)
            .transformed(&self.matrix.inverse_or_identity())
    }

    pub fn screen_to_world(&self, point: Point) -> Point {
        self.matrix
            .inverse_or_identity()
            .apply(point.finite_or_zero())
    }

    pub fn world_to_screen(&self, point: Point) -> Point {
        self.matrix.apply(point.finite_or_zero())
    }

    /// Replaces the matrix. Non-finite or singular matrices are rejected, as
    /// are matrices with a zero scale on either axis.
    pub fn set_matrix(&mut self, matrix: Matrix) {
        if !matrix.is_finite() {
            tracing::warn!("Ignoring non-finite camera matrix {}", matrix);
            return;
        }
        if matrix.scale_x == 0.0 || matrix.scale_y == 0.0 {
            tracing::warn!("Ignoring zero-scale camera matrix {}", matrix);
            return;
        }
        if let Err(e) = matrix.try_inverse() {
            tracing::warn!("Ignoring camera matrix {}: {}", matrix, e);
            return;
        }
        self.matrix = matrix;
        self.changed();
    }

    /// Back to the identity matrix.
    pub fn reset(&mut self) {
        self.matrix = Matrix::IDENTITY;
        self.changed();
    }

    /// Pans by a delta given in world units.
    pub fn translate_by(&mut self, dx: f64, dy: f64) {
        let dx = finite_or_zero(dx);
        let dy = finite_or_zero(dy);
        self.matrix
            .translate(dx * self.matrix.scale_x, dy * self.matrix.scale_y);
        self.changed();
    }

    /// Multiplies the zoom by `factor`, keeping the world point under the
    /// screen point `(x, y)` pinned in place.
    ///
    /// The resulting scale is clamped to `[min_scale, max_scale]`.
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom_relative_to_point_by(&mut self, factor: f64, x: f64, y: f64) {
        if !(factor > 0.0 && factor.is_finite()) {
            tracing::warn!("Ignoring zoom factor {}", factor);
            return;
        }
        let scale_x = self.matrix.scale_x * factor;
        let scale_y = self.matrix.scale_y * factor;
        self.set_scale_around(scale_x, scale_y, x, y);
    }

    fn set_scale_around(&mut self, scale_x: f64, scale_y: f64, x: f64, y: f64) {
        let x = finite_or_zero(x);
        let y = finite_or_zero(y);
        let m = &mut self.matrix;

        let board_x = (x - m.translate_x) / m.scale_x;
        let board_y = (y - m.translate_y) / m.scale_y;

        m.scale_x = self.settings.clamp_scale(scale_x);
        m.scale_y = self.settings.clamp_scale(scale_y);

        m.translate_x = x - board_x * m.scale_x;
        m.translate_y = y - board_y * m.scale_y;

        tracing::trace!("Zoomed at ({}, {}) to {}", x, y, m.scale_x);
        self.changed();
    }

    /// Zooms around the last known pointer position.
    pub fn zoom_relative_to_pointer_by(&mut self, factor: f64) {
        let pointer = self.pointer;
        self.zoom_relative_to_point_by(factor, pointer.x, pointer.y);
    }

    /// Zooms around the center of the viewport.
    pub fn zoom_relative_to_view_center_by(&mut self, factor: f64) {
        let (w, h) = self.viewport_size();
        self.zoom_relative_to_point_by(factor, w / 2.0, h / 2.0);
    }

    /// Sets the zoom to `scale` around the view center.
    pub fn zoom_to(&mut self, scale: f64) {
        if !(scale > 0.0 && scale.is_finite()) {
            tracing::warn!("Ignoring zoom target {}", scale);
            return;
        }
        let (w, h) = self.viewport_size();
        self.set_scale_around(scale, scale, w / 2.0, h / 2.0);
    }

    /// Next predefined level above the current scale, if any.
    pub fn next_level_in(&self) -> Option<f64> {
        let current = self.scale();
        self.settings
            .scale_levels
            .iter()
            .rev()
            .copied()
            .find(|level| *level > current + LEVEL_EPSILON)
    }

    /// Next predefined level below the current scale, if any.
    pub fn next_level_out(&self) -> Option<f64> {
        let current = self.scale();
        self.settings
            .scale_levels
            .iter()
            .copied()
            .find(|level| *level < current - LEVEL_EPSILON)
    }

    /// Steps to the nearest predefined level larger than the current scale.
    /// Returns the resulting scale.
    pub fn zoom_in(&mut self) -> f64 {
        if let Some(level) = self.next_level_in() {
            self.zoom_to(level);
        }
        self.scale()
    }

    /// Steps to the nearest predefined level smaller than the current scale.
    /// Returns the resulting scale.
    pub fn zoom_out(&mut self) -> f64 {
        if let Some(level) = self.next_level_out() {
            self.zoom_to(level);
        }
        self.scale()
    }

    /// Wheel zoom at a screen point. A negative `delta_y` (wheel up) zooms
    /// in by one wheel step, a positive one zooms out.
    pub fn wheel(&mut self, delta_y: f64, at: Point) {
        let delta_y = finite_or_zero(delta_y);
        if delta_y == 0.0 {
            return;
        }
        let step = self.settings.wheel_zoom_step;
        let factor = if delta_y < 0.0 { step } else { 1.0 / step };
        self.set_pointer(at);
        self.zoom_relative_to_pointer_by(factor);
    }

    /// Fits `mbr` into the viewport using the configured padding.
    pub fn view_rectangle(&mut self, mbr: &Mbr) {
        let padding = self.settings.fit_padding_percent;
        self.view_rectangle_with_padding(mbr, padding);
    }

    /// Fits `mbr` into the viewport, padded on every side by
    /// `padding_percent` of its own width and height, and centers it.
    pub fn view_rectangle_with_padding(&mut self, mbr: &Mbr, padding_percent: f64) {
        let padding = finite_or_zero(padding_percent).max(0.0) / 100.0;
        let padded = mbr.expanded_by(mbr.width() * padding, mbr.height() * padding);
        let (vw, vh) = self.viewport_size();

        let fit_x = (padded.width() > 0.0).then(|| vw / padded.width());
        let fit_y = (padded.height() > 0.0).then(|| vh / padded.height());
        let scale = match (fit_x, fit_y) {
            (Some(x), Some(y)) => x.min(y),
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => self.scale(),
        };
        let scale = self.settings.clamp_scale(scale);

        let center = padded.center();
        self.matrix = Matrix::new(
            vw / 2.0 - center.x * scale,
            vh / 2.0 - center.y * scale,
            scale,
            scale,
            0.0,
            0.0,
        );
        tracing::debug!("Fitted {} at scale {}", mbr, scale);
        self.changed();
    }

    /// Registers a touch at a screen point.
    pub fn touch_start(&mut self, id: TouchId, point: Point) {
        self.gesture.touch_start(id, point);
    }

    /// Feeds a touch move to the gesture tracker and applies the resulting
    /// pinch zoom or two-finger pan.
    pub fn touch_move(&mut self, id: TouchId, point: Point) -> Option<GestureUpdate> {
        let update = self.gesture.touch_move(id, point)?;
        match update {
            GestureUpdate::Pinch { factor, center } => {
                self.zoom_relative_to_point_by(factor, center.x, center.y);
            }
            GestureUpdate::Pan { dx, dy } => {
                let (sx, sy) = (self.matrix.scale_x, self.matrix.scale_y);
                self.translate_by(dx / sx, dy / sy);
            }
        }
        Some(update)
    }

    pub fn touch_end(&mut self, id: TouchId) {
        self.gesture.touch_end(id);
    }

    /// Current matrix in persisted form.
    pub fn snapshot(&self) -> CameraSnapshot {
        self.matrix.into()
    }

    /// Attaches a snapshot store for `document_id` and restores the saved
    /// view if a usable one exists. Returns whether a view was restored.
    ///
    /// Later changes are written to the store.
    pub fn attach_store(
        &mut self,
        store: Box<dyn ViewStateStore>,
        document_id: impl Into<String>,
    ) -> bool {
        let document_id = document_id.into();
        let restored = load_snapshot(store.as_ref(), &document_id).map(Matrix::from);
        self.store = Some(AttachedStore {
            store,
            document_id: document_id.clone(),
        });

        let Some(mut matrix) = restored else {
            tracing::debug!("No saved camera for document {}", document_id);
            return false;
        };
        matrix.scale_x = self.settings.clamp_scale(matrix.scale_x);
        matrix.scale_y = self.settings.clamp_scale(matrix.scale_y);
        self.matrix = matrix;

        tracing::debug!("Restored camera {} for document {}", self.matrix, document_id);
        self.publish(CameraEvent::Restored { document_id });
        self.publish(self.changed_event());
        true
    }

    /// Stops persisting and hands the store back.
    pub fn detach_store(&mut self) -> Option<Box<dyn ViewStateStore>> {
        self.store.take().map(|s| s.store)
    }

    /// Id of the document whose view is being persisted.
    pub fn document_id(&self) -> Option<&str> {
        self.store.as_ref().map(|s| s.document_id.as_str())
    }

    fn changed_event(&self) -> CameraEvent {
        CameraEvent::Changed {
            scale: self.matrix.scale_x,
            translate_x: self.matrix.translate_x,
            translate_y: self.matrix.translate_y,
        }
    }

    fn publish(&self, event: CameraEvent) {
        if let Some(events) = &self.events {
            events.publish(BoardEvent::Camera(event));
        }
    }

    fn changed(&mut self) {
        self.publish(self.changed_event());

        let snapshot = self.snapshot();
        if let Some(attached) = self.store.as_mut() {
            if let Err(e) =
                save_snapshot(attached.store.as_mut(), &attached.document_id, &snapshot)
            {
                tracing::warn!(
                    "Failed to save camera for document {}: {}",
                    attached.document_id,
                    e
                );
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Camera")
            .field("matrix", &self.matrix)
            .field("settings", &self.settings)
            .field("pointer", &self.pointer)
            .field("gesture", &self.gesture)
            .field("document_id", &self.document_id())
            .finish()
    }
}
