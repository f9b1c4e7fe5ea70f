//! Two-finger gesture recognition.
//!
//! Touches are tracked in a two-slot table keyed by touch id. A pinch
//! baseline (finger distance and positions) exists only while exactly two
//! touches are down; any other count discards it, so a restarted gesture
//! never measures against stale positions.

use boardkit_core::TouchId;
use smallvec::SmallVec;

use crate::geometry::Point;

/// Outcome of a two-finger move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    /// Fingers moved apart or together: multiply the zoom by `factor`
    /// around `center` (screen pixels).
    Pinch { factor: f64, center: Point },
    /// Fingers moved together: pan by the first finger's displacement, in
    /// screen pixels.
    Pan { dx: f64, dy: f64 },
}

/// Dominant direction of a finger's movement between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    Still,
}

impl Direction {
    /// The larger of |dx| and |dy| picks the axis, its sign the direction.
    pub fn of(from: Point, to: Point) -> Direction {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        if dx == 0.0 && dy == 0.0 {
            Direction::Still
        } else if dx.abs() >= dy.abs() {
            if dx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// Fixed-capacity table of active touches, in the order they went down.
#[derive(Debug, Clone, Default)]
struct TouchTable {
    touches: SmallVec<[(TouchId, Point); 2]>,
}

impl TouchTable {
    const CAPACITY: usize = 2;

    fn position(&self, id: TouchId) -> Option<usize> {
        self.touches.iter().position(|(tid, _)| *tid == id)
    }

    /// Records a touch. Returns false when the table is already full.
    fn insert(&mut self, id: TouchId, point: Point) -> bool {
        if let Some(index) = self.position(id) {
            self.touches[index].1 = point;
            return true;
        }
        if self.touches.len() >= Self::CAPACITY {
            return false;
        }
        self.touches.push((id, point));
        true
    }

    fn update(&mut self, id: TouchId, point: Point) -> bool {
        match self.position(id) {
            Some(index) => {
                self.touches[index].1 = point;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: TouchId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.touches.remove(index);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        self.touches.len()
    }

    /// Both positions, only when exactly two touches are tracked.
    fn pair(&self) -> Option<[Point; 2]> {
        match self.touches.as_slice() {
            [(_, a), (_, b)] => Some([*a, *b]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PinchBaseline {
    distance: f64,
    positions: [Point; 2],
}

impl PinchBaseline {
    fn from_positions(positions: [Point; 2]) -> Self {
        Self {
            distance: positions[0].distance_to(&positions[1]),
            positions,
        }
    }
}

/// Tracks up to two touches and classifies their movement.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    touches: TouchTable,
    baseline: Option<PinchBaseline>,
    distance_threshold: f64,
}

impl GestureTracker {
    /// Creates a tracker that needs the finger distance to change by more
    /// than `distance_threshold` pixels before a move counts as a pinch.
    pub fn new(distance_threshold: f64) -> Self {
        Self {
            touches: TouchTable::default(),
            baseline: None,
            distance_threshold,
        }
    }

    /// Number of tracked touches (0, 1, or 2).
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }

    /// Finger distance recorded at the last sample, while two touches are down.
    pub fn previous_distance(&self) -> Option<f64> {
        self.baseline.map(|b| b.distance)
    }

    /// Finger positions recorded at the last sample, while two touches are down.
    pub fn previous_positions(&self) -> Option<[Point; 2]> {
        self.baseline.map(|b| b.positions)
    }

    /// Registers a new touch. A third simultaneous touch is ignored.
    pub fn touch_start(&mut self, id: TouchId, point: Point) {
        if !self.touches.insert(id, point.finite_or_zero()) {
            tracing::debug!("Ignoring touch {}: two touches already tracked", id);
        }
        self.sync_baseline();
    }

    /// Updates a touch position and classifies the two-finger movement.
    ///
    /// Returns `None` unless exactly two touches are down and `id` is one of
    /// them. The baseline advances to the current sample either way, so the
    /// returned pinch factor is incremental.
    pub fn touch_move(&mut self, id: TouchId, point: Point) -> Option<GestureUpdate> {
        if !self.touches.update(id, point.finite_or_zero()) {
            return None;
        }
        let previous = self.baseline?;
        let current = PinchBaseline::from_positions(self.touches.pair()?);

        let first = Direction::of(previous.positions[0], current.positions[0]);
        let second = Direction::of(previous.positions[1], current.positions[1]);
        let distance_change = (current.distance - previous.distance).abs();

        let update = if first != second
            && distance_change > self.distance_threshold
            && previous.distance > 0.0
        {
            GestureUpdate::Pinch {
                factor: current.distance / previous.distance,
                center: current.positions[0].midpoint(&current.positions[1]),
            }
        } else {
            GestureUpdate::Pan {
                dx: current.positions[0].x - previous.positions[0].x,
                dy: current.positions[0].y - previous.positions[0].y,
            }
        };

        self.baseline = Some(current);
        tracing::trace!("Two-finger move: {:?}", update);
        Some(update)
    }

    /// Removes a touch. Ending either finger of a pinch clears the baseline.
    pub fn touch_end(&mut self, id: TouchId) {
        self.touches.remove(id);
        self.sync_baseline();
    }

    /// Incremental pinch scale: current finger distance over the recorded
    /// one. The baseline is advanced to the current positions.
    pub fn pinch_scale(&mut self) -> Option<f64> {
        let previous = self.baseline?;
        let current = PinchBaseline::from_positions(self.touches.pair()?);
        self.baseline = Some(current);
        if previous.distance > 0.0 {
            Some(current.distance / previous.distance)
        } else {
            None
        }
    }

    /// Drops every touch and the baseline.
    pub fn reset(&mut self) {
        self.touches = TouchTable::default();
        self.baseline = None;
    }

    fn sync_baseline(&mut self) {
        self.baseline = match (self.touches.pair(), self.baseline) {
            (Some(_), Some(existing)) => Some(existing),
            (Some(pair), None) => Some(PinchBaseline::from_positions(pair)),
            (None, _) => None,
        };
    }
}
