//! The fixed traversal route. Read-only once a session starts.

use rampart_core::constants::MAX_SEGMENT_LENGTH;
use rampart_core::error::ConfigError;
use rampart_core::types::Position;

/// Ordered waypoints with cached segment lengths.
#[derive(Debug, Clone)]
pub struct Path {
    waypoints: Vec<Position>,
    segment_lengths: Vec<f64>,
}

impl Path {
    /// Build a path, rejecting fewer than two waypoints and segments that are
    /// zero-length, non-finite or longer than `MAX_SEGMENT_LENGTH`.
    pub fn new(waypoints: Vec<Position>) -> Result<Self, ConfigError> {
        if waypoints.len() < 2 {
            return Err(ConfigError::PathTooShort(waypoints.len()));
        }
        let segment_lengths: Vec<f64> = waypoints
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .collect();
        if let Some(index) = segment_lengths.iter().position(|len| *len <= f64::EPSILON) {
            return Err(ConfigError::DegenerateSegment(index));
        }
        if let Some(index) = segment_lengths
            .iter()
            .position(|len| !len.is_finite() || *len > MAX_SEGMENT_LENGTH)
        {
            return Err(ConfigError::SegmentTooLong(index));
        }
        Ok(Self {
            waypoints,
            segment_lengths,
        })
    }

    /// The built-in route across an 800x600 field, entering left and exiting right.
    pub fn default_waypoints() -> Vec<Position> {
        vec![
            Position::new(0.0, 100.0),
            Position::new(200.0, 100.0),
            Position::new(200.0, 300.0),
            Position::new(500.0, 300.0),
            Position::new(500.0, 100.0),
            Position::new(700.0, 100.0),
            Position::new(700.0, 500.0),
            Position::new(800.0, 500.0),
        ]
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn start(&self) -> Position {
        self.waypoints[0]
    }

    /// Number of segments (`waypoints - 1`).
    pub fn segment_count(&self) -> usize {
        self.segment_lengths.len()
    }

    pub fn segment_length(&self, index: usize) -> f64 {
        self.segment_lengths[index]
    }

    /// Point `progress` units into segment `index`.
    pub fn point_at(&self, index: usize, progress: f64) -> Position {
        let from = self.waypoints[index];
        let to = self.waypoints[index + 1];
        from.lerp(&to, progress / self.segment_lengths[index])
    }

    /// Smallest distance from `point` to centerline samples taken every `step` units
    /// along each segment (segment endpoints always included).
    pub fn sampled_distance(&self, point: &Position, step: f64) -> f64 {
        let mut nearest = f64::INFINITY;
        for (index, length) in self.segment_lengths.iter().enumerate() {
            let samples = (length / step).ceil() as usize;
            for i in 0..samples {
                let traveled = i as f64 * step;
                nearest = nearest.min(point.distance_to(&self.point_at(index, traveled)));
            }
            nearest = nearest.min(point.distance_to(&self.waypoints[index + 1]));
        }
        nearest
    }
}
