use nalgebra::{distance, Point2, Vector2};

use crate::series::SampleRecord;

/// Straight 2-D path between a start and a target point.
///
/// The truncated Euclidean distance between the points doubles as the
/// sample count of the motion profile; every sample advances the position
/// by one unit step along the path.
#[derive(Clone, Copy, Debug)]
pub struct GlidePath {
    start: Point2<f64>,
    step: Vector2<f64>,
    samples: u64,
}

impl GlidePath {
    pub fn new(start: Point2<f64>, target: Point2<f64>) -> Self {
        let samples = distance(&start, &target) as u64;

        let step = if samples > 0 {
            (target - start) / samples as f64
        } else {
            Vector2::zeros()
        };

        Self {
            start,
            step,
            samples,
        }
    }

    /// Path length in whole units, which is the profile sample count.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Position after the given number of unit steps.
    ///
    /// Steps beyond the path length saturate at the path end.
    pub fn position_at(&self, steps: u64) -> Point2<f64> {
        self.start + self.step * steps.min(self.samples) as f64
    }

    /// Map a resampled series onto per-tick path positions.
    pub fn waypoints(&self, resampled: &[SampleRecord]) -> Vec<Point2<f64>> {
        resampled
            .iter()
            .map(|record| self.position_at(record.distance))
            .collect()
    }
}
