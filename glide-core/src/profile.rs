use crate::Error;

/// Quadratic velocity profile over a discrete sample range.
///
/// The normalized speed rises quadratically from the minimum speed to full
/// speed at the lower threshold, holds full speed up to the upper threshold
/// and falls quadratically back to the minimum speed at the last sample.
/// Thresholds are percentages of the sample count.
///
/// The profile is value-continuous at both junctions but makes no claim
/// about derivative continuity.
#[derive(Clone, Copy, Debug)]
pub struct VelocityProfile {
    samples: u64,
    lower_threshold: u8,
    upper_threshold: u8,
    min_speed: u8,
}

impl VelocityProfile {
    /// Construct a new velocity profile without a minimum speed floor.
    pub fn new(samples: u64, lower_threshold: u8, upper_threshold: u8) -> crate::Result<Self> {
        Self::with_min_speed(samples, lower_threshold, upper_threshold, 0)
    }

    /// Construct a new velocity profile with a minimum speed floor.
    ///
    /// The minimum speed is a percentage of full speed and bounds the
    /// normalized speed from below over the entire sample range.
    pub fn with_min_speed(
        samples: u64,
        lower_threshold: u8,
        upper_threshold: u8,
        min_speed: u8,
    ) -> crate::Result<Self> {
        if lower_threshold > upper_threshold || upper_threshold > 100 {
            return Err(Error::InvalidThresholds {
                lower: lower_threshold,
                upper: upper_threshold,
            });
        }
        // Thresholds too close together counteract a smooth flow of movement.
        if upper_threshold - lower_threshold < 10 {
            return Err(Error::ThresholdsTooClose {
                lower: lower_threshold,
                upper: upper_threshold,
            });
        }
        if min_speed > 100 {
            return Err(Error::InvalidMinimumSpeed(min_speed));
        }

        Ok(Self {
            samples,
            lower_threshold,
            upper_threshold,
            min_speed,
        })
    }

    /// Number of samples the profile spans.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Minimum speed floor in percent.
    pub fn min_speed(&self) -> u8 {
        self.min_speed
    }

    /// Normalized speed for the given sample, in `[min_speed / 100, 1]`.
    pub fn normalized(&self, sample: u64) -> crate::Result<f64> {
        if sample > self.samples {
            return Err(Error::SampleOutOfRange {
                sample,
                samples: self.samples,
            });
        }

        let lower_idx = self.samples * self.lower_threshold as u64 / 100;
        let upper_idx = self.samples * self.upper_threshold as u64 / 100;

        let floor = self.min_speed as f64 / 100.0;

        // The rising branch is unreachable when the lower index is zero, so
        // its compression coefficient is only ever computed against a
        // non-zero index and never divides by zero.
        if sample < lower_idx {
            let compression = (1.0 - floor) / (lower_idx as f64).powi(2);

            Ok(compression * (sample as f64).powi(2) + floor)
        } else if sample >= upper_idx {
            let compression = if self.samples > upper_idx {
                (1.0 - floor) / ((self.samples - upper_idx) as f64).powi(2)
            } else {
                1.0
            };

            Ok(compression * ((self.samples - sample) as f64).powi(2) + floor)
        } else {
            Ok(1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-5;

    fn normalized(samples: u64, sample: u64, lower: u8, upper: u8) -> f64 {
        VelocityProfile::new(samples, lower, upper)
            .unwrap()
            .normalized(sample)
            .unwrap()
    }

    #[test]
    fn test_quadratic_velocity() {
        // Limit value for 100% speed
        assert!((normalized(200, 30, 15, 85) - 1.0).abs() < EPSILON);
        // First sample means speed 0
        assert!((normalized(200, 0, 15, 85) - 0.0).abs() < EPSILON);
        // 50% to limit means 25% speed
        assert!((normalized(200, 15, 15, 85) - 0.25).abs() < EPSILON);
        // Lower threshold 0 means speed 100% from the first sample
        assert!((normalized(100, 0, 0, 100) - 1.0).abs() < EPSILON);
        assert!((normalized(100, 1, 0, 100) - 1.0).abs() < EPSILON);
        // Lower threshold 1 means speed 0 at the first sample
        assert!((normalized(100, 0, 1, 100) - 0.0).abs() < EPSILON);
        assert!((normalized(100, 1, 1, 100) - 1.0).abs() < EPSILON);
        // Upper threshold 100, speed still 100% at sample 99
        assert!((normalized(100, 99, 15, 100) - 1.0).abs() < EPSILON);
        assert!((normalized(100, 100, 15, 100) - 0.0).abs() < EPSILON);
        // Upper threshold 99, speed 100% at sample 99
        assert!((normalized(100, 99, 15, 99) - 1.0).abs() < EPSILON);
        assert!((normalized(100, 100, 15, 99) - 0.0).abs() < EPSILON);
        // Around the upper threshold
        assert!((normalized(100, 49, 10, 50) - 1.0).abs() < EPSILON);
        assert!((normalized(100, 50, 10, 50) - 1.0).abs() < EPSILON);
        assert!((normalized(100, 51, 10, 50) - 0.9604).abs() < EPSILON);
    }

    #[test]
    fn test_quadratic_velocity_with_min_speed() {
        let profile = VelocityProfile::with_min_speed(100, 15, 85, 15).unwrap();

        assert!((profile.normalized(0).unwrap() - 0.15).abs() < EPSILON);
        assert!((profile.normalized(15).unwrap() - 1.0).abs() < EPSILON);
        assert!((profile.normalized(85).unwrap() - 1.0).abs() < EPSILON);
        assert!((profile.normalized(99).unwrap() - 0.1537776).abs() < EPSILON);
        assert!((profile.normalized(100).unwrap() - 0.15).abs() < EPSILON);
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            VelocityProfile::new(100, 50, 50).unwrap_err(),
            Error::ThresholdsTooClose {
                lower: 50,
                upper: 50
            }
        );
        assert_eq!(
            VelocityProfile::new(200, 17, 15).unwrap_err(),
            Error::InvalidThresholds {
                lower: 17,
                upper: 15
            }
        );
        assert_eq!(
            VelocityProfile::new(200, 15, 120).unwrap_err(),
            Error::InvalidThresholds {
                lower: 15,
                upper: 120
            }
        );
        assert_eq!(
            VelocityProfile::with_min_speed(100, 15, 85, 101).unwrap_err(),
            Error::InvalidMinimumSpeed(101)
        );

        let profile = VelocityProfile::new(200, 15, 85).unwrap();
        assert_eq!(
            profile.normalized(201).unwrap_err(),
            Error::SampleOutOfRange {
                sample: 201,
                samples: 200
            }
        );
    }
}
