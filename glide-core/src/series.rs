use crate::profile::VelocityProfile;

/// One step of a discrete speed function.
///
/// Units are: distance in samples, speed in units per second, step time and
/// cumulative time in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SampleRecord {
    /// Cumulative steps taken, 1-based.
    pub distance: u64,
    /// Instantaneous speed.
    pub speed: f64,
    /// Time to traverse this single step.
    pub step_time: f64,
    /// Elapsed time up to and including this step.
    pub cumulative_time: f64,
}

/// Build the discrete speed function for the given profile.
///
/// Every sample is assigned the instantaneous speed `normalized × target
/// speed`, the time a single unit step takes at that speed and the elapsed
/// time over all steps so far. The result spans the profile's full sample
/// range in index order.
///
/// A zero instantaneous speed yields an infinite step time. This is left to
/// the caller; set a minimum speed on the profile to rule it out.
pub fn sample_series(
    profile: &VelocityProfile,
    target_speed: f64,
) -> crate::Result<Vec<SampleRecord>> {
    let mut series = Vec::with_capacity(profile.samples() as usize);

    let mut cumulative_time = 0.0;
    for sample in 1..=profile.samples() {
        let speed = profile.normalized(sample)? * target_speed;
        // Smallest step is 1, so a step takes 1/v seconds.
        let step_time = speed.recip();
        cumulative_time += step_time;

        series.push(SampleRecord {
            distance: sample,
            speed,
            step_time,
            cumulative_time,
        });
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-5;

    #[test]
    fn test_sample_series() {
        let profile = VelocityProfile::with_min_speed(100, 10, 90, 50).unwrap();
        let series = sample_series(&profile, 200.0).unwrap();

        assert_eq!(series.len(), 100);
        assert!((series[9].speed - 200.0).abs() < EPSILON);
        assert!((series[89].speed - 200.0).abs() < EPSILON);
        assert!((series[90].speed - 181.0).abs() < EPSILON);
    }

    #[test]
    fn test_sample_series_short() {
        let profile = VelocityProfile::with_min_speed(10, 30, 70, 40).unwrap();
        let series = sample_series(&profile, 200.0).unwrap();

        assert_eq!(series.len(), 10);
        assert!((series[0].speed - 93.33333).abs() < EPSILON);
        assert!((series[1].speed - 133.33333).abs() < EPSILON);
        assert!((series[2].speed - 200.0).abs() < EPSILON);
        assert!((series[6].speed - 200.0).abs() < EPSILON);
        assert!((series[7].speed - 133.33333).abs() < EPSILON);
        assert!((series[8].speed - 93.33333).abs() < EPSILON);
        assert!((series[9].speed - 80.0).abs() < EPSILON);
    }

    #[test]
    fn test_cumulative_time_monotonic() {
        let profile = VelocityProfile::with_min_speed(100, 25, 75, 40).unwrap();
        let series = sample_series(&profile, 1_000.0).unwrap();

        for window in series.windows(2) {
            assert!(window[1].cumulative_time > window[0].cumulative_time);
        }
    }

    #[test]
    fn test_zero_speed_propagates_infinity() {
        // Upper threshold 100 puts the last sample at exactly zero speed.
        let profile = VelocityProfile::new(100, 15, 100).unwrap();
        let series = sample_series(&profile, 200.0).unwrap();

        let last = series.last().unwrap();
        assert_eq!(last.speed, 0.0);
        assert!(last.step_time.is_infinite());
        assert!(last.cumulative_time.is_infinite());
    }
}
