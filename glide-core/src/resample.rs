use crate::series::SampleRecord;
use crate::Error;

/// Resample a discrete speed function onto a fixed output rate.
///
/// The source series carries a non-uniform time grid, so for every output
/// tick the first source record whose cumulative time lies beyond the tick
/// is selected. A record repeats across consecutive ticks when the source
/// grid is coarser than the output grid; repeats mean no further step has
/// been reached at the finer rate. No smoothing or windowing takes place.
///
/// The series must be ordered by ascending cumulative time. Cumulative time
/// never decreases in a well-formed series, which lets the source cursor
/// advance monotonically in a single pass.
pub fn resample(series: &[SampleRecord], rate: u32) -> crate::Result<Vec<SampleRecord>> {
    if rate == 0 {
        return Err(Error::InvalidRate);
    }

    let last = series.last().ok_or(Error::EmptySeries)?;

    let total_time = last.cumulative_time;
    if !total_time.is_finite() {
        return Err(Error::NonFiniteDuration(total_time));
    }

    let count = (total_time * rate as f64) as usize;
    // Every tick_width seconds a sample should be taken.
    let tick_width = (rate as f64).recip();

    let mut resampled = Vec::with_capacity(count);

    let mut cursor = 0;
    for tick in 0..count {
        let deadline = tick_width * (tick + 1) as f64;

        while cursor < series.len() && series[cursor].cumulative_time <= deadline {
            cursor += 1;
        }

        let record = series
            .get(cursor)
            .copied()
            .ok_or(Error::ResampleExhausted { tick })?;

        resampled.push(record);
    }

    Ok(resampled)
}
