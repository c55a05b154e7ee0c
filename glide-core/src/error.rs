use std::{error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Threshold ordering or range violation.
    InvalidThresholds { lower: u8, upper: u8 },
    /// Thresholds closer together than 10 percentage points.
    ThresholdsTooClose { lower: u8, upper: u8 },
    /// Minimum speed outside the 0..=100 percent range.
    InvalidMinimumSpeed(u8),
    /// Sample index beyond the profile's sample count.
    SampleOutOfRange { sample: u64, samples: u64 },
    /// Resampling requested at a rate of zero ticks per second.
    InvalidRate,
    /// Resampling requested over an empty series.
    EmptySeries,
    /// The series ends with a non-finite cumulative time.
    NonFiniteDuration(f64),
    /// No source record lies beyond the given output tick.
    ResampleExhausted { tick: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidThresholds { lower, upper } => {
                write!(f, "invalid thresholds: {}% .. {}%", lower, upper)
            }
            Error::ThresholdsTooClose { lower, upper } => {
                write!(
                    f,
                    "thresholds {}% and {}% are less than 10 percentage points apart",
                    lower, upper
                )
            }
            Error::InvalidMinimumSpeed(min_speed) => {
                write!(f, "minimum speed {}% exceeds 100%", min_speed)
            }
            Error::SampleOutOfRange { sample, samples } => {
                write!(f, "sample {} beyond sample count {}", sample, samples)
            }
            Error::InvalidRate => write!(f, "output rate must be positive"),
            Error::EmptySeries => write!(f, "series is empty"),
            Error::NonFiniteDuration(duration) => {
                write!(f, "series duration {} is not finite", duration)
            }
            Error::ResampleExhausted { tick } => {
                write!(f, "no sample beyond output tick {}", tick)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
