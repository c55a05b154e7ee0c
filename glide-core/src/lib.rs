pub mod path;
pub mod profile;
pub mod resample;
pub mod series;

mod error;

pub use self::error::Error;

pub type Result<T = ()> = std::result::Result<T, Error>;

pub use nalgebra;
