pub mod bmi;
pub mod classification;
pub mod error;
pub mod measurement;

pub use bmi::{compute, compute_and_classify, BmiReport};
pub use classification::{classify, Classification};
pub use error::{Error, Field, Result};
pub use measurement::Measurement;
