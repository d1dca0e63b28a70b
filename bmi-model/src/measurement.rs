#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bmi::{compute, compute_and_classify, BmiReport};
use crate::error::Result;

/// Weight in kilograms and height in meters. Not validated until a BMI is
/// computed from it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub weight: f64,
    pub height: f64,
}

impl Measurement {
    pub fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }

    pub fn bmi(&self) -> Result<f64> {
        compute(self.weight, self.height)
    }

    pub fn report(&self) -> Result<BmiReport> {
        compute_and_classify(self.weight, self.height)
    }
}
