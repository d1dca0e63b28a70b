#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_with::DisplayFromStr;

use crate::classification::{classify, Classification};
use crate::error::{Error, Field, Result};

/// BMI paired with its category.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiReport {
    pub bmi: f64,
    #[cfg_attr(feature = "serde", serde(with = "serde_with::As::<DisplayFromStr>"))]
    pub classification: Classification,
}

/// Computes the body mass index for a weight in kilograms and a height in
/// meters, rounded to 2 decimal places (half away from zero).
///
/// Weight is validated before height. NaN is rejected like any other value
/// that is not greater than zero.
pub fn compute(weight: f64, height: f64) -> Result<f64> {
    if !(weight > 0.0) {
        return Err(Error::InvalidMeasurement(Field::Weight));
    }
    if !(height > 0.0) {
        return Err(Error::InvalidMeasurement(Field::Height));
    }

    Ok(round_to_hundredths(weight / (height * height)))
}

/// Computes the BMI and pairs it with its category.
pub fn compute_and_classify(weight: f64, height: f64) -> Result<BmiReport> {
    let bmi = compute(weight, height)?;
    Ok(BmiReport {
        bmi,
        classification: classify(bmi),
    })
}

/// Magnitude from which every `f64` is a whole number.
const NO_FRACTION: f64 = 4_503_599_627_370_496.0;

fn round_to_hundredths(x: f64) -> f64 {
    if !x.is_finite() || x.abs() >= NO_FRACTION {
        return x;
    }
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_reference_values() {
        let test_data = [
            (70.0, 1.75, 22.86),
            (80.0, 1.80, 24.69),
            (50.0, 1.70, 17.3),
            (85.0, 1.75, 27.76),
            (95.0, 1.75, 31.02),
            (110.0, 1.75, 35.92),
            (130.0, 1.75, 42.45),
        ];

        for (i, (weight, height, expected_bmi)) in test_data.into_iter().enumerate() {
            assert_eq!(compute(weight, height), Ok(expected_bmi), "Test case #{}", i);
        }
    }

    #[test]
    fn compute_rejects_invalid_weight() {
        for (i, weight) in [0.0, -10.0, -0.0, f64::NAN].into_iter().enumerate() {
            assert_eq!(
                compute(weight, 1.75),
                Err(Error::InvalidMeasurement(Field::Weight)),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn compute_rejects_invalid_height() {
        for (i, height) in [0.0, -1.70, -1.75, f64::NAN].into_iter().enumerate() {
            assert_eq!(
                compute(70.0, height),
                Err(Error::InvalidMeasurement(Field::Height)),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn weight_is_checked_before_height() {
        let err = compute(0.0, -1.70).unwrap_err();
        assert_eq!(err.field(), Field::Weight);
        assert_eq!(err.to_string(), "weight must be greater than zero");
    }

    #[test]
    fn compute_is_idempotent() {
        assert_eq!(compute(70.0, 1.75), compute(70.0, 1.75));
        assert_eq!(classify(22.86), classify(22.86));
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        let test_data = [(1.0, 1.0), (1.234, 1.23), (0.125, 0.13), (2.0 / 3.0, 0.67)];

        for (i, (input, expected_output)) in test_data.into_iter().enumerate() {
            assert_eq!(round_to_hundredths(input), expected_output, "Test case #{}", i);
        }
    }

    #[test]
    fn huge_values_are_not_rounded_to_infinity() {
        let test_data = [1e307, f64::MAX, NO_FRACTION, 1e16];

        for (i, value) in test_data.into_iter().enumerate() {
            assert_eq!(round_to_hundredths(value), value, "Test case #{}", i);
        }
        assert_eq!(compute(1e307, 1.0), Ok(1e307));
        assert_eq!(round_to_hundredths(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn compute_and_classify_pairs_bmi_with_label() {
        let test_data = [
            (50.0, 1.70, "Abaixo do peso"),
            (70.0, 1.75, "Peso normal"),
            (85.0, 1.75, "Sobrepeso"),
            (95.0, 1.75, "Obesidade Grau I"),
            (110.0, 1.75, "Obesidade Grau II"),
            (130.0, 1.75, "Obesidade Grau III"),
        ];

        for (i, (weight, height, expected_label)) in test_data.into_iter().enumerate() {
            let report = compute_and_classify(weight, height).unwrap();
            assert_eq!(report.bmi, compute(weight, height).unwrap(), "Test case #{}", i);
            assert_eq!(report.classification.label(), expected_label, "Test case #{}", i);
        }
    }

    #[test]
    fn compute_and_classify_propagates_errors() {
        assert_eq!(
            compute_and_classify(0.0, 1.70),
            Err(Error::InvalidMeasurement(Field::Weight))
        );
        assert_eq!(
            compute_and_classify(70.0, -1.70),
            Err(Error::InvalidMeasurement(Field::Height))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn report_serializes_label() {
        let report = compute_and_classify(70.0, 1.75).unwrap();
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"bmi":22.86,"classification":"Peso normal"}"#
        );

        let parsed: BmiReport =
            serde_json::from_str(r#"{"bmi":42.45,"classification":"Obesidade Grau III"}"#)
                .unwrap();
        assert_eq!(parsed.classification, Classification::ObesityClassIII);
    }
}
