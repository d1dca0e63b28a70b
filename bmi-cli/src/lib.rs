pub mod batch;
pub mod config;
pub mod prompt;

use std::io::{self, Write};

use bmi_model::{compute, Classification, Measurement};
use itertools::Itertools;
use log::{debug, info, warn};

use crate::prompt::{Prompt, PromptError};

/// Weight, height and the category each pair is expected to land in.
pub const SAMPLES: [(f64, f64, Classification); 6] = [
    (50.0, 1.70, Classification::Underweight),
    (70.0, 1.75, Classification::NormalWeight),
    (85.0, 1.75, Classification::Overweight),
    (95.0, 1.75, Classification::ObesityClassI),
    (110.0, 1.75, Classification::ObesityClassII),
    (130.0, 1.75, Classification::ObesityClassIII),
];

/// Inputs that must be rejected by the calculator.
pub const VALIDATION_CASES: [(f64, f64, &str); 4] = [
    (0.0, 1.70, "Zero weight"),
    (-10.0, 1.70, "Negative weight"),
    (70.0, 0.0, "Zero height"),
    (70.0, -1.70, "Negative height"),
];

pub struct Harness {
    prompt: Box<dyn Prompt>,
}

impl Harness {
    pub fn new(prompt: Box<dyn Prompt>) -> Self {
        Self { prompt }
    }

    pub fn run(&mut self, out: &mut dyn Write) -> io::Result<()> {
        info!("Reading measurement from user");
        section(out, "1: Computing BMI")?;
        self.measure(out)?;

        info!("Running sample classifications");
        section(out, "2: Sample classifications")?;
        samples(out)?;

        info!("Running validation checks");
        section(out, "3: Validation checks")?;
        validations(out)?;

        Ok(())
    }

    fn read_measurement(&mut self) -> Result<Measurement, PromptError> {
        let weight = self.prompt.read_number("Enter your weight (kg): ")?;
        let height = self.prompt.read_number("Enter your height (m): ")?;
        Ok(Measurement::new(weight, height))
    }

    fn measure(&mut self, out: &mut dyn Write) -> io::Result<()> {
        let measurement = match self.read_measurement() {
            Ok(measurement) => measurement,
            Err(e) => {
                warn!("Could not read measurement: {}", e);
                return writeln!(out, "\n❌ Error: {}", e);
            }
        };
        debug!("Read {:?}", measurement);

        match measurement.report() {
            Ok(report) => {
                writeln!(out, "\n✅ Result:")?;
                writeln!(out, "   BMI: {}", report.bmi)?;
                writeln!(out, "   Classification: {}", report.classification)
            }
            Err(e) => {
                warn!("Rejected {:?}: {}", measurement, e);
                writeln!(out, "\n❌ Error: {}", e)
            }
        }
    }
}

fn section(out: &mut dyn Write, title: &str) -> io::Result<()> {
    let rule = "=".repeat(50);
    writeln!(out, "\n{}\nTEST {}\n{}", rule, title, rule)
}

fn samples(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Categories: {}", Classification::iter().join(", "))?;
    for (weight, height, expected) in SAMPLES {
        writeln!(out, "{}", sample_line(weight, height, expected))?;
    }
    Ok(())
}

fn sample_line(weight: f64, height: f64, expected: Classification) -> String {
    match Measurement::new(weight, height).report() {
        Ok(report) => {
            let status = if report.classification == expected {
                "✅"
            } else {
                "❌"
            };
            format!(
                "{} Weight: {}kg, Height: {}m → BMI: {} ({})",
                status, weight, height, report.bmi, report.classification
            )
        }
        Err(e) => format!("❌ Weight: {}kg, Height: {}m → {}", weight, height, e),
    }
}

fn validations(out: &mut dyn Write) -> io::Result<()> {
    for (weight, height, description) in VALIDATION_CASES {
        match compute(weight, height) {
            Ok(bmi) => {
                warn!("{} was accepted with BMI {}", description, bmi);
                writeln!(out, "❌ {}: should have been rejected!", description)?;
            }
            Err(e) => writeln!(out, "✅ {}: error caught correctly - '{}'", description, e)?,
        }
    }
    Ok(())
}
