use std::io::Read;

use bmi_model::{BmiReport, Measurement};
use log::{debug, warn};
use serde::Serialize;

pub const DEFAULT_INPUT: &str = "measurements.json";

/// Outcome for one measurement of a batch.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchEntry {
    Report(BmiReport),
    Failure { error: String },
}

pub fn classify_all(measurements: &[Measurement]) -> Vec<BatchEntry> {
    measurements
        .iter()
        .enumerate()
        .map(|(i, measurement)| match measurement.report() {
            Ok(report) => {
                debug!("Measurement #{}: {:?}", i, report);
                BatchEntry::Report(report)
            }
            Err(e) => {
                warn!("Measurement #{} rejected: {}", i, e);
                BatchEntry::Failure {
                    error: e.to_string(),
                }
            }
        })
        .collect()
}

pub fn classify_reader<R: Read>(reader: R) -> serde_json::Result<Vec<BatchEntry>> {
    let measurements: Vec<Measurement> = serde_json::from_reader(reader)?;
    debug!("Loaded {} measurements", measurements.len());
    Ok(classify_all(&measurements))
}
