//! Batch runner: dispatch every package and collect its report.
//!
//! Records are independent; the only thing carried between iterations
//! is the collected output.

use crate::report::InfoMessage;
use crate::workout::Trainable;
use crate::{Error, Result, SensorPackage};
use serde::{Deserialize, Serialize};

/// What to do when a single package fails to dispatch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Abort the whole batch on the first error
    #[default]
    Halt,
    /// Log the failure and carry on with the next package
    Skip,
}

/// Result of running a batch
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<InfoMessage>,
    /// Index of the failed package and its error (only under `Skip`)
    pub failures: Vec<(usize, Error)>,
}

/// Dispatch and report each package in order
pub fn run_batch(packages: &[SensorPackage], policy: ErrorPolicy) -> Result<BatchOutcome> {
    let mut outcome = BatchOutcome::default();

    for (index, package) in packages.iter().enumerate() {
        match package.read() {
            Ok(workout) => outcome.reports.push(workout.show_training_info()),
            Err(e) if policy == ErrorPolicy::Skip => {
                tracing::warn!("Skipping package #{} ({}): {}", index, package, e);
                outcome.failures.push((index, e));
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Processed {} packages ({} failed)",
        packages.len(),
        outcome.failures.len()
    );
    Ok(outcome)
}
