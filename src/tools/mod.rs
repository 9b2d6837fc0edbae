use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::codec::validate::check;
use crate::error::ValidationError;
use crate::models::Encoding;

/// Read barcode values from a text file, one per line.
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
pub fn read_values<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    let mut values = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        values.push(line.to_string());
    }
    Ok(values)
}

/// Outcome of validating a batch of scanned values.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Count of values that passed validation.
    pub valid: usize,
    /// Each rejected value paired with the reason it failed.
    pub failures: Vec<(String, ValidationError)>,
}

impl BatchReport {
    /// Total number of values inspected.
    pub fn total(&self) -> usize {
        self.valid + self.failures.len()
    }

    /// True when every value passed.
    pub fn all_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validate every value against `encoding` and collect the outcome.
pub fn validate_batch(values: &[String], encoding: Encoding) -> BatchReport {
    let mut report = BatchReport::default();
    for value in values {
        match check(value, encoding) {
            Ok(()) => report.valid += 1,
            Err(err) => report.failures.push((value.clone(), err)),
        }
    }
    debug!(
        total = report.total(),
        valid = report.valid,
        failed = report.failures.len(),
        "batch validation finished"
    );
    report
}
