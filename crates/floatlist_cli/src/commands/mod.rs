//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared helpers load
//! the sample sequence and format values for printing.

pub mod contains;
pub mod range;
pub mod read;
pub mod show;
pub mod write;

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::{CliError, Result};

/// Where the sample sequence comes from, in order of precedence.
#[derive(Debug, Default)]
pub struct SampleSource<'a> {
    /// Values given with `--samples`
    pub inline: Option<&'a [f64]>,
    /// Path given with `--file`
    pub file: Option<&'a Path>,
    /// `samples` from the configuration file
    pub configured: Option<&'a [f64]>,
}

impl SampleSource<'_> {
    /// Load the samples from the first source that is set.
    pub fn load(&self) -> Result<Vec<f64>> {
        if let Some(values) = self.inline {
            debug!("Using {} samples from --samples", values.len());
            return check_inline(values);
        }
        if let Some(path) = self.file {
            debug!("Reading samples from {}", path.display());
            return load_samples_file(path);
        }
        if let Some(values) = self.configured {
            debug!("Using {} samples from configuration", values.len());
            return Ok(values.to_vec());
        }
        Err(CliError::invalid_argument(
            "No samples given. Use --samples, --file or set `samples` in the config file",
        ))
    }
}

/// Reject an empty or non-finite `--samples` list.
fn check_inline(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(CliError::invalid_sample("--samples cannot be empty"));
    }
    if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
        return Err(CliError::invalid_sample(format!(
            "--samples[{}] = {} is not finite",
            pos, values[pos]
        )));
    }
    Ok(values.to_vec())
}

/// Read samples from a comma-separated file.
pub fn load_samples_file(path: &Path) -> Result<Vec<f64>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    parse_samples(std::fs::File::open(path)?)
}

/// Parse comma-separated samples, any number per line.
///
/// Blank fields are skipped and lines starting with `#` are comments.
pub fn parse_samples<R: Read>(reader: R) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        for field in record.iter().filter(|f| !f.is_empty()) {
            let value: f64 = field
                .parse()
                .map_err(|_| CliError::invalid_sample(format!("line {}: '{}'", line, field)))?;
            if !value.is_finite() {
                return Err(CliError::invalid_sample(format!(
                    "line {}: '{}' is not finite",
                    line, field
                )));
            }
            samples.push(value);
        }
    }
    Ok(samples)
}

/// Output formatting shared by all commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Fractional digits; shortest round-trip form if `None`
    pub precision: Option<usize>,
}

impl Output {
    /// Format a single value.
    pub fn value(&self, value: f64) -> String {
        match self.precision {
            Some(digits) => format!("{:.*}", digits, value),
            None => value.to_string(),
        }
    }

    /// Format a sequence of values as `[a, b, c]`.
    pub fn values(&self, values: &[f64]) -> String {
        let items: Vec<String> = values.iter().map(|&v| self.value(v)).collect();
        format!("[{}]", items.join(", "))
    }
}
