// src/stats/mod.rs

//! Summary statistics over solver result files.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::StatsSection;
use crate::errors::{Result, ToolsError};
use crate::fs::FileSystem;
use crate::trace::extract_first;

pub const EXECUTION_TIME_LABEL: &str = "Execution Time";
pub const MAKESPAN_LABEL: &str = "Expected Makespan";

/// Sample standard deviation needs two values.
pub const MIN_SAMPLES: usize = 2;

/// Values taken from one result file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    pub execution_time: f64,
    pub makespan: f64,
}

impl RunResult {
    /// Read the first `Execution Time` and `Expected Makespan` in a result.
    pub fn parse(text: &str) -> Result<Self> {
        let field = |label: &str| -> Result<f64> {
            extract_first(text, label)?.ok_or_else(|| ToolsError::MissingField {
                path: PathBuf::new(),
                label: label.to_string(),
            })
        };
        Ok(Self {
            execution_time: field(EXECUTION_TIME_LABEL)?,
            makespan: field(MAKESPAN_LABEL)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub best: f64,
    pub average: f64,
    pub std_dev: f64,
    /// Mean execution time after dividing by the configured divisor.
    pub average_execution_time: f64,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n - 1) standard deviation.
fn sample_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

impl Summary {
    pub fn compute(results: &[RunResult], time_divisor: f64) -> Result<Self> {
        if results.len() < MIN_SAMPLES {
            return Err(ToolsError::NotEnoughSamples {
                needed: MIN_SAMPLES,
                got: results.len(),
            });
        }

        let makespans: Vec<f64> = results.iter().map(|r| r.makespan).collect();
        let times: Vec<f64> = results.iter().map(|r| r.execution_time).collect();

        Ok(Self {
            best: makespans.iter().copied().fold(f64::INFINITY, f64::min),
            average: mean(&makespans),
            std_dev: sample_std_dev(&makespans),
            average_execution_time: mean(&times) / time_divisor,
        })
    }

    /// Four `Name = value` lines, values rendered by [`format_float`].
    pub fn render(&self) -> String {
        format!(
            "Best = {}\nAverage = {}\nStandard deviation = {}\nAverage execution time = {}\n",
            format_float(self.best),
            format_float(self.average),
            format_float(self.std_dev),
            format_float(self.average_execution_time)
        )
    }
}

/// Shortest round-trip rendering in the layout summary files have always
/// used: fixed notation with a trailing `.0` for integral values when the
/// decimal exponent is within `-4..16`, otherwise `d.ddde±XX` with at least
/// two exponent digits (`5e-06`, `1.5e+16`).
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` gives the shortest round-trip digits, e.g. "-1.25e-5".
    let sci = format!("{:e}", v.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let sign = if v.is_sign_negative() { "-" } else { "" };

    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{mantissa}e{exp_sign}{:02}", exp.abs());
    }

    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{sign}0.{zeros}{digits}");
    }

    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let pad = "0".repeat(int_len - digits.len());
        format!("{sign}{digits}{pad}.0")
    } else {
        let (int_part, frac) = digits.split_at(int_len);
        format!("{sign}{int_part}.{frac}")
    }
}

/// Read every result file, summarise and write the report to `output`.
pub fn summarize_files(
    fs: &dyn FileSystem,
    output: &Path,
    inputs: &[PathBuf],
    settings: &StatsSection,
) -> Result<Summary> {
    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        let text = fs.read_to_string(input)?;
        let result = RunResult::parse(&text).map_err(|e| e.with_path(input))?;
        debug!(?input, ?result, "result parsed");
        results.push(result);
    }

    let summary = Summary::compute(&results, settings.time_divisor)?;
    fs.write(output, summary.render().as_bytes())?;
    info!(?output, files = results.len(), best = summary.best, "summary written");
    Ok(summary)
}
