// src/trace/extract.rs

use std::path::PathBuf;

use anyhow::Context;
use regex::Regex;

use crate::errors::{Result, ToolsError};

/// Compile the `<label> = (.*)` pattern for a label.
fn label_regex(label: &str) -> Result<Regex> {
    let pattern = format!("{} = (.*)", regex::escape(label));
    let re = Regex::new(&pattern).with_context(|| format!("compiling pattern for {label:?}"))?;
    Ok(re)
}

fn parse_value(label: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ToolsError::MalformedValue {
            path: PathBuf::new(),
            label: label.to_string(),
            value: raw.to_string(),
        })
}

/// Every value logged as `<label> = <number>`, in order of appearance.
///
/// Matching is case-sensitive, so `Quality` does not pick up
/// `Average quality` lines.
pub fn extract_series(trace: &str, label: &str) -> Result<Vec<f64>> {
    let re = label_regex(label)?;
    re.captures_iter(trace)
        .map(|caps| parse_value(label, &caps[1]))
        .collect()
}

/// First value logged as `<label> = <number>`, if any.
pub fn extract_first(trace: &str, label: &str) -> Result<Option<f64>> {
    let re = label_regex(label)?;
    re.captures(trace)
        .map(|caps| parse_value(label, &caps[1]))
        .transpose()
}
