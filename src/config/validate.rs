// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, ToolsError};

/// Allowed slack when checking that class shares sum to at most one.
const SHARE_EPSILON: f64 = 1e-9;

const MIN_PLOT_SIZE: u32 = 100;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = ToolsError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_extension(cfg)?;
    validate_factors(cfg)?;
    validate_weight_classes(cfg)?;
    validate_plot(cfg)?;
    validate_stats(cfg)?;
    Ok(())
}

fn config_error(msg: impl Into<String>) -> ToolsError {
    ToolsError::ConfigError(msg.into())
}

fn validate_extension(cfg: &RawConfigFile) -> Result<()> {
    let ext = &cfg.due_dates.extension;
    if ext.is_empty() {
        return Err(config_error("[due_dates].extension must not be empty"));
    }
    if ext.starts_with('.') {
        return Err(config_error(format!(
            "[due_dates].extension must not start with a dot (got {ext:?})"
        )));
    }
    if ext.contains(['/', '\\', '*', '?', '[', '{']) {
        return Err(config_error(format!(
            "[due_dates].extension contains path or glob characters (got {ext:?})"
        )));
    }
    Ok(())
}

fn validate_factors(cfg: &RawConfigFile) -> Result<()> {
    let factors = &cfg.due_dates.factors;
    if factors.is_empty() {
        return Err(config_error("[due_dates].factors must contain at least one factor"));
    }

    let mut suffixes = HashSet::new();
    for factor in factors {
        let value = factor.value();
        if !value.is_finite() || value <= 0.0 {
            return Err(config_error(format!(
                "[due_dates].factors must be finite and > 0 (got {value})"
            )));
        }
        if !suffixes.insert(factor.suffix()) {
            return Err(config_error(format!(
                "[due_dates].factors: {factor} maps to an output suffix already in use"
            )));
        }
    }
    Ok(())
}

fn validate_weight_classes(cfg: &RawConfigFile) -> Result<()> {
    let section = &cfg.due_dates;
    if section.weight_classes.is_empty() {
        return Err(config_error(
            "[due_dates] must contain at least one [[due_dates.weight_class]]",
        ));
    }

    let mut total = 0.0;
    for (idx, class) in section.weight_classes.iter().enumerate() {
        if class.weight == 0 {
            return Err(config_error(format!("weight_class #{idx}: weight must be >= 1")));
        }
        if !(0.0..=1.0).contains(&class.share) {
            return Err(config_error(format!(
                "weight_class #{idx}: share must be within [0, 1] (got {})",
                class.share
            )));
        }
        total += class.share;
    }

    if total > 1.0 + SHARE_EPSILON {
        return Err(config_error(format!(
            "weight_class shares sum to {total}, which exceeds 1"
        )));
    }

    if section.remainder_weight == Some(0) {
        return Err(config_error("[due_dates].remainder_weight must be >= 1"));
    }
    Ok(())
}

fn validate_plot(cfg: &RawConfigFile) -> Result<()> {
    let plot = &cfg.plot;
    if plot.width < MIN_PLOT_SIZE || plot.height < MIN_PLOT_SIZE {
        return Err(config_error(format!(
            "[plot] width and height must be >= {MIN_PLOT_SIZE} (got {}x{})",
            plot.width, plot.height
        )));
    }
    Ok(())
}

fn validate_stats(cfg: &RawConfigFile) -> Result<()> {
    let divisor = cfg.stats.time_divisor;
    if !divisor.is_finite() || divisor <= 0.0 {
        return Err(config_error(format!(
            "[stats].time_divisor must be finite and > 0 (got {divisor})"
        )));
    }
    Ok(())
}
