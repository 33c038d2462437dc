// src/config/mod.rs

//! Configuration loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate factor, weight and output settings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, parse_str, resolve, DEFAULT_CONFIG_FILE};
pub use model::{
    ConfigFile, DueDateSection, PlotSection, RawConfigFile, StatsSection, DEFAULT_EXTENSION,
    DEFAULT_FACTORS, DEFAULT_TIME_DIVISOR, DEFAULT_WEIGHT_CLASSES,
};
