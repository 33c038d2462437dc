// src/instance/mod.rs

//! Due-date instance generation.
//!
//! A raw job-shop instance is expanded into one file per urgency factor, each
//! job prefixed with its due date and priority weight. The raw file is then
//! removed.

pub mod discover;
pub mod due_dates;
pub mod parse;
pub mod weights;

pub use discover::discover_instances;
pub use due_dates::{
    derived_path, due_date, generate, process_file, render_derived, weigh_jobs, FileReport,
    GenerateOptions, GenerationReport, WeightedJob,
};
pub use parse::{parse_instance, Header, Instance, Job, Operation};
pub use weights::{weight_prefix, weight_sequence};
