// src/instance/due_dates.rs

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::DueDateSection;
use crate::errors::{Result, ToolsError};
use crate::fs::FileSystem;
use crate::instance::discover::discover_instances;
use crate::instance::parse::{parse_instance, Job, DELIMITER};
use crate::instance::weights::weight_prefix;
use crate::types::{OnError, UrgencyFactor};

/// `floor(factor * total_processing_time)`, computed in `f64`.
pub fn due_date(total_processing_time: u64, factor: UrgencyFactor) -> u64 {
    (factor.value() * total_processing_time as f64).floor() as u64
}

/// `<dir>/<stem>_<suffix>.<ext>` for an input `<dir>/<stem>.<ext>`.
pub fn derived_path(input: &Path, factor: UrgencyFactor) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_{}.{}", factor.suffix(), ext.to_string_lossy()),
        None => format!("{stem}_{}", factor.suffix()),
    };
    input.with_file_name(name)
}

/// A job that made it into the derived files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedJob {
    /// Original job line, repeated verbatim in the output.
    pub line: String,
    pub weight: u32,
    pub total_processing_time: u64,
}

/// Pair job lines with their weights and parse the ones that are kept.
///
/// Lines past the end of the weight sequence are neither parsed nor kept.
/// `first_line_no` is the 1-based line number of `job_lines[0]`, used in
/// error messages.
pub fn weigh_jobs(
    job_lines: &[String],
    weights: &[u32],
    first_line_no: usize,
) -> Result<Vec<WeightedJob>> {
    job_lines
        .iter()
        .zip(weights)
        .enumerate()
        .map(|(idx, (line, &weight))| {
            let job = Job::parse(line).map_err(|reason| ToolsError::MalformedJob {
                path: PathBuf::new(),
                line: first_line_no + idx,
                reason,
            })?;
            Ok(WeightedJob {
                line: line.clone(),
                weight,
                total_processing_time: job.total_processing_time(),
            })
        })
        .collect()
}

/// Contents of one derived file: header, then `due<TAB>weight<TAB>job` lines.
pub fn render_derived(header_line: &str, jobs: &[WeightedJob], factor: UrgencyFactor) -> String {
    let mut out = String::with_capacity(header_line.len() + 1 + jobs.len() * 32);
    out.push_str(header_line);
    out.push('\n');
    for job in jobs {
        let due = due_date(job.total_processing_time, factor);
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{due}{DELIMITER}{}{DELIMITER}{}", job.weight, job.line);
    }
    out
}

/// Options that come from the command line rather than the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Overrides `on_error = "abort"`.
    pub keep_going: bool,
    /// Plan only: nothing is written or deleted.
    pub dry_run: bool,
}

/// What happened to a single input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: PathBuf,
    pub outputs: Vec<PathBuf>,
    /// Job count declared in the header.
    pub jobs_declared: usize,
    /// Jobs written to every derived file.
    pub jobs_included: usize,
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    pub processed: Vec<FileReport>,
    /// Files skipped because of an error, with the rendered error.
    pub failed: Vec<(PathBuf, String)>,
}

/// Turn one instance file into its due-date variants and delete it.
///
/// `pending` holds inputs that have not been processed yet; writing over one
/// of them is refused. Nothing is written unless the whole file parses.
pub fn process_file(
    fs: &dyn FileSystem,
    path: &Path,
    settings: &DueDateSection,
    pending: &BTreeSet<PathBuf>,
    dry_run: bool,
) -> Result<FileReport> {
    let text = fs.read_to_string(path)?;
    let instance = parse_instance(&text).map_err(|e| e.with_path(path))?;
    let header = &instance.header;

    // Weights past the last job line are never paired, so don't build them.
    let weights = weight_prefix(
        header.jobs,
        instance.job_lines.len(),
        &settings.weight_classes,
        settings.remainder_weight,
    );
    debug!(?path, jobs = header.jobs, machines = header.machines, ?weights, "weights assigned");

    let jobs = weigh_jobs(&instance.job_lines, &weights, 2).map_err(|e| e.with_path(path))?;
    if jobs.len() < header.jobs {
        debug!(
            ?path,
            declared = header.jobs,
            included = jobs.len(),
            "trailing jobs left out of derived files"
        );
    }

    let mut outputs = Vec::with_capacity(settings.factors.len());
    for &factor in &settings.factors {
        let output = derived_path(path, factor);
        if output == path || pending.contains(&output) {
            return Err(ToolsError::OutputCollision {
                output,
                input: path.to_path_buf(),
            });
        }
        outputs.push((factor, output));
    }

    if !dry_run {
        for (factor, output) in &outputs {
            let contents = render_derived(&header.raw, &jobs, *factor);
            fs.write(output, contents.as_bytes())?;
            debug!(?output, %factor, "wrote derived instance");
        }
        fs.remove_file(path)?;
    }

    Ok(FileReport {
        input: path.to_path_buf(),
        outputs: outputs.into_iter().map(|(_, p)| p).collect(),
        jobs_declared: header.jobs,
        jobs_included: jobs.len(),
    })
}

/// Process every instance under `root`.
///
/// Inputs are discovered up front, so outputs of this run are never picked
/// up again. By default the first failure aborts the run; with `keep_going`
/// (or `on_error = "skip"`) failing files are logged and left in place.
pub fn generate(
    fs: &dyn FileSystem,
    root: &Path,
    settings: &DueDateSection,
    options: GenerateOptions,
) -> Result<GenerationReport> {
    let inputs = discover_instances(fs, root, &settings.extension)?;
    info!(count = inputs.len(), ?root, "instance files found");

    let skip_failures = options.keep_going || settings.on_error == OnError::Skip;
    let mut pending: BTreeSet<PathBuf> = inputs.iter().cloned().collect();
    let mut report = GenerationReport::default();

    for input in inputs {
        pending.remove(&input);
        match process_file(fs, &input, settings, &pending, options.dry_run) {
            Ok(file_report) => {
                info!(
                    input = ?file_report.input,
                    outputs = file_report.outputs.len(),
                    jobs = file_report.jobs_included,
                    dry_run = options.dry_run,
                    "instance processed"
                );
                report.processed.push(file_report);
            }
            Err(err) if skip_failures => {
                warn!(?input, error = %err, "skipping instance");
                report.failed.push((input, err.to_string()));
            }
            Err(err) => return Err(err),
        }
    }

    Ok(report)
}
