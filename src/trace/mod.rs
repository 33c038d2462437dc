// src/trace/mod.rs

//! Solver trace handling: labelled value extraction and chart output.

pub mod extract;
pub mod plot;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::PlotKind;
use crate::config::PlotSection;
use crate::errors::Result;
use crate::fs::FileSystem;

pub use extract::{extract_first, extract_series};
pub use plot::{build_chart, default_output, render_svg, Chart, Series};

/// Read a trace, chart it and write the SVG. Returns the output path.
pub fn plot_trace(
    fs: &dyn FileSystem,
    kind: PlotKind,
    trace_path: &Path,
    output: Option<&Path>,
    settings: &PlotSection,
) -> Result<PathBuf> {
    let trace = fs.read_to_string(trace_path)?;
    let chart = build_chart(kind, &trace).map_err(|e| e.with_path(trace_path))?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_output(kind)));
    let svg = render_svg(&chart, settings.width, settings.height);
    fs.write(&output, svg.as_bytes())?;

    let points: Vec<usize> = chart.series.iter().map(|s| s.values.len()).collect();
    info!(?trace_path, ?output, ?points, "chart written");
    Ok(output)
}
