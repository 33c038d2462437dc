// src/trace/plot.rs

//! Minimal SVG line chart for solver traces.

use std::fmt::Write as _;

use crate::cli::PlotKind;
use crate::errors::Result;
use crate::trace::extract::extract_series;

/// Line colours, cycled per series.
const PALETTE: [&str; 4] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"];

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;
const TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

/// How each solver's trace maps onto a chart.
struct Layout {
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    /// `(label in the trace, legend name)`
    series: &'static [(&'static str, &'static str)],
    default_output: &'static str,
}

fn layout(kind: PlotKind) -> Layout {
    match kind {
        PlotKind::Ga => Layout {
            title: "Fitness evolution",
            x_label: "Generations",
            y_label: "Fitness",
            series: &[("Average quality", "average"), ("Maximum quality", "maximum")],
            default_output: "fitness.svg",
        },
        PlotKind::Ts => Layout {
            title: "Quality evolution",
            x_label: "Iterations",
            y_label: "Quality",
            series: &[("Quality", "quality")],
            default_output: "quality.svg",
        },
    }
}

/// File name used when `--output` is not given.
pub fn default_output(kind: PlotKind) -> &'static str {
    layout(kind).default_output
}

/// Extract the series for `kind` from a trace.
pub fn build_chart(kind: PlotKind, trace: &str) -> Result<Chart> {
    let layout = layout(kind);
    let series = layout
        .series
        .iter()
        .map(|(label, name)| {
            Ok(Series {
                name: name.to_string(),
                values: extract_series(trace, label)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Chart {
        title: layout.title.to_string(),
        x_label: layout.x_label.to_string(),
        y_label: layout.y_label.to_string(),
        series,
    })
}

/// Value range covered by all series, padded when flat.
fn y_range(chart: &Chart) -> (f64, f64) {
    let mut values = chart.series.iter().flat_map(|s| s.values.iter().copied());
    let Some(first) = values.next() else {
        return (0.0, 1.0);
    };
    let (lo, hi) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if hi > lo {
        (lo, hi)
    } else {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.05 };
        (lo - pad, hi + pad)
    }
}

fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        let s = format!("{v:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render `chart` as a standalone SVG document.
pub fn render_svg(chart: &Chart, width: u32, height: u32) -> String {
    let (w, h) = (width as f64, height as f64);
    let plot_w = w - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = h - MARGIN_TOP - MARGIN_BOTTOM;

    let longest = chart.series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    let x_max = longest.saturating_sub(1).max(1) as f64;
    let (y_lo, y_hi) = y_range(chart);

    let sx = |x: f64| MARGIN_LEFT + x / x_max * plot_w;
    let sy = |y: f64| MARGIN_TOP + (1.0 - (y - y_lo) / (y_hi - y_lo)) * plot_h;

    let mut svg = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif" font-size="12">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="24" text-anchor="middle" font-size="16">{}</text>"#,
        w / 2.0,
        escape_xml(&chart.title)
    );

    // Axes.
    let _ = writeln!(
        svg,
        r#"<polyline points="{l:.1},{t:.1} {l:.1},{b:.1} {r:.1},{b:.1}" fill="none" stroke="black"/>"#,
        l = MARGIN_LEFT,
        t = MARGIN_TOP,
        b = MARGIN_TOP + plot_h,
        r = MARGIN_LEFT + plot_w,
    );

    for i in 0..=TICKS {
        let frac = i as f64 / TICKS as f64;
        let yv = y_lo + frac * (y_hi - y_lo);
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{}</text>"#,
            MARGIN_LEFT - 6.0,
            sy(yv) + 4.0,
            format_tick(yv)
        );
        let xv = frac * x_max;
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            sx(xv),
            MARGIN_TOP + plot_h + 18.0,
            format_tick(xv)
        );
    }

    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        h - 10.0,
        escape_xml(&chart.x_label)
    );
    let _ = writeln!(
        svg,
        r#"<text x="16" y="{y:.1}" text-anchor="middle" transform="rotate(-90 16 {y:.1})">{}</text>"#,
        escape_xml(&chart.y_label),
        y = MARGIN_TOP + plot_h / 2.0,
    );

    for (idx, series) in chart.series.iter().enumerate() {
        let colour = PALETTE[idx % PALETTE.len()];
        let points: Vec<String> = series
            .values
            .iter()
            .enumerate()
            .map(|(i, &v)| format!("{:.1},{:.1}", sx(i as f64), sy(v)))
            .collect();
        if points.len() == 1 {
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.1}" cy="{:.1}" r="2" fill="{colour}"/>"#,
                sx(0.0),
                sy(series.values[0])
            );
        } else if !points.is_empty() {
            let _ = writeln!(
                svg,
                r#"<polyline points="{}" fill="none" stroke="{colour}" stroke-width="1.5"/>"#,
                points.join(" ")
            );
        }

        // Legend, top right.
        let ly = MARGIN_TOP + 14.0 + idx as f64 * 18.0;
        let lx = MARGIN_LEFT + plot_w - 110.0;
        let _ = writeln!(
            svg,
            r#"<line x1="{lx:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{colour}" stroke-width="2"/>"#,
            y = ly - 4.0,
            x2 = lx + 20.0,
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{ly:.1}">{}</text>"#,
            lx + 26.0,
            escape_xml(&series.name)
        );
    }

    svg.push_str("</svg>\n");
    svg
}
