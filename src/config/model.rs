// src/config/model.rs

use serde::Deserialize;

use crate::types::{OnError, UrgencyFactor, WeightClass};

/// Urgency factors used when no config overrides them.
pub const DEFAULT_FACTORS: [UrgencyFactor; 3] =
    [UrgencyFactor(1.3), UrgencyFactor(1.5), UrgencyFactor(1.6)];

/// First 20% of jobs get weight 4, the next 60% weight 2, the last 20% weight 1.
pub const DEFAULT_WEIGHT_CLASSES: [WeightClass; 3] = [
    WeightClass::new(4, 0.2),
    WeightClass::new(2, 0.6),
    WeightClass::new(1, 0.2),
];

/// Extension (without the dot) of raw instance files.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Solver traces report execution time in microseconds.
pub const DEFAULT_TIME_DIVISOR: f64 = 1_000_000.0;

/// Raw configuration as read from a TOML file, before validation.
///
/// ```toml
/// [due_dates]
/// extension = "txt"
/// factors = [1.3, 1.5, 1.6]
/// on_error = "abort"
///
/// [[due_dates.weight_class]]
/// weight = 4
/// share = 0.2
///
/// [plot]
/// width = 800
/// height = 480
///
/// [stats]
/// time_divisor = 1000000.0
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub due_dates: DueDateSection,

    #[serde(default)]
    pub plot: PlotSection,

    #[serde(default)]
    pub stats: StatsSection,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`
/// or `Default`.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub due_dates: DueDateSection,
    pub plot: PlotSection,
    pub stats: StatsSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile) -> Self {
        Self {
            due_dates: raw.due_dates,
            plot: raw.plot,
            stats: raw.stats,
        }
    }
}

/// `[due_dates]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DueDateSection {
    /// Extension of instance files to pick up, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// One derived file is written per factor.
    #[serde(default = "default_factors")]
    pub factors: Vec<UrgencyFactor>,

    /// Priority classes, applied to jobs in file order.
    #[serde(default = "default_weight_classes", rename = "weight_class")]
    pub weight_classes: Vec<WeightClass>,

    /// Weight for jobs left over after truncating each class share.
    ///
    /// If `None` those jobs are dropped from the derived files.
    #[serde(default)]
    pub remainder_weight: Option<u32>,

    #[serde(default)]
    pub on_error: OnError,
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_factors() -> Vec<UrgencyFactor> {
    DEFAULT_FACTORS.to_vec()
}

fn default_weight_classes() -> Vec<WeightClass> {
    DEFAULT_WEIGHT_CLASSES.to_vec()
}

impl Default for DueDateSection {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            factors: default_factors(),
            weight_classes: default_weight_classes(),
            remainder_weight: None,
            on_error: OnError::default(),
        }
    }
}

/// `[plot]` section: SVG canvas size in pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlotSection {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    480
}

impl Default for PlotSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// `[stats]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsSection {
    /// Average execution time is divided by this before printing.
    #[serde(default = "default_time_divisor")]
    pub time_divisor: f64,
}

fn default_time_divisor() -> f64 {
    DEFAULT_TIME_DIVISOR
}

impl Default for StatsSection {
    fn default() -> Self {
        Self {
            time_divisor: default_time_divisor(),
        }
    }
}
