use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Multiplier applied to a job's total processing time to get its due date.
///
/// Larger factors give looser deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct UrgencyFactor(pub f64);

impl UrgencyFactor {
    pub fn value(self) -> f64 {
        self.0
    }

    /// File-name suffix for this factor: its shortest decimal form without
    /// the dot, so `1.3` becomes `"13"` and `2.0` becomes `"20"`.
    pub fn suffix(self) -> String {
        // `{:?}` always keeps a fractional part ("2.0"), `{}` would not.
        format!("{:?}", self.0).replace('.', "")
    }
}

impl fmt::Display for UrgencyFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// A priority class: `share` of the jobs (truncated) receive `weight`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WeightClass {
    pub weight: u32,
    pub share: f64,
}

impl WeightClass {
    pub const fn new(weight: u32, share: f64) -> Self {
        Self { weight, share }
    }
}

/// What to do when a single instance file cannot be processed.
///
/// - `Abort`: stop the whole run on the first failure (default).
/// - `Skip`: log the failure, leave the file untouched and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    #[default]
    Abort,
    Skip,
}

impl FromStr for OnError {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(OnError::Abort),
            "skip" => Ok(OnError::Skip),
            other => Err(format!(
                "invalid on_error: {other} (expected \"abort\" or \"skip\")"
            )),
        }
    }
}
