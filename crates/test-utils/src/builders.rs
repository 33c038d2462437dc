#![allow(dead_code)]

use jsp_tools::config::{ConfigFile, RawConfigFile};
use jsp_tools::types::{OnError, UrgencyFactor, WeightClass};

/// Builder for raw instance text (`n<TAB>m` header plus job lines).
pub struct InstanceBuilder {
    machines: usize,
    jobs: Vec<Vec<(u32, u64)>>,
    declared_jobs: Option<usize>,
}

impl InstanceBuilder {
    pub fn new(machines: usize) -> Self {
        Self {
            machines,
            jobs: Vec::new(),
            declared_jobs: None,
        }
    }

    /// Add a job as `(machine, processing time)` pairs.
    pub fn job(mut self, ops: &[(u32, u64)]) -> Self {
        self.jobs.push(ops.to_vec());
        self
    }

    /// Add `count` jobs visiting machines `0..machines` with the same duration.
    pub fn uniform_jobs(mut self, count: usize, duration: u64) -> Self {
        for _ in 0..count {
            let ops = (0..self.machines as u32).map(|m| (m, duration)).collect();
            self.jobs.push(ops);
        }
        self
    }

    /// Override the job count written in the header.
    pub fn declared_jobs(mut self, n: usize) -> Self {
        self.declared_jobs = Some(n);
        self
    }

    pub fn job_line(ops: &[(u32, u64)]) -> String {
        ops.iter()
            .map(|(m, p)| format!("{m}\t{p}"))
            .collect::<Vec<_>>()
            .join("\t")
    }

    pub fn build(self) -> String {
        let n = self.declared_jobs.unwrap_or(self.jobs.len());
        let mut out = format!("{n}\t{}\n", self.machines);
        for job in &self.jobs {
            out.push_str(&Self::job_line(job));
            out.push('\n');
        }
        out
    }
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn extension(mut self, ext: &str) -> Self {
        self.config.due_dates.extension = ext.to_string();
        self
    }

    pub fn factors(mut self, factors: &[f64]) -> Self {
        self.config.due_dates.factors = factors.iter().copied().map(UrgencyFactor).collect();
        self
    }

    pub fn weight_classes(mut self, classes: &[(u32, f64)]) -> Self {
        self.config.due_dates.weight_classes = classes
            .iter()
            .map(|&(weight, share)| WeightClass::new(weight, share))
            .collect();
        self
    }

    pub fn remainder_weight(mut self, weight: u32) -> Self {
        self.config.due_dates.remainder_weight = Some(weight);
        self
    }

    pub fn on_error(mut self, on_error: OnError) -> Self {
        self.config.due_dates.on_error = on_error;
        self
    }

    pub fn time_divisor(mut self, divisor: f64) -> Self {
        self.config.stats.time_divisor = divisor;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
