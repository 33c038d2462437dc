// src/instance/parse.rs

//! Parsing of raw job-shop instance text.
//!
//! Layout:
//!
//! ```text
//! n<TAB>m
//! machine<TAB>time<TAB>machine<TAB>time ...   (one line per job)
//! ```

use std::path::PathBuf;

use crate::errors::{Result, ToolsError};

/// Token separator in instance files.
pub const DELIMITER: char = '\t';

/// The `n m` line at the top of an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub jobs: usize,
    pub machines: usize,
    /// The line exactly as read, without its terminator.
    pub raw: String,
}

impl Header {
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split(DELIMITER).collect();
        if tokens.len() != 2 {
            return Err(header_error(format!(
                "expected 2 tab-separated values, found {}",
                tokens.len()
            )));
        }

        let jobs = parse_count(tokens[0], "job count")?;
        let machines = parse_count(tokens[1], "machine count")?;

        Ok(Self {
            jobs,
            machines,
            raw: line.to_string(),
        })
    }
}

fn parse_count(token: &str, what: &str) -> Result<usize> {
    token
        .trim()
        .parse::<usize>()
        .map_err(|_| header_error(format!("{what} {token:?} is not a non-negative integer")))
}

fn header_error(reason: String) -> ToolsError {
    ToolsError::MalformedHeader {
        path: PathBuf::new(),
        reason,
    }
}

/// One `(machine, processing time)` step of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub machine: u32,
    pub duration: u64,
}

/// A job: its operations in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub operations: Vec<Operation>,
    total: u64,
}

/// Parse one job token. Negative values are refused: they are not valid
/// machine ids or processing times.
fn parse_job_token(idx: usize, token: &str) -> std::result::Result<u64, String> {
    let token = token.trim();
    token.parse::<u64>().map_err(|_| match token.parse::<i64>() {
        Ok(value) => format!("token #{} ({value}) is negative; job values must be >= 0", idx + 1),
        Err(_) => format!("token #{} ({token:?}) is not an integer", idx + 1),
    })
}

impl Job {
    /// Parse a job line. The error is a human-readable reason; callers add
    /// the file and line number.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let values = line
            .split(DELIMITER)
            .enumerate()
            .map(|(idx, token)| parse_job_token(idx, token))
            .collect::<std::result::Result<Vec<u64>, String>>()?;

        if values.len() % 2 != 0 {
            return Err(format!(
                "expected (machine, time) pairs, found an odd number of values ({})",
                values.len()
            ));
        }

        let mut operations = Vec::with_capacity(values.len() / 2);
        let mut total: u64 = 0;
        for pair in values.chunks_exact(2) {
            let machine = u32::try_from(pair[0])
                .map_err(|_| format!("machine id {} is out of range", pair[0]))?;
            total = total
                .checked_add(pair[1])
                .ok_or_else(|| "processing time total overflows".to_string())?;
            operations.push(Operation {
                machine,
                duration: pair[1],
            });
        }

        Ok(Self { operations, total })
    }

    /// Sum of the processing times (the values at odd token positions).
    pub fn total_processing_time(&self) -> u64 {
        self.total
    }
}

/// A raw instance: parsed header plus the untouched job lines.
///
/// Job lines are kept as text because derived files repeat them verbatim;
/// they are parsed on demand with [`Job::parse`].
#[derive(Debug, Clone)]
pub struct Instance {
    pub header: Header,
    pub job_lines: Vec<String>,
}

/// Split instance text into header and job lines.
///
/// Only the header is validated here.
pub fn parse_instance(text: &str) -> Result<Instance> {
    let mut lines = text.lines();
    let first = lines
        .next()
        .ok_or_else(|| header_error("file is empty".to_string()))?;
    let header = Header::parse(first)?;
    let job_lines = lines.map(str::to_string).collect();

    Ok(Instance { header, job_lines })
}
