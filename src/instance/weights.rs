// src/instance/weights.rs

use crate::types::WeightClass;

/// Number of jobs a class covers: `share * jobs`, truncated.
///
/// Computed in `f64` so the count matches the usual `int(n * share)`,
/// float rounding included.
pub fn class_size(jobs: usize, class: &WeightClass) -> usize {
    (jobs as f64 * class.share) as usize
}

/// Build the per-position weight list for an instance with `jobs` jobs.
///
/// Classes are laid out back to back in the given order. Because each class
/// size is truncated the sequence can be shorter than `jobs`; the missing
/// tail is filled with `remainder` when set and left out otherwise, in which
/// case the jobs past the end receive no weight at all.
///
/// The result never exceeds `jobs` entries.
pub fn weight_sequence(jobs: usize, classes: &[WeightClass], remainder: Option<u32>) -> Vec<u32> {
    weight_prefix(jobs, jobs, classes, remainder)
}

/// The first `limit` entries of [`weight_sequence`].
///
/// Class sizes still come from `jobs`, but memory is bounded by `limit`, so
/// a header that declares far more jobs than the file holds costs nothing.
pub fn weight_prefix(
    jobs: usize,
    limit: usize,
    classes: &[WeightClass],
    remainder: Option<u32>,
) -> Vec<u32> {
    let len = jobs.min(limit);
    let mut weights = Vec::with_capacity(len);
    for class in classes {
        let room = len - weights.len();
        let count = class_size(jobs, class).min(room);
        weights.extend(std::iter::repeat_n(class.weight, count));
    }

    if let Some(weight) = remainder {
        weights.resize(len, weight);
    }

    weights
}
