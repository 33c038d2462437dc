use proptest::prelude::*;

use jsp_tools::config::{DEFAULT_FACTORS, DEFAULT_WEIGHT_CLASSES};
use jsp_tools::instance::{due_date, weigh_jobs, weight_sequence, Job};
use jsp_tools_test_utils::builders::InstanceBuilder;

fn job_strategy() -> impl Strategy<Value = Vec<(u32, u64)>> {
    proptest::collection::vec((0u32..20, 0u64..1000), 1..15)
}

proptest! {
    #[test]
    fn weight_sequence_length_is_sum_of_truncated_shares(n in 0usize..5000) {
        let weights = weight_sequence(n, &DEFAULT_WEIGHT_CLASSES, None);
        let expected = (n as f64 * 0.2) as usize * 2 + (n as f64 * 0.6) as usize;
        prop_assert_eq!(weights.len(), expected);
        prop_assert!(weights.len() <= n);
        // Non-increasing: 4s, then 2s, then 1s.
        prop_assert!(weights.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn remainder_always_covers_every_job(n in 0usize..5000, w in 1u32..10) {
        let weights = weight_sequence(n, &DEFAULT_WEIGHT_CLASSES, Some(w));
        prop_assert_eq!(weights.len(), n);
    }

    #[test]
    fn due_date_is_floor_of_factor_times_total(ops in job_strategy()) {
        let line = InstanceBuilder::job_line(&ops);
        let job = Job::parse(&line).unwrap();
        let total: u64 = ops.iter().map(|&(_, p)| p).sum();
        prop_assert_eq!(job.total_processing_time(), total);

        for factor in DEFAULT_FACTORS {
            let due = due_date(total, factor);
            prop_assert_eq!(due, (factor.value() * total as f64).floor() as u64);
            prop_assert!(due >= total);
        }
    }

    #[test]
    fn jobs_past_the_weight_sequence_are_excluded(n in 0usize..60) {
        let lines: Vec<String> = (0..n).map(|_| "0\t1\t1\t2".to_string()).collect();
        let weights = weight_sequence(n, &DEFAULT_WEIGHT_CLASSES, None);
        let jobs = weigh_jobs(&lines, &weights, 2).unwrap();
        prop_assert_eq!(jobs.len(), weights.len());
    }
}
