use std::path::{Path, PathBuf};

use jsp_tools::config::DEFAULT_WEIGHT_CLASSES;
use jsp_tools::errors::ToolsError;
use jsp_tools::instance::{
    derived_path, due_date, parse_instance, render_derived, weigh_jobs, weight_sequence, Header,
    Job, Operation,
};
use jsp_tools::instance::weight_prefix;
use jsp_tools::types::{UrgencyFactor, WeightClass};

#[test]
fn header_parses_job_and_machine_counts() {
    let header = Header::parse("10\t5").unwrap();
    assert_eq!(header.jobs, 10);
    assert_eq!(header.machines, 5);
    assert_eq!(header.raw, "10\t5");
}

#[test]
fn header_rejects_wrong_token_count_and_non_integers() {
    for line in ["10", "10\t5\t1", "10 5", "ten\t5", "10\t-5", ""] {
        match Header::parse(line) {
            Err(ToolsError::MalformedHeader { .. }) => {}
            other => panic!("expected MalformedHeader for {line:?}, got {other:?}"),
        }
    }
}

#[test]
fn empty_text_is_a_header_error() {
    assert!(matches!(
        parse_instance(""),
        Err(ToolsError::MalformedHeader { .. })
    ));
}

#[test]
fn instance_keeps_job_lines_verbatim() {
    let instance = parse_instance("2\t2\n0\t3\t1\t5\n1\t 2\t0\t4\n").unwrap();
    assert_eq!(instance.header.jobs, 2);
    assert_eq!(instance.job_lines, vec!["0\t3\t1\t5", "1\t 2\t0\t4"]);
}

#[test]
fn job_sums_processing_times_at_odd_positions() {
    let job = Job::parse("0\t3\t1\t5").unwrap();
    assert_eq!(
        job.operations,
        vec![
            Operation { machine: 0, duration: 3 },
            Operation { machine: 1, duration: 5 },
        ]
    );
    assert_eq!(job.total_processing_time(), 8);
}

#[test]
fn job_rejects_odd_token_count_and_garbage() {
    assert!(Job::parse("0\t3\t1").unwrap_err().contains("odd number"));
    assert!(Job::parse("0\tx").unwrap_err().contains("token #2"));
    assert!(Job::parse("0\t-3").is_err());
}

#[test]
fn weight_sequence_truncates_each_class() {
    assert_eq!(weight_sequence(4, &DEFAULT_WEIGHT_CLASSES, None), vec![2, 2]);
    assert_eq!(weight_sequence(5, &DEFAULT_WEIGHT_CLASSES, None), vec![4, 2, 2, 2, 1]);
    assert_eq!(
        weight_sequence(7, &DEFAULT_WEIGHT_CLASSES, None),
        vec![4, 2, 2, 2, 2, 1]
    );
    assert_eq!(weight_sequence(3, &DEFAULT_WEIGHT_CLASSES, None), vec![2]);
    assert!(weight_sequence(0, &DEFAULT_WEIGHT_CLASSES, None).is_empty());
}

#[test]
fn weight_sequence_fills_remainder_when_asked() {
    assert_eq!(weight_sequence(4, &DEFAULT_WEIGHT_CLASSES, Some(2)), vec![2, 2, 2, 2]);
    assert_eq!(
        weight_sequence(7, &DEFAULT_WEIGHT_CLASSES, Some(1)),
        vec![4, 2, 2, 2, 2, 1, 1]
    );
}

#[test]
fn weight_sequence_never_exceeds_job_count() {
    let greedy = [WeightClass::new(3, 1.0), WeightClass::new(1, 1.0)];
    assert_eq!(weight_sequence(3, &greedy, None), vec![3, 3, 3]);
}

#[test]
fn due_date_is_floor_of_scaled_total() {
    assert_eq!(due_date(8, UrgencyFactor(1.3)), 10);
    assert_eq!(due_date(8, UrgencyFactor(1.5)), 12);
    assert_eq!(due_date(8, UrgencyFactor(1.6)), 12);
    assert_eq!(due_date(0, UrgencyFactor(1.6)), 0);
}

#[test]
fn factor_suffix_drops_the_dot() {
    assert_eq!(UrgencyFactor(1.3).suffix(), "13");
    assert_eq!(UrgencyFactor(1.6).suffix(), "16");
    assert_eq!(UrgencyFactor(2.0).suffix(), "20");
    assert_eq!(UrgencyFactor(1.25).suffix(), "125");
}

#[test]
fn derived_path_inserts_suffix_before_extension() {
    assert_eq!(
        derived_path(Path::new("data/job1.txt"), UrgencyFactor(1.3)),
        PathBuf::from("data/job1_13.txt")
    );
    assert_eq!(
        derived_path(Path::new("la01.v2.txt"), UrgencyFactor(1.5)),
        PathBuf::from("la01.v2_15.txt")
    );
    assert_eq!(
        derived_path(Path::new("raw"), UrgencyFactor(1.6)),
        PathBuf::from("raw_16")
    );
}

#[test]
fn weigh_jobs_pairs_by_position_and_renders() {
    let lines = vec!["0\t3\t1\t5".to_string(), "1\t2\t0\t4".to_string(), "0\t1\t1\t1".to_string()];
    let jobs = weigh_jobs(&lines, &[4, 2], 2).unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].weight, 4);
    assert_eq!(jobs[1].total_processing_time, 6);

    let text = render_derived("3\t2", &jobs, UrgencyFactor(1.3));
    assert_eq!(text, "3\t2\n10\t4\t0\t3\t1\t5\n7\t2\t1\t2\t0\t4\n");
}

#[test]
fn weigh_jobs_reports_absolute_line_number() {
    let lines = vec!["0\t3".to_string(), "0\t3\t1".to_string()];
    match weigh_jobs(&lines, &[1, 1], 2) {
        Err(ToolsError::MalformedJob { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected MalformedJob, got {other:?}"),
    }
}

#[test]
fn processing_time_overflow_is_reported() {
    let reason = Job::parse("0\t18446744073709551615\t1\t1").unwrap_err();
    assert!(reason.contains("processing time total overflows"), "{reason}");

    let max = Job::parse("0\t18446744073709551615").unwrap();
    assert_eq!(max.total_processing_time(), u64::MAX);
}

#[test]
fn negative_values_are_rejected_with_their_own_reason() {
    let reason = Job::parse("0\t3\t1\t-5").unwrap_err();
    assert!(reason.contains("token #4"), "{reason}");
    assert!(reason.contains("negative"), "{reason}");

    let reason = Job::parse("0\t3.5").unwrap_err();
    assert!(reason.contains("not an integer"), "{reason}");
}

#[test]
fn weight_prefix_is_bounded_by_limit_but_sized_by_jobs() {
    let huge = 100_000_000_000_000;
    assert_eq!(weight_prefix(huge, 3, &DEFAULT_WEIGHT_CLASSES, None), vec![4, 4, 4]);
    assert_eq!(weight_prefix(10, 4, &DEFAULT_WEIGHT_CLASSES, None), vec![4, 4, 2, 2]);
    assert_eq!(weight_prefix(4, 10, &DEFAULT_WEIGHT_CLASSES, None), vec![2, 2]);
    assert_eq!(weight_prefix(4, 10, &DEFAULT_WEIGHT_CLASSES, Some(1)), vec![2, 2, 1, 1]);
    assert_eq!(weight_prefix(4, 3, &DEFAULT_WEIGHT_CLASSES, Some(1)), vec![2, 2, 1]);
}
