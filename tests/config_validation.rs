use std::error::Error;
use std::io::Write;

use tempfile::NamedTempFile;

use jsp_tools::config::{
    load_and_validate, parse_str, resolve, ConfigFile, DEFAULT_EXTENSION, DEFAULT_FACTORS,
    DEFAULT_TIME_DIVISOR,
};
use jsp_tools::errors::ToolsError;
use jsp_tools::types::{OnError, UrgencyFactor, WeightClass};
use jsp_tools_test_utils::builders::ConfigFileBuilder;

type TestResult = Result<(), Box<dyn Error>>;

fn validate(toml: &str) -> jsp_tools::errors::Result<ConfigFile> {
    ConfigFile::try_from(parse_str(toml)?)
}

fn expect_config_error(toml: &str, needle: &str) {
    match validate(toml) {
        Err(ToolsError::ConfigError(msg)) => {
            assert!(msg.contains(needle), "message {msg:?} should mention {needle:?}")
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_file_gives_defaults() -> TestResult {
    let cfg = validate("")?;
    assert_eq!(cfg.due_dates.extension, DEFAULT_EXTENSION);
    assert_eq!(cfg.due_dates.factors, DEFAULT_FACTORS.to_vec());
    assert_eq!(cfg.due_dates.weight_classes.len(), 3);
    assert_eq!(cfg.due_dates.remainder_weight, None);
    assert_eq!(cfg.due_dates.on_error, OnError::Abort);
    assert_eq!(cfg.plot.width, 800);
    assert_eq!(cfg.stats.time_divisor, DEFAULT_TIME_DIVISOR);
    Ok(())
}

#[test]
fn full_file_overrides_every_setting() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[due_dates]
extension = "jsp"
factors = [1.2, 2.0]
remainder_weight = 2
on_error = "skip"

[[due_dates.weight_class]]
weight = 3
share = 0.5

[[due_dates.weight_class]]
weight = 1
share = 0.5

[plot]
width = 1024
height = 600

[stats]
time_divisor = 1000.0
"#
    )?;

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.due_dates.extension, "jsp");
    assert_eq!(
        cfg.due_dates.factors,
        vec![UrgencyFactor(1.2), UrgencyFactor(2.0)]
    );
    assert_eq!(
        cfg.due_dates.weight_classes,
        vec![WeightClass::new(3, 0.5), WeightClass::new(1, 0.5)]
    );
    assert_eq!(cfg.due_dates.remainder_weight, Some(2));
    assert_eq!(cfg.due_dates.on_error, OnError::Skip);
    assert_eq!((cfg.plot.width, cfg.plot.height), (1024, 600));
    assert_eq!(cfg.stats.time_divisor, 1000.0);
    Ok(())
}

#[test]
fn explicit_config_path_must_exist() {
    let missing = std::path::Path::new("definitely/not/here/JspTools.toml");
    assert!(matches!(resolve(Some(missing)), Err(ToolsError::IoError(_))));
}

#[test]
fn unknown_keys_are_rejected_by_toml_parsing() {
    assert!(matches!(
        parse_str("[due_dates]\nfactor = [1.3]\n"),
        Err(ToolsError::TomlError(_))
    ));
    assert!(matches!(
        parse_str("[due_dates]\non_error = \"retry\"\n"),
        Err(ToolsError::TomlError(_))
    ));
}

#[test]
fn extension_rules() {
    expect_config_error("[due_dates]\nextension = \"\"\n", "must not be empty");
    expect_config_error("[due_dates]\nextension = \".txt\"\n", "dot");
    expect_config_error("[due_dates]\nextension = \"t*t\"\n", "glob");
}

#[test]
fn factor_rules() {
    expect_config_error("[due_dates]\nfactors = []\n", "at least one factor");
    expect_config_error("[due_dates]\nfactors = [1.3, -1.0]\n", "> 0");
    expect_config_error("[due_dates]\nfactors = [1.5, 1.5]\n", "suffix");
}

#[test]
fn weight_class_rules() {
    expect_config_error(
        "[[due_dates.weight_class]]\nweight = 0\nshare = 0.5\n",
        "weight must be >= 1",
    );
    expect_config_error(
        "[[due_dates.weight_class]]\nweight = 2\nshare = 1.5\n",
        "within [0, 1]",
    );
    expect_config_error(
        "[[due_dates.weight_class]]\nweight = 2\nshare = 0.7\n\n[[due_dates.weight_class]]\nweight = 1\nshare = 0.7\n",
        "exceeds 1",
    );
    expect_config_error("[due_dates]\nremainder_weight = 0\n", "remainder_weight");
}

#[test]
fn plot_and_stats_rules() {
    expect_config_error("[plot]\nwidth = 10\n", "[plot]");
    expect_config_error("[stats]\ntime_divisor = 0.0\n", "time_divisor");
}

#[test]
fn builder_produces_valid_config() {
    let cfg = ConfigFileBuilder::new()
        .factors(&[1.1])
        .weight_classes(&[(5, 1.0)])
        .time_divisor(1.0)
        .build();
    assert_eq!(cfg.due_dates.factors, vec![UrgencyFactor(1.1)]);
    assert_eq!(cfg.stats.time_divisor, 1.0);
}
