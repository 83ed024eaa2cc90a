//! Configuration parsing, defaults and validation.

use ooosim_core::common::error::ConfigError;
use ooosim_core::config::Config;
use rstest::rstest;

#[test]
fn defaults_describe_baseline_machine() {
    let config = Config::default();
    assert_eq!(config.general.cycle_limit, 1000);
    assert_eq!(config.general.handler_pc, 0x10000);
    assert!(config.general.fault_pcs.is_empty());
    assert_eq!(config.pipeline.fetch_width, 4);
    assert_eq!(config.pipeline.issue_width, 4);
    assert_eq!(config.pipeline.commit_width, 4);
    assert_eq!(config.pipeline.active_list_size, 32);
    assert_eq!(config.pipeline.integer_queue_size, 32);
    assert_eq!(config.pipeline.phys_regs, 64);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_json_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = Config::from_json(r#"{ "pipeline": { "phys_regs": 96 } }"#).unwrap();
    assert_eq!(config.pipeline.phys_regs, 96);
    assert_eq!(config.pipeline.active_list_size, 32);
    assert_eq!(config.general, Config::default().general);
}

#[test]
fn malformed_json_is_rejected() {
    assert!(Config::from_json(r#"{ "pipeline": { "phys_regs": "many" } }"#).is_err());
}

#[rstest]
#[case::equal_to_arch(r#"{ "pipeline": { "phys_regs": 32 } }"#, ConfigError::TooFewPhysicalRegisters { arch: 32, phys: 32 })]
#[case::zero_fetch(r#"{ "pipeline": { "fetch_width": 0 } }"#, ConfigError::Zero("fetch_width"))]
#[case::zero_queue(r#"{ "pipeline": { "integer_queue_size": 0 } }"#, ConfigError::Zero("integer_queue_size"))]
#[case::tiny_active_list(r#"{ "pipeline": { "active_list_size": 3 } }"#, ConfigError::SmallerThanFetchBatch { structure: "active_list_size", capacity: 3, fetch_width: 4 })]
#[case::tiny_free_pool(r#"{ "pipeline": { "phys_regs": 34 } }"#, ConfigError::SmallerThanFetchBatch { structure: "free_list", capacity: 2, fetch_width: 4 })]
#[case::zero_limit(r#"{ "general": { "cycle_limit": 0 } }"#, ConfigError::Zero("cycle_limit"))]
fn validation_rejects(#[case] json: &str, #[case] expected: ConfigError) {
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.validate(), Err(expected));
}

#[test]
fn narrow_fetch_allows_small_structures() {
    let config = Config::from_json(
        r#"{ "pipeline": { "fetch_width": 1, "active_list_size": 1, "integer_queue_size": 1, "phys_regs": 33 } }"#,
    )
    .unwrap();
    assert!(config.validate().is_ok());
}
