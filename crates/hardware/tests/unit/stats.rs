//! Statistics gathered over whole runs.

use ooosim_core::config::{Config, PipelineConfig};
use pretty_assertions::assert_eq;

use crate::common::harness::{TestContext, as_strs, dependency_chain, independent_addis};

#[test]
fn independent_stream_runs_at_full_width() {
    let lines = independent_addis(40);
    let mut tc = TestContext::new(&as_strs(&lines));
    let trace = tc.run();
    let stats = &trace.stats;

    assert_eq!(stats.cycles, 10);
    assert_eq!(stats.instructions_fetched, 40);
    assert_eq!(stats.instructions_dispatched, 40);
    assert_eq!(stats.instructions_issued, 40);
    assert_eq!(stats.instructions_committed, 40);
    assert_eq!(stats.dispatch_stalls(), 0);
    assert_eq!(stats.peak_active_list, 0, "every batch retires in its own cycle");
    assert!((stats.ipc() - 4.0).abs() < f64::EPSILON);
    assert!((stats.cpi() - 0.25).abs() < f64::EPSILON);
}

#[test]
fn serial_chain_commits_one_per_cycle() {
    let lines = dependency_chain(60);
    let mut tc = TestContext::new(&as_strs(&lines));
    let trace = tc.run();
    let stats = &trace.stats;

    assert!(trace.is_drained());
    assert_eq!(stats.cycles, 60);
    assert_eq!(stats.instructions_committed, 60);
    assert!(stats.stalls_free_list > 0);
    assert_eq!(stats.stalls_active_list, 0, "free list runs dry first");
    assert_eq!(stats.stalls_integer_queue, 0);
    assert_eq!(stats.peak_active_list, 31);
}

#[test]
fn small_active_list_becomes_the_bottleneck() {
    let config = Config {
        pipeline: PipelineConfig {
            active_list_size: 16,
            ..PipelineConfig::default()
        },
        ..Config::default()
    };
    let lines = dependency_chain(40);
    let mut tc = TestContext::with_config(&as_strs(&lines), &config);
    let trace = tc.run();

    assert!(trace.stats.stalls_active_list > 0);
    assert_eq!(trace.stats.stalls_free_list, 0);
    assert_eq!(trace.stats.peak_active_list, 15);
}

#[test]
fn exception_counters() {
    let mut config = Config::default();
    config.general.fault_pcs = vec![1];
    let lines = independent_addis(6);
    let mut tc = TestContext::with_config(&as_strs(&lines), &config);
    let trace = tc.run();
    let stats = &trace.stats;

    assert_eq!(stats.cycles, 2);
    assert_eq!(stats.recovery_cycles, 1);
    assert_eq!(stats.exceptions_taken, 1);
    assert_eq!(stats.instructions_committed, 2);
    assert_eq!(stats.instructions_squashed, 2);
}
