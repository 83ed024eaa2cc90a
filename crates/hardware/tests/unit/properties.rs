//! Property-based tests over random programs, fault sites and machine sizes.
//!
//! Every generated run must drain, keep the register-accounting, capacity,
//! retirement-order and dispatch-atomicity invariants in every snapshot, and
//! be reproducible.

#![allow(unused_results)]

use ooosim_core::config::{Config, GeneralConfig, PipelineConfig};
use ooosim_core::isa::{Instruction, Opcode};
use ooosim_core::sim::{Outcome, Simulator};
use proptest::prelude::*;

use crate::common::invariants::assert_trace_invariants;

/// Instructions over a small register window so dependencies are common.
fn arb_instruction() -> impl Strategy<Value = Instruction> {
    let reg = 0usize..8;
    prop_oneof![
        (reg.clone(), reg.clone(), -64i64..64)
            .prop_map(|(rd, rs1, imm)| Instruction::addi(rd, rs1, imm)),
        (
            prop::sample::select(vec![
                Opcode::Add,
                Opcode::Sub,
                Opcode::Mulu,
                Opcode::Divu,
                Opcode::Remu,
            ]),
            reg.clone(),
            reg.clone(),
            reg,
        )
            .prop_map(|(op, rd, rs1, rs2)| Instruction::reg(op, rd, rs1, rs2)),
    ]
}

/// Valid machine shapes, including ones small enough to stall often.
fn arb_config(program_len: usize) -> impl Strategy<Value = Config> {
    (
        1usize..=4,
        1usize..=4,
        1usize..=4,
        0usize..=28,
        0usize..=28,
        0usize..=32,
        prop::collection::vec(0..program_len.max(1), 0..3),
    )
        .prop_map(
            |(fetch_width, issue_width, commit_width, al_extra, iq_extra, pool_extra, fault_pcs)| {
                Config {
                    general: GeneralConfig {
                        fault_pcs,
                        ..GeneralConfig::default()
                    },
                    pipeline: PipelineConfig {
                        fetch_width,
                        issue_width,
                        commit_width,
                        active_list_size: fetch_width + al_extra,
                        integer_queue_size: fetch_width + iq_extra,
                        phys_regs: 32 + fetch_width + pool_extra,
                    },
                }
            },
        )
}

fn arb_run() -> impl Strategy<Value = (Vec<Instruction>, Config)> {
    prop::collection::vec(arb_instruction(), 0..48)
        .prop_flat_map(|program| {
            let len = program.len();
            (Just(program), arb_config(len))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn every_run_drains_with_invariants((program, config) in arb_run()) {
        let mut sim = Simulator::new(program, &config).unwrap();
        let trace = sim.run();

        prop_assert_eq!(trace.outcome, Outcome::Drained);
        assert_trace_invariants(&trace.snapshots);

        let stats = &trace.stats;
        prop_assert_eq!(
            stats.instructions_dispatched,
            stats.instructions_committed + stats.instructions_squashed
        );
        prop_assert!(stats.exceptions_taken <= 1, "the handler address ends the stream");
        prop_assert!(stats.peak_active_list <= config.pipeline.active_list_size);
        prop_assert!(stats.peak_integer_queue <= config.pipeline.integer_queue_size);
    }

    #[test]
    fn runs_are_reproducible((program, config) in arb_run()) {
        let first = Simulator::new(program.clone(), &config).unwrap().run();
        let second = Simulator::new(program, &config).unwrap().run();
        prop_assert_eq!(first, second);
    }
}
