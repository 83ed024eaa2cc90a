//! Instruction Set Definitions.
//!
//! The modelled core executes a small register-register / register-immediate
//! arithmetic instruction set:
//!
//! * `add`, `sub`, `mulu`, `divu`, `remu`: `op xD, xA, xB`
//! * `addi`: `op xD, xA, imm`
//!
//! Instructions reach the core as typed [`Instruction`] records; the text
//! decoder in [`decode()`] is the loader's validation step.

/// Text decoder for the assembly form of the instruction set.
pub mod decode;

/// Typed instruction records.
pub mod instruction;

pub use decode::decode;
pub use instruction::{Instruction, Opcode, OperandB};
