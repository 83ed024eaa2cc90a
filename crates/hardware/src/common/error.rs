//! Error definitions.
//!
//! This module defines the error handling for the simulator. It provides:
//! 1. **Decode Errors:** Rejection of malformed instruction text before it reaches the core.
//! 2. **Load Errors:** Failures reading or parsing a program file.
//! 3. **Configuration Errors:** Parameter combinations the core cannot model.
//! 4. **Simulation Errors:** The top-level error reported by drivers, including the cycle cap.
//!
//! Architectural exceptions are *not* errors: they are latched in the processor
//! state and handled by the recovery path. Resource exhaustion is backpressure.

use std::io;

use thiserror::Error;

/// Reasons an instruction string is rejected by the decoder.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The line contained no tokens.
    #[error("empty instruction")]
    Empty,

    /// The mnemonic is not part of the instruction set.
    #[error("unknown opcode `{0}`")]
    UnknownOpcode(String),

    /// The instruction does not have exactly three operands.
    #[error("`{opcode}` expects 3 operands, found {found}")]
    OperandCount {
        /// Mnemonic of the offending instruction.
        opcode: String,
        /// Number of operands present.
        found: usize,
    },

    /// A register operand is not of the form `x0`..`x31`.
    #[error("invalid register `{0}`")]
    InvalidRegister(String),

    /// The immediate operand could not be parsed as a signed integer.
    #[error("invalid immediate `{0}`")]
    InvalidImmediate(String),
}

/// Failures while loading a program from storage.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program: {0}")]
    Io(#[from] io::Error),

    /// The program file is not a JSON array of strings.
    #[error("malformed program file: {0}")]
    Json(#[from] serde_json::Error),

    /// One instruction failed to decode.
    #[error("instruction {index}: {source}")]
    Decode {
        /// Position of the instruction in the program.
        index: usize,
        /// Underlying decode failure.
        #[source]
        source: DecodeError,
    },
}

/// Invalid simulator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Renaming needs at least one physical register beyond the architectural set.
    #[error("need more than {arch} physical registers, got {phys}")]
    TooFewPhysicalRegisters {
        /// Architectural register count.
        arch: usize,
        /// Configured physical register count.
        phys: usize,
    },

    /// A width or capacity parameter was zero.
    #[error("`{0}` must be non-zero")]
    Zero(&'static str),

    /// A structure cannot hold one full fetch batch, so dispatch could never proceed.
    #[error("`{structure}` holds {capacity} but a fetch batch is {fetch_width}")]
    SmallerThanFetchBatch {
        /// Offending structure.
        structure: &'static str,
        /// Its capacity.
        capacity: usize,
        /// Configured fetch width.
        fetch_width: usize,
    },
}

/// Top-level simulation error reported to drivers.
#[derive(Debug, Error)]
pub enum SimError {
    /// Loading the program failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The configuration was rejected.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Reading or writing an auxiliary file failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// Encoding or decoding JSON failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The run was aborted by the cycle safety cap before the pipeline drained.
    #[error("simulation aborted: cycle limit of {limit} reached before the pipeline drained")]
    CycleLimit {
        /// The cap that was hit.
        limit: u64,
    },
}
