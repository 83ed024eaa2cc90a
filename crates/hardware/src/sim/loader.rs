//! Program Loader.
//!
//! Reads an instruction stream from storage and decodes it. It performs:
//! 1. **File loading:** Reads a JSON array of assembly strings from disk.
//! 2. **Validation:** Decodes every line, rejecting the program at the first
//!    malformed instruction (with its index) so the core only ever sees
//!    well-formed records.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::error::LoadError;
use crate::isa::{Instruction, decode};

/// Loads and decodes a program file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, [`LoadError::Json`] if
/// it is not a JSON array of strings, and [`LoadError::Decode`] for the first
/// malformed instruction.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<Instruction>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let program = parse_program(&text)?;
    info!("loaded {} instructions from {}", program.len(), path.display());
    Ok(program)
}

/// Decodes a program from JSON text (`["addi x1, x0, 5", ...]`).
///
/// # Errors
///
/// Returns [`LoadError::Json`] or [`LoadError::Decode`].
pub fn parse_program(json: &str) -> Result<Vec<Instruction>, LoadError> {
    let lines: Vec<String> = serde_json::from_str(json)?;
    decode_program(&lines)
}

/// Decodes a sequence of assembly lines.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] for the first line that fails to decode.
pub fn decode_program<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Instruction>, LoadError> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            decode(line.as_ref()).map_err(|source| LoadError::Decode { index, source })
        })
        .collect()
}
