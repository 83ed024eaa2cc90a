//! Assembly Text Decoder.
//!
//! Turns one line of assembly (`addi x1, x0, 5`, `add x3,x1,x2`) into an
//! [`Instruction`]. Commas and runs of whitespace are interchangeable
//! separators. Register operands are `x0`..`x31`; the `addi` immediate is a
//! signed decimal or `0x`-prefixed hexadecimal integer.

use crate::common::constants::ARCH_REGS;
use crate::common::error::DecodeError;
use crate::isa::instruction::{Instruction, Opcode, OperandB};

/// Number of operands every instruction in the set takes.
const OPERAND_COUNT: usize = 3;

/// Decodes a single line of assembly.
///
/// # Errors
///
/// Returns a [`DecodeError`] for an unknown mnemonic, a wrong operand count,
/// a malformed register name or an unparsable immediate.
pub fn decode(line: &str) -> Result<Instruction, DecodeError> {
    let mut tokens = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let mnemonic = tokens.next().ok_or(DecodeError::Empty)?;
    let opcode = Opcode::from_mnemonic(&mnemonic.to_ascii_lowercase())
        .ok_or_else(|| DecodeError::UnknownOpcode(mnemonic.to_string()))?;

    let operands: Vec<&str> = tokens.collect();
    if operands.len() != OPERAND_COUNT {
        return Err(DecodeError::OperandCount {
            opcode: opcode.mnemonic().to_string(),
            found: operands.len(),
        });
    }

    let rd = parse_register(operands[0])?;
    let rs1 = parse_register(operands[1])?;
    let op_b = if opcode.has_immediate() {
        OperandB::Imm(parse_immediate(operands[2])?)
    } else {
        OperandB::Reg(parse_register(operands[2])?)
    };

    Ok(Instruction {
        opcode,
        rd,
        rs1,
        op_b,
    })
}

/// Parses `xN` with `N < ARCH_REGS`.
fn parse_register(token: &str) -> Result<usize, DecodeError> {
    let invalid = || DecodeError::InvalidRegister(token.to_string());
    let digits = token
        .strip_prefix('x')
        .or_else(|| token.strip_prefix('X'))
        .ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let idx: usize = digits.parse().map_err(|_| invalid())?;
    if idx >= ARCH_REGS {
        return Err(invalid());
    }
    Ok(idx)
}

/// Parses a signed decimal or `0x` hexadecimal immediate.
fn parse_immediate(token: &str) -> Result<i64, DecodeError> {
    let invalid = || DecodeError::InvalidImmediate(token.to_string());
    let (sign, body) = match token.as_bytes().first() {
        Some(b'-' | b'+') => token.split_at(1),
        _ => ("", token),
    };
    match body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        Some(hex) if hex.starts_with(['+', '-']) => Err(invalid()),
        // Sign folded back in so `-0x8000000000000000` reaches i64::MIN.
        Some(hex) => i64::from_str_radix(&format!("{sign}{hex}"), 16).map_err(|_| invalid()),
        None => token.parse::<i64>().map_err(|_| invalid()),
    }
}
