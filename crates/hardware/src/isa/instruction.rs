//! Instruction records.
//!
//! Provides the typed form of an instruction as consumed by rename/dispatch:
//! opcode, destination, operand A and operand B (register or immediate).

use std::fmt;

use serde::Serialize;

/// Operation performed by an instruction.
///
/// The core tracks operand readiness only, so the opcode is carried through
/// the integer queue for observability and to select the immediate form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opcode {
    /// Register-register addition.
    Add,
    /// Register-immediate addition.
    Addi,
    /// Register-register subtraction.
    Sub,
    /// Unsigned multiplication.
    Mulu,
    /// Unsigned division.
    Divu,
    /// Unsigned remainder.
    Remu,
}

impl Opcode {
    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Addi => "addi",
            Self::Sub => "sub",
            Self::Mulu => "mulu",
            Self::Divu => "divu",
            Self::Remu => "remu",
        }
    }

    /// Looks up an opcode by mnemonic.
    pub fn from_mnemonic(s: &str) -> Option<Self> {
        match s {
            "add" => Some(Self::Add),
            "addi" => Some(Self::Addi),
            "sub" => Some(Self::Sub),
            "mulu" => Some(Self::Mulu),
            "divu" => Some(Self::Divu),
            "remu" => Some(Self::Remu),
            _ => None,
        }
    }

    /// Whether operand B is an immediate rather than a register.
    #[inline]
    pub const fn has_immediate(self) -> bool {
        matches!(self, Self::Addi)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Second source operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandB {
    /// Architectural register index.
    Reg(usize),
    /// Immediate value (only for `addi`).
    Imm(i64),
}

/// A decoded instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Operation.
    pub opcode: Opcode,
    /// Destination architectural register.
    pub rd: usize,
    /// Operand A architectural register.
    pub rs1: usize,
    /// Operand B.
    pub op_b: OperandB,
}

impl Instruction {
    /// Builds a register-register instruction.
    pub const fn reg(opcode: Opcode, rd: usize, rs1: usize, rs2: usize) -> Self {
        Self {
            opcode,
            rd,
            rs1,
            op_b: OperandB::Reg(rs2),
        }
    }

    /// Builds an `addi`.
    pub const fn addi(rd: usize, rs1: usize, imm: i64) -> Self {
        Self {
            opcode: Opcode::Addi,
            rd,
            rs1,
            op_b: OperandB::Imm(imm),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op_b {
            OperandB::Reg(rs2) => write!(f, "{} x{}, x{}, x{}", self.opcode, self.rd, self.rs1, rs2),
            OperandB::Imm(imm) => write!(f, "{} x{}, x{}, {}", self.opcode, self.rd, self.rs1, imm),
        }
    }
}
