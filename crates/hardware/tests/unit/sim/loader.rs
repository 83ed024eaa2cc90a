//! Program file loading.

use std::fs;
use std::io::Write;

use ooosim_core::common::error::{DecodeError, LoadError};
use ooosim_core::isa::{Instruction, Opcode};
use ooosim_core::sim::loader::{load_program, parse_program};
use pretty_assertions::assert_eq;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn loads_program_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"["addi x1, x0, 5", "addi x2,x0,10", "add x3, x1, x2"]"#)
        .unwrap();

    let program = load_program(file.path()).unwrap();
    assert_eq!(
        program,
        vec![
            Instruction::addi(1, 0, 5),
            Instruction::addi(2, 0, 10),
            Instruction::reg(Opcode::Add, 3, 1, 2),
        ]
    );
}

#[test]
fn empty_array_is_empty_program() {
    assert_eq!(parse_program("[]").unwrap(), Vec::new());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_program(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn non_string_array_is_json_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prog.json");
    fs::write(&path, r#"{"program": [1, 2]}"#).unwrap();
    assert!(matches!(load_program(&path), Err(LoadError::Json(_))));
}

#[test]
fn decode_error_carries_index() {
    let err = parse_program(r#"["addi x1, x0, 1", "add x2, x1", "sub x3, x1, x1"]"#).unwrap_err();
    match err {
        LoadError::Decode { index, source } => {
            assert_eq!(index, 1);
            assert_eq!(
                source,
                DecodeError::OperandCount {
                    opcode: "add".into(),
                    found: 2,
                }
            );
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[test]
fn decode_error_message_names_instruction() {
    let err = parse_program(r#"["nop"]"#).unwrap_err();
    assert_eq!(err.to_string(), "instruction 0: unknown opcode `nop`");
}
