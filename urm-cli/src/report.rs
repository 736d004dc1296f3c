//! Console report formatting

use std::io::{self, Write};
use std::path::Path;

use urm_assembler::AssemblerError;
use urm_runtime::{ExecutionResult, HaltReason, RuntimeError};
use urm_spec::{Program, RegisterStore};

/// `Parse error at [line; column]: message`, `?` when the column is unknown
pub fn write_diagnostic<W: Write>(out: &mut W, err: &AssemblerError) -> io::Result<()> {
    let column = err
        .column()
        .map_or_else(|| "?".to_string(), |column| column.to_string());

    match err {
        AssemblerError::Syntax { kind, .. } => {
            writeln!(out, "Parse error at [{}; {}]: {}.", err.line(), column, kind)
        }
        AssemblerError::Io { source, .. } => {
            writeln!(out, "Parse error at [{}; {}]: {}.", err.line(), column, source)
        }
    }
}

pub fn write_invalid_source<W: Write>(out: &mut W, file: &Path) -> io::Result<()> {
    writeln!(
        out,
        "Process stopped. File \"{}\" contains invalid instructions and can't be executed.",
        file.display()
    )
}

/// One `[reg n]: v` line per materialized register, ascending
pub fn write_registers<W: Write>(out: &mut W, registers: &RegisterStore) -> io::Result<()> {
    for (index, value) in registers.iter() {
        writeln!(out, "[reg {}]: {}", index, value)?;
    }
    Ok(())
}

pub fn write_initial_registers<W: Write>(out: &mut W, registers: &RegisterStore) -> io::Result<()> {
    writeln!(out, "Register's initial values: ")?;
    write_registers(out, registers)
}

/// Numbered instruction listing in canonical form
pub fn write_listing<W: Write>(out: &mut W, program: &Program) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Instructions: ")?;
    for (position, instruction) in program.listing() {
        writeln!(out, "[ins {}]: {}", position, instruction)?;
    }
    Ok(())
}

pub fn write_no_instructions<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "No instructions occurred. Process stopped.")
}

pub fn write_result<W: Write>(out: &mut W, result: &ExecutionResult) -> io::Result<()> {
    writeln!(out)?;
    match result.halt_reason {
        HaltReason::StepLimit { limit } => writeln!(
            out,
            "Step limit of {} reached on instruction {} with results: ",
            limit, result.terminated_at
        )?,
        HaltReason::Completed | HaltReason::JumpBeforeStart => writeln!(
            out,
            "Program terminated on instruction {} with results: ",
            result.terminated_at
        )?,
    }
    write_registers(out, &result.registers)
}

pub fn write_fault<W: Write>(out: &mut W, err: &RuntimeError) -> io::Result<()> {
    writeln!(out, "ERROR: {}. Process stopped.", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use urm_assembler::{Expected, ParseErrorKind};
    use urm_spec::Instruction;

    fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_syntax_diagnostic() {
        let err = AssemblerError::Syntax {
            line: 1,
            column: 6,
            kind: ParseErrorKind::UnexpectedEnd(Expected::CloseParen),
        };
        assert_eq!(
            render(|out| write_diagnostic(out, &err)),
            "Parse error at [1; 6]: Unexpected end of line, expected ')'.\n"
        );
    }

    #[test]
    fn test_io_diagnostic_has_unknown_column() {
        let err = AssemblerError::Io {
            line: 2,
            source: io::Error::new(io::ErrorKind::InvalidData, "invalid UTF-8"),
        };
        assert_eq!(
            render(|out| write_diagnostic(out, &err)),
            "Parse error at [2; ?]: invalid UTF-8.\n"
        );
    }

    #[test]
    fn test_listing() {
        let program = Program::new(vec![
            Instruction::Zero { register: 1 },
            Instruction::JumpIfEqual { left: 0, right: 1, target: 1 },
        ]);
        assert_eq!(
            render(|out| write_listing(out, &program)),
            "\nInstructions: \n[ins 1]: Z(1)\n[ins 2]: J(0, 1, 1)\n"
        );
    }

    #[test]
    fn test_registers_sorted() {
        let registers: RegisterStore = vec![(10, 1), (2, 7)].into_iter().collect();
        assert_eq!(
            render(|out| write_registers(out, &registers)),
            "[reg 2]: 7\n[reg 10]: 1\n"
        );
    }

    #[test]
    fn test_result() {
        let result = ExecutionResult {
            steps: 2,
            halt_reason: HaltReason::Completed,
            terminated_at: 3,
            registers: vec![(0, 7)].into_iter().collect(),
        };
        assert_eq!(
            render(|out| write_result(out, &result)),
            "\nProgram terminated on instruction 3 with results: \n[reg 0]: 7\n"
        );
    }

    #[test]
    fn test_fault() {
        let err = RuntimeError::RegisterOverflow {
            register: 0,
            position: 2,
        };
        assert_eq!(
            render(|out| write_fault(out, &err)),
            "ERROR: Register 0 overflowed at instruction 2. Process stopped.\n"
        );
    }

    #[test]
    fn test_invalid_source() {
        assert_eq!(
            render(|out| write_invalid_source(out, Path::new("add.urm"))),
            "Process stopped. File \"add.urm\" contains invalid instructions and can't be executed.\n"
        );
    }
}
