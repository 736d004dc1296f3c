//! Integration tests for the URM runtime

use proptest::prelude::*;
use urm_assembler::assemble;
use urm_runtime::{HaltReason, Vm, VmConfig};
use urm_spec::{Instruction, Program, RegisterStore};

fn vm_for(source: &str, config: VmConfig) -> Vm {
    let assembly = assemble(source).expect("Assembly failed");
    Vm::new(assembly.program, assembly.registers, config)
}

fn single(instruction: Instruction, registers: RegisterStore) -> Vm {
    Vm::new(Program::new(vec![instruction]), registers, VmConfig::default())
}

#[test]
fn test_increment_twice() {
    let result = vm_for("R 0 = 5\nS(0)\nS(0)", VmConfig::default()).run().unwrap();

    assert_eq!(result.registers.get(0), Some(7));
    assert_eq!(result.terminated_at, 3);
}

#[test]
fn test_infinite_loop_is_bounded_by_step_limit() {
    let result = vm_for("Z(1)\nJ(0,1,1)", VmConfig::with_max_steps(10_000))
        .run()
        .unwrap();

    assert_eq!(result.halt_reason, HaltReason::StepLimit { limit: 10_000 });
    assert_eq!(result.registers.get(0), Some(0));
    assert_eq!(result.registers.get(1), Some(0));
}

#[test]
fn test_read_only_registers_appear_in_dump() {
    let result = vm_for("J(4, 5, 1)\nZ(0)", VmConfig::with_max_steps(1))
        .run()
        .unwrap();

    let indices: Vec<_> = result.registers.iter().map(|(index, _)| index).collect();
    assert_eq!(indices, vec![4, 5]);
}

#[test]
fn test_addition_program() {
    // R0 = R0 + R1
    let source = r#"
        R 0 = 12
        R 1 = 30
        Z(2)
        J(1, 2, 6)
        S(0)
        S(2)
        J(0, 0, 2)
    "#;
    let result = vm_for(source, VmConfig::default()).run().unwrap();

    assert_eq!(result.registers.get(0), Some(42));
    assert_eq!(result.registers.get(2), Some(30));
    assert_eq!(result.terminated_at, 6);
}

#[test]
fn test_multiplication_program() {
    // R2 = R0 * R1
    let source = r#"
        R 0 = 6
        R 1 = 7
        Z(2)
        Z(3)
        J(3, 1, 11)
        Z(4)
        J(4, 0, 9)
        S(2)
        S(4)
        J(0, 0, 5)
        S(3)
        J(0, 0, 3)
    "#;
    let result = vm_for(source, VmConfig::default()).run().unwrap();
    assert_eq!(result.registers.get(2), Some(42));
    assert_eq!(result.terminated_at, 11);
}

#[test]
fn test_jump_to_zero_reports_position_zero() {
    let result = vm_for("S(0)\nJ(0, 1, 0)\nS(0)\nJ(0, 0, 0)", VmConfig::default())
        .run()
        .unwrap();

    assert_eq!(result.halt_reason, HaltReason::JumpBeforeStart);
    assert_eq!(result.terminated_at, 0);
    assert_eq!(result.registers.get(0), Some(2));
}

proptest! {
    #[test]
    fn test_zero_clears(register in any::<u64>(), prior in any::<u64>()) {
        let mut registers = RegisterStore::new();
        registers.write(register, prior);
        let mut vm = single(Instruction::Zero { register }, registers);
        vm.step().unwrap();
        prop_assert_eq!(vm.state().registers.get(register), Some(0));
    }

    #[test]
    fn test_increment_adds_one(register in any::<u64>(), prior in proptest::option::of(0u64..u64::MAX)) {
        let mut registers = RegisterStore::new();
        if let Some(value) = prior {
            registers.write(register, value);
        }
        let mut vm = single(Instruction::Increment { register }, registers);
        vm.step().unwrap();
        prop_assert_eq!(vm.state().registers.get(register), Some(prior.unwrap_or(0) + 1));
    }

    #[test]
    fn test_copy_transfers(source in 0u64..16, destination in 0u64..16, a in any::<u64>(), b in any::<u64>()) {
        let mut registers = RegisterStore::new();
        registers.write(source, a);
        if destination != source {
            registers.write(destination, b);
        }
        let mut vm = single(Instruction::Copy { source, destination }, registers);
        vm.step().unwrap();
        prop_assert_eq!(vm.state().registers.get(destination), Some(a));
        prop_assert_eq!(vm.state().registers.get(source), Some(a));
    }

    #[test]
    fn test_jump_targets(a in 0u64..4, b in 0u64..4, target in 1usize..6) {
        let mut registers = RegisterStore::new();
        registers.write(0, a);
        registers.write(1, b);
        let program = Program::new(vec![
            Instruction::Increment { register: 9 },
            Instruction::JumpIfEqual { left: 0, right: 1, target },
            Instruction::Increment { register: 9 },
            Instruction::Increment { register: 9 },
        ]);
        let mut vm = Vm::new(program, registers, VmConfig::default());
        vm.step().unwrap();
        vm.step().unwrap();

        let expected = if a == b { target } else { 3 };
        prop_assert_eq!(vm.state().position(), expected);
    }
}
