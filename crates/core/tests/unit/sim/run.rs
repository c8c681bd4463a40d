//! End-to-End Program Runs.
//!
//! Whole programs through the fetch-decode-execute loop: straight-line
//! arithmetic, memory traffic, loops built from branches, and fault
//! propagation out of the driving loop.

use mlsim_core::common::Fault;
use mlsim_core::isa::{funct, opcodes};

use crate::common::builder::InstructionBuilder;
use crate::common::harness::TestContext;

#[test]
fn arithmetic_program_runs_to_halt() {
    // r1 = 5; r2 = 3; r3 = r1 + r2; halt.
    let mut ctx = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 5).encode(),
        InstructionBuilder::new().addi(2, 0, 3).encode(),
        InstructionBuilder::new().add(3, 1, 2).encode(),
        InstructionBuilder::new().halt().encode(),
    ]);

    ctx.run().unwrap();

    assert_eq!(ctx.get_reg(3), 8);
    assert!(!ctx.cpu().running);
    assert_eq!(ctx.cpu().stats.instructions_retired, 4);
    assert_eq!(ctx.cpu().stats.opcode_count(opcodes::OP_ADDI), 2);
    assert_eq!(ctx.cpu().stats.funct_count(funct::ADD), 1);
}

#[test]
fn halt_freezes_pc_at_the_halt_instruction() {
    let mut ctx = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 1).encode(),
        InstructionBuilder::new().halt().encode(),
    ]);

    ctx.run().unwrap();

    assert_eq!(ctx.cpu().pc, 4);
}

#[test]
fn store_and_reload_through_memory() {
    // r1 = 0x1234; mem[32] = r1; r2 = mem[32]; halt.
    let mut ctx = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 0x1234).encode(),
        InstructionBuilder::new().sw(1, 0, 32).encode(),
        InstructionBuilder::new().lw(2, 0, 32).encode(),
        InstructionBuilder::new().halt().encode(),
    ]);

    ctx.run().unwrap();

    assert_eq!(ctx.get_reg(2), 0x1234);
    assert_eq!(ctx.get_mem(8), 0x1234);
}

#[test]
fn countdown_loop_with_bne() {
    // r1 = 3; loop: r1 -= 1; bne r1, r0, loop; halt.
    let mut ctx = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 3).encode(),
        InstructionBuilder::new().addi(1, 1, -1).encode(),
        InstructionBuilder::new().bne(1, 0, -2).encode(),
        InstructionBuilder::new().halt().encode(),
    ]);

    ctx.run().unwrap();

    assert_eq!(ctx.get_reg(1), 0);
    // The decrement runs three times, the branch three times.
    assert_eq!(ctx.cpu().stats.opcode_count(opcodes::OP_ADDI), 4);
    assert_eq!(ctx.cpu().stats.opcode_count(opcodes::OP_BNE), 3);
}

#[test]
fn jump_redirects_the_loop() {
    // j 3 skips the poison word at index 1 and 2; target halts.
    let mut ctx = TestContext::new().load_program(&[
        InstructionBuilder::new().j(3).encode(),
        InstructionBuilder::new().opcode(0x3F).encode(),
        InstructionBuilder::new().opcode(0x3F).encode(),
        InstructionBuilder::new().halt().encode(),
    ]);

    ctx.run().unwrap();

    assert!(!ctx.cpu().running);
    assert_eq!(ctx.cpu().stats.opcode_count(opcodes::OP_J), 1);
}

#[test]
fn beq_skips_when_taken() {
    // r1 = r2 = 7; beq skips the poison word.
    let mut ctx = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 7).encode(),
        InstructionBuilder::new().addi(2, 0, 7).encode(),
        InstructionBuilder::new().beq(1, 2, 1).encode(),
        InstructionBuilder::new().opcode(0x3F).encode(),
        InstructionBuilder::new().halt().encode(),
    ]);

    ctx.run().unwrap();
    assert!(!ctx.cpu().running);
}

#[test]
fn unsupported_opcode_stops_the_run() {
    let mut ctx = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 1).encode(),
        InstructionBuilder::new().opcode(0x3F).encode(),
    ]);

    assert_eq!(ctx.run(), Err(Fault::UnsupportedOpcode(0x3F)));
    assert_eq!(ctx.get_reg(1), 1);
}

#[test]
fn running_off_the_end_of_memory_faults_the_fetch() {
    // A single ADDI and nothing but zero words after it: opcode 0 funct 0
    // is SLL, so the engine happily executes no-ops until the image ends.
    let mut ctx = TestContext::new().load_program(&[
        InstructionBuilder::new().addi(1, 0, 1).encode(),
    ]);

    let end = (crate::common::harness::TEST_MEMORY_WORDS * 4) as u32;
    assert_eq!(ctx.run(), Err(Fault::FetchOutOfBounds(end)));
}

#[test]
fn step_after_halt_is_a_no_op() {
    let mut ctx = TestContext::new().load_program(&[InstructionBuilder::new().halt().encode()]);
    ctx.run().unwrap();

    let retired = ctx.cpu().stats.instructions_retired;
    ctx.step().unwrap();
    assert_eq!(ctx.cpu().stats.instructions_retired, retired);
}
