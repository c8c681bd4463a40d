//! Memory Access Semantics.
//!
//! Tests for the bounds-checked word load/store path used by LW and SW,
//! and for the fetch path's bounds discipline.

use mlsim_core::common::Fault;
use mlsim_core::config::Config;
use mlsim_core::core::Cpu;
use mlsim_core::isa::decode;
use pretty_assertions::assert_eq;

use crate::common::builder::InstructionBuilder;

/// Words in the test memory image.
const MEM_WORDS: usize = 16;

fn cpu() -> Cpu {
    Cpu::new(vec![0; MEM_WORDS], &Config::default())
}

fn exec(cpu: &mut Cpu, word: u32) -> Result<(), Fault> {
    cpu.execute(&decode(word))
}

#[test]
fn sw_then_lw_round_trips() {
    let mut cpu = cpu();
    cpu.regs.write(1, 0xBEEF);
    cpu.regs.write(2, 8);

    exec(&mut cpu, InstructionBuilder::new().sw(1, 2, 0).encode()).unwrap();
    exec(&mut cpu, InstructionBuilder::new().lw(3, 2, 0).encode()).unwrap();

    assert_eq!(cpu.regs.read(3), 0xBEEF);
    assert_eq!(cpu.memory[2], 0xBEEF);
}

#[test]
fn negative_values_round_trip_through_memory() {
    let mut cpu = cpu();
    cpu.regs.write(1, -12345);
    exec(&mut cpu, InstructionBuilder::new().sw(1, 0, 4).encode()).unwrap();
    exec(&mut cpu, InstructionBuilder::new().lw(3, 0, 4).encode()).unwrap();
    assert_eq!(cpu.regs.read(3), -12345);
}

#[test]
fn effective_address_combines_base_and_offset() {
    let mut cpu = cpu();
    cpu.memory[5] = 42;
    cpu.regs.write(2, 12);
    exec(&mut cpu, InstructionBuilder::new().lw(1, 2, 8).encode()).unwrap();
    assert_eq!(cpu.regs.read(1), 42);
}

#[test]
fn unaligned_address_truncates_to_word_index() {
    // Byte offset 6 addresses word 1: the remainder is discarded.
    let mut cpu = cpu();
    cpu.memory[1] = 7;
    cpu.regs.write(2, 6);
    exec(&mut cpu, InstructionBuilder::new().lw(1, 2, 0).encode()).unwrap();
    assert_eq!(cpu.regs.read(1), 7);
}

#[test]
fn lw_past_end_of_memory_faults() {
    let mut cpu = cpu();
    let addr = (MEM_WORDS * 4) as i32;
    cpu.regs.write(2, addr);
    assert_eq!(
        exec(&mut cpu, InstructionBuilder::new().lw(1, 2, 0).encode()),
        Err(Fault::LoadOutOfBounds(addr as u32))
    );
}

#[test]
fn lw_negative_address_faults() {
    let mut cpu = cpu();
    cpu.regs.write(2, -4);
    assert_eq!(
        exec(&mut cpu, InstructionBuilder::new().lw(1, 2, 0).encode()),
        Err(Fault::LoadOutOfBounds(-4i32 as u32))
    );
}

#[test]
fn sw_out_of_bounds_faults_and_leaves_memory_untouched() {
    let mut cpu = cpu();
    let before = cpu.memory.clone();
    cpu.regs.write(1, 99);
    cpu.regs.write(2, 4096);

    assert_eq!(
        exec(&mut cpu, InstructionBuilder::new().sw(1, 2, 0).encode()),
        Err(Fault::StoreOutOfBounds(4096))
    );
    assert_eq!(cpu.memory, before);
    assert_eq!(cpu.pc, 0);
}

#[test]
fn faulting_lw_does_not_write_rt() {
    let mut cpu = cpu();
    cpu.regs.write(1, 55);
    cpu.regs.write(2, 9999);
    let _ = exec(&mut cpu, InstructionBuilder::new().lw(1, 2, 0).encode());
    assert_eq!(cpu.regs.read(1), 55);
}

#[test]
fn fetch_within_bounds_returns_word() {
    let mut cpu = cpu();
    cpu.memory[3] = 0xDEAD_BEEF;
    cpu.pc = 12;
    assert_eq!(cpu.fetch(), Ok(0xDEAD_BEEF));
}

#[test]
fn fetch_past_end_of_memory_faults() {
    let mut cpu = cpu();
    cpu.pc = (MEM_WORDS * 4) as u32;
    assert_eq!(cpu.fetch(), Err(Fault::FetchOutOfBounds(cpu.pc)));
}
