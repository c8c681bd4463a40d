//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! architectural state of the simulated machine. It coordinates the following:
//! 1. **State Management:** Registers, word-addressable memory, program counter, and the running flag.
//! 2. **Instruction Fetch:** Bounds-checked reads of the word at the current program counter.
//! 3. **Statistics:** Per-operation execution counters for post-run reporting.
//!
//! All state mutation happens through [`Cpu::execute`]; after the run loop
//! exits, the reporting side reads the state through the dump helpers and
//! the public fields without mutating anything.

/// Instruction execution and dispatch.
pub mod execution;

/// Bounds-checked memory access helpers.
pub mod memory;

use crate::common::constants::WORD_BYTES;
use crate::common::{Fault, RegisterFile};
use crate::config::Config;
use crate::stats::SimStats;

/// The execution engine: registers, memory, program counter, and counters.
///
/// Memory is word-addressable: byte addresses are converted to word indices
/// by truncating division by four. The engine is fully sequential: each
/// executed instruction observes all writes of the previous one.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General purpose registers. Index 0 is ordinary and writable.
    pub regs: RegisterFile,
    /// Word-addressable memory image, handed in by the loader.
    pub memory: Vec<u32>,
    /// Byte-address program counter.
    pub pc: u32,
    /// Simulation continues while true; cleared only by HALT.
    pub running: bool,
    /// Per-operation execution counters.
    pub stats: SimStats,
    /// Emit a diagnostic line for every executed instruction.
    pub trace: bool,
}

impl Cpu {
    /// Creates a new CPU with the given memory image and configuration.
    ///
    /// # Arguments
    ///
    /// * `memory` - Pre-populated word image (program plus data), indexed from 0.
    /// * `config` - Simulator configuration.
    ///
    /// # Returns
    ///
    /// A new `Cpu` with cleared registers, pc 0, and the running flag set.
    pub fn new(memory: Vec<u32>, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            memory,
            pc: 0,
            running: true,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Fetches the instruction word at the current program counter.
    ///
    /// # Returns
    ///
    /// The word at `memory[pc / 4]`, or [`Fault::FetchOutOfBounds`] when the
    /// program counter points outside the memory image.
    pub fn fetch(&self) -> Result<u32, Fault> {
        let index = (self.pc / WORD_BYTES) as usize;
        self.memory
            .get(index)
            .copied()
            .ok_or(Fault::FetchOutOfBounds(self.pc))
    }

    /// Dumps the program counter and all register values to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#010x}", self.pc);
        println!("Registers:");
        self.regs.dump();
    }

    /// Dumps every nonzero memory word to stdout, keyed by byte address.
    pub fn dump_memory(&self) {
        println!("Non-zero memory:");
        for (index, word) in self.memory.iter().copied().enumerate() {
            if word != 0 {
                println!("Memory[{}]: {word:#x}", index * WORD_BYTES as usize);
            }
        }
    }
}
