//! Simulator: the driving fetch-decode-execute loop.
//!
//! Owns the execution engine and advances it one instruction at a time until
//! the engine leaves the running state or raises a fault. The loop is
//! strictly sequential: fetch(n) precedes execute(n), which precedes
//! fetch(n+1). There is no instruction limit and no watchdog: a program
//! that never halts runs until it faults or forever.

use tracing::trace;

use crate::common::Fault;
use crate::config::Config;
use crate::core::Cpu;
use crate::isa::decode;

/// Top-level simulator owning the CPU architectural state.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The execution engine.
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a new simulator with the given memory image and configuration.
    ///
    /// # Arguments
    ///
    /// * `memory` - Pre-populated word image from the loader.
    /// * `config` - Simulator configuration.
    pub fn new(memory: Vec<u32>, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(memory, config),
        }
    }

    /// Advances the simulation by one instruction: fetch, decode, execute.
    ///
    /// A no-op once the engine has halted.
    ///
    /// # Returns
    ///
    /// `Ok(())`, or the [`Fault`] that terminated the simulation.
    pub fn step(&mut self) -> Result<(), Fault> {
        if !self.cpu.running {
            return Ok(());
        }
        let word = self.cpu.fetch()?;
        let inst = decode(word);
        trace!(pc = self.cpu.pc, word = format_args!("{word:#010x}"), "step");
        self.cpu.execute(&inst)
    }

    /// Runs the simulation until the engine halts.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the program reaches HALT, or the [`Fault`] that
    /// terminated it early.
    pub fn run(&mut self) -> Result<(), Fault> {
        while self.cpu.running {
            self.step()?;
        }
        Ok(())
    }
}
