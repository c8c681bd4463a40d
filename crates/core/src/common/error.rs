//! Fault definitions.
//!
//! This module defines the error handling mechanism for the simulator core. It provides:
//! 1. **Fault Representation:** Encompassing all unrecoverable conditions the engine can raise.
//! 2. **Error Handling:** Integrating with standard Rust error traits for system-level reporting.
//!
//! Every fault is fatal to the simulation: the driving loop stops and surfaces
//! the fault to the caller. The core performs no retries: decode is pure and
//! execute is deterministic, so nothing is transient.

use std::fmt;

/// Unrecoverable conditions raised by the execution engine.
///
/// A fault terminates the simulation immediately. The engine guarantees that
/// no architectural state has been mutated by the faulting instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fault {
    /// R-format instruction with a funct code outside the recognized set.
    ///
    /// The associated value is the offending 6-bit funct code.
    UnsupportedFunct(u32),

    /// I- or J-format instruction with an opcode outside the recognized set.
    ///
    /// The associated value is the offending 6-bit opcode.
    UnsupportedOpcode(u32),

    /// Instruction fetch from a byte address outside the memory image.
    ///
    /// The associated value is the faulting program counter.
    FetchOutOfBounds(u32),

    /// Load (LW) from a byte address outside the memory image.
    ///
    /// The associated value is the faulting effective address.
    LoadOutOfBounds(u32),

    /// Store (SW) to a byte address outside the memory image.
    ///
    /// The associated value is the faulting effective address.
    StoreOutOfBounds(u32),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::UnsupportedFunct(funct) => {
                write!(f, "unsupported R-type funct code {funct:#04x}")
            }
            Fault::UnsupportedOpcode(opcode) => {
                write!(f, "unsupported opcode {opcode:#04x}")
            }
            Fault::FetchOutOfBounds(addr) => {
                write!(f, "instruction fetch out of bounds at {addr:#010x}")
            }
            Fault::LoadOutOfBounds(addr) => {
                write!(f, "load out of bounds at {addr:#010x}")
            }
            Fault::StoreOutOfBounds(addr) => {
                write!(f, "store out of bounds at {addr:#010x}")
            }
        }
    }
}

impl std::error::Error for Fault {}
