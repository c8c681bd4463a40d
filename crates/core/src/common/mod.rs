//! Common utilities and types used throughout the MIPS-Lite simulator.
//!
//! This module provides fundamental building blocks that are shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** System-wide constants for memory, instruction encoding, and registers.
//! 2. **Error Handling:** The fault taxonomy raised by the execution engine.
//! 3. **Register Management:** The 32-entry architectural register file.

/// Common constants used throughout the simulator.
pub mod constants;

/// Fault types raised by the execution engine.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_WORDS, REGISTER_COUNT, WORD_BYTES};
pub use error::Fault;
pub use reg::RegisterFile;
