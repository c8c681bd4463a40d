//! MIPS-Lite instruction-set simulator library.
//!
//! This crate implements a simulator for a reduced MIPS-like 32-bit
//! architecture with the following:
//! 1. **ISA:** Field extraction and a total, pure decoder producing a tagged R/I/J instruction.
//! 2. **Core:** The execution engine owning registers, word-addressable memory, pc, and the running flag.
//! 3. **Simulation:** Hex image loader and the sequential fetch-decode-execute loop.
//! 4. **Statistics:** Per-operation execution counters in the dual funct/opcode key space.
//! 5. **Configuration:** Defaults plus JSON-deserializable overrides.

/// Common types and constants (errors, registers, encoding constants).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU core (execution engine, memory access).
pub mod core;
/// Instruction set (decode, instruction formats, opcodes, funct codes).
pub mod isa;
/// Program loader and driving loop.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Execution engine; holds registers, memory, pc, and counters.
pub use crate::core::Cpu;
/// Driving loop; construct with `Simulator::new` and call `run`.
pub use crate::sim::Simulator;
