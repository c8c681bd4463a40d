//! R-Format Function Codes.
//!
//! The `funct` field (bits 5-0) selects the operation for instructions
//! sharing opcode 0. Funct codes and opcodes are distinct namespaces: a
//! funct value and an opcode value that happen to be numerically equal
//! (e.g. SLL's 0x00 and `OP_RTYPE`'s 0x00) name unrelated operations.

/// Shift left logical.
pub const SLL: u32 = 0x00;

/// Shift right logical.
pub const SRL: u32 = 0x02;

/// Halt the simulation (non-standard funct code).
pub const HALT: u32 = 0x0C;

/// Add.
pub const ADD: u32 = 0x20;

/// Subtract.
pub const SUB: u32 = 0x22;

/// Bitwise AND.
pub const AND: u32 = 0x24;

/// Bitwise OR.
pub const OR: u32 = 0x25;

/// Set on less than (signed).
pub const SLT: u32 = 0x2A;
