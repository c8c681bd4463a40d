//! Major Opcodes.
//!
//! Defines the opcode values (bits 31-26) for I- and J-format instructions.
//! Opcode 0 selects the R format; the operation there is chosen by the
//! funct field instead (see [`crate::isa::funct`]).

/// R-format instruction group (operation selected by funct).
pub const OP_RTYPE: u32 = 0x00;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Jump and link (JAL). Decodes as J-format; not executable in this subset.
pub const OP_JAL: u32 = 0x03;

/// Branch if equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Branch if not equal (BNE).
pub const OP_BNE: u32 = 0x05;

/// Add immediate (ADDI).
pub const OP_ADDI: u32 = 0x08;

/// Set on less than immediate (SLTI).
pub const OP_SLTI: u32 = 0x0A;

/// AND immediate (ANDI).
pub const OP_ANDI: u32 = 0x0C;

/// OR immediate (ORI).
pub const OP_ORI: u32 = 0x0D;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0x0F;

/// Load word (LW).
pub const OP_LW: u32 = 0x23;

/// Store word (SW).
pub const OP_SW: u32 = 0x2B;
