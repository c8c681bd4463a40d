//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the MIPS-like instruction fields
//! (MSB-first numbering, bit 31 highest) and the decoded instruction type.

use crate::common::constants::{
    FUNCT_MASK, IMMEDIATE_MASK, OPCODE_MASK, OPCODE_SHIFT, RD_SHIFT, REG_MASK, RS_SHIFT, RT_SHIFT,
    SHAMT_SHIFT, TARGET_MASK,
};

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract every field used by the three instruction
/// formats from a 32-bit instruction encoding. All extractors are pure and
/// total: they are meaningful only for the formats that carry the field,
/// but never fail.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    ///
    /// The opcode determines the instruction format: 0 selects the R format,
    /// 2 and 3 the J format, everything else the I format.
    fn opcode(&self) -> u32;

    /// Extracts the source register field (bits 25-21).
    ///
    /// Returns the 5-bit register index (0-31) for the first operand.
    fn rs(&self) -> usize;

    /// Extracts the target register field (bits 20-16).
    ///
    /// Second source for R-format instructions; source or destination for
    /// I-format instructions depending on the operation.
    fn rt(&self) -> usize;

    /// Extracts the destination register field (bits 15-11, R format only).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 10-6, R format only).
    ///
    /// Used by SLL and SRL. Returns the 5-bit shift distance.
    fn shamt(&self) -> u32;

    /// Extracts the funct field (bits 5-0, R format only).
    ///
    /// Selects the operation within the shared opcode 0.
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate field (bits 15-0, I format only).
    ///
    /// The value is returned zero-extended; sign extension is applied by
    /// the decoder.
    fn immediate(&self) -> u32;

    /// Extracts the 26-bit jump target field (bits 25-0, J format only).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn immediate(&self) -> u32 {
        self & IMMEDIATE_MASK
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// A decoded instruction.
///
/// Exactly one variant is produced per decode; the variant is fully
/// determined by the opcode field. The decoder judges structure only;
/// whether the opcode or funct names a supported operation is decided by
/// the execution engine at dispatch time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register-register format (opcode 0).
    R {
        /// First source register index.
        rs: usize,
        /// Second source register index.
        rt: usize,
        /// Destination register index.
        rd: usize,
        /// Shift amount for SLL/SRL.
        shamt: u32,
        /// Operation selector.
        funct: u32,
    },

    /// Register-immediate format.
    I {
        /// Operation selector.
        opcode: u32,
        /// Source register index.
        rs: usize,
        /// Target register index (source or destination per operation).
        rt: usize,
        /// Immediate operand, sign-extended from 16 bits.
        imm: i32,
    },

    /// Jump format (opcodes 2 and 3).
    J {
        /// Operation selector.
        opcode: u32,
        /// Unsigned 26-bit word target.
        target: u32,
    },
}
