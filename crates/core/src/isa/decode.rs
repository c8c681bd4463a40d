//! Instruction Decoder.
//!
//! This module handles the decoding of 32-bit instruction encodings into the
//! structured [`Instruction`] format. It selects the instruction format from
//! the opcode, extracts the fields each format carries, and sign-extends the
//! 16-bit immediate of I-format instructions.

use crate::isa::instruction::{Instruction, InstructionBits};
use crate::isa::opcodes;

/// Number of valid bits in the I-format immediate field.
const IMMEDIATE_BITS: u32 = 16;

/// Decodes an instruction word into its structured form.
///
/// Pure and total over the 32-bit input domain: every word decodes to some
/// variant, and unrecognized opcodes still decode structurally (as I format).
/// Operation legality is judged later by the execution engine, not here.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// The decoded [`Instruction`] variant determined by the opcode field:
/// opcode 0 yields `R`, opcodes 2 and 3 yield `J`, everything else yields `I`.
pub fn decode(word: u32) -> Instruction {
    match word.opcode() {
        opcodes::OP_RTYPE => Instruction::R {
            rs: word.rs(),
            rt: word.rt(),
            rd: word.rd(),
            shamt: word.shamt(),
            funct: word.funct(),
        },
        opcode @ (opcodes::OP_J | opcodes::OP_JAL) => Instruction::J {
            opcode,
            target: word.target(),
        },
        opcode => Instruction::I {
            opcode,
            rs: word.rs(),
            rt: word.rt(),
            imm: sign_extend(word.immediate(), IMMEDIATE_BITS),
        },
    }
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = u32::BITS - bits;
    ((val << shift) as i32) >> shift
}
