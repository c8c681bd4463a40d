//! Instruction Execution.
//!
//! This module implements the per-operation semantics of the instruction set.
//! It performs the following:
//! 1. **Dispatch:** Exhaustive matching on the decoded variant, then on funct (R) or opcode (I/J).
//! 2. **Arithmetic Semantics:** Two's-complement 32-bit arithmetic with well-defined wraparound.
//! 3. **Control Flow:** Branch targets relative to the next instruction, absolute jumps, and HALT.
//! 4. **Accounting:** Per-operation counters, incremented after each successful instruction.
//!
//! A fault (unsupported code, out-of-bounds access) is raised before any
//! architectural state is mutated, so a failing instruction is a no-op.

use super::Cpu;
use crate::common::Fault;
use crate::common::constants::{IMMEDIATE_MASK, PC_REGION_MASK, WORD_BYTES};
use crate::isa::instruction::Instruction;
use crate::isa::{funct, opcodes};

impl Cpu {
    /// Executes one decoded instruction, mutating architectural state in place.
    ///
    /// # Arguments
    ///
    /// * `inst` - The decoded instruction to execute.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success. [`Fault::UnsupportedFunct`] /
    /// [`Fault::UnsupportedOpcode`] when the operation selector is outside
    /// the recognized set, or a bounds fault from LW/SW. No state is mutated
    /// on failure.
    pub fn execute(&mut self, inst: &Instruction) -> Result<(), Fault> {
        if self.trace {
            eprintln!("EX  pc={:#010x} {inst:?}", self.pc);
        }
        match *inst {
            Instruction::R {
                rs,
                rt,
                rd,
                shamt,
                funct,
            } => self.execute_r(rs, rt, rd, shamt, funct),
            Instruction::I { opcode, rs, rt, imm } => self.execute_i(opcode, rs, rt, imm),
            Instruction::J { opcode, target } => self.execute_j(opcode, target),
        }
    }

    /// Executes an R-format instruction, dispatching on the funct field.
    fn execute_r(
        &mut self,
        rs: usize,
        rt: usize,
        rd: usize,
        shamt: u32,
        funct_code: u32,
    ) -> Result<(), Fault> {
        let a = self.regs.read(rs);
        let b = self.regs.read(rt);

        match funct_code {
            funct::ADD => self.regs.write(rd, a.wrapping_add(b)),
            funct::SUB => self.regs.write(rd, a.wrapping_sub(b)),
            funct::AND => self.regs.write(rd, a & b),
            funct::OR => self.regs.write(rd, a | b),
            funct::SLT => self.regs.write(rd, i32::from(a < b)),
            // Shifts operate on rt; the operand is treated as unsigned for
            // the shift and reinterpreted as a register value afterwards.
            funct::SLL => self.regs.write(rd, ((b as u32) << shamt) as i32),
            funct::SRL => self.regs.write(rd, ((b as u32) >> shamt) as i32),
            funct::HALT => {
                self.running = false;
                self.stats.record_funct(funct_code);
                // HALT leaves the program counter where it is.
                return Ok(());
            }
            _ => return Err(Fault::UnsupportedFunct(funct_code)),
        }

        self.pc = self.pc.wrapping_add(WORD_BYTES);
        self.stats.record_funct(funct_code);
        Ok(())
    }

    /// Executes an I-format instruction, dispatching on the opcode field.
    fn execute_i(&mut self, opcode: u32, rs: usize, rt: usize, imm: i32) -> Result<(), Fault> {
        let a = self.regs.read(rs);

        match opcode {
            opcodes::OP_ADDI => {
                self.regs.write(rt, a.wrapping_add(imm));
                self.pc = self.pc.wrapping_add(WORD_BYTES);
            }
            // ANDI and ORI re-mask the sign-extended immediate back to its
            // low 16 bits: a negative immediate acts as a 16-bit unsigned
            // operand here, unlike ADDI/SLTI which see it signed.
            opcodes::OP_ANDI => {
                self.regs.write(rt, a & (imm & IMMEDIATE_MASK as i32));
                self.pc = self.pc.wrapping_add(WORD_BYTES);
            }
            opcodes::OP_ORI => {
                self.regs.write(rt, a | (imm & IMMEDIATE_MASK as i32));
                self.pc = self.pc.wrapping_add(WORD_BYTES);
            }
            opcodes::OP_SLTI => {
                self.regs.write(rt, i32::from(a < imm));
                self.pc = self.pc.wrapping_add(WORD_BYTES);
            }
            opcodes::OP_LUI => {
                self.regs
                    .write(rt, (((imm & IMMEDIATE_MASK as i32) as u32) << 16) as i32);
                self.pc = self.pc.wrapping_add(WORD_BYTES);
            }
            opcodes::OP_BEQ => {
                self.pc = if a == self.regs.read(rt) {
                    Self::branch_target(self.pc, imm)
                } else {
                    self.pc.wrapping_add(WORD_BYTES)
                };
            }
            opcodes::OP_BNE => {
                self.pc = if a == self.regs.read(rt) {
                    self.pc.wrapping_add(WORD_BYTES)
                } else {
                    Self::branch_target(self.pc, imm)
                };
            }
            opcodes::OP_LW => {
                let val = self.load_word(a.wrapping_add(imm))?;
                self.regs.write(rt, val);
                self.pc = self.pc.wrapping_add(WORD_BYTES);
            }
            opcodes::OP_SW => {
                self.store_word(a.wrapping_add(imm), self.regs.read(rt))?;
                self.pc = self.pc.wrapping_add(WORD_BYTES);
            }
            _ => return Err(Fault::UnsupportedOpcode(opcode)),
        }

        self.stats.record_opcode(opcode);
        Ok(())
    }

    /// Executes a J-format instruction, dispatching on the opcode field.
    fn execute_j(&mut self, opcode: u32, target: u32) -> Result<(), Fault> {
        match opcode {
            opcodes::OP_J => {
                // Absolute jump within the current 256 MiB region: the high
                // nibble of the program counter is preserved.
                self.pc = (self.pc & PC_REGION_MASK) | (target << 2);
            }
            _ => return Err(Fault::UnsupportedOpcode(opcode)),
        }

        self.stats.record_opcode(opcode);
        Ok(())
    }

    /// Computes a taken-branch target: the offset is in words, relative to
    /// the instruction after the branch.
    fn branch_target(pc: u32, imm: i32) -> u32 {
        pc.wrapping_add(WORD_BYTES).wrapping_add((imm << 2) as u32)
    }
}
