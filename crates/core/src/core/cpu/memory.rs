//! Memory Access Helpers.
//!
//! This module provides the bounds-checked word load/store interface used by
//! LW and SW. It performs the following:
//! 1. **Address Resolution:** Converts a byte address to a word index by truncating division.
//! 2. **Bounds Enforcement:** Converts any out-of-range access into a [`Fault`] instead of a panic.
//!
//! Addresses are conceptually word-aligned; an unaligned byte address is not
//! rejected, its remainder is simply discarded by the division, matching the
//! architecture's word-granularity addressing.

use super::Cpu;
use crate::common::Fault;
use crate::common::constants::WORD_BYTES;

impl Cpu {
    /// Loads the word at a byte address.
    ///
    /// # Arguments
    ///
    /// * `addr` - Signed effective byte address (`rs + imm`).
    ///
    /// # Returns
    ///
    /// The word reinterpreted as a signed register value, or
    /// [`Fault::LoadOutOfBounds`] when the address falls outside memory.
    pub fn load_word(&self, addr: i32) -> Result<i32, Fault> {
        let index = self
            .word_index(addr)
            .ok_or(Fault::LoadOutOfBounds(addr as u32))?;
        Ok(self.memory[index] as i32)
    }

    /// Stores a word at a byte address.
    ///
    /// # Arguments
    ///
    /// * `addr` - Signed effective byte address (`rs + imm`).
    /// * `val` - Register value to store.
    ///
    /// # Returns
    ///
    /// `Ok(())`, or [`Fault::StoreOutOfBounds`] when the address falls
    /// outside memory. Memory is untouched on failure.
    pub fn store_word(&mut self, addr: i32, val: i32) -> Result<(), Fault> {
        let index = self
            .word_index(addr)
            .ok_or(Fault::StoreOutOfBounds(addr as u32))?;
        self.memory[index] = val as u32;
        Ok(())
    }

    /// Resolves a signed byte address to an in-bounds word index.
    ///
    /// Negative addresses have no word index. The remainder of the division
    /// is truncated.
    fn word_index(&self, addr: i32) -> Option<usize> {
        if addr < 0 {
            return None;
        }
        let index = (addr as u32 / WORD_BYTES) as usize;
        (index < self.memory.len()).then_some(index)
    }
}
