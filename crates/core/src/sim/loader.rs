//! Program Image Loader.
//!
//! This module reads a textual hex image from disk into a zero-filled memory
//! array. It performs:
//! 1. **Parsing:** One 32-bit hexadecimal word per line, an optional `0x` prefix tolerated.
//! 2. **Placement:** Words land at consecutive word indices starting from 0.
//! 3. **Validation:** Malformed lines and oversized programs are load-time errors
//!    and never reach the execution engine.

use std::fs;
use std::path::Path;

use tracing::debug;

/// Errors raised while loading a program image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read program image: {0}")]
    Io(#[from] std::io::Error),

    /// A line was not a 32-bit hexadecimal word.
    #[error("malformed hex word at line {line}: {text:?}")]
    MalformedLine {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line content.
        text: String,
    },

    /// The program has more words than the memory image can hold.
    #[error("program of {lines} words exceeds memory capacity of {capacity} words")]
    ProgramTooLarge {
        /// 1-based index of the first word that did not fit.
        lines: usize,
        /// Memory capacity in words.
        capacity: usize,
    },
}

/// Loads a hex program image into a zero-filled memory array.
///
/// Blank lines are skipped; every other line must parse as one 32-bit
/// hexadecimal word. The returned image always has exactly `capacity_words`
/// entries so the program can address data beyond its own length.
///
/// # Arguments
///
/// * `path` - Path to the image file, one instruction per line.
/// * `capacity_words` - Memory capacity in 32-bit words.
///
/// # Returns
///
/// The populated memory image, or a [`LoadError`] describing the first
/// problem encountered.
pub fn load_hex<P: AsRef<Path>>(path: P, capacity_words: usize) -> Result<Vec<u32>, LoadError> {
    let text = fs::read_to_string(path)?;
    let mut memory = vec![0u32; capacity_words];
    let mut loaded = 0usize;

    for (line_no, line) in text.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let word = word.strip_prefix("0x").unwrap_or(word);

        let parsed = u32::from_str_radix(word, 16).map_err(|_| LoadError::MalformedLine {
            line: line_no + 1,
            text: line.to_string(),
        })?;

        if loaded >= capacity_words {
            return Err(LoadError::ProgramTooLarge {
                lines: loaded + 1,
                capacity: capacity_words,
            });
        }
        memory[loaded] = parsed;
        loaded += 1;
    }

    debug!(words = loaded, capacity = capacity_words, "program loaded");
    Ok(memory)
}
