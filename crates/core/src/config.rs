//! Configuration system for the MIPS-Lite simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory capacity, tracing).
//! 2. **Structures:** Hierarchical config for general behavior and memory sizing.
//!
//! Configuration is supplied as JSON (e.g. via the CLI's `--config` flag) or
//! use `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the simulator.
mod defaults {
    /// Memory capacity in 32-bit words (1024 words = 4 KiB).
    ///
    /// Large enough for the program image plus any data the reference
    /// programs address; raise it for bigger images.
    pub const MEMORY_WORDS: usize = crate::common::constants::MEMORY_WORDS;

    /// Per-instruction trace output is off by default.
    pub const TRACE_INSTRUCTIONS: bool = false;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use mlsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory.size_words, 1024);
/// assert!(!config.general.trace_instructions);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use mlsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "size_words": 4096 }
/// }"#;
/// let config: Config = serde_json::from_str(json)?;
/// assert_eq!(config.memory.size_words, 4096);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation behavior.
    pub general: GeneralConfig,
    /// Memory sizing.
    pub memory: MemoryConfig,
}

/// General simulation settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a diagnostic line for every executed instruction.
    pub trace_instructions: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: defaults::TRACE_INSTRUCTIONS,
        }
    }
}

/// Memory sizing settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Memory capacity in 32-bit words.
    pub size_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_words: defaults::MEMORY_WORDS,
        }
    }
}
