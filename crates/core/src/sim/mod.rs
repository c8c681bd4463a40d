//! Simulation utilities and program loading.
//!
//! Provides utilities for loading hex program images into memory and the
//! driving fetch-decode-execute loop.

/// Hex image loader.
pub mod loader;

/// Fetch-decode-execute driving loop.
pub mod simulator;

pub use loader::{LoadError, load_hex};
pub use simulator::Simulator;
