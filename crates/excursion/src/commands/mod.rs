//! Command implementations for the Excursion CLI
//!
//! Each command module handles the CLI interface and delegates to
//! excursion-core for actual implementation.

pub mod check;
pub mod generate;
