//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod export;
pub mod fetch;
pub mod plot;
