//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod classify;
pub mod prune;
pub mod replay;
pub mod reset;
pub mod show;
pub mod summary;
