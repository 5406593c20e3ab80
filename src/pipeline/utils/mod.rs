//! Shared helpers for stages.

pub mod fs;
