//! Pipeline orchestration.
//!
//! - [`checksum`] - SHA-256 of the final archive
//! - [`orchestrator`] - [`Pipeline`] state machine and [`PipelineReport`]

mod checksum;
mod orchestrator;

pub use checksum::calculate_sha256;
pub use orchestrator::{Pipeline, PipelineReport, PipelineState};
