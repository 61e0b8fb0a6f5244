//! Generation pipeline (verb module)
//!
//! Columns + GenerationContext → GeneratedArtifact.

mod header;
mod pipeline;

pub use header::render_header;
pub use pipeline::{generate, generate_at, generate_from_specs, GeneratedArtifact};
