//! Request types (nouns)
//!
//! The shapes callers hand to the generator: a full generation request, or
//! a schema-registry result that is lifted into one.

mod generation;
mod registry;

pub use generation::GenerationRequest;
pub use registry::{RegistryField, RegistrySchema};
