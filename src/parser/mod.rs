//! Request parser (verb module)
//!
//! Transforms YAML (or JSON) documents into request types.

use std::path::Path;
use serde::de::DeserializeOwned;
use crate::error::ParseError;
use crate::request::{GenerationRequest, RegistrySchema};

fn read<P: AsRef<Path>>(path: P) -> Result<String, ParseError> {
    let path_str = path.as_ref().display().to_string();
    std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })
}

fn from_str<T: DeserializeOwned>(doc: &str) -> Result<T, ParseError> {
    serde_yaml::from_str(doc).map_err(ParseError::from)
}

/// Parse a generation request from a YAML or JSON file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<GenerationRequest, ParseError> {
    parse_str(&read(path)?)
}

/// Parse a generation request from a YAML or JSON string
pub fn parse_str(doc: &str) -> Result<GenerationRequest, ParseError> {
    from_str(doc)
}

/// Parse a schema-registry result from a file
pub fn parse_registry_file<P: AsRef<Path>>(path: P) -> Result<RegistrySchema, ParseError> {
    parse_registry_str(&read(path)?)
}

pub fn parse_registry_str(doc: &str) -> Result<RegistrySchema, ParseError> {
    from_str(doc)
}
