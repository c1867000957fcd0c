use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Descriptor;
use crate::DecodeError;

/// Every checked-in generated cell, as listed in `cells.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// One entry per generated file.
    pub cells: Vec<Entry>,
}

/// A generated file and the descriptor it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Output path, relative to the manifest's directory.
    pub file: PathBuf,
    /// What to render into it.
    #[serde(flatten)]
    pub descriptor: Descriptor,
}

impl Manifest {
    /// Parses a manifest from JSON.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(bytes).map_err(DecodeError::new::<Self>)
    }
}
