//! Ports that tie the pure renderer to its collaborators.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::TableMarkup;

/// What to do when the mount target cannot be located
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingTargetPolicy {
    /// Report `MountError::TargetNotFound`
    #[default]
    Fail,
    /// Log a warning and leave the document untouched
    Ignore,
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error("Mount target not found: {0}")]
    TargetNotFound(String),

    #[error("Failed to write markup: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for a rendered table
pub trait RendererSink {
    fn mount(&mut self, markup: &TableMarkup) -> Result<(), MountError>;
}
