//! Error types emitted by the airfield CLI.

use airfield_data::LoadError;
use thiserror::Error;

/// Errors emitted by the airfield CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Loading the datasets failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// Serializing the requested output as JSON failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
}
