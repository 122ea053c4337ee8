//! CLI command implementations.

pub mod catalog;

use bakery_storefront::config::ConfigError;
use bakery_storefront::content::ContentError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Content(#[from] ContentError),
}
