use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::dates::DateError;
use crate::templates::{TemplateRenderError, TemplateRepoError};

/// Fatal outcomes of creating a weekly notebook.
///
/// A declined overwrite and an unavailable opener are not errors; see
/// [`crate::materialize::MaterializeOutcome`].
#[derive(Debug, Error)]
pub enum TidyError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] DateError),

    #[error(transparent)]
    MissingSubstitutionKey(#[from] TemplateRenderError),

    #[error("failed to write {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Template(#[from] TemplateRepoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read overwrite confirmation: {0}")]
    Prompt(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, TidyError>;
