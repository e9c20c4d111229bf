//! Fatal error surface of a rail build.

use thiserror::Error;

use crate::application::repos::RepoError;
use crate::presentation::views::TemplateRenderError;

/// Errors that abort the rail for the current request. The host's global
/// error policy takes over; no partial rail is surfaced.
#[derive(Debug, Error)]
pub enum RailError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Template(#[from] TemplateRenderError),
}
