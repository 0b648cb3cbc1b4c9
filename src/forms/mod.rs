//! Form definitions for user-supplied query input.

use thiserror::Error;
use validator::ValidationErrors;

pub mod pagination;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid items per page")]
    InvalidItemsPerPage,
}
