//! Shared error types for the services crate.

use thiserror::Error;

use academy_core::model::CourseError;
use content::store::ContentError;

/// Errors emitted by `CourseService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseServiceError {
    #[error(transparent)]
    Course(#[from] CourseError),
    #[error(transparent)]
    Content(#[from] ContentError),
}
