use thiserror::Error;

use crate::model::CourseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Course(#[from] CourseError),
}
