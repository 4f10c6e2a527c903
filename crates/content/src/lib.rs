#![forbid(unsafe_code)]

//! Adapters for the external collaborators of the course-delivery core:
//! the CMS that serves course trees and the progress service that owns the
//! completion set. Trait seams live in `store`, raw wire shapes and their
//! validation in `records`, and the HTTP backend in `http`.

pub mod http;
pub mod records;
pub mod store;

pub use http::{CmsClient, CmsConfig};
pub use store::{ContentError, ContentStores, CourseStore, InMemoryContent, ProgressStore};
