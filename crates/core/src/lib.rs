#![forbid(unsafe_code)]

//! Domain core for the course-delivery front end: the flattened lesson
//! outline, prev/next navigation, completion aggregation, and the
//! wallet-connection route gate. Everything here is pure or a simple state
//! holder; content and progress I/O live in the `content` crate.

pub mod error;
pub mod gate;
pub mod model;
pub mod navigation;
pub mod outline;
pub mod progress;
pub mod time;

pub use error::Error;
pub use gate::{RouteGate, RoutePolicy};
pub use navigation::LessonNavigation;
pub use outline::CourseOutline;
pub use progress::{CompletionSet, ProgressSnapshot, completion_percentage, is_active};
pub use time::Clock;
