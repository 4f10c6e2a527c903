#![forbid(unsafe_code)]

pub mod course_service;
pub mod error;
pub mod gate_service;
pub mod view;

pub use academy_core::Clock;

pub use course_service::{CourseService, CourseView};
pub use error::CourseServiceError;
pub use gate_service::GateContext;
pub use view::{CourseSidebarView, LessonItemView, ModuleView};
