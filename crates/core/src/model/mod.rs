mod course;
mod ids;
mod lesson;

pub use course::{Course, CourseError, Module};
pub use ids::{CourseId, LessonId, ModuleId, UserId};
pub use lesson::LessonDescriptor;
