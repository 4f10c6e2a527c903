use thiserror::Error;

use crate::model::ids::{CourseId, LessonId, ModuleId};
use crate::model::lesson::LessonDescriptor;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Malformed-content errors raised while building the course tree.
///
/// These surface content-authoring mistakes to the caller; the edge cases a
/// well-formed tree can legitimately hit (empty courses, empty modules, a
/// stale slug) are not errors and are handled by the outline and resolver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("lesson is missing a stable id")]
    MissingLessonId,

    #[error("lesson {lesson_id} is missing a slug")]
    MissingSlug { lesson_id: LessonId },

    #[error("lesson {lesson_id} is missing a title")]
    MissingTitle { lesson_id: LessonId },

    #[error("module is missing a stable id")]
    MissingModuleId,

    #[error("module {module_id} is missing a title")]
    MissingModuleTitle { module_id: ModuleId },

    #[error("course is missing an id")]
    MissingCourseId,
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// An authored group of lessons. Lesson order within a module is authorial
/// and positional; nothing in this crate reorders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    id: ModuleId,
    title: String,
    lessons: Vec<LessonDescriptor>,
}

impl Module {
    /// Build a module. A module with zero lessons is valid.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::MissingModuleId` or `MissingModuleTitle` when
    /// the corresponding field is empty or blank.
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        lessons: Vec<LessonDescriptor>,
    ) -> Result<Self, CourseError> {
        if id.as_str().trim().is_empty() {
            return Err(CourseError::MissingModuleId);
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::MissingModuleTitle { module_id: id });
        }

        Ok(Self { id, title, lessons })
    }

    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn lessons(&self) -> &[LessonDescriptor] {
        &self.lessons
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A course: ordered modules of ordered lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
    modules: Vec<Module>,
}

impl Course {
    /// Build a course. A course with zero modules is valid.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::MissingCourseId` when the id is empty or blank.
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        modules: Vec<Module>,
    ) -> Result<Self, CourseError> {
        if id.as_str().trim().is_empty() {
            return Err(CourseError::MissingCourseId);
        }

        Ok(Self {
            id,
            title: title.into(),
            modules,
        })
    }

    /// An empty course shell, used when content retrieval fails and the
    /// caller wants an empty-state render instead of a crash.
    #[must_use]
    pub fn empty(id: CourseId) -> Self {
        Self {
            id,
            title: String::new(),
            modules: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }
}
