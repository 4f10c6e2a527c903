use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use academy_core::model::{Course, CourseError, CourseId, LessonId, UserId};
use academy_core::progress::{CompletionSet, ProgressSnapshot};

/// Errors surfaced by content and progress adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("not found")]
    NotFound,

    #[error("network error: {0}")]
    Network(String),

    #[error("request failed with status {0}")]
    HttpStatus(u16),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Malformed(#[from] CourseError),
}

/// Read side of the content store (the CMS).
///
/// `language` is passed through to the lookup untouched; no localization
/// logic lives on this side of the boundary.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Fetch a course by its slug in the given language.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::NotFound` if missing, or other content errors.
    async fn get_course_by_slug(
        &self,
        course: &CourseId,
        language: &str,
    ) -> Result<Course, ContentError>;
}

/// The learner-progress collaborator.
///
/// The completion set it owns is handed out as immutable snapshots; the only
/// mutation path is `mark_lesson_complete`, and completing an already
/// completed lesson is a no-op success.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Fetch the learner's progress snapshot for a course.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` when the progress service cannot be reached.
    async fn get_progress(
        &self,
        user: &UserId,
        course: &CourseId,
    ) -> Result<ProgressSnapshot, ContentError>;

    /// Record a lesson as completed.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` when the mutation cannot be delivered.
    async fn mark_lesson_complete(
        &self,
        user: &UserId,
        course: &CourseId,
        lesson: &LessonId,
    ) -> Result<(), ContentError>;
}

/// In-memory implementation of both stores for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryContent {
    courses: Arc<Mutex<HashMap<CourseId, Course>>>,
    progress: Arc<Mutex<HashMap<(UserId, CourseId), HashSet<LessonId>>>>,
}

impl InMemoryContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a course into the store.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn insert_course(&self, course: Course) {
        let mut guard = self.courses.lock().expect("course store lock poisoned");
        guard.insert(course.id().clone(), course);
    }

    /// Completed lesson ids recorded for a learner, for test assertions.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn completed_lessons(&self, user: &UserId, course: &CourseId) -> Vec<LessonId> {
        let guard = self.progress.lock().expect("progress store lock poisoned");
        guard
            .get(&(user.clone(), course.clone()))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CourseStore for InMemoryContent {
    async fn get_course_by_slug(
        &self,
        course: &CourseId,
        _language: &str,
    ) -> Result<Course, ContentError> {
        let guard = self
            .courses
            .lock()
            .map_err(|e| ContentError::Network(e.to_string()))?;
        guard.get(course).cloned().ok_or(ContentError::NotFound)
    }
}

#[async_trait]
impl ProgressStore for InMemoryContent {
    async fn get_progress(
        &self,
        user: &UserId,
        course: &CourseId,
    ) -> Result<ProgressSnapshot, ContentError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| ContentError::Network(e.to_string()))?;
        let completed = guard
            .get(&(user.clone(), course.clone()))
            .map(|set| CompletionSet::new(set.iter().cloned()))
            .unwrap_or_default();
        Ok(ProgressSnapshot::new(completed, None))
    }

    async fn mark_lesson_complete(
        &self,
        user: &UserId,
        course: &CourseId,
        lesson: &LessonId,
    ) -> Result<(), ContentError> {
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| ContentError::Network(e.to_string()))?;
        guard
            .entry((user.clone(), course.clone()))
            .or_default()
            .insert(lesson.clone());
        Ok(())
    }
}

/// Aggregates the two collaborator seams behind trait objects so backends
/// can be swapped at the composition root.
#[derive(Clone)]
pub struct ContentStores {
    pub courses: Arc<dyn CourseStore>,
    pub progress: Arc<dyn ProgressStore>,
}

impl ContentStores {
    #[must_use]
    pub fn in_memory() -> Self {
        let store = InMemoryContent::new();
        let courses: Arc<dyn CourseStore> = Arc::new(store.clone());
        let progress: Arc<dyn ProgressStore> = Arc::new(store);
        Self { courses, progress }
    }
}
