use serde::Deserialize;

use academy_core::model::{
    Course, CourseError, CourseId, LessonDescriptor, LessonId, Module, ModuleId,
};
use academy_core::progress::{CompletionSet, ProgressSnapshot};

//
// ─── COURSE RECORDS ────────────────────────────────────────────────────────────
//

/// Slug as the CMS delivers it: a wrapper object whose `current` value may
/// be unset while a document is still being authored.
#[derive(Debug, Clone, Deserialize)]
pub struct SlugRecord {
    pub current: Option<String>,
}

/// Raw lesson document. Optional fields mirror what the CMS can actually
/// deliver; validation into the domain happens in `into_descriptor`.
#[derive(Debug, Clone, Deserialize)]
pub struct LessonRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub slug: Option<SlugRecord>,
    pub title: Option<String>,
}

impl LessonRecord {
    /// Validate the raw document into a domain descriptor.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` when id, slug, or title is missing, so that
    /// authoring mistakes surface instead of being silently coerced.
    pub fn into_descriptor(self) -> Result<LessonDescriptor, CourseError> {
        let id = LessonId::new(self.id.unwrap_or_default());
        let slug = self
            .slug
            .and_then(|slug| slug.current)
            .unwrap_or_default();
        let title = self.title.unwrap_or_default();
        LessonDescriptor::new(id, slug, title)
    }
}

/// Raw module document with its lessons inlined by the CMS query.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub lessons: Option<Vec<LessonRecord>>,
}

impl ModuleRecord {
    /// Validate the raw document into a domain module.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` for a missing module id/title or any malformed
    /// lesson inside it.
    pub fn into_module(self) -> Result<Module, CourseError> {
        let lessons = self
            .lessons
            .unwrap_or_default()
            .into_iter()
            .map(LessonRecord::into_descriptor)
            .collect::<Result<Vec<_>, _>>()?;

        Module::new(
            ModuleId::new(self.id.unwrap_or_default()),
            self.title.unwrap_or_default(),
            lessons,
        )
    }
}

/// Raw course document as returned by a by-slug query.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRecord {
    pub slug: Option<SlugRecord>,
    pub title: Option<String>,
    pub modules: Option<Vec<ModuleRecord>>,
}

impl CourseRecord {
    /// Validate the raw document into a domain course.
    ///
    /// The record was fetched by `requested` slug; if the document does not
    /// carry its own slug, the requested one is the identity.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` for any malformed module or lesson in the tree.
    pub fn into_course(self, requested: &CourseId) -> Result<Course, CourseError> {
        let id = self
            .slug
            .and_then(|slug| slug.current)
            .map_or_else(|| requested.clone(), CourseId::new);

        let modules = self
            .modules
            .unwrap_or_default()
            .into_iter()
            .map(ModuleRecord::into_module)
            .collect::<Result<Vec<_>, _>>()?;

        Course::new(id, self.title.unwrap_or_default(), modules)
    }
}

//
// ─── PROGRESS RECORDS ──────────────────────────────────────────────────────────
//

/// Raw progress payload from the progress service.
///
/// `completion_percentage` is whatever the service last computed; it is kept
/// as advisory display data, the locally recomputed value is authoritative.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub completed_lessons: Vec<String>,
    #[serde(default)]
    pub completion_percentage: Option<u8>,
}

impl ProgressRecord {
    #[must_use]
    pub fn into_snapshot(self) -> ProgressSnapshot {
        let completed = CompletionSet::new(self.completed_lessons.into_iter().map(LessonId::new));
        ProgressSnapshot::new(completed, self.completion_percentage)
    }
}
