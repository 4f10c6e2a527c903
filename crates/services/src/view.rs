use academy_core::model::Course;
use academy_core::outline::CourseOutline;
use academy_core::progress::{completion_percentage, is_active, CompletionSet};

/// Presentation-agnostic sidebar data.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted strings
/// - no styling or icon decisions
///
/// The UI decides how a completed or active lesson looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSidebarView {
    pub percentage: u8,
    pub modules: Vec<ModuleView>,
}

/// One authored module group in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleView {
    pub title: String,
    pub lessons: Vec<LessonItemView>,
}

/// One lesson row: completed comes from the snapshot, active from the slug
/// currently being viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonItemView {
    pub title: String,
    pub slug: String,
    pub completed: bool,
    pub active: bool,
}

impl CourseSidebarView {
    /// Assemble the sidebar from the course tree and the load-time snapshot.
    ///
    /// The percentage is recomputed locally over the outline; it is the
    /// authoritative value, not whatever the progress service last reported.
    #[must_use]
    pub fn build(
        course: &Course,
        outline: &CourseOutline,
        completed: &CompletionSet,
        active_slug: &str,
    ) -> Self {
        let modules = course
            .modules()
            .iter()
            .map(|module| ModuleView {
                title: module.title().to_string(),
                lessons: module
                    .lessons()
                    .iter()
                    .map(|lesson| LessonItemView {
                        title: lesson.title().to_string(),
                        slug: lesson.slug().to_string(),
                        completed: completed.contains(lesson.id()),
                        active: is_active(lesson.slug(), active_slug),
                    })
                    .collect(),
            })
            .collect();

        Self {
            percentage: completion_percentage(outline, completed),
            modules,
        }
    }
}
