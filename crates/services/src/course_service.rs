use chrono::{DateTime, Utc};
use std::sync::Arc;

use academy_core::model::{Course, CourseId, LessonDescriptor, LessonId, UserId};
use academy_core::navigation::LessonNavigation;
use academy_core::outline::CourseOutline;
use academy_core::progress::ProgressSnapshot;
use academy_core::Clock;
use content::store::{ContentError, CourseStore, ProgressStore};

use crate::error::CourseServiceError;
use crate::view::CourseSidebarView;

//
// ─── COURSE VIEW ───────────────────────────────────────────────────────────────
//

/// Everything the lesson page needs for one render: the course tree, its
/// flattened outline, the progress snapshot taken at load time, and the
/// navigation resolved for the viewed lesson.
///
/// The view is an immutable snapshot; completion changes are requested
/// upward and a fresh view is loaded with the new snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseView {
    pub course: Course,
    pub outline: CourseOutline,
    pub snapshot: ProgressSnapshot,
    pub navigation: LessonNavigation,
    pub percentage: u8,
    pub active_slug: String,
    pub fetched_at: DateTime<Utc>,
}

impl CourseView {
    /// Sidebar groups with per-lesson completed/active flags.
    #[must_use]
    pub fn sidebar(&self) -> CourseSidebarView {
        CourseSidebarView::build(
            &self.course,
            &self.outline,
            self.snapshot.completed(),
            &self.active_slug,
        )
    }
}

//
// ─── COURSE SERVICE ────────────────────────────────────────────────────────────
//

/// Orchestrates course/progress fetches into render-ready views and handles
/// the optimistic advance past an incomplete lesson.
#[derive(Clone)]
pub struct CourseService {
    courses: Arc<dyn CourseStore>,
    progress: Arc<dyn ProgressStore>,
    clock: Clock,
}

impl CourseService {
    #[must_use]
    pub fn new(courses: Arc<dyn CourseStore>, progress: Arc<dyn ProgressStore>) -> Self {
        Self {
            courses,
            progress,
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Load a render-ready view of `course_id` for the lesson at
    /// `active_slug`.
    ///
    /// A course that cannot be fetched (missing, or the CMS is unreachable)
    /// degrades to an empty-state view rather than an error; the same goes
    /// for a failed progress fetch. Malformed course content is the one
    /// fetch outcome that does surface, so authoring mistakes stay visible.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Content` carrying the malformed-tree
    /// detail when the CMS delivers an invalid course document.
    pub async fn load_view(
        &self,
        user: &UserId,
        course_id: &CourseId,
        language: &str,
        active_slug: &str,
    ) -> Result<CourseView, CourseServiceError> {
        let course = match self.courses.get_course_by_slug(course_id, language).await {
            Ok(course) => course,
            Err(err @ ContentError::Malformed(_)) => return Err(err.into()),
            Err(err) => {
                tracing::warn!(%course_id, "course fetch failed, rendering empty state: {err}");
                Course::empty(course_id.clone())
            }
        };

        let snapshot = match self.progress.get_progress(user, course_id).await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::warn!(%user, %course_id, "progress fetch failed, assuming none: {err}");
                ProgressSnapshot::default()
            }
        };

        let outline = CourseOutline::flatten(course.modules());
        let navigation = LessonNavigation::resolve(&outline, active_slug, snapshot.completed());
        let percentage = snapshot.percentage(&outline);

        Ok(CourseView {
            course,
            outline,
            snapshot,
            navigation,
            percentage,
            active_slug: active_slug.to_string(),
            fetched_at: self.clock.now(),
        })
    }

    /// Advance past the viewed lesson: request completion for it if it is
    /// not yet completed, and hand back the lesson to navigate to.
    ///
    /// The completion request is issued exactly once per call, detached and
    /// unawaited; navigation never waits on it and never observes its
    /// outcome (optimistic advance). On the last lesson there is no next
    /// target but the completion request is still issued.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn advance(
        &self,
        user: &UserId,
        course_id: &CourseId,
        view: &CourseView,
    ) -> Option<LessonDescriptor> {
        if let Some(current) = view.navigation.current() {
            if !view.navigation.is_current_completed() {
                self.request_completion(user.clone(), course_id.clone(), current.id().clone());
            }
        }

        view.navigation.next().cloned()
    }

    /// Fire-and-forget `mark_lesson_complete`. Failures are logged and
    /// otherwise invisible; the next progress fetch is the source of truth.
    fn request_completion(&self, user: UserId, course: CourseId, lesson: LessonId) {
        let progress = Arc::clone(&self.progress);
        tokio::spawn(async move {
            if let Err(err) = progress.mark_lesson_complete(&user, &course, &lesson).await {
                tracing::warn!(%user, %course, %lesson, "lesson completion request failed: {err}");
            }
        });
    }
}
