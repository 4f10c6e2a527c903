use crate::model::LessonDescriptor;
use crate::outline::CourseOutline;
use crate::progress::CompletionSet;

/// Navigation edges for the lesson currently being viewed.
///
/// `prev`/`next` are absent exactly at the ends of the outline or when the
/// slug is not found at all (a stale URL); the not-found case also reports
/// `is_current_completed == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonNavigation {
    current: Option<LessonDescriptor>,
    current_index: Option<usize>,
    prev: Option<LessonDescriptor>,
    next: Option<LessonDescriptor>,
    is_current_completed: bool,
}

impl LessonNavigation {
    /// Resolve navigation for `current_slug` against the outline.
    ///
    /// Pure: the same inputs always produce the same result, so callers are
    /// free to memoize. Duplicate slugs resolve to the first match.
    #[must_use]
    pub fn resolve(
        outline: &CourseOutline,
        current_slug: &str,
        completed: &CompletionSet,
    ) -> Self {
        let Some(index) = outline.position_of(current_slug) else {
            return Self::not_found();
        };

        // position_of returned this index, so the lesson is present.
        let current = outline.get(index).cloned();
        let prev = index.checked_sub(1).and_then(|i| outline.get(i)).cloned();
        let next = outline.get(index + 1).cloned();
        let is_current_completed = current
            .as_ref()
            .is_some_and(|lesson| completed.contains(lesson.id()));

        Self {
            current,
            current_index: Some(index),
            prev,
            next,
            is_current_completed,
        }
    }

    fn not_found() -> Self {
        Self {
            current: None,
            current_index: None,
            prev: None,
            next: None,
            is_current_completed: false,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&LessonDescriptor> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    #[must_use]
    pub fn prev(&self) -> Option<&LessonDescriptor> {
        self.prev.as_ref()
    }

    #[must_use]
    pub fn next(&self) -> Option<&LessonDescriptor> {
        self.next.as_ref()
    }

    #[must_use]
    pub fn is_current_completed(&self) -> bool {
        self.is_current_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LessonDescriptor, LessonId, Module, ModuleId};

    fn outline_of(pairs: &[(&str, &str)]) -> CourseOutline {
        let lessons = pairs
            .iter()
            .map(|(id, slug)| {
                LessonDescriptor::new(LessonId::new(*id), *slug, format!("L {id}")).unwrap()
            })
            .collect();
        let module = Module::new(ModuleId::new("m1"), "Module", lessons).unwrap();
        CourseOutline::flatten(&[module])
    }

    #[test]
    fn middle_lesson_has_both_edges() {
        let outline = outline_of(&[("l1", "s1"), ("l2", "s2"), ("l3", "s3")]);
        let nav = LessonNavigation::resolve(&outline, "s2", &CompletionSet::empty());

        assert_eq!(nav.current_index(), Some(1));
        assert_eq!(nav.prev().unwrap().slug(), "s1");
        assert_eq!(nav.next().unwrap().slug(), "s3");
    }

    #[test]
    fn first_lesson_has_no_prev() {
        let outline = outline_of(&[("l1", "s1"), ("l2", "s2")]);
        let nav = LessonNavigation::resolve(&outline, "s1", &CompletionSet::empty());

        assert!(nav.prev().is_none());
        assert_eq!(nav.next().unwrap().slug(), "s2");
    }

    #[test]
    fn last_lesson_has_no_next() {
        let outline = outline_of(&[("l1", "s1"), ("l2", "s2")]);
        let nav = LessonNavigation::resolve(&outline, "s2", &CompletionSet::empty());

        assert_eq!(nav.prev().unwrap().slug(), "s1");
        assert!(nav.next().is_none());
    }

    #[test]
    fn single_lesson_has_no_edges() {
        let outline = outline_of(&[("l1", "s1")]);
        let nav = LessonNavigation::resolve(&outline, "s1", &CompletionSet::empty());

        assert!(nav.prev().is_none());
        assert!(nav.next().is_none());
        assert_eq!(nav.current_index(), Some(0));
    }

    #[test]
    fn stale_slug_resolves_to_no_current_lesson() {
        let outline = outline_of(&[("l1", "s1"), ("l2", "s2")]);
        let nav = LessonNavigation::resolve(&outline, "gone", &CompletionSet::empty());

        assert!(nav.current().is_none());
        assert_eq!(nav.current_index(), None);
        assert!(nav.prev().is_none());
        assert!(nav.next().is_none());
        assert!(!nav.is_current_completed());
    }

    #[test]
    fn empty_outline_resolves_to_nothing() {
        let nav =
            LessonNavigation::resolve(&CourseOutline::default(), "s1", &CompletionSet::empty());
        assert!(nav.current().is_none());
        assert!(nav.prev().is_none());
        assert!(nav.next().is_none());
        assert!(!nav.is_current_completed());
    }

    #[test]
    fn completion_is_read_from_the_snapshot() {
        let outline = outline_of(&[("l1", "s1"), ("l2", "s2")]);
        let completed = CompletionSet::new([LessonId::new("l1")]);

        let nav = LessonNavigation::resolve(&outline, "s1", &completed);
        assert!(nav.is_current_completed());

        let nav = LessonNavigation::resolve(&outline, "s2", &completed);
        assert!(!nav.is_current_completed());
    }

    #[test]
    fn duplicate_slug_resolves_to_first_match() {
        let outline = outline_of(&[("l1", "dup"), ("l2", "dup"), ("l3", "s3")]);
        let nav = LessonNavigation::resolve(&outline, "dup", &CompletionSet::empty());

        assert_eq!(nav.current().unwrap().id().as_str(), "l1");
        assert!(nav.prev().is_none());
        assert_eq!(nav.next().unwrap().id().as_str(), "l2");
    }

    #[test]
    fn resolve_is_deterministic() {
        let outline = outline_of(&[("l1", "s1"), ("l2", "s2")]);
        let completed = CompletionSet::new([LessonId::new("l2")]);
        let first = LessonNavigation::resolve(&outline, "s2", &completed);
        let second = LessonNavigation::resolve(&outline, "s2", &completed);
        assert_eq!(first, second);
    }
}
