use std::collections::HashSet;

use crate::model::LessonId;
use crate::outline::CourseOutline;

//
// ─── COMPLETION SET ────────────────────────────────────────────────────────────
//

/// Snapshot of the lessons a learner has finished.
///
/// The set is owned by the progress collaborator; this crate only reads
/// membership. Completion changes are requested upward and a fresh snapshot
/// is handed back in on the next evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionSet {
    completed: HashSet<LessonId>,
}

impl CompletionSet {
    #[must_use]
    pub fn new(completed: impl IntoIterator<Item = LessonId>) -> Self {
        Self {
            completed: completed.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &LessonId) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// A new snapshot with one more completed lesson. The original is left
    /// untouched; this models the externally owned set growing between
    /// evaluations.
    #[must_use]
    pub fn with(&self, id: LessonId) -> Self {
        let mut completed = self.completed.clone();
        completed.insert(id);
        Self { completed }
    }
}

impl FromIterator<LessonId> for CompletionSet {
    fn from_iter<T: IntoIterator<Item = LessonId>>(iter: T) -> Self {
        Self::new(iter)
    }
}

//
// ─── AGGREGATION ───────────────────────────────────────────────────────────────
//

/// Completion percentage over the outline, rounded half-up to 0..=100.
///
/// Only completed ids actually present in the outline count, so stale ids
/// referring to removed lessons never inflate the result. An empty outline
/// is 0, not a division by zero.
#[must_use]
pub fn completion_percentage(outline: &CourseOutline, completed: &CompletionSet) -> u8 {
    let total = outline.len();
    if total == 0 {
        return 0;
    }

    let done = outline
        .lessons()
        .iter()
        .filter(|lesson| completed.contains(lesson.id()))
        .count();

    // round(100 * done / total), half-up, in integer arithmetic
    let pct = (200 * done + total) / (2 * total);
    u8::try_from(pct).unwrap_or(100)
}

/// Whether `lesson_slug` is the lesson currently being viewed.
#[must_use]
pub fn is_active(lesson_slug: &str, active_slug: &str) -> bool {
    lesson_slug == active_slug
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Progress as fetched from the progress collaborator.
///
/// The locally recomputed percentage is authoritative; `reported_percentage`
/// is advisory display data carried through from the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    completed: CompletionSet,
    reported_percentage: Option<u8>,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn new(completed: CompletionSet, reported_percentage: Option<u8>) -> Self {
        Self {
            completed,
            reported_percentage,
        }
    }

    #[must_use]
    pub fn completed(&self) -> &CompletionSet {
        &self.completed
    }

    #[must_use]
    pub fn reported_percentage(&self) -> Option<u8> {
        self.reported_percentage
    }

    /// The authoritative percentage for this snapshot over `outline`.
    #[must_use]
    pub fn percentage(&self, outline: &CourseOutline) -> u8 {
        completion_percentage(outline, &self.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LessonDescriptor, Module, ModuleId};

    fn outline_of(ids: &[&str]) -> CourseOutline {
        let lessons = ids
            .iter()
            .map(|id| {
                LessonDescriptor::new(LessonId::new(*id), format!("{id}-slug"), format!("L {id}"))
                    .unwrap()
            })
            .collect();
        let module = Module::new(ModuleId::new("m1"), "Module", lessons).unwrap();
        CourseOutline::flatten(&[module])
    }

    #[test]
    fn empty_outline_is_zero_percent() {
        let set = CompletionSet::new([LessonId::new("stale")]);
        assert_eq!(completion_percentage(&CourseOutline::default(), &set), 0);
    }

    #[test]
    fn one_of_three_rounds_to_33() {
        let outline = outline_of(&["a", "b", "c"]);
        let set = CompletionSet::new([LessonId::new("a")]);
        assert_eq!(completion_percentage(&outline, &set), 33);
    }

    #[test]
    fn two_of_three_rounds_to_67() {
        let outline = outline_of(&["a", "b", "c"]);
        let set = CompletionSet::new([LessonId::new("a"), LessonId::new("b")]);
        assert_eq!(completion_percentage(&outline, &set), 67);
    }

    #[test]
    fn one_of_two_is_exactly_50() {
        let outline = outline_of(&["a", "b"]);
        let set = CompletionSet::new([LessonId::new("a")]);
        assert_eq!(completion_percentage(&outline, &set), 50);
    }

    #[test]
    fn all_completed_is_100() {
        let outline = outline_of(&["a", "b", "c"]);
        let set = CompletionSet::new([
            LessonId::new("a"),
            LessonId::new("b"),
            LessonId::new("c"),
        ]);
        assert_eq!(completion_percentage(&outline, &set), 100);
    }

    #[test]
    fn stale_ids_do_not_count() {
        let outline = outline_of(&["a", "b"]);
        let set = CompletionSet::new([LessonId::new("a"), LessonId::new("removed-lesson")]);
        assert_eq!(completion_percentage(&outline, &set), 50);
    }

    #[test]
    fn percentage_is_monotone_as_completions_are_added() {
        let outline = outline_of(&["a", "b", "c", "d", "e"]);
        let mut set = CompletionSet::empty();
        let mut last = completion_percentage(&outline, &set);
        for id in ["a", "b", "c", "d", "e"] {
            set = set.with(LessonId::new(id));
            let pct = completion_percentage(&outline, &set);
            assert!(pct >= last);
            last = pct;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn with_leaves_original_snapshot_untouched() {
        let set = CompletionSet::new([LessonId::new("a")]);
        let grown = set.with(LessonId::new("b"));
        assert_eq!(set.len(), 1);
        assert_eq!(grown.len(), 2);
    }

    #[test]
    fn is_active_matches_slug_exactly() {
        assert!(is_active("intro", "intro"));
        assert!(!is_active("intro", "Intro"));
    }

    #[test]
    fn snapshot_percentage_is_locally_recomputed() {
        let outline = outline_of(&["a", "b"]);
        // Reported value disagrees with the set; local computation wins.
        let snapshot = ProgressSnapshot::new(CompletionSet::new([LessonId::new("a")]), Some(90));
        assert_eq!(snapshot.percentage(&outline), 50);
        assert_eq!(snapshot.reported_percentage(), Some(90));
    }
}
