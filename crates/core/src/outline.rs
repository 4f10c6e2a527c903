use crate::model::{LessonDescriptor, LessonId, Module};

/// The flattened course outline: every lesson across all modules, in module
/// order then lesson order, as a single immutable arena.
///
/// The outline is the sole basis for positional navigation. It never
/// deduplicates, sorts, or reorders; a duplicate slug is a caller error and
/// positional lookups settle it with the first match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CourseOutline {
    lessons: Vec<LessonDescriptor>,
}

impl CourseOutline {
    /// Flatten a module tree into a single ordered lesson list.
    ///
    /// Pure and total: an empty tree or modules with zero lessons simply
    /// contribute nothing.
    #[must_use]
    pub fn flatten(modules: &[Module]) -> Self {
        let lessons = modules
            .iter()
            .flat_map(|module| module.lessons().iter().cloned())
            .collect();
        Self { lessons }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    #[must_use]
    pub fn lessons(&self) -> &[LessonDescriptor] {
        &self.lessons
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&LessonDescriptor> {
        self.lessons.get(index)
    }

    /// Position of the first lesson carrying `slug`, if any.
    #[must_use]
    pub fn position_of(&self, slug: &str) -> Option<usize> {
        self.lessons.iter().position(|lesson| lesson.slug() == slug)
    }

    /// Whether a lesson with this id exists anywhere in the outline.
    #[must_use]
    pub fn contains(&self, id: &LessonId) -> bool {
        self.lessons.iter().any(|lesson| lesson.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModuleId;

    fn lesson(id: &str, slug: &str) -> LessonDescriptor {
        LessonDescriptor::new(LessonId::new(id), slug, format!("Lesson {id}")).unwrap()
    }

    fn module(id: &str, lessons: Vec<LessonDescriptor>) -> Module {
        Module::new(ModuleId::new(id), format!("Module {id}"), lessons).unwrap()
    }

    #[test]
    fn flatten_preserves_module_then_lesson_order() {
        let modules = vec![
            module("m1", vec![lesson("l1", "s1"), lesson("l2", "s2")]),
            module("m2", vec![lesson("l3", "s3")]),
        ];

        let outline = CourseOutline::flatten(&modules);

        assert_eq!(outline.len(), 3);
        let ids: Vec<_> = outline
            .lessons()
            .iter()
            .map(|l| l.id().as_str())
            .collect();
        assert_eq!(ids, ["l1", "l2", "l3"]);
    }

    #[test]
    fn flatten_length_matches_total_lesson_count() {
        let modules = vec![
            module("m1", vec![lesson("l1", "s1")]),
            module("m2", Vec::new()),
            module("m3", vec![lesson("l2", "s2"), lesson("l3", "s3")]),
        ];

        let total: usize = modules.iter().map(|m| m.lessons().len()).sum();
        assert_eq!(CourseOutline::flatten(&modules).len(), total);
    }

    #[test]
    fn empty_modules_contribute_nothing() {
        let modules = vec![module("m1", Vec::new()), module("m2", Vec::new())];
        assert!(CourseOutline::flatten(&modules).is_empty());
    }

    #[test]
    fn empty_tree_flattens_to_empty_outline() {
        assert!(CourseOutline::flatten(&[]).is_empty());
    }

    #[test]
    fn duplicate_slugs_are_kept_and_first_match_wins() {
        let modules = vec![module("m1", vec![lesson("l1", "dup"), lesson("l2", "dup")])];
        let outline = CourseOutline::flatten(&modules);

        assert_eq!(outline.len(), 2);
        assert_eq!(outline.position_of("dup"), Some(0));
    }

    #[test]
    fn position_of_unknown_slug_is_none() {
        let outline = CourseOutline::flatten(&[module("m1", vec![lesson("l1", "s1")])]);
        assert_eq!(outline.position_of("missing"), None);
    }

    #[test]
    fn contains_checks_lesson_ids() {
        let outline = CourseOutline::flatten(&[module("m1", vec![lesson("l1", "s1")])]);
        assert!(outline.contains(&LessonId::new("l1")));
        assert!(!outline.contains(&LessonId::new("l9")));
    }
}
