use serde::{Deserialize, Serialize};

use crate::model::course::CourseError;
use crate::model::ids::LessonId;

/// A single lesson as it appears in the flattened course outline.
///
/// `id` is the stable identity used for completion tracking; `slug` is only
/// URL material and is unique within a course, not globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonDescriptor {
    id: LessonId,
    slug: String,
    title: String,
}

impl LessonDescriptor {
    /// Build a descriptor from authored content.
    ///
    /// Missing fields fail fast so content-authoring mistakes stay visible;
    /// there is no placeholder substitution anywhere in this crate.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::MissingLessonId`, `MissingSlug`, or
    /// `MissingTitle` when the corresponding field is empty or blank.
    pub fn new(
        id: LessonId,
        slug: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, CourseError> {
        if id.as_str().trim().is_empty() {
            return Err(CourseError::MissingLessonId);
        }
        let slug = slug.into();
        if slug.trim().is_empty() {
            return Err(CourseError::MissingSlug { lesson_id: id });
        }
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::MissingTitle { lesson_id: id });
        }

        Ok(Self { id, slug, title })
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_descriptor_with_all_fields() {
        let lesson =
            LessonDescriptor::new(LessonId::new("l1"), "what-is-a-wallet", "What is a wallet?")
                .unwrap();
        assert_eq!(lesson.id().as_str(), "l1");
        assert_eq!(lesson.slug(), "what-is-a-wallet");
        assert_eq!(lesson.title(), "What is a wallet?");
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = LessonDescriptor::new(LessonId::new("  "), "slug", "Title").unwrap_err();
        assert!(matches!(err, CourseError::MissingLessonId));
    }

    #[test]
    fn empty_slug_is_rejected() {
        let err = LessonDescriptor::new(LessonId::new("l1"), "", "Title").unwrap_err();
        assert!(matches!(err, CourseError::MissingSlug { .. }));
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = LessonDescriptor::new(LessonId::new("l1"), "slug", "   ").unwrap_err();
        assert!(matches!(err, CourseError::MissingTitle { .. }));
    }
}
