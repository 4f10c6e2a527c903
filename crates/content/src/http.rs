use std::env;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;

use academy_core::model::{Course, CourseId, LessonId, UserId};
use academy_core::progress::ProgressSnapshot;

use crate::records::{CourseRecord, ProgressRecord};
use crate::store::{ContentError, CourseStore, ProgressStore};

#[derive(Clone, Debug)]
pub struct CmsConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl CmsConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }

    /// Read configuration from `ACADEMY_CMS_BASE_URL` / `ACADEMY_CMS_TOKEN`.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("ACADEMY_CMS_BASE_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        let token = env::var("ACADEMY_CMS_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        Some(Self { base_url, token })
    }
}

/// HTTP adapter for both collaborator seams: course documents from the CMS
/// and progress snapshots/mutations from the progress service.
#[derive(Clone)]
pub struct CmsClient {
    client: Client,
    config: CmsConfig,
}

impl CmsClient {
    #[must_use]
    pub fn new(config: CmsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn get(&self, url: String) -> Result<Response, ContentError> {
        let mut request = self.client.get(url);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        check_status(&response)?;
        Ok(response)
    }
}

fn check_status(response: &Response) -> Result<(), ContentError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ContentError::NotFound);
    }
    if !status.is_success() {
        return Err(ContentError::HttpStatus(status.as_u16()));
    }
    Ok(())
}

#[async_trait]
impl CourseStore for CmsClient {
    async fn get_course_by_slug(
        &self,
        course: &CourseId,
        language: &str,
    ) -> Result<Course, ContentError> {
        let url = self.url(&format!("courses/{course}?lang={language}"));
        let record: CourseRecord = self
            .get(url)
            .await?
            .json()
            .await
            .map_err(|e| ContentError::Serialization(e.to_string()))?;

        Ok(record.into_course(course)?)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompletionRequest<'a> {
    lesson_id: &'a str,
}

#[async_trait]
impl ProgressStore for CmsClient {
    async fn get_progress(
        &self,
        user: &UserId,
        course: &CourseId,
    ) -> Result<ProgressSnapshot, ContentError> {
        let url = self.url(&format!("progress/{user}/{course}"));
        let record: ProgressRecord = self
            .get(url)
            .await?
            .json()
            .await
            .map_err(|e| ContentError::Serialization(e.to_string()))?;

        Ok(record.into_snapshot())
    }

    async fn mark_lesson_complete(
        &self,
        user: &UserId,
        course: &CourseId,
        lesson: &LessonId,
    ) -> Result<(), ContentError> {
        let url = self.url(&format!("progress/{user}/{course}/completions"));
        let mut request = self.client.post(url).json(&CompletionRequest {
            lesson_id: lesson.as_str(),
        });
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_doubled_slashes() {
        let client = CmsClient::new(CmsConfig::new("https://cms.example.com/", None));
        assert_eq!(
            client.url("courses/anchor-101?lang=en"),
            "https://cms.example.com/courses/anchor-101?lang=en"
        );
    }
}
