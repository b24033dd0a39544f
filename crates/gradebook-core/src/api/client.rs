use anyhow::{Context, Result};
use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use super::error::ApiError;
use crate::models::{
    Course, CourseStatistics, CourseSummary, GradeDetail, GradeDetailResponse, Health, Student,
};

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";
pub const API_BASE_ENV: &str = "GRADEBOOK_API_BASE";

/// Resolves the backend root with precedence: CLI flag > env > config > default.
pub fn resolve_base_url(cli_base_url: Option<&str>, config_base_url: Option<&str>) -> Result<String> {
    let env_url = std::env::var(API_BASE_ENV).ok();
    let candidates = [cli_base_url, env_url.as_deref(), config_base_url];

    for candidate in candidates.into_iter().flatten() {
        let trimmed = candidate.trim();
        if !trimmed.is_empty() {
            validate_base_url(trimmed)?;
            return Ok(trimmed.to_string());
        }
    }

    Ok(DEFAULT_API_BASE.to_string())
}

pub fn validate_base_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).with_context(|| format!("Invalid API base URL: {url}"))?;
    if parsed.cannot_be_a_base() {
        anyhow::bail!("Invalid API base URL: {url}");
    }
    Ok(parsed)
}

/// Per-request options. Bodies are serialized by the caller.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    /// Applied after the defaults, so they win on conflict.
    pub headers: Vec<(HeaderName, HeaderValue)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.push((name, value));
        self
    }

    fn header_map(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &self.headers {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }
}

/// JSON client bound to one backend root.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: validate_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Builds the request URL; each segment is percent-encoded.
    fn url_for(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(
        &self,
        segments: &[&str],
        options: RequestOptions,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url_for(segments);
        debug!(method = %options.method, %url, "api request");

        let mut request = self
            .http
            .request(options.method.clone(), url.clone())
            .headers(options.header_map());
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%url, error = %e, "api request failed");
            ApiError::transport(&e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "api returned error status");
            return Err(ApiError::http_status(status.as_u16()));
        }
        Ok(response)
    }

    /// Issues a request and parses the JSON body.
    ///
    /// # Errors
    /// `HttpStatus` on a non-2xx answer, `Transport` when no answer arrives,
    /// `Parse` when the body is not valid JSON for `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let response = self.send(segments, options).await?;
        let text = response.text().await.map_err(|e| ApiError::transport(&e))?;
        serde_json::from_str(&text).map_err(ApiError::parse)
    }

    /// Issues a request whose success body is irrelevant.
    pub async fn call_empty(
        &self,
        segments: &[&str],
        options: RequestOptions,
    ) -> Result<(), ApiError> {
        self.send(segments, options).await.map(|_| ())
    }

    // ------------------------------------------------------------------------
    // Students
    // ------------------------------------------------------------------------

    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.call(&["students"], RequestOptions::default()).await
    }

    pub async fn get_student(&self, student_id: &str) -> Result<Student, ApiError> {
        self.call(&["students", student_id], RequestOptions::default())
            .await
    }

    pub async fn create_student(&self, student_id: &str) -> Result<Student, ApiError> {
        let body = json!({ "studentId": student_id }).to_string();
        self.call(&["students"], RequestOptions::method(Method::POST).with_body(body))
            .await
    }

    pub async fn delete_student(&self, student_id: &str) -> Result<(), ApiError> {
        self.call_empty(
            &["students", student_id],
            RequestOptions::method(Method::DELETE),
        )
        .await
    }

    pub async fn student_grades(&self, student_id: &str) -> Result<GradeDetail, ApiError> {
        let raw: GradeDetailResponse = self
            .call(&["students", student_id, "grades"], RequestOptions::default())
            .await?;
        Ok(GradeDetail::from(raw))
    }

    pub async fn add_grade(&self, student_id: &str, grade: f64) -> Result<Student, ApiError> {
        let body = json!({ "gradeValue": grade }).to_string();
        self.call(
            &["students", student_id, "grades"],
            RequestOptions::method(Method::POST).with_body(body),
        )
        .await
    }

    /// Replaces every grade of a student.
    pub async fn replace_student_grades(
        &self,
        student_id: &str,
        grades: &[f64],
    ) -> Result<Student, ApiError> {
        let body = json!(grades).to_string();
        self.call(
            &["students", student_id, "grades"],
            RequestOptions::method(Method::PUT).with_body(body),
        )
        .await
    }

    // ------------------------------------------------------------------------
    // Courses
    // ------------------------------------------------------------------------

    pub async fn list_courses(&self) -> Result<Vec<CourseSummary>, ApiError> {
        self.call(&["courses"], RequestOptions::default()).await
    }

    pub async fn create_course(
        &self,
        course_id: &str,
        academic_year: &str,
    ) -> Result<Course, ApiError> {
        let body = json!({ "courseId": course_id, "academicYear": academic_year }).to_string();
        self.call(&["courses"], RequestOptions::method(Method::POST).with_body(body))
            .await
    }

    /// Deletes a course together with its enrollments and grade records.
    pub async fn delete_course(&self, course_id: &str) -> Result<(), ApiError> {
        self.call_empty(&["courses", course_id], RequestOptions::method(Method::DELETE))
            .await
    }

    pub async fn course_students(&self, course_id: &str) -> Result<Vec<Student>, ApiError> {
        self.call(&["courses", course_id, "students"], RequestOptions::default())
            .await
    }

    pub async fn course_statistics(&self, course_id: &str) -> Result<CourseStatistics, ApiError> {
        self.call(
            &["courses", course_id, "statistics"],
            RequestOptions::default(),
        )
        .await
    }

    pub async fn enroll_student(&self, course_id: &str, student_id: &str) -> Result<(), ApiError> {
        self.call_empty(
            &["courses", course_id, "students", student_id],
            RequestOptions::method(Method::POST),
        )
        .await
    }

    pub async fn remove_student(&self, course_id: &str, student_id: &str) -> Result<(), ApiError> {
        self.call_empty(
            &["courses", course_id, "students", student_id],
            RequestOptions::method(Method::DELETE),
        )
        .await
    }

    /// Replaces a student's grades within one course.
    pub async fn update_course_grades(
        &self,
        course_id: &str,
        student_id: &str,
        grades: &[f64],
    ) -> Result<(), ApiError> {
        let body = json!(grades).to_string();
        self.call_empty(
            &["courses", course_id, "students", student_id, "grades"],
            RequestOptions::method(Method::PUT).with_body(body),
        )
        .await
    }

    // ------------------------------------------------------------------------
    // Service
    // ------------------------------------------------------------------------

    pub async fn health(&self) -> Result<Health, ApiError> {
        self.call(&["health"], RequestOptions::default()).await
    }
}
