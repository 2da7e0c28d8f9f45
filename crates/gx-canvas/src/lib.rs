//! # gx-canvas
//!
//! Canvas LMS REST client for Gradex.
//!
//! Covers the three list endpoints a grade export needs:
//! - course students (with email and enrollment grades inline)
//! - course assignments
//! - assignment submissions (with the submitting user inline)
//!
//! Every endpoint is paginated through the `Link` header and walked to the
//! end by [`get_all_pages`]. Requests are issued one at a time; nothing is
//! retried.

pub mod assignments;
pub mod link;
pub mod pagination;
pub mod submissions;
pub mod users;

mod error;
mod http;

pub use assignments::CanvasAssignment;
pub use error::CanvasError;
pub use pagination::{Page, PageSource, get_all_pages};
pub use reqwest::Url;
pub use submissions::{CanvasSubmission, SubmissionUser};
pub use users::{CanvasEnrollment, CanvasGrades, CanvasUser};

use gx_core::{AssignmentId, CourseId};

use crate::http::{check_response, link_header};

// ── Transport ──────────────────────────────────────────────────────

/// HTTP page source backed by `reqwest`.
///
/// The optional access token is attached to every request as the ambient
/// `Authorization: Bearer` credential; this client never obtains or
/// refreshes tokens itself.
pub struct CanvasClient {
    http: reqwest::Client,
    access_token: Option<String>,
}

impl CanvasClient {
    /// Create a client that identifies itself with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Http`] if the underlying `reqwest::Client`
    /// cannot be built (e.g., TLS backend initialization fails).
    pub fn new(user_agent: &str) -> Result<Self, CanvasError> {
        Ok(Self {
            http: reqwest::Client::builder().user_agent(user_agent).build()?,
            access_token: None,
        })
    }

    /// Attach an access token. Blank tokens are ignored.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.access_token = (!token.trim().is_empty()).then_some(token);
        self
    }
}

impl PageSource for CanvasClient {
    async fn fetch_page(&self, url: &Url) -> Result<Page, CanvasError> {
        let mut request = self
            .http
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let resp = check_response(request.send().await?).await?;
        let link = link_header(&resp);
        let body = resp.text().await?;

        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(serde_json::Value::Array(items)) => Ok(Page::new(items, link)),
            Ok(_) => Err(CanvasError::Parse(format!(
                "expected a JSON array from {url}"
            ))),
            Err(e) => Err(CanvasError::Parse(format!("invalid JSON from {url}: {e}"))),
        }
    }
}

// ── Endpoints ──────────────────────────────────────────────────────

/// Endpoint builder over any [`PageSource`].
pub struct CanvasApi<S> {
    source: S,
    base_url: Url,
    per_page: u32,
}

impl<S: PageSource + Sync> CanvasApi<S> {
    /// Bind `source` to a Canvas instance root such as
    /// `https://school.instructure.com`. A path prefix
    /// (`https://school.edu/canvas`) is kept in every endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidUrl`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(source: S, base_url: &str, per_page: u32) -> Result<Self, CanvasError> {
        let mut base_url = Url::parse(base_url.trim())
            .map_err(|e| CanvasError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(CanvasError::InvalidUrl(format!(
                "{base_url}: only http(s) is supported"
            )));
        }
        // Endpoints join relative to the root, so it must end in a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        base_url.set_query(None);
        base_url.set_fragment(None);
        Ok(Self {
            source,
            base_url,
            per_page,
        })
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Resolve a root-relative API path (with query) against the instance root.
    fn endpoint(&self, path_and_query: &str) -> Result<Url, CanvasError> {
        self.base_url
            .join(path_and_query)
            .map_err(|e| CanvasError::InvalidUrl(format!("{path_and_query}: {e}")))
    }

    /// First-page locator for the course student roster.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidUrl`] if the locator cannot be built.
    pub fn students_url(&self, course: CourseId) -> Result<Url, CanvasError> {
        self.endpoint(&format!(
            "api/v1/courses/{course}/users?include[]=email&include[]=enrollments&enrollment_type[]=student&per_page={}",
            self.per_page
        ))
    }

    /// First-page locator for the course assignment list.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidUrl`] if the locator cannot be built.
    pub fn assignments_url(&self, course: CourseId) -> Result<Url, CanvasError> {
        self.endpoint(&format!(
            "api/v1/courses/{course}/assignments?per_page={}",
            self.per_page
        ))
    }

    /// First-page locator for one assignment's submissions.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidUrl`] if the locator cannot be built.
    pub fn submissions_url(
        &self,
        course: CourseId,
        assignment: AssignmentId,
    ) -> Result<Url, CanvasError> {
        self.endpoint(&format!(
            "api/v1/courses/{course}/assignments/{assignment}/submissions?include[]=user&per_page={}",
            self.per_page
        ))
    }
}
