//! Canvas API connection settings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest page size Canvas honors for list endpoints.
pub const MAX_PER_PAGE: u32 = 100;

const fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

fn default_user_agent() -> String {
    String::from("gradex/0.1")
}

#[derive(Clone, Deserialize, Serialize)]
pub struct CanvasConfig {
    /// Canvas instance root (e.g., `https://school.instructure.com`).
    #[serde(default)]
    pub base_url: String,

    /// Access token sent as the ambient `Authorization: Bearer` credential.
    /// Empty means requests go out unauthenticated.
    #[serde(default)]
    pub access_token: String,

    /// Page-size hint passed as `per_page` on every list request.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// `User-Agent` header for API requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            access_token: String::new(),
            per_page: default_per_page(),
            user_agent: default_user_agent(),
        }
    }
}

// The token must never end up in logs.
impl fmt::Debug for CanvasConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasConfig")
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &if self.has_token() { "<redacted>" } else { "" },
            )
            .field("per_page", &self.per_page)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl CanvasConfig {
    /// A base URL is the only hard requirement for talking to Canvas.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    /// Check field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `per_page` is outside
    /// `1..=100` or `base_url` is set but is not an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(ConfigError::InvalidValue {
                field: "canvas.per_page".into(),
                reason: format!("must be between 1 and {MAX_PER_PAGE}, got {}", self.per_page),
            });
        }

        let base_url = self.base_url.trim();
        if !base_url.is_empty()
            && !(base_url.starts_with("https://") || base_url.starts_with("http://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "canvas.base_url".into(),
                reason: format!("expected an http(s) URL, got '{base_url}'"),
            });
        }

        Ok(())
    }
}
