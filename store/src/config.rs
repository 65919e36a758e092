//! API endpoint configuration.
//!
//! All four entity endpoints hang off one base URL, taken from the
//! `CRM_API_BASE_URL` environment variable at build time.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use shared::Entity;

/// Used when `CRM_API_BASE_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Configuration baked in at compile time
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("CRM_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/{resource}`
    pub fn collection_url<E: Entity>(&self) -> String {
        format!("{}/api/{}", self.base_url, E::RESOURCE)
    }

    /// `{base}/api/{resource}/{id}` with the id percent-encoded
    pub fn item_url<E: Entity>(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url::<E>(),
            utf8_percent_encode(id, PATH_SEGMENT_ENCODE_SET)
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
