//! Backend endpoint configuration resolved at build time.
//!
//! The WASM bundle has no process environment at runtime, so the only knob is
//! `DOCCHAT_API_URL`, captured by `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend base URL used by every gateway call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ApiConfig {
    /// Build config from an optional override.
    ///
    /// Blank overrides fall back to [`DEFAULT_API_URL`]; trailing slashes are
    /// trimmed so paths can be appended with a leading `/`.
    pub fn new(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Config captured from `DOCCHAT_API_URL` at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("DOCCHAT_API_URL"))
    }

    /// Join a backend path (`/documents`, `/chat`, ...) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
