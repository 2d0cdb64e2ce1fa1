//! Error types shared by the site model and the frontend.

use thiserror::Error;

/// Failure of a single tab fragment load.
///
/// Terminal for that load attempt: the frontend renders it inline and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("{0}")]
    Network(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl LoadError {
    /// Text shown in place of the content region.
    pub fn user_message(&self) -> String {
        format!("Error loading content: {}. Please try again.", self)
    }
}

/// Problems found while reading the embedded site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site configuration declares no tabs")]
    NoTabs,
    #[error("duplicate tab id '{0}'")]
    DuplicateTab(String),
    #[error("duplicate catalog entry id '{0}'")]
    DuplicateCatalogEntry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_message_contains_code() {
        let err = LoadError::HttpStatus(404);
        assert_eq!(
            err.user_message(),
            "Error loading content: HTTP error! status: 404. Please try again."
        );
    }

    #[test]
    fn test_network_message_passes_through() {
        let err = LoadError::Network("Failed to fetch".to_string());
        assert!(err.user_message().contains("Failed to fetch"));
    }
}
