//! Failures surfaced by the store API client.

use std::error::Error as StdError;

use thiserror::Error;

/// Which listing a failed call was fetching. Only affects the wording of
/// the user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Categories,
    Products,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The server answered with a non-success status.
    #[error("Request to {endpoint} failed with status {status}")]
    RequestFailed { endpoint: String, status: u16 },

    /// Connect, timeout, or body decode failure.
    #[error("Transport error for {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL cannot carry path segments.
    #[error("Invalid base URL '{url}'")]
    InvalidBaseUrl { url: String },
}

impl CatalogError {
    /// Notice text shown to the user.
    pub fn user_message(&self, resource: Resource) -> String {
        match self {
            CatalogError::RequestFailed { .. } => match resource {
                Resource::Categories => "Failed to load categories".to_string(),
                Resource::Products => "Failed to load products".to_string(),
            },
            CatalogError::Transport { source, .. } => {
                format!("Network error: {}", describe(source))
            }
            CatalogError::InvalidBaseUrl { url } => format!("Network error: invalid URL {url}"),
        }
    }
}

/// Short classification followed by the innermost cause's own message.
fn describe(err: &reqwest::Error) -> String {
    let class = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "unable to reach server"
    } else if err.is_decode() {
        "unexpected response body"
    } else {
        "request failed"
    };
    format!("{class} ({})", root_cause(err))
}

fn root_cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut cause = err;
    while let Some(next) = cause.source() {
        cause = next;
    }
    cause
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failure_wording_depends_on_resource() {
        let err = CatalogError::RequestFailed {
            endpoint: "/products".into(),
            status: 500,
        };
        assert_eq!(
            err.user_message(Resource::Categories),
            "Failed to load categories"
        );
        assert_eq!(err.user_message(Resource::Products), "Failed to load products");
    }

    #[test]
    fn display_includes_status() {
        let err = CatalogError::RequestFailed {
            endpoint: "/products/categories".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Request to /products/categories failed with status 404"
        );
    }

    #[test]
    fn invalid_base_url_message() {
        let err = CatalogError::InvalidBaseUrl {
            url: "mailto:x".into(),
        };
        assert!(err.user_message(Resource::Products).starts_with("Network error"));
    }

    #[derive(Debug, Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, Error)]
    #[error("connection reset by peer")]
    struct Inner;

    #[test]
    fn root_cause_walks_to_innermost_error() {
        let err = Outer(Inner);
        assert_eq!(root_cause(&err).to_string(), "connection reset by peer");
        assert_eq!(root_cause(&Inner).to_string(), "connection reset by peer");
    }
}
