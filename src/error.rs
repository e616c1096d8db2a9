//! Error types for the portfolio pipeline
//!
//! Fetch and decode failures are distinct variants here but the
//! orchestrator collapses both into a single initialization failure.

use thiserror::Error;

use crate::loader::Resource;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to fetch {}: {source}", .resource.path())]
    Fetch {
        resource: Resource,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {source}", .resource.path())]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    /// A required insertion point is absent from the skeleton.
    #[error("skeleton has no element with id '{0}'")]
    MissingAnchor(String),

    #[error("portfolio already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, SiteError>;
