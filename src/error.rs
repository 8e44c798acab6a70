use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for the planner.
/// Library functions return Result<T, PlanError>; the binary wraps it in anyhow.
#[derive(Debug, Error)]
pub enum PlanError {
    /// None of the rated topics exist in the catalog (or nothing was rated at all).
    #[error("no ratable topics: {rated} rating(s) given, none match the topic catalog")]
    NoRatableTopics { rated: usize },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("logging already initialised: {0}")]
    Logging(String),
}

impl PlanError {
    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        PlanError::Io {
            path: path.into(),
            source,
        }
    }

    /// Pipeline stage the error belongs to, used as a structured log field.
    pub fn stage(&self) -> &'static str {
        match self {
            PlanError::NoRatableTopics { .. } => "priority",
            PlanError::Io { .. } => "io",
            PlanError::Json(_) => "json_parse",
            PlanError::Toml(_) => "toml_parse",
            PlanError::InvalidCatalog(_) => "catalog",
            PlanError::Logging(_) => "startup",
        }
    }

    /// True for data conditions the caller should report back to the user
    /// rather than treat as a failure of the planner itself.
    pub fn is_rejection(&self) -> bool {
        matches!(self, PlanError::NoRatableTopics { .. })
    }
}
