use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the SpbMetro library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Map file could not be located at the resolved path.
    #[error("map file not found at {path}")]
    MapNotFound { path: PathBuf },

    /// Raised when the map document fails structural validation.
    #[error("invalid map data: {message}")]
    InvalidMap { message: String },

    /// Raised when a station name could not be found in the network.
    #[error("unknown station name: {name}{}", format_suggestions(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a line number could not be found in the network.
    #[error("unknown line number: {number}")]
    UnknownLine { number: u32 },

    /// Raised when no route could be found between two stations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any stations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
