/// Error types for coordinator operations
///
/// Every lookup goes through two stages: the identifier text is parsed
/// first, then the record is fetched. The two failures are distinct
/// variants so callers can tell malformed input from an unknown id.

use crate::model::EntityKind;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for coordinator and store operations
pub type Result<T> = std::result::Result<T, StaffError>;

/// Errors surfaced by coordinators
#[derive(Debug, Error)]
pub enum StaffError {
    /// Identifier text is not a well-formed UUID
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Well-formed identifier with no matching record
    #[error("Could not find {kind} with id: {id}")]
    NotFound { kind: EntityKind, id: Uuid },

    /// Store failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StaffError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StaffError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            StaffError::NotFound { .. } => StatusCode::NOT_FOUND,
            StaffError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Length of the hyphenated form, e.g. `67e55044-10b1-426f-9247-bb680e5fe0c8`
const HYPHENATED_LEN: usize = 36;

/// Parse identifier text into a UUID
///
/// Only the hyphenated form is accepted. Padded, simple, braced and URN
/// spellings are malformed.
pub fn parse_id(raw: &str) -> Result<Uuid> {
    if raw.len() != HYPHENATED_LEN {
        return Err(StaffError::InvalidIdentifier(raw.to_string()));
    }
    Uuid::parse_str(raw).map_err(|_| StaffError::InvalidIdentifier(raw.to_string()))
}

impl IntoResponse for StaffError {
    fn into_response(self) -> Response {
        // Not-found kinds collapse into one message so the entity kind never leaks
        let message = match &self {
            StaffError::NotFound { .. } => "Data doesn't match",
            StaffError::InvalidIdentifier(_) => "Invalid identifier",
            StaffError::Database(e) => {
                tracing::error!("Database failure while handling request: {}", e);
                "Internal server error"
            }
        };

        let body = json!({
            "timestamp": chrono::Local::now().naive_local(),
            "message": message,
        });

        (self.status_code(), Json(body)).into_response()
    }
}
