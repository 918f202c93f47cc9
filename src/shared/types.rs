use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of every error response: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
