use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response DTO for the health check
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    pub status: String,
    pub environment: String,
    /// Current instant, RFC 3339
    pub timestamp: DateTime<Utc>,
}
