use std::sync::Arc;

use axum::{extract::State, Json};

use crate::features::health::dtos::HealthResponseDto;
use crate::features::health::services::HealthService;

/// Health check
///
/// No side effects, never fails.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponseDto),
    ),
    tag = "health"
)]
pub async fn health_check(
    State(service): State<Arc<HealthService>>,
) -> Json<HealthResponseDto> {
    Json(service.check())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::health::routes;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check_reports_configured_environment() {
        let service = Arc::new(HealthService::new("development".to_string()));
        let server = TestServer::new(routes::routes(service)).unwrap();

        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let health: HealthResponseDto = response.json();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.environment, "development");
    }
}
