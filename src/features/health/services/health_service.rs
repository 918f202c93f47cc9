use chrono::Utc;

use crate::features::health::dtos::HealthResponseDto;
use crate::shared::constants::HEALTH_STATUS_HEALTHY;

/// Service answering liveness checks with the instance label.
pub struct HealthService {
    environment: String,
}

impl HealthService {
    pub fn new(environment: String) -> Self {
        Self { environment }
    }

    pub fn check(&self) -> HealthResponseDto {
        HealthResponseDto {
            status: HEALTH_STATUS_HEALTHY.to_string(),
            environment: self.environment.clone(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_reports_healthy_and_label() {
        let service = HealthService::new("production".to_string());
        let health = service.check();

        assert_eq!(health.status, "healthy");
        assert_eq!(health.environment, "production");
    }
}
