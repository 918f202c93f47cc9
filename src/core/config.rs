use std::env;

/// Runtime profile for an instance. Selects the defaults that differ
/// between the dev and prod deployments (port, debug flag, seed data,
/// environment tag stamped on tickets).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvProfile {
    Development,
    Production,
}

impl EnvProfile {
    /// Derive the profile from the `ENVIRONMENT` label.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("production") || label.eq_ignore_ascii_case("prod") {
            EnvProfile::Production
        } else {
            EnvProfile::Development
        }
    }

    /// Short tag written into ticket records created by this instance.
    pub fn tag(&self) -> &'static str {
        match self {
            EnvProfile::Development => "dev",
            EnvProfile::Production => "prod",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            EnvProfile::Development => 3001,
            EnvProfile::Production => 3002,
        }
    }

    pub fn default_debug(&self) -> bool {
        matches!(self, EnvProfile::Development)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Instance label reported by the health and list endpoints.
    pub environment: String,
    pub profile: EnvProfile,
    /// Operational flag only: controls the default log verbosity.
    pub debug: bool,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            // Only error if it's not "file not found" - that's acceptable
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let profile = EnvProfile::from_label(&environment);

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| profile.default_port().to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let debug = env::var("DEBUG")
            .unwrap_or_else(|_| profile.default_debug().to_string())
            .parse::<bool>()
            .map_err(|_| "DEBUG must be true or false".to_string())?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            environment,
            profile,
            debug,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Ticketflow API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for Ticketflow".to_string());

        Ok(Self {
            title,
            version,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_label() {
        assert_eq!(EnvProfile::from_label("production"), EnvProfile::Production);
        assert_eq!(EnvProfile::from_label("PROD"), EnvProfile::Production);
        assert_eq!(EnvProfile::from_label("development"), EnvProfile::Development);
        assert_eq!(EnvProfile::from_label("staging"), EnvProfile::Development);
        assert_eq!(EnvProfile::from_label(""), EnvProfile::Development);
    }

    #[test]
    fn test_profile_defaults() {
        assert_eq!(EnvProfile::Development.tag(), "dev");
        assert_eq!(EnvProfile::Production.tag(), "prod");
        assert_eq!(EnvProfile::Development.default_port(), 3001);
        assert_eq!(EnvProfile::Production.default_port(), 3002);
        assert!(EnvProfile::Development.default_debug());
        assert!(!EnvProfile::Production.default_debug());
    }
}
