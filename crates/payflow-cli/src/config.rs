//! # Demo Configuration
//!
//! Environment-driven settings for the demo binary.

/// How the fake gateway should respond to charges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    /// Approve every charge
    Approve,
    /// Decline every charge
    Decline,
}

/// Demo configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment (development, staging, production)
    pub environment: String,
    /// Fake gateway behavior
    pub gateway_mode: GatewayMode,
}

impl AppConfig {
    /// Load from environment variables (`ENVIRONMENT`, `GATEWAY_MODE`)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let gateway_mode = match std::env::var("GATEWAY_MODE").as_deref() {
            Ok("decline") => GatewayMode::Decline,
            _ => GatewayMode::Approve,
        };

        Self {
            environment,
            gateway_mode,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        std::env::remove_var("ENVIRONMENT");
        std::env::remove_var("GATEWAY_MODE");

        let config = AppConfig::from_env();
        assert_eq!(config.environment, "development");
        assert_eq!(config.gateway_mode, GatewayMode::Approve);
    }

    #[test]
    fn test_decline_mode() {
        std::env::set_var("GATEWAY_MODE", "decline");
        let config = AppConfig::from_env();
        assert_eq!(config.gateway_mode, GatewayMode::Decline);
        std::env::remove_var("GATEWAY_MODE");
    }
}
