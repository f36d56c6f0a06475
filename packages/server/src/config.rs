use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    /// Origins allowed by CORS; empty means any origin (development)
    pub allowed_origins: Vec<String>,
    /// Identities (user ids) granted admin capabilities
    pub admin_identifiers: Vec<String>,
    /// Webhook that receives report notifications; reports are still
    /// persisted when unset
    pub report_webhook_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "emberline".to_string()),
            allowed_origins: csv_var("ALLOWED_ORIGINS"),
            admin_identifiers: csv_var("ADMIN_IDENTIFIERS"),
            report_webhook_url: env::var("REPORT_WEBHOOK_URL").ok(),
        })
    }
}

/// Comma-separated list variable; unset or empty yields an empty list.
fn csv_var(name: &str) -> Vec<String> {
    env::var(name)
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_var_splits_and_trims() {
        env::set_var("CSV_VAR_TEST_LIST", "https://a.example, https://b.example ,");
        assert_eq!(
            csv_var("CSV_VAR_TEST_LIST"),
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ]
        );
        env::remove_var("CSV_VAR_TEST_LIST");

        assert!(csv_var("CSV_VAR_TEST_UNSET").is_empty());
    }
}
