use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or a numeric value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub s3_region: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Minimum success probability (0-100) for a prediction to count as qualified.
    pub qualified_threshold: f64,
    pub max_upload_files: usize,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            s3_region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            qualified_threshold: parse_env("QUALIFIED_THRESHOLD", 75.0)?,
            max_upload_files: parse_env("MAX_UPLOAD_FILES", 10)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }

    /// Request body ceiling for multipart uploads: one full batch plus form overhead.
    pub fn upload_body_limit(&self) -> usize {
        self.max_upload_files
            .saturating_mul(self.max_upload_bytes)
            .saturating_add(64 * 1024)
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/recruiting_test".to_string(),
            db_max_connections: 1,
            s3_bucket: "resumes-test".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            s3_region: "us-east-1".to_string(),
            aws_access_key_id: "test".to_string(),
            aws_secret_access_key: "test".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            qualified_threshold: 75.0,
            max_upload_files: 10,
            max_upload_bytes: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u16 = parse_env("RECRUITING_API_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RECRUITING_API_TEST_BAD_THRESHOLD", "seventy");
        let result: Result<f64> = parse_env("RECRUITING_API_TEST_BAD_THRESHOLD", 75.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_upload_body_limit_covers_full_batch() {
        let config = Config::for_tests();
        assert!(config.upload_body_limit() >= config.max_upload_files * config.max_upload_bytes);
    }
}
