//! Configuration module
//!
//! Configuration is read from environment variables once at startup (a `.env`
//! file is loaded first when present). Any problem found here is fatal: the
//! process refuses to start rather than run with a half-valid configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::storage_types::StorageBackend;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const HTTP_TIMEOUT_SECS: u64 = 5;
const UPLOAD_TIMEOUT_SECS: u64 = 300;
const RECENT_VIDEOS_LIMIT: usize = 5;
const MAX_VIDEO_SIZE_MB: usize = 500;
const VIDEO_ALLOWED_EXTENSIONS: &str = "mp4,mov,webm,mkv,avi,m4v";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(anyhow::anyhow!("Unknown ENVIRONMENT: {}", other)),
        }
    }
}

/// Console log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow::anyhow!("Unknown LOG_FORMAT: {}", other)),
        }
    }
}

/// HTTP server settings
#[derive(Clone, Debug)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
    /// Timeout for regular requests
    pub timeout: Duration,
    /// Timeout for the upload route, which has to receive the whole file
    pub upload_timeout: Duration,
    pub cors_origins: Vec<String>,
}

/// S3-compatible object store settings
#[derive(Clone, Debug, Default)]
pub struct S3Settings {
    pub bucket: Option<String>,
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, Yandex Object Storage, ...)
    pub endpoint: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LocalStorageSettings {
    pub path: Option<String>,
    pub base_url: Option<String>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub log_format: LogFormat,
    pub http: HttpConfig,
    /// Capacity of the recently uploaded videos list
    pub recent_videos_limit: usize,
    pub max_video_size_bytes: usize,
    pub video_allowed_extensions: Vec<String>,
    pub storage_backend: StorageBackend,
    pub s3: S3Settings,
    pub local: LocalStorageSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup and validate it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let environment = match var("ENVIRONMENT").or_else(|| var("APP_ENV")) {
            Some(value) => value.parse()?,
            None => Environment::Development,
        };

        let log_format = match var("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None if environment.is_production() => LogFormat::Json,
            None => LogFormat::Compact,
        };

        let port = match var("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = var("HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(HTTP_TIMEOUT_SECS);
        let upload_timeout_secs = var("UPLOAD_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(UPLOAD_TIMEOUT_SECS);

        let cors_origins = var("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Unlike the other numeric settings, a bad limit is not silently replaced:
        // "-1" or "abc" here is a deployment mistake.
        let recent_videos_limit = match var("RECENT_VIDEOS_LIMIT") {
            Some(value) => value.parse::<usize>().map_err(|_| {
                anyhow::anyhow!("RECENT_VIDEOS_LIMIT must be a positive integer, got '{}'", value)
            })?,
            None => RECENT_VIDEOS_LIMIT,
        };

        let max_video_size_mb = var("MAX_VIDEO_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_VIDEO_SIZE_MB);
        let max_video_size_bytes = max_video_size_mb
            .checked_mul(1024 * 1024)
            .ok_or_else(|| anyhow::anyhow!("MAX_VIDEO_SIZE_MB is too large"))?;

        let video_allowed_extensions = var("VIDEO_ALLOWED_EXTENSIONS")
            .unwrap_or_else(|| VIDEO_ALLOWED_EXTENSIONS.to_string())
            .split(',')
            .map(|s| s.trim().trim_start_matches('.').to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let storage_backend = match var("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::S3,
        };

        let config = Config {
            environment,
            log_format,
            http: HttpConfig {
                host: var("HTTP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port,
                timeout: Duration::from_secs(timeout_secs),
                upload_timeout: Duration::from_secs(upload_timeout_secs),
                cors_origins,
            },
            recent_videos_limit,
            max_video_size_bytes,
            video_allowed_extensions,
            storage_backend,
            s3: S3Settings {
                bucket: var("S3_BUCKET"),
                region: var("S3_REGION").or_else(|| var("AWS_REGION")),
                endpoint: var("S3_ENDPOINT"),
                access_key: var("S3_ACCESS_KEY"),
                secret_key: var("S3_SECRET_KEY"),
            },
            local: LocalStorageSettings {
                path: var("LOCAL_STORAGE_PATH"),
                base_url: var("LOCAL_STORAGE_BASE_URL"),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.recent_videos_limit == 0 {
            return Err(anyhow::anyhow!("RECENT_VIDEOS_LIMIT must be greater than 0"));
        }

        if self.max_video_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_VIDEO_SIZE_MB cannot be 0"));
        }

        if self.http.timeout.is_zero() {
            return Err(anyhow::anyhow!("HTTP_TIMEOUT_SECS cannot be 0"));
        }

        if self.http.upload_timeout.is_zero() {
            return Err(anyhow::anyhow!("UPLOAD_TIMEOUT_SECS cannot be 0"));
        }

        if self.is_production() && self.http.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3.bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET must be set when using S3 storage backend"
                    ));
                }
                if self.s3.region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when using S3 storage backend"
                    ));
                }
                if self.s3.access_key.is_some() != self.s3.secret_key.is_some() {
                    return Err(anyhow::anyhow!(
                        "S3_ACCESS_KEY and S3_SECRET_KEY must be set together"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local.path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when using local storage backend"
                    ));
                }
                if self.local.base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set when using local storage backend"
                    ));
                }
            }
        }

        Ok(())
    }
}
