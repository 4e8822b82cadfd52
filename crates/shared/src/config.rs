//! Application configuration management.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3005
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory where the local backend stores files.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    /// Public URL path prefix under which local files are served inline.
    #[serde(default = "default_public_base")]
    pub public_base: String,
    /// URL path prefix for the local forced-download route.
    #[serde(default = "default_download_base")]
    pub download_base: String,
    /// Maximum size of a single uploaded file in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
    /// Maximum size of one multipart request body in bytes.
    #[serde(default = "default_request_body_limit")]
    pub request_body_limit: usize,
    /// Presigned preview URL TTL in seconds.
    #[serde(default = "default_preview_ttl")]
    pub preview_ttl_secs: u64,
    /// Presigned download URL TTL in seconds.
    #[serde(default = "default_download_ttl")]
    pub download_ttl_secs: u64,
    /// S3-compatible remote storage credentials. Presence switches the
    /// process to the remote backend.
    #[serde(default)]
    pub s3: Option<S3Config>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_base: default_public_base(),
            download_base: default_download_base(),
            max_file_size: default_max_file_size(),
            request_body_limit: default_request_body_limit(),
            preview_ttl_secs: default_preview_ttl(),
            download_ttl_secs: default_download_ttl(),
            s3: None,
        }
    }
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("./uploads")
}

fn default_public_base() -> String {
    "/uploads".to_string()
}

fn default_download_base() -> String {
    "/download".to_string()
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024 // 10 MiB per file
}

fn default_request_body_limit() -> usize {
    64 * 1024 * 1024 // 64 MiB per multipart request
}

fn default_preview_ttl() -> u64 {
    3600 // 1 hour
}

fn default_download_ttl() -> u64 {
    86400 // 24 hours
}

/// S3-compatible remote storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Config {
    /// Bucket name.
    pub bucket: String,
    /// Bucket region.
    pub region: String,
    /// Access key ID.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Custom endpoint for S3-compatible providers (optional).
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl S3Config {
    /// Read remote credentials from the conventional AWS environment
    /// variables. Returns `None` unless bucket, region, and both key halves
    /// are all present.
    #[must_use]
    pub fn from_aws_env() -> Option<Self> {
        let bucket = std::env::var("S3_BUCKET_NAME").ok()?;
        let region = std::env::var("AWS_REGION").ok()?;
        let access_key_id = std::env::var("AWS_ACCESS_KEY_ID").ok()?;
        let secret_access_key = std::env::var("AWS_SECRET_ACCESS_KEY").ok()?;

        Some(Self {
            bucket,
            region,
            access_key_id,
            secret_access_key,
            endpoint: std::env::var("S3_ENDPOINT").ok(),
        })
    }
}

/// Which storage backend the process runs against.
///
/// Decided exactly once at startup and never toggled afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    /// Files live in a local directory served statically.
    Local,
    /// Files live in a remote S3-compatible bucket behind signed URLs.
    Remote,
}

impl fmt::Display for BackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Remote credentials may come either from the `storage.s3` section or
    /// from the conventional AWS environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FILEDROP").separator("__"))
            .build()?;

        let mut config: Self = config.try_deserialize()?;
        if config.storage.s3.is_none() {
            config.storage.s3 = S3Config::from_aws_env();
        }

        Ok(config)
    }

    /// The storage backend this configuration selects.
    #[must_use]
    pub fn backend_mode(&self) -> BackendMode {
        if self.storage.s3.is_some() {
            BackendMode::Remote
        } else {
            BackendMode::Local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3005);
    }

    #[test]
    fn test_storage_defaults() {
        let storage = StorageConfig::default();
        assert_eq!(storage.upload_dir, PathBuf::from("./uploads"));
        assert_eq!(storage.public_base, "/uploads");
        assert_eq!(storage.download_base, "/download");
        assert_eq!(storage.max_file_size, 10 * 1024 * 1024);
        assert_eq!(storage.preview_ttl_secs, 3600);
        assert_eq!(storage.download_ttl_secs, 86400);
        assert!(storage.s3.is_none());
    }

    #[test]
    fn test_backend_mode_local_without_credentials() {
        let config = AppConfig::default();
        assert_eq!(config.backend_mode(), BackendMode::Local);
    }

    #[test]
    fn test_backend_mode_remote_with_credentials() {
        let mut config = AppConfig::default();
        config.storage.s3 = Some(S3Config {
            bucket: "files".to_string(),
            region: "ap-southeast-2".to_string(),
            access_key_id: "AKIA".to_string(),
            secret_access_key: "secret".to_string(),
            endpoint: None,
        });
        assert_eq!(config.backend_mode(), BackendMode::Remote);
    }

    #[test]
    fn test_backend_mode_display() {
        assert_eq!(BackendMode::Local.to_string(), "local");
        assert_eq!(BackendMode::Remote.to_string(), "remote");
    }

    #[test]
    fn test_s3_from_aws_env_requires_all_variables() {
        temp_env::with_vars(
            [
                ("S3_BUCKET_NAME", Some("files")),
                ("AWS_REGION", Some("ap-southeast-2")),
                ("AWS_ACCESS_KEY_ID", Some("AKIA")),
                ("AWS_SECRET_ACCESS_KEY", None::<&str>),
            ],
            || {
                assert!(S3Config::from_aws_env().is_none());
            },
        );
    }

    #[test]
    fn test_s3_from_aws_env_complete() {
        temp_env::with_vars(
            [
                ("S3_BUCKET_NAME", Some("files")),
                ("AWS_REGION", Some("ap-southeast-2")),
                ("AWS_ACCESS_KEY_ID", Some("AKIA")),
                ("AWS_SECRET_ACCESS_KEY", Some("secret")),
                ("S3_ENDPOINT", None),
            ],
            || {
                let s3 = S3Config::from_aws_env().expect("all variables set");
                assert_eq!(s3.bucket, "files");
                assert_eq!(s3.region, "ap-southeast-2");
                assert!(s3.endpoint.is_none());
            },
        );
    }
}
