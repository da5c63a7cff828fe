//! Object-storage naming: bucket URLs and artifact keys.
//!
//! Nothing here talks to S3. The types only spell out the `s3://<bucket>/`
//! convention so every consumer builds URLs the same way.

use serde::Serialize;

use crate::config::{ConfigError, Result};

/// URL scheme of the object store.
pub const S3_SCHEME: &str = "s3://";

const MIN_BUCKET_LEN: usize = 3;
const MAX_BUCKET_LEN: usize = 63;

/// The URL of the root of `bucket`: `s3://<bucket>/`.
pub fn bucket_url(bucket: &str) -> String {
    format!("{S3_SCHEME}{bucket}/")
}

/// Check `name` against the S3 bucket naming rules.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] describing the first rule broken.
pub fn validate_bucket_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        key: "storage_bucket_name".to_string(),
        reason: format!("'{name}' {reason}"),
    };

    if !(MIN_BUCKET_LEN..=MAX_BUCKET_LEN).contains(&name.len()) {
        return Err(invalid("must be between 3 and 63 characters long"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '.'))
    {
        return Err(invalid(&format!("contains invalid character '{c}'")));
    }
    let edge_ok = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());
    if !edge_ok(name.chars().next()) || !edge_ok(name.chars().last()) {
        return Err(invalid("must start and end with a letter or digit"));
    }
    if name.contains("..") {
        return Err(invalid("must not contain consecutive dots"));
    }
    if name.parse::<std::net::Ipv4Addr>().is_ok() {
        return Err(invalid("must not be formatted as an IP address"));
    }
    Ok(())
}

/// A bucket together with the prefix build artifacts are stored under.
///
/// The URL is computed from the bucket name on construction and the fields
/// are private, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageLocation {
    bucket: String,
    url: String,
    prefix: String,
}

impl StorageLocation {
    /// Build a location without validating the bucket name.
    pub fn new(bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        let bucket = bucket.into();
        let url = bucket_url(&bucket);
        Self {
            bucket,
            url,
            prefix: prefix.into(),
        }
    }

    /// Build a location, rejecting invalid bucket names and empty prefixes.
    pub fn validated(bucket: impl Into<String>, prefix: impl Into<String>) -> Result<Self> {
        let location = Self::new(bucket, prefix);
        validate_bucket_name(&location.bucket)?;
        if location.prefix.trim_matches('/').is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "build_artifacts_prefix".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(location)
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// `s3://<bucket>/`.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Full URL of `key` inside the bucket.
    pub fn object_url(&self, key: &str) -> String {
        format!("{}{}", self.url, key.trim_start_matches('/'))
    }

    /// Key of `file_name` under the artifacts prefix.
    pub fn artifact_key(&self, file_name: &str) -> String {
        format!(
            "{}/{}",
            self.prefix.trim_end_matches('/'),
            file_name.trim_start_matches('/')
        )
    }

    /// Full URL of `file_name` under the artifacts prefix.
    pub fn artifact_url(&self, file_name: &str) -> String {
        self.object_url(&self.artifact_key(file_name))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
