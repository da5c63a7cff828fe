//! Output formatting helpers for the `gan` CLI.
//!
//! Provides JSON output, two-column key/value tables, and the flat JSON view
//! of the registry.

use std::io::{self, Write};

use gan_config::Registry;
use serde::Serialize;

/// Flat JSON view of a [`Registry`], one key per configuration value.
#[derive(Serialize)]
pub struct RegistryView<'a> {
    pub repo_root: String,
    pub tmp_dir: String,
    pub cloud_profile_name: &'a str,
    pub storage_bucket_name: &'a str,
    pub storage_bucket_url: &'a str,
    pub build_artifacts_prefix: &'a str,
}

impl<'a> RegistryView<'a> {
    pub fn from_registry(registry: &'a Registry) -> Self {
        Self {
            repo_root: registry.repo_root().display().to_string(),
            tmp_dir: registry.tmp_dir().display().to_string(),
            cloud_profile_name: registry.cloud_profile_name(),
            storage_bucket_name: registry.storage_bucket_name(),
            storage_bucket_url: registry.storage_bucket_url(),
            build_artifacts_prefix: registry.build_artifacts_prefix(),
        }
    }

    /// Key/value rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("repo_root", self.repo_root.clone()),
            ("tmp_dir", self.tmp_dir.clone()),
            ("cloud_profile_name", self.cloud_profile_name.to_string()),
            ("storage_bucket_name", self.storage_bucket_name.to_string()),
            ("storage_bucket_url", self.storage_bucket_url.to_string()),
            ("build_artifacts_prefix", self.build_artifacts_prefix.to_string()),
        ]
    }
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Format key/value rows with the keys padded to a common width.
pub fn format_key_values(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(key, value)| format!("{:<width$}  {}\n", key, value, width = width))
        .collect()
}

/// Print key/value rows to stdout.
pub fn output_key_values(rows: &[(&str, String)]) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write!(handle, "{}", format_key_values(rows));
}
