//! The process-wide configuration record.
//!
//! A [`Registry`] is built once at start-up and handed out by reference.
//! It never changes after construction and holds no external resources.

use std::path::{Path, PathBuf};

use crate::config::{Result, Settings};
use crate::package::{PACKAGE_VERSION, source_build_file_name};
use crate::repo_root::{self, ensure_dir, resolve_repo_root};
use crate::storage::StorageLocation;

/// Name of the cloud credentials profile used for uploads.
pub const CLOUD_PROFILE_NAME: &str = "playing_with_gan";

/// Bucket that build artifacts are uploaded to.
pub const STORAGE_BUCKET_NAME: &str = "playing-with-gan";

/// Prefix of source builds inside [`STORAGE_BUCKET_NAME`].
pub const BUILD_ARTIFACTS_PREFIX: &str = "src-builds";

/// Repository paths and storage names, fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    repo_root: PathBuf,
    tmp_dir: PathBuf,
    cloud_profile_name: String,
    storage: StorageLocation,
}

impl Registry {
    /// Build a registry around `root` as-is, without touching the
    /// filesystem.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let repo_root = root.into();
        let tmp_dir = repo_root::tmp_dir(&repo_root);
        Self {
            repo_root,
            tmp_dir,
            cloud_profile_name: CLOUD_PROFILE_NAME.to_string(),
            storage: StorageLocation::new(STORAGE_BUCKET_NAME, BUILD_ARTIFACTS_PREFIX),
        }
    }

    /// Resolve the repository root (explicit or derived) and build the
    /// registry from it.
    ///
    /// # Errors
    ///
    /// Fails if the root cannot be resolved to an existing directory or the
    /// storage names are invalid.
    pub fn resolve(explicit_root: Option<&Path>) -> Result<Self> {
        let root = resolve_repo_root(explicit_root)?;
        let storage = StorageLocation::validated(STORAGE_BUCKET_NAME, BUILD_ARTIFACTS_PREFIX)?;
        let registry = Self {
            storage,
            ..Self::with_root(root)
        };
        tracing::debug!(
            repo_root = %registry.repo_root.display(),
            bucket_url = registry.storage_bucket_url(),
            "registry initialized"
        );
        Ok(registry)
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::resolve(settings.repo_root.as_deref())
    }

    /// Load settings from `settings_file` and the environment, apply
    /// `root_override` on top, and resolve.
    pub fn load(settings_file: Option<&Path>, root_override: Option<&Path>) -> Result<Self> {
        let mut settings = Settings::load(settings_file)?;
        if let Some(root) = root_override {
            settings = settings.with_repo_root(root);
        }
        Self::from_settings(&settings)
    }

    /// Absolute path of the repository root.
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// `<repo_root>/tmp`. May not exist; see [`Registry::ensure_tmp_dir`].
    pub fn tmp_dir(&self) -> &Path {
        &self.tmp_dir
    }

    pub fn cloud_profile_name(&self) -> &str {
        &self.cloud_profile_name
    }

    pub fn storage_bucket_name(&self) -> &str {
        self.storage.bucket()
    }

    pub fn storage_bucket_url(&self) -> &str {
        self.storage.url()
    }

    pub fn build_artifacts_prefix(&self) -> &str {
        self.storage.prefix()
    }

    pub fn storage(&self) -> &StorageLocation {
        &self.storage
    }

    /// Create the temp directory if it is missing and return its path.
    pub fn ensure_tmp_dir(&self) -> Result<&Path> {
        ensure_dir(&self.tmp_dir)?;
        Ok(&self.tmp_dir)
    }

    /// URL a source distribution of the package at `version` is stored at.
    /// Defaults to the current package version.
    pub fn source_build_url(&self, version: Option<&str>) -> String {
        let file_name = source_build_file_name(version.unwrap_or(PACKAGE_VERSION));
        self.storage.artifact_url(&file_name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_constants() {
        let registry = Registry::with_root("/opt/app");
        assert_eq!(registry.cloud_profile_name(), "playing_with_gan");
        assert_eq!(registry.storage_bucket_name(), "playing-with-gan");
        assert_eq!(registry.build_artifacts_prefix(), "src-builds");
        // Repeated reads see the same values.
        assert_eq!(registry.cloud_profile_name(), CLOUD_PROFILE_NAME);
        assert_eq!(registry.storage_bucket_name(), STORAGE_BUCKET_NAME);
        assert_eq!(registry.build_artifacts_prefix(), BUILD_ARTIFACTS_PREFIX);
    }

    #[test]
    fn test_opt_app_layout() {
        let registry = Registry::with_root("/opt/app");
        assert_eq!(registry.repo_root(), Path::new("/opt/app"));
        assert_eq!(registry.tmp_dir(), Path::new("/opt/app/tmp"));
        assert_eq!(registry.storage_bucket_url(), "s3://playing-with-gan/");
    }

    #[test]
    fn test_bucket_url_matches_bucket_name() {
        let registry = Registry::with_root("/opt/app");
        assert_eq!(
            registry.storage_bucket_url(),
            format!("s3://{}/", registry.storage_bucket_name())
        );
    }

    #[test]
    fn test_installed_layout_end_to_end() {
        let install = tempfile::tempdir().unwrap();
        let module = install.path().join("playing_with_gan").join("paths.rs");
        std::fs::create_dir_all(module.parent().unwrap()).unwrap();
        std::fs::write(&module, "").unwrap();

        let root = repo_root::repo_root_from_anchor(&module).unwrap();
        let registry = Registry::resolve(Some(&root)).unwrap();
        let expected = install.path().canonicalize().unwrap();

        assert_eq!(registry.repo_root(), expected);
        assert_eq!(registry.tmp_dir(), expected.join("tmp"));
        assert!(registry.tmp_dir().is_absolute());
        assert!(!registry.tmp_dir().exists());
    }

    #[test]
    fn test_resolve_default_is_idempotent() {
        let first = Registry::resolve(None).unwrap();
        let second = Registry::resolve(None).unwrap();
        assert_eq!(first, second);
        assert!(first.repo_root().is_absolute());
    }

    #[test]
    fn test_resolve_missing_root_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        let err = Registry::resolve(Some(&missing)).unwrap_err();
        assert!(err.is_resolution());
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_ensure_tmp_dir_only_on_request() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Registry::resolve(Some(dir.path())).unwrap();
        assert!(!registry.tmp_dir().exists());

        let created = registry.ensure_tmp_dir().unwrap();
        assert!(created.is_dir());
        assert_eq!(created, registry.tmp_dir());
    }

    #[test]
    fn test_source_build_url() {
        let registry = Registry::with_root("/opt/app");
        assert_eq!(
            registry.source_build_url(None),
            "s3://playing-with-gan/src-builds/playing_with_gan-0.1.0.tar.gz"
        );
        assert_eq!(
            registry.source_build_url(Some("0.2.0")),
            "s3://playing-with-gan/src-builds/playing_with_gan-0.2.0.tar.gz"
        );
    }

    #[test]
    fn test_load_env_root_and_override() {
        Jail::expect_with(|jail| {
            let from_env = jail.directory().join("env-root");
            let from_flag = jail.directory().join("flag-root");
            std::fs::create_dir(&from_env).unwrap();
            std::fs::create_dir(&from_flag).unwrap();
            jail.set_env("GAN_REPO_ROOT", from_env.display());

            let registry = Registry::load(None, None).expect("load");
            assert_eq!(registry.repo_root(), from_env.canonicalize().unwrap());

            let registry = Registry::load(None, Some(&from_flag)).expect("load");
            assert_eq!(registry.repo_root(), from_flag.canonicalize().unwrap());
            Ok(())
        });
    }

    #[test]
    fn test_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();

        let registry = std::sync::Arc::new(Registry::with_root("/opt/app"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || registry.tmp_dir().to_path_buf())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), PathBuf::from("/opt/app/tmp"));
        }
    }
}
