//! Error types and layered settings for the playing-with-gan registry.
//!
//! [`Settings`] holds the handful of values a user may inject at start-up
//! (currently only the repository root). They are layered with figment:
//! built-in defaults, then an optional YAML file, then `GAN_*` environment
//! variables. Command-line flags sit on top of all three in the `gan` binary.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of the environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "GAN_";

/// Environment variable holding an explicit repository root.
pub const REPO_ROOT_ENV: &str = "GAN_REPO_ROOT";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while building the registry.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The repository root could not be resolved to an absolute path.
    #[error("cannot resolve repository root '{}': {source}", .path.display())]
    Resolution {
        /// The path that failed to resolve.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The repository root resolved, but to something other than a directory.
    #[error("repository root '{}' is not a directory", .path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A settings file was requested explicitly but does not exist.
    #[error("settings file '{}' does not exist", .path.display())]
    MissingConfigFile {
        /// The requested settings file.
        path: PathBuf,
    },

    /// The layered settings could not be extracted.
    #[error("failed to load settings: {0}")]
    Settings(#[from] Box<figment::Error>),

    /// Settings could not be rendered as YAML.
    #[error("failed to serialize settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },

    /// A directory could not be created on request.
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Returns `true` for the failures that mean "we do not know where the
    /// repository is".
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            ConfigError::Resolution { .. } | ConfigError::NotADirectory { .. }
        )
    }
}

/// A specialized `Result` type for registry operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// User-injectable settings.
///
/// Unset fields fall back to the built-in derivations in
/// [`crate::repo_root`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Explicit repository root. `GAN_REPO_ROOT` in the environment.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_path_text"
    )]
    pub repo_root: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the defaults, an optional YAML file and the
    /// environment, in increasing order of precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfigFile`] if `file` is given but does
    /// not exist, and [`ConfigError::Settings`] if any layer holds a value of
    /// the wrong shape.
    pub fn load(file: Option<&Path>) -> Result<Settings> {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        if let Some(path) = file {
            if !path.is_file() {
                return Err(ConfigError::MissingConfigFile {
                    path: path.to_path_buf(),
                });
            }
            tracing::debug!(path = %path.display(), "merging settings file");
            figment = figment.merge(Yaml::file(path));
        }

        // The root is read raw below: figment would parse `2024` or `[data]`
        // as a number or an array.
        let mut settings: Settings = figment
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["REPO_ROOT"]))
            .extract()
            .map_err(Box::new)?;

        if let Some(root) = env::var_os(REPO_ROOT_ENV) {
            settings.repo_root = Some(PathBuf::from(root));
        }

        Ok(settings.normalized())
    }

    /// Override the repository root, e.g. from a command-line flag.
    pub fn with_repo_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.repo_root = Some(root.into());
        self.normalized()
    }

    /// Render the settings as YAML, in the same shape [`Settings::load`]
    /// accepts.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    // An empty `GAN_REPO_ROOT=` means "unset", not "the current directory".
    fn normalized(mut self) -> Self {
        self.repo_root = self.repo_root.filter(|p| !p.as_os_str().is_empty());
        self
    }
}

/// Accept any scalar as path text, so `repo_root: 2024` names a directory
/// called `2024` rather than failing as a number.
fn deserialize_path_text<'de, D>(deserializer: D) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PathText;

    impl<'de> Visitor<'de> for PathText {
        type Value = Option<PathBuf>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a path")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            Ok(Some(PathBuf::from(v)))
        }

        fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
            Ok(Some(PathBuf::from(v)))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
            Ok(Some(PathBuf::from(v.to_string())))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
            Ok(Some(PathBuf::from(v.to_string())))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
            Ok(Some(PathBuf::from(v.to_string())))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Self::Value, E> {
            Ok(Some(PathBuf::from(v.to_string())))
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(
            self,
            deserializer: D2,
        ) -> std::result::Result<Self::Value, D2::Error> {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(PathText)
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
    fn test_defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let settings = Settings::load(None).expect("load");
            assert_eq!(settings, Settings::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_sets_repo_root() {
        Jail::expect_with(|jail| {
            jail.set_env("GAN_REPO_ROOT", "/srv/gan");
            let settings = Settings::load(None).expect("load");
            assert_eq!(settings.repo_root, Some(PathBuf::from("/srv/gan")));
            Ok(())
        });
    }

    #[test]
    fn test_empty_env_is_unset() {
        Jail::expect_with(|jail| {
            jail.set_env("GAN_REPO_ROOT", "");
            let settings = Settings::load(None).expect("load");
            assert!(settings.repo_root.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file("gan.yaml", "repo_root: /from/file\n")?;
            let from_file = Settings::load(Some(Path::new("gan.yaml"))).expect("load");
            assert_eq!(from_file.repo_root, Some(PathBuf::from("/from/file")));

            jail.set_env("GAN_REPO_ROOT", "/from/env");
            let from_env = Settings::load(Some(Path::new("gan.yaml"))).expect("load");
            assert_eq!(from_env.repo_root, Some(PathBuf::from("/from/env")));
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let err = Settings::load(Some(Path::new("nope.yaml"))).unwrap_err();
            assert!(matches!(err, ConfigError::MissingConfigFile { .. }));
            assert!(err.to_string().contains("nope.yaml"));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_a_settings_error() {
        Jail::expect_with(|jail| {
            jail.create_file("gan.yaml", "repo_root: [1, 2]\n")?;
            let err = Settings::load(Some(Path::new("gan.yaml"))).unwrap_err();
            assert!(matches!(err, ConfigError::Settings(_)));
            Ok(())
        });
    }

    #[test]
    fn test_env_root_that_looks_like_a_scalar() {
        Jail::expect_with(|jail| {
            for raw in ["2024", "true", "[data]", "1.50"] {
                jail.set_env("GAN_REPO_ROOT", raw);
                let settings = Settings::load(None).expect("load");
                assert_eq!(settings.repo_root, Some(PathBuf::from(raw)));
            }
            Ok(())
        });
    }

    #[test]
    fn test_file_root_that_looks_like_a_scalar() {
        Jail::expect_with(|jail| {
            jail.create_file("gan.yaml", "repo_root: 2024\n")?;
            let settings = Settings::load(Some(Path::new("gan.yaml"))).expect("load");
            assert_eq!(settings.repo_root, Some(PathBuf::from("2024")));

            jail.create_file("gan.yaml", "repo_root: true\n")?;
            let settings = Settings::load(Some(Path::new("gan.yaml"))).expect("load");
            assert_eq!(settings.repo_root, Some(PathBuf::from("true")));
            Ok(())
        });
    }

    #[test]
    fn test_null_file_root_is_unset() {
        Jail::expect_with(|jail| {
            jail.create_file("gan.yaml", "repo_root: ~\n")?;
            let settings = Settings::load(Some(Path::new("gan.yaml"))).expect("load");
            assert!(settings.repo_root.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_with_repo_root_overrides() {
        let settings = Settings {
            repo_root: Some(PathBuf::from("/a")),
        }
        .with_repo_root("/b");
        assert_eq!(settings.repo_root, Some(PathBuf::from("/b")));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let settings = Settings::default().with_repo_root("/opt/app");
        let yaml = settings.to_yaml().unwrap();
        let parsed: Settings = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_resolution_error_names_path() {
        let err = ConfigError::Resolution {
            path: PathBuf::from("/missing/root"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_resolution());
        assert!(err.to_string().contains("/missing/root"));
    }
}
