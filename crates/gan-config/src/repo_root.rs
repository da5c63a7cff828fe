//! Resolution of the repository root and the paths derived from it.
//!
//! The root defaults to the directory two levels above this crate's manifest
//! directory (`<root>/crates/gan-config`), i.e. the workspace root. An
//! explicit root always wins over the derived one.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::{ConfigError, Result};

/// Location of the configuration crate, recorded at compile time.
pub const REPO_ROOT_ANCHOR: &str = env!("CARGO_MANIFEST_DIR");

/// Name of the scratch directory under the repository root.
pub const TMP_DIR_NAME: &str = "tmp";

/// The path two directory levels above `anchor`, without touching the
/// filesystem.
///
/// `/opt/app/playing_with_gan/paths.rs` yields `/opt/app`.
pub fn grandparent(anchor: &Path) -> Option<PathBuf> {
    anchor.parent()?.parent().map(Path::to_path_buf)
}

/// Derive the repository root from the location of a module inside it.
///
/// # Errors
///
/// Returns [`ConfigError::Resolution`] if the anchor has no grandparent or
/// the grandparent cannot be canonicalized, and
/// [`ConfigError::NotADirectory`] if it is not a directory.
pub fn repo_root_from_anchor(anchor: &Path) -> Result<PathBuf> {
    let anchor = absolute(anchor)?;
    let root = grandparent(&anchor).ok_or_else(|| ConfigError::Resolution {
        path: anchor.clone(),
        source: std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "path has fewer than two parent directories",
        ),
    })?;
    canonical_dir(&root)
}

/// The repository root derived from where this crate was built.
///
/// Every call in a process returns the same path.
pub fn default_repo_root() -> Result<PathBuf> {
    repo_root_from_anchor(Path::new(REPO_ROOT_ANCHOR))
}

/// Resolve the repository root, preferring `explicit` over the default.
///
/// Relative explicit roots are taken relative to the current directory.
/// Either way the result is canonical and names an existing directory.
pub fn resolve_repo_root(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(root) => {
            tracing::debug!(root = %root.display(), "using explicit repository root");
            canonical_dir(&absolute(root)?)
        }
        None => {
            tracing::debug!(anchor = REPO_ROOT_ANCHOR, "deriving repository root");
            default_repo_root()
        }
    }
}

/// The scratch directory for `root`. Does not create it.
pub fn tmp_dir(root: &Path) -> PathBuf {
    root.join(TMP_DIR_NAME)
}

/// Create `path` and any missing parents.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if directory creation fails.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|source| ConfigError::Resolution {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(path))
}

fn canonical_dir(path: &Path) -> Result<PathBuf> {
    let canonical = path
        .canonicalize()
        .map_err(|source| ConfigError::Resolution {
            path: path.to_path_buf(),
            source,
        })?;
    if !canonical.is_dir() {
        return Err(ConfigError::NotADirectory { path: canonical });
    }
    Ok(canonical)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
