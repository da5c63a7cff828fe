//! Metadata of the distributable Python package this registry belongs to.
//!
//! Static data only: the package name, its version and the exact pins of its
//! runtime dependencies, kept here so build artifacts can be named
//! consistently.

use std::fmt;

use serde::Serialize;

/// Distribution name of the package.
pub const PACKAGE_NAME: &str = "playing_with_gan";

/// Current release of the package.
pub const PACKAGE_VERSION: &str = "0.1.0";

/// A runtime dependency pinned to one exact version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Requirement {
    pub name: &'static str,
    pub version: &'static str,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=={}", self.name, self.version)
    }
}

/// Runtime dependencies, in declaration order.
pub const RUNTIME_REQUIREMENTS: &[Requirement] = &[
    Requirement { name: "boto3", version: "1.14.48" },
    Requirement { name: "torch", version: "1.4.0" },
    Requirement { name: "torchvision", version: "0.5.0" },
    Requirement { name: "pandas", version: "1.0.5" },
    Requirement { name: "numpy", version: "1.19.2" },
    Requirement { name: "sagemaker", version: "2.15.0" },
];

/// Requirements in `requirements.txt` form, one pin per line.
pub fn requirements_txt() -> String {
    RUNTIME_REQUIREMENTS
        .iter()
        .map(|req| format!("{req}\n"))
        .collect()
}

/// File name of a source distribution of the package at `version`.
pub fn source_build_file_name(version: &str) -> String {
    format!("{PACKAGE_NAME}-{version}.tar.gz")
}
