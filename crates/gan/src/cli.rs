//! Clap CLI definitions for the `gan` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// gan -- playing-with-gan repository paths and storage names.
#[derive(Parser, Debug)]
#[command(
    name = "gan",
    about = "Inspect playing-with-gan repository paths and storage names",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Repository root (default: $GAN_REPO_ROOT, settings file, or the build location).
    #[arg(long, global = true, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// YAML settings file.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress status messages on stderr (such as `tmp --create` reporting a new directory).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every path and storage name.
    #[command(alias = "paths")]
    Show,

    /// Print the repository root.
    Root,

    /// Print the temp directory.
    Tmp(TmpArgs),

    /// Show the artifact bucket, its URL, prefix and credentials profile.
    Bucket,

    /// Print the object URL of a build artifact.
    ArtifactUrl(ArtifactUrlArgs),

    /// Print the pinned runtime requirements of the package.
    Requirements,

    /// Print the effective settings as YAML.
    Settings,

    /// Print version information.
    Version,

    /// Generate shell completion scripts.
    Completion(CompletionArgs),
}

/// Arguments for `gan tmp`.
#[derive(Args, Debug)]
pub struct TmpArgs {
    /// Create the directory if it does not exist.
    #[arg(long)]
    pub create: bool,
}

/// Arguments for `gan artifact-url`.
#[derive(Args, Debug)]
pub struct ArtifactUrlArgs {
    /// Artifact file name under the build prefix.
    #[arg(required_unless_present = "source_build", conflicts_with = "source_build")]
    pub file: Option<String>,

    /// Use the package's source distribution as the artifact.
    #[arg(long)]
    pub source_build: bool,

    /// Package version of the source distribution (default: current).
    #[arg(long, requires = "source_build", value_name = "VERSION")]
    pub package_version: Option<String>,
}

/// Arguments for `gan completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Completion subcommands.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
