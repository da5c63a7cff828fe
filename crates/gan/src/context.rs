//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] owns the resolved [`Registry`] and the global
//! output flags. It is built once in `main`, before any command runs, so a
//! repository root that cannot be resolved stops the process up front.

use gan_config::{Registry, Result, Settings};

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
#[derive(Debug)]
pub struct RuntimeContext {
    /// The resolved configuration record.
    pub registry: Registry,

    /// Effective settings after file, environment and flag layering.
    pub settings: Settings,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Suppress status messages on stderr.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Root priority: `--root` flag > `GAN_REPO_ROOT` env > settings file >
    /// the build location of the `gan-config` crate.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let mut settings = Settings::load(global.config.as_deref())?;
        if let Some(root) = &global.root {
            settings = settings.with_repo_root(root);
        }
        let registry = Registry::from_settings(&settings)?;

        Ok(Self {
            registry,
            settings,
            json: global.json,
            quiet: global.quiet,
        })
    }
}
