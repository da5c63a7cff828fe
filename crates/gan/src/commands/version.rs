//! `gan version` -- print version and platform.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Version string, taken from the workspace version.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Execute the `gan version` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;

    if ctx.json {
        let info = serde_json::json!({
            "version": VERSION,
            "package_version": gan_config::package::PACKAGE_VERSION,
            "os": os,
            "arch": arch,
        });
        output_json(&info);
    } else {
        println!("gan version {} {}/{}", VERSION, os, arch);
    }

    Ok(())
}
