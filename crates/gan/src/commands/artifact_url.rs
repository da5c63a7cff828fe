//! `gan artifact-url` -- print the object URL of a build artifact.

use anyhow::{Result, bail};

use crate::cli::ArtifactUrlArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `gan artifact-url` command.
pub fn run(ctx: &RuntimeContext, args: &ArtifactUrlArgs) -> Result<()> {
    let url = if args.source_build {
        ctx.registry.source_build_url(args.package_version.as_deref())
    } else {
        match args.file.as_deref() {
            Some(file) if !file.trim_matches('/').is_empty() => {
                ctx.registry.storage().artifact_url(file)
            }
            _ => bail!("artifact file name must not be empty"),
        }
    };

    if ctx.json {
        output_json(&serde_json::json!({ "url": url }));
    } else {
        println!("{}", url);
    }
    Ok(())
}
