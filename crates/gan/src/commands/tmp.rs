//! `gan tmp` -- print the temp directory, optionally creating it.

use anyhow::{Context, Result};

use crate::cli::TmpArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `gan tmp` command.
pub fn run(ctx: &RuntimeContext, args: &TmpArgs) -> Result<()> {
    let tmp = if args.create {
        let existed = ctx.registry.tmp_dir().is_dir();
        let created = ctx
            .registry
            .ensure_tmp_dir()
            .with_context(|| format!("creating {}", ctx.registry.tmp_dir().display()))?;
        tracing::info!(path = %created.display(), "temp directory ready");
        if !existed && !ctx.quiet && !ctx.json {
            eprintln!("Created {}", created.display());
        }
        created
    } else {
        ctx.registry.tmp_dir()
    };

    if ctx.json {
        output_json(&serde_json::json!({
            "tmp_dir": tmp.display().to_string(),
            "exists": tmp.is_dir(),
        }));
    } else {
        println!("{}", tmp.display());
    }
    Ok(())
}
