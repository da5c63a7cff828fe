//! `gan root` -- print the repository root.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `gan root` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let root = ctx.registry.repo_root();
    if ctx.json {
        output_json(&serde_json::json!({ "repo_root": root.display().to_string() }));
    } else {
        println!("{}", root.display());
    }
    Ok(())
}
