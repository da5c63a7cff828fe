//! `gan settings` -- print the effective settings.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `gan settings` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        output_json(&ctx.settings);
    } else {
        print!("{}", ctx.settings.to_yaml()?);
    }
    Ok(())
}
