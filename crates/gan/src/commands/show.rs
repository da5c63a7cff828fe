//! `gan show` -- print every path and storage name.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::{RegistryView, output_json, output_key_values};

/// Execute the `gan show` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let view = RegistryView::from_registry(&ctx.registry);
    if ctx.json {
        output_json(&view);
    } else {
        output_key_values(&view.rows());
    }
    Ok(())
}
