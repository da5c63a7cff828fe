//! `gan requirements` -- print the pinned runtime requirements.

use anyhow::Result;
use gan_config::package::{PACKAGE_NAME, PACKAGE_VERSION, RUNTIME_REQUIREMENTS, requirements_txt};

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `gan requirements` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    if ctx.json {
        output_json(&serde_json::json!({
            "package": PACKAGE_NAME,
            "version": PACKAGE_VERSION,
            "requirements": RUNTIME_REQUIREMENTS,
        }));
    } else {
        print!("{}", requirements_txt());
    }
    Ok(())
}
