//! `gan bucket` -- show the artifact bucket and credentials profile.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::{output_json, output_key_values};

/// Execute the `gan bucket` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let registry = &ctx.registry;
    if ctx.json {
        output_json(&serde_json::json!({
            "profile": registry.cloud_profile_name(),
            "bucket": registry.storage(),
        }));
    } else {
        output_key_values(&[
            ("profile", registry.cloud_profile_name().to_string()),
            ("bucket", registry.storage_bucket_name().to_string()),
            ("url", registry.storage_bucket_url().to_string()),
            ("prefix", registry.build_artifacts_prefix().to_string()),
        ]);
    }
    Ok(())
}
