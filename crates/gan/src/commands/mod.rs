//! Command handlers, one module per subcommand.

pub mod artifact_url;
pub mod bucket;
pub mod completion;
pub mod requirements;
pub mod root;
pub mod settings;
pub mod show;
pub mod tmp;
pub mod version;
