//! `gan` -- playing-with-gan repository paths and storage names.
//!
//! Parses CLI arguments with clap, resolves the configuration registry once,
//! and dispatches to command handlers.

mod cli;
mod commands;
mod context;
mod output;

use std::fmt::Display;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    // Set up logging before the registry is resolved so resolution is traced.
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("gan=debug,gan_config=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    // Completions describe the CLI itself and need no registry.
    if let Some(Commands::Completion(args)) = &cli.command {
        if let Err(e) = commands::completion::run(args) {
            exit_with_error(cli.global.json, &format!("{:#}", e));
        }
        return;
    }

    // Resolve the registry up front: nothing runs against a bad root.
    let ctx = match RuntimeContext::from_global_args(&cli.global) {
        Ok(ctx) => ctx,
        Err(e) => exit_with_error(cli.global.json, &e),
    };

    let result = match cli.command {
        Some(Commands::Show) => commands::show::run(&ctx),
        Some(Commands::Root) => commands::root::run(&ctx),
        Some(Commands::Tmp(args)) => commands::tmp::run(&ctx, &args),
        Some(Commands::Bucket) => commands::bucket::run(&ctx),
        Some(Commands::ArtifactUrl(args)) => commands::artifact_url::run(&ctx, &args),
        Some(Commands::Requirements) => commands::requirements::run(&ctx),
        Some(Commands::Settings) => commands::settings::run(&ctx),
        Some(Commands::Version) => commands::version::run(&ctx),
        Some(Commands::Completion(_)) => Ok(()),
        None => {
            // No subcommand -- print help
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        exit_with_error(ctx.json, &format!("{:#}", e));
    }
}

/// Print an error (as JSON when requested) and exit with code 1.
fn exit_with_error(json: bool, error: &dyn Display) -> ! {
    if json {
        let err_json = serde_json::json!({
            "error": error.to_string(),
        });
        if let Ok(s) = serde_json::to_string_pretty(&err_json) {
            eprintln!("{}", s);
        }
    } else {
        eprintln!("Error: {}", error);
    }
    std::process::exit(1);
}
