//! xcext CLI
//!
//! The command-line interface for adding native Apple extension targets
//! to an XcodeGen-managed project.

mod cli;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;
use xcext_core::{AddOptions, ExtensionRegistry, GeneratorStatus, add_extension};
use xcext_fs::Platform;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Add {
            kind,
            platform,
            templates,
        }) => cmd_add(&kind, platform, templates),
        None => {
            println!("{} Apple extension scaffolding", "xcext".green().bold());
            println!();
            println!("Run {} for available commands.", "xcext --help".cyan());
            Ok(())
        }
    }
}

fn cmd_add(kind: &str, platform: Platform, templates: Option<PathBuf>) -> Result<()> {
    let registry = ExtensionRegistry::with_builtins();
    let options = AddOptions {
        platform,
        templates_dir: templates,
        start_dir: None,
    };

    let report = add_extension(&registry, kind, &options)?;

    println!();
    println!(
        "{} {} setup complete",
        "xcext".green().bold(),
        report.display_name
    );
    println!();
    println!("  Extension:  {}", report.extension_name);
    println!("  Bundle ID:  {}.{}", report.identifier, report.suffix);
    println!("  App Group:  {}", report.app_group_id);
    println!("  URL Scheme: {}", report.url_scheme);
    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Open the Xcode project");
    println!(
        "  2. Select your team for both targets (main app and {})",
        report.extension_name
    );
    println!(
        "  3. Enable the App Groups capability for both targets with: {}",
        report.app_group_id
    );
    println!("  4. Build and run");
    println!();
    println!("App Groups must also be configured in the Apple Developer Portal:");
    println!("  - Create App Group: {}", report.app_group_id);
    println!(
        "  - Add it to both App IDs: {} and {}.{}",
        report.identifier, report.identifier, report.suffix
    );

    if let GeneratorStatus::Skipped { reason } = &report.generator {
        println!();
        println!(
            "{}: xcodegen did not run ({}). Regenerate manually:",
            "note".yellow().bold(),
            reason
        );
        println!("  cd {} && xcodegen generate", report.apple_dir.display());
    }

    Ok(())
}
