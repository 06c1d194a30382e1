//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use xcext_fs::Platform;

/// xcext - Add native Apple extension targets to generated Xcode projects
#[derive(Parser, Debug)]
#[command(name = "xcext")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add an extension target (e.g. share)
    ///
    /// Scaffolds the extension's source files, grants the shared app
    /// group, registers the URL scheme, and rewrites project.yml.
    ///
    /// Examples:
    ///   xcext add share                       # Share Extension for iOS
    ///   xcext add share --platform macos      # Share Extension for macOS
    ///   xcext add share -t ./my-templates     # With custom templates
    Add {
        /// Extension type to add
        #[arg(value_name = "TYPE")]
        kind: String,

        /// Target platform
        #[arg(short, long, default_value = "ios")]
        platform: Platform,

        /// Custom templates directory
        #[arg(short, long, value_name = "PATH")]
        templates: Option<PathBuf>,
    },
}
