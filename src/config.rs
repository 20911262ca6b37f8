//! Command line configuration.

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Command line configuration for wikipress.
#[derive(Debug, Clone, Parser)]
#[command(name = "wikipress", version, about, long_about = None)]
pub struct Config {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Build wiki pages from markdown sources listed in a manifest
    Build(BuildArgs),
    /// Replace the main content of existing pages with HTML fragments
    Rewrite(RewriteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct BuildArgs {
    /// Site manifest
    #[arg(short, long, default_value = "wiki.toml")]
    pub manifest: PathBuf,

    /// Directory containing markdown sources (defaults to the manifest's directory)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct RewriteArgs {
    /// Directory of `<page>.html` content fragments
    #[arg(short, long)]
    pub fragments: PathBuf,

    /// Directory containing the pages to update
    #[arg(short, long, default_value = ".")]
    pub pages: PathBuf,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if an input path does not exist.
    pub fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Build(args) => {
                if !args.manifest.is_file() {
                    bail!("Manifest does not exist: {}", args.manifest.display());
                }
                let source = args.source_dir();
                if !source.is_dir() {
                    bail!("Source directory does not exist: {}", source.display());
                }
            }
            Command::Rewrite(args) => {
                if !args.fragments.is_dir() {
                    bail!("Fragments directory does not exist: {}", args.fragments.display());
                }
                if !args.pages.is_dir() {
                    bail!("Pages directory does not exist: {}", args.pages.display());
                }
            }
        }

        Ok(())
    }
}

impl BuildArgs {
    /// Returns the source directory, falling back to the manifest's directory.
    pub fn source_dir(&self) -> PathBuf {
        if let Some(source) = &self.source {
            return source.clone();
        }

        match self.manifest.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}
