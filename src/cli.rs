//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// recon2obsidian - Obsidian note generator for AutoRecon results
///
/// Walks an AutoRecon results directory and drops preformatted,
/// cross-linked enumeration notes into an Obsidian vault: one log note per
/// discovered port plus a master summary document.
///
/// Examples:
///   recon2obsidian ./results/10.129.49.30 ~/vaults/pentest --name Forest
///   recon2obsidian ./results ~/vaults/pentest --platform PG --name Nibbles
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to the directory containing AutoRecon results
    ///
    /// Expected to hold port subdirectories named tcp<port> / udp<port>.
    #[arg(value_name = "RESULTS_DIR")]
    pub results_dir: PathBuf,

    /// Path to the Obsidian vault root
    #[arg(value_name = "VAULT_DIR")]
    pub vault_dir: PathBuf,

    /// Challenge platform the target belongs to
    #[arg(long, value_enum, default_value_t = Platform::Htb)]
    pub platform: Platform,

    /// Machine name, used for the write-up directory and note tags
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Path to configuration file
    ///
    /// If not specified, looks for .recon2obsidian.toml in the current
    /// directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the port-metadata lookup service
    #[arg(long, value_name = "URL", env = "RECON2OBSIDIAN_LOOKUP_URL")]
    pub lookup_url: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Challenge platform a target belongs to; selected via --platform and
/// embedded in the vault directory layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Platform {
    /// Hack The Box (default)
    #[default]
    #[value(name = "HTB")]
    Htb,
    /// Proving Grounds
    #[value(name = "PG")]
    Pg,
    /// OffSec PEN-200 lab
    #[value(name = "PEN200")]
    Pen200,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Htb => "HTB",
            Platform::Pg => "PG",
            Platform::Pen200 => "PEN200",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if !self.results_dir.exists() {
            return Err(format!(
                "Results directory does not exist: {}",
                self.results_dir.display()
            ));
        }
        if !self.results_dir.is_dir() {
            return Err(format!(
                "Results path is not a directory: {}",
                self.results_dir.display()
            ));
        }

        if self.name.trim().is_empty() {
            return Err("Machine name must not be empty".to_string());
        }

        if let Some(ref url) = self.lookup_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("Lookup URL must start with 'http://' or 'https://'".to_string());
            }
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
