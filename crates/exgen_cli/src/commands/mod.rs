//! CLI command definitions.
//!
//! Each subcommand maps to one generator: data modules, auth wiring, or the
//! initial folder layout.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

use exgen_core::{ExgenConfig, PathPlanner};

pub mod api;
pub mod auth;
pub mod init;

/// exgen - Express/TypeScript scaffold generator
#[derive(Parser, Debug)]
#[command(name = "exgen")]
#[command(version, about = "exgen - scaffold routes, controllers, services, models and auth")]
#[command(long_about = r#"
exgen scaffolds boilerplate for an Express web-service project. Existing files
are never overwritten, so every command is safe to re-run.

COMMANDS:
  init   → Create the project folder layout (src/, tests/, public/)
  api    → Generate route/controller/service/model/test files per module
  auth   → Generate auth wiring for "jwt" or "session" authentication

CONFIG:
  An optional exgen.yaml in the project directory sets source_dir, language,
  db and kinds. Command-line flags take precedence.

EXIT CODES:
  0 - Success
  1 - Missing or invalid input, missing source folder, or write failure
  2 - Invalid command-line syntax
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the project folder layout
    Init(init::InitArgs),

    /// Generate CRUD files for one or more modules
    Api(api::ApiArgs),

    /// Generate auth controller, routes, service, middleware and strategy
    Auth(auth::AuthArgs),
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub project_dir: PathBuf,
    pub config: ExgenConfig,
}

impl Context {
    /// Resolve the project directory and load its config file.
    pub fn load(project_dir: Option<PathBuf>) -> Result<Self> {
        let project_dir = match project_dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        let config = ExgenConfig::load(&project_dir).context("Failed to load exgen.yaml")?;
        Ok(Self {
            project_dir,
            config,
        })
    }

    pub fn planner(&self) -> PathPlanner {
        PathPlanner::new(&self.project_dir).with_source_dir(&self.config.source_dir)
    }
}
