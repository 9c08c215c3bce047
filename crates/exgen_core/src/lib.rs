//! # exgen_core
//!
//! Idempotent scaffold generation for Express/TypeScript projects.
//!
//! This crate writes the files whose content comes from `exgen_templates`:
//!
//! - Data modules: route, controller, service, model and test per module
//! - Auth wiring: five fixed files for `jwt` or `session` authentication
//! - The initial project folder layout
//!
//! Existing files are never overwritten. A file's existence is the only
//! record that it was generated, so every operation can be re-run to finish
//! an interrupted run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use exgen_core::{ExgenConfig, PathPlanner, ScaffoldEngine};
//! use exgen_templates::ModuleName;
//!
//! let config = ExgenConfig::load(".").unwrap();
//! let planner = PathPlanner::new(".").with_source_dir(&config.source_dir);
//! let modules = ModuleName::parse_list("users,books").unwrap();
//!
//! let report = ScaffoldEngine::new(planner)
//!     .run(&modules, &config.kinds(), &config.flavor())
//!     .unwrap();
//! println!("{} created, {} skipped", report.created_count(), report.skipped_count());
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod planner;
pub mod scaffold;
pub mod structure;

pub use auth::AuthScaffolder;
pub use config::ExgenConfig;
pub use error::{ScaffoldError, ScaffoldResult};
pub use planner::PathPlanner;
pub use scaffold::{FileOutcome, FileStatus, ScaffoldEngine, ScaffoldReport};
pub use structure::{StructureInitializer, StructureReport};
