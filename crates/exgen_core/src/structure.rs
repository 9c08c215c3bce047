//! Project folder layout initialization.

use std::path::PathBuf;

use tracing::info;

use crate::error::ScaffoldResult;
use crate::planner::PathPlanner;

/// Folders created under the source root.
pub const SOURCE_FOLDERS: &[&str] = &[
    "config",
    "controllers",
    "middlewares",
    "models",
    "routes",
    "services",
    "utils",
    "validations",
];

/// Folders created under `tests/`.
pub const TEST_FOLDERS: &[&str] = &["controllers", "services", "middlewares", "utils"];

/// Folders created at the project root.
pub const ROOT_FOLDERS: &[&str] = &["public"];

/// Result of initializing the folder layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
}

/// Creates the fixed project folder layout. Safe to run repeatedly.
pub struct StructureInitializer {
    planner: PathPlanner,
}

impl StructureInitializer {
    pub fn new(planner: PathPlanner) -> Self {
        Self { planner }
    }

    /// Every folder of the layout, in creation order.
    pub fn folders(&self) -> Vec<PathBuf> {
        let source_root = self.planner.source_root();
        let tests_root = self.planner.project_dir().join("tests");

        SOURCE_FOLDERS
            .iter()
            .map(|f| source_root.join(f))
            .chain(TEST_FOLDERS.iter().map(|f| tests_root.join(f)))
            .chain(ROOT_FOLDERS.iter().map(|f| self.planner.project_dir().join(f)))
            .collect()
    }

    pub fn run(&self) -> ScaffoldResult<StructureReport> {
        info!("Initializing project structure in {:?}", self.planner.project_dir());

        let mut report = StructureReport::default();
        for folder in self.folders() {
            if PathPlanner::ensure_folder(&folder)? {
                report.created.push(folder);
            } else {
                report.existing.push(folder);
            }
        }
        Ok(report)
    }
}
