//! Auth wiring scaffold generation.

use tracing::info;

use exgen_templates::{AuthMode, AuthRole, TemplateSelector};

use crate::error::ScaffoldResult;
use crate::planner::PathPlanner;
use crate::scaffold::{write_new_file, ScaffoldReport};

/// Generates the five auth files: controller, routes, service, middleware
/// and passport strategy.
///
/// Only the service and the strategy depend on the mode. Unlike data modules,
/// the source root does not need to exist beforehand; missing folders are
/// created.
pub struct AuthScaffolder {
    planner: PathPlanner,
    selector: TemplateSelector,
}

impl AuthScaffolder {
    /// Auth files are always TypeScript.
    pub const EXTENSION: &'static str = "ts";

    pub fn new(planner: PathPlanner) -> Self {
        Self {
            planner,
            selector: TemplateSelector::new(),
        }
    }

    /// Validate `mode` and generate the auth files.
    ///
    /// Anything other than the exact literals `jwt` and `session` fails
    /// before any folder or file is created.
    pub fn run(&self, mode: &str) -> ScaffoldResult<ScaffoldReport> {
        let mode: AuthMode = mode.parse()?;
        self.run_with_mode(mode)
    }

    pub fn run_with_mode(&self, mode: AuthMode) -> ScaffoldResult<ScaffoldReport> {
        let root = self.planner.source_root();
        info!("Generating {} auth scaffold in {:?}", mode, root);

        let mut report = ScaffoldReport::default();
        let roles = AuthRole::all();

        for role in &roles {
            report.ensure_folder(&root.join(role.folder()))?;
        }

        for role in roles {
            let path = PathPlanner::auth_file_path(&root, role, Self::EXTENSION);
            let status = write_new_file(&path, || Ok(self.selector.render_auth(role, mode)?))?;
            report.record(path, status);
        }

        Ok(report)
    }
}
