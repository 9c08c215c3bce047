//! Target paths for generated files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use exgen_templates::{AuthRole, ModuleKind, ModuleName};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Computes where generated files go.
///
/// Path computation is pure; only [`PathPlanner::resolve_root`] and
/// [`PathPlanner::ensure_folder`] look at the filesystem.
#[derive(Debug, Clone)]
pub struct PathPlanner {
    project_dir: PathBuf,
    source_dir: PathBuf,
}

impl PathPlanner {
    /// Create a planner for a project with the default `src` source root.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            source_dir: PathBuf::from("src"),
        }
    }

    /// Use a different source root, relative to the project directory.
    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The source root, whether or not it exists.
    pub fn source_root(&self) -> PathBuf {
        self.project_dir.join(&self.source_dir)
    }

    /// The source root, which must already exist.
    pub fn resolve_root(&self) -> ScaffoldResult<PathBuf> {
        let root = self.source_root();
        if !root.is_dir() {
            return Err(ScaffoldError::SourceRootMissing(root));
        }
        debug!("Resolved source root {:?}", root);
        Ok(root)
    }

    /// Create `folder` and any missing parents. Returns whether it was created.
    pub fn ensure_folder(folder: &Path) -> ScaffoldResult<bool> {
        if folder.exists() {
            return Ok(false);
        }
        fs::create_dir_all(folder)?;
        info!("📂 Folder created: {}", folder.display());
        Ok(true)
    }

    /// Folder holding files of `kind`.
    pub fn folder_for(root: &Path, kind: ModuleKind) -> PathBuf {
        root.join(kind.folder())
    }

    /// `<root>/<kind folder>/<module>.<kind singular>.<ext>`
    pub fn file_path_for(root: &Path, kind: ModuleKind, module: &ModuleName, extension: &str) -> PathBuf {
        Self::folder_for(root, kind).join(format!(
            "{}.{}.{}",
            module.as_str(),
            kind.singular(),
            extension
        ))
    }

    /// Fixed path of an auth file.
    pub fn auth_file_path(root: &Path, role: AuthRole, extension: &str) -> PathBuf {
        root.join(role.folder())
            .join(format!("{}.{}", role.file_stem(), extension))
    }
}
