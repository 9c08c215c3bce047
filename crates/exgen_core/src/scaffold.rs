//! Data-module scaffold generation.

use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info, warn};

use exgen_templates::{ModuleFlavor, ModuleKind, ModuleName, TemplateError, TemplateSelector};

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::planner::PathPlanner;

/// What happened to one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Created,
    /// The file already existed and was left untouched.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Outcome of a scaffold run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub files: Vec<FileOutcome>,
    pub folders_created: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn created(&self) -> impl Iterator<Item = &Path> {
        self.with_status(FileStatus::Created)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Path> {
        self.with_status(FileStatus::Skipped)
    }

    pub fn created_count(&self) -> usize {
        self.created().count()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped().count()
    }

    fn with_status(&self, status: FileStatus) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(move |f| f.status == status)
            .map(|f| f.path.as_path())
    }

    pub(crate) fn ensure_folder(&mut self, folder: &Path) -> ScaffoldResult<()> {
        if PathPlanner::ensure_folder(folder)? {
            self.folders_created.push(folder.to_path_buf());
        }
        Ok(())
    }

    pub(crate) fn record(&mut self, path: PathBuf, status: FileStatus) {
        self.files.push(FileOutcome { path, status });
    }
}

/// Write the rendered content to `path` unless something is already there.
///
/// `render` only runs when the file is missing. The content goes to a
/// temporary file next to `path` which is then moved into place without
/// clobbering, so a failed write leaves nothing behind and a file that
/// appears in the meantime is never overwritten.
pub(crate) fn write_new_file<F>(path: &Path, render: F) -> ScaffoldResult<FileStatus>
where
    F: FnOnce() -> ScaffoldResult<String>,
{
    if path.exists() {
        warn!("⚠️ File already exists: {}", path.display());
        return Ok(FileStatus::Skipped);
    }

    let content = render()?;
    persist_new(path, |file| file.write_all(content.as_bytes()))
}

fn persist_new<W>(path: &Path, write: W) -> ScaffoldResult<FileStatus>
where
    W: FnOnce(&mut NamedTempFile) -> io::Result<()>,
{
    let write_failed = |source| ScaffoldError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping the temp file on any early return removes it from disk.
    let mut file = Builder::new()
        .prefix(".exgen")
        .tempfile_in(parent)
        .map_err(write_failed)?;
    debug!("Staging {} in {}", path.display(), file.path().display());
    write(&mut file).map_err(write_failed)?;

    match file.persist_noclobber(path) {
        Ok(_) => {
            info!("✅ Created {}", path.display());
            Ok(FileStatus::Created)
        }
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
            warn!("⚠️ File already exists: {}", path.display());
            Ok(FileStatus::Skipped)
        }
        Err(e) => Err(write_failed(e.error)),
    }
}

/// Generates the route/controller/service/model/test files of data modules.
///
/// Existing files are never overwritten, so re-running the generator for the
/// same modules only fills in whatever is missing.
pub struct ScaffoldEngine {
    planner: PathPlanner,
    selector: TemplateSelector,
}

impl ScaffoldEngine {
    pub fn new(planner: PathPlanner) -> Self {
        Self {
            planner,
            selector: TemplateSelector::new(),
        }
    }

    /// Generate every `kind` for every module.
    ///
    /// Fails before touching the filesystem if the source root is missing or
    /// no module was given. A write failure aborts the run; files written
    /// before it stay in place.
    pub fn run(
        &self,
        modules: &[ModuleName],
        kinds: &[ModuleKind],
        flavor: &ModuleFlavor,
    ) -> ScaffoldResult<ScaffoldReport> {
        let root = self.planner.resolve_root()?;
        if modules.is_empty() {
            return Err(TemplateError::EmptyModuleList.into());
        }

        info!(
            "Generating {} module(s) [{}] with {} / {}",
            modules.len(),
            kinds.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", "),
            flavor.db,
            flavor.language
        );

        let mut report = ScaffoldReport::default();
        for module in modules {
            for &kind in kinds {
                report.ensure_folder(&PathPlanner::folder_for(&root, kind))?;

                let path =
                    PathPlanner::file_path_for(&root, kind, module, flavor.language.extension());
                let status = write_new_file(&path, || {
                    Ok(self.selector.render(kind, module, flavor)?)
                })?;
                report.record(path, status);
            }
        }

        Ok(report)
    }
}
