//! Project-level generator configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use exgen_templates::{DbFlavor, Language, ModuleFlavor, ModuleKind, TemplateError};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Settings read from `exgen.yaml` in the project directory.
///
/// Every field is optional in the file; command-line flags override
/// whatever the file says.
///
/// ```yaml
/// source_dir: src
/// language: ts
/// db: pg
/// kinds: [route, controller, service]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExgenConfig {
    /// Source root, relative to the project directory.
    pub source_dir: PathBuf,
    pub language: Language,
    pub db: DbFlavor,
    /// Kinds to generate; `None` means the language's default set.
    pub kinds: Option<Vec<ModuleKind>>,
}

impl Default for ExgenConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            language: Language::default(),
            db: DbFlavor::default(),
            kinds: None,
        }
    }
}

impl ExgenConfig {
    /// Config file name looked up in the project directory.
    pub const FILE_NAME: &'static str = "exgen.yaml";

    /// Load the config for a project, falling back to defaults when the
    /// project has no config file.
    pub fn load(project_dir: impl AsRef<Path>) -> ScaffoldResult<Self> {
        let path = project_dir.as_ref().join(Self::FILE_NAME);
        if !path.exists() {
            debug!("No {} found, using defaults", Self::FILE_NAME);
            return Ok(Self::default());
        }

        debug!("Reading config from {:?}", path);
        let content = fs::read_to_string(&path)?;
        Self::from_yaml_str(&content).map_err(|e| ScaffoldError::InvalidConfig {
            path,
            message: e.to_string(),
        })
    }

    /// Parse config from YAML text. An empty document yields the defaults.
    ///
    /// `kinds: []` is rejected; leave `kinds` out to get the language default.
    pub fn from_yaml_str(content: &str) -> ScaffoldResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        if matches!(&config.kinds, Some(kinds) if kinds.is_empty()) {
            return Err(TemplateError::EmptyKindList.into());
        }
        Ok(config)
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_db(mut self, db: DbFlavor) -> Self {
        self.db = db;
        self
    }

    pub fn with_kinds(mut self, kinds: Vec<ModuleKind>) -> Self {
        self.kinds = Some(kinds);
        self
    }

    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    /// Kinds to generate, in generation order.
    pub fn kinds(&self) -> Vec<ModuleKind> {
        match &self.kinds {
            Some(kinds) => kinds.clone(),
            None => self.language.default_kinds(),
        }
    }

    pub fn flavor(&self) -> ModuleFlavor {
        ModuleFlavor::new(self.db, self.language)
    }
}
