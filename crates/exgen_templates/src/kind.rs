//! Module kinds and auth roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// The role a generated data-module file plays.
///
/// Each kind owns one folder under the source root; the file name uses the
/// folder name without its trailing `s` (`routes` -> `books.route.ts`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Route,
    Controller,
    Service,
    Model,
    Test,
}

impl ModuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Route => "route",
            ModuleKind::Controller => "controller",
            ModuleKind::Service => "service",
            ModuleKind::Model => "model",
            ModuleKind::Test => "test",
        }
    }

    /// Folder holding every file of this kind.
    pub fn folder(&self) -> &'static str {
        match self {
            ModuleKind::Route => "routes",
            ModuleKind::Controller => "controllers",
            ModuleKind::Service => "services",
            ModuleKind::Model => "models",
            ModuleKind::Test => "tests",
        }
    }

    /// Singular form used in file names.
    pub fn singular(&self) -> &'static str {
        let folder = self.folder();
        folder.strip_suffix('s').unwrap_or(folder)
    }

    pub fn all() -> Vec<Self> {
        vec![
            ModuleKind::Route,
            ModuleKind::Controller,
            ModuleKind::Service,
            ModuleKind::Model,
            ModuleKind::Test,
        ]
    }

    /// Parse a comma-separated kind list, keeping order and dropping repeats.
    ///
    /// A list with no kinds at all is an error rather than "every kind".
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, TemplateError> {
        let mut kinds = Vec::new();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let kind: ModuleKind = part.parse()?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }

        if kinds.is_empty() {
            return Err(TemplateError::EmptyKindList);
        }

        Ok(kinds)
    }
}

impl FromStr for ModuleKind {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the singular and the folder spelling.
        match s.trim().to_lowercase().as_str() {
            "route" | "routes" => Ok(ModuleKind::Route),
            "controller" | "controllers" => Ok(ModuleKind::Controller),
            "service" | "services" => Ok(ModuleKind::Service),
            "model" | "models" => Ok(ModuleKind::Model),
            "test" | "tests" => Ok(ModuleKind::Test),
            other => Err(TemplateError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The five files written by the auth generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthRole {
    Controller,
    Route,
    Service,
    Middleware,
    Strategy,
}

impl AuthRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthRole::Controller => "controller",
            AuthRole::Route => "route",
            AuthRole::Service => "service",
            AuthRole::Middleware => "middleware",
            AuthRole::Strategy => "strategy",
        }
    }

    pub fn folder(&self) -> &'static str {
        match self {
            AuthRole::Controller => "controllers",
            AuthRole::Route => "routes",
            AuthRole::Service => "services",
            AuthRole::Middleware => "middlewares",
            AuthRole::Strategy => "strategies",
        }
    }

    /// Fixed file stem, without extension.
    pub fn file_stem(&self) -> &'static str {
        match self {
            AuthRole::Controller => "auth.controller",
            AuthRole::Route => "auth.routes",
            AuthRole::Service => "auth.service",
            AuthRole::Middleware => "auth.middleware",
            AuthRole::Strategy => "passport.strategy",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            AuthRole::Controller,
            AuthRole::Route,
            AuthRole::Service,
            AuthRole::Middleware,
            AuthRole::Strategy,
        ]
    }
}

impl fmt::Display for AuthRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
