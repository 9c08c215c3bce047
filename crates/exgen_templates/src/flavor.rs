//! Flavors select between alternative template bodies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::kind::ModuleKind;

/// Storage backend targeted by generated models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbFlavor {
    /// Document store (mongoose schema).
    #[default]
    Mongo,
    /// Relational store (sequelize table).
    Pg,
}

impl DbFlavor {
    pub fn as_str(&self) -> &'static str {
        match self {
            DbFlavor::Mongo => "mongo",
            DbFlavor::Pg => "pg",
        }
    }
}

impl FromStr for DbFlavor {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongo" => Ok(DbFlavor::Mongo),
            "pg" => Ok(DbFlavor::Pg),
            other => Err(TemplateError::UnknownDbFlavor(other.to_string())),
        }
    }
}

impl fmt::Display for DbFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Authentication mechanism wired by the auth generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Jwt,
    Session,
}

impl AuthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::Jwt => "jwt",
            AuthMode::Session => "session",
        }
    }
}

impl FromStr for AuthMode {
    type Err = TemplateError;

    /// Only the exact literals `jwt` and `session` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jwt" => Ok(AuthMode::Jwt),
            "session" => Ok(AuthMode::Session),
            other => Err(TemplateError::InvalidAuthMode(other.to_string())),
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output language of generated data modules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ts,
    Js,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ts => "ts",
            Language::Js => "js",
        }
    }

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Kinds generated when no explicit kind list is given.
    pub fn default_kinds(&self) -> Vec<ModuleKind> {
        match self {
            Language::Ts => ModuleKind::all(),
            Language::Js => vec![
                ModuleKind::Route,
                ModuleKind::Controller,
                ModuleKind::Service,
            ],
        }
    }
}

impl FromStr for Language {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ts" => Ok(Language::Ts),
            "js" => Ok(Language::Js),
            other => Err(TemplateError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Flavor of one data-module generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleFlavor {
    pub db: DbFlavor,
    pub language: Language,
}

impl ModuleFlavor {
    pub fn new(db: DbFlavor, language: Language) -> Self {
        Self { db, language }
    }

    pub fn with_db(mut self, db: DbFlavor) -> Self {
        self.db = db;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}
