//! Normalized module names.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{TemplateError, TemplateResult};

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z_$][a-z0-9_$]*$").expect("valid identifier pattern"))
}

/// A lower-cased, trimmed module name such as `users`.
///
/// The name ends up verbatim in file names and in generated identifiers
/// (`usersController`, `usersSchema`), so it must be a valid JavaScript
/// identifier once normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName(String);

impl ModuleName {
    /// Normalize and validate a single name.
    pub fn new(raw: &str) -> TemplateResult<Self> {
        let name = raw.trim().to_lowercase();

        if name.is_empty() {
            return Err(TemplateError::InvalidModuleName {
                name,
                message: "name is empty".to_string(),
            });
        }

        if !identifier_pattern().is_match(&name) {
            return Err(TemplateError::InvalidModuleName {
                name,
                message: "must start with a letter, '_' or '$' and contain only letters, digits, '_' or '$'"
                    .to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Parse a comma-separated list (`users,books,tasks`).
    ///
    /// Blank entries are dropped and repeats collapse onto their first
    /// occurrence. An input with no names at all is an error.
    pub fn parse_list(raw: &str) -> TemplateResult<Vec<Self>> {
        let mut names: Vec<Self> = Vec::new();

        for part in raw.split(',').filter(|p| !p.trim().is_empty()) {
            let name = Self::new(part)?;
            if !names.contains(&name) {
                names.push(name);
            }
        }

        if names.is_empty() {
            return Err(TemplateError::EmptyModuleList);
        }

        Ok(names)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with its first character upper-cased (`books` -> `Books`).
    pub fn pascal(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
