//! Placeholder substitution for template bodies.

use std::collections::HashMap;

use regex::Regex;

/// Replaces `{{variable}}` placeholders in template text.
pub struct TemplateRenderer {
    variable_pattern: Regex,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a new template renderer.
    pub fn new() -> Self {
        Self {
            // Match {{variable_name}} pattern
            variable_pattern: Regex::new(r"\{\{([a-zA-Z_][a-zA-Z0-9_]*)\}\}")
                .expect("valid placeholder pattern"),
        }
    }

    /// Render content by replacing variables.
    ///
    /// Unknown placeholders are left in place so a missing variable shows up
    /// in the generated file instead of silently disappearing.
    pub fn render_content(&self, content: &str, variables: &HashMap<&str, String>) -> String {
        self.variable_pattern
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                variables
                    .get(var_name)
                    .cloned()
                    .unwrap_or_else(|| format!("{{{{{}}}}}", var_name))
            })
            .to_string()
    }

    /// Names of all placeholders used in `content`, in order of appearance.
    pub fn placeholders<'a>(&self, content: &'a str) -> Vec<&'a str> {
        let mut names = Vec::new();
        for caps in self.variable_pattern.captures_iter(content) {
            if let Some(m) = caps.get(1) {
                if !names.contains(&m.as_str()) {
                    names.push(m.as_str());
                }
            }
        }
        names
    }
}
