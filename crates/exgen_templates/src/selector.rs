//! Template table and selection.
//!
//! Template bodies are plain data: each entry says which kind it renders and,
//! optionally, which flavor it is restricted to. An entry without a flavor
//! restriction applies to every flavor. Adding a kind or a flavor means adding
//! rows here; the scaffold engine never branches on template content.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{TemplateError, TemplateResult};
use crate::flavor::{AuthMode, DbFlavor, Language, ModuleFlavor};
use crate::kind::{AuthRole, ModuleKind};
use crate::module_name::ModuleName;
use crate::renderer::TemplateRenderer;

/// One data-module template body.
#[derive(Debug, Clone, Copy)]
pub struct ModuleTemplate {
    pub kind: ModuleKind,
    pub db: Option<DbFlavor>,
    pub language: Option<Language>,
    pub body: &'static str,
}

impl ModuleTemplate {
    fn matches(&self, kind: ModuleKind, flavor: &ModuleFlavor) -> bool {
        self.kind == kind
            && self.db.map_or(true, |db| db == flavor.db)
            && self.language.map_or(true, |lang| lang == flavor.language)
    }
}

/// One auth template body.
#[derive(Debug, Clone, Copy)]
pub struct AuthTemplate {
    pub role: AuthRole,
    pub mode: Option<AuthMode>,
    pub body: &'static str,
}

pub const MODULE_TEMPLATES: &[ModuleTemplate] = &[
    ModuleTemplate {
        kind: ModuleKind::Route,
        db: None,
        language: None,
        body: include_str!("../templates/module/route.tpl"),
    },
    ModuleTemplate {
        kind: ModuleKind::Controller,
        db: None,
        language: Some(Language::Ts),
        body: include_str!("../templates/module/controller.ts.tpl"),
    },
    ModuleTemplate {
        kind: ModuleKind::Controller,
        db: None,
        language: Some(Language::Js),
        body: include_str!("../templates/module/controller.js.tpl"),
    },
    ModuleTemplate {
        kind: ModuleKind::Service,
        db: None,
        language: None,
        body: include_str!("../templates/module/service.tpl"),
    },
    ModuleTemplate {
        kind: ModuleKind::Model,
        db: Some(DbFlavor::Mongo),
        language: None,
        body: include_str!("../templates/module/model.mongo.tpl"),
    },
    ModuleTemplate {
        kind: ModuleKind::Model,
        db: Some(DbFlavor::Pg),
        language: None,
        body: include_str!("../templates/module/model.pg.tpl"),
    },
    ModuleTemplate {
        kind: ModuleKind::Test,
        db: None,
        language: None,
        body: include_str!("../templates/module/test.tpl"),
    },
];

pub const AUTH_TEMPLATES: &[AuthTemplate] = &[
    AuthTemplate {
        role: AuthRole::Controller,
        mode: None,
        body: include_str!("../templates/auth/controller.tpl"),
    },
    AuthTemplate {
        role: AuthRole::Route,
        mode: None,
        body: include_str!("../templates/auth/route.tpl"),
    },
    AuthTemplate {
        role: AuthRole::Service,
        mode: Some(AuthMode::Jwt),
        body: include_str!("../templates/auth/service.jwt.tpl"),
    },
    AuthTemplate {
        role: AuthRole::Service,
        mode: Some(AuthMode::Session),
        body: include_str!("../templates/auth/service.session.tpl"),
    },
    AuthTemplate {
        role: AuthRole::Middleware,
        mode: None,
        body: include_str!("../templates/auth/middleware.tpl"),
    },
    AuthTemplate {
        role: AuthRole::Strategy,
        mode: Some(AuthMode::Jwt),
        body: include_str!("../templates/auth/strategy.jwt.tpl"),
    },
    AuthTemplate {
        role: AuthRole::Strategy,
        mode: Some(AuthMode::Session),
        body: include_str!("../templates/auth/strategy.session.tpl"),
    },
];

/// Picks and renders the template body for a (kind, flavor) pair.
///
/// Rendering is a pure function of its inputs: the same module name and
/// flavor always yield byte-identical text.
pub struct TemplateSelector {
    renderer: TemplateRenderer,
    module_templates: &'static [ModuleTemplate],
    auth_templates: &'static [AuthTemplate],
}

impl Default for TemplateSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSelector {
    /// Create a selector over the built-in template table.
    pub fn new() -> Self {
        Self {
            renderer: TemplateRenderer::new(),
            module_templates: MODULE_TEMPLATES,
            auth_templates: AUTH_TEMPLATES,
        }
    }

    /// Find the raw body for a data-module kind.
    pub fn module_body(&self, kind: ModuleKind, flavor: &ModuleFlavor) -> TemplateResult<&'static str> {
        self.module_templates
            .iter()
            .find(|t| t.matches(kind, flavor))
            .map(|t| t.body)
            .ok_or_else(|| {
                TemplateError::NotFound(format!(
                    "{} ({}, {})",
                    kind, flavor.db, flavor.language
                ))
            })
    }

    /// Find the raw body for an auth role.
    pub fn auth_body(&self, role: AuthRole, mode: AuthMode) -> TemplateResult<&'static str> {
        self.auth_templates
            .iter()
            .find(|t| t.role == role && t.mode.map_or(true, |m| m == mode))
            .map(|t| t.body)
            .ok_or_else(|| TemplateError::NotFound(format!("auth {} ({})", role, mode)))
    }

    /// Render the file for `module` of the given kind.
    pub fn render(
        &self,
        kind: ModuleKind,
        module: &ModuleName,
        flavor: &ModuleFlavor,
    ) -> TemplateResult<String> {
        let body = self.module_body(kind, flavor)?;
        debug!("Rendering {} template for {}", kind, module);
        Ok(self.renderer.render_content(body, &Self::module_variables(module, flavor)))
    }

    /// Render one of the fixed auth files, trimmed of surrounding whitespace.
    pub fn render_auth(&self, role: AuthRole, mode: AuthMode) -> TemplateResult<String> {
        let body = self.auth_body(role, mode)?;
        debug!("Rendering auth {} template ({})", role, mode);
        Ok(body.trim().to_string())
    }

    fn module_variables(module: &ModuleName, flavor: &ModuleFlavor) -> HashMap<&'static str, String> {
        let mut vars = HashMap::new();
        vars.insert("module_name", module.as_str().to_string());
        vars.insert("module_name_pascal", module.pascal());
        vars.insert("ext", flavor.language.extension().to_string());
        vars
    }
}
