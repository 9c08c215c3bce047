//! # exgen_templates
//!
//! Template data for exgen scaffolds.
//!
//! This crate owns everything that decides *what* text a generated file
//! contains:
//!
//! - Module kinds (`route`, `controller`, ...) and the fixed auth roles
//! - Flavors: database backend, auth mode and output language
//! - Normalized module names
//! - The template table and the `{{variable}}` renderer
//!
//! Nothing here touches the filesystem.
//!
//! ## Example
//!
//! ```rust
//! use exgen_templates::{DbFlavor, ModuleFlavor, ModuleKind, ModuleName, TemplateSelector};
//!
//! let selector = TemplateSelector::new();
//! let module = ModuleName::new("books").unwrap();
//! let flavor = ModuleFlavor::default().with_db(DbFlavor::Pg);
//!
//! let model = selector.render(ModuleKind::Model, &module, &flavor).unwrap();
//! assert!(model.contains("sequelize.define('Books'"));
//! ```

pub mod error;
pub mod flavor;
pub mod kind;
pub mod module_name;
pub mod renderer;
pub mod selector;

pub use error::{TemplateError, TemplateResult};
pub use flavor::{AuthMode, DbFlavor, Language, ModuleFlavor};
pub use kind::{AuthRole, ModuleKind};
pub use module_name::ModuleName;
pub use renderer::TemplateRenderer;
pub use selector::{AuthTemplate, ModuleTemplate, TemplateSelector, AUTH_TEMPLATES, MODULE_TEMPLATES};
