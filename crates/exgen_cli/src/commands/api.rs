//! Api command - Generate CRUD files for data modules.

use anyhow::{Context as _, Result};
use clap::Args;
use tracing::info;

use exgen_core::ScaffoldEngine;
use exgen_templates::{DbFlavor, Language, ModuleKind, ModuleName, TemplateError};

use super::Context;

#[derive(Args, Debug)]
pub struct ApiArgs {
    /// Comma-separated module names (e.g. users or users,books,tasks)
    pub modules: Option<String>,

    /// Database flavor of generated models: mongo (default) or pg
    #[arg(long)]
    pub db: Option<DbFlavor>,

    /// Output language: ts (default) or js
    #[arg(long)]
    pub lang: Option<Language>,

    /// Comma-separated kinds to generate (route,controller,service,model,test)
    #[arg(long)]
    pub kinds: Option<String>,
}

pub fn execute(args: ApiArgs, ctx: &Context) -> Result<()> {
    let raw = args.modules.ok_or(TemplateError::EmptyModuleList)?;
    let modules = ModuleName::parse_list(&raw)?;

    let mut config = ctx.config.clone();
    if let Some(db) = args.db {
        config = config.with_db(db);
    }
    if let Some(lang) = args.lang {
        config = config.with_language(lang);
    }
    if let Some(kinds) = &args.kinds {
        config = config.with_kinds(ModuleKind::parse_list(kinds)?);
    }

    info!(
        "Scaffolding {} in {:?}",
        modules
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        ctx.project_dir
    );

    let engine = ScaffoldEngine::new(ctx.planner());
    let report = engine
        .run(&modules, &config.kinds(), &config.flavor())
        .context("Module generation failed")?;

    println!();
    println!(
        "✅ {} file(s) created, {} skipped",
        report.created_count(),
        report.skipped_count()
    );
    for path in report.skipped() {
        println!("   ⚠️  kept existing {}", path.display());
    }

    Ok(())
}
