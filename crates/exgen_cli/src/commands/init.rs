//! Init command - Create the project folder layout.

use anyhow::{Context as _, Result};
use clap::Args;

use exgen_core::StructureInitializer;

use super::Context;

#[derive(Args, Debug)]
pub struct InitArgs {}

pub fn execute(_args: InitArgs, ctx: &Context) -> Result<()> {
    let report = StructureInitializer::new(ctx.planner())
        .run()
        .context("Failed to create project structure")?;

    if report.created.is_empty() {
        println!("✅ Project structure already in place");
        return Ok(());
    }

    println!("✅ Project structure initialized");
    println!();
    println!("Created:");
    for folder in &report.created {
        let shown = folder.strip_prefix(&ctx.project_dir).unwrap_or(folder);
        println!("  📁 {}", shown.display());
    }
    println!();
    println!("Next steps:");
    println!("  exgen api users,books");
    println!("  exgen auth jwt");

    Ok(())
}
