//! Auth command - Generate auth wiring.

use anyhow::{Context as _, Result};
use clap::Args;

use exgen_core::AuthScaffolder;

use super::Context;

#[derive(Args, Debug)]
pub struct AuthArgs {
    /// Authentication mode: jwt or session
    pub mode: Option<String>,
}

pub fn execute(args: AuthArgs, ctx: &Context) -> Result<()> {
    let Some(mode) = args.mode else {
        anyhow::bail!("Missing auth mode: pass \"jwt\" or \"session\"");
    };

    let scaffolder = AuthScaffolder::new(ctx.planner());
    let report = scaffolder
        .run(&mode)
        .context("Auth generation failed")?;

    println!();
    println!(
        "✅ {} auth file(s) created, {} skipped",
        report.created_count(),
        report.skipped_count()
    );

    Ok(())
}
