//! Database command handler

use crate::config::Config;
use anyhow::{Context as _, Result};
use mwx::{Context, Paths};
use std::path::Path;

/// Handle the database command
pub fn handle(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let paths = config.paths();
    let ctx = super::load_context(&config, &paths)?;

    run(&ctx, &paths)
}

/// Export compiled XAssets into the database layout
pub(crate) fn run(ctx: &Context, paths: &Paths) -> Result<()> {
    mwx::database::compile(ctx, paths).with_context(|| {
        format!(
            "Failed to export database to {}",
            paths.export_database.display()
        )
    })?;
    Ok(())
}
