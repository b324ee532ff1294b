//! Compile command handler

use crate::config::Config;
use anyhow::{Context as _, Result};
use std::path::Path;
use std::time::Instant;

/// Handle the compile command
///
/// # Arguments
/// * `config_path` - Optional config file overriding the default lookup
/// * `only` - XAsset names to compile; empty compiles everything
/// * `database` - Run the database export afterwards
pub fn handle(config_path: Option<&Path>, only: &[String], database: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let paths = config.paths();
    let started = Instant::now();

    let ctx = super::load_context(&config, &paths)?;
    let total = mwx::compile_all(&ctx, &paths, only).with_context(|| {
        format!(
            "Failed to compile XAssets into {}",
            paths.export_xassets.display()
        )
    })?;
    tracing::info!("Compiled {} records in {:.2?}", total, started.elapsed());

    if database || config.compile_database {
        super::database::run(&ctx, &paths)?;
    }

    Ok(())
}
