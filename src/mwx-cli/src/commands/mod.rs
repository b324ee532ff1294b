//! Command handlers for mwx CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod compile;
pub mod database;
pub mod list;
pub mod lookup;

use crate::config::Config;
use anyhow::{Context as _, Result};
use mwx::{Context, Paths};

/// Load the resolution context for a configured run
pub(crate) fn load_context(config: &Config, paths: &Paths) -> Result<Context> {
    Context::load(paths, &config.placeholders).with_context(|| {
        format!(
            "Failed to load localization from {}",
            paths.localize().display()
        )
    })
}
