//! CLI argument definitions for mwx
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod lookup;

pub use self::core::{Cli, Commands};
pub use lookup::LookupKind;
