//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::lookup::LookupKind;

#[derive(Parser)]
#[command(name = "mwx")]
#[command(about = "Modern Warfare XAsset Compiler", long_about = None)]
pub struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile XAssets from the game's data tables
    #[command(visible_alias = "c")]
    Compile {
        /// Path to config file (defaults to mwx.toml, then the user config dir)
        #[arg(long, env = "MWX_CONFIG")]
        config: Option<PathBuf>,

        /// Only compile these XAssets (see `mwx list`)
        #[arg(long, num_args = 1..)]
        only: Vec<String>,

        /// Run the database export after compiling
        #[arg(long)]
        database: bool,
    },

    /// Export previously compiled XAssets to the database layout
    #[command(visible_alias = "db")]
    Database {
        /// Path to config file (defaults to mwx.toml, then the user config dir)
        #[arg(long, env = "MWX_CONFIG")]
        config: Option<PathBuf>,
    },

    /// List the registered XAsset compilers
    #[command(visible_alias = "l")]
    List,

    /// Resolve a single value through the loot resolvers
    Lookup {
        /// Path to config file (defaults to mwx.toml, then the user config dir)
        #[arg(long, env = "MWX_CONFIG")]
        config: Option<PathBuf>,

        /// What to resolve
        #[arg(value_enum)]
        kind: LookupKind,

        /// Loot id, quality code, license code or reference string
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compile_only() {
        let cli = Cli::try_parse_from([
            "mwx",
            "compile",
            "--only",
            "Bundles",
            "Charms",
            "--database",
        ])
        .unwrap();
        match cli.command {
            Commands::Compile {
                config,
                only,
                database,
            } => {
                assert!(config.is_none());
                assert_eq!(only, vec!["Bundles", "Charms"]);
                assert!(database);
            }
            _ => panic!("expected compile"),
        }
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["mwx", "-v", "lookup", "season", "4001"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Lookup { kind, value, .. } => {
                assert_eq!(kind, LookupKind::Season);
                assert_eq!(value, "4001");
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_parse_lookup_kebab_case_kind() {
        let cli = Cli::try_parse_from(["mwx", "lookup", "weapon-class", "weapon_assault"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Lookup {
                kind: LookupKind::WeaponClass,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_lookup_kind_rejected() {
        assert!(Cli::try_parse_from(["mwx", "lookup", "price", "1"]).is_err());
    }
}
