use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use prism_tokens::{Category, PaletteKind};

use crate::output::OutputMode;

/// Browse the design tokens, themes and palettes of a Prism stylesheet.
#[derive(Debug, Parser)]
#[command(name = "prism", version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Configuration file (defaults to ./prism.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stylesheet path, relative to the search roots
    #[arg(long, global = true, value_name = "PATH")]
    pub stylesheet: Option<String>,

    /// Directory to search for the stylesheet; repeat to try several in order
    #[arg(long = "root", global = true, value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Theme to show instead of the stored preference
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Auto)]
    pub output: OutputMode,

    /// More logging on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the classified token catalog for the active theme
    Tokens(TokensArgs),

    /// Show palette ramps with values for the active theme
    Palette(PaletteArgs),

    /// List known themes
    Themes,

    /// Remember a theme for later runs
    Use(UseArgs),

    /// Copy a token's value to the clipboard
    Copy(CopyArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct TokensArgs {
    /// Only show one category, e.g. "colors" or "border-radius"
    #[arg(long)]
    pub category: Option<Category>,

    /// Only show tokens whose name or value contains this text
    #[arg(long, value_name = "QUERY")]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PaletteArgs {
    /// Only show one set: general, alpha or chart
    #[arg(long = "set", value_name = "SET")]
    pub set: Option<PaletteKind>,
}

#[derive(Debug, Clone, Args)]
pub struct UseArgs {
    /// Theme name
    pub theme: String,
}

#[derive(Debug, Clone, Args)]
pub struct CopyArgs {
    /// Token name, with or without the leading `--`
    pub name: String,

    /// Copy the value with `var()` references expanded
    #[arg(long)]
    pub resolved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "prism", "tokens", "--category", "Border Radius", "--root", "dist", "--root", "public",
            "-vv", "--output", "json",
        ])
        .unwrap();
        assert_eq!(cli.global.roots, vec![PathBuf::from("dist"), PathBuf::from("public")]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output, OutputMode::Json);
        match cli.command {
            Command::Tokens(args) => assert_eq!(args.category, Some(Category::BorderRadius)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_palette_set() {
        let cli = Cli::try_parse_from(["prism", "palette", "--set", "alpha"]).unwrap();
        match cli.command {
            Command::Palette(args) => assert_eq!(args.set, Some(PaletteKind::Alpha)),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(Cli::try_parse_from(["prism", "palette", "--set", "neon"]).is_err());
    }
}
