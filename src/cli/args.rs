//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Locale-qualified paths for multi-locale sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: tola.toml)
    #[arg(short = 'C', long, global = true, default_value = "tola.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the base path every public url lives under.
    ///
    /// Takes precedence over `[i18n] base` and the path of `[site.info] url`.
    ///
    /// Example: previewing a GitHub Pages project site at the domain root:
    ///   tola-i18n --base / routes entries.json
    #[arg(short, long, global = true)]
    pub base: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the public path of a logical path
    #[command(visible_alias = "l")]
    Localize {
        /// Locale key (e.g. en, ar)
        locale: String,

        /// Logical path, the locale root when omitted
        path: Option<String>,
    },

    /// Print the logical path of a public path
    #[command(visible_alias = "d")]
    Delocalize {
        /// Locale key the path was localized for
        locale: String,

        /// Public path, with or without leading `/`
        path: String,
    },

    /// Print the locale a url or path belongs to
    #[command(visible_alias = "x")]
    Extract {
        /// Absolute url or path
        input: String,
    },

    /// Look up a message for a locale
    #[command(visible_alias = "t")]
    Translate {
        /// Locale key
        locale: String,

        /// Message key (e.g. site.title)
        key: String,

        /// Placeholder substitution, repeatable
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_substitution)]
        substitutions: Vec<(String, String)>,
    },

    /// Print every localized route as JSON
    #[command(visible_alias = "r")]
    Routes {
        #[command(flatten)]
        args: RoutesArgs,
    },

    /// Generate a sitemap with hreflang alternates
    #[command(visible_alias = "s")]
    Sitemap {
        #[command(flatten)]
        args: SitemapArgs,
    },

    /// Validate the config and print the locale table
    #[command(visible_alias = "c")]
    Check,
}

/// Routes command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RoutesArgs {
    /// JSON array of content entries (`{"id": "en/hello", "draft": false}`).
    /// Use `-` to read from stdin. Only locale roots when omitted.
    #[arg(value_name = "ENTRIES", value_hint = clap::ValueHint::FilePath)]
    pub entries: Option<PathBuf>,

    /// Include draft entries
    #[arg(short, long)]
    pub drafts: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Sitemap command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SitemapArgs {
    /// JSON array of content entries. Use `-` to read from stdin.
    #[arg(value_name = "ENTRIES", value_hint = clap::ValueHint::FilePath)]
    pub entries: Option<PathBuf>,

    /// Write to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Commands {
    /// Commands that build absolute urls need `[site.info] url`.
    pub const fn needs_site_url(&self) -> bool {
        matches!(self, Commands::Sitemap { .. })
    }
}

/// Parse a `name=value` substitution.
fn parse_substitution(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("empty placeholder name in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_substitution() {
        assert_eq!(
            parse_substitution("no=3").unwrap(),
            ("no".to_string(), "3".to_string())
        );
        assert_eq!(
            parse_substitution("name=a=b").unwrap(),
            ("name".to_string(), "a=b".to_string())
        );
        assert!(parse_substitution("no").is_err());
        assert!(parse_substitution("=3").is_err());
    }

    #[test]
    fn test_translate_args() {
        let cli = Cli::try_parse_from([
            "tola-i18n", "translate", "ar", "pageWithNo", "-s", "no=2", "--set", "x=y",
        ])
        .unwrap();
        let Commands::Translate {
            locale,
            key,
            substitutions,
        } = cli.command
        else {
            panic!("expected translate");
        };
        assert_eq!(locale, "ar");
        assert_eq!(key, "pageWithNo");
        assert_eq!(substitutions.len(), 2);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tola-i18n", "l", "ar", "/posts/1", "--base", "/astro", "-v"])
            .unwrap();
        assert_eq!(cli.base.as_deref(), Some("/astro"));
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("tola.toml"));
        assert!(!cli.command.needs_site_url());
    }

    #[test]
    fn test_sitemap_needs_url() {
        let cli = Cli::try_parse_from(["tola-i18n", "sitemap", "-", "-o", "out.xml"]).unwrap();
        assert!(cli.command.needs_site_url());
    }
}
