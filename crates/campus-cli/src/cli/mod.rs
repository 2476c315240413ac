use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{Commands, OnboardingCommands};

/// Top-level CLI parser for the `campus` binary.
#[derive(Debug, Parser)]
#[command(name = "campus", version, about = "Campus - local and international college browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip the remote catalog and use bundled data
    #[arg(long, global = true)]
    pub offline: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            offline: self.offline,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OnboardingCommands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["campus", "--format", "json", "--offline", "overview"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.offline);
        assert!(matches!(cli.command, Commands::Overview));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["campus", "overview", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn list_defaults_to_identity_query() {
        let cli = Cli::try_parse_from(["campus", "list"]).expect("cli should parse");
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.view, None);
        assert_eq!(args.search, "");
        assert_eq!(args.filter, "all");
    }

    #[test]
    fn list_accepts_search_and_filter() {
        let cli = Cli::try_parse_from([
            "campus",
            "list",
            "--view",
            "international",
            "-s",
            "oxford",
            "--filter",
            "uk",
        ])
        .expect("cli should parse");
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.view.as_deref(), Some("international"));
        assert_eq!(args.search, "oxford");
        assert_eq!(args.filter, "uk");
    }

    #[test]
    fn onboarding_subcommands_parse() {
        let cli = Cli::try_parse_from(["campus", "onboarding", "complete"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Onboarding {
                action: OnboardingCommands::Complete
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["campus", "--format", "xml", "overview"]);
        assert!(parsed.is_err());
    }
}
