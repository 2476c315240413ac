use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Institution counts per category and where the data came from.
    Overview,
    /// Search and filter institutions.
    List(ListArgs),
    /// Show one institution by id.
    Show(ShowArgs),
    /// List the structured filter keys a view accepts.
    Filters(FiltersArgs),
    /// Onboarding-completed flag.
    Onboarding {
        #[command(subcommand)]
        action: OnboardingCommands,
    },
}

/// Arguments for `campus list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// View: local, international, or all (defaults to `general.default_view`).
    #[arg(long)]
    pub view: Option<String>,
    /// Free-text search over name, location, country, and programs.
    #[arg(short, long, default_value = "")]
    pub search: String,
    /// Country code (international) or program keyword (local); `all` for none.
    #[arg(long, default_value = "all")]
    pub filter: String,
}

/// Arguments for `campus show`.
#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Institution id.
    pub id: String,
}

/// Arguments for `campus filters`.
#[derive(Clone, Debug, Args)]
pub struct FiltersArgs {
    /// View: local, international, or all.
    #[arg(long, default_value = "all")]
    pub view: String,
}

#[derive(Clone, Debug, Subcommand)]
pub enum OnboardingCommands {
    /// Print whether onboarding has been completed.
    Status,
    /// Mark onboarding as completed.
    Complete,
    /// Clear the onboarding flag.
    Reset,
}
