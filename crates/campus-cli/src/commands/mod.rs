pub mod filters;
pub mod list;
pub mod onboarding;
pub mod overview;
pub mod show;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;

/// Dispatch a catalog-backed command to its handler.
pub fn dispatch(command: &Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Overview => overview::handle(ctx, flags),
        Commands::List(args) => list::handle(args, ctx, flags),
        Commands::Show(args) => show::handle(args, ctx, flags),
        Commands::Filters(_) | Commands::Onboarding { .. } => {
            unreachable!("filters/onboarding are pre-dispatched in main")
        }
    }
}
