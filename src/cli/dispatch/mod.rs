//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action the binary executes.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{ARG_DIST, ARG_PORT};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);
    let dist = matches
        .get_one::<String>(ARG_DIST)
        .map(PathBuf::from)
        .context("missing required argument: --dist")?;

    Ok(Action::Server(Args { port, dist }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_builds_server_action() -> Result<()> {
        temp_env::with_vars(
            [
                ("WINDOWFIX_PORT", None::<&str>),
                ("WINDOWFIX_DIST", Some("/srv/windowfix")),
            ],
            || {
                let matches = crate::cli::commands::new().get_matches_from(vec!["windowfix"]);
                let Action::Server(args) = handler(&matches)?;
                assert_eq!(args.port, 8080);
                assert_eq!(args.dist, PathBuf::from("/srv/windowfix"));
                Ok(())
            },
        )
    }
}
