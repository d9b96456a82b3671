// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The interface is a single positional argument:
//
//     gh-activity <username>
//
// The username is optional as far as clap is concerned. When it is missing
// we print our own usage message and return normally, instead of letting
// clap exit with an error status.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gh-activity",
    version,
    about = "Show a GitHub user's recent public activity",
    long_about = "gh-activity fetches the recent public events of a GitHub user \
                  and prints one line per push, new repo, opened issue, star, \
                  deletion, release or collaborator invite."
)]
pub struct Cli {
    /// GitHub username whose activity to show (e.g., torvalds)
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_username() {
        let cli = Cli::try_parse_from(["gh-activity", "octocat"]).unwrap();
        assert_eq!(cli.username.as_deref(), Some("octocat"));
    }

    #[test]
    fn test_username_is_optional() {
        let cli = Cli::try_parse_from(["gh-activity"]).unwrap();
        assert!(cli.username.is_none());
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["gh-activity", "a", "b"]).is_err());
    }
}
