// src/presenter.rs
// =============================================================================
// Turns GitHub events into the lines we print, and runs the whole listing.
//
// What happens here:
// 1. Fetch the user's events through ActivityClient
// 2. Describe each event as one line (push events need a second API call
//    to find out how many commits were pushed)
// 3. Print the lines in the order GitHub returned them (newest first)
// 4. Print a friendly message for any API error instead of failing
//
// Everything is written to a generic `Write`, so tests capture the output
// in a Vec<u8> instead of reading stdout.
// =============================================================================

use std::io::{self, Write};

use crate::github::{ActivityClient, Event, EventKind};

/// Shown instead of the repository name for deleted or private repositories
pub const UNAVAILABLE_REPO: &str = "[Private or deleted repository]";

// Shown when an event payload lacks a field we want to print
const UNKNOWN: &str = "unknown";

/// Prints how to call the program
pub fn print_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Error: no username given!")?;
    writeln!(out, "Usage: gh-activity <username>")
}

// Runs the listing for one user
//
// API errors are reported to `out` and swallowed; only a failure to write
// the output itself is returned as an error.
pub async fn show_activity<W: Write>(
    client: &mut ActivityClient,
    username: &str,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "--- Recent activity for: {} ---", username)?;
    writeln!(out, "Fetching events for {}...", username)?;

    let events = match client.get_user_events(username).await {
        Ok(events) => events,
        Err(e) if e.is_not_found() => {
            return writeln!(out, "Error: user '{}' not found on GitHub.", username);
        }
        Err(e) => {
            return writeln!(out, "Error: failed to communicate with the API. Details: {}", e);
        }
    };

    if events.is_empty() {
        return writeln!(out, "No recent activity found.");
    }

    for event in &events {
        if let Some(line) = format_event(client, event, out).await {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(())
}

/// Describes one event, asking the API for the commit count of push events.
///
/// Returns `None` for events we don't print.
pub async fn format_event<W: Write>(
    client: &mut ActivityClient,
    event: &Event,
    out: &mut W,
) -> Option<String> {
    let commit_count = match (event.kind, &event.payload.before, &event.payload.head) {
        (EventKind::Push, Some(before), Some(head)) => {
            let repo = repo_label(event);
            client.get_commit_count(repo, before, head, out).await
        }
        _ => None,
    };

    describe_event(event, commit_count)
}

// The pure half of format_event: builds the line from the event and an
// already resolved commit count (only used for push events)
pub fn describe_event(event: &Event, commit_count: Option<usize>) -> Option<String> {
    let repo = repo_label(event);
    let payload = &event.payload;

    match event.kind {
        EventKind::Push => match commit_count {
            Some(n) if n > 0 => Some(format!("- Pushed {} commits to {}", n, repo)),
            _ => Some(format!("- Pushed to {}", repo)),
        },
        EventKind::Create => Some(format!("- Created a new repo: {}", repo)),
        EventKind::Issues if payload.action.as_deref() == Some("opened") => {
            Some(format!("- Opened a new issue in {}", repo))
        }
        EventKind::Issues => None,
        EventKind::Watch => Some(format!("- Starred {}", repo)),
        EventKind::Delete => Some(format!(
            "- Deleted {} '{}' from {}",
            payload.ref_type.as_deref().unwrap_or(UNKNOWN),
            payload.git_ref.as_deref().unwrap_or(UNKNOWN),
            repo
        )),
        EventKind::Release => {
            let tag = payload
                .release
                .as_ref()
                .and_then(|release| release.tag_name.as_deref())
                .unwrap_or(UNKNOWN);
            Some(format!("- Published release {} for {}", tag, repo))
        }
        EventKind::Member => Some(format!("- Was added as a collaborator to {}", repo)),
        EventKind::Other => None,
    }
}

fn repo_label(event: &Event) -> &str {
    event.repo_name().unwrap_or(UNAVAILABLE_REPO)
}
