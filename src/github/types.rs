// src/github/types.rs
// =============================================================================
// Data structures for the JSON the GitHub REST API sends back.
//
// We only model the fields we actually print. Everything is deliberately
// lenient: the events feed contains many event types with different payloads,
// and deleted or private repositories come back without repo info.
//
// Rust concepts:
// - serde derive: Generates JSON decoding code from struct definitions
// - #[serde(default)]: Missing fields fall back to Default::default()
// - #[serde(other)]: Unknown enum tags map to a catch-all variant
// =============================================================================

use serde::Deserialize;

// The kinds of events we know how to describe
//
// GitHub sends the tag as e.g. "PushEvent"; anything we don't recognize
// becomes Other and is skipped when printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EventKind {
    #[serde(rename = "PushEvent")]
    Push,
    #[serde(rename = "CreateEvent")]
    Create,
    #[serde(rename = "IssuesEvent")]
    Issues,
    #[serde(rename = "WatchEvent")]
    Watch,
    #[serde(rename = "DeleteEvent")]
    Delete,
    #[serde(rename = "ReleaseEvent")]
    Release,
    #[serde(rename = "MemberEvent")]
    Member,
    #[serde(other)]
    Other,
}

/// One entry of `GET /users/{username}/events`
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// None for deleted or private repositories
    #[serde(default)]
    pub repo: Option<EventRepo>,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    #[serde(default)]
    pub name: Option<String>,
}

// Union of the payload fields we read, across all event kinds
//
// Which fields are filled depends on the event kind:
//   PushEvent    -> before, head
//   IssuesEvent  -> action
//   DeleteEvent  -> ref_type, ref
//   ReleaseEvent -> release.tag_name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    pub before: Option<String>,
    pub head: Option<String>,
    pub action: Option<String>,
    pub ref_type: Option<String>,
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    pub release: Option<Release>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Release {
    pub tag_name: Option<String>,
}

impl Event {
    /// Name of the repository ("owner/repo"), if the API told us one
    pub fn repo_name(&self) -> Option<&str> {
        self.repo
            .as_ref()
            .and_then(|repo| repo.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

/// Response of `GET /repos/{repo}/compare/{before}...{head}`
///
/// Only the number of commits matters to us, so each commit stays raw JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompareResult {
    pub commits: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_push_event() {
        let event: Event = serde_json::from_value(json!({
            "id": "1",
            "type": "PushEvent",
            "repo": { "id": 7, "name": "org/repo", "url": "https://api.github.com/repos/org/repo" },
            "payload": { "before": "aaa", "head": "bbb", "size": 2 }
        }))
        .unwrap();

        assert_eq!(event.kind, EventKind::Push);
        assert_eq!(event.repo_name(), Some("org/repo"));
        assert_eq!(event.payload.before.as_deref(), Some("aaa"));
        assert_eq!(event.payload.head.as_deref(), Some("bbb"));
    }

    #[test]
    fn test_unknown_type_becomes_other() {
        let event: Event = serde_json::from_value(json!({
            "type": "ForkEvent",
            "repo": { "name": "org/repo" },
            "payload": {}
        }))
        .unwrap();
        assert_eq!(event.kind, EventKind::Other);
    }

    #[test]
    fn test_missing_or_null_repo() {
        let null_repo: Event =
            serde_json::from_value(json!({ "type": "WatchEvent", "repo": null })).unwrap();
        assert_eq!(null_repo.repo_name(), None);

        let no_repo: Event = serde_json::from_value(json!({ "type": "WatchEvent" })).unwrap();
        assert_eq!(no_repo.repo_name(), None);

        let empty_repo: Event =
            serde_json::from_value(json!({ "type": "WatchEvent", "repo": {} })).unwrap();
        assert_eq!(empty_repo.repo_name(), None);
    }

    #[test]
    fn test_delete_and_release_payloads() {
        let delete: Event = serde_json::from_value(json!({
            "type": "DeleteEvent",
            "payload": { "ref_type": "branch", "ref": "feature-x", "pusher_type": "user" }
        }))
        .unwrap();
        assert_eq!(delete.payload.ref_type.as_deref(), Some("branch"));
        assert_eq!(delete.payload.git_ref.as_deref(), Some("feature-x"));

        let release: Event = serde_json::from_value(json!({
            "type": "ReleaseEvent",
            "payload": { "action": "published", "release": { "tag_name": "v1.2.0" } }
        }))
        .unwrap();
        let tag = release.payload.release.and_then(|r| r.tag_name);
        assert_eq!(tag.as_deref(), Some("v1.2.0"));
    }

    #[test]
    fn test_compare_without_commits_is_empty() {
        let compare: CompareResult = serde_json::from_value(json!({ "status": "identical" })).unwrap();
        assert!(compare.commits.is_empty());
    }
}
