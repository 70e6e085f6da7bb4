use serde::{Deserialize, Serialize};

/// The fixed set of mutable state documents.
///
/// Each kind maps to one markdown file under `.context/`. Documents are
/// rewritten in place, never deleted. The decision log is not a `DocKind`;
/// it has append-only semantics of its own (see
/// [`DocumentStore::append_decision`](crate::store::DocumentStore::append_decision)).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocKind {
    /// Quick orientation for a new session. Rewritten by every `save`.
    Overview,
    /// Detailed current status. Rewritten by every `save`.
    CurrentState,
    /// Operator-maintained project summary. Read but never rewritten.
    Summary,
    /// Continuation instructions. Rewritten by `handoff`.
    Handoff,
}

impl DocKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::CurrentState => "current_state",
            Self::Summary => "summary",
            Self::Handoff => "handoff",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "overview" => Some(Self::Overview),
            "current_state" => Some(Self::CurrentState),
            "summary" => Some(Self::Summary),
            "handoff" => Some(Self::Handoff),
            _ => None,
        }
    }

    /// File name under `.context/`. The overview keeps the conventional
    /// `README.md` name so a new session lands on it first.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Overview => "README.md",
            Self::CurrentState => "current_state.md",
            Self::Summary => "summary.md",
            Self::Handoff => "handoff.md",
        }
    }
}

/// Fields recovered from a rendered `current_state` document.
///
/// The renderer emits one `**Label:** value` line per field, so reading them
/// back is a prefix scan rather than a markdown parse. Missing fields stay
/// `None` and downstream rendering substitutes placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrentStateFields {
    pub updated_at: Option<String>,
    pub branch: Option<String>,
    pub status: Option<String>,
    pub last_commit: Option<String>,
    pub description: Option<String>,
}

impl CurrentStateFields {
    pub fn parse(body: &str) -> Self {
        Self {
            updated_at: field(body, "**Last Updated:**"),
            branch: field(body, "**Branch:**"),
            status: field(body, "**Status:**"),
            last_commit: field(body, "**Last Commit:**"),
            description: field(body, "**Latest:**"),
        }
    }
}

fn field(body: &str, label: &str) -> Option<String> {
    body.lines().find_map(|line| {
        line.strip_prefix(label)
            .map(|rest| rest.trim().to_string())
            .filter(|v| !v.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_lines() {
        let body = "# Current Project State\n\n\
                    **Last Updated:** 2026-08-23 10:00:00 UTC\n\
                    **Branch:** main\n\
                    **Status:** (clean)\n\
                    **Last Commit:** abc1234 - initial\n\
                    **Latest:** Implemented auth\n";
        let fields = CurrentStateFields::parse(body);
        assert_eq!(fields.branch.as_deref(), Some("main"));
        assert_eq!(fields.description.as_deref(), Some("Implemented auth"));
        assert_eq!(
            fields.updated_at.as_deref(),
            Some("2026-08-23 10:00:00 UTC")
        );
    }

    #[test]
    fn missing_fields_are_none() {
        let fields = CurrentStateFields::parse("no structured fields here");
        assert_eq!(fields, CurrentStateFields::default());
    }

    #[test]
    fn doc_kind_round_trips_through_str() {
        for kind in [
            DocKind::Overview,
            DocKind::CurrentState,
            DocKind::Summary,
            DocKind::Handoff,
        ] {
            assert_eq!(DocKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(DocKind::from_str("decisions"), None);
    }
}
