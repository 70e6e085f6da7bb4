//! Markdown templates for the state documents and checkpoint payloads.
//!
//! Field lines (`**Label:** value`) are the machine-readable part of each
//! document: [`CurrentStateFields::parse`] reads them back, so their labels
//! and single-line form are a stable contract between `save`, `handoff`, and
//! `status`.

use chrono::{DateTime, Utc};

use crate::env::GitInfo;
use crate::models::CurrentStateFields;

/// Timestamp format used inside documents.
pub const DOC_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Diff summaries longer than this are cut off in checkpoint payloads.
const MAX_DIFF_LINES: usize = 40;

/// The detailed status document, rewritten by every `save`.
pub fn current_state(description: &str, at: DateTime<Utc>, git: &GitInfo) -> String {
    format!(
        "# Current Project State\n\
         \n\
         **Last Updated:** {ts}\n\
         **Branch:** {branch}\n\
         **Status:** {status}\n\
         **Last Commit:** {commit}\n\
         **Latest:** {description}\n\
         \n\
         ## Working Notes\n\
         \n\
         - {description}\n\
         - Last context save: {ts}\n\
         \n\
         ---\n\
         \n\
         *Maintained by context-keeper. Run `ctx save \"...\"` to update.*\n",
        ts = at.format(DOC_TIMESTAMP),
        branch = git.branch,
        status = status_line(git),
        commit = git.last_commit,
    )
}

/// The orientation document (`README.md`), rewritten by every `save`.
pub fn overview(description: &str, at: DateTime<Utc>, git: &GitInfo) -> String {
    format!(
        "# Project Context\n\
         \n\
         **Last Updated:** {ts}\n\
         **Branch:** {branch}\n\
         \n\
         This directory preserves project context between development\n\
         sessions.\n\
         \n\
         ## Layout\n\
         \n\
         - `current_state.md` - detailed current status\n\
         - `summary.md` - project summary (operator maintained)\n\
         - `handoff.md` - continuation instructions for the next session\n\
         - `decisions.log` - append-only decision log\n\
         - `checkpoints/` - immutable timestamped snapshots\n\
         \n\
         ## Latest\n\
         \n\
         - {description}\n",
        ts = at.format(DOC_TIMESTAMP),
        branch = git.branch,
    )
}

/// Payload of one immutable checkpoint record.
pub fn checkpoint(description: &str, at: DateTime<Utc>, git: &GitInfo, diff: &str) -> String {
    let changes = if diff.trim().is_empty() {
        "No changes detected.".to_string()
    } else {
        truncate_lines(diff.trim_end(), MAX_DIFF_LINES)
    };

    format!(
        "# Checkpoint: {description}\n\
         \n\
         **Created:** {ts}\n\
         **Branch:** {branch}\n\
         **Commit:** {commit}\n\
         \n\
         ## State at Checkpoint\n\
         \n\
         ### Git Status\n\
         \n\
         ```\n\
         {status}\n\
         ```\n\
         \n\
         ### Changes Since Last Commit\n\
         \n\
         ```\n\
         {changes}\n\
         ```\n",
        ts = at.format(DOC_TIMESTAMP),
        branch = git.branch,
        commit = git.last_commit,
        status = git.status,
    )
}

/// The handoff document, regenerated from parsed `current_state` fields.
///
/// Deliberately contains no wall-clock reads: two calls with the same
/// `current_state` content produce byte-identical output.
pub fn handoff(fields: &CurrentStateFields) -> String {
    let updated_at = placeholder(&fields.updated_at, "(never saved)");
    let branch = placeholder(&fields.branch, "unknown");
    let status = placeholder(&fields.status, "unknown");
    let commit = placeholder(&fields.last_commit, "N/A");
    let description = placeholder(&fields.description, "(no saved description)");

    format!(
        "# Continuation Instructions for Next Session\n\
         \n\
         **State As Of:** {updated_at}\n\
         **Branch:** {branch}\n\
         **Status:** {status}\n\
         **Last Commit:** {commit}\n\
         \n\
         ## Current Focus\n\
         \n\
         {description}\n\
         \n\
         ## Key Files to Review\n\
         \n\
         1. `.context/README.md` - project overview\n\
         2. `.context/current_state.md` - detailed current status\n\
         3. `.context/summary.md` - project summary\n\
         4. `.context/decisions.log` - decision log\n\
         5. `.context/checkpoints/` - recent checkpoints\n\
         \n\
         ## How to Continue\n\
         \n\
         1. Read `.context/README.md` for orientation\n\
         2. Check `.context/current_state.md` for detailed status\n\
         3. Review recent checkpoints, then `git status`\n\
         \n\
         ## Paste-Ready Continuation Prompt\n\
         \n\
         ```markdown\n\
         {prompt}\n\
         ```\n\
         \n\
         ---\n\
         \n\
         *Regenerate with `ctx handoff` after the next save.*\n",
        prompt = paste_prompt(fields),
    )
}

/// The copy-paste block embedded in the handoff document and echoed by the
/// CLI after `ctx handoff`.
pub fn paste_prompt(fields: &CurrentStateFields) -> String {
    format!(
        "I'm continuing work from a previous session.\n\
         \n\
         Branch: {branch}\n\
         Status: {status}\n\
         Last focus: {description}\n\
         \n\
         Please read .context/README.md and .context/current_state.md to\n\
         understand where we left off, then continue with the next task.",
        branch = placeholder(&fields.branch, "unknown"),
        status = placeholder(&fields.status, "unknown"),
        description = placeholder(&fields.description, "(no saved description)"),
    )
}

/// Single-line status snippet for field lines. Multi-line short statuses
/// keep their first line plus a count of the rest.
pub fn status_line(git: &GitInfo) -> String {
    let mut lines = git.status.lines();
    let first = lines.next().unwrap_or("(clean)").trim().to_string();
    let rest = lines.count();
    if rest == 0 {
        first
    } else {
        format!("{first} (+{rest} more)")
    }
}

fn placeholder(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(v) => v.clone(),
        None => fallback.to_string(),
    }
}

fn truncate_lines(text: &str, max: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= max {
        return text.to_string();
    }
    let mut out = lines[..max].join("\n");
    out.push_str(&format!("\n... ({} lines truncated)", lines.len() - max));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_git() -> GitInfo {
        GitInfo {
            branch: "main".to_string(),
            status: "M src/lib.rs\n?? notes.txt".to_string(),
            last_commit: "abc1234 - initial".to_string(),
            is_clean: false,
        }
    }

    #[test]
    fn current_state_fields_survive_round_trip() {
        let at = Utc.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap();
        let doc = current_state("Implemented auth", at, &sample_git());
        let fields = CurrentStateFields::parse(&doc);

        assert_eq!(fields.description.as_deref(), Some("Implemented auth"));
        assert_eq!(fields.branch.as_deref(), Some("main"));
        assert_eq!(fields.status.as_deref(), Some("M src/lib.rs (+1 more)"));
        assert_eq!(
            fields.updated_at.as_deref(),
            Some("2026-08-23 10:00:00 UTC")
        );
    }

    #[test]
    fn handoff_is_deterministic_for_same_fields() {
        let fields = CurrentStateFields {
            branch: Some("main".to_string()),
            description: Some("Implemented auth".to_string()),
            ..Default::default()
        };
        assert_eq!(handoff(&fields), handoff(&fields));
    }

    #[test]
    fn truncate_lines_marks_cut_off() {
        let text = (0..50).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let out = truncate_lines(&text, 40);
        assert!(out.ends_with("... (10 lines truncated)"));
        assert_eq!(out.lines().count(), 41);
    }

    #[test]
    fn checkpoint_reports_empty_diff() {
        let at = Utc.with_ymd_and_hms(2026, 8, 23, 10, 0, 0).unwrap();
        let doc = checkpoint("Milestone", at, &sample_git(), "");
        assert!(doc.contains("No changes detected."));
    }
}
