//! Derived statistics over an edit script

use crate::change::{ChangeKind, ChangeOp};
use serde::{Deserialize, Serialize};

/// Word-level change statistics between two versions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Total tokens across all insert operations
    pub words_added: usize,
    /// Total tokens across all delete operations
    pub words_removed: usize,
    /// Added minus removed; negative when the article shrank
    pub net_change: i64,
    /// Exact, case-sensitive title comparison
    pub title_changed: bool,
}

impl DiffStats {
    /// True when nothing changed at all
    pub fn is_empty(&self) -> bool {
        self.words_added == 0 && self.words_removed == 0 && !self.title_changed
    }
}

/// Computes statistics from an edit script and the two title strings.
///
/// Always succeeds; an empty script yields all-zero counts.
pub fn compute_stats(ops: &[ChangeOp], old_title: &str, new_title: &str) -> DiffStats {
    let mut words_added = 0usize;
    let mut words_removed = 0usize;
    for op in ops {
        match op.kind {
            ChangeKind::Insert => words_added += op.content.len(),
            ChangeKind::Delete => words_removed += op.content.len(),
            ChangeKind::Equal => {}
        }
    }
    DiffStats {
        words_added,
        words_removed,
        net_change: words_added as i64 - words_removed as i64,
        title_changed: old_title != new_title,
    }
}
