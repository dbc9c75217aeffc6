//! In-place highlighting of changed text inside a version's raw content
//!
//! The edit script carries word tokens, not character offsets, so marks are
//! located by literal substring search. A token run that appears verbatim
//! elsewhere in the text is highlighted there too; a run that does not
//! appear at all is skipped. Both are accepted imprecision inherited from
//! the operation model.

use crate::change::{ChangeKind, ChangeOp};

/// Which version's text is being highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSide {
    /// The from-version: deletions are marked
    Old,
    /// The to-version: insertions are marked
    New,
}

impl DiffSide {
    fn relevant_kind(self) -> ChangeKind {
        match self {
            DiffSide::Old => ChangeKind::Delete,
            DiffSide::New => ChangeKind::Insert,
        }
    }

    fn mark_kind(self) -> MarkKind {
        match self {
            DiffSide::Old => MarkKind::Delete,
            DiffSide::New => MarkKind::Insert,
        }
    }
}

/// The style class of a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Insert,
    Delete,
}

/// A located occurrence of a changed token run inside raw text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    /// Byte offset of the occurrence
    pub start: usize,
    /// The matched text (the op's tokens joined with single spaces)
    pub text: String,
    pub kind: MarkKind,
}

/// One run of marked-up text: a slice of the original, optionally marked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub mark: Option<MarkKind>,
}

/// Full text split into ordered runs; concatenating the runs yields the
/// original text unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedText {
    pub runs: Vec<TextRun>,
}

impl MarkedText {
    /// A single unmarked run covering the whole text
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            runs: vec![TextRun { text, mark: None }],
        }
    }

    /// The underlying text with all marks stripped
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn char_len(&self) -> usize {
        self.runs.iter().map(|r| r.text.chars().count()).sum()
    }

    pub fn has_marks(&self) -> bool {
        self.runs.iter().any(|r| r.mark.is_some())
    }

    /// First `max_chars` characters, splitting a run mid-way if needed.
    ///
    /// Marks carry over to the kept part. Truncation happens after marks
    /// are applied and makes no attempt to end on a word boundary.
    pub fn truncate_chars(&self, max_chars: usize) -> MarkedText {
        let mut out = Vec::new();
        let mut remaining = max_chars;
        for run in &self.runs {
            if remaining == 0 {
                break;
            }
            let len = run.text.chars().count();
            if len <= remaining {
                out.push(run.clone());
                remaining -= len;
            } else {
                let cut: String = run.text.chars().take(remaining).collect();
                if !cut.is_empty() {
                    out.push(TextRun {
                        text: cut,
                        mark: run.mark,
                    });
                }
                remaining = 0;
            }
        }
        MarkedText { runs: out }
    }
}

/// Collects every non-overlapping occurrence of each relevant operation's
/// token run inside `raw`, scanning left to right. The scan resumes right
/// after the end of each match, so back-to-back repeats of a short key are
/// each matched once. Equal operations and operations whose text cannot be
/// found are skipped.
pub fn find_highlights(raw: &str, ops: &[ChangeOp], side: DiffSide) -> Vec<Highlight> {
    let mut found = Vec::new();
    for op in ops {
        if op.kind != side.relevant_kind() {
            continue;
        }
        let key = op.joined();
        if key.is_empty() {
            continue;
        }
        let mut from = 0;
        while let Some(at) = raw[from..].find(&key) {
            let start = from + at;
            found.push(Highlight {
                start,
                text: key.clone(),
                kind: side.mark_kind(),
            });
            from = start + key.len();
        }
    }
    found
}

/// Marks every located occurrence of the side's changed token runs in `raw`.
///
/// Pending highlights are applied from the highest offset down, so each
/// splice leaves the offsets of the ones still to apply untouched. An
/// occurrence that would overlap an already-applied mark is dropped,
/// keeping the marks non-overlapping. Never fails: with nothing to mark
/// the result is the input as a single unmarked run.
pub fn highlight_text(raw: &str, ops: &[ChangeOp], side: DiffSide) -> MarkedText {
    let mut pending = find_highlights(raw, ops, side);
    pending.sort_by(|a, b| b.start.cmp(&a.start));

    let mut accepted: Vec<Highlight> = Vec::new();
    let mut lowest_start = raw.len();
    for h in pending {
        if h.start + h.text.len() > lowest_start {
            continue;
        }
        lowest_start = h.start;
        accepted.push(h);
    }
    accepted.reverse();

    let mut runs = Vec::new();
    let mut cursor = 0;
    for h in accepted {
        if h.start > cursor {
            runs.push(TextRun {
                text: raw[cursor..h.start].to_string(),
                mark: None,
            });
        }
        cursor = h.start + h.text.len();
        runs.push(TextRun {
            text: h.text,
            mark: Some(h.kind),
        });
    }
    if cursor < raw.len() {
        runs.push(TextRun {
            text: raw[cursor..].to_string(),
            mark: None,
        });
    }
    MarkedText { runs }
}
