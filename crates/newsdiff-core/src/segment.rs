//! Segment reconstruction for side-by-side display

use crate::change::{ChangeKind, ChangeOp};

/// The kind of a reconstructed segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Identical on both sides
    Equal,
    /// Old tokens on the left, new tokens on the right
    Change,
}

/// A coalesced run of operations, aligned for two parallel columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Tokens shown on the old (left) side
    pub old: Vec<String>,
    /// Tokens shown on the new (right) side
    pub new: Vec<String>,
}

impl Segment {
    pub fn is_equal(&self) -> bool {
        self.kind == SegmentKind::Equal
    }

    /// Old-side tokens joined with single spaces
    pub fn old_text(&self) -> String {
        self.old.join(" ")
    }

    /// New-side tokens joined with single spaces
    pub fn new_text(&self) -> String {
        self.new.join(" ")
    }
}

/// Folds an edit script into alternating equal and change segments.
///
/// A run of delete and insert operations between two equal operations
/// collapses into a single change segment: old = all deleted tokens in
/// order, new = all inserted tokens in order. Consecutive change segments
/// never occur in the output. Equal operations become segments carrying
/// the same tokens on both sides.
pub fn reconstruct_segments(ops: &[ChangeOp]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pending_old: Vec<String> = Vec::new();
    let mut pending_new: Vec<String> = Vec::new();

    for op in ops {
        match op.kind {
            ChangeKind::Equal => {
                flush_pending(&mut segments, &mut pending_old, &mut pending_new);
                segments.push(Segment {
                    kind: SegmentKind::Equal,
                    old: op.content.clone(),
                    new: op.content.clone(),
                });
            }
            ChangeKind::Delete => pending_old.extend(op.content.iter().cloned()),
            ChangeKind::Insert => pending_new.extend(op.content.iter().cloned()),
        }
    }
    flush_pending(&mut segments, &mut pending_old, &mut pending_new);

    segments
}

fn flush_pending(
    segments: &mut Vec<Segment>,
    pending_old: &mut Vec<String>,
    pending_new: &mut Vec<String>,
) {
    if pending_old.is_empty() && pending_new.is_empty() {
        return;
    }
    segments.push(Segment {
        kind: SegmentKind::Change,
        old: std::mem::take(pending_old),
        new: std::mem::take(pending_new),
    });
}
