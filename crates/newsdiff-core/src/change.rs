//! Word-level change operations as served by the diff API

use serde::{Deserialize, Serialize};

/// The kind of a single edit-script operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Tokens present only in the new version
    Insert,
    /// Tokens present only in the old version
    Delete,
    /// Tokens present in both versions (context)
    ///
    /// Unknown operation kinds on the wire also land here so that
    /// rendering stays total.
    #[serde(other)]
    Equal,
}

/// One unit of a word-level edit script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeOp {
    /// What happened to the tokens
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    /// The word tokens this operation covers, in order
    pub content: Vec<String>,
    /// Index of this operation within the edit script
    pub position: usize,
}

impl ChangeOp {
    pub fn new<I, S>(kind: ChangeKind, content: I, position: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            content: content.into_iter().map(Into::into).collect(),
            position,
        }
    }

    pub fn equal<I, S>(content: I, position: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ChangeKind::Equal, content, position)
    }

    pub fn insert<I, S>(content: I, position: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ChangeKind::Insert, content, position)
    }

    pub fn delete<I, S>(content: I, position: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ChangeKind::Delete, content, position)
    }

    /// Check if this is an actual change (not just context)
    pub fn is_change(&self) -> bool {
        self.kind != ChangeKind::Equal
    }

    /// Tokens joined with single spaces, the form looked up in raw text
    pub fn joined(&self) -> String {
        self.content.join(" ")
    }

    /// Number of word tokens in this operation
    pub fn word_count(&self) -> usize {
        self.content.len()
    }
}

/// The old version's word sequence: equal and delete tokens in script order
pub fn old_tokens(ops: &[ChangeOp]) -> Vec<&str> {
    ops.iter()
        .filter(|op| matches!(op.kind, ChangeKind::Equal | ChangeKind::Delete))
        .flat_map(|op| op.content.iter().map(String::as_str))
        .collect()
}

/// The new version's word sequence: equal and insert tokens in script order
pub fn new_tokens(ops: &[ChangeOp]) -> Vec<&str> {
    ops.iter()
        .filter(|op| matches!(op.kind, ChangeKind::Equal | ChangeKind::Insert))
        .flat_map(|op| op.content.iter().map(String::as_str))
        .collect()
}
