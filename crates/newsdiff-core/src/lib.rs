//! Newsdiff Core - view model for word-level article diffs
//!
//! This library consumes the edit scripts served by the article tracker
//! and re-derives the visual structure the client renders: coalesced
//! side-by-side segments, in-place highlight runs and change statistics.
//! Everything here is pure and total; network I/O lives in the client.

pub mod change;
pub mod highlight;
pub mod model;
pub mod segment;
pub mod stats;

pub use change::{new_tokens, old_tokens, ChangeKind, ChangeOp};
pub use highlight::{
    find_highlights, highlight_text, DiffSide, Highlight, MarkKind, MarkedText, TextRun,
};
pub use model::{
    ArticleDetail, ArticleListItem, DiffResponse, NewsSource, PaginatedArticles, TitleDiff,
    VersionInfo, VersionSummary,
};
pub use segment::{reconstruct_segments, Segment, SegmentKind};
pub use stats::{compute_stats, DiffStats};
