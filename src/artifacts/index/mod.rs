//! Index value types
//!
//! The index file is plain text: one tracked path per line, in the order the
//! paths were added. The same format is copied verbatim into every commit.

pub mod tracked_path;

/// Separator between index lines
pub const INDEX_LINE_SEPARATOR: char = '\n';
