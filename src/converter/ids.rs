//! Identifier allocation
//!
//! Two independent monotonic counters: one for content items, one for
//! comments. Content ids continue from the last id already used in the
//! target database; comment ids start at 1.

/// Run-scoped identifier allocator.
///
/// Threaded by mutable reference through the transformation, never shared
/// across runs.
#[derive(Debug)]
pub struct IdAllocator {
    next_content: u64,
    next_comment: u64,
}

impl IdAllocator {
    /// Creates an allocator whose first content id is `last_known_id + 1`
    /// and whose first comment id is 1.
    #[must_use]
    pub fn new(last_known_id: u64) -> Self {
        IdAllocator {
            next_content: last_known_id + 1,
            next_comment: 1,
        }
    }

    /// Returns the next content item id.
    ///
    /// Ids increase by 1 per call with no reuse and no gaps; posts and
    /// pages draw from this one sequence.
    pub fn next_content_id(&mut self) -> u64 {
        let id = self.next_content;
        self.next_content += 1;
        id
    }

    /// Returns the next comment id, independent of the content sequence.
    pub fn next_comment_id(&mut self) -> u64 {
        let id = self.next_comment;
        self.next_comment += 1;
        id
    }
}
