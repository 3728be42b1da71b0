// crates/engine/src/block.rs

use std::ops::Range;

use crate::{EngineError, Result};

pub const DEFAULT_BLOCK_SIZE: usize = 32 * 1024;

/// Number of blocks needed to cover `file_size` bytes.
///
/// An empty file still has one (empty) block so the last index is always
/// `count - 1` without underflow.
///
/// # Panics
///
/// Panics if `block_size` is zero.
pub fn block_count(file_size: u64, block_size: usize) -> u64 {
    file_size.div_ceil(block_size as u64).max(1)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    #[default]
    Sequential,
    /// Lowest remaining index, then highest remaining index, moving inward.
    AlternatingEnds,
}

impl TraversalOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            TraversalOrder::Sequential => "sequential",
            TraversalOrder::AlternatingEnds => "alternating-ends",
        }
    }
}

/// Partition of a file into fixed-size blocks, the last one truncated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockLayout {
    file_len: u64,
    block_size: usize,
    count: u64,
}

impl BlockLayout {
    pub fn new(file_len: u64, block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(EngineError::InvalidBlockSize(block_size));
        }
        Ok(Self {
            file_len,
            block_size,
            count: block_count(file_len, block_size),
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn offset(&self, index: u64) -> u64 {
        index.saturating_mul(self.block_size as u64)
    }

    /// Length of block `index`; zero past the end of the file.
    pub fn len(&self, index: u64) -> usize {
        let offset = self.offset(index);
        if offset >= self.file_len {
            return 0;
        }
        (self.file_len - offset).min(self.block_size as u64) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.file_len == 0
    }

    pub fn range(&self, index: u64) -> Range<u64> {
        let start = self.offset(index);
        start..start + self.len(index) as u64
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traversal {
        match order {
            TraversalOrder::Sequential => Traversal::Sequential(0..self.count),
            TraversalOrder::AlternatingEnds => {
                Traversal::AlternatingEnds(AlternatingEnds::new(self.count))
            }
        }
    }
}

/// Yields `0, count-1, 1, count-2, ...` until the two ends meet.
#[derive(Clone, Debug)]
pub struct AlternatingEnds {
    remaining: Range<u64>,
    from_front: bool,
}

impl AlternatingEnds {
    pub fn new(count: u64) -> Self {
        Self {
            remaining: 0..count,
            from_front: true,
        }
    }
}

impl Iterator for AlternatingEnds {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let next = if self.from_front {
            self.remaining.next()
        } else {
            self.remaining.next_back()
        };
        self.from_front = !self.from_front;
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

#[derive(Clone, Debug)]
pub enum Traversal {
    Sequential(Range<u64>),
    AlternatingEnds(AlternatingEnds),
}

impl Iterator for Traversal {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self {
            Traversal::Sequential(r) => r.next(),
            Traversal::AlternatingEnds(a) => a.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Traversal::Sequential(r) => r.size_hint(),
            Traversal::AlternatingEnds(a) => a.size_hint(),
        }
    }
}
