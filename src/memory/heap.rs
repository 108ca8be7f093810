//! Simulated heap for the dynamic memory lecture
//!
//! This module keeps the list of live blocks the heap widget draws:
//! - `allocate` places a block at the first simulated address gap that fits
//! - `free` removes a block; freeing an unknown block is a logged no-op
//! - `realloc` resizes in place when the gap after the block allows it, otherwise
//!   moves the block to a new address under a new identifier, keeping its tag
//!
//! Identifiers are never reused, so a freed identifier stays invalid. At most
//! [`HEAP_DISPLAY_CAP`] blocks can be live at once because that is all the widget
//! can lay out; further allocations are rejected.

use crate::constants::{HEAP_ADDRESS_START, HEAP_DISPLAY_CAP};
use crate::errors::MemoryError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Identifier of a simulated block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A live block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    /// Simulated address, only used for drawing
    pub address: u64,
    pub size: usize,
    /// What the block holds, e.g. `int[4]`
    pub tag: String,
}

impl Block {
    pub fn end(&self) -> u64 {
        self.address + self.size as u64
    }
}

/// A stretch of the simulated address range: a block or the gap between two
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub address: u64,
    pub size: usize,
    pub occupied: bool,
    pub id: Option<BlockId>,
}

/// What `realloc` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Realloc {
    /// Same block, new size
    InPlace { id: BlockId },
    /// No room after the block: a new block replaced it
    Moved { from: BlockId, to: BlockId },
}

impl Realloc {
    /// Identifier valid after the call
    pub fn id(&self) -> BlockId {
        match self {
            Realloc::InPlace { id } => *id,
            Realloc::Moved { to, .. } => *to,
        }
    }
}

/// The heap
#[derive(Debug, Clone)]
pub struct Heap {
    blocks: FxHashMap<BlockId, Block>,
    next_id: u32,
    cap: usize,
}

impl Heap {
    /// Create a heap that holds at most `cap` live blocks
    pub fn new(cap: usize) -> Self {
        Heap {
            blocks: FxHashMap::default(),
            next_id: 1,
            cap,
        }
    }

    /// Allocate a block of `size` bytes tagged with its size
    pub fn allocate(&mut self, size: usize) -> Result<BlockId, MemoryError> {
        self.allocate_tagged(size, format!("{} bytes", size))
    }

    /// Allocate a block of `size` bytes holding `tag`
    pub fn allocate_tagged(
        &mut self,
        size: usize,
        tag: impl Into<String>,
    ) -> Result<BlockId, MemoryError> {
        if size == 0 {
            return Err(MemoryError::ZeroSize);
        }
        if self.blocks.len() >= self.cap {
            tracing::debug!(cap = self.cap, "allocation rejected: display cap reached");
            return Err(MemoryError::DisplayCapReached { cap: self.cap });
        }

        let address = self.first_fit(size);
        let id = self.fresh_id();
        let tag = tag.into();
        tracing::debug!(%id, size, address, tag = %tag, "allocate");
        self.blocks.insert(
            id,
            Block {
                id,
                address,
                size,
                tag,
            },
        );
        Ok(id)
    }

    /// Free a block; returns whether a block was removed
    ///
    /// Freeing an unknown or already freed identifier changes nothing.
    pub fn free(&mut self, id: BlockId) -> bool {
        match self.blocks.remove(&id) {
            Some(block) => {
                tracing::debug!(%id, size = block.size, "free");
                true
            }
            None => {
                tracing::warn!(%id, "use of invalid identifier: free of unknown block");
                false
            }
        }
    }

    /// Resize a block, moving it when the following gap is too small
    pub fn realloc(&mut self, id: BlockId, new_size: usize) -> Result<Realloc, MemoryError> {
        if new_size == 0 {
            return Err(MemoryError::ZeroSize);
        }
        let block = self
            .blocks
            .get(&id)
            .cloned()
            .ok_or(MemoryError::UnknownBlock { id })?;

        let limit = self
            .blocks
            .values()
            .filter(|b| b.address > block.address)
            .map(|b| b.address)
            .min();

        let fits_in_place = limit.map_or(true, |next| block.address + new_size as u64 <= next);
        if fits_in_place {
            if let Some(b) = self.blocks.get_mut(&id) {
                b.size = new_size;
            }
            tracing::debug!(%id, old = block.size, new = new_size, "realloc in place");
            return Ok(Realloc::InPlace { id });
        }

        // The old block stays in place while the new one is found, as its bytes are
        // copied across before it is released
        let address = self.first_fit(new_size);
        let to = self.fresh_id();
        self.blocks.remove(&id);
        self.blocks.insert(
            to,
            Block {
                id: to,
                address,
                size: new_size,
                tag: block.tag,
            },
        );
        tracing::debug!(from = %id, %to, new = new_size, address, "realloc moved block");
        Ok(Realloc::Moved { from: id, to })
    }

    /// Drop every block
    pub fn reset(&mut self) {
        tracing::debug!(blocks = self.blocks.len(), "heap reset");
        self.blocks.clear();
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(&id)
    }

    /// Live blocks in address order
    pub fn blocks(&self) -> Vec<&Block> {
        let mut blocks: Vec<&Block> = self.blocks.values().collect();
        blocks.sort_by_key(|b| b.address);
        blocks
    }

    /// Blocks and the gaps between them, from the start of the heap to the last block
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut cursor = HEAP_ADDRESS_START;
        for block in self.blocks() {
            if block.address > cursor {
                segments.push(Segment {
                    address: cursor,
                    size: (block.address - cursor) as usize,
                    occupied: false,
                    id: None,
                });
            }
            segments.push(Segment {
                address: block.address,
                size: block.size,
                occupied: true,
                id: Some(block.id),
            });
            cursor = block.end();
        }
        segments
    }

    /// Sum of live block sizes
    pub fn total_bytes(&self) -> usize {
        self.blocks.values().map(|b| b.size).sum()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.blocks.len() >= self.cap
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    fn fresh_id(&mut self) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Lowest address with `size` free bytes before the next block
    fn first_fit(&self, size: usize) -> u64 {
        let mut candidate = HEAP_ADDRESS_START;
        for block in self.blocks() {
            if block.address >= candidate + size as u64 {
                return candidate;
            }
            candidate = candidate.max(block.end());
        }
        candidate
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new(HEAP_DISPLAY_CAP)
    }
}
