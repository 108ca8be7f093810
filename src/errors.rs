//! Error types for the lecture widgets
//!
//! Almost nothing in this crate can fail: navigation clamps, format emulation falls
//! back to zero, and invalid array positions are reported as a visualizer
//! [`Outcome`](crate::visualizer::Outcome). What remains is the simulated heap's
//! rejection of impossible requests and the I/O of the terminal application.

use crate::memory::heap::BlockId;
use thiserror::Error;

/// Errors returned by the simulated heap
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// Blocks must have a positive size
    #[error("cannot allocate a block of 0 bytes")]
    ZeroSize,

    /// The widget can only show `cap` blocks at once
    #[error("display cap reached: at most {cap} blocks can be allocated")]
    DisplayCapReached { cap: usize },

    /// The block does not exist (never allocated, or already freed)
    #[error("unknown block {id}")]
    UnknownBlock { id: BlockId },
}

/// Errors from the terminal application
#[derive(Debug, Error)]
pub enum AppError {
    /// IO error from terminal operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The log file could not be set up
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
