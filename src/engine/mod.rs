//! Document model seam.
//!
//! The document model is owned by the underlying editor engine, not by the
//! bridge. This module defines the narrow interface the bridge reads and
//! writes through, plus the in-process implementation used by default wiring
//! and tests.
//!
//! # Modules
//!
//! - [`backend`]: the [`DocumentEngine`] trait and its snapshot/selection types
//! - [`memory`]: [`MemoryDocument`], the in-process engine

pub mod backend;
pub mod memory;

pub use backend::{DocumentEngine, NodeSnapshot, SelectionRange};
pub use memory::{DocumentNode, MemoryDocument};
