//! Shared data structures for the analyzer.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet, SmallVec8};
