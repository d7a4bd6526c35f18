//! Per-item normalization into uniform segments.

/// Segment requests, execution and failure filtering.
pub mod segment;
