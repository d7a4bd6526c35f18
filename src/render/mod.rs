//! Final mux of the cross-faded segments with the soundtrack.

/// The render request and its encode.
pub mod job;
