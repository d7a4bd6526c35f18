//! Cross-fade timeline planning.

/// Offset accumulation and `xfade` graph construction.
pub mod xfade;
