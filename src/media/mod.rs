//! Source media discovery and duration probing.

/// Directory scan producing ordered [`discover::MediaItem`]s.
pub mod discover;
/// Duration probing through `ffprobe`.
pub mod probe;
