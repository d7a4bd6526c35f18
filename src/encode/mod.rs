//! Encoding requests and the encoders that execute them.
//!
//! Every external encode (segment normalization and the final render) is expressed as an
//! [`request::EncodeRequest`] and handed to an [`request::Encoder`], so the planning code never
//! builds command lines itself.

/// `ffmpeg`-based encoders.
pub mod ffmpeg;
/// Tool-agnostic encode requests and the encoder trait.
pub mod request;
