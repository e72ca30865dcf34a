//! # pubid-codec
//!
//! Bijective encoding of integer record keys into fixed-alphabet, padded
//! identifier bodies.
//!
//! ## Design Principles
//!
//! - Integer keys stay the source of truth; encoded bodies are derived on
//!   demand and never stored
//! - Encoding is deterministic and collision-free under a fixed configuration
//! - Decoding never fails loudly: malformed input is `None`, so callers can
//!   chain fallbacks
//! - Configuration (alphabet, minimum length) is process-wide and immutable;
//!   changing it invalidates every previously issued identifier
//!
//! ## Body Format
//!
//! Bodies are digit-only and padded to a minimum length (12 by default):
//!
//! - key `12345` → `430418220146` (under the default configuration)
//! - key `0` → a 12-character body that round-trips back to `0`
//!
//! The padding scheme is structural: it is part of the encoding itself, so
//! padded bodies of different keys can never collide.

mod codec;
mod error;

pub use codec::{Codec, DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH};
pub use error::CodecError;
