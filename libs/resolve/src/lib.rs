//! # pubid-resolve
//!
//! Prefix-aware parsing, registration, and resolution of public identifiers.
//!
//! ## Design Principles
//!
//! - External identifiers are `{prefix}_{body}` or a bare `{body}`; the
//!   prefix names the entity type, the body encodes the integer key
//! - Legacy bare-integer identifiers keep resolving without migration: the
//!   encoded interpretation is tried first, the raw integer second
//! - Prefixes are registered once per entity type before concurrent traffic
//!   begins; steady state is read-only
//! - Lookup failures surface as typed `NotFound` errors only from the strict
//!   entry points; everything else is absence
//!
//! ## Resolution Flow
//!
//! ```text
//! raw string → parse (split prefix) → decode body → integer key → repository
//!                                   ↘ bare-integer fallback ↗
//! ```

mod error;
mod parse;
mod registry;
mod repo;
mod resolver;

pub use error::{RegistryError, ResolveError};
pub use parse::{parse, ParsedId};
pub use registry::PrefixRegistry;
pub use repo::Repository;
pub use resolver::Resolver;

/// Re-export the codec for consumers that construct their own configuration.
pub use pubid_codec::{Codec, CodecError};
