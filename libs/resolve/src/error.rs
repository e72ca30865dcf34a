//! Error types for registration and resolution.

use thiserror::Error;

/// Errors that can occur when registering entity-type prefixes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The entity type is already registered with a different prefix.
    #[error("entity type '{entity}' is already registered with prefix '{existing}'")]
    PrefixConflict { entity: String, existing: String },

    /// The prefix is already claimed by another entity type.
    #[error("prefix '{prefix}' is already registered for entity type '{entity}'")]
    PrefixTaken { prefix: String, entity: String },
}

/// Errors surfaced by the strict resolution entry points.
///
/// Decode and parse failures never reach callers as errors; they are
/// recovered into absence inside the fallback chain. Only the final
/// resolution step fails loudly, and only when the caller asked it to.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No key could be derived from the input, or no entity exists for the
    /// derived key.
    #[error("no {entity} found for identifier '{raw}'")]
    NotFound { entity: String, raw: String },
}

impl ResolveError {
    /// Creates a `NotFound` for the given entity type and offending input.
    pub fn not_found(entity: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            raw: raw.into(),
        }
    }
}
