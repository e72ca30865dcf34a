//! Identifier resolution: encoded interpretation first, legacy integer
//! fallback second.

use pubid_codec::Codec;

use crate::error::ResolveError;
use crate::parse::parse;
use crate::registry::PrefixRegistry;
use crate::repo::Repository;

/// Resolution strategies, tried in priority order.
///
/// Each strategy returns `None` when it does not apply, which hands the
/// input to the next one. The order is load-bearing: new prefixed
/// identifiers must win over the legacy bare-integer reading.
#[derive(Debug, Clone, Copy)]
enum Strategy {
    /// Codec-encoded body, optionally prefixed.
    Encoded,
    /// Bare legacy integer key.
    LiteralInteger,
}

const STRATEGIES: [Strategy; 2] = [Strategy::Encoded, Strategy::LiteralInteger];

/// Resolves external identifier strings to integer keys and entities.
///
/// Holds a shared reference to the process-wide codec configuration; every
/// operation is a pure function of its input, safe to call from any number
/// of threads.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    codec: &'a Codec,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the given codec configuration.
    #[must_use]
    pub fn new(codec: &'a Codec) -> Self {
        Self { codec }
    }

    /// Derives the integer key for `raw`, if any.
    ///
    /// The body is decoded first; only when decoding yields nothing is the
    /// whole input tried as a bare integer key.
    #[must_use]
    pub fn resolve_key(&self, raw: &str) -> Option<u64> {
        STRATEGIES
            .iter()
            .find_map(|strategy| self.apply(*strategy, raw))
    }

    fn apply(&self, strategy: Strategy, raw: &str) -> Option<u64> {
        match strategy {
            Strategy::Encoded => {
                let parsed = parse(raw)?;
                let numbers = self.codec.decode(parsed.body)?;
                numbers.first().copied()
            }
            Strategy::LiteralInteger => {
                // u64::from_str accepts a leading '+'; a legacy key is
                // strictly decimal digits.
                if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                raw.parse::<u64>().ok()
            }
        }
    }

    /// Strict variant of [`resolve_key`](Self::resolve_key): fails with
    /// `NotFound` naming the entity type and the offending input.
    pub fn require_key(&self, entity_type: &str, raw: &str) -> Result<u64, ResolveError> {
        self.resolve_key(raw)
            .ok_or_else(|| ResolveError::not_found(entity_type, raw))
    }

    /// Resolves `raw` to an entity through the repository.
    ///
    /// The key is derived exactly once: a body that decodes to a key with no
    /// entity behind it is absence, not a reason to retry the legacy
    /// integer reading.
    #[must_use]
    pub fn resolve_entity<R: Repository>(&self, repo: &R, raw: &str) -> Option<R::Entity> {
        let key = self.resolve_key(raw)?;
        repo.find_by(key)
    }

    /// Strict variant of [`resolve_entity`](Self::resolve_entity).
    pub fn require_entity<R: Repository>(
        &self,
        repo: &R,
        raw: &str,
    ) -> Result<R::Entity, ResolveError> {
        self.resolve_entity(repo, raw)
            .ok_or_else(|| ResolveError::not_found(repo.entity_type(), raw))
    }

    /// Renders the public identifier for `key`, prefixed when the registry
    /// holds a prefix for `entity_type`.
    #[must_use]
    pub fn display_id(&self, registry: &PrefixRegistry, entity_type: &str, key: u64) -> String {
        let body = self.codec.encode(&[key]);
        match registry.prefix_of(entity_type) {
            Some(prefix) => format!("{prefix}_{body}"),
            None => body,
        }
    }
}
