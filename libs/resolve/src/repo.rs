//! The external repository boundary.

use crate::error::ResolveError;

/// Lookup interface of the external persistence layer.
///
/// Consumed, not implemented, by this crate: the resolver derives an integer
/// key and hands it to whatever store owns the entities. Latency and failure
/// behavior of the underlying store are the implementor's concern.
pub trait Repository {
    /// The entity produced by a successful lookup.
    type Entity;

    /// The entity type name, used in `NotFound` errors.
    fn entity_type(&self) -> &'static str;

    /// Looks up an entity by integer key; absent when no such entity exists.
    fn find_by(&self, key: u64) -> Option<Self::Entity>;

    /// Looks up an entity by integer key, failing with
    /// [`ResolveError::NotFound`] when absent.
    fn find(&self, key: u64) -> Result<Self::Entity, ResolveError> {
        self.find_by(key)
            .ok_or_else(|| ResolveError::not_found(self.entity_type(), key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct MapRepo(HashMap<u64, &'static str>);

    impl Repository for MapRepo {
        type Entity = &'static str;

        fn entity_type(&self) -> &'static str {
            "product"
        }

        fn find_by(&self, key: u64) -> Option<Self::Entity> {
            self.0.get(&key).copied()
        }
    }

    #[test]
    fn test_find_default_impl() {
        let repo = MapRepo(HashMap::from([(42, "widget")]));
        assert_eq!(repo.find(42).unwrap(), "widget");

        let err = repo.find(7).unwrap_err();
        assert_eq!(err, ResolveError::not_found("product", "7"));
    }
}
