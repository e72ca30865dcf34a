//! Entity-type prefix registration.

use std::collections::HashMap;

use crate::error::RegistryError;

/// Maps entity types to their identifier prefixes.
///
/// Populated once during type/service initialization; steady-state use is
/// read-only through shared references. Registration requires `&mut self`,
/// so the single-writer-then-many-readers discipline holds without locks.
#[derive(Debug, Clone, Default)]
pub struct PrefixRegistry {
    prefix_by_entity: HashMap<String, String>,
    entity_by_prefix: HashMap<String, String>,
}

impl PrefixRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `prefix` for `entity_type`.
    ///
    /// Registering the same pair again is an idempotent no-op. Rebinding an
    /// entity type to a different prefix, or claiming a prefix already owned
    /// by another type, is an error: a live prefix must never silently
    /// change meaning.
    pub fn register(&mut self, entity_type: &str, prefix: &str) -> Result<(), RegistryError> {
        if let Some(existing) = self.prefix_by_entity.get(entity_type) {
            if existing == prefix {
                return Ok(());
            }
            return Err(RegistryError::PrefixConflict {
                entity: entity_type.to_string(),
                existing: existing.clone(),
            });
        }

        if let Some(owner) = self.entity_by_prefix.get(prefix) {
            return Err(RegistryError::PrefixTaken {
                prefix: prefix.to_string(),
                entity: owner.clone(),
            });
        }

        self.prefix_by_entity
            .insert(entity_type.to_string(), prefix.to_string());
        self.entity_by_prefix
            .insert(prefix.to_string(), entity_type.to_string());
        Ok(())
    }

    /// The prefix registered for `entity_type`, if any.
    #[must_use]
    pub fn prefix_of(&self, entity_type: &str) -> Option<&str> {
        self.prefix_by_entity.get(entity_type).map(String::as_str)
    }

    /// The entity type that owns `prefix`, if any. Prefixes are unique
    /// across types, so this routes an incoming prefixed identifier to its
    /// entity type.
    #[must_use]
    pub fn entity_for_prefix(&self, prefix: &str) -> Option<&str> {
        self.entity_by_prefix.get(prefix).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = PrefixRegistry::new();
        registry.register("product", "prod").unwrap();
        assert_eq!(registry.prefix_of("product"), Some("prod"));
        assert_eq!(registry.entity_for_prefix("prod"), Some("product"));
    }

    #[test]
    fn test_unregistered_type_has_no_prefix() {
        let registry = PrefixRegistry::new();
        assert_eq!(registry.prefix_of("product"), None);
        assert_eq!(registry.entity_for_prefix("prod"), None);
    }

    #[test]
    fn test_reregistering_same_pair_is_noop() {
        let mut registry = PrefixRegistry::new();
        registry.register("product", "prod").unwrap();
        registry.register("product", "prod").unwrap();
        assert_eq!(registry.prefix_of("product"), Some("prod"));
    }

    #[test]
    fn test_rebinding_type_to_new_prefix_is_rejected() {
        let mut registry = PrefixRegistry::new();
        registry.register("product", "prod").unwrap();
        let err = registry.register("product", "item").unwrap_err();
        assert_eq!(
            err,
            RegistryError::PrefixConflict {
                entity: "product".to_string(),
                existing: "prod".to_string(),
            }
        );
        assert_eq!(registry.prefix_of("product"), Some("prod"));
    }

    #[test]
    fn test_prefix_claimed_by_other_type_is_rejected() {
        let mut registry = PrefixRegistry::new();
        registry.register("product", "prod").unwrap();
        let err = registry.register("producer", "prod").unwrap_err();
        assert_eq!(
            err,
            RegistryError::PrefixTaken {
                prefix: "prod".to_string(),
                entity: "product".to_string(),
            }
        );
        assert_eq!(registry.entity_for_prefix("prod"), Some("product"));
    }

    #[test]
    fn test_multiple_types() {
        let mut registry = PrefixRegistry::new();
        registry.register("product", "prod").unwrap();
        registry.register("order", "ord").unwrap();
        registry.register("customer", "cust").unwrap();
        assert_eq!(registry.prefix_of("order"), Some("ord"));
        assert_eq!(registry.entity_for_prefix("cust"), Some("customer"));
    }
}
