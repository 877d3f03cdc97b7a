//! The per-parse name registry (§4.2.7).
//!
//! Every non-partial top-level named definition occupies a unique name.
//! The registry is deliberately dumb: it knows nothing about the AST, only
//! `name -> kind label` (`"interface"`, `"dictionary"`, ...), so the parser
//! can format the "already seen" message however §7 requires.

use thiserror::Error;

use crate::FxHashMap;

/// Raised when a second top-level definition claims a name already in the
/// registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("The name \"{name}\" of type \"{existing_kind}\" is already seen")]
pub struct RegistryError {
    pub name: String,
    pub existing_kind: String,
}

/// Map from declared name to the kind label of the definition that declared
/// it, scoped to a single `parse` call.
#[derive(Debug, Default)]
pub struct NameRegistry {
    names: FxHashMap<String, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self {
            names: FxHashMap::default(),
        }
    }

    /// Register `name` as a definition of `kind`. Fails if `name` is
    /// already registered, regardless of whether the kinds match.
    pub fn declare(&mut self, name: &str, kind: &str) -> Result<(), RegistryError> {
        if let Some(existing_kind) = self.names.get(name) {
            return Err(RegistryError {
                name: name.to_string(),
                existing_kind: existing_kind.clone(),
            });
        }
        self.names.insert(name.to_string(), kind.to_string());
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_declaration_succeeds() {
        let mut reg = NameRegistry::new();
        assert!(reg.declare("Foo", "interface").is_ok());
        assert!(reg.contains("Foo"));
    }

    #[test]
    fn redeclaration_fails_with_existing_kind() {
        let mut reg = NameRegistry::new();
        reg.declare("Foo", "interface").unwrap();
        let err = reg.declare("Foo", "dictionary").unwrap_err();
        assert_eq!(err.existing_kind, "interface");
        assert_eq!(
            err.to_string(),
            "The name \"Foo\" of type \"interface\" is already seen"
        );
    }

    #[test]
    fn distinct_names_do_not_collide() {
        let mut reg = NameRegistry::new();
        reg.declare("Foo", "interface").unwrap();
        reg.declare("Bar", "dictionary").unwrap();
        assert_eq!(reg.len(), 2);
    }
}
