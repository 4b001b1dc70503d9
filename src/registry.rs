//! Name <-> id mapping for actors.

use std::collections::HashMap;

use crate::error::{NetworkError, Result};

/// Dense node id in `[0, size)`.
pub type ActorId = usize;

/// Assigns every distinct name a dense id and keeps the reverse lookup.
///
/// Ids follow the order in which names are first seen during construction;
/// the mapping never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    name_to_id: HashMap<String, ActorId>,
    id_to_name: Vec<String>,
}

impl Registry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Registry::default();
        for name in names {
            let name = name.into();
            if registry.name_to_id.contains_key(&name) {
                continue; // repeated names collapse onto the first id
            }
            registry.name_to_id.insert(name.clone(), registry.id_to_name.len());
            registry.id_to_name.push(name);
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.id_to_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_name.is_empty()
    }

    /// Names in id order.
    pub(crate) fn names(&self) -> &[String] {
        &self.id_to_name
    }

    pub fn exists(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    pub fn id(&self, name: &str) -> Result<ActorId> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn name(&self, id: ActorId) -> Result<&str> {
        self.id_to_name
            .get(id)
            .map(String::as_str)
            .ok_or(NetworkError::IdOutOfRange {
                id,
                size: self.len(),
            })
    }
}
