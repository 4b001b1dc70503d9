//! Collaboration graph: actors as nodes, shared listings as undirected edges.
//!
//! The node set is fixed when the network is built; edges are appended
//! afterwards. Traversal lives in [`crate::traversal`] and degree analytics in
//! [`crate::stats`], both as further `impl ActorNetwork` blocks over the same
//! adjacency lists.

use tracing::debug;

use crate::error::{NetworkError, Result};
use crate::registry::{ActorId, Registry};

/// Undirected multigraph keyed by dense actor ids.
///
/// Repeated co-appearances are kept as repeated adjacency entries, so a
/// node's degree counts co-appearances rather than distinct collaborators.
/// The engine does no locking: build it, add every edge, then query.
#[derive(Debug, Clone)]
pub struct ActorNetwork {
    registry: Registry,
    adjacency: Vec<Vec<ActorId>>, // id -> neighbor ids, duplicates kept
    edge_count: usize,
}

impl ActorNetwork {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry = Registry::new(names);
        let adjacency = vec![Vec::new(); registry.len()];
        debug!(size = registry.len(), "allocated actor network");
        Self {
            registry,
            adjacency,
            edge_count: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of `add_edge` calls applied so far.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn exists(&self, name: &str) -> bool {
        self.registry.exists(name)
    }

    pub fn id(&self, name: &str) -> Result<ActorId> {
        self.registry.id(name)
    }

    pub fn name(&self, id: ActorId) -> Result<&str> {
        self.registry.name(id)
    }

    /// Links two registered actors. Both names are resolved before either
    /// list is touched, so a failed call leaves the graph unchanged.
    /// Self-loops (`u == v`) are stored twice on the same list.
    pub fn add_edge(&mut self, u: &str, v: &str) -> Result<()> {
        let u_id = self.registry.id(u)?;
        let v_id = self.registry.id(v)?;
        self.adjacency[u_id].push(v_id);
        self.adjacency[v_id].push(u_id);
        self.edge_count += 1;
        Ok(())
    }

    pub fn degree(&self, id: ActorId) -> Result<usize> {
        Ok(self.neighbors(id)?.len())
    }

    pub fn degree_of(&self, name: &str) -> Result<usize> {
        self.degree(self.registry.id(name)?)
    }

    /// Raw adjacency list of `id`, including repeats from multi-edges.
    pub fn neighbors(&self, id: ActorId) -> Result<&[ActorId]> {
        self.adjacency
            .get(id)
            .map(Vec::as_slice)
            .ok_or(NetworkError::IdOutOfRange {
                id,
                size: self.size(),
            })
    }

    pub(crate) fn ensure_valid(&self, id: ActorId) -> Result<()> {
        if id >= self.size() {
            return Err(NetworkError::IdOutOfRange {
                id,
                size: self.size(),
            });
        }
        Ok(())
    }

    pub(crate) fn adjacency(&self) -> &[Vec<ActorId>] {
        &self.adjacency
    }
}
