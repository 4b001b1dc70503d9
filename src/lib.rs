//! Actor collaboration network.
//!
//! Actors are nodes, co-appearing in a listing is an undirected edge. The
//! network answers shortest-path, approximate-diameter and degree-statistics
//! queries once every edge has been added.

pub mod data_cleaning;
pub mod error;
pub mod network;
pub mod registry;
pub mod stats;
pub mod traversal;

pub use error::{NetworkError, Result};
pub use network::ActorNetwork;
pub use registry::{ActorId, Registry};
