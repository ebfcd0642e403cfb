//! Ring perception.
//!
//! - [`vertex_search`] finds ring atoms and ring systems in one depth-first pass.
//! - [`search`] wraps that for a [`Molecule`](crate::Molecule).
//! - [`partition`] groups precomputed rings into connected ring systems.

pub mod partition;
pub mod search;
pub mod vertex_search;

pub use partition::{partition_rings, ring_system_molecule, Ring, RingSet};
pub use search::RingSearch;
pub use vertex_search::{
    cyclic_vertex_search, CyclicVertexSearch, JumboCyclicVertexSearch, RegularCyclicVertexSearch,
    VertexSearch,
};
