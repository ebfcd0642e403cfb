//! Ring perception for molecular graphs in the Cyanea ecosystem.
//!
//! Finds ring atoms and ring bonds, counts independent rings, splits ring
//! atoms into isolated and fused ring systems, extracts ring fragments, and
//! partitions precomputed ring sets into connected ring systems.
//!
//! # Example
//!
//! ```
//! use cyanea_ring::{Molecule, RingSearch};
//!
//! // biphenyl skeleton: two six-membered rings joined by the bond 0-6
//! let mut edges: Vec<(usize, usize)> = (0..6).map(|i| (i, (i + 1) % 6)).collect();
//! edges.extend((0..6).map(|i| (6 + i, 6 + (i + 1) % 6)));
//! edges.push((0, 6));
//! let biphenyl = Molecule::from_edges("biphenyl", 12, &edges).unwrap();
//!
//! let rs = RingSearch::new(&biphenyl);
//! assert_eq!(rs.num_rings(), 2);
//! assert_eq!(rs.isolated().len(), 2);
//! assert!(!rs.cyclic_edge(0, 6).unwrap());
//! assert_eq!(rs.ring_fragments().bond_count(), 12);
//! ```

pub mod molecule;
pub mod ring;

pub use molecule::{Bond, BondOrder, MolAtom, Molecule};
pub use ring::{
    cyclic_vertex_search, partition_rings, ring_system_molecule, CyclicVertexSearch,
    JumboCyclicVertexSearch, RegularCyclicVertexSearch, Ring, RingSearch, RingSet,
};
