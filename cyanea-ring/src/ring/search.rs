//! Ring search over a molecule.
//!
//! [`RingSearch`] runs a [`CyclicVertexSearch`] on a molecule's adjacency list
//! and answers ring questions in terms of the molecule's atoms and bonds.
//! The search variant is chosen by atom count unless one is supplied.

use cyanea_core::{CyaneaError, Result};

use super::vertex_search::{cyclic_vertex_search, CyclicVertexSearch};
use crate::molecule::Molecule;

/// Ring membership of the atoms and bonds of one molecule.
///
/// # Example
///
/// ```
/// use cyanea_ring::{Molecule, RingSearch};
///
/// // spiro[2.2]pentane: two cyclopropanes sharing atom 2
/// let mol = Molecule::from_edges(
///     "spiropentane",
///     5,
///     &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)],
/// )
/// .unwrap();
/// let rs = RingSearch::new(&mol);
/// assert_eq!(rs.num_rings(), 2);
/// assert_eq!(rs.isolated(), vec![vec![0, 1, 2], vec![2, 3, 4]]);
/// assert!(rs.fused().is_empty());
/// ```
#[derive(Debug)]
pub struct RingSearch<'a> {
    mol: &'a Molecule,
    searcher: Box<dyn CyclicVertexSearch>,
}

impl<'a> RingSearch<'a> {
    /// Search the rings of `mol`.
    pub fn new(mol: &'a Molecule) -> Self {
        let searcher = cyclic_vertex_search(mol);
        RingSearch { mol, searcher }
    }

    /// Search `mol` using an adjacency list the caller already holds.
    ///
    /// # Errors
    ///
    /// Returns an error if `graph` does not have one entry per atom or lists
    /// a neighbour that is not an atom.
    pub fn with_graph(mol: &'a Molecule, graph: &[Vec<usize>]) -> Result<Self> {
        let n = mol.atom_count();
        if graph.len() != n {
            return Err(CyaneaError::InvalidInput(format!(
                "adjacency list has {} vertices but the molecule has {} atoms",
                graph.len(),
                n
            )));
        }
        if let Some(&w) = graph.iter().flatten().find(|&&w| w >= n) {
            return Err(CyaneaError::out_of_range("atom", w, n));
        }
        Ok(RingSearch { mol, searcher: cyclic_vertex_search(graph) })
    }

    /// Wrap a search already run over the adjacency list of `mol`.
    ///
    /// # Errors
    ///
    /// Returns an error if the search covers a different number of vertices
    /// than `mol` has atoms.
    pub fn with_search(mol: &'a Molecule, searcher: Box<dyn CyclicVertexSearch>) -> Result<Self> {
        if searcher.vertex_count() != mol.atom_count() {
            return Err(CyaneaError::InvalidInput(format!(
                "search covers {} vertices but the molecule has {} atoms",
                searcher.vertex_count(),
                mol.atom_count()
            )));
        }
        Ok(RingSearch { mol, searcher })
    }

    /// The molecule being searched.
    pub fn molecule(&self) -> &'a Molecule {
        self.mol
    }

    /// Number of independent rings (circuit rank).
    pub fn num_rings(&self) -> usize {
        self.searcher.num_cycles()
    }

    /// Indices of every ring atom, ascending.
    pub fn cyclic(&self) -> Vec<usize> {
        self.searcher.cyclic()
    }

    /// Whether `atom` is a ring atom.
    pub fn cyclic_atom(&self, atom: usize) -> Result<bool> {
        self.check_atom(atom)?;
        Ok(self.searcher.cyclic_vertex(atom))
    }

    /// Whether atoms `u` and `v` are joined by a ring bond. Unbonded atoms
    /// give `false`.
    pub fn cyclic_edge(&self, u: usize, v: usize) -> Result<bool> {
        self.check_atom(u)?;
        self.check_atom(v)?;
        if self.mol.bond_between(u, v).is_none() {
            return Ok(false);
        }
        Ok(self.searcher.cyclic_edge(u, v))
    }

    /// Whether bond `bond` is a ring bond.
    pub fn cyclic_bond(&self, bond: usize) -> Result<bool> {
        let b = self
            .mol
            .bonds
            .get(bond)
            .ok_or_else(|| CyaneaError::out_of_range("bond", bond, self.mol.bond_count()))?;
        Ok(self.searcher.cyclic_edge(b.atom1, b.atom2))
    }

    /// Atom groups of the isolated ring systems.
    pub fn isolated(&self) -> Vec<Vec<usize>> {
        self.searcher.isolated()
    }

    /// Atom groups of the fused ring systems.
    pub fn fused(&self) -> Vec<Vec<usize>> {
        self.searcher.fused()
    }

    /// Ring-system colour of every atom; see [`CyclicVertexSearch::vertex_color`].
    pub fn vertex_colors(&self) -> &[i32] {
        self.searcher.vertex_color()
    }

    /// All ring atoms with the bonds inside their ring systems.
    ///
    /// A bond joining two separate ring systems, like the central bond of
    /// biphenyl, is left out. Bonds at a spiro atom are kept.
    pub fn ring_fragments(&self) -> Molecule {
        let colors = self.searcher.vertex_color();
        let bonds: Vec<usize> = self
            .mol
            .bonds
            .iter()
            .enumerate()
            .filter(|(_, b)| same_system(colors[b.atom1], colors[b.atom2]))
            .map(|(bi, _)| bi)
            .collect();
        self.mol.subgraph(&self.cyclic(), &bonds)
    }

    /// One sub-molecule per isolated ring system, built on demand.
    pub fn isolated_ring_fragments(&self) -> impl Iterator<Item = Molecule> + 'a {
        let mol = self.mol;
        self.isolated()
            .into_iter()
            .map(move |atoms| mol.induced_subgraph(&atoms))
    }

    /// One sub-molecule per fused ring system, built on demand.
    pub fn fused_ring_fragments(&self) -> impl Iterator<Item = Molecule> + 'a {
        let mol = self.mol;
        self.fused()
            .into_iter()
            .map(move |atoms| mol.induced_subgraph(&atoms))
    }

    fn check_atom(&self, atom: usize) -> Result<()> {
        let n = self.mol.atom_count();
        if atom < n {
            Ok(())
        } else {
            Err(CyaneaError::out_of_range("atom", atom, n))
        }
    }
}

fn same_system(a: i32, b: i32) -> bool {
    a != -1 && b != -1 && (a == 0 || b == 0 || a == b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::vertex_search::{JumboCyclicVertexSearch, RegularCyclicVertexSearch};

    fn ring(start: usize, len: usize) -> Vec<(usize, usize)> {
        (0..len).map(|i| (start + i, start + (i + 1) % len)).collect()
    }

    /// Triangle 0-1-2 and square 3-4-5-6 joined by the bond 2-3.
    fn bridged_rings() -> Molecule {
        let mut edges = ring(0, 3);
        edges.extend(ring(3, 4));
        edges.push((2, 3));
        Molecule::from_edges("bridged", 7, &edges).unwrap()
    }

    #[test]
    fn bridged_rings_are_isolated() {
        let mol = bridged_rings();
        let rs = RingSearch::new(&mol);
        assert_eq!(rs.num_rings(), 2);
        assert_eq!(rs.isolated(), vec![vec![0, 1, 2], vec![3, 4, 5, 6]]);
        assert!(rs.fused().is_empty());
        assert!(!rs.cyclic_edge(2, 3).unwrap());
        assert!(!rs.cyclic_bond(7).unwrap());
        assert!(rs.cyclic_bond(0).unwrap());
    }

    #[test]
    fn ring_fragments_drop_linking_bond() {
        let mol = bridged_rings();
        let frag = RingSearch::new(&mol).ring_fragments();
        assert_eq!(frag.atom_count(), 7);
        assert_eq!(frag.bond_count(), 7);
        assert_eq!(frag.bond_between(2, 3), None);
        assert_eq!(frag.component_count(), 2);
    }

    #[test]
    fn biphenyl_fragments() {
        let mut edges = ring(0, 6);
        edges.extend(ring(6, 6));
        edges.push((0, 6));
        let mol = Molecule::from_edges("biphenyl", 12, &edges).unwrap();
        let rs = RingSearch::new(&mol);

        let frags: Vec<_> = rs.isolated_ring_fragments().collect();
        assert_eq!(frags.len(), 2);
        for frag in &frags {
            assert_eq!(frag.atom_count(), 6);
            assert_eq!(frag.bond_count(), 6);
        }
        assert_eq!(rs.fused_ring_fragments().count(), 0);
    }

    #[test]
    fn spiro_atom_keeps_both_ring_bonds() {
        let mol = Molecule::from_edges("spiro", 5, &[(0, 1), (1, 3), (3, 0), (2, 3), (3, 4), (4, 2)])
            .unwrap();
        let rs = RingSearch::new(&mol);
        let colors = rs.vertex_colors();
        assert_eq!(colors[3], 0);
        assert_eq!(colors[0], colors[1]);
        assert_eq!(colors[2], colors[4]);
        assert_ne!(colors[0], colors[2]);

        assert!(rs.cyclic_edge(0, 3).unwrap());
        assert!(rs.cyclic_edge(3, 2).unwrap());
        assert!(!rs.cyclic_edge(0, 2).unwrap());

        let frag = rs.ring_fragments();
        assert_eq!(frag.atom_count(), 5);
        assert_eq!(frag.bond_count(), 6);
    }

    #[test]
    fn naphthalene_is_fused() {
        // c1ccc2ccccc2c1 skeleton: ring bonds 0..9 with the fusion bond 3-8
        let mut edges = ring(0, 10);
        edges.push((3, 8));
        let mol = Molecule::from_edges("naphthalene", 10, &edges).unwrap();
        let rs = RingSearch::new(&mol);
        assert_eq!(rs.num_rings(), 2);
        assert!(rs.isolated().is_empty());
        assert_eq!(rs.fused(), vec![(0..10).collect::<Vec<_>>()]);
        assert!(rs.cyclic_bond(10).unwrap());

        let frags: Vec<_> = rs.fused_ring_fragments().collect();
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].bond_count(), 11);
    }

    #[test]
    fn fused_bicycle_with_substituent() {
        let mol = Molecule::from_edges("bicyclobutane", 5, &[(0, 1), (1, 2), (2, 0), (1, 3), (3, 2), (3, 4)])
            .unwrap();
        let rs = RingSearch::new(&mol);
        assert_eq!(rs.num_rings(), 2);
        assert_eq!(rs.fused(), vec![vec![0, 1, 2, 3]]);
        assert!(!rs.cyclic_atom(4).unwrap());
        assert!(rs.cyclic_atom(3).unwrap());
        assert!(!rs.cyclic_edge(3, 4).unwrap());
        assert_eq!(rs.cyclic(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn acyclic_molecule() {
        let mol = Molecule::from_edges("butane", 4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let rs = RingSearch::new(&mol);
        assert_eq!(rs.num_rings(), 0);
        assert!(rs.cyclic().is_empty());
        let frag = rs.ring_fragments();
        assert_eq!(frag.atom_count(), 0);
        assert_eq!(frag.bond_count(), 0);
    }

    #[test]
    fn empty_molecule() {
        let mol = Molecule::from_edges("", 0, &[]).unwrap();
        let rs = RingSearch::new(&mol);
        assert_eq!(rs.num_rings(), 0);
        assert!(rs.isolated().is_empty());
        assert_eq!(rs.isolated_ring_fragments().count(), 0);
    }

    #[test]
    fn out_of_range_lookups_are_errors() {
        let mol = bridged_rings();
        let rs = RingSearch::new(&mol);
        assert_eq!(rs.cyclic_atom(7), Err(CyaneaError::out_of_range("atom", 7, 7)));
        assert_eq!(rs.cyclic_edge(0, 9), Err(CyaneaError::out_of_range("atom", 9, 7)));
        assert_eq!(rs.cyclic_bond(8), Err(CyaneaError::out_of_range("bond", 8, 8)));
    }

    #[test]
    fn precomputed_graph() {
        let mol = bridged_rings();
        let graph = mol.graph();
        let rs = RingSearch::with_graph(&mol, &graph).unwrap();
        assert_eq!(rs.num_rings(), 2);

        assert!(RingSearch::with_graph(&mol, &graph[..6]).is_err());
        let mut bad = graph.clone();
        bad[0].push(11);
        assert_eq!(
            RingSearch::with_graph(&mol, &bad).unwrap_err(),
            CyaneaError::out_of_range("atom", 11, 7)
        );
    }

    #[test]
    fn explicit_search_variant() {
        let mol = bridged_rings();
        let graph = mol.graph();
        let jumbo = RingSearch::with_search(&mol, Box::new(JumboCyclicVertexSearch::new(&graph))).unwrap();
        let regular = RingSearch::with_search(&mol, Box::new(RegularCyclicVertexSearch::new(&graph))).unwrap();
        assert_eq!(jumbo.isolated(), regular.isolated());
        assert_eq!(jumbo.vertex_colors(), regular.vertex_colors());

        let other = Molecule::from_edges("cyclopropane", 3, &ring(0, 3)).unwrap();
        let small = Box::new(RegularCyclicVertexSearch::new(&other.graph()));
        assert!(RingSearch::with_search(&mol, small).is_err());
    }

    #[test]
    fn large_macrocycle_uses_wide_sets() {
        let mol = Molecule::from_edges("cyclohectane", 100, &ring(0, 100)).unwrap();
        let rs = RingSearch::new(&mol);
        assert_eq!(rs.num_rings(), 1);
        assert_eq!(rs.cyclic().len(), 100);
        assert!(rs.cyclic_edge(99, 0).unwrap());
        assert_eq!(rs.ring_fragments().bond_count(), 100);
    }

    #[test]
    fn queries_are_idempotent() {
        let mol = bridged_rings();
        let rs = RingSearch::new(&mol);
        assert_eq!(rs.isolated(), rs.isolated());
        assert_eq!(rs.vertex_colors(), rs.vertex_colors());
        assert_eq!(rs.ring_fragments(), rs.ring_fragments());
    }
}
