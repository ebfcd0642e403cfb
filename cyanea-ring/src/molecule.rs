//! Molecular graph representation.
//!
//! [`Molecule`] is the container ring perception runs on: atoms and bonds
//! indexed from zero, plus an adjacency list built once at construction.

use std::collections::VecDeque;

use cyanea_core::{AdjacencyList, Annotated, CyaneaError, Result, Summarizable};

/// Bond order classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BondOrder {
    #[default]
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Numeric bond order for valence calculations.
    pub fn as_f64(self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }
}

/// An atom in a molecular graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MolAtom {
    pub atomic_number: u8,
    pub formal_charge: i8,
    pub is_aromatic: bool,
    pub implicit_hydrogens: u8,
}

impl MolAtom {
    /// A neutral, non-aromatic atom of the given element.
    pub fn new(atomic_number: u8) -> Self {
        MolAtom { atomic_number, formal_charge: 0, is_aromatic: false, implicit_hydrogens: 0 }
    }

    /// Carbon, the default skeleton atom.
    pub fn carbon() -> Self {
        MolAtom::new(6)
    }
}

/// A bond between two atoms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub atom1: usize,
    pub atom2: usize,
    pub order: BondOrder,
}

impl Bond {
    /// A single bond between `atom1` and `atom2`.
    pub fn single(atom1: usize, atom2: usize) -> Self {
        Bond { atom1, atom2, order: BondOrder::Single }
    }

    /// The atom at the other end of the bond from `atom`, if `atom` is an endpoint.
    pub fn other(&self, atom: usize) -> Option<usize> {
        if self.atom1 == atom {
            Some(self.atom2)
        } else if self.atom2 == atom {
            Some(self.atom1)
        } else {
            None
        }
    }
}

/// A molecular graph with atoms, bonds, and adjacency information.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    pub name: String,
    pub atoms: Vec<MolAtom>,
    pub bonds: Vec<Bond>,
    /// adjacency[atom_idx] = Vec<(neighbor_atom_idx, bond_idx)>
    pub adjacency: Vec<Vec<(usize, usize)>>,
}

impl Molecule {
    /// Create a new molecule, building the adjacency list from atoms and bonds.
    ///
    /// # Errors
    ///
    /// Returns an error if a bond references an atom that does not exist,
    /// bonds an atom to itself, or repeats an earlier bond's atom pair.
    pub fn new(name: impl Into<String>, atoms: Vec<MolAtom>, bonds: Vec<Bond>) -> Result<Self> {
        let n = atoms.len();
        let mut adjacency = vec![Vec::new(); n];
        for (bi, bond) in bonds.iter().enumerate() {
            for atom in [bond.atom1, bond.atom2] {
                if atom >= n {
                    return Err(CyaneaError::out_of_range("atom", atom, n));
                }
            }
            if bond.atom1 == bond.atom2 {
                return Err(CyaneaError::InvalidInput(format!(
                    "bond {} joins atom {} to itself",
                    bi, bond.atom1
                )));
            }
            if let Some(&(_, first)) = adjacency[bond.atom1].iter().find(|&&(n, _)| n == bond.atom2) {
                return Err(CyaneaError::InvalidInput(format!(
                    "bond {} repeats bond {} between atoms {} and {}",
                    bi, first, bond.atom1, bond.atom2
                )));
            }
            adjacency[bond.atom1].push((bond.atom2, bi));
            adjacency[bond.atom2].push((bond.atom1, bi));
        }
        Ok(Molecule { name: name.into(), atoms, bonds, adjacency })
    }

    /// A hydrogen-suppressed carbon skeleton with `n` atoms and single bonds
    /// between each `(u, v)` pair.
    pub fn from_edges(name: impl Into<String>, n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let atoms = vec![MolAtom::carbon(); n];
        let bonds = edges.iter().map(|&(u, v)| Bond::single(u, v)).collect();
        Molecule::new(name, atoms, bonds)
    }

    /// Number of atoms.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Number of bonds.
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Neighbor atom indices for a given atom.
    pub fn neighbors(&self, atom_idx: usize) -> Vec<usize> {
        self.adjacency[atom_idx].iter().map(|&(n, _)| n).collect()
    }

    /// Graph degree of an atom (number of explicit bonds).
    pub fn degree(&self, atom_idx: usize) -> usize {
        self.adjacency[atom_idx].len()
    }

    /// Index of the bond between two atoms, if any.
    pub fn bond_between(&self, a1: usize, a2: usize) -> Option<usize> {
        self.adjacency
            .get(a1)?
            .iter()
            .find(|&&(n, _)| n == a2)
            .map(|&(_, bi)| bi)
    }

    /// The vertex adjacency list: `graph[v]` holds the neighbors of atom `v`
    /// in bond order.
    pub fn graph(&self) -> Vec<Vec<usize>> {
        (0..self.atom_count()).map(|v| self.neighbors(v)).collect()
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        let n = self.atom_count();
        let mut visited = vec![false; n];
        let mut components = 0;

        for start in 0..n {
            if visited[start] {
                continue;
            }
            components += 1;
            let mut queue = VecDeque::new();
            queue.push_back(start);
            visited[start] = true;
            while let Some(curr) = queue.pop_front() {
                for &(neighbor, _) in &self.adjacency[curr] {
                    if !visited[neighbor] {
                        visited[neighbor] = true;
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        components
    }

    /// Sub-molecule of `atoms` and those of `bonds` whose endpoints are both kept.
    ///
    /// Atoms keep their relative order; bonds keep the order given.
    ///
    /// # Panics
    ///
    /// Panics if an atom or bond index is out of range.
    pub fn subgraph(&self, atoms: &[usize], bonds: &[usize]) -> Molecule {
        let mut sorted_atoms = atoms.to_vec();
        sorted_atoms.sort_unstable();
        sorted_atoms.dedup();

        let mut index_map = vec![usize::MAX; self.atom_count()];
        let mut new_atoms = Vec::with_capacity(sorted_atoms.len());
        for (new_idx, &old_idx) in sorted_atoms.iter().enumerate() {
            index_map[old_idx] = new_idx;
            new_atoms.push(self.atoms[old_idx].clone());
        }

        let mut new_bonds = Vec::with_capacity(bonds.len());
        let mut adjacency = vec![Vec::new(); new_atoms.len()];
        for &bi in bonds {
            let bond = &self.bonds[bi];
            let a1 = index_map[bond.atom1];
            let a2 = index_map[bond.atom2];
            if a1 == usize::MAX || a2 == usize::MAX {
                continue;
            }
            adjacency[a1].push((a2, new_bonds.len()));
            adjacency[a2].push((a1, new_bonds.len()));
            new_bonds.push(Bond { atom1: a1, atom2: a2, order: bond.order });
        }

        Molecule { name: self.name.clone(), atoms: new_atoms, bonds: new_bonds, adjacency }
    }

    /// Sub-molecule of `atoms` and every bond between two of them.
    pub fn induced_subgraph(&self, atoms: &[usize]) -> Molecule {
        let mut keep = vec![false; self.atom_count()];
        for &a in atoms {
            keep[a] = true;
        }
        let bonds: Vec<usize> = self
            .bonds
            .iter()
            .enumerate()
            .filter(|(_, b)| keep[b.atom1] && keep[b.atom2])
            .map(|(bi, _)| bi)
            .collect();
        self.subgraph(atoms, &bonds)
    }
}

/// Atoms as vertices and bonds as edges, neighbours in bond order.
impl AdjacencyList for Molecule {
    fn vertex_count(&self) -> usize {
        self.atoms.len()
    }

    fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    fn neighbor(&self, v: usize, i: usize) -> usize {
        self.adjacency[v][i].0
    }
}

impl Annotated for Molecule {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Summarizable for Molecule {
    fn summary(&self) -> String {
        format!(
            "{}: {} atoms, {} bonds",
            if self.name.is_empty() { "Molecule" } else { &self.name },
            self.atom_count(),
            self.bond_count()
        )
    }
}
