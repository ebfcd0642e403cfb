//! Ring partitioning: group a set of rings into connected ring systems.
//!
//! Rings usually come from a ring-set computation such as SSSR or an
//! all-rings enumeration. Two rings belong to the same system when they share
//! an atom, directly or through a chain of rings in the same set.

use cyanea_core::{CyaneaError, Result};
use tracing::debug;

use crate::molecule::Molecule;

/// A ring: a closed path of atoms and the bonds along it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    atoms: Vec<usize>,
    bonds: Vec<usize>,
}

impl Ring {
    /// A ring from its atoms (in path order) and bonds, taken as given.
    pub fn new(atoms: Vec<usize>, bonds: Vec<usize>) -> Self {
        Ring { atoms, bonds }
    }

    /// The ring closed by walking `atoms` in order and back to the first.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than three atoms, an atom is not
    /// in `mol`, or two consecutive atoms are not bonded.
    pub fn from_path(mol: &Molecule, atoms: &[usize]) -> Result<Self> {
        if atoms.len() < 3 {
            return Err(CyaneaError::InvalidInput(format!(
                "a ring needs at least 3 atoms, got {}",
                atoms.len()
            )));
        }
        let n = mol.atom_count();
        if let Some(&a) = atoms.iter().find(|&&a| a >= n) {
            return Err(CyaneaError::out_of_range("atom", a, n));
        }

        let mut bonds = Vec::with_capacity(atoms.len());
        for (i, &a) in atoms.iter().enumerate() {
            let b = atoms[(i + 1) % atoms.len()];
            let bond = mol.bond_between(a, b).ok_or_else(|| {
                CyaneaError::InvalidInput(format!("atoms {} and {} are not bonded", a, b))
            })?;
            bonds.push(bond);
        }
        Ok(Ring { atoms: atoms.to_vec(), bonds })
    }

    /// Atoms in path order.
    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    /// Bonds in path order.
    pub fn bonds(&self) -> &[usize] {
        &self.bonds
    }

    /// Ring size in atoms.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Whether the ring has no atoms.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Whether `atom` is on the ring.
    pub fn contains_atom(&self, atom: usize) -> bool {
        self.atoms.contains(&atom)
    }

    /// Whether the two rings have an atom in common.
    pub fn shares_atom(&self, other: &Ring) -> bool {
        self.atoms.iter().any(|&a| other.contains_atom(a))
    }
}

/// An ordered collection of rings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RingSet {
    rings: Vec<Ring>,
}

impl RingSet {
    /// An empty ring set.
    pub fn new() -> Self {
        RingSet::default()
    }

    /// Build ring set from closed atom paths in `mol`.
    ///
    /// # Errors
    ///
    /// Fails on the first path [`Ring::from_path`] rejects.
    pub fn from_paths(mol: &Molecule, paths: &[Vec<usize>]) -> Result<Self> {
        let rings = paths
            .iter()
            .map(|p| Ring::from_path(mol, p))
            .collect::<Result<Vec<_>>>()?;
        Ok(RingSet { rings })
    }

    pub fn push(&mut self, ring: Ring) {
        self.rings.push(ring);
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Ring> {
        self.rings.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ring> {
        self.rings.iter()
    }

    /// Remove and return the ring at `idx`, keeping the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of bounds.
    pub fn remove(&mut self, idx: usize) -> Ring {
        self.rings.remove(idx)
    }

    /// Indices of the other rings sharing at least one atom with ring `idx`.
    pub fn connected_rings(&self, idx: usize) -> Vec<usize> {
        let Some(ring) = self.rings.get(idx) else {
            return Vec::new();
        };
        self.rings
            .iter()
            .enumerate()
            .filter(|&(j, other)| j != idx && ring.shares_atom(other))
            .map(|(j, _)| j)
            .collect()
    }

    /// Every atom on any ring, ascending.
    pub fn atoms(&self) -> Vec<usize> {
        let mut atoms: Vec<usize> = self.rings.iter().flat_map(|r| r.atoms.iter().copied()).collect();
        atoms.sort_unstable();
        atoms.dedup();
        atoms
    }

    /// Every bond on any ring, ascending.
    pub fn bonds(&self) -> Vec<usize> {
        let mut bonds: Vec<usize> = self.rings.iter().flat_map(|r| r.bonds.iter().copied()).collect();
        bonds.sort_unstable();
        bonds.dedup();
        bonds
    }
}

impl From<Vec<Ring>> for RingSet {
    fn from(rings: Vec<Ring>) -> Self {
        RingSet { rings }
    }
}

impl<'a> IntoIterator for &'a RingSet {
    type Item = &'a Ring;
    type IntoIter = std::slice::Iter<'a, Ring>;

    fn into_iter(self) -> Self::IntoIter {
        self.rings.iter()
    }
}

/// Split `rings` into ring systems: maximal groups of rings connected through
/// shared atoms.
///
/// Systems are returned in order of their first ring in `rings`, and rings
/// within a system in breadth-first order from that ring.
pub fn partition_rings(rings: &RingSet) -> Vec<RingSet> {
    let mut work = rings.clone();
    let mut systems = Vec::new();

    while !work.is_empty() {
        // indices into `work` reachable from its first ring
        let mut reached = vec![0];
        let mut seen = vec![false; work.len()];
        seen[0] = true;
        let mut cursor = 0;
        while cursor < reached.len() {
            for j in work.connected_rings(reached[cursor]) {
                if !seen[j] {
                    seen[j] = true;
                    reached.push(j);
                }
            }
            cursor += 1;
        }

        // remove from the back so the remaining indices stay valid
        let mut slots: Vec<Option<Ring>> = vec![None; work.len()];
        for i in (0..seen.len()).rev().filter(|&i| seen[i]) {
            slots[i] = Some(work.remove(i));
        }
        let system: RingSet = reached
            .iter()
            .filter_map(|&i| slots[i].take())
            .collect::<Vec<_>>()
            .into();
        systems.push(system);
    }

    debug!(rings = rings.len(), systems = systems.len(), "ring partition complete");
    systems
}

/// The atoms and bonds of a ring system as one molecule.
///
/// # Panics
///
/// Panics if the ring set refers to atoms or bonds that are not in `mol`.
pub fn ring_system_molecule(mol: &Molecule, system: &RingSet) -> Molecule {
    mol.subgraph(&system.atoms(), &system.bonds())
}
