#![no_main]
use libfuzzer_sys::fuzz_target;

use cyanea_ring::{Molecule, RingSearch};

// First byte is the atom count, each following byte pair a bond.
fuzz_target!(|data: &[u8]| {
    let Some((&n, rest)) = data.split_first() else {
        return;
    };
    let n = n as usize;
    if n == 0 {
        return;
    }
    let mut edges: Vec<(usize, usize)> = rest
        .chunks_exact(2)
        .map(|p| (p[0] as usize % n, p[1] as usize % n))
        .filter(|&(u, v)| u != v)
        .map(|(u, v)| (u.min(v), u.max(v)))
        .collect();
    edges.sort_unstable();
    edges.dedup();

    let Ok(mol) = Molecule::from_edges("fuzz", n, &edges) else {
        return;
    };
    let rs = RingSearch::new(&mol);
    assert_eq!(rs.num_rings() + mol.atom_count(), mol.bond_count() + mol.component_count());
    let _ = rs.ring_fragments();
    let _ = rs.fused_ring_fragments().count();
});
