//! Core trait definitions for the Cyanea ecosystem.
//!
//! These traits define the contracts that domain types implement across crates.

/// A read-only, vertex-indexed adjacency view of an undirected graph.
///
/// Vertices are `0..vertex_count()`. Every edge appears in the neighbour
/// lists of both of its endpoints, in a fixed order that graph walks follow.
pub trait AdjacencyList {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of neighbours of vertex `v`.
    fn degree(&self, v: usize) -> usize;

    /// The `i`-th neighbour of vertex `v`, for `i < degree(v)`.
    fn neighbor(&self, v: usize, i: usize) -> usize;
}

impl AdjacencyList for [Vec<usize>] {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn degree(&self, v: usize) -> usize {
        self[v].len()
    }

    fn neighbor(&self, v: usize, i: usize) -> usize {
        self[v][i]
    }
}

impl AdjacencyList for Vec<Vec<usize>> {
    fn vertex_count(&self) -> usize {
        self.len()
    }

    fn degree(&self, v: usize) -> usize {
        self[v].len()
    }

    fn neighbor(&self, v: usize, i: usize) -> usize {
        self[v][i]
    }
}

/// A type that carries a human-readable name.
pub trait Annotated {
    /// A human-readable name or identifier.
    fn name(&self) -> &str;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of_three() -> Vec<Vec<usize>> {
        vec![vec![1], vec![0, 2], vec![1]]
    }

    #[test]
    fn nested_vec_adjacency() {
        let g = path_of_three();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(AdjacencyList::degree(&g, 1), 2);
        assert_eq!(g.neighbor(1, 1), 2);
    }

    #[test]
    fn slice_adjacency_matches_vec() {
        let g = path_of_three();
        let s: &[Vec<usize>] = &g;
        assert_eq!(s.vertex_count(), g.vertex_count());
        for v in 0..3 {
            assert_eq!(s.degree(v), g.degree(v));
        }
        assert_eq!(<[Vec<usize>]>::vertex_count(&[]), 0);
    }
}
