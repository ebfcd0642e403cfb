//! Cyclic vertex search.
//!
//! A single depth-first pass over an adjacency list that finds one cycle per
//! back edge, folds each cycle into a group, and merges groups sharing two or
//! more vertices into fused ring systems. Each vertex remembers the set of
//! vertices on the path when it was entered, so the cycle closed by a back
//! edge `v → w` is `path(w) ⊕ path(v) ∪ {v}`.
//!
//! The walk is generic over [`VertexSet`]: [`RegularCyclicVertexSearch`]
//! uses a single u64 word per set and serves graphs of up to 64 vertices,
//! [`JumboCyclicVertexSearch`] serves anything larger. Use
//! [`cyclic_vertex_search`] to pick one by size.

use std::fmt;
use std::sync::OnceLock;

use cyanea_core::{AdjacencyList, VertexSet, WideSet, WordSet, WORD_BITS};
use tracing::{debug, trace};

/// Ring membership queries answered by a completed search.
///
/// Vertex arguments must be below [`vertex_count`](Self::vertex_count);
/// implementations panic otherwise.
pub trait CyclicVertexSearch: fmt::Debug + Send + Sync {
    /// Number of vertices in the searched graph.
    fn vertex_count(&self) -> usize;

    /// Circuit rank: the number of independent cycles found.
    fn num_cycles(&self) -> usize;

    /// Whether vertex `v` lies on a cycle.
    fn cyclic_vertex(&self, v: usize) -> bool;

    /// Whether `u` and `v` belong to the same cycle group.
    ///
    /// Adjacency is not checked; for a bonded pair this is exactly whether
    /// the bond is a ring bond.
    fn cyclic_edge(&self, u: usize, v: usize) -> bool;

    /// Every cyclic vertex, ascending.
    fn cyclic(&self) -> Vec<usize>;

    /// Vertex groups of the isolated ring systems.
    fn isolated(&self) -> Vec<Vec<usize>>;

    /// Vertex groups of the fused ring systems.
    fn fused(&self) -> Vec<Vec<usize>>;

    /// Per-vertex colour: `-1` acyclic, `0` shared by two or more groups,
    /// otherwise the 1-based id of the one group holding the vertex.
    fn vertex_color(&self) -> &[i32];

    /// Colour of a single vertex.
    fn color(&self, v: usize) -> i32 {
        self.vertex_color()[v]
    }
}

/// Word-sized search for graphs of at most 64 vertices.
pub type RegularCyclicVertexSearch = VertexSearch<WordSet>;

/// Search for graphs of any size.
pub type JumboCyclicVertexSearch = VertexSearch<WideSet>;

/// Run the cheapest search able to hold `graph`.
pub fn cyclic_vertex_search<G: AdjacencyList + ?Sized>(graph: &G) -> Box<dyn CyclicVertexSearch> {
    if graph.vertex_count() <= WORD_BITS {
        Box::new(RegularCyclicVertexSearch::new(graph))
    } else {
        Box::new(JumboCyclicVertexSearch::new(graph))
    }
}

#[derive(Debug)]
struct CycleGroup<S> {
    vertices: S,
    fused: bool,
}

/// Result of a cyclic vertex search over a set representation `S`.
#[derive(Debug)]
pub struct VertexSearch<S: VertexSet> {
    n: usize,
    num_cycles: usize,
    /// Pairwise intersections hold at most one vertex.
    groups: Vec<CycleGroup<S>>,
    cyclic: S,
    colors: OnceLock<Vec<i32>>,
}

impl<S: VertexSet> VertexSearch<S> {
    /// Search `graph`, visiting neighbours in the order it lists them.
    ///
    /// # Panics
    ///
    /// Panics if a neighbour index is not below `graph.vertex_count()`, or
    /// if `S` cannot hold that many vertices.
    pub fn new<G: AdjacencyList + ?Sized>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut groups = CycleGroups::new(n);

        if n > 0 {
            let mut walk: Walk<'_, S, G> = Walk::new(graph);
            for root in 0..n {
                if !walk.visited.contains(root) {
                    walk.search(root, &mut groups);
                }
            }
        }

        debug!(
            vertices = n,
            cycles = groups.num_cycles,
            groups = groups.groups.len(),
            "cyclic vertex search complete"
        );

        VertexSearch {
            n,
            num_cycles: groups.num_cycles,
            groups: groups.groups,
            cyclic: groups.cyclic,
            colors: OnceLock::new(),
        }
    }

    fn filtered(&self, fused: bool) -> Vec<Vec<usize>> {
        self.groups
            .iter()
            .filter(|g| g.fused == fused)
            .map(|g| g.vertices.to_vec())
            .collect()
    }

    fn build_colors(&self) -> Vec<i32> {
        let mut color = vec![-1i32; self.n];
        for (id, group) in (1..).zip(&self.groups) {
            for v in group.vertices.to_vec() {
                color[v] = if color[v] == -1 { id } else { 0 };
            }
        }
        debug!(vertices = self.n, groups = self.groups.len(), "vertex colours built");
        color
    }

    fn check(&self, v: usize) {
        assert!(v < self.n, "vertex {v} out of range for a graph of {} vertices", self.n);
    }
}

impl<S: VertexSet> CyclicVertexSearch for VertexSearch<S> {
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn num_cycles(&self) -> usize {
        self.num_cycles
    }

    fn cyclic_vertex(&self, v: usize) -> bool {
        self.check(v);
        self.cyclic.contains(v)
    }

    fn cyclic_edge(&self, u: usize, v: usize) -> bool {
        let color = self.vertex_color();
        let (cu, cv) = (color[u], color[v]);
        if cu == -1 || cv == -1 {
            return false;
        }
        if cu != 0 && cv != 0 {
            return cu == cv;
        }
        // a shared vertex sits in several groups, only a common group counts
        self.groups
            .iter()
            .any(|g| g.vertices.contains(u) && g.vertices.contains(v))
    }

    fn cyclic(&self) -> Vec<usize> {
        self.cyclic.to_vec()
    }

    fn isolated(&self) -> Vec<Vec<usize>> {
        self.filtered(false)
    }

    fn fused(&self) -> Vec<Vec<usize>> {
        self.filtered(true)
    }

    fn vertex_color(&self) -> &[i32] {
        self.colors.get_or_init(|| self.build_colors())
    }
}

// ── Construction ─────────────────────────────────────────────────────────

/// Groups accumulated while walking.
struct CycleGroups<S> {
    num_cycles: usize,
    groups: Vec<CycleGroup<S>>,
    cyclic: S,
}

impl<S: VertexSet> CycleGroups<S> {
    fn new(n: usize) -> Self {
        CycleGroups { num_cycles: 0, groups: Vec::new(), cyclic: S::with_capacity(n) }
    }

    fn add(&mut self, cycle: S) {
        self.num_cycles += 1;

        let target = if cycle.intersection_len(&self.cyclic) > 1 {
            self.groups.iter().position(|g| g.vertices.intersection_len(&cycle) > 1)
        } else {
            None
        };
        self.cyclic.union_with(&cycle);

        match target {
            Some(i) => self.merge(i, &cycle),
            None => self.groups.push(CycleGroup { vertices: cycle, fused: false }),
        }
    }

    /// Fold `cycle` into group `target`, then absorb every group the enlarged
    /// group now overlaps by two or more vertices.
    fn merge(&mut self, mut target: usize, cycle: &S) {
        self.groups[target].vertices.union_with(cycle);
        self.groups[target].fused = true;

        let mut j = 0;
        while j < self.groups.len() {
            if j != target
                && self.groups[j].vertices.intersection_len(&self.groups[target].vertices) > 1
            {
                let other = self.groups.remove(j);
                if j < target {
                    target -= 1;
                }
                trace!(into = target, absorbed = j, "merging cycle groups");
                self.groups[target].vertices.union_with(&other.vertices);
                j = 0;
            } else {
                j += 1;
            }
        }
    }
}

/// One pending vertex on the explicit depth-first stack.
struct Frame<S> {
    v: usize,
    /// Path state of the parent: every ancestor except the parent itself.
    prev: S,
    /// Path including `v`.
    curr: S,
    next: usize,
}

/// Traversal state, dropped once the search completes.
struct Walk<'g, S, G: ?Sized> {
    graph: &'g G,
    /// Path state when each vertex was entered, excluding the vertex.
    state: Vec<S>,
    visited: S,
}

impl<'g, S: VertexSet, G: AdjacencyList + ?Sized> Walk<'g, S, G> {
    fn new(graph: &'g G) -> Self {
        let n = graph.vertex_count();
        Walk { graph, state: vec![S::with_capacity(n); n], visited: S::with_capacity(n) }
    }

    fn enter(&mut self, v: usize, prev: S, mut curr: S) -> Frame<S> {
        self.state[v] = curr.clone();
        curr.insert(v);
        self.visited.union_with(&curr);
        Frame { v, prev, curr, next: 0 }
    }

    fn search(&mut self, root: usize, groups: &mut CycleGroups<S>) {
        let empty = S::with_capacity(self.graph.vertex_count());
        let first = self.enter(root, empty.clone(), empty);
        let mut stack = vec![first];

        while let Some(frame) = stack.last_mut() {
            let v = frame.v;
            if frame.next == self.graph.degree(v) {
                stack.pop();
                continue;
            }
            let w = self.graph.neighbor(v, frame.next);
            frame.next += 1;

            if frame.prev.contains(w) {
                // back edge to an ancestor other than the parent
                groups.add(self.state[w].symmetric_difference(&frame.curr));
            } else if !self.visited.contains(w) {
                let curr = frame.curr.clone();
                let prev = self.state[v].clone();
                let child = self.enter(w, prev, curr);
                stack.push(child);
            }
        }
    }
}
