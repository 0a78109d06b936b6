// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Compatibility graphs of vertex orders.
//!
//! For a fixed vertex order, two vertices must land in different classes of a
//! consistent partition exactly when they are joined in the compatibility
//! graph. A proper coloring of the compatibility graph is therefore a valid
//! partition for that order, and its chromatic number is the best thinness the
//! order admits.
//!
//! The edge rule for `u` before `v` before `w` is the *incompatible triple*:
//! `(u, v)` is an edge when `G` has `(u, w)` but not `(v, w)`. The proper
//! variant additionally joins `(v, w)` when `G` has `(u, w)` but not `(u, v)`.
//!
//! Two construction paths exist:
//! - `CompatibilityGraph::build` considers every triple of a given order.
//! - `CompatibilityGraph::append` grows a prefix one vertex at a time. When `x`
//!   is appended, every vertex not yet placed is known to come after `x` in any
//!   completion, so the edges `(u, x)` witnessed by those vertices are added
//!   right away. After every append the graph equals the batch graph of any
//!   completion of the prefix, restricted to the prefix. Appending never
//!   removes edges, so the chromatic number of a prefix bounds every
//!   completion from below.
//!
//! `pop` undoes the most recent `append` exactly.

use crate::error::{ModelError, Result};
use crate::graph::Graph;
use thinness_core::set::VertexSet;

/// Which consistency condition a compatibility graph encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Thinness: same-class `u < v` with `u ~ w`, `v !~ w` for some later `w`
    /// is forbidden.
    #[default]
    Thinness,
    /// Proper thinness: additionally, same-class `v < w` with `u ~ w`, `u !~ v`
    /// for some earlier `u` is forbidden.
    ProperThinness,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Thinness => write!(f, "Thinness"),
            Variant::ProperThinness => write!(f, "ProperThinness"),
        }
    }
}

/// The compatibility graph of a (partial) vertex order.
///
/// Rows are indexed by the vertex labels of the underlying graph, only the
/// vertices placed so far carry edges. The order itself is kept alongside,
/// so callers can recover positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityGraph {
    variant: Variant,
    order: Vec<usize>,
    position: Vec<usize>,
    placed: VertexSet,
    rows: Vec<VertexSet>,
}

impl CompatibilityGraph {
    /// Creates an empty compatibility graph for a graph with `num_vertices`
    /// vertices. Nothing is placed yet.
    pub fn new(num_vertices: usize, variant: Variant) -> Self {
        Self {
            variant,
            order: Vec::with_capacity(num_vertices),
            position: vec![usize::MAX; num_vertices],
            placed: VertexSet::EMPTY,
            rows: vec![VertexSet::EMPTY; num_vertices],
        }
    }

    /// Builds the compatibility graph of `order` by inspecting every triple.
    ///
    /// `order` must consist of distinct vertices of `graph`; it may be a
    /// proper subsequence, in which case only vertices of `order` act as
    /// witnesses.
    pub fn build(graph: &Graph, order: &[usize], variant: Variant) -> Result<Self> {
        let n = graph.num_vertices();
        let mut compat = Self::new(n, variant);
        for &v in order {
            if v >= n {
                return Err(ModelError::VertexOutOfRange {
                    vertex: v,
                    num_vertices: n,
                });
            }
            if compat.placed.contains(v) {
                return Err(ModelError::DuplicateVertex(v));
            }
            compat.position[v] = compat.order.len();
            compat.order.push(v);
            compat.placed.insert(v);
        }

        let len = order.len();
        for i in 0..len {
            let u = order[i];
            for j in (i + 1)..len {
                let v = order[j];
                for &w in &order[(j + 1)..] {
                    if !graph.has_edge(u, w) {
                        continue;
                    }
                    if !graph.has_edge(v, w) {
                        compat.join(u, v);
                    }
                    if variant == Variant::ProperThinness && !graph.has_edge(u, v) {
                        compat.join(v, w);
                    }
                }
            }
        }

        Ok(compat)
    }

    #[inline(always)]
    fn join(&mut self, u: usize, v: usize) {
        self.rows[u].insert(v);
        self.rows[v].insert(u);
    }

    /// Returns the set of placed vertices that `x` would be joined to if it
    /// were appended now. Does not modify the graph.
    pub fn edges_if_appended(&self, graph: &Graph, x: usize) -> VertexSet {
        debug_assert!(
            x < self.rows.len(),
            "called `CompatibilityGraph::edges_if_appended` with vertex {} but the graph has {} vertices",
            x,
            self.rows.len()
        );
        debug_assert!(
            !self.placed.contains(x),
            "called `CompatibilityGraph::edges_if_appended` with vertex {} which is already placed",
            x
        );

        let later = (graph.vertices() - self.placed).without(x);
        let witnesses = later - graph.neighbors(x);

        let mut joined = VertexSet::EMPTY;
        for w in witnesses {
            joined |= graph.neighbors(w);
        }
        joined &= self.placed;

        if self.variant == Variant::ProperThinness {
            let x_neighbors = graph.neighbors(x);
            let mut before = VertexSet::EMPTY;
            for &v in &self.order {
                if !((before & x_neighbors) - graph.neighbors(v)).is_empty() {
                    joined.insert(v);
                }
                before.insert(v);
            }
        }

        joined
    }

    /// Appends `x` to the order and adds its compatibility edges.
    ///
    /// Returns the set of vertices `x` was joined to, which is exactly the row
    /// of `x` afterwards.
    pub fn append(&mut self, graph: &Graph, x: usize) -> VertexSet {
        let joined = self.edges_if_appended(graph, x);
        for u in joined {
            self.rows[u].insert(x);
        }
        self.rows[x] = joined;
        self.position[x] = self.order.len();
        self.order.push(x);
        self.placed.insert(x);
        joined
    }

    /// Removes the most recently appended vertex together with its edges.
    ///
    /// Returns the removed vertex, or `None` if nothing is placed.
    pub fn pop(&mut self) -> Option<usize> {
        let x = self.order.pop()?;
        for u in self.rows[x] {
            self.rows[u].remove(x);
        }
        self.rows[x] = VertexSet::EMPTY;
        self.position[x] = usize::MAX;
        self.placed.remove(x);
        Some(x)
    }

    /// Removes all placed vertices.
    pub fn clear(&mut self) {
        self.order.clear();
        self.position.fill(usize::MAX);
        self.placed = VertexSet::EMPTY;
        self.rows.fill(VertexSet::EMPTY);
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Returns the placed vertices in order.
    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the set of placed vertices.
    #[inline]
    pub fn placed(&self) -> VertexSet {
        self.placed
    }

    /// Returns the number of placed vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the number of vertices of the underlying graph.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` once every vertex of the underlying graph is placed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.rows.len()
    }

    /// Returns the position of `v` in the order, if placed.
    #[inline]
    pub fn position(&self, v: usize) -> Option<usize> {
        self.placed.contains(v).then(|| self.position[v])
    }

    /// Returns the compatibility neighbors of `v`.
    #[inline]
    pub fn neighbors(&self, v: usize) -> VertexSet {
        self.rows[v]
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.rows[u].contains(v)
    }

    /// Returns the number of compatibility edges.
    pub fn num_edges(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum::<usize>() / 2
    }

    /// Returns the rows restricted to `vertices`, indexed by vertex label.
    pub fn restricted_rows(&self, vertices: VertexSet) -> Vec<VertexSet> {
        self.rows
            .iter()
            .enumerate()
            .map(|(v, &row)| {
                if vertices.contains(v) {
                    row & vertices
                } else {
                    VertexSet::EMPTY
                }
            })
            .collect()
    }
}

impl std::fmt::Display for CompatibilityGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CompatibilityGraph(variant: {}, placed: {}/{}, edges: {})",
            self.variant,
            self.order.len(),
            self.rows.len(),
            self.num_edges()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn graph_from_mask(n: usize, mask: u64) -> Graph {
        let mut g = Graph::new(n).unwrap();
        let mut k = 0;
        for v in 1..n {
            for u in 0..v {
                if mask >> k & 1 == 1 {
                    g.add_edge(u, v).unwrap();
                }
                k += 1;
            }
        }
        g
    }

    fn assert_prefixes_match_batch(graph: &Graph, order: &[usize], variant: Variant) {
        let batch = CompatibilityGraph::build(graph, order, variant).unwrap();
        let mut inc = CompatibilityGraph::new(graph.num_vertices(), variant);
        for (k, &x) in order.iter().enumerate() {
            inc.append(graph, x);
            let prefix: VertexSet = order[..=k].iter().copied().collect();
            assert_eq!(
                inc.restricted_rows(prefix),
                batch.restricted_rows(prefix),
                "prefix {:?} of order {:?} for {:?} ({})",
                &order[..=k],
                order,
                graph,
                variant
            );
        }
        assert_eq!(inc.rows, batch.rows);
    }

    #[test]
    fn test_c4_identity_order_batch() {
        // 0-1-2-3-0. Triples: (0,1,3): 0~3, 1!~3 -> (0,1).
        // (0,2,3): 0~3, 2~3 -> nothing. (1,2,3): 1!~3 -> nothing.
        // (0,1,2): 0!~2 -> nothing.
        let g = generators::cycle(4).unwrap();
        let c = CompatibilityGraph::build(&g, &[0, 1, 2, 3], Variant::Thinness).unwrap();
        assert_eq!(c.num_edges(), 1);
        assert!(c.has_edge(0, 1));
        assert!(c.is_complete());
    }

    #[test]
    fn test_complete_graph_has_no_compatibility_edges() {
        let g = generators::complete(6).unwrap();
        let c = CompatibilityGraph::build(&g, &[5, 3, 1, 0, 2, 4], Variant::Thinness).unwrap();
        assert_eq!(c.num_edges(), 0);
    }

    #[test]
    fn test_build_rejects_bad_orders() {
        let g = generators::path(3).unwrap();
        assert_eq!(
            CompatibilityGraph::build(&g, &[0, 1, 0], Variant::Thinness),
            Err(ModelError::DuplicateVertex(0))
        );
        assert!(matches!(
            CompatibilityGraph::build(&g, &[0, 3], Variant::Thinness),
            Err(ModelError::VertexOutOfRange { vertex: 3, .. })
        ));
    }

    #[test]
    fn test_append_uses_unplaced_vertices_as_witnesses() {
        // Path 0-1-2 with prefix [1, 0]: vertex 2 is unplaced, adjacent to 1
        // and not to 0, so it witnesses the edge (1, 0).
        let g = generators::path(3).unwrap();
        let mut c = CompatibilityGraph::new(3, Variant::Thinness);
        assert_eq!(c.append(&g, 1), VertexSet::EMPTY);
        assert_eq!(c.append(&g, 0), VertexSet::singleton(1));
        assert!(c.has_edge(0, 1));
        assert_eq!(c.position(0), Some(1));
        assert_eq!(c.position(2), None);
    }

    #[test]
    fn test_pop_restores_previous_rows() {
        let g = generators::cycle(5).unwrap();
        let mut c = CompatibilityGraph::new(5, Variant::Thinness);
        c.append(&g, 2);
        c.append(&g, 0);
        let snapshot = c.clone();
        c.append(&g, 4);
        c.append(&g, 1);
        assert_eq!(c.pop(), Some(1));
        assert_eq!(c.pop(), Some(4));
        assert_eq!(c, snapshot);
        c.clear();
        assert!(c.is_empty());
        assert_eq!(c.pop(), None);
        assert_eq!(c.num_edges(), 0);
    }

    #[test]
    fn test_edges_if_appended_matches_append() {
        let g = generators::crown(3).unwrap();
        let mut c = CompatibilityGraph::new(6, Variant::Thinness);
        for x in [3, 0, 4] {
            let predicted = c.edges_if_appended(&g, x);
            assert_eq!(c.append(&g, x), predicted);
        }
    }

    #[test]
    fn test_proper_variant_adds_forward_edges() {
        // Path 0-1-2 with order [0, 2, 1]: triple (0, 2, 1) has 0~1 and 0!~2,
        // so the proper rule joins (2, 1).
        let g = generators::path(3).unwrap();
        let c = CompatibilityGraph::build(&g, &[0, 2, 1], Variant::ProperThinness).unwrap();
        assert!(c.has_edge(2, 1));
        let plain = CompatibilityGraph::build(&g, &[0, 2, 1], Variant::Thinness).unwrap();
        assert!(!plain.has_edge(2, 1));
    }

    #[test]
    fn test_incremental_matches_batch_exhaustively_up_to_six_vertices() {
        // Relabelling turns any (graph, order) pair into (graph', identity),
        // so the identity order over all labelled graphs covers every order.
        for n in 1..=6 {
            let pairs = n * (n - 1) / 2;
            for mask in 0..(1u64 << pairs) {
                let g = graph_from_mask(n, mask);
                let identity: Vec<usize> = (0..n).collect();
                let reversed: Vec<usize> = (0..n).rev().collect();
                for variant in [Variant::Thinness, Variant::ProperThinness] {
                    assert_prefixes_match_batch(&g, &identity, variant);
                    assert_prefixes_match_batch(&g, &reversed, variant);
                }
            }
        }
    }

    #[test]
    fn test_incremental_matches_batch_on_random_graphs_and_orders() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
        for (n, samples) in [(7, 500), (8, 60), (12, 20)] {
            for density in [0.2, 0.5, 0.8] {
                for _ in 0..samples {
                    let g = generators::random_gnp(n, density, &mut rng).unwrap();
                    let mut order: Vec<usize> = (0..n).collect();
                    order.shuffle(&mut rng);
                    assert_prefixes_match_batch(&g, &order, Variant::Thinness);
                    assert_prefixes_match_batch(&g, &order, Variant::ProperThinness);
                }
            }
        }
    }

    #[test]
    fn test_display() {
        let g = generators::cycle(4).unwrap();
        let c = CompatibilityGraph::build(&g, &[0, 1, 2, 3], Variant::Thinness).unwrap();
        assert_eq!(
            format!("{}", c),
            "CompatibilityGraph(variant: Thinness, placed: 4/4, edges: 1)"
        );
    }
}
