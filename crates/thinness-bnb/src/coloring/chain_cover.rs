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

//! Exact coloring of thinness compatibility graphs by minimum chain cover.
//!
//! For the plain consistency condition the complement of a compatibility
//! graph, oriented along the vertex order, is transitive: if `a` precedes `b`
//! and `b` precedes `c` without compatibility edges, then `a` and `c` are not
//! joined either. Color classes are therefore exactly the chains of that
//! partial order, and by Dilworth's theorem the chromatic number is
//! `placed - maximum matching` in the bipartite graph of non-edges `a -> b`.
//!
//! The matching is computed with augmenting paths on bitsets; buffers are
//! kept between calls.
//!
//! The proper condition breaks transitivity, so the oracle reports
//! `Variant::ProperThinness` as unsupported.

use crate::coloring::oracle::{Coloring, ColoringOracle};
use thinness_core::set::VertexSet;
use thinness_model::compatibility::{CompatibilityGraph, Variant};

/// Exact coloring oracle for `Variant::Thinness`.
#[derive(Debug, Clone, Default)]
pub struct ChainCoverColoring {
    /// Vertices each vertex may directly precede in a chain.
    successors: Vec<VertexSet>,
    /// Matched successor of each vertex.
    next: Vec<Option<usize>>,
    /// Matched predecessor of each vertex.
    prev: Vec<Option<usize>>,
}

impl ChainCoverColoring {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an oracle with buffers for `num_vertices` vertices.
    pub fn preallocated(num_vertices: usize) -> Self {
        Self {
            successors: Vec::with_capacity(num_vertices),
            next: Vec::with_capacity(num_vertices),
            prev: Vec::with_capacity(num_vertices),
        }
    }

    fn prepare(&mut self, graph: &CompatibilityGraph) {
        debug_assert_eq!(
            graph.variant(),
            Variant::Thinness,
            "called `ChainCoverColoring::prepare` with a proper compatibility graph"
        );
        let n = graph.num_vertices();
        self.successors.clear();
        self.successors.resize(n, VertexSet::EMPTY);
        self.next.clear();
        self.next.resize(n, None);
        self.prev.clear();
        self.prev.resize(n, None);

        let mut later = graph.placed();
        for &a in graph.order() {
            later.remove(a);
            self.successors[a] = later - graph.neighbors(a);
        }
    }

    fn augment(&mut self, a: usize, visited: &mut VertexSet) -> bool {
        let candidates = self.successors[a] - *visited;
        for b in candidates {
            visited.insert(b);
            let free = match self.prev[b] {
                None => true,
                Some(p) => self.augment(p, visited),
            };
            if free {
                self.prev[b] = Some(a);
                self.next[a] = Some(b);
                return true;
            }
        }
        false
    }

    /// Computes a maximum matching and returns its size.
    fn maximum_matching(&mut self, graph: &CompatibilityGraph) -> usize {
        self.prepare(graph);
        let mut matched = 0;
        for &a in graph.order() {
            let mut visited = VertexSet::EMPTY;
            if self.augment(a, &mut visited) {
                matched += 1;
            }
        }
        matched
    }
}

impl ColoringOracle for ChainCoverColoring {
    fn name(&self) -> &str {
        "ChainCoverColoring"
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn supports(&self, variant: Variant) -> bool {
        variant == Variant::Thinness
    }

    fn color(&mut self, graph: &CompatibilityGraph) -> Coloring {
        self.maximum_matching(graph);

        let mut classes = Vec::new();
        for &start in graph.order() {
            if self.prev[start].is_some() {
                continue;
            }
            let mut chain = VertexSet::singleton(start);
            let mut cursor = start;
            while let Some(b) = self.next[cursor] {
                chain.insert(b);
                cursor = b;
            }
            classes.push(chain);
        }
        Coloring::new(classes)
    }

    fn chromatic_number(&mut self, graph: &CompatibilityGraph, ceiling: usize) -> Option<usize> {
        let count = graph.len() - self.maximum_matching(graph);
        (count < ceiling).then_some(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::dsatur::DsaturColoring;
    use crate::coloring::oracle::checked_coloring;
    use crate::error::ThinnessError;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use thinness_model::generators;
    use thinness_model::graph::Graph;

    #[test]
    fn test_c4_identity_needs_two_colors() {
        let g = generators::cycle(4).unwrap();
        let compat = CompatibilityGraph::build(&g, &[0, 1, 2, 3], Variant::Thinness).unwrap();
        let mut oracle = ChainCoverColoring::new();
        let coloring = oracle.color(&compat);
        assert_eq!(coloring.num_colors(), 2);
        assert_eq!(coloring.validate(&compat), Ok(()));
        assert_eq!(oracle.chromatic_number(&compat, 3), Some(2));
        assert_eq!(oracle.chromatic_number(&compat, 2), None);
    }

    #[test]
    fn test_proper_graphs_are_refused() {
        let g = generators::cycle(4).unwrap();
        let compat =
            CompatibilityGraph::build(&g, &[0, 1, 2, 3], Variant::ProperThinness).unwrap();
        let mut oracle = ChainCoverColoring::new();
        assert!(oracle.supports(Variant::Thinness));
        assert!(!oracle.supports(Variant::ProperThinness));
        assert!(matches!(
            checked_coloring(&mut oracle, &compat),
            Err(ThinnessError::OracleFailure { ref oracle, .. }) if oracle == "ChainCoverColoring"
        ));
    }

    #[test]
    fn test_empty_prefix_has_no_colors() {
        let g = generators::path(3).unwrap();
        let compat = CompatibilityGraph::new(g.num_vertices(), Variant::Thinness);
        let mut oracle = ChainCoverColoring::new();
        assert_eq!(oracle.color(&compat).num_colors(), 0);
        assert_eq!(oracle.chromatic_number(&compat, 1), Some(0));
    }

    #[test]
    fn test_complete_graph_is_one_chain() {
        let g = generators::complete(6).unwrap();
        let compat =
            CompatibilityGraph::build(&g, &[3, 1, 4, 0, 5, 2], Variant::Thinness).unwrap();
        let coloring = ChainCoverColoring::new().color(&compat);
        assert_eq!(coloring.classes(), &[VertexSet::full(6)]);
    }

    #[test]
    fn test_matches_exact_dsatur_on_random_orders() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x7417);
        let mut chain = ChainCoverColoring::preallocated(10);
        let mut dsatur = DsaturColoring::new();
        for _ in 0..200 {
            let n = rng.random_range(1..=10);
            let g = generators::random_gnp(n, 0.5, &mut rng).unwrap();
            let mut order: Vec<usize> = (0..n).collect();
            order.shuffle(&mut rng);
            let len = rng.random_range(0..=n);

            let mut compat = CompatibilityGraph::new(n, Variant::Thinness);
            for &x in &order[..len] {
                compat.append(&g, x);
            }

            let coloring = chain.color(&compat);
            assert_eq!(coloring.validate(&compat), Ok(()), "{}", compat);
            assert_eq!(
                coloring.num_colors(),
                dsatur.color(&compat).num_colors(),
                "order {:?}",
                &order[..len]
            );
        }
    }

    #[test]
    fn test_buffers_are_reset_between_calls() {
        let mut oracle = ChainCoverColoring::new();
        let big = generators::crown(4).unwrap();
        let order: Vec<usize> = (0..8).collect();
        let compat = CompatibilityGraph::build(&big, &order, Variant::Thinness).unwrap();
        let first = oracle.color(&compat).num_colors();

        let small = Graph::new(2).unwrap();
        let compat_small = CompatibilityGraph::build(&small, &[1, 0], Variant::Thinness).unwrap();
        assert_eq!(oracle.color(&compat_small).num_colors(), 1);
        assert_eq!(oracle.color(&compat).num_colors(), first);
    }
}
