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

//! Greedy DSATUR coloring.
//!
//! Repeatedly colors the uncolored vertex with the most distinct neighbor
//! colors (ties: most uncolored neighbors, then smallest index) with the
//! first class that admits it. Fast, but not exact.

use crate::coloring::oracle::{Coloring, ColoringOracle};
use thinness_core::set::VertexSet;
use thinness_model::compatibility::CompatibilityGraph;

/// Colors the vertices of `vertices` greedily in DSATUR order.
///
/// `rows[v]` must be the neighborhood of `v` restricted to `vertices`.
pub(crate) fn dsatur_greedy(rows: &[VertexSet], vertices: VertexSet) -> Vec<VertexSet> {
    let mut classes: Vec<VertexSet> = Vec::new();
    let mut uncolored = vertices;

    while let Some(v) = select_vertex(rows, &classes, uncolored) {
        uncolored.remove(v);
        match classes.iter_mut().find(|c| !rows[v].intersects(**c)) {
            Some(class) => {
                class.insert(v);
            }
            None => classes.push(VertexSet::singleton(v)),
        }
    }
    classes
}

/// Returns the number of classes adjacent to `v`.
#[inline]
pub(crate) fn saturation(rows: &[VertexSet], classes: &[VertexSet], v: usize) -> usize {
    classes.iter().filter(|c| rows[v].intersects(**c)).count()
}

/// Picks the uncolored vertex with maximum saturation, then maximum
/// uncolored degree, then smallest index.
pub(crate) fn select_vertex(
    rows: &[VertexSet],
    classes: &[VertexSet],
    uncolored: VertexSet,
) -> Option<usize> {
    let mut best: Option<(usize, usize, usize)> = None;
    for v in uncolored {
        let key = (saturation(rows, classes, v), (rows[v] & uncolored).len());
        match best {
            Some((_, s, d)) if (key.0, key.1) <= (s, d) => {}
            _ => best = Some((v, key.0, key.1)),
        }
    }
    best.map(|(v, _, _)| v)
}

/// Heuristic coloring oracle.
///
/// The search can still use it, but without an exact oracle it cannot prove
/// optimality and reports an exhausted search instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyColoring;

impl GreedyColoring {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl ColoringOracle for GreedyColoring {
    fn name(&self) -> &str {
        "GreedyColoring"
    }

    fn is_exact(&self) -> bool {
        false
    }

    fn color(&mut self, graph: &CompatibilityGraph) -> Coloring {
        let placed = graph.placed();
        Coloring::new(dsatur_greedy(&graph.restricted_rows(placed), placed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thinness_model::compatibility::Variant;
    use thinness_model::generators;

    #[test]
    fn test_select_vertex_prefers_saturation_then_degree() {
        // Star with center 0 and leaves 1..=3, plus an isolated vertex 4.
        let rows: Vec<VertexSet> = vec![
            [1, 2, 3].into_iter().collect(),
            VertexSet::singleton(0),
            VertexSet::singleton(0),
            VertexSet::singleton(0),
            VertexSet::EMPTY,
        ];
        let all = VertexSet::full(5);
        assert_eq!(select_vertex(&rows, &[], all), Some(0));

        let classes = [VertexSet::singleton(0)];
        assert_eq!(select_vertex(&rows, &classes, all.without(0)), Some(1));
        assert_eq!(select_vertex(&rows, &classes, VertexSet::EMPTY), None);
    }

    #[test]
    fn test_greedy_coloring_is_proper() {
        for n in 3..9 {
            let g = generators::cycle(n).unwrap();
            let order: Vec<usize> = (0..n).rev().collect();
            for variant in [Variant::Thinness, Variant::ProperThinness] {
                let compat = CompatibilityGraph::build(&g, &order, variant).unwrap();
                let mut oracle = GreedyColoring::new();
                assert!(!oracle.is_exact());
                assert_eq!(oracle.color(&compat).validate(&compat), Ok(()));
            }
        }
    }

    #[test]
    fn test_odd_cycle_rows_need_three_colors() {
        let g = generators::cycle(5).unwrap();
        let rows = g.adjacency().to_vec();
        let classes = dsatur_greedy(&rows, g.vertices());
        assert_eq!(classes.len(), 3);
    }
}
