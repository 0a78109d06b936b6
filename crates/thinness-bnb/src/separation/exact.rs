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

//! Optimal layouts by dynamic programming over vertex subsets.
//!
//! `best[S]` is the smallest cost of a layout that places exactly the set
//! `S` first. It satisfies `best[S] = max(frontier(S), min over v in S of
//! best[S - v])`, and the optimal layout is recovered by walking back from the
//! full set. Time is `O(2^n * n)` and memory one byte per subset, which limits
//! the oracle to small graphs.

use crate::separation::greedy::GreedySeparation;
use crate::separation::oracle::{frontier_size, SeparationOracle};
use thinness_core::set::VertexSet;
use thinness_model::graph::Graph;

/// The largest graph the exact oracle accepts. Larger graphs fall back to
/// the greedy layout.
pub const EXACT_SEPARATION_LIMIT: usize = 20;

/// Optimal vertex-separation oracle for graphs with at most
/// `EXACT_SEPARATION_LIMIT` vertices.
#[derive(Debug, Clone, Default)]
pub struct ExactSeparation {
    best: Vec<u8>,
}

impl ExactSeparation {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    fn fill_table(&mut self, graph: &Graph) {
        let n = graph.num_vertices();
        let subsets = 1usize << n;
        self.best.clear();
        self.best.resize(subsets, 0);

        for mask in 1..subsets {
            let set = VertexSet::from_bits(mask as u64);
            let mut inner = u8::MAX;
            for v in set {
                inner = inner.min(self.best[mask & !(1 << v)]);
            }
            let frontier = frontier_size(graph, set) as u8;
            self.best[mask] = inner.max(frontier);
        }
    }

    fn recover(&self, graph: &Graph) -> Vec<usize> {
        let n = graph.num_vertices();
        let mut order = Vec::with_capacity(n);
        let mut mask = (1usize << n) - 1;
        while mask != 0 {
            let set = VertexSet::from_bits(mask as u64);
            let target = self.best[mask];
            let frontier = frontier_size(graph, set) as u8;
            let Some(last) = set
                .iter()
                .find(|&v| self.best[mask & !(1 << v)].max(frontier) == target)
            else {
                break;
            };
            order.push(last);
            mask &= !(1 << last);
        }
        order.reverse();
        order
    }
}

impl SeparationOracle for ExactSeparation {
    fn name(&self) -> &str {
        "ExactSeparation"
    }

    fn layout(&mut self, graph: &Graph) -> Vec<usize> {
        if graph.num_vertices() > EXACT_SEPARATION_LIMIT {
            return GreedySeparation::new().layout(graph);
        }
        if graph.num_vertices() == 0 {
            return Vec::new();
        }
        self.fill_table(graph);
        self.recover(graph)
    }
}
