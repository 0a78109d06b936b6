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

//! Greedy layouts: place the vertex that keeps the frontier smallest.

use crate::separation::oracle::{frontier_size, SeparationOracle};
use thinness_core::set::VertexSet;
use thinness_model::graph::Graph;

/// Builds a layout one vertex at a time, always appending the unplaced vertex
/// that minimizes the frontier of the new prefix. Ties go to the vertex with
/// fewer unplaced neighbors, then to the smaller index.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySeparation;

impl GreedySeparation {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl SeparationOracle for GreedySeparation {
    fn name(&self) -> &str {
        "GreedySeparation"
    }

    fn layout(&mut self, graph: &Graph) -> Vec<usize> {
        let mut order = Vec::with_capacity(graph.num_vertices());
        let mut placed = VertexSet::EMPTY;
        let mut unplaced = graph.vertices();

        while !unplaced.is_empty() {
            let mut best: Option<(usize, (usize, usize))> = None;
            for v in unplaced {
                let key = (
                    frontier_size(graph, placed.with(v)),
                    (graph.neighbors(v) & unplaced).len(),
                );
                match best {
                    Some((_, k)) if k <= key => {}
                    _ => best = Some((v, key)),
                }
            }
            let Some((v, _)) = best else { break };
            order.push(v);
            placed.insert(v);
            unplaced.remove(v);
        }
        order
    }
}
