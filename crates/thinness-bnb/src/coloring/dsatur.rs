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

//! Exact coloring by DSATUR branch and bound.
//!
//! Works for every compatibility graph, including the proper variant where
//! the chain cover does not apply. A greedy clique gives the lower bound and
//! the greedy DSATUR coloring the first upper bound; the search then branches
//! on the most saturated vertex, trying each existing class and one new
//! class, and stops as soon as the clique bound is met.

use crate::coloring::greedy::{dsatur_greedy, select_vertex};
use crate::coloring::oracle::{Coloring, ColoringOracle};
use thinness_core::set::VertexSet;
use thinness_model::compatibility::CompatibilityGraph;

/// Exact coloring oracle for both variants.
#[derive(Debug, Clone, Default)]
pub struct DsaturColoring {
    rows: Vec<VertexSet>,
    classes: Vec<VertexSet>,
    best: Vec<VertexSet>,
    /// Colorings must use fewer than `bound` classes to be recorded.
    bound: usize,
    lower: usize,
}

impl DsaturColoring {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Greedy clique: repeatedly takes the candidate with the most candidate
    /// neighbors.
    fn greedy_clique(&self, vertices: VertexSet) -> usize {
        let mut candidates = vertices;
        let mut size = 0;
        while !candidates.is_empty() {
            let mut pick = None;
            let mut pick_degree = 0;
            for v in candidates {
                let d = (self.rows[v] & candidates).len();
                if pick.is_none() || d > pick_degree {
                    pick = Some(v);
                    pick_degree = d;
                }
            }
            let Some(v) = pick else { break };
            size += 1;
            candidates &= self.rows[v];
        }
        size
    }

    /// Runs the exact search on `graph`. Returns `true` if a coloring with
    /// fewer than `ceiling` classes was found; it is then left in `best`.
    fn solve(&mut self, graph: &CompatibilityGraph, ceiling: usize) -> bool {
        let vertices = graph.placed();
        self.rows = graph.restricted_rows(vertices);
        self.lower = self.greedy_clique(vertices);
        self.classes.clear();
        self.best.clear();

        if self.lower >= ceiling {
            return false;
        }

        let greedy = dsatur_greedy(&self.rows, vertices);
        let found = greedy.len() < ceiling;
        if found {
            self.bound = greedy.len();
            self.best = greedy;
        } else {
            self.bound = ceiling;
        }

        if self.bound > self.lower {
            let found_better = self.search(vertices);
            return found || found_better;
        }
        found
    }

    fn search(&mut self, uncolored: VertexSet) -> bool {
        if self.classes.len() >= self.bound {
            return false;
        }
        let Some(v) = select_vertex(&self.rows, &self.classes, uncolored) else {
            self.bound = self.classes.len();
            self.best.clone_from(&self.classes);
            return true;
        };
        let rest = uncolored.without(v);
        let mut improved = false;

        for c in 0..self.classes.len() {
            if self.rows[v].intersects(self.classes[c]) {
                continue;
            }
            self.classes[c].insert(v);
            improved |= self.search(rest);
            self.classes[c].remove(v);
            if self.bound <= self.lower {
                return improved;
            }
        }

        if self.classes.len() + 1 < self.bound {
            self.classes.push(VertexSet::singleton(v));
            improved |= self.search(rest);
            self.classes.pop();
        }
        improved
    }
}

impl ColoringOracle for DsaturColoring {
    fn name(&self) -> &str {
        "DsaturColoring"
    }

    fn is_exact(&self) -> bool {
        true
    }

    fn color(&mut self, graph: &CompatibilityGraph) -> Coloring {
        self.solve(graph, usize::MAX);
        Coloring::new(std::mem::take(&mut self.best))
    }

    fn chromatic_number(&mut self, graph: &CompatibilityGraph, ceiling: usize) -> Option<usize> {
        self.solve(graph, ceiling).then(|| self.best.len())
    }
}
