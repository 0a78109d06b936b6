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

//! Initial solutions from vertex-separation layouts.
//!
//! The layout is walked left to right. A vertex stays *active* until its last
//! neighbor in the layout has been reached. Each vertex is handled once:
//!
//! - an active vertex goes to the tail of the order and takes the smallest
//!   class not used by any active vertex,
//! - a vertex whose neighbors all came earlier goes immediately before its
//!   last neighbor and joins that neighbor's class,
//! - a vertex without neighbors goes to the head, in class 0.
//!
//! At most `cost + 1` vertices are active at once, so at most `cost + 1`
//! classes are used. The session still verifies the result before relying on
//! it.

use crate::error::Result;
use crate::separation::oracle::{checked_layout, Layout, SeparationOracle};
use fixedbitset::FixedBitSet;
use thinness_core::mex::mex;
use thinness_model::error::ModelError;
use thinness_model::graph::Graph;
use thinness_model::solution::ConsistentSolution;

/// A seed solution together with the layout it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSolution {
    solution: ConsistentSolution,
    layout: Layout,
}

impl SeedSolution {
    #[inline]
    pub fn solution(&self) -> &ConsistentSolution {
        &self.solution
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the separation cost of the underlying layout.
    #[inline]
    pub fn separation_cost(&self) -> usize {
        self.layout.cost()
    }

    #[inline]
    pub fn into_solution(self) -> ConsistentSolution {
        self.solution
    }
}

impl std::fmt::Display for SeedSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SeedSolution(thinness: {}, separation_cost: {})",
            self.solution.thinness(),
            self.layout.cost()
        )
    }
}

fn check_permutation(graph: &Graph, layout: &[usize]) -> std::result::Result<(), ModelError> {
    let n = graph.num_vertices();
    if layout.len() != n {
        return Err(ModelError::IncompleteOrder {
            expected: n,
            actual: layout.len(),
        });
    }
    let mut seen = FixedBitSet::with_capacity(n);
    for &v in layout {
        if v >= n {
            return Err(ModelError::VertexOutOfRange {
                vertex: v,
                num_vertices: n,
            });
        }
        if seen.put(v) {
            return Err(ModelError::DuplicateVertex(v));
        }
    }
    Ok(())
}

/// Builds a consistent solution from `layout`.
///
/// # Errors
///
/// Fails if `layout` is not a permutation of the vertices of `graph`.
pub fn solution_from_layout(graph: &Graph, layout: &[usize]) -> Result<ConsistentSolution> {
    check_permutation(graph, layout)?;
    let n = graph.num_vertices();

    let mut position = vec![0usize; n];
    for (i, &v) in layout.iter().enumerate() {
        position[v] = i;
    }

    // Vertices whose last neighbor sits at each layout position.
    let mut last_neighbor: Vec<Option<usize>> = vec![None; n];
    let mut expiring: Vec<Vec<usize>> = vec![Vec::new(); n];
    for v in 0..n {
        let last = graph.neighbors(v).iter().map(|w| position[w]).max();
        last_neighbor[v] = last;
        if let Some(p) = last {
            expiring[p].push(v);
        }
    }

    let mut active = FixedBitSet::with_capacity(n);
    let mut class = vec![0usize; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);

    for (i, &x) in layout.iter().enumerate() {
        for &v in &expiring[i] {
            active.set(v, false);
        }

        match last_neighbor[x] {
            Some(p) if p > i => {
                class[x] = mex(active.ones().map(|v| class[v]));
                order.push(x);
                active.insert(x);
            }
            Some(p) => {
                let anchor = layout[p];
                class[x] = class[anchor];
                let at = order.iter().position(|&v| v == anchor).unwrap_or(0);
                order.insert(at, x);
            }
            None => {
                class[x] = 0;
                order.insert(0, x);
            }
        }
    }

    Ok(ConsistentSolution::from_class_labels(order, &class)?)
}

/// Computes a layout with `oracle` and turns it into a seed solution.
///
/// # Errors
///
/// Fails if the oracle returns a malformed layout.
pub fn seed_solution<S>(graph: &Graph, oracle: &mut S) -> Result<SeedSolution>
where
    S: SeparationOracle + ?Sized,
{
    let layout = checked_layout(oracle, graph)?;
    let solution = solution_from_layout(graph, layout.order())?;
    Ok(SeedSolution { solution, layout })
}
