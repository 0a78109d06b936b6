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

//! The vertex-separation oracle interface.
//!
//! A layout is a permutation of the vertices. Its separation cost is the
//! largest number of vertices, over all cut points, that sit left of the cut
//! and still have a neighbor right of it. The seed turns any layout of cost
//! `c` into a consistent solution with at most `c + 1` classes, so a better
//! oracle only makes the starting bound tighter.

use crate::error::{Result, ThinnessError};
use thinness_core::set::VertexSet;
use thinness_model::graph::Graph;

/// A validated layout together with its separation cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    order: Vec<usize>,
    cost: usize,
}

impl Layout {
    /// Returns the vertex order of the layout.
    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the separation cost of the layout.
    #[inline]
    pub fn cost(&self) -> usize {
        self.cost
    }

    #[inline]
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Layout(cost: {}, order: {:?})", self.cost, self.order)
    }
}

/// Produces linear layouts with small separation cost.
pub trait SeparationOracle {
    /// Returns the name of the oracle.
    fn name(&self) -> &str;

    /// Returns a permutation of the vertices of `graph`.
    fn layout(&mut self, graph: &Graph) -> Vec<usize>;
}

impl std::fmt::Debug for dyn SeparationOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeparationOracle({})", self.name())
    }
}

impl std::fmt::Display for dyn SeparationOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeparationOracle({})", self.name())
    }
}

/// Returns the number of vertices of `prefix` with a neighbor outside it.
#[inline]
pub fn frontier_size(graph: &Graph, prefix: VertexSet) -> usize {
    prefix
        .iter()
        .filter(|&v| !graph.neighbors(v).is_subset(prefix))
        .count()
}

/// Returns the separation cost of `layout`.
///
/// # Panics
///
/// In debug builds, panics if `layout` mentions a vertex outside `graph`.
pub fn separation_cost(graph: &Graph, layout: &[usize]) -> usize {
    debug_assert!(
        layout.iter().all(|&v| v < graph.num_vertices()),
        "called `separation_cost` with a layout that leaves the vertex range 0..{}",
        graph.num_vertices()
    );

    let mut prefix = VertexSet::EMPTY;
    let mut cost = 0;
    for &v in layout {
        prefix.insert(v);
        cost = cost.max(frontier_size(graph, prefix));
    }
    cost
}

/// Checks that `order` is a permutation of the vertices of `graph`.
fn validate_layout(graph: &Graph, order: &[usize]) -> std::result::Result<(), String> {
    let n = graph.num_vertices();
    if order.len() != n {
        return Err(format!(
            "layout has {} entries, expected {}",
            order.len(),
            n
        ));
    }
    let mut seen = VertexSet::EMPTY;
    for &v in order {
        if v >= n {
            return Err(format!("layout mentions vertex {} outside 0..{}", v, n));
        }
        if !seen.insert(v) {
            return Err(format!("layout mentions vertex {} twice", v));
        }
    }
    Ok(())
}

/// Asks `oracle` for a layout of `graph`, validates it and computes its cost.
///
/// # Errors
///
/// Returns `ThinnessError::OracleFailure` if the layout is not a permutation
/// of the vertex set.
pub fn checked_layout<S>(oracle: &mut S, graph: &Graph) -> Result<Layout>
where
    S: SeparationOracle + ?Sized,
{
    let order = oracle.layout(graph);
    validate_layout(graph, &order)
        .map_err(|reason| ThinnessError::oracle_failure(oracle.name(), reason))?;
    let cost = separation_cost(graph, &order);
    Ok(Layout { order, cost })
}
