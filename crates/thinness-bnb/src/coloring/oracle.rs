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

//! The coloring oracle interface.
//!
//! The search asks a `ColoringOracle` two questions about the compatibility
//! graph of the current prefix: how many classes it needs (the bound used for
//! pruning) and, at a leaf, which classes to use (the partition of the new
//! solution). Colorings only cover placed vertices.

use crate::error::{Result, ThinnessError};
use thinness_core::set::VertexSet;
use thinness_model::compatibility::{CompatibilityGraph, Variant};
use thinness_model::error::ModelError;
use thinness_model::solution::ConsistentSolution;
use thiserror::Error;

/// The first defect found in a coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColoringDefect {
    #[error("class {class} is empty")]
    EmptyClass { class: usize },

    #[error("class {class} overlaps an earlier class")]
    OverlappingClass { class: usize },

    #[error("class {class} contains vertex {vertex} and one of its compatibility neighbors")]
    CompatibleMembers { class: usize, vertex: usize },

    #[error("classes cover {covered} but the placed vertices are {placed}")]
    CoverMismatch { covered: VertexSet, placed: VertexSet },
}

/// A partition of the placed vertices into color classes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coloring {
    classes: Vec<VertexSet>,
}

impl Coloring {
    #[inline]
    pub fn new(classes: Vec<VertexSet>) -> Self {
        Self { classes }
    }

    #[inline]
    pub fn classes(&self) -> &[VertexSet] {
        &self.classes
    }

    #[inline]
    pub fn num_colors(&self) -> usize {
        self.classes.len()
    }

    /// Checks that the classes partition the placed vertices and that no class
    /// contains a compatibility edge.
    pub fn validate(&self, graph: &CompatibilityGraph) -> std::result::Result<(), ColoringDefect> {
        let mut covered = VertexSet::EMPTY;
        for (class, &members) in self.classes.iter().enumerate() {
            if members.is_empty() {
                return Err(ColoringDefect::EmptyClass { class });
            }
            if covered.intersects(members) {
                return Err(ColoringDefect::OverlappingClass { class });
            }
            covered |= members;
            if let Some(vertex) = members
                .iter()
                .find(|&v| graph.neighbors(v).intersects(members))
            {
                return Err(ColoringDefect::CompatibleMembers { class, vertex });
            }
        }
        if covered != graph.placed() {
            return Err(ColoringDefect::CoverMismatch {
                covered,
                placed: graph.placed(),
            });
        }
        Ok(())
    }

    /// Turns the coloring of a complete compatibility graph into a solution.
    /// Classes are renumbered by first appearance along the order.
    pub fn into_solution(
        self,
        graph: &CompatibilityGraph,
    ) -> std::result::Result<ConsistentSolution, ModelError> {
        let mut labels = vec![usize::MAX; graph.num_vertices()];
        for (c, class) in self.classes.iter().enumerate() {
            for v in *class {
                labels[v] = c;
            }
        }
        ConsistentSolution::from_class_labels(graph.order().to_vec(), &labels)
    }
}

impl std::fmt::Display for Coloring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coloring(colors: {})", self.classes.len())
    }
}

/// Colors compatibility graphs.
pub trait ColoringOracle {
    /// Returns the name of the oracle.
    fn name(&self) -> &str;

    /// Returns `true` if `color` always uses the minimum number of colors.
    /// Only exact oracles let the search certify optimality.
    fn is_exact(&self) -> bool;

    /// Returns `true` if the oracle can color compatibility graphs of
    /// `variant`.
    fn supports(&self, _variant: Variant) -> bool {
        true
    }

    /// Colors the placed vertices of `graph`.
    fn color(&mut self, graph: &CompatibilityGraph) -> Coloring;

    /// Returns the number of colors `color` would use, if it is below
    /// `ceiling`. Implementations may stop early once `ceiling` is reached.
    fn chromatic_number(&mut self, graph: &CompatibilityGraph, ceiling: usize) -> Option<usize> {
        let count = self.color(graph).num_colors();
        (count < ceiling).then_some(count)
    }
}

impl std::fmt::Debug for dyn ColoringOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColoringOracle({})", self.name())
    }
}

impl std::fmt::Display for dyn ColoringOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColoringOracle({})", self.name())
    }
}

/// Colors `graph` with `oracle` and rejects colorings that break the
/// oracle contract.
pub fn checked_coloring<C>(oracle: &mut C, graph: &CompatibilityGraph) -> Result<Coloring>
where
    C: ColoringOracle + ?Sized,
{
    ensure_supported(oracle, graph.variant())?;
    let coloring = oracle.color(graph);
    coloring
        .validate(graph)
        .map_err(|defect| ThinnessError::oracle_failure(oracle.name(), defect.to_string()))?;
    Ok(coloring)
}

/// Fails with `OracleFailure` if `oracle` cannot color graphs of `variant`.
pub fn ensure_supported<C>(oracle: &C, variant: Variant) -> Result<()>
where
    C: ColoringOracle + ?Sized,
{
    if oracle.supports(variant) {
        Ok(())
    } else {
        Err(ThinnessError::oracle_failure(
            oracle.name(),
            format!("cannot color {} compatibility graphs", variant),
        ))
    }
}
