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

//! Mutable state of one search: the order prefix and what it implies.
//!
//! `SearchState` bundles the incremental compatibility graph of the current
//! prefix (which also owns the prefix itself), the set of vertices not yet
//! placed, and the lower bound certified along the current path. It is only
//! mutated through `SearchTrail`, which records enough to undo every change.

use thinness_core::set::VertexSet;
use thinness_model::compatibility::{CompatibilityGraph, Variant};

/// The order prefix of the current search node and its derived data.
///
/// Invariants (debug-checked):
/// - `remaining` and the placed vertices partition `0..num_vertices`,
/// - `lower_bound` never decreases along a path from the root.
#[derive(Debug, Clone)]
pub struct SearchState {
    compat: CompatibilityGraph,
    remaining: VertexSet,
    lower_bound: usize,
}

impl SearchState {
    /// Creates the root state: nothing placed, every vertex remaining.
    #[inline]
    pub fn new(num_vertices: usize, variant: Variant) -> Self {
        Self {
            compat: CompatibilityGraph::new(num_vertices, variant),
            remaining: VertexSet::full(num_vertices),
            lower_bound: 0,
        }
    }

    /// Returns the compatibility graph of the current prefix.
    #[inline]
    pub fn compatibility(&self) -> &CompatibilityGraph {
        &self.compat
    }

    #[inline]
    pub(crate) fn compatibility_mut(&mut self) -> &mut CompatibilityGraph {
        &mut self.compat
    }

    /// Returns the current order prefix.
    #[inline]
    pub fn prefix(&self) -> &[usize] {
        self.compat.order()
    }

    /// Returns the vertices not yet placed.
    #[inline]
    pub fn remaining(&self) -> VertexSet {
        self.remaining
    }

    #[inline]
    pub(crate) fn set_remaining(&mut self, remaining: VertexSet) {
        self.remaining = remaining;
    }

    /// Returns the number of vertices placed so far.
    #[inline]
    pub fn num_placed(&self) -> usize {
        self.compat.len()
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.compat.num_vertices()
    }

    /// Returns `true` if every vertex is placed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Returns the number of classes every completion of the prefix needs
    /// at least.
    #[inline]
    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    #[inline]
    pub(crate) fn set_lower_bound(&mut self, lower_bound: usize) {
        self.lower_bound = lower_bound;
    }

    /// Returns `true` if the placed and remaining vertices partition the
    /// vertex set.
    pub fn is_consistent(&self) -> bool {
        let placed = self.compat.placed();
        !placed.intersects(self.remaining)
            && (placed | self.remaining) == VertexSet::full(self.num_vertices())
    }

    /// Resets to the root state without releasing memory.
    #[inline]
    pub fn reset(&mut self) {
        self.compat.clear();
        self.remaining = VertexSet::full(self.num_vertices());
        self.lower_bound = 0;
    }
}

impl std::fmt::Display for SearchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchState(placed: {}/{}, lower_bound: {}, prefix: {:?})",
            self.num_placed(),
            self.num_vertices(),
            self.lower_bound,
            self.prefix()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_state() {
        let state = SearchState::new(5, Variant::Thinness);
        assert_eq!(state.num_placed(), 0);
        assert_eq!(state.remaining(), VertexSet::full(5));
        assert_eq!(state.lower_bound(), 0);
        assert!(!state.is_complete());
        assert!(state.is_consistent());
        assert_eq!(
            format!("{}", state),
            "SearchState(placed: 0/5, lower_bound: 0, prefix: [])"
        );
    }

    #[test]
    fn test_inconsistent_remaining_set_is_detected() {
        let mut state = SearchState::new(3, Variant::Thinness);
        state.set_remaining(VertexSet::full(2));
        assert!(!state.is_consistent());
        state.reset();
        assert!(state.is_consistent());
    }
}
