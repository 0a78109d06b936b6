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

//! Undo log for the search state.
//!
//! Every append of a vertex to the order prefix is recorded together with the
//! lower bound before it. Frames mark depth boundaries; backtracking a frame
//! undoes its entries in reverse and restores the state exactly.

use crate::state::SearchState;
use thinness_core::set::VertexSet;
use thinness_model::graph::Graph;

/// A record of one vertex appended to the prefix. The compatibility edges
/// it introduced are undone by `CompatibilityGraph::pop`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct TrailEntry {
    vertex: usize,
    previous_lower_bound: usize,
}

/// A frame marker: all entries from `entry_start_index` on belong to it.
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct FrameEntry {
    entry_start_index: usize,
}

/// A linear undo log with frame markers for backtracking.
///
/// Typical usage:
/// 1. `push_frame()` before descending into a child,
/// 2. `apply_append(...)` to extend the prefix,
/// 3. `backtrack(state)` to restore the state at the start of the frame.
///
/// Backtracking is unconditional: it runs on exhaustion, on pruning and on
/// abort alike, so the state is always restored.
#[derive(Debug, Clone, Default)]
pub struct SearchTrail {
    entries: Vec<TrailEntry>,
    frames: Vec<FrameEntry>,
}

impl SearchTrail {
    /// Creates a trail sized for a graph with `num_vertices` vertices.
    #[inline]
    pub fn preallocated(num_vertices: usize) -> Self {
        Self {
            entries: Vec::with_capacity(num_vertices),
            frames: Vec::with_capacity(num_vertices + 1),
        }
    }

    /// Ensures the trail does not reallocate during a search on
    /// `num_vertices` vertices.
    pub fn ensure_capacity(&mut self, num_vertices: usize) {
        if self.entries.capacity() < num_vertices {
            self.entries.reserve(num_vertices - self.entries.len());
        }
        if self.frames.capacity() < num_vertices + 1 {
            self.frames.reserve(num_vertices + 1 - self.frames.len());
        }
    }

    /// Returns `true` if no frame is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Marks the start of a new depth.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(FrameEntry {
            entry_start_index: self.entries.len(),
        });
    }

    /// Appends `vertex` to the prefix, raises the lower bound to
    /// `lower_bound` and records how to undo both. Returns the placed
    /// vertices `vertex` was joined to.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `vertex` is already placed or
    /// `lower_bound` is below the current bound.
    pub fn apply_append(
        &mut self,
        state: &mut SearchState,
        graph: &Graph,
        vertex: usize,
        lower_bound: usize,
    ) -> VertexSet {
        debug_assert!(
            state.remaining().contains(vertex),
            "called `SearchTrail::apply_append` with vertex {} which is already placed",
            vertex
        );
        debug_assert!(
            lower_bound >= state.lower_bound(),
            "called `SearchTrail::apply_append` with a decreasing lower bound: {} < {}",
            lower_bound,
            state.lower_bound()
        );

        let previous_lower_bound = state.lower_bound();
        let joined = state.compatibility_mut().append(graph, vertex);
        state.set_remaining(state.remaining().without(vertex));
        state.set_lower_bound(lower_bound);

        self.entries.push(TrailEntry {
            vertex,
            previous_lower_bound,
        });
        joined
    }

    /// Pops the current frame and undoes every entry recorded in it.
    pub fn backtrack(&mut self, state: &mut SearchState) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        while self.entries.len() > frame.entry_start_index {
            let Some(entry) = self.entries.pop() else {
                break;
            };
            self.undo_entry(state, entry);
        }
    }

    /// Undoes every entry across all frames.
    pub fn clear(&mut self, state: &mut SearchState) {
        while let Some(entry) = self.entries.pop() {
            self.undo_entry(state, entry);
        }
        self.frames.clear();
    }

    /// Resets the trail markers without undoing any state changes.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }

    #[inline]
    fn undo_entry(&self, state: &mut SearchState, entry: TrailEntry) {
        let popped = state.compatibility_mut().pop();
        debug_assert_eq!(
            popped,
            Some(entry.vertex),
            "called `SearchTrail::undo_entry` out of order: the prefix ends in {:?} but the entry is for {}",
            popped,
            entry.vertex
        );
        state.set_remaining(state.remaining().with(entry.vertex));
        state.set_lower_bound(entry.previous_lower_bound);
    }

    /// Returns the total allocated memory in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.entries.capacity() * std::mem::size_of::<TrailEntry>()
            + self.frames.capacity() * std::mem::size_of::<FrameEntry>()
    }
}

impl std::fmt::Display for SearchTrail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchTrail(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}
