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

//! Pending branching candidates, grouped by search depth.

/// A vertex waiting to be appended to the order at some depth.
///
/// `new_edges` is the number of compatibility edges the vertex would add at
/// the time it was enqueued; it only drives the exploration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    vertex: usize,
    new_edges: usize,
}

impl Candidate {
    #[inline(always)]
    pub fn new(vertex: usize, new_edges: usize) -> Self {
        Self { vertex, new_edges }
    }

    #[inline]
    pub fn vertex(&self) -> usize {
        self.vertex
    }

    #[inline]
    pub fn new_edges(&self) -> usize {
        self.new_edges
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Candidate(vertex: {}, new_edges: {})",
            self.vertex, self.new_edges
        )
    }
}

/// A frame-structured LIFO stack of pending candidates.
///
/// `SearchStack` stores all enqueued candidates linearly and uses a `frames`
/// index stack to mark depth boundaries. Popping a frame truncates the
/// entries back to the recorded start index, which discards every candidate
/// of that depth that was not explored.
#[derive(Clone, Debug, Default)]
pub struct SearchStack {
    /// The linear stack of pending candidates.
    entries: Vec<Candidate>,
    /// `frames[i]` stores the index in `entries` where depth `i` began.
    frames: Vec<usize>,
}

impl SearchStack {
    /// Creates a new, empty `SearchStack`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stack sized for a graph with `num_vertices` vertices.
    #[inline]
    pub fn preallocated(num_vertices: usize) -> Self {
        Self {
            entries: Vec::with_capacity(Self::entry_capacity(num_vertices)),
            frames: Vec::with_capacity(num_vertices + 1),
        }
    }

    /// At most `n - d` candidates are pending at depth `d`.
    #[inline(always)]
    fn entry_capacity(num_vertices: usize) -> usize {
        num_vertices * (num_vertices + 1) / 2
    }

    /// Ensures the stack does not reallocate during a search on
    /// `num_vertices` vertices.
    #[inline]
    pub fn ensure_capacity(&mut self, num_vertices: usize) {
        let entry_capacity = Self::entry_capacity(num_vertices);
        if self.entries.capacity() < entry_capacity {
            self.entries
                .reserve(entry_capacity - self.entries.len());
        }
        if self.frames.capacity() < num_vertices + 1 {
            self.frames.reserve(num_vertices + 1 - self.frames.len());
        }
    }

    /// Returns the number of pending candidates over all depths.
    #[inline]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Returns the current search depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if there are no frames tracked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Marks the start of a new depth.
    #[inline]
    pub fn push_frame(&mut self) {
        self.frames.push(self.entries.len());
    }

    /// Pops the current depth and drops its remaining candidates.
    #[inline]
    pub fn pop_frame(&mut self) -> Option<()> {
        let start = self.frames.pop()?;
        self.entries.truncate(start);
        Some(())
    }

    #[inline]
    pub fn push(&mut self, candidate: Candidate) {
        self.entries.push(candidate);
    }

    #[inline]
    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Candidate>,
    {
        self.entries.extend(iter);
    }

    /// Pops the next candidate (LIFO).
    #[inline]
    pub fn pop(&mut self) -> Option<Candidate> {
        if self.is_current_level_empty() {
            return None;
        }
        self.entries.pop()
    }

    /// Clears all entries and frames, but keeps allocated capacity.
    #[inline]
    pub fn reset(&mut self) {
        self.entries.clear();
        self.frames.clear();
    }

    /// Returns `true` if the current depth has no remaining candidates.
    #[inline]
    pub fn is_current_level_empty(&self) -> bool {
        match self.frames.last() {
            Some(&start) => self.entries.len() == start,
            None => true,
        }
    }

    /// Returns the candidates still pending at the current depth, the next
    /// one to be popped last.
    #[inline]
    pub fn current_frame_entries(&self) -> &[Candidate] {
        match self.frames.last() {
            Some(&start) => &self.entries[start..],
            None => &[],
        }
    }

    /// Returns the total allocated memory in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.entries.capacity() * std::mem::size_of::<Candidate>()
            + self.frames.capacity() * std::mem::size_of::<usize>()
    }
}

impl std::fmt::Display for SearchStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchStack(entries: {}, frames: {})",
            self.entries.len(),
            self.frames.len()
        )
    }
}
