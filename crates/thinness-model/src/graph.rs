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

//! Simple undirected graphs over at most 64 vertices.
//!
//! `Graph` stores one `VertexSet` adjacency row per vertex. The representation
//! is symmetric and irreflexive at all times; every mutating operation keeps
//! both rows of an edge in sync. Vertices are the integers `0..n`.
//!
//! Derived graphs (`induced_subgraph`, `remove_vertex`) relabel their
//! vertices densely in ascending order of the original labels and hand back
//! the mapping from new to old labels where the caller needs it.

use crate::error::{ModelError, Result};
use thinness_core::set::{VertexSet, MAX_VERTICES};

/// An undirected, loop-free graph on the vertices `0..num_vertices`.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Graph {
    adjacency: Vec<VertexSet>,
}

impl Graph {
    /// Creates an edgeless graph with `num_vertices` vertices.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::TooManyVertices` if `num_vertices > 64`.
    pub fn new(num_vertices: usize) -> Result<Self> {
        if num_vertices > MAX_VERTICES {
            return Err(ModelError::TooManyVertices {
                count: num_vertices,
                max: MAX_VERTICES,
            });
        }
        Ok(Self {
            adjacency: vec![VertexSet::EMPTY; num_vertices],
        })
    }

    /// Creates a graph from an edge list.
    pub fn from_edges<I>(num_vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(num_vertices)?;
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Creates a graph from raw adjacency bitmasks, one row per vertex.
    ///
    /// # Errors
    ///
    /// Fails if a row references a vertex outside `0..rows.len()`, if a row
    /// contains its own vertex, or if the rows are not symmetric.
    pub fn from_adjacency_rows(rows: &[u64]) -> Result<Self> {
        let n = rows.len();
        let mut graph = Self::new(n)?;
        let all = VertexSet::full(n);

        for (u, &row) in rows.iter().enumerate() {
            let row = VertexSet::from_bits(row);
            if let Some(stray) = (row - all).first() {
                return Err(ModelError::VertexOutOfRange {
                    vertex: stray,
                    num_vertices: n,
                });
            }
            if row.contains(u) {
                return Err(ModelError::SelfLoop(u));
            }
            graph.adjacency[u] = row;
        }

        for u in 0..n {
            for v in graph.adjacency[u] {
                if !graph.adjacency[v].contains(u) {
                    return Err(ModelError::Asymmetric { u, v });
                }
            }
        }

        Ok(graph)
    }

    #[inline]
    fn check_vertex(&self, v: usize) -> Result<()> {
        if v >= self.adjacency.len() {
            return Err(ModelError::VertexOutOfRange {
                vertex: v,
                num_vertices: self.adjacency.len(),
            });
        }
        Ok(())
    }

    /// Adds the edge `{u, v}`. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(ModelError::SelfLoop(u));
        }
        self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        Ok(())
    }

    /// Removes the edge `{u, v}` if present.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].remove(v);
        self.adjacency[v].remove(u);
        Ok(())
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(|row| row.len()).sum::<usize>() / 2
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the full vertex set `{0, ..., n - 1}`.
    #[inline]
    pub fn vertices(&self) -> VertexSet {
        VertexSet::full(self.adjacency.len())
    }

    /// Returns `true` if `u` and `v` are adjacent.
    ///
    /// # Panics
    ///
    /// Panics if `u` is out of range.
    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        debug_assert!(
            u < self.num_vertices() && v < self.num_vertices(),
            "called `Graph::has_edge` with vertices ({}, {}) but the graph has {} vertices",
            u,
            v,
            self.num_vertices()
        );
        self.adjacency[u].contains(v)
    }

    /// Returns the open neighborhood of `v`.
    #[inline]
    pub fn neighbors(&self, v: usize) -> VertexSet {
        self.adjacency[v]
    }

    /// Returns the closed neighborhood `N(v) ∪ {v}`.
    #[inline]
    pub fn closed_neighborhood(&self, v: usize) -> VertexSet {
        self.adjacency[v].with(v)
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Returns the adjacency rows as a slice indexed by vertex.
    #[inline]
    pub fn adjacency(&self) -> &[VertexSet] {
        &self.adjacency
    }

    /// Iterates the edges as pairs `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, row)| {
            row.iter()
                .filter(move |&v| v > u)
                .map(move |v| (u, v))
        })
    }

    /// Returns `true` if every pair of distinct vertices is adjacent.
    pub fn is_complete(&self) -> bool {
        let n = self.num_vertices();
        self.adjacency
            .iter()
            .enumerate()
            .all(|(v, row)| row.len() + 1 == n && !row.contains(v))
    }

    /// Returns the subgraph induced by `vertices`, relabelled densely.
    ///
    /// The second component maps each new label to its original vertex.
    pub fn induced_subgraph(&self, vertices: VertexSet) -> (Graph, Vec<usize>) {
        let vertices = vertices & self.vertices();
        let mapping: Vec<usize> = vertices.iter().collect();
        let mut new_label = [usize::MAX; MAX_VERTICES];
        for (new, &old) in mapping.iter().enumerate() {
            new_label[old] = new;
        }

        let adjacency = mapping
            .iter()
            .map(|&old| {
                (self.adjacency[old] & vertices)
                    .iter()
                    .map(|w| new_label[w])
                    .collect()
            })
            .collect();

        (Graph { adjacency }, mapping)
    }

    /// Returns the graph with `v` deleted and later vertices shifted down by one.
    pub fn remove_vertex(&self, v: usize) -> Result<Graph> {
        self.check_vertex(v)?;
        let (graph, _) = self.induced_subgraph(self.vertices().without(v));
        Ok(graph)
    }

    /// Returns the complement graph.
    pub fn complement(&self) -> Graph {
        let all = self.vertices();
        let adjacency = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(v, &row)| (all - row).without(v))
            .collect();
        Graph { adjacency }
    }

    /// Returns a copy with vertex `v` relabelled to `perm[v]`.
    ///
    /// # Errors
    ///
    /// Fails unless `perm` is a permutation of `0..n`.
    pub fn relabel(&self, perm: &[usize]) -> Result<Graph> {
        let n = self.num_vertices();
        if perm.len() != n {
            return Err(ModelError::IncompleteOrder {
                expected: n,
                actual: perm.len(),
            });
        }
        let mut seen = VertexSet::new();
        for &p in perm {
            self.check_vertex(p)?;
            if !seen.insert(p) {
                return Err(ModelError::DuplicateVertex(p));
            }
        }

        let mut adjacency = vec![VertexSet::EMPTY; n];
        for (u, row) in self.adjacency.iter().enumerate() {
            adjacency[perm[u]] = row.iter().map(|w| perm[w]).collect();
        }
        Ok(Graph { adjacency })
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("num_vertices", &self.num_vertices())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph(vertices: {}, edges: {})",
            self.num_vertices(),
            self.num_edges()
        )
    }
}
