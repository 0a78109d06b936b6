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

//! Consistent solutions: a vertex order together with a partition.
//!
//! The partition is the single source of truth: an ordered sequence of
//! disjoint vertex classes. The vertex-to-class view is derived on demand.
//! A `ConsistentSolution` is immutable once constructed; whether it actually
//! satisfies the consistency condition is decided by the verifier, not by the
//! constructor.

use crate::error::{ModelError, Result};
use thinness_core::set::{VertexSet, MAX_VERTICES};

/// A vertex order and a partition of the vertices into classes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConsistentSolution {
    order: Vec<usize>,
    partition: Vec<VertexSet>,
}

impl ConsistentSolution {
    /// Creates a solution from its raw parts without any validation.
    ///
    /// Use the verifier to check the result.
    #[inline]
    pub fn new(order: Vec<usize>, partition: Vec<VertexSet>) -> Self {
        Self { order, partition }
    }

    /// Creates a solution from an order and a class label per vertex.
    ///
    /// `class_of[v]` is the class of vertex `v`. Labels are normalized: classes
    /// are numbered in order of first appearance along `order`, so gaps and
    /// unused labels disappear.
    ///
    /// # Errors
    ///
    /// Fails if `order` mentions a vertex without a label or mentions a vertex
    /// twice, or if more than 64 labels are given.
    pub fn from_class_labels(order: Vec<usize>, class_of: &[usize]) -> Result<Self> {
        if class_of.len() > MAX_VERTICES {
            return Err(ModelError::TooManyVertices {
                count: class_of.len(),
                max: MAX_VERTICES,
            });
        }
        let mut relabel: Vec<Option<usize>> = Vec::new();
        let mut partition: Vec<VertexSet> = Vec::new();
        let mut seen = VertexSet::EMPTY;

        for &v in &order {
            let label = *class_of.get(v).ok_or(ModelError::VertexOutOfRange {
                vertex: v,
                num_vertices: class_of.len(),
            })?;
            if !seen.insert(v) {
                return Err(ModelError::DuplicateVertex(v));
            }
            if label >= relabel.len() {
                relabel.resize(label + 1, None);
            }
            let class = *relabel[label].get_or_insert_with(|| {
                partition.push(VertexSet::EMPTY);
                partition.len() - 1
            });
            partition[class].insert(v);
        }

        Ok(Self { order, partition })
    }

    /// The solution that puts every vertex of `0..n` in its own class,
    /// in identity order. It is consistent for every graph.
    pub fn trivial(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
            partition: (0..n).map(VertexSet::singleton).collect(),
        }
    }

    /// Returns the vertex order.
    #[inline]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the classes.
    #[inline]
    pub fn partition(&self) -> &[VertexSet] {
        &self.partition
    }

    /// Returns the number of classes.
    #[inline]
    pub fn thinness(&self) -> usize {
        self.partition.len()
    }

    /// Returns the number of vertices in the order.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.order.len()
    }

    /// Returns the index of the class containing `v`.
    pub fn class_of(&self, v: usize) -> Option<usize> {
        self.partition.iter().position(|class| class.contains(v))
    }

    /// Returns the class index of every vertex in `0..num_vertices`.
    ///
    /// Vertices not covered by any class map to `None`. If classes overlap,
    /// the first class wins.
    pub fn class_map(&self, num_vertices: usize) -> Vec<Option<usize>> {
        let mut map = vec![None; num_vertices];
        for (class, members) in self.partition.iter().enumerate() {
            for v in *members {
                if v < num_vertices && map[v].is_none() {
                    map[v] = Some(class);
                }
            }
        }
        map
    }

    /// Consumes the solution and returns its parts.
    #[inline]
    pub fn into_parts(self) -> (Vec<usize>, Vec<VertexSet>) {
        (self.order, self.partition)
    }
}

impl std::fmt::Display for ConsistentSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ConsistentSolution(thinness: {}, order: {:?}, partition: [",
            self.thinness(),
            self.order
        )?;
        for (i, class) in self.partition.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", class)?;
        }
        write!(f, "])")
    }
}
