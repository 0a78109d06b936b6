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

//! Twin reduction.
//!
//! Two vertices are true twins when their closed neighborhoods coincide; in
//! particular they are adjacent. Deleting a true twin does not change the
//! thinness: the reduced graph is an induced subgraph, and any consistent
//! solution of it extends by placing the deleted twin immediately after its
//! representative, in the representative's class.
//!
//! False twins share their open neighborhood and are never adjacent. A
//! single false twin cannot be lifted the same way, but two of them can cover
//! for any number of others. With `a` placed before `b`, a removed false
//! twin `c` inserted right after `a`, in the class of `a`, breaks no triple:
//! every triple through `c` maps to a triple through `a`, and the one that
//! would pair `a` with `c` itself is already witnessed by `(u, a, b)`. So
//! every class of false twins is cut down to its two smallest vertices.
//!
//! True twins are removed first; false twins are then taken from the graph
//! that remains.

use crate::graph::Graph;
use crate::solution::ConsistentSolution;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thinness_core::set::VertexSet;

/// A class of false twins reduced to the pair `(first, second)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FalseTwinClass {
    first: usize,
    second: usize,
    removed: SmallVec<[usize; 4]>,
}

impl FalseTwinClass {
    /// Returns the two kept twins, smallest first.
    #[inline]
    pub fn kept(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    /// Returns the removed twins in ascending order.
    #[inline]
    pub fn removed(&self) -> &[usize] {
        &self.removed
    }
}

/// A graph with its twins removed, plus what is needed to lift solutions
/// back to the original graph. All labels outside `reduced` are original
/// labels.
#[derive(Debug, Clone)]
pub struct TwinReduction {
    reduced: Graph,
    /// Original label of every reduced vertex.
    kept: Vec<usize>,
    /// For every original vertex `r` that represents a class of true twins,
    /// the twins removed in its favour, in ascending order.
    twins_of: Vec<SmallVec<[usize; 4]>>,
    false_twins: Vec<FalseTwinClass>,
    num_original: usize,
}

impl TwinReduction {
    /// Returns the reduced graph.
    #[inline]
    pub fn reduced(&self) -> &Graph {
        &self.reduced
    }

    /// Returns the original label of every reduced vertex.
    #[inline]
    pub fn kept(&self) -> &[usize] {
        &self.kept
    }

    /// Returns the number of vertices removed.
    #[inline]
    pub fn num_removed(&self) -> usize {
        self.num_original - self.kept.len()
    }

    /// Returns `true` if no vertex was removed.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.num_removed() == 0
    }

    /// Returns the true twins removed in favour of original vertex `v`.
    #[inline]
    pub fn twins_of(&self, v: usize) -> &[usize] {
        &self.twins_of[v]
    }

    /// Returns the classes of false twins that lost vertices.
    #[inline]
    pub fn false_twins(&self) -> &[FalseTwinClass] {
        &self.false_twins
    }

    /// Lifts a solution of the reduced graph to the original graph.
    ///
    /// Removed false twins follow the earlier of their two kept twins, then
    /// every removed true twin follows its representative; each joins the
    /// class of the vertex it follows. The lifted solution has the same
    /// thinness.
    pub fn lift(&self, solution: &ConsistentSolution) -> ConsistentSolution {
        let n = self.num_original;
        let mut position = vec![usize::MAX; n];
        for (i, &r) in solution.order().iter().enumerate() {
            position[self.kept[r]] = i;
        }
        let mut lifted_class = vec![usize::MAX; n];
        for (c, class) in solution.partition().iter().enumerate() {
            for r in *class {
                lifted_class[self.kept[r]] = c;
            }
        }

        let none: &[usize] = &[];
        let mut followers = vec![none; n];
        for class in &self.false_twins {
            let lead = if position[class.first] < position[class.second] {
                class.first
            } else {
                class.second
            };
            followers[lead] = class.removed.as_slice();
            for &c in &class.removed {
                lifted_class[c] = lifted_class[lead];
            }
        }

        let mut order = Vec::with_capacity(n);
        for &r in solution.order() {
            let original = self.kept[r];
            for &v in std::iter::once(&original).chain(followers[original]) {
                order.push(v);
                for &t in &self.twins_of[v] {
                    order.push(t);
                    lifted_class[t] = lifted_class[v];
                }
            }
        }

        let mut partition = vec![VertexSet::EMPTY; solution.thinness()];
        for &v in &order {
            if let Some(class) = partition.get_mut(lifted_class[v]) {
                class.insert(v);
            }
        }
        ConsistentSolution::new(order, partition)
    }
}

impl std::fmt::Display for TwinReduction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TwinReduction(original: {}, reduced: {}, removed: {})",
            self.num_original,
            self.kept.len(),
            self.num_removed()
        )
    }
}

/// Groups `vertices` by the neighborhood `key` returns, in ascending order of
/// their smallest member.
fn twin_classes<F>(vertices: VertexSet, key: F) -> Vec<SmallVec<[usize; 4]>>
where
    F: Fn(usize) -> u64,
{
    let mut index: FxHashMap<u64, usize> = FxHashMap::default();
    let mut classes: Vec<SmallVec<[usize; 4]>> = Vec::new();
    for v in vertices {
        let slot = *index.entry(key(v)).or_insert_with(|| {
            classes.push(SmallVec::new());
            classes.len() - 1
        });
        classes[slot].push(v);
    }
    classes
}

/// Removes all true twins from `graph`, keeping the smallest vertex of each
/// class, then cuts every class of false twins down to its two smallest
/// vertices.
pub fn reduce_twins(graph: &Graph) -> TwinReduction {
    let n = graph.num_vertices();

    let mut twins_of: Vec<SmallVec<[usize; 4]>> = vec![SmallVec::new(); n];
    let mut keep = VertexSet::EMPTY;
    for class in twin_classes(graph.vertices(), |v| graph.closed_neighborhood(v).bits()) {
        keep.insert(class[0]);
        twins_of[class[0]].extend(class[1..].iter().copied());
    }

    let remaining = keep;
    let mut false_twins = Vec::new();
    for class in twin_classes(remaining, |v| (graph.neighbors(v) & remaining).bits()) {
        if class.len() > 2 {
            for &c in &class[2..] {
                keep.remove(c);
            }
            false_twins.push(FalseTwinClass {
                first: class[0],
                second: class[1],
                removed: class[2..].iter().copied().collect(),
            });
        }
    }

    let (reduced, kept) = graph.induced_subgraph(keep);
    TwinReduction {
        reduced,
        kept,
        twins_of,
        false_twins,
        num_original: n,
    }
}
