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

//! Independent verification of consistent solutions.
//!
//! The verifier is the ground truth for correctness: it checks a solution
//! against the graph alone and never looks at how the solution was produced.
//! Three conditions are checked in turn:
//!
//! 1. the order is a permutation of the vertex set,
//! 2. the classes are non-empty, disjoint and cover exactly the vertex set,
//! 3. no ordered triple `u < v < w` has `u` and `v` in the same class while the
//!    graph has `(u, w)` but not `(v, w)`.
//!
//! The proper variant adds a fourth condition: no triple has `v` and `w` in
//! the same class while the graph has `(u, w)` but not `(u, v)`.

use crate::graph::Graph;
use crate::solution::ConsistentSolution;
use fixedbitset::FixedBitSet;
use thinness_core::set::VertexSet;
use thiserror::Error;

/// The first condition a solution violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("order contains vertex {vertex}, which is not a vertex of the graph")]
    OrderOutOfRange { vertex: usize },

    #[error("vertex {vertex} appears more than once in the order")]
    DuplicateInOrder { vertex: usize },

    #[error("vertex {vertex} is missing from the order")]
    MissingFromOrder { vertex: usize },

    #[error("class {class} contains vertex {vertex}, which is not a vertex of the graph")]
    ClassOutOfRange { class: usize, vertex: usize },

    #[error("class {class} is empty")]
    EmptyClass { class: usize },

    #[error("vertex {vertex} belongs to more than one class")]
    OverlappingClasses { vertex: usize },

    #[error("vertex {vertex} is not covered by any class")]
    Uncovered { vertex: usize },

    #[error("triple ({u}, {v}, {w}): {u} and {v} share a class, {u} ~ {w} but {v} !~ {w}")]
    InconsistentTriple { u: usize, v: usize, w: usize },

    #[error("triple ({u}, {v}, {w}): {v} and {w} share a class, {u} ~ {w} but {u} !~ {v}")]
    ImproperTriple { u: usize, v: usize, w: usize },
}

/// Checks conditions 1 and 2 and returns the class of each vertex.
fn check_structure(graph: &Graph, solution: &ConsistentSolution) -> Result<Vec<usize>, Violation> {
    let n = graph.num_vertices();

    let mut in_order = FixedBitSet::with_capacity(n);
    for &v in solution.order() {
        if v >= n {
            return Err(Violation::OrderOutOfRange { vertex: v });
        }
        if in_order.put(v) {
            return Err(Violation::DuplicateInOrder { vertex: v });
        }
    }
    if let Some(v) = in_order.zeroes().next() {
        return Err(Violation::MissingFromOrder { vertex: v });
    }

    let mut class_of = vec![usize::MAX; n];
    let mut covered = FixedBitSet::with_capacity(n);
    for (class, members) in solution.partition().iter().enumerate() {
        if members.is_empty() {
            return Err(Violation::EmptyClass { class });
        }
        for v in *members {
            if v >= n {
                return Err(Violation::ClassOutOfRange { class, vertex: v });
            }
            if covered.put(v) {
                return Err(Violation::OverlappingClasses { vertex: v });
            }
            class_of[v] = class;
        }
    }
    if let Some(v) = covered.zeroes().next() {
        return Err(Violation::Uncovered { vertex: v });
    }

    Ok(class_of)
}

/// Checks condition 3. For each same-class pair `u < v`, the witnesses are the
/// later vertices adjacent to `u` but not to `v`.
fn check_triples(
    graph: &Graph,
    order: &[usize],
    class_of: &[usize],
) -> Result<(), Violation> {
    let mut after = graph.vertices();
    let mut suffixes = Vec::with_capacity(order.len());
    for &v in order {
        after.remove(v);
        suffixes.push(after);
    }

    for (i, &u) in order.iter().enumerate() {
        for (j, &v) in order.iter().enumerate().skip(i + 1) {
            if class_of[u] != class_of[v] {
                continue;
            }
            let witnesses = (graph.neighbors(u) - graph.neighbors(v)) & suffixes[j];
            if let Some(w) = witnesses.without(v).first() {
                return Err(Violation::InconsistentTriple { u, v, w });
            }
        }
    }
    Ok(())
}

/// Checks the proper condition. For each same-class pair `v < w`, the
/// witnesses are the earlier vertices adjacent to `w` but not to `v`.
fn check_proper_triples(
    graph: &Graph,
    order: &[usize],
    class_of: &[usize],
) -> Result<(), Violation> {
    let mut before = VertexSet::EMPTY;
    let mut prefixes = Vec::with_capacity(order.len());
    for &v in order {
        prefixes.push(before);
        before.insert(v);
    }

    for (j, &v) in order.iter().enumerate() {
        for &w in &order[(j + 1)..] {
            if class_of[v] != class_of[w] {
                continue;
            }
            let witnesses = (graph.neighbors(w) - graph.neighbors(v)) & prefixes[j];
            if let Some(u) = witnesses.first() {
                return Err(Violation::ImproperTriple { u, v, w });
            }
        }
    }
    Ok(())
}

/// Checks `solution` against `graph` and reports the first violation.
pub fn check_solution(graph: &Graph, solution: &ConsistentSolution) -> Result<(), Violation> {
    let class_of = check_structure(graph, solution)?;
    check_triples(graph, solution.order(), &class_of)
}

/// Checks `solution` against `graph` under the proper consistency condition.
pub fn check_proper_solution(
    graph: &Graph,
    solution: &ConsistentSolution,
) -> Result<(), Violation> {
    let class_of = check_structure(graph, solution)?;
    check_triples(graph, solution.order(), &class_of)?;
    check_proper_triples(graph, solution.order(), &class_of)
}

/// Returns `true` iff `solution` is a valid consistent solution for `graph`.
#[inline]
pub fn verify_solution(graph: &Graph, solution: &ConsistentSolution) -> bool {
    check_solution(graph, solution).is_ok()
}

/// Returns `true` iff `solution` is a valid proper consistent solution.
#[inline]
pub fn verify_proper_solution(graph: &Graph, solution: &ConsistentSolution) -> bool {
    check_proper_solution(graph, solution).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators;

    fn set(vs: &[usize]) -> VertexSet {
        vs.iter().copied().collect()
    }

    /// Triple-by-triple reference check.
    fn naive_consistent(graph: &Graph, solution: &ConsistentSolution) -> bool {
        let order = solution.order();
        let class = solution.class_map(graph.num_vertices());
        for i in 0..order.len() {
            for j in (i + 1)..order.len() {
                for k in (j + 1)..order.len() {
                    let (u, v, w) = (order[i], order[j], order[k]);
                    if class[u] == class[v] && graph.has_edge(u, w) && !graph.has_edge(v, w) {
                        return false;
                    }
                }
            }
        }
        true
    }

    #[test]
    fn test_single_vertex_with_empty_partition_is_rejected() {
        let g = generators::complete(1).unwrap();
        let bad = ConsistentSolution::new(vec![0], vec![]);
        assert_eq!(
            check_solution(&g, &bad),
            Err(Violation::Uncovered { vertex: 0 })
        );
        assert!(!verify_solution(&g, &bad));

        let good = ConsistentSolution::new(vec![0], vec![set(&[0])]);
        assert!(verify_solution(&g, &good));
    }

    #[test]
    fn test_order_must_be_a_permutation() {
        let g = generators::path(3).unwrap();
        let part = vec![set(&[0, 1, 2])];
        assert_eq!(
            check_solution(&g, &ConsistentSolution::new(vec![0, 1], part.clone())),
            Err(Violation::MissingFromOrder { vertex: 2 })
        );
        assert_eq!(
            check_solution(&g, &ConsistentSolution::new(vec![0, 1, 1], part.clone())),
            Err(Violation::DuplicateInOrder { vertex: 1 })
        );
        assert_eq!(
            check_solution(&g, &ConsistentSolution::new(vec![0, 1, 2, 3], part)),
            Err(Violation::OrderOutOfRange { vertex: 3 })
        );
    }

    #[test]
    fn test_partition_must_be_disjoint_and_in_range() {
        let g = generators::path(3).unwrap();
        let order = vec![0, 1, 2];
        assert_eq!(
            check_solution(
                &g,
                &ConsistentSolution::new(order.clone(), vec![set(&[0, 1]), set(&[1, 2])])
            ),
            Err(Violation::OverlappingClasses { vertex: 1 })
        );
        assert_eq!(
            check_solution(
                &g,
                &ConsistentSolution::new(order, vec![set(&[0, 1, 2]), set(&[5])])
            ),
            Err(Violation::ClassOutOfRange { class: 1, vertex: 5 })
        );
    }

    #[test]
    fn test_empty_class_is_rejected() {
        let g = generators::complete(1).unwrap();
        let padded = ConsistentSolution::new(vec![0], vec![set(&[0]), VertexSet::EMPTY]);
        assert_eq!(padded.thinness(), 2);
        assert_eq!(
            check_solution(&g, &padded),
            Err(Violation::EmptyClass { class: 1 })
        );
        assert!(!verify_solution(&g, &padded));
        assert!(!verify_proper_solution(&g, &padded));
    }

    #[test]
    fn test_c4_single_class_fails_two_classes_pass() {
        let g = generators::cycle(4).unwrap();
        let one = ConsistentSolution::new(vec![0, 1, 2, 3], vec![set(&[0, 1, 2, 3])]);
        assert_eq!(
            check_solution(&g, &one),
            Err(Violation::InconsistentTriple { u: 0, v: 1, w: 3 })
        );

        let two = ConsistentSolution::new(vec![0, 1, 2, 3], vec![set(&[0, 2, 3]), set(&[1])]);
        assert!(verify_solution(&g, &two));
    }

    #[test]
    fn test_trivial_solution_always_verifies() {
        for g in [
            generators::cycle(7).unwrap(),
            generators::crown(4).unwrap(),
            generators::matching_complement(3).unwrap(),
        ] {
            let s = ConsistentSolution::trivial(g.num_vertices());
            assert!(verify_solution(&g, &s));
            assert!(verify_proper_solution(&g, &s));
        }
    }

    #[test]
    fn test_proper_condition() {
        // Path 0-1-2 with order [0, 2, 1] and class {1, 2}: the triple (0, 2, 1)
        // has 0 ~ 1 and 0 !~ 2 with 2, 1 in the same class.
        let g = generators::path(3).unwrap();
        let s = ConsistentSolution::new(vec![0, 2, 1], vec![set(&[0]), set(&[1, 2])]);
        assert!(verify_solution(&g, &s));
        assert_eq!(
            check_proper_solution(&g, &s),
            Err(Violation::ImproperTriple { u: 0, v: 2, w: 1 })
        );
    }

    #[test]
    fn test_agrees_with_naive_triple_check() {
        let g = generators::cycle(5).unwrap();
        let orders = [vec![0, 1, 2, 3, 4], vec![2, 4, 1, 3, 0], vec![4, 3, 2, 1, 0]];
        // Every 2-class split of five vertices.
        for order in orders {
            for mask in 0u64..32 {
                let a = VertexSet::from_bits(mask);
                let b = VertexSet::full(5) - a;
                let partition: Vec<VertexSet> =
                    [a, b].into_iter().filter(|c| !c.is_empty()).collect();
                let s = ConsistentSolution::new(order.clone(), partition);
                assert_eq!(
                    verify_solution(&g, &s),
                    naive_consistent(&g, &s),
                    "order {:?}, mask {:#b}",
                    s.order(),
                    mask
                );
            }
        }
    }

    #[test]
    fn test_violation_messages() {
        let v = Violation::InconsistentTriple { u: 0, v: 1, w: 3 };
        assert_eq!(
            v.to_string(),
            "triple (0, 1, 3): 0 and 1 share a class, 0 ~ 3 but 1 !~ 3"
        );
    }
}
