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

//! Graph families with known thinness, plus random graphs.
//!
//! These constructors are used by tests, benchmarks and callers exploring
//! extremal graphs. All of them fail with `ModelError::TooManyVertices` when
//! the requested graph would exceed 64 vertices.

use crate::error::Result;
use crate::graph::Graph;
use crate::solution::ConsistentSolution;
use rand::Rng;

/// The complete graph `K_n`.
pub fn complete(n: usize) -> Result<Graph> {
    Ok(Graph::new(n)?.complement())
}

/// The edgeless graph on `n` vertices.
pub fn edgeless(n: usize) -> Result<Graph> {
    Graph::new(n)
}

/// The path `0 - 1 - ... - (n - 1)`.
pub fn path(n: usize) -> Result<Graph> {
    Graph::from_edges(n, (1..n).map(|v| (v - 1, v)))
}

/// The cycle `C_n` on vertices `0..n` in cyclic order.
///
/// For `n < 3` this degenerates to a path.
pub fn cycle(n: usize) -> Result<Graph> {
    let mut graph = path(n)?;
    if n >= 3 {
        graph.add_edge(n - 1, 0)?;
    }
    Ok(graph)
}

/// The crown graph: `K_{k,k}` without a perfect matching.
///
/// Vertices `0..k` form one side and `k..2k` the other; `i` is joined to
/// `k + j` for every `i != j`.
pub fn crown(k: usize) -> Result<Graph> {
    let mut graph = Graph::new(2 * k)?;
    for i in 0..k {
        for j in 0..k {
            if i != j {
                graph.add_edge(i, k + j)?;
            }
        }
    }
    Ok(graph)
}

/// The split crown graph: a crown whose first side is turned into a clique.
///
/// Vertices `0..k` are pairwise adjacent, `k..2k` form an independent set and
/// `i` is joined to `k + j` for every `i != j`.
pub fn split_crown(k: usize) -> Result<Graph> {
    let mut graph = crown(k)?;
    for i in 0..k {
        for j in (i + 1)..k {
            graph.add_edge(i, j)?;
        }
    }
    Ok(graph)
}

/// A consistent solution for `split_crown(k)` with `ceil(k / 2)` classes.
///
/// Clique vertices are paired as `{2p, 2p + 1}` and each pair gets class `p`.
/// The order starts with the odd independent vertices `k + 1, k + 3, ...`,
/// then lists every pair followed by the independent vertex `k + 2p`. An odd
/// independent vertex `k + 2p + 1` shares class `p`, an even one `k + 2p`
/// moves one class up (cyclically).
///
/// # Errors
///
/// Fails with `ModelError::TooManyVertices` if `2k > 64`.
pub fn split_crown_solution(k: usize) -> Result<ConsistentSolution> {
    let classes = k.div_ceil(2);
    let mut order: Vec<usize> = (k + 1..2 * k).step_by(2).collect();
    for i in (0..k).step_by(2) {
        order.extend(i..(i + 2).min(k));
        order.push(k + i);
    }

    let labels: Vec<usize> = (0..k)
        .map(|v| v / 2)
        .chain((0..k).map(|j| {
            if j % 2 == 1 {
                j / 2
            } else {
                (j / 2 + 1) % classes
            }
        }))
        .collect();
    ConsistentSolution::from_class_labels(order, &labels)
}

/// The complement of `n` disjoint edges (`2n` vertices, the pairs
/// `{2i, 2i + 1}` are the only non-adjacent pairs).
pub fn matching_complement(n: usize) -> Result<Graph> {
    let matching = Graph::from_edges(2 * n, (0..n).map(|i| (2 * i, 2 * i + 1)))?;
    Ok(matching.complement())
}

/// The `rows x cols` grid graph, vertex `(r, c)` labelled `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> Result<Graph> {
    let mut graph = Graph::new(rows * cols)?;
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                graph.add_edge(v, v + 1)?;
            }
            if r + 1 < rows {
                graph.add_edge(v, v + cols)?;
            }
        }
    }
    Ok(graph)
}

/// An Erdős–Rényi graph `G(n, p)`: every pair is joined independently with
/// probability `p`.
///
/// # Panics
///
/// Panics if `p` is not in `[0, 1]`.
pub fn random_gnp<R>(n: usize, p: f64, rng: &mut R) -> Result<Graph>
where
    R: Rng + ?Sized,
{
    assert!(
        (0.0..=1.0).contains(&p),
        "called `random_gnp` with probability {} outside [0, 1]",
        p
    );
    let mut graph = Graph::new(n)?;
    for v in 1..n {
        for u in 0..v {
            if rng.random_bool(p) {
                graph.add_edge(u, v)?;
            }
        }
    }
    Ok(graph)
}
