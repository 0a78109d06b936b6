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

//! Thinness-Model: graphs, orders and consistent solutions
//!
//! The data model shared by the search engine and its callers. A `Graph` is a
//! small undirected graph stored as 64-bit adjacency rows. For a vertex order,
//! the `CompatibilityGraph` records which pairs of vertices must be separated;
//! its colorings are the partitions consistent with that order. A
//! `ConsistentSolution` pairs an order with a partition, and the verifier
//! checks one against a graph without trusting how it was produced.
//!
//! Module map
//! - `graph`: `Graph` construction, adjacency queries, induced subgraphs,
//!   complement and relabelling.
//! - `graph6`: decoding and encoding of the graph6 catalogue format.
//! - `generators`: complete graphs, cycles, crowns, matching complements,
//!   grids and `G(n, p)` random graphs, plus a split-crown certificate.
//! - `compatibility`: batch and incremental compatibility graphs for both the
//!   thinness and the proper thinness condition.
//! - `solution`: `ConsistentSolution`, the canonical order + partition pair.
//! - `verify`: the consistency checker and its `Violation` report.
//! - `twins`: true- and false-twin reduction and lifting of solutions.
//! - `error`: `ModelError`.

pub mod compatibility;
pub mod error;
pub mod generators;
pub mod graph;
pub mod graph6;
pub mod solution;
pub mod twins;
pub mod verify;
