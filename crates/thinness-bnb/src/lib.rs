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

//! Thinness-BnB: branch-and-bound for graph thinness
//!
//! Computes the thinness, or the proper thinness, of a small graph together
//! with a certificate: a vertex order and a partition of the vertices that is
//! consistent with it. The search separates bounding, seeding and monitoring,
//! so each can be swapped without touching the core loop.
//!
//! Core flow
//! - Provide a `thinness_model::graph::Graph` with at most 64 vertices.
//! - Choose a `coloring::oracle::ColoringOracle` (bounds and partitions).
//! - Choose a `separation::oracle::SeparationOracle` (layout for the seed).
//! - Optionally add monitors for logging and resource limits.
//! - Run `bnb::BnbSolver`.
//!
//! Design highlights
//! - The order is built by appending vertices. The compatibility graph of the
//!   prefix only gains edges, so its chromatic number bounds every
//!   completion.
//! - Tight inner loop: state is mutated in place and restored via a trail.
//! - Deterministic: candidates are ordered by the number of compatibility
//!   edges they add, ties by vertex index.
//!
//! Assumptions and guarantees
//! - Optimality is only claimed with an exact coloring oracle.
//! - Every run ends with a verified solution, at worst the seed.
//!
//! Module map
//! - `bnb`: the solver engine, search bounds and session orchestration.
//! - `coloring`: coloring oracles for compatibility graphs.
//! - `separation`: vertex-separation layouts.
//! - `seed`: initial solutions from layouts.
//! - `monitor`: tree-search monitors (log, composite, limits).
//! - `result`: solver outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.
//! - `error`: `ThinnessError`.

pub mod bnb;
pub mod coloring;
pub mod error;
pub mod monitor;
pub mod result;
pub mod seed;
pub mod separation;
pub mod stack;
pub mod state;
pub mod stats;
mod trail;
