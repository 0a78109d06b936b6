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

//! # Thinness Solver
//!
//! Public entry points for computing the thinness of a graph. The thinness
//! is the fewest classes of a vertex partition for which some vertex order is
//! consistent: whenever `u < v < w`, `u` and `v` share a class and `u` is
//! adjacent to `w`, then `v` is adjacent to `w` too.
//!
//! ## Modules
//!
//! - `config`: `ThinnessConfig` and its builder (bounds, variant, limits).
//! - `solver`: `calculate_thinness`, certificates and fixed-order thinness.
//!
//! The verifier is re-exported so callers can check certificates without
//! depending on the model crate.

pub mod config;
pub mod solver;

pub use config::{ThinnessConfig, ThinnessConfigBuilder};
pub use solver::{
    calculate_thinness, calculate_thinness_with_certificate, proper_thinness_of_order,
    thinness_of_order, ThinnessReport,
};
pub use thinness_bnb::error::{Result, ThinnessError};
pub use thinness_model::compatibility::Variant;
pub use thinness_model::graph::Graph;
pub use thinness_model::solution::ConsistentSolution;
pub use thinness_model::verify::{verify_proper_solution, verify_solution};
