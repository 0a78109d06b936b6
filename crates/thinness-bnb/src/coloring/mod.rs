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

//! Coloring oracles for compatibility graphs.
//!
//! - `ChainCoverColoring`: exact and polynomial, thinness only.
//! - `DsaturColoring`: exact branch and bound, both variants.
//! - `GreedyColoring`: heuristic, both variants.

pub mod chain_cover;
pub mod dsatur;
pub mod greedy;
pub mod oracle;

use thinness_model::compatibility::Variant;

/// Returns the preferred exact oracle for `variant`.
pub fn exact_oracle(variant: Variant, num_vertices: usize) -> Box<dyn oracle::ColoringOracle> {
    match variant {
        Variant::Thinness => Box::new(chain_cover::ChainCoverColoring::preallocated(num_vertices)),
        Variant::ProperThinness => Box::new(dsatur::DsaturColoring::new()),
    }
}
