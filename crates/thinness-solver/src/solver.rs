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

//! # Thinness entry points
//!
//! Wires the branch-and-bound engine to a configuration: validates the
//! bounds, removes twins, picks the exact coloring oracle for the
//! variant, stacks the requested monitors and lifts the certificate back to
//! the input graph.
//!
//! ## Usage
//!
//! ```rust
//! use thinness_model::generators;
//! use thinness_solver::config::ThinnessConfig;
//! use thinness_solver::solver::{calculate_thinness, calculate_thinness_with_certificate};
//!
//! let c4 = generators::cycle(4).unwrap();
//! assert_eq!(calculate_thinness(&c4, &ThinnessConfig::default()).unwrap(), 2);
//!
//! let report = calculate_thinness_with_certificate(&c4, &ThinnessConfig::default()).unwrap();
//! assert!(report.is_proven_optimal());
//! assert!(thinness_solver::verify_solution(&c4, report.solution()));
//! ```

use crate::config::ThinnessConfig;
use thinness_bnb::bnb::{BnbSolver, SearchBounds};
use thinness_bnb::coloring::chain_cover::ChainCoverColoring;
use thinness_bnb::coloring::dsatur::DsaturColoring;
use thinness_bnb::coloring::exact_oracle;
use thinness_bnb::coloring::oracle::ColoringOracle;
use thinness_bnb::error::{Result, ThinnessError};
use thinness_bnb::monitor::composite::CompositeTreeSearchMonitor;
use thinness_bnb::monitor::log::LogTreeSearchMonitor;
use thinness_bnb::monitor::node_limit::NodeLimitMonitor;
use thinness_bnb::monitor::time_limit::TimeLimitMonitor;
use thinness_bnb::result::TerminationReason;
use thinness_bnb::separation::auto::AutoSeparation;
use thinness_bnb::stats::BnbSolverStatistics;
use thinness_model::compatibility::{CompatibilityGraph, Variant};
use thinness_model::error::ModelError;
use thinness_model::graph::Graph;
use thinness_model::solution::ConsistentSolution;
use thinness_model::twins::reduce_twins;
use tracing::{debug, info};

/// The result of a thinness computation with its certificate.
#[derive(Debug, Clone)]
pub struct ThinnessReport {
    solution: ConsistentSolution,
    termination_reason: TerminationReason,
    statistics: BnbSolverStatistics,
    seed_thinness: usize,
}

impl ThinnessReport {
    /// Returns the certificate: an order and a partition consistent with it.
    #[inline]
    pub fn solution(&self) -> &ConsistentSolution {
        &self.solution
    }

    /// Returns the number of classes of the certificate.
    #[inline]
    pub fn thinness(&self) -> usize {
        self.solution.thinness()
    }

    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the search statistics. They refer to the twin-reduced graph
    /// when twin reduction removed vertices.
    #[inline]
    pub fn statistics(&self) -> &BnbSolverStatistics {
        &self.statistics
    }

    /// Returns the thinness of the seed the search started from.
    #[inline]
    pub fn seed_thinness(&self) -> usize {
        self.seed_thinness
    }

    /// Returns `true` if `thinness()` is the exact value.
    #[inline]
    pub fn is_proven_optimal(&self) -> bool {
        self.termination_reason == TerminationReason::OptimalityProven
    }

    #[inline]
    pub fn into_solution(self) -> ConsistentSolution {
        self.solution
    }
}

impl std::fmt::Display for ThinnessReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ThinnessReport(thinness: {}, seed: {}, termination: {}, nodes: {})",
            self.thinness(),
            self.seed_thinness,
            self.termination_reason,
            self.statistics.nodes_explored
        )
    }
}

/// Computes the thinness of `graph`.
///
/// # Errors
///
/// See `calculate_thinness_with_certificate`.
pub fn calculate_thinness(graph: &Graph, config: &ThinnessConfig) -> Result<usize> {
    calculate_thinness_with_certificate(graph, config).map(|report| report.thinness())
}

/// Computes the thinness of `graph` together with a certificate.
///
/// The returned solution always verifies against `graph`. Whether its
/// thinness is exact is told by `ThinnessReport::is_proven_optimal`: a run
/// stopped by a node or time limit, or whose upper bound lies below the
/// thinness, returns the best solution it knows.
///
/// # Errors
///
/// Returns `EmptyGraph` for a graph without vertices, `InvalidBounds` for
/// bounds outside `1 <= lower <= upper <= |V|`, and `OracleFailure` if an
/// oracle breaks its contract.
pub fn calculate_thinness_with_certificate(
    graph: &Graph,
    config: &ThinnessConfig,
) -> Result<ThinnessReport> {
    let bounds = config.search_bounds(graph.num_vertices())?;
    let variant = config.variant();
    info!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        %variant,
        %bounds,
        "computing thinness"
    );

    let reduction = config.reduce_twins().then(|| reduce_twins(graph));
    let target = match &reduction {
        Some(reduction) if !reduction.is_identity() => {
            debug!(removed = reduction.num_removed(), "twins removed");
            reduction.reduced()
        }
        _ => graph,
    };

    // Twins never change the thinness, so the reduced graph obeys the same
    // bounds once they are capped at its size.
    let m = target.num_vertices();
    let bounds = SearchBounds::new(bounds.lower().min(m), bounds.upper().min(m));

    let mut monitor = CompositeTreeSearchMonitor::new();
    if let Some(limit) = config.node_limit() {
        monitor.add_monitor(NodeLimitMonitor::new(limit));
    }
    if let Some(limit) = config.time_limit() {
        monitor.add_monitor(TimeLimitMonitor::new(limit));
    }
    if config.log_progress() {
        monitor.add_monitor(LogTreeSearchMonitor::default());
    }

    let mut coloring = exact_oracle(variant, m);
    let mut solver = BnbSolver::preallocated(m);
    let outcome = solver.solve(
        target,
        variant,
        bounds,
        coloring.as_mut(),
        &mut AutoSeparation::new(),
        monitor,
    )?;
    let (result, termination_reason, statistics) = outcome.into_parts();

    let solution = match &reduction {
        Some(reduction) if !reduction.is_identity() => reduction.lift(result.solution()),
        _ => result.into_solution(),
    };
    debug_assert!(
        thinness_model::verify::verify_solution(graph, &solution),
        "called `calculate_thinness_with_certificate` and produced an invalid certificate"
    );

    info!(
        thinness = solution.thinness(),
        termination = %termination_reason,
        nodes = statistics.nodes_explored,
        elapsed = ?statistics.time_total,
        "thinness computed"
    );

    Ok(ThinnessReport {
        seed_thinness: statistics.seed_thinness,
        solution,
        termination_reason,
        statistics,
    })
}

fn order_thinness<C>(
    graph: &Graph,
    order: &[usize],
    variant: Variant,
    oracle: &mut C,
) -> Result<usize>
where
    C: ColoringOracle,
{
    if graph.num_vertices() == 0 {
        return Err(ThinnessError::EmptyGraph);
    }
    if order.len() != graph.num_vertices() {
        return Err(ModelError::IncompleteOrder {
            expected: graph.num_vertices(),
            actual: order.len(),
        }
        .into());
    }
    let compat = CompatibilityGraph::build(graph, order, variant)?;
    Ok(oracle.color(&compat).num_colors())
}

/// Returns the fewest classes consistent with the fixed `order`.
///
/// # Errors
///
/// Fails if `order` is not a permutation of the vertices of `graph`, or if
/// `graph` is empty.
pub fn thinness_of_order(graph: &Graph, order: &[usize]) -> Result<usize> {
    order_thinness(
        graph,
        order,
        Variant::Thinness,
        &mut ChainCoverColoring::preallocated(graph.num_vertices()),
    )
}

/// Returns the fewest classes consistent with the fixed `order` under the
/// proper condition.
///
/// # Errors
///
/// Fails if `order` is not a permutation of the vertices of `graph`, or if
/// `graph` is empty.
pub fn proper_thinness_of_order(graph: &Graph, order: &[usize]) -> Result<usize> {
    order_thinness(
        graph,
        order,
        Variant::ProperThinness,
        &mut DsaturColoring::new(),
    )
}
