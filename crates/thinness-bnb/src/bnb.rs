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

//! Branch-and-bound search for minimum-thinness orders.
//!
//! The solver builds a vertex order one vertex at a time. For every prefix
//! the incremental compatibility graph is known exactly, and appending more
//! vertices only adds edges to it, so the chromatic number of the prefix
//! graph bounds every completion from below. A prefix whose bound reaches the
//! best thinness known so far is abandoned. At a full order the coloring of
//! the compatibility graph is the partition of a new solution.
//!
//! `BnbSolver` owns the reusable trail and stack buffers; every call to
//! `solve` creates a private search session which borrows them, runs an
//! iterative depth-first loop, and leaves them empty. The search starts from
//! a verified seed solution and always ends with a solution: the seed is the
//! fallback when nothing better exists or the run is stopped by a monitor.

use crate::coloring::oracle::{checked_coloring, ensure_supported, ColoringOracle};
use crate::error::{Result, ThinnessError};
use crate::monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor};
use crate::result::{BnbSolverOutcome, TerminationReason};
use crate::seed::seed_solution;
use crate::separation::oracle::SeparationOracle;
use crate::stack::{Candidate, SearchStack};
use crate::state::SearchState;
use crate::stats::BnbSolverStatistics;
use crate::trail::SearchTrail;
use thinness_model::compatibility::{CompatibilityGraph, Variant};
use thinness_model::graph::Graph;
use thinness_model::solution::ConsistentSolution;
use thinness_model::verify::{check_proper_solution, check_solution, Violation};
use tracing::{debug, warn};

/// Inclusive bounds on the thinness the caller is interested in.
///
/// The lower bound is a promise: once a solution with at most `lower`
/// classes is found the search stops and reports it as optimal. Solutions
/// with more than `upper` classes are never reported as found by the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchBounds {
    lower: usize,
    upper: usize,
}

impl SearchBounds {
    #[inline]
    pub fn new(lower: usize, upper: usize) -> Self {
        Self { lower, upper }
    }

    /// The widest bounds for a graph on `num_vertices` vertices.
    #[inline]
    pub fn full(num_vertices: usize) -> Self {
        Self {
            lower: 1,
            upper: num_vertices,
        }
    }

    #[inline]
    pub fn lower(&self) -> usize {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Checks `1 <= lower <= upper <= num_vertices`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBounds` otherwise. Bounds are never clamped.
    pub fn validate(&self, num_vertices: usize) -> Result<()> {
        if self.lower < 1 || self.lower > self.upper || self.upper > num_vertices {
            return Err(ThinnessError::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
                max: num_vertices,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for SearchBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// A depth-first branch-and-bound solver for thinness and proper thinness.
///
/// The search tree is explored with an explicit `SearchStack` of pending
/// candidate vertices and a `SearchTrail` that undoes every append on
/// backtrack. Bounds come from a `ColoringOracle`; with an exact oracle a
/// completed search proves optimality.
#[derive(Debug, Clone, Default)]
pub struct BnbSolver {
    trail: SearchTrail,
    stack: SearchStack,
    scratch: Vec<Candidate>,
}

impl BnbSolver {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with buffers sized for graphs with up to
    /// `num_vertices` vertices.
    ///
    /// # Note
    ///
    /// The solver grows its buffers on demand before each search, so this
    /// only moves the allocations to construction time.
    #[inline]
    pub fn preallocated(num_vertices: usize) -> Self {
        Self {
            trail: SearchTrail::preallocated(num_vertices),
            stack: SearchStack::preallocated(num_vertices),
            scratch: Vec::with_capacity(num_vertices),
        }
    }

    /// Solves `graph` starting from a seed built from the layout of
    /// `separation`.
    ///
    /// For proper thinness the seed order is recolored under the proper
    /// condition, since the layout seed is only guaranteed to be consistent.
    ///
    /// # Errors
    ///
    /// Fails on an empty graph, on invalid bounds, when the coloring oracle
    /// does not support `variant`, and when an oracle breaks its contract.
    pub fn solve<C, P, S>(
        &mut self,
        graph: &Graph,
        variant: Variant,
        bounds: SearchBounds,
        coloring: &mut C,
        separation: &mut P,
        monitor: S,
    ) -> Result<BnbSolverOutcome>
    where
        C: ColoringOracle + ?Sized,
        P: SeparationOracle + ?Sized,
        S: TreeSearchMonitor,
    {
        Self::check_input(graph, bounds)?;
        ensure_supported(&*coloring, variant)?;
        let seed = seed_solution(graph, separation)?;
        debug!(
            separation_cost = seed.separation_cost(),
            seed_thinness = seed.solution().thinness(),
            "seed solution built"
        );
        let initial = match variant {
            Variant::Thinness => seed.into_solution(),
            Variant::ProperThinness => {
                let compat =
                    CompatibilityGraph::build(graph, seed.solution().order(), variant)?;
                checked_coloring(&mut *coloring, &compat)?.into_solution(&compat)?
            }
        };
        self.solve_with_initial(graph, variant, bounds, initial, coloring, monitor)
    }

    /// Solves `graph` starting from `initial`.
    ///
    /// `initial` is verified first; if it is not a valid solution for
    /// `variant` a warning is logged and the search starts from the trivial
    /// solution instead.
    ///
    /// # Errors
    ///
    /// Fails on an empty graph, on invalid bounds, and when the coloring
    /// oracle does not support `variant` or breaks its contract.
    pub fn solve_with_initial<C, S>(
        &mut self,
        graph: &Graph,
        variant: Variant,
        bounds: SearchBounds,
        initial: ConsistentSolution,
        coloring: &mut C,
        mut monitor: S,
    ) -> Result<BnbSolverOutcome>
    where
        C: ColoringOracle + ?Sized,
        S: TreeSearchMonitor,
    {
        Self::check_input(graph, bounds)?;
        ensure_supported(&*coloring, variant)?;
        let session = BnbSolverSearchSession::new(
            self,
            graph,
            variant,
            bounds,
            initial,
            coloring,
            &mut monitor,
        );
        let outcome = session.run();
        self.reset();
        outcome
    }

    fn check_input(graph: &Graph, bounds: SearchBounds) -> Result<()> {
        if graph.num_vertices() == 0 {
            return Err(ThinnessError::EmptyGraph);
        }
        bounds.validate(graph.num_vertices())
    }

    /// Clears the trail and the stack without releasing memory.
    #[inline]
    fn reset(&mut self) {
        self.trail.reset();
        self.stack.reset();
        self.scratch.clear();
    }

    /// Returns the memory held by the reusable buffers, in bytes.
    #[inline]
    pub fn allocated_memory_bytes(&self) -> usize {
        self.trail.allocated_memory_bytes()
            + self.stack.allocated_memory_bytes()
            + self.scratch.capacity() * std::mem::size_of::<Candidate>()
    }
}

/// Checks `solution` under the condition of `variant`.
fn check_for_variant(
    graph: &Graph,
    solution: &ConsistentSolution,
    variant: Variant,
) -> std::result::Result<(), Violation> {
    match variant {
        Variant::Thinness => check_solution(graph, solution),
        Variant::ProperThinness => check_proper_solution(graph, solution),
    }
}

/// The state and logic of a single search run.
struct BnbSolverSearchSession<'a, C, S>
where
    C: ColoringOracle + ?Sized,
    S: TreeSearchMonitor,
{
    solver: &'a mut BnbSolver,
    graph: &'a Graph,
    coloring: &'a mut C,
    monitor: &'a mut S,
    state: SearchState,
    best_solution: ConsistentSolution,
    /// Exclusive: a new solution must use fewer classes.
    upper_bound: usize,
    /// The caller's lower bound.
    lower_bound: usize,
    /// Whether `best_solution` lies within the caller's upper bound.
    within_bounds: bool,
    stats: BnbSolverStatistics,
    start_time: std::time::Instant,
}

impl<C, S> std::fmt::Debug for BnbSolverSearchSession<'_, C, S>
where
    C: ColoringOracle + ?Sized,
    S: TreeSearchMonitor,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("graph", &self.graph)
            .field("state", &self.state)
            .field("best_solution", &self.best_solution)
            .field("upper_bound", &self.upper_bound)
            .field("lower_bound", &self.lower_bound)
            .field("stats", &self.stats)
            .finish()
    }
}

impl<C, S> std::fmt::Display for BnbSolverSearchSession<'_, C, S>
where
    C: ColoringOracle + ?Sized,
    S: TreeSearchMonitor,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchSession(best_thinness: {}, bounds: [{}, {}), state: {}, stats: {})",
            self.best_solution.thinness(),
            self.lower_bound,
            self.upper_bound,
            self.state,
            self.stats
        )
    }
}

impl<'a, C, S> BnbSolverSearchSession<'a, C, S>
where
    C: ColoringOracle + ?Sized,
    S: TreeSearchMonitor,
{
    fn new(
        solver: &'a mut BnbSolver,
        graph: &'a Graph,
        variant: Variant,
        bounds: SearchBounds,
        initial: ConsistentSolution,
        coloring: &'a mut C,
        monitor: &'a mut S,
    ) -> Self {
        let n = graph.num_vertices();
        let best_solution = match check_for_variant(graph, &initial, variant) {
            Ok(()) => initial,
            Err(violation) => {
                warn!(
                    %violation,
                    "initial solution rejected, starting from the trivial solution"
                );
                ConsistentSolution::trivial(n)
            }
        };

        let seed_thinness = best_solution.thinness();
        let mut stats = BnbSolverStatistics::default();
        stats.set_seed_thinness(seed_thinness);
        stats.set_root_lower_bound(bounds.lower());

        Self {
            solver,
            graph,
            coloring,
            monitor,
            state: SearchState::new(n, variant),
            best_solution,
            upper_bound: seed_thinness.min(bounds.upper() + 1),
            lower_bound: bounds.lower(),
            within_bounds: seed_thinness <= bounds.upper(),
            stats,
            start_time: std::time::Instant::now(),
        }
    }

    fn run(mut self) -> Result<BnbSolverOutcome> {
        self.monitor.on_enter_search(self.graph, &self.stats);

        if self.upper_bound <= self.lower_bound {
            return Ok(self.finish(TerminationReason::OptimalityProven));
        }

        self.initialize();

        let termination_reason = loop {
            self.monitor.on_step(&self.state, &self.stats);
            self.stats.on_step();

            if let SearchCommand::Terminate(msg) =
                self.monitor.search_command(&self.state, &self.stats)
            {
                break TerminationReason::Aborted(msg);
            }

            if self.upper_bound <= self.lower_bound {
                break TerminationReason::OptimalityProven;
            }

            if self.solver.stack.is_current_level_empty() {
                if self.solver.stack.depth() <= 1 {
                    break self.exhausted_reason();
                }
                self.backtrack_step();
            } else if self.state.lower_bound() >= self.upper_bound {
                // The bound was tightened below this level by a later solution.
                self.stats.on_pruning_bound();
                self.monitor
                    .on_prune(&self.state, PruneReason::BoundDominated, &self.stats);
                self.backtrack_step();
            } else {
                self.process_next_decision()?;
            }
        };

        Ok(self.finish(termination_reason))
    }

    /// The reason reported when every branch has been explored.
    fn exhausted_reason(&self) -> TerminationReason {
        if !self.coloring.is_exact() {
            TerminationReason::Heuristic
        } else if self.within_bounds {
            TerminationReason::OptimalityProven
        } else {
            TerminationReason::InfeasibilityProven
        }
    }

    /// Unwinds the search, stops the clock and builds the outcome.
    fn finish(mut self, reason: TerminationReason) -> BnbSolverOutcome {
        self.solver.trail.clear(&mut self.state);
        self.solver.stack.reset();
        debug_assert!(self.solver.trail.is_empty());
        debug_assert!(
            self.state.num_placed() == 0 && self.state.is_consistent(),
            "called `BnbSolverSearchSession::finish` with a dirty state: {}",
            self.state
        );
        debug_assert!(
            check_for_variant(self.graph, &self.best_solution, self.state.compatibility().variant())
                .is_ok(),
            "called `BnbSolverSearchSession::finish` with an invalid best solution"
        );

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);

        let solution = self.best_solution;
        match reason {
            TerminationReason::OptimalityProven => BnbSolverOutcome::optimal(solution, self.stats),
            TerminationReason::InfeasibilityProven => {
                BnbSolverOutcome::infeasible(solution, self.stats)
            }
            TerminationReason::Heuristic => BnbSolverOutcome::heuristic(solution, self.stats),
            TerminationReason::Aborted(msg) => BnbSolverOutcome::aborted(solution, msg, self.stats),
        }
    }

    /// Sets up the root frame and enqueues every vertex as a first choice.
    fn initialize(&mut self) {
        let n = self.graph.num_vertices();
        self.solver.trail.ensure_capacity(n);
        self.solver.stack.ensure_capacity(n);

        self.solver.trail.push_frame();
        self.solver.stack.push_frame();
        self.stats.on_node_explored();
        self.stats.on_depth_update(1);

        self.enqueue_candidates();
    }

    /// Pushes the remaining vertices of the current node, the one adding the
    /// fewest compatibility edges on top.
    fn enqueue_candidates(&mut self) {
        let graph = self.graph;
        let solver = &mut *self.solver;
        let compat = self.state.compatibility();

        solver.scratch.clear();
        solver.scratch.extend(
            self.state
                .remaining()
                .iter()
                .map(|v| Candidate::new(v, compat.edges_if_appended(graph, v).len())),
        );
        solver
            .scratch
            .sort_unstable_by_key(|c| (c.new_edges(), c.vertex()));

        let count = solver.scratch.len();
        solver.stack.extend(solver.scratch.iter().rev().copied());
        self.monitor
            .on_decisions_enqueued(&self.state, count, &self.stats);
    }

    #[inline]
    fn backtrack_step(&mut self) {
        self.stats.on_backtrack();
        self.monitor.on_backtrack(&self.state, &self.stats);

        self.solver.trail.backtrack(&mut self.state);
        self.solver.stack.pop_frame();
    }

    /// Pops the next candidate of the current level and descends into it.
    fn process_next_decision(&mut self) -> Result<()> {
        let Some(candidate) = self.solver.stack.pop() else {
            return Ok(());
        };
        self.stats.on_decision_generated();
        self.descend(candidate)
    }

    /// Appends the candidate and either records a solution or bounds the new
    /// node.
    fn descend(&mut self, candidate: Candidate) -> Result<()> {
        let lower_bound = self.state.lower_bound();
        self.solver.trail.push_frame();
        self.solver
            .trail
            .apply_append(&mut self.state, self.graph, candidate.vertex(), lower_bound);
        self.solver.stack.push_frame();

        self.stats.on_node_explored();
        self.stats.on_depth_update(self.solver.stack.depth() as u64);
        self.monitor.on_descend(&self.state, candidate, &self.stats);

        if self.state.is_complete() {
            return self.handle_complete_solution();
        }

        if self.should_backtrack_after_expand() {
            self.stats.on_pruning_bound();
            self.backtrack_step();
        }
        Ok(())
    }

    /// Colors the compatibility graph of a full order and keeps the result if
    /// it improves on the best solution.
    fn handle_complete_solution(&mut self) -> Result<()> {
        self.stats.on_coloring_call();
        let compat = self.state.compatibility();
        let coloring = checked_coloring(&mut *self.coloring, compat)?;
        let thinness = coloring.num_colors();
        self.monitor
            .on_lower_bound_computed(&self.state, thinness, &self.stats);

        if thinness >= self.upper_bound {
            self.stats.on_pruning_bound();
            self.monitor
                .on_prune(&self.state, PruneReason::BoundDominated, &self.stats);
            return Ok(());
        }

        let solution = coloring.into_solution(compat)?;
        debug_assert!(
            check_for_variant(self.graph, &solution, compat.variant()).is_ok(),
            "called `BnbSolverSearchSession::handle_complete_solution` with a coloring that is not a valid solution"
        );

        self.upper_bound = thinness;
        self.within_bounds = true;
        self.stats.on_solution_found();
        self.monitor.on_solution_found(&solution, &self.stats);
        debug!(thinness, nodes = self.stats.nodes_explored, "improved solution");
        self.best_solution = solution;
        Ok(())
    }

    /// Bounds the current node and enqueues its children unless the bound
    /// reaches the best known thinness.
    fn should_backtrack_after_expand(&mut self) -> bool {
        self.stats.on_coloring_call();
        let Some(chromatic) = self
            .coloring
            .chromatic_number(self.state.compatibility(), self.upper_bound)
        else {
            self.monitor
                .on_prune(&self.state, PruneReason::BoundDominated, &self.stats);
            return true;
        };

        let node_lower_bound = chromatic.max(self.state.lower_bound());
        self.state.set_lower_bound(node_lower_bound);
        self.monitor
            .on_lower_bound_computed(&self.state, node_lower_bound, &self.stats);

        if node_lower_bound >= self.upper_bound {
            self.monitor
                .on_prune(&self.state, PruneReason::BoundDominated, &self.stats);
            return true;
        }

        self.enqueue_candidates();
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coloring::chain_cover::ChainCoverColoring;
    use crate::coloring::dsatur::DsaturColoring;
    use crate::coloring::greedy::GreedyColoring;
    use crate::monitor::no_op::NoOperationMonitor;
    use crate::monitor::node_limit::NodeLimitMonitor;
    use crate::separation::auto::AutoSeparation;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use thinness_core::set::VertexSet;
    use thinness_model::generators;
    use thinness_model::verify::{verify_proper_solution, verify_solution};

    /// Minimum over all orders of the exact coloring of the batch
    /// compatibility graph.
    fn brute_force(graph: &Graph, variant: Variant) -> usize {
        fn permute(
            graph: &Graph,
            variant: Variant,
            prefix: &mut Vec<usize>,
            rest: VertexSet,
            best: &mut usize,
        ) {
            if rest.is_empty() {
                let compat = CompatibilityGraph::build(graph, prefix, variant).unwrap();
                let colors = DsaturColoring::new().color(&compat).num_colors();
                *best = (*best).min(colors);
                return;
            }
            for v in rest {
                prefix.push(v);
                permute(graph, variant, prefix, rest.without(v), best);
                prefix.pop();
            }
        }
        let mut best = usize::MAX;
        permute(graph, variant, &mut Vec::new(), graph.vertices(), &mut best);
        best
    }

    fn solve(graph: &Graph, variant: Variant) -> BnbSolverOutcome {
        let mut solver = BnbSolver::new();
        let mut coloring: Box<dyn ColoringOracle> =
            crate::coloring::exact_oracle(variant, graph.num_vertices());
        solver
            .solve(
                graph,
                variant,
                SearchBounds::full(graph.num_vertices()),
                coloring.as_mut(),
                &mut AutoSeparation::new(),
                NoOperationMonitor,
            )
            .unwrap()
    }

    #[test]
    fn test_matches_brute_force_on_random_graphs() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xB0B);
        for n in 1..=6 {
            for _ in 0..8 {
                let g = generators::random_gnp(n, 0.5, &mut rng).unwrap();
                let outcome = solve(&g, Variant::Thinness);
                assert!(outcome.is_optimal());
                assert!(verify_solution(&g, outcome.solution()));
                assert_eq!(
                    outcome.solution().thinness(),
                    brute_force(&g, Variant::Thinness),
                    "{}",
                    g
                );
            }
        }
    }

    #[test]
    fn test_proper_variant_matches_brute_force() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x9209);
        for n in 1..=6 {
            for _ in 0..5 {
                let g = generators::random_gnp(n, 0.5, &mut rng).unwrap();
                let outcome = solve(&g, Variant::ProperThinness);
                assert!(outcome.is_optimal());
                assert!(verify_proper_solution(&g, outcome.solution()));
                assert_eq!(
                    outcome.solution().thinness(),
                    brute_force(&g, Variant::ProperThinness),
                    "{}",
                    g
                );
            }
        }
    }

    #[test]
    fn test_known_values() {
        let cases = [
            (generators::complete(5).unwrap(), 1),
            (generators::cycle(4).unwrap(), 2),
            (generators::matching_complement(3).unwrap(), 3),
            (generators::split_crown(3).unwrap(), 2),
        ];
        for (g, expected) in cases {
            let outcome = solve(&g, Variant::Thinness);
            assert_eq!(outcome.termination_reason(), &TerminationReason::OptimalityProven);
            assert_eq!(outcome.solution().thinness(), expected, "{}", g);
        }
    }

    #[test]
    fn test_rejects_oracle_without_variant_support() {
        let g = generators::cycle(4).unwrap();
        let err = BnbSolver::new()
            .solve(
                &g,
                Variant::ProperThinness,
                SearchBounds::full(4),
                &mut ChainCoverColoring::new(),
                &mut AutoSeparation::new(),
                NoOperationMonitor,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ThinnessError::OracleFailure { ref oracle, .. } if oracle == "ChainCoverColoring"
        ));
    }

    #[test]
    fn test_rejects_invalid_input() {
        let mut solver = BnbSolver::new();
        let g = generators::path(4).unwrap();
        let mut coloring = ChainCoverColoring::new();
        for (lower, upper) in [(0, 2), (3, 2), (1, 5)] {
            let err = solver
                .solve(
                    &g,
                    Variant::Thinness,
                    SearchBounds::new(lower, upper),
                    &mut coloring,
                    &mut AutoSeparation::new(),
                    NoOperationMonitor,
                )
                .unwrap_err();
            assert_eq!(err, ThinnessError::InvalidBounds { lower, upper, max: 4 });
        }

        let empty = Graph::new(0).unwrap();
        assert_eq!(
            solver
                .solve(
                    &empty,
                    Variant::Thinness,
                    SearchBounds::new(1, 1),
                    &mut coloring,
                    &mut AutoSeparation::new(),
                    NoOperationMonitor,
                )
                .unwrap_err(),
            ThinnessError::EmptyGraph
        );
    }

    #[test]
    fn test_invalid_initial_solution_falls_back_to_trivial() {
        let g = generators::cycle(4).unwrap();
        // One class for C4 is never consistent.
        let bogus = ConsistentSolution::new(vec![0, 1, 2, 3], vec![VertexSet::full(4)]);
        let mut solver = BnbSolver::new();
        let outcome = solver
            .solve_with_initial(
                &g,
                Variant::Thinness,
                SearchBounds::full(4),
                bogus,
                &mut ChainCoverColoring::new(),
                NoOperationMonitor,
            )
            .unwrap();
        assert_eq!(outcome.statistics().seed_thinness, 4);
        assert!(outcome.is_optimal());
        assert_eq!(outcome.solution().thinness(), 2);
    }

    #[test]
    fn test_upper_bound_below_optimum_is_infeasible() {
        let g = generators::matching_complement(3).unwrap();
        let mut solver = BnbSolver::new();
        let outcome = solver
            .solve_with_initial(
                &g,
                Variant::Thinness,
                SearchBounds::new(1, 2),
                ConsistentSolution::trivial(6),
                &mut ChainCoverColoring::new(),
                NoOperationMonitor,
            )
            .unwrap();
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::InfeasibilityProven
        );
        assert!(!outcome.is_optimal());
        assert!(verify_solution(&g, outcome.solution()));
    }

    #[test]
    fn test_lower_bound_stops_the_search_early() {
        let g = generators::grid(3, 3).unwrap();
        let mut solver = BnbSolver::new();
        let outcome = solver
            .solve_with_initial(
                &g,
                Variant::Thinness,
                SearchBounds::new(9, 9),
                ConsistentSolution::trivial(9),
                &mut ChainCoverColoring::new(),
                NoOperationMonitor,
            )
            .unwrap();
        assert!(outcome.is_optimal());
        assert_eq!(outcome.statistics().nodes_explored, 0);
    }

    #[test]
    fn test_node_limit_aborts_with_a_valid_solution() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let g = generators::random_gnp(14, 0.5, &mut rng).unwrap();
        let mut solver = BnbSolver::new();
        let outcome = solver
            .solve_with_initial(
                &g,
                Variant::Thinness,
                SearchBounds::full(14),
                ConsistentSolution::trivial(14),
                &mut ChainCoverColoring::new(),
                NodeLimitMonitor::new(5),
            )
            .unwrap();
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
        assert!(outcome.statistics().nodes_explored <= 6);
        assert!(verify_solution(&g, outcome.solution()));
    }

    #[test]
    fn test_heuristic_oracle_never_claims_optimality() {
        let g = generators::cycle(6).unwrap();
        let mut solver = BnbSolver::new();
        let outcome = solver
            .solve(
                &g,
                Variant::Thinness,
                SearchBounds::full(6),
                &mut GreedyColoring::new(),
                &mut AutoSeparation::new(),
                NoOperationMonitor,
            )
            .unwrap();
        assert_eq!(outcome.termination_reason(), &TerminationReason::Heuristic);
        assert!(!outcome.is_optimal());
        assert!(verify_solution(&g, outcome.solution()));

        let h = generators::matching_complement(4).unwrap();
        let outcome = solver
            .solve_with_initial(
                &h,
                Variant::Thinness,
                SearchBounds::new(1, 8),
                ConsistentSolution::trivial(8),
                &mut GreedyColoring::new(),
                NoOperationMonitor,
            )
            .unwrap();
        assert_eq!(outcome.termination_reason(), &TerminationReason::Heuristic);
        assert!(!outcome.is_optimal());
        assert!(verify_solution(&h, outcome.solution()));
    }

    #[test]
    fn test_solver_is_reusable_and_leaves_clean_buffers() {
        let mut solver = BnbSolver::preallocated(8);
        let bytes = solver.allocated_memory_bytes();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..10 {
            let g = generators::random_gnp(8, 0.4, &mut rng).unwrap();
            let outcome = solver
                .solve(
                    &g,
                    Variant::Thinness,
                    SearchBounds::full(8),
                    &mut ChainCoverColoring::new(),
                    &mut AutoSeparation::new(),
                    NoOperationMonitor,
                )
                .unwrap();
            assert!(outcome.is_optimal());
            assert!(solver.trail.is_empty());
            assert!(solver.stack.is_empty());
        }
        assert_eq!(solver.allocated_memory_bytes(), bytes);
    }

    #[test]
    fn test_statistics_are_coherent() {
        let g = generators::grid(2, 4).unwrap();
        let outcome = solve(&g, Variant::Thinness);
        let stats = outcome.statistics();
        assert!(stats.steps >= stats.decisions_generated);
        assert!(stats.nodes_explored >= 1);
        assert!(stats.max_depth <= 9);
        assert!(stats.solutions_found as usize <= stats.seed_thinness);
        assert!(outcome.solution().thinness() <= stats.seed_thinness);
    }

    #[test]
    fn test_bounds_display_and_validation() {
        let bounds = SearchBounds::full(5);
        assert_eq!(format!("{}", bounds), "[1, 5]");
        assert_eq!(bounds.validate(5), Ok(()));
        assert!(SearchBounds::new(2, 6).validate(5).is_err());
    }
}
