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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait, `PruneReason` and `SearchCommand`
//! for observing and controlling the branch-and-bound loop. Callbacks track
//! the solver lifecycle, and a monitor can stop the run through
//! `search_command` (default: `Continue`).
//!
//! Lifecycle highlights
//! - enter -> step -> {lower bound/prune | enqueue/descend/backtrack} ->
//!   solution -> exit
//! - `BnbSolverStatistics` is provided to every callback.
//!
//! Only `name`, `on_enter_search` and `on_exit_search` are required; every
//! other callback defaults to doing nothing. Keep callbacks lightweight, they
//! run inside the search loop.

use crate::stack::Candidate;
use crate::state::SearchState;
use crate::stats::BnbSolverStatistics;
use thinness_model::graph::Graph;
use thinness_model::solution::ConsistentSolution;

/// What the search loop should do next.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    /// Stop and return the best solution so far. The string names the cause.
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Reasons for pruning a search node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// The node was rejected by an oracle.
    Infeasible,
    /// The coloring bound of the node reached the best known thinness.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::Infeasible => write!(f, "Infeasible"),
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// Trait for monitoring and controlling the search process of the solver.
pub trait TreeSearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called when the search starts.
    fn on_enter_search(&mut self, graph: &Graph, statistics: &BnbSolverStatistics);

    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics);

    /// Called once per loop iteration to determine the next action.
    fn search_command(
        &mut self,
        _state: &SearchState,
        _statistics: &BnbSolverStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }

    /// Called at each step of the search.
    fn on_step(&mut self, _state: &SearchState, _statistics: &BnbSolverStatistics) {}

    /// Called when the coloring bound of a candidate prefix is known.
    /// `state` is the parent node; `lower_bound` is the bound of the child.
    fn on_lower_bound_computed(
        &mut self,
        _state: &SearchState,
        _lower_bound: usize,
        _statistics: &BnbSolverStatistics,
    ) {
    }

    /// Called when a node or candidate is pruned.
    fn on_prune(
        &mut self,
        _state: &SearchState,
        _reason: PruneReason,
        _statistics: &BnbSolverStatistics,
    ) {
    }

    /// Called when candidates are enqueued for exploration.
    fn on_decisions_enqueued(
        &mut self,
        _state: &SearchState,
        _count: usize,
        _statistics: &BnbSolverStatistics,
    ) {
    }

    /// Called after descending into a child node.
    fn on_descend(
        &mut self,
        _state: &SearchState,
        _candidate: Candidate,
        _statistics: &BnbSolverStatistics,
    ) {
    }

    /// Called before backtracking to the parent node.
    fn on_backtrack(&mut self, _state: &SearchState, _statistics: &BnbSolverStatistics) {}

    /// Called when a new best solution is found.
    fn on_solution_found(
        &mut self,
        _solution: &ConsistentSolution,
        _statistics: &BnbSolverStatistics,
    ) {
    }
}

impl std::fmt::Debug for dyn TreeSearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn TreeSearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}
