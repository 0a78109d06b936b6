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

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use thinness_bnb::result::TerminationReason;
use thinness_model::generators;
use thinness_model::graph6;
use thinness_solver::{
    calculate_thinness, calculate_thinness_with_certificate, proper_thinness_of_order,
    thinness_of_order, verify_proper_solution, verify_solution, Graph, ThinnessConfig,
    ThinnessError, Variant,
};

/// Whether the graph on `0..colors.len()` whose edges are `conflicts` has a
/// coloring with `k` colors.
fn colorable(k: usize, conflicts: &[Vec<bool>], colors: &mut [usize]) -> bool {
    fn extend(v: usize, k: usize, conflicts: &[Vec<bool>], colors: &mut [usize]) -> bool {
        if v == colors.len() {
            return true;
        }
        for c in 0..k {
            if (0..v).all(|u| !(conflicts[u][v] && colors[u] == c)) {
                colors[v] = c;
                if extend(v + 1, k, conflicts, colors) {
                    return true;
                }
            }
        }
        false
    }
    extend(0, k, conflicts, colors)
}

/// Fewest colors of the graph on `0..n` whose edges are `conflicts`.
fn chromatic_number(n: usize, conflicts: &[Vec<bool>]) -> usize {
    let mut colors = vec![0; n];
    (1..=n.max(1))
        .find(|&k| colorable(k, conflicts, &mut colors))
        .unwrap_or(n)
}

/// The pairs of order positions that may not share a class, straight from
/// the triples.
fn reference_conflicts(graph: &Graph, order: &[usize], proper: bool) -> Vec<Vec<bool>> {
    let n = order.len();
    let mut conflicts = vec![vec![false; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let (u, v, w) = (order[i], order[j], order[k]);
                if graph.has_edge(u, w) && !graph.has_edge(v, w) {
                    conflicts[i][j] = true;
                    conflicts[j][i] = true;
                }
                if proper && graph.has_edge(u, w) && !graph.has_edge(u, v) {
                    conflicts[j][k] = true;
                    conflicts[k][j] = true;
                }
            }
        }
    }
    conflicts
}

/// Classes needed for a fixed order.
fn reference_order_thinness(graph: &Graph, order: &[usize], proper: bool) -> usize {
    chromatic_number(order.len(), &reference_conflicts(graph, order, proper))
}

/// Minimum over every order of `reference_order_thinness`. An order only
/// replaces the best value when it can be colored with fewer classes.
fn reference_thinness(graph: &Graph, proper: bool) -> usize {
    fn permute(
        graph: &Graph,
        proper: bool,
        order: &mut Vec<usize>,
        used: &mut Vec<bool>,
        best: &mut usize,
    ) {
        if *best == 1 {
            return;
        }
        if order.len() == used.len() {
            let conflicts = reference_conflicts(graph, order, proper);
            let mut colors = vec![0; order.len()];
            if colorable(*best - 1, &conflicts, &mut colors) {
                *best = chromatic_number(order.len(), &conflicts);
            }
            return;
        }
        for v in 0..used.len() {
            if !used[v] {
                used[v] = true;
                order.push(v);
                permute(graph, proper, order, used, best);
                order.pop();
                used[v] = false;
            }
        }
    }
    let n = graph.num_vertices();
    let mut best = n.max(1);
    permute(graph, proper, &mut Vec::new(), &mut vec![false; n], &mut best);
    best
}

fn thinness(graph: &Graph) -> usize {
    calculate_thinness(graph, &ThinnessConfig::default()).unwrap()
}

fn assert_thinness(graph: &Graph, expected: usize) {
    assert_eq!(thinness(graph), expected, "{}", graph);
    let report = calculate_thinness_with_certificate(graph, &ThinnessConfig::default()).unwrap();
    assert_eq!(report.thinness(), expected);
    assert!(report.is_proven_optimal());
    assert!(verify_solution(graph, report.solution()));
}

#[test]
fn test_single_vertex() {
    let g = Graph::new(1).unwrap();
    assert_thinness(&g, 1);
    let report = calculate_thinness_with_certificate(&g, &ThinnessConfig::default()).unwrap();
    assert_eq!(report.solution().order(), &[0]);
}

#[test]
fn test_closed_forms() {
    for n in 1..=7 {
        assert_thinness(&generators::complete(n).unwrap(), 1);
        assert_thinness(&generators::edgeless(n).unwrap(), 1);
        assert_thinness(&generators::path(n).unwrap(), 1);
    }
    assert_thinness(&generators::cycle(4).unwrap(), 2);
    for n in 1..=4 {
        assert_thinness(&generators::matching_complement(n).unwrap(), n);
    }
    for k in 2..=5 {
        assert_thinness(&generators::crown(k).unwrap(), k - 1);
    }
}

#[test]
fn test_four_cycle_certificate() {
    let g = generators::cycle(4).unwrap();
    let report = calculate_thinness_with_certificate(&g, &ThinnessConfig::default()).unwrap();
    assert_eq!(report.thinness(), 2);
    assert_eq!(report.solution().partition().len(), 2);
    assert_eq!(report.solution().order().len(), 4);
    assert!(verify_solution(&g, report.solution()));
    assert_eq!(report.termination_reason(), &TerminationReason::OptimalityProven);
}

#[test]
fn test_split_crown_with_three_per_side() {
    let g = generators::split_crown(3).unwrap();
    assert_thinness(&g, 2);
}

#[test]
fn test_split_crown_needs_half_of_each_side() {
    for k in 1..=5 {
        let g = generators::split_crown(k).unwrap();
        assert_thinness(&g, k.div_ceil(2));
        let certificate = generators::split_crown_solution(k).unwrap();
        assert!(verify_solution(&g, &certificate));
        assert_eq!(certificate.thinness(), thinness(&g));
    }
}

#[test]
fn test_agrees_with_reference_on_all_small_graphs() {
    for n in 1..=5usize {
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| (u, v)))
            .collect();
        for mask in 0u32..(1 << pairs.len()) {
            let edges = pairs
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &e)| e);
            let g = Graph::from_edges(n, edges).unwrap();
            assert_eq!(thinness(&g), reference_thinness(&g, false), "{}", g);
        }
    }
}

#[test]
fn test_agrees_with_reference_on_random_graphs() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for (n, count) in [(6, 30), (7, 30), (8, 100)] {
        for _ in 0..count {
            let g = generators::random_gnp(n, 0.5, &mut rng).unwrap();
            let report =
                calculate_thinness_with_certificate(&g, &ThinnessConfig::default()).unwrap();
            assert!(verify_solution(&g, report.solution()));
            assert_eq!(report.thinness(), reference_thinness(&g, false), "{}", g);
        }
    }
}

#[test]
fn test_proper_thinness_agrees_with_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let config = ThinnessConfig::builder()
        .with_variant(Variant::ProperThinness)
        .build();
    for n in 1..=6 {
        for _ in 0..6 {
            let g = generators::random_gnp(n, 0.5, &mut rng).unwrap();
            let report = calculate_thinness_with_certificate(&g, &config).unwrap();
            assert!(verify_proper_solution(&g, report.solution()));
            assert!(report.thinness() >= thinness(&g));
            assert_eq!(report.thinness(), reference_thinness(&g, true), "{}", g);
        }
    }
}

#[test]
fn test_monotone_under_induced_subgraphs() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..5 {
        let g = generators::random_gnp(9, 0.5, &mut rng).unwrap();
        let t = thinness(&g);
        for v in 0..g.num_vertices() {
            let h = g.remove_vertex(v).unwrap();
            assert!(thinness(&h) <= t, "removing {} from {}", v, g);
        }
    }
}

#[test]
fn test_any_order_needs_at_least_the_thinness() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..10 {
        let g = generators::random_gnp(9, 0.4, &mut rng).unwrap();
        let t = thinness(&g);
        let mut order: Vec<usize> = (0..9).collect();
        for _ in 0..20 {
            order.shuffle(&mut rng);
            let fixed = thinness_of_order(&g, &order).unwrap();
            assert!(fixed >= t);
            assert_eq!(fixed, reference_order_thinness(&g, &order, false));
            assert!(proper_thinness_of_order(&g, &order).unwrap() >= fixed);
        }
    }
}

#[test]
fn test_certificate_order_realizes_its_thinness() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..10 {
        let g = generators::random_gnp(10, 0.3, &mut rng).unwrap();
        let report = calculate_thinness_with_certificate(&g, &ThinnessConfig::default()).unwrap();
        assert_eq!(
            thinness_of_order(&g, report.solution().order()).unwrap(),
            report.thinness()
        );
    }
}

#[test]
fn test_twin_reduction_keeps_the_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let without = ThinnessConfig::builder().with_twin_reduction(false).build();
    for _ in 0..10 {
        let mut g = generators::random_gnp(7, 0.5, &mut rng).unwrap();
        // Give vertex 0 a true twin in vertex 7.
        let mut h = Graph::new(8).unwrap();
        for (u, v) in g.edges() {
            h.add_edge(u, v).unwrap();
        }
        for w in g.neighbors(0) {
            h.add_edge(7, w).unwrap();
        }
        h.add_edge(0, 7).unwrap();
        g = h;

        let reduced = calculate_thinness_with_certificate(&g, &ThinnessConfig::default()).unwrap();
        let plain = calculate_thinness_with_certificate(&g, &without).unwrap();
        assert_eq!(reduced.thinness(), plain.thinness());
        assert!(verify_solution(&g, reduced.solution()));
    }
}

#[test]
fn test_false_twin_reduction_keeps_the_value() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let without = ThinnessConfig::builder().with_twin_reduction(false).build();
    for _ in 0..10 {
        let g = generators::random_gnp(6, 0.5, &mut rng).unwrap();
        // Vertices 6 and 7 copy the open neighborhood of vertex 0.
        let mut h = Graph::new(8).unwrap();
        for (u, v) in g.edges() {
            h.add_edge(u, v).unwrap();
        }
        for w in g.neighbors(0) {
            h.add_edge(6, w).unwrap();
            h.add_edge(7, w).unwrap();
        }

        let reduced = calculate_thinness_with_certificate(&h, &ThinnessConfig::default()).unwrap();
        let plain = calculate_thinness_with_certificate(&h, &without).unwrap();
        assert_eq!(reduced.thinness(), plain.thinness(), "{}", h);
        assert_eq!(reduced.solution().num_vertices(), 8);
        assert!(verify_solution(&h, reduced.solution()));
    }
}

#[test]
fn test_node_limit_aborts_with_a_verified_solution() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let g = generators::random_gnp(18, 0.5, &mut rng).unwrap();
    let config = ThinnessConfig::builder()
        .with_node_limit(10)
        .with_twin_reduction(false)
        .build();
    let report = calculate_thinness_with_certificate(&g, &config).unwrap();
    assert!(matches!(
        report.termination_reason(),
        TerminationReason::Aborted(_)
    ));
    assert!(!report.is_proven_optimal());
    assert!(report.thinness() <= report.seed_thinness());
    assert!(verify_solution(&g, report.solution()));
}

#[test]
fn test_generous_time_limit_does_not_interfere() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    let g = generators::cycle(6).unwrap();
    let config = ThinnessConfig::builder()
        .with_time_limit(Duration::from_secs(600))
        .with_progress_logging(true)
        .build();
    let report = calculate_thinness_with_certificate(&g, &config).unwrap();
    assert!(report.is_proven_optimal());
    assert_eq!(report.thinness(), 2);
}

#[test]
fn test_upper_bound_below_the_thinness() {
    let g = generators::matching_complement(3).unwrap();
    let config = ThinnessConfig::builder().with_upper_bound(2).build();
    let report = calculate_thinness_with_certificate(&g, &config).unwrap();
    assert_eq!(
        report.termination_reason(),
        &TerminationReason::InfeasibilityProven
    );
    assert!(verify_solution(&g, report.solution()));
}

#[test]
fn test_invalid_bounds_are_rejected() {
    let g = generators::path(4).unwrap();
    for (lower, upper) in [(0, 3), (3, 2), (1, 5)] {
        let config = ThinnessConfig::builder()
            .with_lower_bound(lower)
            .with_upper_bound(upper)
            .build();
        assert_eq!(
            calculate_thinness(&g, &config),
            Err(ThinnessError::InvalidBounds {
                lower,
                upper,
                max: 4
            })
        );
    }
    assert_eq!(
        calculate_thinness(&Graph::new(0).unwrap(), &ThinnessConfig::default()),
        Err(ThinnessError::EmptyGraph)
    );
}

#[test]
fn test_graph6_catalogue_entry() {
    let g = graph6::decode(r"J?AADI\x\z_").unwrap();
    assert_eq!(g.num_vertices(), 11);
    let report = calculate_thinness_with_certificate(&g, &ThinnessConfig::default()).unwrap();
    assert!(report.is_proven_optimal());
    assert!(verify_solution(&g, report.solution()));
    assert_eq!(
        thinness_of_order(&g, report.solution().order()).unwrap(),
        report.thinness()
    );
}
