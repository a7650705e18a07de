//! Round-based search schedule.
//!
//! Drives one full run: savings construction followed by rounds of
//! relocate, exchange, and 2-opt passes, trimming each operator's tabu
//! memory to its cap after every pass. The objective is recorded after
//! construction and after every pass as `(iteration, objective)` pairs,
//! ready for tabular logging by reporting collaborators.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constructive;
use crate::local_search;
use crate::models::{Instance, Operator, Solution};

/// Parameters for one search run.
///
/// The defaults mirror a conventional schedule: greedy construction, ten
/// rounds of two relocate and two exchange passes, a short relocate memory
/// and an effectively unbounded exchange memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Bernoulli probability for accepting a savings merge (1 = greedy).
    pub savings_p: f64,
    /// Probability of accepting an improving local search move.
    pub p_improve: f64,
    /// Probability of accepting a worsening local search move.
    pub p_worsen: f64,
    /// Rounds of operator passes after construction.
    pub rounds: usize,
    /// Relocate passes per round.
    pub relocate_passes: usize,
    /// Exchange passes per round.
    pub exchange_passes: usize,
    /// Two-opt passes per round.
    pub two_opt_passes: usize,
    /// Relocate tabu memory cap, applied after each pass.
    pub relocate_tabu_cap: usize,
    /// Exchange tabu memory cap, applied after each pass.
    pub exchange_tabu_cap: usize,
    /// Two-opt tabu memory cap, applied after each pass.
    pub two_opt_tabu_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            savings_p: 1.0,
            p_improve: 0.7,
            p_worsen: 0.0001,
            rounds: 10,
            relocate_passes: 2,
            exchange_passes: 2,
            two_opt_passes: 0,
            relocate_tabu_cap: 50,
            exchange_tabu_cap: 1_000_000,
            two_opt_tabu_cap: 50,
        }
    }
}

/// The objective after one phase of the schedule.
///
/// Iteration 0 is the constructed solution; each operator pass increments
/// the index. An objective of `-1.0` marks an invalid intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// Phase index within the run.
    pub iteration: usize,
    /// Objective after the phase, or `-1.0` if invalid.
    pub objective: f64,
}

/// Result of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Objective after construction and after every operator pass.
    pub history: Vec<IterationRecord>,
    /// Lowest valid objective observed, or `-1.0` if no phase produced a
    /// valid solution.
    pub best_objective: f64,
    /// Route sequences of the best solution observed.
    pub best_routes: Vec<Vec<usize>>,
}

/// Runs one full search: construction, then `rounds` rounds of operator
/// passes per the config.
///
/// The final state of `solution` is the last-visited solution, which is
/// not necessarily the best one; the best is snapshotted in the outcome.
pub fn run<R: Rng>(
    solution: &mut Solution,
    instance: &Instance,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchOutcome {
    let mut history = Vec::new();
    let mut best_objective = -1.0;
    let mut best_routes = Vec::new();
    let mut iteration = 0;

    let objective = constructive::savings(solution, instance, config.savings_p, rng);
    tracing::debug!(objective, routes = solution.num_routes(), "construction finished");
    history.push(IterationRecord {
        iteration,
        objective,
    });
    track_best(solution, objective, &mut best_objective, &mut best_routes);

    for _ in 0..config.rounds {
        let phases = [
            (Operator::Relocate, config.relocate_passes, config.relocate_tabu_cap),
            (Operator::Exchange, config.exchange_passes, config.exchange_tabu_cap),
            (Operator::TwoOpt, config.two_opt_passes, config.two_opt_tabu_cap),
        ];
        for (op, passes, cap) in phases {
            for _ in 0..passes {
                match op {
                    Operator::Relocate => local_search::relocate(
                        solution,
                        instance,
                        config.p_improve,
                        config.p_worsen,
                        rng,
                    ),
                    Operator::Exchange => local_search::exchange(
                        solution,
                        instance,
                        config.p_improve,
                        config.p_worsen,
                        rng,
                    ),
                    Operator::TwoOpt => local_search::two_opt(
                        solution,
                        instance,
                        config.p_improve,
                        config.p_worsen,
                        rng,
                    ),
                }
                let objective = solution.evaluate(instance);
                solution.clear_tabu(op, cap);
                iteration += 1;
                tracing::debug!(iteration, objective, ?op, "pass finished");
                history.push(IterationRecord {
                    iteration,
                    objective,
                });
                track_best(solution, objective, &mut best_objective, &mut best_routes);
            }
        }
    }

    SearchOutcome {
        history,
        best_objective,
        best_routes,
    }
}

fn track_best(
    solution: &Solution,
    objective: f64,
    best_objective: &mut f64,
    best_routes: &mut Vec<Vec<usize>>,
) {
    if objective >= 0.0 && (*best_objective < 0.0 || objective < *best_objective) {
        *best_objective = objective;
        *best_routes = solution
            .routes()
            .iter()
            .map(|r| r.sequence().to_vec())
            .collect();
    }
}
