//! Intra-route 2-opt segment reversal.
//!
//! # Algorithm
//!
//! For each route, considers interior edge pairs `(i, i+1)` and `(k, k+1)`
//! with `k >= i + 2` over the customer sequence `s` and computes
//!
//! ```text
//! delta = d(s[i], s[k]) + d(s[i+1], s[k+1]) - d(s[i], s[i+1]) - d(s[k], s[k+1])
//! ```
//!
//! Reversing the segment `s[i+1..=k]` replaces the two old edges with the
//! two new ones. An improving reversal (`delta < 0`) is accepted with
//! probability `p_improve`, any other with `p_worsen`. An accepted reversal
//! applies only if the reversed route stays feasible and both boundary
//! descriptors `(s[i+1], i+1)` and `(s[k], k)` are absent from the two-opt
//! and global tabu memories; once a reversal applies, the scan advances to
//! the next route.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::Rng;

use crate::models::{Instance, Move, Operator, Solution};

/// One 2-opt pass over every route.
///
/// Mutates the solution in place, applying at most one accepted non-tabu
/// reversal per route and recording both boundary descriptors of each
/// applied reversal in the two-opt tabu memory. Call
/// [`Solution::evaluate`] afterwards to refresh the objective.
pub fn two_opt<R: Rng>(
    solution: &mut Solution,
    instance: &Instance,
    p_improve: f64,
    p_worsen: f64,
    rng: &mut R,
) {
    'routes: for idx in 0..solution.num_routes() {
        let route = solution.routes()[idx].clone();
        let seq = route.sequence();
        let n = seq.len();
        if n < 4 {
            continue;
        }

        for i in 0..n - 3 {
            for k in (i + 2)..(n - 1) {
                let delta = instance.distance(seq[i], seq[k])
                    + instance.distance(seq[i + 1], seq[k + 1])
                    - instance.distance(seq[i], seq[i + 1])
                    - instance.distance(seq[k], seq[k + 1]);

                let improving = delta < 0.0 && rng.random::<f64>() < p_improve;
                let worsening = delta >= 0.0 && rng.random::<f64>() < p_worsen;
                if !(improving || worsening) {
                    continue;
                }

                let mv_head = Move::new(seq[i + 1], i + 1);
                let mv_tail = Move::new(seq[k], k);
                if solution.is_tabu(Operator::TwoOpt, &mv_head)
                    || solution.is_tabu(Operator::TwoOpt, &mv_tail)
                {
                    continue;
                }

                let mut candidate = route.clone();
                candidate.reverse_segment(i + 1, k);
                candidate.recompute(instance);
                if !candidate.is_valid() {
                    continue;
                }

                solution.record_tabu(Operator::TwoOpt, mv_head);
                solution.record_tabu(Operator::TwoOpt, mv_tail);
                tracing::debug!(route = idx, from = i + 1, to = k, delta, "2-opt applied");
                solution.routes_mut()[idx] = candidate;
                continue 'routes;
            }
        }
    }
}
