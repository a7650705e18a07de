//! Inter-route customer exchange.
//!
//! # Algorithm
//!
//! For each unordered pair of distinct routes `(r, t)` and each position
//! pair `(i, j)`, swaps the customers at those positions, forming two
//! candidate routes. A swap shortening the combined distance is accepted
//! with probability `p_improve`, a lengthening one with `p_worsen`; both
//! branches require both candidates to stay feasible. The two descriptors
//! `(r[i], j)` and `(t[j], i)` must both be absent from the exchange and
//! global tabu memories; once a swap applies, the scan advances to the next
//! route pair.

use rand::Rng;

use crate::models::{Instance, Move, Operator, Route, Solution};

/// One exchange pass over every unordered pair of routes.
///
/// Mutates the solution in place, applying at most one accepted non-tabu
/// swap per route pair and recording both descriptors of each applied swap
/// in the exchange tabu memory. Call [`Solution::evaluate`] afterwards to
/// refresh the objective.
pub fn exchange<R: Rng>(
    solution: &mut Solution,
    instance: &Instance,
    p_improve: f64,
    p_worsen: f64,
    rng: &mut R,
) {
    let num_routes = solution.num_routes();
    for a in 0..num_routes {
        'pairs: for b in (a + 1)..num_routes {
            let ra = solution.routes()[a].clone();
            let rb = solution.routes()[b].clone();
            let old_sum = ra.total_distance() + rb.total_distance();

            for i in 0..ra.len() {
                for j in 0..rb.len() {
                    let ca = ra.sequence()[i];
                    let cb = rb.sequence()[j];

                    let mut seq_a = ra.sequence().to_vec();
                    let mut seq_b = rb.sequence().to_vec();
                    seq_a[i] = cb;
                    seq_b[j] = ca;
                    let mut cand_a = Route::new(seq_a);
                    let mut cand_b = Route::new(seq_b);
                    cand_a.recompute(instance);
                    cand_b.recompute(instance);

                    let new_sum = cand_a.total_distance() + cand_b.total_distance();
                    let feasible = cand_a.is_valid() && cand_b.is_valid();
                    let improving =
                        new_sum < old_sum && feasible && rng.random::<f64>() < p_improve;
                    let worsening =
                        new_sum > old_sum && feasible && rng.random::<f64>() < p_worsen;
                    if !(improving || worsening) {
                        continue;
                    }

                    let mv_a = Move::new(ca, j);
                    let mv_b = Move::new(cb, i);
                    if solution.is_tabu(Operator::Exchange, &mv_a)
                        || solution.is_tabu(Operator::Exchange, &mv_b)
                    {
                        continue;
                    }
                    solution.record_tabu(Operator::Exchange, mv_a);
                    solution.record_tabu(Operator::Exchange, mv_b);
                    tracing::debug!(
                        route_a = a,
                        route_b = b,
                        customer_a = ca,
                        customer_b = cb,
                        "exchange applied"
                    );
                    solution.routes_mut()[a] = cand_a;
                    solution.routes_mut()[b] = cand_b;
                    continue 'pairs;
                }
            }
        }
    }
}
