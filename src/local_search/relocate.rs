//! Intra-route customer relocation.
//!
//! # Algorithm
//!
//! For each route and each position `i`, removes the customer at `i` and
//! tries re-inserting it at every other position `k`. An improving,
//! feasible reinsertion is accepted with probability `p_improve`; a
//! worsening one with `p_worsen` (relocation within one route cannot change
//! its load, so no feasibility term guards the worsening branch). An
//! accepted move applies only if its descriptor `(customer, k)` is absent
//! from the relocate and global tabu memories; once a move applies, the
//! scan advances to the next route.

use rand::Rng;

use crate::models::{Instance, Move, Operator, Route, Solution};

/// One relocation pass over every route.
///
/// Mutates the solution in place, applying at most one accepted non-tabu
/// move per route and recording each applied move in the relocate tabu
/// memory. Call [`Solution::evaluate`] afterwards to refresh the objective.
pub fn relocate<R: Rng>(
    solution: &mut Solution,
    instance: &Instance,
    p_improve: f64,
    p_worsen: f64,
    rng: &mut R,
) {
    'routes: for idx in 0..solution.num_routes() {
        let route = solution.routes()[idx].clone();
        for i in 0..route.len() {
            let customer = route.sequence()[i];
            let mut rest = route.sequence().to_vec();
            rest.remove(i);

            for k in 0..route.len() {
                if k == i {
                    continue;
                }
                let mut seq = rest.clone();
                seq.insert(k, customer);
                let mut candidate = Route::new(seq);
                candidate.recompute(instance);

                let improving = candidate.total_distance() < route.total_distance()
                    && candidate.is_valid()
                    && rng.random::<f64>() < p_improve;
                let worsening = candidate.total_distance() > route.total_distance()
                    && rng.random::<f64>() < p_worsen;
                if !(improving || worsening) {
                    continue;
                }

                let mv = Move::new(customer, k);
                if solution.is_tabu(Operator::Relocate, &mv) {
                    continue;
                }
                solution.record_tabu(Operator::Relocate, mv);
                tracing::debug!(route = idx, customer, position = k, "relocate applied");
                solution.routes_mut()[idx] = candidate;
                continue 'routes;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_instance() -> Instance {
        Instance::new(
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
            vec![0.0, 10.0, 10.0, 10.0],
            30.0,
            5,
        )
        .expect("valid")
    }

    fn solution_with(instance: &Instance, seqs: &[&[usize]]) -> Solution {
        let mut solution = Solution::new();
        for seq in seqs {
            solution.routes_mut().push(Route::new(seq.to_vec()));
        }
        solution.evaluate(instance);
        solution
    }

    fn assert_partition(solution: &Solution, num_customers: usize) {
        let mut seen = vec![0usize; num_customers + 1];
        for route in solution.routes() {
            for &c in route.sequence() {
                seen[c] += 1;
            }
        }
        for c in 1..=num_customers {
            assert_eq!(seen[c], 1, "customer {c} appears {} times", seen[c]);
        }
    }

    #[test]
    fn test_improving_relocation_applied() {
        let instance = line_instance();
        // 0->2->1->3->0 = 2 + 1 + 2 + 3 = 8; reordering to [1,2,3] gives 6.
        let mut solution = solution_with(&instance, &[&[2, 1, 3]]);
        let before = solution.objective();
        let mut rng = StdRng::seed_from_u64(42);
        relocate(&mut solution, &instance, 1.0, 0.0, &mut rng);
        let after = solution.evaluate(&instance);
        assert!(after < before);
        assert_partition(&solution, 3);
        // Applied move is now tabu.
        assert_eq!(solution.tabu(Operator::Relocate).len(), 1);
    }

    #[test]
    fn test_zero_probabilities_never_move() {
        let instance = line_instance();
        let mut solution = solution_with(&instance, &[&[2, 1, 3]]);
        let before = solution.objective();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            relocate(&mut solution, &instance, 0.0, 0.0, &mut rng);
        }
        assert_eq!(solution.evaluate(&instance), before);
        assert_eq!(solution.routes()[0].sequence(), &[2, 1, 3]);
        assert!(solution.tabu(Operator::Relocate).is_empty());
    }

    #[test]
    fn test_one_move_per_route_per_pass() {
        let instance = line_instance();
        let mut solution = solution_with(&instance, &[&[3, 1, 2]]);
        let mut rng = StdRng::seed_from_u64(42);
        relocate(&mut solution, &instance, 1.0, 0.0, &mut rng);
        assert!(solution.tabu(Operator::Relocate).len() <= 1);
    }

    #[test]
    fn test_global_tabu_blocks_moves() {
        let instance = line_instance();
        let mut solution = solution_with(&instance, &[&[2, 1, 3]]);
        // Block every possible descriptor up front.
        for customer in 1..=3 {
            for position in 0..3 {
                solution.record_tabu(Operator::Relocate, Move::new(customer, position));
            }
        }
        solution.promote_to_global(Operator::Relocate);
        solution.clear_tabu(Operator::Relocate, 0);

        let before = solution.objective();
        let mut rng = StdRng::seed_from_u64(42);
        relocate(&mut solution, &instance, 1.0, 0.0, &mut rng);
        assert_eq!(solution.evaluate(&instance), before);
        assert_eq!(solution.routes()[0].sequence(), &[2, 1, 3]);
    }

    proptest! {
        #[test]
        fn prop_partition_invariant_holds(seed in 0u64..500) {
            let instance = Instance::new(
                vec![
                    (5.0, 5.0),
                    (1.0, 0.0),
                    (9.0, 2.0),
                    (3.0, 8.0),
                    (7.0, 7.0),
                    (0.0, 4.0),
                ],
                vec![0.0, 10.0, 10.0, 10.0, 10.0, 10.0],
                30.0,
                5,
            )
            .expect("valid");
            let mut solution = Solution::new();
            solution.routes_mut().push(Route::new(vec![2, 1, 5]));
            solution.routes_mut().push(Route::new(vec![4, 3]));
            solution.evaluate(&instance);

            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..5 {
                relocate(&mut solution, &instance, 0.7, 0.1, &mut rng);
                solution.evaluate(&instance);
            }
            let mut seen = vec![0usize; 6];
            for route in solution.routes() {
                for &c in route.sequence() {
                    seen[c] += 1;
                }
            }
            for c in 1..=5usize {
                prop_assert_eq!(seen[c], 1);
            }
        }
    }
}
