//! Randomized Clarke-Wright savings construction.
//!
//! # Algorithm
//!
//! Starts with one route per customer (0 → c → 0). Each round scans every
//! unordered pair of current routes and computes the distance saved by
//! concatenating them. A pair becomes the round's candidate when its gain
//! strictly exceeds the best accepted gain so far *and* a Bernoulli trial
//! with probability `p` succeeds at that moment; the candidate's routes are
//! then removed and their concatenation appended. The loop stops when a
//! round accepts no pair.
//!
//! With `p = 1` every strictly-better pair is accepted, which is the
//! deterministic greedy savings algorithm; `p < 1` randomizes which merge
//! wins each round, diversifying restarts.
//!
//! # Complexity
//!
//! O(r² × n) per round where r = current routes; O(n³) overall.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4),
//! 568-581.

use rand::Rng;

use crate::models::{Instance, Route, Solution};

/// Builds a solution by randomized savings merging.
///
/// Replaces `solution`'s routes with one trivial tour per customer, then
/// repeatedly applies the best accepted feasible merge. Returns the final
/// objective, or `-1.0` if the result is invalid (e.g. the vehicle limit
/// cannot be met).
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use vrp_tabu::constructive::savings;
/// use vrp_tabu::models::{Instance, Solution};
///
/// let instance = Instance::new(
///     vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
///     vec![0.0, 10.0, 10.0, 10.0],
///     30.0,
///     5,
/// )
/// .unwrap();
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let mut solution = Solution::new();
/// let objective = savings(&mut solution, &instance, 1.0, &mut rng);
/// assert_eq!(solution.num_routes(), 1);
/// assert!((objective - 6.0).abs() < 1e-10); // 0->1->2->3->0
/// ```
pub fn savings<R: Rng>(
    solution: &mut Solution,
    instance: &Instance,
    p: f64,
    rng: &mut R,
) -> f64 {
    solution.build_trivial(instance);

    loop {
        let mut best_gain = 0.0;
        let mut best_pair: Option<(usize, usize)> = None;

        for a in 0..solution.num_routes() {
            for b in (a + 1)..solution.num_routes() {
                let gain = solution.merge_gain(instance, a, b);
                if gain > best_gain && rng.random::<f64>() < p {
                    best_gain = gain;
                    best_pair = Some((a, b));
                }
            }
        }

        let Some((a, b)) = best_pair else { break };

        let merged = Route::new(
            [solution.routes()[a].sequence(), solution.routes()[b].sequence()].concat(),
        );
        let routes = solution.routes_mut();
        // b > a, so removing b first keeps a stable.
        routes.remove(b);
        routes.remove(a);
        routes.push(merged);
        solution.evaluate(instance);
        tracing::debug!(
            gain = best_gain,
            routes = solution.num_routes(),
            "applied savings merge"
        );
    }

    solution.evaluate(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_instance(capacity: f64) -> Instance {
        Instance::new(
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
            vec![0.0, 10.0, 10.0, 10.0],
            capacity,
            5,
        )
        .expect("valid")
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
    fn test_greedy_merges_line_into_one_route() {
        let instance = line_instance(30.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut solution = Solution::new();
        let objective = savings(&mut solution, &instance, 1.0, &mut rng);
        assert_eq!(solution.num_routes(), 1);
        assert!((objective - 6.0).abs() < 1e-10);
        assert_partition(&solution, 3);
    }

    #[test]
    fn test_capacity_splits_routes() {
        let instance = line_instance(20.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut solution = Solution::new();
        let objective = savings(&mut solution, &instance, 1.0, &mut rng);
        // At most two customers fit per vehicle.
        assert!(solution.num_routes() >= 2);
        assert!(objective > 0.0);
        for route in solution.routes() {
            assert!(route.total_quantity() <= 20.0);
        }
        assert_partition(&solution, 3);
    }

    #[test]
    fn test_single_customer_no_merge() {
        let instance = Instance::new(
            vec![(0.0, 0.0), (3.0, 4.0)],
            vec![0.0, 10.0],
            100.0,
            5,
        )
        .expect("valid");
        let mut rng = StdRng::seed_from_u64(42);
        let mut solution = Solution::new();
        let objective = savings(&mut solution, &instance, 1.0, &mut rng);
        assert_eq!(solution.num_routes(), 1);
        assert_eq!(solution.routes()[0].sequence(), &[1]);
        // 2 * d(0, 1)
        assert!((objective - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_probability_keeps_trivial_solution() {
        let instance = line_instance(30.0);
        let mut rng = StdRng::seed_from_u64(42);
        let mut solution = Solution::new();
        let objective = savings(&mut solution, &instance, 0.0, &mut rng);
        assert_eq!(solution.num_routes(), 3);
        assert!((objective - 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let instance = line_instance(20.0);
        let mut first = Solution::new();
        let mut second = Solution::new();
        let obj_a = savings(&mut first, &instance, 0.5, &mut StdRng::seed_from_u64(9));
        let obj_b = savings(&mut second, &instance, 0.5, &mut StdRng::seed_from_u64(9));
        assert_eq!(obj_a, obj_b);
        let seqs_a: Vec<_> = first.routes().iter().map(|r| r.sequence().to_vec()).collect();
        let seqs_b: Vec<_> = second.routes().iter().map(|r| r.sequence().to_vec()).collect();
        assert_eq!(seqs_a, seqs_b);
    }

    #[test]
    fn test_time_window_variant_limits_merges() {
        // Service times make the full merge exceed the depot due time.
        let instance = Instance::new(
            vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)],
            vec![0.0, 10.0, 10.0, 10.0],
            100.0,
            5,
        )
        .expect("valid")
        .with_time_windows(10.0, vec![0.0, 3.0, 3.0, 3.0])
        .expect("valid");

        let mut rng = StdRng::seed_from_u64(42);
        let mut solution = Solution::new();
        savings(&mut solution, &instance, 1.0, &mut rng);
        // A single route over all three would need 3 + 9 = 12 > 10.
        assert!(solution.num_routes() >= 2);
        for route in solution.routes() {
            assert!(route.total_service_time() <= 10.0 + 1e-10);
        }
        assert_partition(&solution, 3);
    }
}
