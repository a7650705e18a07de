//! Solution: an ordered set of routes plus tabu memories.

use std::fmt;

use crate::models::{Instance, Move, Operator, Route, TabuList};

/// A complete solution to a VRP instance.
///
/// Owns its routes and the tabu memories that guide local search over them
/// for its entire lifetime; operators mutate routes in place by index. A
/// valid solution partitions the customers: every customer appears in
/// exactly one route exactly once.
///
/// # Examples
///
/// ```
/// use vrp_tabu::models::{Instance, Solution};
///
/// let instance = Instance::new(
///     vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
///     vec![0.0, 10.0, 10.0],
///     30.0,
///     5,
/// )
/// .unwrap();
///
/// let mut solution = Solution::new();
/// let objective = solution.build_trivial(&instance);
/// assert_eq!(solution.num_routes(), 2);
/// assert!((objective - 6.0).abs() < 1e-10); // 2*1 + 2*2
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solution {
    routes: Vec<Route>,
    objective: f64,
    is_valid: bool,
    relocate_tabu: TabuList,
    exchange_tabu: TabuList,
    two_opt_tabu: TabuList,
    global_tabu: TabuList,
}

impl Solution {
    /// Creates an empty solution with empty tabu memories.
    pub fn new() -> Self {
        Self::default()
    }

    /// The routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Mutable access to the routes, for operators that splice or replace
    /// them in place. Callers must re-[`evaluate`](Solution::evaluate)
    /// after structural changes.
    pub fn routes_mut(&mut self) -> &mut Vec<Route> {
        &mut self.routes
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Sum of route distances, as of the last
    /// [`evaluate`](Solution::evaluate). Kept even when the solution is
    /// invalid; `evaluate`'s return value carries the `-1.0` sentinel.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Whether every route is valid and the vehicle limit holds, as of the
    /// last [`evaluate`](Solution::evaluate).
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Recomputes every route and sums their distances into the objective.
    ///
    /// Returns the objective, or `-1.0` if any route is invalid or more
    /// than `max_vehicles` routes are in use.
    pub fn evaluate(&mut self, instance: &Instance) -> f64 {
        self.objective = 0.0;
        for route in &mut self.routes {
            route.recompute(instance);
            self.objective += route.total_distance();
        }
        self.is_valid = self.routes.iter().all(Route::is_valid)
            && self.routes.len() <= instance.max_vehicles();
        if self.is_valid {
            self.objective
        } else {
            -1.0
        }
    }

    /// Replaces the routes with one singleton tour `0->c->0` per customer,
    /// in customer-index order, and evaluates.
    pub fn build_trivial(&mut self, instance: &Instance) -> f64 {
        self.routes = (1..=instance.num_customers())
            .map(|c| Route::new(vec![c]))
            .collect();
        self.evaluate(instance)
    }

    /// Savings from concatenating routes `a` and `b` (by index).
    ///
    /// Positive when the merged route is feasible and shorter than the two
    /// routes run separately; `-1.0` when the merge would violate a
    /// constraint. Symmetric in `a` and `b`. Both routes' totals must be
    /// current (i.e. [`evaluate`](Solution::evaluate) has run since the
    /// last structural change).
    pub fn merge_gain(&self, instance: &Instance, a: usize, b: usize) -> f64 {
        let mut candidate =
            Route::new([self.routes[a].sequence(), self.routes[b].sequence()].concat());
        candidate.recompute(instance);
        if candidate.is_valid() {
            self.routes[a].total_distance() + self.routes[b].total_distance()
                - candidate.total_distance()
        } else {
            -1.0
        }
    }

    /// An operator's short-term tabu memory.
    pub fn tabu(&self, op: Operator) -> &TabuList {
        match op {
            Operator::Relocate => &self.relocate_tabu,
            Operator::Exchange => &self.exchange_tabu,
            Operator::TwoOpt => &self.two_opt_tabu,
        }
    }

    /// The long-term tabu memory, populated only by explicit promotion.
    pub fn global_tabu(&self) -> &TabuList {
        &self.global_tabu
    }

    /// Returns `true` if the move is in the operator's tabu memory or the
    /// global one.
    pub fn is_tabu(&self, op: Operator, mv: &Move) -> bool {
        self.tabu(op).contains(mv) || self.global_tabu.contains(mv)
    }

    /// Remembers an applied move in the operator's tabu memory.
    pub fn record_tabu(&mut self, op: Operator, mv: Move) {
        match op {
            Operator::Relocate => self.relocate_tabu.push(mv),
            Operator::Exchange => self.exchange_tabu.push(mv),
            Operator::TwoOpt => self.two_opt_tabu.push(mv),
        }
    }

    /// Trims an operator's tabu memory to at most `max` entries, oldest
    /// evicted first.
    pub fn clear_tabu(&mut self, op: Operator, max: usize) {
        match op {
            Operator::Relocate => self.relocate_tabu.clear(max),
            Operator::Exchange => self.exchange_tabu.clear(max),
            Operator::TwoOpt => self.two_opt_tabu.clear(max),
        }
    }

    /// Trims the global tabu memory to at most `max` entries.
    pub fn clear_global_tabu(&mut self, max: usize) {
        self.global_tabu.clear(max);
    }

    /// Merges an operator's current tabu entries into the global memory.
    ///
    /// Promotion is always an explicit caller action; operators never feed
    /// the global memory themselves.
    pub fn promote_to_global(&mut self, op: Operator) {
        let (source, global) = match op {
            Operator::Relocate => (&self.relocate_tabu, &mut self.global_tabu),
            Operator::Exchange => (&self.exchange_tabu, &mut self.global_tabu),
            Operator::TwoOpt => (&self.two_opt_tabu, &mut self.global_tabu),
        };
        source.merge_into(global);
    }
}

impl fmt::Display for Solution {
    /// Multi-line report: objective, validity, then per-route line,
    /// distance, and quantity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total distance: {:.5}", self.objective)?;
        writeln!(f, "Solution valid: {}", self.is_valid)?;
        writeln!(f)?;
        for (i, route) in self.routes.iter().enumerate() {
            writeln!(f, "Route #{}", i + 1)?;
            writeln!(f, "{route}")?;
            writeln!(f, "{:.2}", route.total_distance())?;
            writeln!(f, "{}", route.total_quantity())?;
        }
        Ok(())
    }
}
