//! Route type: an ordered customer sequence with derived totals.

use std::fmt;

use crate::models::Instance;

/// An ordered sequence of customers served by a single vehicle.
///
/// The depot is implicit at both ends of the sequence. The derived totals
/// (distance, quantity, service time) and the validity flag are stale until
/// [`recompute`](Route::recompute) runs; `recompute` is the sole mutator of
/// derived state and must follow every structural change (append, splice,
/// reversal) before the totals are read.
///
/// # Examples
///
/// ```
/// use vrp_tabu::models::{Instance, Route};
///
/// let instance = Instance::new(
///     vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)],
///     vec![0.0, 10.0, 10.0],
///     30.0,
///     5,
/// )
/// .unwrap();
///
/// let mut route = Route::new(vec![1, 2]);
/// route.recompute(&instance);
/// assert!((route.total_distance() - 4.0).abs() < 1e-10);
/// assert_eq!(route.total_quantity(), 20.0);
/// assert!(route.is_valid());
/// assert_eq!(route.to_string(), "0->1->2->0");
/// ```
#[derive(Debug, Clone)]
pub struct Route {
    sequence: Vec<usize>,
    total_distance: f64,
    total_quantity: f64,
    total_service_time: f64,
    is_valid: bool,
}

impl Route {
    /// Creates a route over the given customer sequence.
    ///
    /// Derived totals start stale; call [`recompute`](Route::recompute)
    /// before reading them.
    pub fn new(sequence: Vec<usize>) -> Self {
        Self {
            sequence,
            total_distance: 0.0,
            total_quantity: 0.0,
            total_service_time: 0.0,
            is_valid: false,
        }
    }

    /// The customer sequence (depot excluded).
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Number of customers on this route.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns `true` if this route serves no customers.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Total distance, as of the last [`recompute`](Route::recompute).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total demand served, as of the last [`recompute`](Route::recompute).
    pub fn total_quantity(&self) -> f64 {
        self.total_quantity
    }

    /// Accumulated travel plus service time, as of the last
    /// [`recompute`](Route::recompute). Only meaningful when the instance
    /// carries time-window data.
    pub fn total_service_time(&self) -> f64 {
        self.total_service_time
    }

    /// Whether this route satisfies the capacity (and, in the time-window
    /// variant, depot due time) constraint, as of the last
    /// [`recompute`](Route::recompute).
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Reverses `sequence[from..=to]` in place.
    ///
    /// Derived totals are stale afterwards.
    pub fn reverse_segment(&mut self, from: usize, to: usize) {
        self.sequence[from..=to].reverse();
    }

    /// Recomputes the derived totals and the validity flag.
    ///
    /// Walks the sequence from the depot, accumulating distance, quantity,
    /// and service time, then closes the loop back to the depot. Validity
    /// is `quantity <= capacity`, plus `service_time <= depot due` when the
    /// instance carries time windows.
    pub fn recompute(&mut self, instance: &Instance) {
        self.total_distance = 0.0;
        self.total_quantity = 0.0;
        self.total_service_time = 0.0;
        let mut prev = 0;
        for &c in &self.sequence {
            let leg = instance.distance(prev, c);
            self.total_distance += leg;
            self.total_quantity += instance.demand(c);
            self.total_service_time += leg + instance.service_time(c);
            prev = c;
        }
        self.total_distance += instance.distance(prev, 0);
        self.is_valid = self.total_quantity <= instance.capacity()
            && instance
                .depot_due()
                .is_none_or(|due| self.total_service_time <= due);
    }
}

impl fmt::Display for Route {
    /// Formats the route as `0->c1->c2->...->0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0")?;
        for c in &self.sequence {
            write!(f, "->{c}")?;
        }
        write!(f, "->0")
    }
}
