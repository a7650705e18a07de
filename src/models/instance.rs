//! Immutable problem data.

use crate::distance::DistanceMatrix;
use crate::error::InstanceError;

/// Time-window data for the route-duration variant.
///
/// When present, a route is only valid if its accumulated service time
/// (travel plus per-customer service) does not exceed the depot's due time.
#[derive(Debug, Clone)]
struct TimeWindows {
    depot_due: f64,
    service_times: Vec<f64>,
}

/// Immutable data for one capacitated VRP instance.
///
/// Index 0 is the depot; customers are `1..=num_customers`. Coordinates,
/// demands, and the pairwise distance matrix are indexed alike. Built once
/// from loader-supplied data and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use vrp_tabu::models::Instance;
///
/// let instance = Instance::new(
///     vec![(0.0, 0.0), (3.0, 4.0)],
///     vec![0.0, 10.0],
///     100.0,
///     5,
/// )
/// .unwrap();
/// assert_eq!(instance.num_customers(), 1);
/// assert!((instance.distance(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    coordinates: Vec<(f64, f64)>,
    demands: Vec<f64>,
    capacity: f64,
    max_vehicles: usize,
    time_windows: Option<TimeWindows>,
    distances: DistanceMatrix,
}

impl Instance {
    /// Creates an instance, deriving the Euclidean distance matrix from
    /// the coordinates.
    ///
    /// `coordinates[0]` and `demands[0]` describe the depot; the depot's
    /// demand is conventionally zero but is never read by the solver.
    pub fn new(
        coordinates: Vec<(f64, f64)>,
        demands: Vec<f64>,
        capacity: f64,
        max_vehicles: usize,
    ) -> Result<Self, InstanceError> {
        let distances = DistanceMatrix::from_points(&coordinates);
        Self::with_matrix(coordinates, demands, capacity, max_vehicles, distances)
    }

    /// Creates an instance from a precomputed distance matrix.
    ///
    /// The matrix must cover every location, be symmetric, and have a zero
    /// diagonal; anything else is loader data gone wrong and is rejected
    /// with the matching [`InstanceError`].
    pub fn with_matrix(
        coordinates: Vec<(f64, f64)>,
        demands: Vec<f64>,
        capacity: f64,
        max_vehicles: usize,
        distances: DistanceMatrix,
    ) -> Result<Self, InstanceError> {
        if coordinates.is_empty() {
            return Err(InstanceError::Empty);
        }
        if demands.len() != coordinates.len() {
            return Err(InstanceError::DemandLengthMismatch {
                expected: coordinates.len(),
                actual: demands.len(),
            });
        }
        if distances.size() != coordinates.len() {
            return Err(InstanceError::MatrixSizeMismatch {
                expected: coordinates.len(),
                actual: distances.size(),
            });
        }
        if let Some((i, j)) = distances.first_asymmetry(1e-9) {
            return Err(InstanceError::AsymmetricMatrix { i, j });
        }
        if let Some(i) = distances.first_nonzero_diagonal(1e-9) {
            return Err(InstanceError::NonzeroDiagonal { i });
        }
        Ok(Self {
            coordinates,
            demands,
            capacity,
            max_vehicles,
            time_windows: None,
            distances,
        })
    }

    /// Enables the time-window variant.
    ///
    /// `depot_due` is the depot's latest return time; `service_times` gives
    /// the per-location service duration, indexed like the coordinates.
    pub fn with_time_windows(
        mut self,
        depot_due: f64,
        service_times: Vec<f64>,
    ) -> Result<Self, InstanceError> {
        if service_times.len() != self.coordinates.len() {
            return Err(InstanceError::ServiceTimeLengthMismatch {
                expected: self.coordinates.len(),
                actual: service_times.len(),
            });
        }
        self.time_windows = Some(TimeWindows {
            depot_due,
            service_times,
        });
        Ok(self)
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.coordinates.len() - 1
    }

    /// Travel distance between locations `i` and `j`. O(1).
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances.get(i, j)
    }

    /// Demand at location `i`.
    pub fn demand(&self, i: usize) -> f64 {
        self.demands[i]
    }

    /// Vehicle load capacity (homogeneous fleet).
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Maximum number of vehicles a valid solution may use.
    pub fn max_vehicles(&self) -> usize {
        self.max_vehicles
    }

    /// Coordinates of location `i`.
    pub fn coordinate(&self, i: usize) -> (f64, f64) {
        self.coordinates[i]
    }

    /// Returns `true` if the time-window variant is active.
    pub fn has_time_windows(&self) -> bool {
        self.time_windows.is_some()
    }

    /// Service duration at location `i`; zero when the time-window variant
    /// is off.
    pub fn service_time(&self, i: usize) -> f64 {
        self.time_windows
            .as_ref()
            .map_or(0.0, |tw| tw.service_times[i])
    }

    /// The depot's latest return time, if the time-window variant is on.
    pub fn depot_due(&self) -> Option<f64> {
        self.time_windows.as_ref().map(|tw| tw.depot_due)
    }
}
