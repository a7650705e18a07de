//! # vrp-tabu
//!
//! Capacitated vehicle routing: a savings-based construction heuristic
//! followed by randomized, tabu-guided local search.
//!
//! The crate owns the solution-construction and improvement engine only.
//! Instance files, result logging, and experiment drivers are external
//! collaborators: they hand in immutable problem data and read back
//! objectives and route reports.
//!
//! ## Modules
//!
//! - [`models`] — Problem data (Instance), routes, solutions, tabu memory
//! - [`distance`] — Dense symmetric distance matrix
//! - [`constructive`] — Randomized Clarke-Wright savings construction
//! - [`local_search`] — Relocate, exchange, and 2-opt operators
//! - [`search`] — Round-based search schedule with per-iteration records
//! - [`error`] — Instance validation errors

pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod search;
