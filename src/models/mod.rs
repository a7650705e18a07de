//! Domain model types for the savings/tabu VRP engine.
//!
//! Provides the immutable problem data ([`Instance`]), routes as ordered
//! customer sequences with derived totals ([`Route`]), complete solutions
//! owning their routes and tabu memories ([`Solution`]), and the tabu
//! memory primitives ([`Move`], [`TabuList`]).

mod instance;
mod route;
mod solution;
mod tabu;

pub use instance::Instance;
pub use route::Route;
pub use solution::Solution;
pub use tabu::{Move, Operator, TabuList};
