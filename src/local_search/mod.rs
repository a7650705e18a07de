//! Randomized, tabu-guided local search operators.
//!
//! Each operator makes a single forward scan over the solution's routes —
//! not a run to local optimum — committing at most one move per scanned
//! route (or route pair) before advancing. Acceptance is probabilistic:
//! improving moves pass a Bernoulli trial with `p_improve`, worsening moves
//! with `p_worsen`, which admits controlled uphill steps. An accepted move
//! is applied only if its descriptor is absent from both the operator's
//! short-term tabu memory and the solution's global tabu memory; applied
//! moves are recorded in the operator's memory.
//!
//! All randomness comes from the caller-supplied generator, so seeded runs
//! are reproducible. Infeasible candidates are never applied and never
//! raise; a scan that accepts nothing simply leaves the solution unchanged.
//!
//! - [`relocate`] — Intra-route customer relocation
//! - [`exchange`] — Inter-route customer swap
//! - [`two_opt`] — Intra-route segment reversal

mod exchange;
mod relocate;
mod two_opt;

pub use exchange::exchange;
pub use relocate::relocate;
pub use two_opt::two_opt;
