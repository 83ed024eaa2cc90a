//! Shared test infrastructure for simulator tests.


/// Snapshot invariant checkers.
pub mod invariants;
