//! Property-based tests for the parallel Borůvka implementation.
//!
//! Verifies the driver against a sequential Kruskal oracle, validates
//! structural invariants of the emitted forest, and checks determinism
//! across repeated runs and scan-parallelism levels, over graph topologies
//! with varied weight distributions.

mod determinism;
mod equivalence;
mod helpers;
mod structural;
mod types;
