//! Gantry Search: greedy best-first planning over blocks-world fact sets.
//!
//! This crate drives the graph search from a start world to a goal world.
//! It depends only on `gantry_kernel` — it does NOT depend on
//! `gantry_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! gantry_kernel   ←   gantry_search    ←   gantry_harness
//! (facts, actions)    (frontier, solve)    (builder, renderer, runner)
//! ```
//!
//! # Key types
//!
//! - [`engine::solve`] / [`engine::SolveOutcome`] — the planning entry point
//! - [`node::SearchNode`] — immutable arena node with parent-index lineage
//! - [`policy::SearchPolicy`] — priority mode and expansion budget
//! - [`plan::Plan`] — the HOLDING-filtered snapshot sequence
//! - [`report::SearchReport`] — termination reason and search counters

#![forbid(unsafe_code)]

pub mod closed;
pub mod engine;
pub mod fingerprint;
pub mod frontier;
pub mod node;
pub mod plan;
pub mod policy;
pub mod report;
