//! Gantry Kernel: the symbolic core of the blocks-world planner.
//!
//! # API Surface
//!
//! - [`entity`] -- the interned block/location universe for one run
//! - [`fact`] -- ground atoms describing one world snapshot
//! - [`action`] -- the four operator schemas and their add/delete effects
//! - [`world`] -- pure queries over a fact set (legal actions, set
//!   equality, goal distance, the per-location stack view)
//!
//! # Module Dependency Direction
//!
//! `entity` ← `fact` ← `action` ← `world`
//!
//! One-way only. No cycles. The kernel has no external dependencies and no
//! knowledge of the search layer above it.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod entity;
pub mod fact;
pub mod world;
