//! Gantry Harness: world definition, rendering, and scenario orchestration
//! around the planning engine.
//!
//! The harness does NOT implement planning logic — it delegates to
//! `gantry_search`. Worlds provide domain data only; the runner owns
//! orchestration and artifact I/O.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builder;
pub mod interactive;
pub mod render;
pub mod runner;
pub mod worlds;
