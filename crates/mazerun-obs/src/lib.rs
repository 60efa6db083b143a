//! Ray-marched distance sensors for Mazerun agents.
//!
//! A [`SensorCaster`] turns an agent position into a
//! [`SensorReading`](mazerun_core::SensorReading): eight rays, 45° apart,
//! each marched outward in unit pixel steps until it leaves the maze or
//! meets a wall. The reading is the only thing a controller ever sees of
//! the maze.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod caster;

pub use caster::{SensorCaster, RAY_DIRECTIONS};
