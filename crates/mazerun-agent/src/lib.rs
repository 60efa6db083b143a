//! Maze-dwelling agents for Mazerun.
//!
//! An [`Agent`] is a circle of fixed radius moving through a shared,
//! read-only [`Maze`](mazerun_space::Maze) in fixed-size axis steps. Each
//! step is chosen by arg-max over a controller's four scores and is only
//! committed when the destination circle is clear of walls.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod decision;

pub use agent::{Agent, AgentConfig, Movement};
pub use decision::{select_direction, DECISION_LEN};
