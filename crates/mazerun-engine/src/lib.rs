//! Episode loop driving Mazerun agents with external controllers.
//!
//! An [`Episode`] owns one agent per controller slot inside a borrowed,
//! freshly generated maze. Each [`step()`](Episode::step) senses, asks the
//! [`Controller`] for a decision per live agent, moves, scores, and retires
//! agents that reached the goal or ran out of steps. Fitness flows back to
//! the caller through [`TickReport`] and [`EpisodeReport`]; nothing else
//! couples the loop to the optimizer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod episode;
pub mod generation;
pub mod metrics;

pub use config::{ConfigError, EpisodeConfig, ScoringConfig};
pub use controller::{from_fn, Controller, FnController};
pub use episode::{
    AgentResult, AgentTick, Episode, EpisodeError, EpisodeReport, Outcome, TickReport,
};
pub use generation::{maze_seed, run_generation};
pub use metrics::{EpisodeMetrics, TickMetrics};
