//! Benchmark profiles and utilities for the Mazerun maze environment.
//!
//! Provides pre-built [`EpisodeConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 800x600 px maze (20x15 cells), 50 agents, 750 steps
//! - [`stress_profile`]: 1600x1200 px maze (80x60 cells of 20 px), 200 agents
//! - [`RandomController`]: seeded random scores, a stand-in for an untrained network

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mazerun_agent::{AgentConfig, DECISION_LEN};
use mazerun_core::{AgentId, SensorReading};
use mazerun_engine::{Controller, EpisodeConfig};
use mazerun_space::MazeConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Reference profile: the default 800x600 px maze with 40 px cells.
pub fn reference_profile(seed: u64) -> EpisodeConfig {
    EpisodeConfig {
        seed,
        ..EpisodeConfig::default()
    }
}

/// Stress profile: 4800 cells of 20 px and four times the population.
///
/// Agent sizing follows the smaller cells (radius 5, speed 5).
pub fn stress_profile(seed: u64) -> EpisodeConfig {
    let maze = MazeConfig {
        width: 1600,
        height: 1200,
        cell_size: 20,
    };
    EpisodeConfig {
        maze,
        agent: AgentConfig::for_cell_size(maze.cell_size),
        population: 200,
        seed,
        ..EpisodeConfig::default()
    }
}

/// Scores every direction uniformly at random from a seeded stream.
///
/// Ignores the reading. Two controllers built from the same seed produce
/// the same decisions in the same order.
pub struct RandomController {
    rng: ChaCha8Rng,
}

impl RandomController {
    /// Controller seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Controller for RandomController {
    fn decide(&mut self, _agent: AgentId, _reading: &SensorReading) -> Vec<f64> {
        (0..DECISION_LEN).map(|_| self.rng.random::<f64>()).collect()
    }
}
