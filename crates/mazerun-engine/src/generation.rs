//! Per-generation entry point: fresh maze, one episode, fitness out.

use mazerun_core::GenerationId;
use mazerun_space::Maze;

use crate::config::{ConfigError, EpisodeConfig};
use crate::controller::Controller;
use crate::episode::{Episode, EpisodeError, EpisodeReport};

/// Seed used for generation `generation`'s maze.
///
/// Every generation gets a different maze from the same base seed, and the
/// same `(seed, generation)` pair always reproduces it.
pub fn maze_seed(seed: u64, generation: GenerationId) -> u64 {
    seed ^ generation.0
}

/// Generate the maze for `generation` and run one full episode in it.
///
/// The controller is consulted once per live agent per tick until every
/// agent has won or timed out. The returned report holds one fitness value
/// per controller slot, in id order.
pub fn run_generation<C: Controller + ?Sized>(
    config: &EpisodeConfig,
    generation: GenerationId,
    controller: &mut C,
) -> Result<EpisodeReport, EpisodeError> {
    config.validate()?;
    let maze = Maze::generate_seeded(config.maze, maze_seed(config.seed, generation))
        .map_err(ConfigError::from)?;
    let mut episode = Episode::new(&maze, config, generation)?;
    episode.run(controller)
}
