//! Episode configuration, validation, and error types.
//!
//! [`EpisodeConfig`] gathers every parameter of one simulated episode.
//! [`validate()`](EpisodeConfig::validate) checks structural invariants up
//! front so that the tick loop itself never has to.

use std::error::Error;
use std::fmt;

use mazerun_agent::AgentConfig;
use mazerun_core::MazeError;
use mazerun_space::MazeConfig;

// ── ScoringConfig ──────────────────────────────────────────────────

/// How per-tick fitness is shaped.
///
/// Each tick a live agent's fitness is set to
/// `progress_scale * (start_distance - distance_to_goal)`. Reaching the goal
/// then adds `win_bonus`; running out of steps subtracts `timeout_penalty`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringConfig {
    /// Multiplier on distance gained toward the goal. Default: 2.0.
    pub progress_scale: f64,
    /// Added once on reaching the goal. Default: 1000.0.
    pub win_bonus: f64,
    /// Subtracted once on timing out. Default: 100.0.
    pub timeout_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            progress_scale: 2.0,
            win_bonus: 1000.0,
            timeout_penalty: 100.0,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EpisodeConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Maze parameters describe a degenerate maze.
    Maze(MazeError),
    /// Agent radius is NaN, infinite, zero, or negative.
    InvalidRadius {
        /// The invalid value.
        value: f64,
    },
    /// Agent speed is NaN, infinite, zero, or negative.
    InvalidSpeed {
        /// The invalid value.
        value: f64,
    },
    /// No controller slots.
    EmptyPopulation,
    /// Step budget is zero.
    ZeroStepBudget,
    /// A scoring parameter is unusable.
    InvalidScoring {
        /// Which parameter and why.
        reason: String,
    },
    /// The maze handed to an episode does not match the configured one.
    MazeMismatch {
        /// What the config asked for.
        expected: MazeConfig,
        /// What the maze was built with.
        actual: MazeConfig,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => write!(f, "maze: {e}"),
            Self::InvalidRadius { value } => {
                write!(f, "agent radius must be finite and positive, got {value}")
            }
            Self::InvalidSpeed { value } => {
                write!(f, "agent speed must be finite and positive, got {value}")
            }
            Self::EmptyPopulation => write!(f, "population must be at least 1"),
            Self::ZeroStepBudget => write!(f, "max_steps must be at least 1"),
            Self::InvalidScoring { reason } => write!(f, "invalid scoring: {reason}"),
            Self::MazeMismatch { expected, actual } => write!(
                f,
                "maze is {}x{} px / {} px cells, config expects {}x{} px / {} px cells",
                actual.width,
                actual.height,
                actual.cell_size,
                expected.width,
                expected.height,
                expected.cell_size
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for ConfigError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

// ── EpisodeConfig ──────────────────────────────────────────────────

/// Everything needed to run one episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeConfig {
    /// Maze dimensions. Default: 800x600 px, 40 px cells.
    pub maze: MazeConfig,
    /// Agent size and step. Default: radius 10, speed 5.
    pub agent: AgentConfig,
    /// Number of controller slots (agents). Default: 50.
    pub population: usize,
    /// Steps each agent may take before it is retired. Default: 750.
    pub max_steps: u32,
    /// Fitness shaping.
    pub scoring: ScoringConfig,
    /// Base seed; generation `g` builds its maze from `seed ^ g`. Default: 0.
    pub seed: u64,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        let maze = MazeConfig::default();
        Self {
            agent: AgentConfig::for_cell_size(maze.cell_size),
            maze,
            population: 50,
            max_steps: 750,
            scoring: ScoringConfig::default(),
            seed: 0,
        }
    }
}

impl EpisodeConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.maze.validate()?;
        if !(self.agent.radius.is_finite() && self.agent.radius > 0.0) {
            return Err(ConfigError::InvalidRadius {
                value: self.agent.radius,
            });
        }
        if !(self.agent.speed.is_finite() && self.agent.speed > 0.0) {
            return Err(ConfigError::InvalidSpeed {
                value: self.agent.speed,
            });
        }
        if self.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_steps == 0 {
            return Err(ConfigError::ZeroStepBudget);
        }
        let s = &self.scoring;
        if !s.progress_scale.is_finite() {
            return Err(ConfigError::InvalidScoring {
                reason: format!("progress_scale must be finite, got {}", s.progress_scale),
            });
        }
        if !(s.win_bonus.is_finite() && s.win_bonus >= 0.0) {
            return Err(ConfigError::InvalidScoring {
                reason: format!("win_bonus must be finite and >= 0, got {}", s.win_bonus),
            });
        }
        if !(s.timeout_penalty.is_finite() && s.timeout_penalty >= 0.0) {
            return Err(ConfigError::InvalidScoring {
                reason: format!(
                    "timeout_penalty must be finite and >= 0, got {}",
                    s.timeout_penalty
                ),
            });
        }
        Ok(())
    }
}
