//! One simulated episode: a population of agents in a single maze.
//!
//! [`Episode`] is the tick loop. Each [`step()`](Episode::step) runs in
//! three phases:
//!
//! 1. **Sense and decide.** Every live agent casts its rays and the
//!    controller scores it. All decision vectors are validated before any
//!    agent moves, so a malformed vector fails the tick without partial
//!    effects.
//! 2. **Move, score, mark.** Each agent moves independently, its shaped
//!    fitness is updated, and agents at the goal or out of steps are
//!    marked retired.
//! 3. **Compact.** Marked agents leave the live set in one pass.
//!
//! No agent reads another's state, and retirement is mark-then-compact, so
//! the order agents are visited in never changes anyone's fitness.
//!
//! # Ownership
//!
//! The maze is borrowed for the episode's lifetime and shared read-only by
//! every agent. A new episode needs a new maze.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use mazerun_agent::{select_direction, Agent, Movement};
use mazerun_core::{AgentId, DecisionError, GenerationId, SensorReading, TickId};
use mazerun_space::Maze;

use crate::config::{ConfigError, EpisodeConfig, ScoringConfig};
use crate::controller::Controller;
use crate::metrics::{EpisodeMetrics, TickMetrics};

// ── Outcome ─────────────────────────────────────────────────────

/// Why an agent left the live set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Reached the goal on this tick.
    Won {
        /// Tick of arrival.
        tick: TickId,
    },
    /// Used up its step budget on this tick without reaching the goal.
    TimedOut {
        /// Tick of retirement.
        tick: TickId,
    },
}

impl Outcome {
    /// Tick the agent retired on.
    pub fn tick(self) -> TickId {
        match self {
            Outcome::Won { tick } | Outcome::TimedOut { tick } => tick,
        }
    }

    /// Whether this is a win.
    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Won { .. })
    }
}

// ── Reports ─────────────────────────────────────────────────────

/// What happened to one agent during one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentTick {
    /// Which agent.
    pub agent: AgentId,
    /// The reading the controller was given.
    pub reading: SensorReading,
    /// The step attempted and whether it was committed.
    pub movement: Movement,
    /// Position after the step.
    pub position: (f64, f64),
    /// Change in fitness over this tick, bonus or penalty included.
    pub fitness_delta: f64,
    /// Fitness after this tick.
    pub fitness: f64,
    /// Win flag after this tick.
    pub won: bool,
    /// Set if the agent retired on this tick.
    pub outcome: Option<Outcome>,
}

/// Result of a successful [`Episode::step()`] call.
#[derive(Clone, Debug)]
pub struct TickReport {
    /// The tick just executed.
    pub tick: TickId,
    /// One entry per agent that was live at the start of the tick, in id order.
    pub agents: Vec<AgentTick>,
    /// Agents still live after the tick.
    pub live_remaining: usize,
    /// Timing for this tick.
    pub metrics: TickMetrics,
}

/// Final (or current) standing of one agent.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentResult {
    /// Which agent.
    pub agent: AgentId,
    /// Fitness to report to the optimizer.
    pub fitness: f64,
    /// `None` while the agent is still live.
    pub outcome: Option<Outcome>,
    /// Steps taken.
    pub steps: u32,
    /// Last position.
    pub position: (f64, f64),
}

/// Summary of an episode, indexed by agent id.
#[derive(Clone, Debug)]
pub struct EpisodeReport {
    /// Generation this episode belonged to.
    pub generation: GenerationId,
    /// Ticks executed.
    pub ticks: TickId,
    /// Per-agent results; `results[i].agent == AgentId(i)`.
    pub results: Vec<AgentResult>,
    /// Accumulated counters.
    pub metrics: EpisodeMetrics,
}

impl EpisodeReport {
    /// Fitness per agent, in id order.
    pub fn fitness(&self) -> Vec<f64> {
        self.results.iter().map(|r| r.fitness).collect()
    }

    /// Number of agents that reached the goal.
    pub fn winners(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.is_some_and(Outcome::is_win))
            .count()
    }

    /// The agent with the highest fitness (lowest id on ties).
    pub fn best(&self) -> Option<&AgentResult> {
        self.results.iter().fold(None, |best, r| match best {
            Some(b) if b.fitness >= r.fitness => Some(b),
            _ => Some(r),
        })
    }
}

// ── EpisodeError ────────────────────────────────────────────────

/// Errors from [`Episode`] construction and stepping.
#[derive(Clone, Debug, PartialEq)]
pub enum EpisodeError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// The controller returned an unusable decision vector. The tick was
    /// not applied.
    Decision {
        /// Agent the vector was for.
        agent: AgentId,
        /// Tick that was attempted.
        tick: TickId,
        /// What was wrong with it.
        source: DecisionError,
    },
    /// Every agent has already retired.
    Finished,
}

impl fmt::Display for EpisodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Decision {
                agent,
                tick,
                source,
            } => write!(f, "agent {agent} at tick {tick}: {source}"),
            Self::Finished => write!(f, "episode already finished"),
        }
    }
}

impl Error for EpisodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Decision { source, .. } => Some(source),
            Self::Finished => None,
        }
    }
}

impl From<ConfigError> for EpisodeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ── Episode ─────────────────────────────────────────────────────

/// A population of agents running through one maze.
///
/// # Example
///
/// ```ignore
/// let maze = Maze::generate_seeded(config.maze, seed)?;
/// let mut episode = Episode::new(&maze, &config, GenerationId(0))?;
/// let report = episode.run(&mut controller)?;
/// optimizer.assign(report.fitness());
/// ```
pub struct Episode<'m> {
    maze: &'m Maze,
    generation: GenerationId,
    scoring: ScoringConfig,
    max_steps: u32,
    agents: Vec<Agent<'m>>,
    outcomes: Vec<Option<Outcome>>,
    live: Vec<usize>,
    goal: (f64, f64),
    start_distance: f64,
    tick: TickId,
    metrics: EpisodeMetrics,
}

impl<'m> Episode<'m> {
    /// Spawn `config.population` agents at the maze's start.
    ///
    /// `maze` must have been built from `config.maze`.
    pub fn new(
        maze: &'m Maze,
        config: &EpisodeConfig,
        generation: GenerationId,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if maze.config() != config.maze {
            return Err(ConfigError::MazeMismatch {
                expected: config.maze,
                actual: maze.config(),
            });
        }

        let agents: Vec<Agent<'m>> = (0..config.population)
            .map(|i| Agent::new(AgentId(i as u32), maze, config.agent))
            .collect();
        let goal = maze.goal_position();
        let (sx, sy) = maze.start_position();
        let start_distance = (sx - goal.0).hypot(sy - goal.1);

        tracing::debug!(
            %generation,
            population = agents.len(),
            max_steps = config.max_steps,
            start_distance,
            "episode started"
        );

        Ok(Self {
            maze,
            generation,
            scoring: config.scoring,
            max_steps: config.max_steps,
            outcomes: vec![None; agents.len()],
            live: (0..agents.len()).collect(),
            agents,
            goal,
            start_distance,
            tick: TickId(0),
            metrics: EpisodeMetrics::default(),
        })
    }

    /// The shared maze.
    pub fn maze(&self) -> &'m Maze {
        self.maze
    }

    /// Generation this episode belongs to.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// Ticks executed so far.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Distance from spawn to goal, the baseline for progress scoring.
    pub fn start_distance(&self) -> f64 {
        self.start_distance
    }

    /// Every agent, live or retired, indexed by id.
    pub fn agents(&self) -> &[Agent<'m>] {
        &self.agents
    }

    /// One agent by id.
    pub fn agent(&self, id: AgentId) -> Option<&Agent<'m>> {
        self.agents.get(id.index())
    }

    /// Retirement record for `id`, `None` while live.
    pub fn outcome(&self, id: AgentId) -> Option<Outcome> {
        self.outcomes.get(id.index()).copied().flatten()
    }

    /// Agents still running, in id order.
    pub fn live_agents(&self) -> impl Iterator<Item = &Agent<'m>> + '_ {
        self.live.iter().map(move |&i| &self.agents[i])
    }

    /// Number of agents still running.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Whether every agent has retired.
    pub fn is_finished(&self) -> bool {
        self.live.is_empty()
    }

    /// Cumulative counters.
    pub fn metrics(&self) -> &EpisodeMetrics {
        &self.metrics
    }

    /// Execute one tick for every live agent.
    ///
    /// # Errors
    ///
    /// [`EpisodeError::Finished`] if no agent is live.
    /// [`EpisodeError::Decision`] if the controller returns a malformed
    /// vector for any agent; no agent moves and the tick counter does not
    /// advance.
    pub fn step<C: Controller + ?Sized>(
        &mut self,
        controller: &mut C,
    ) -> Result<TickReport, EpisodeError> {
        if self.is_finished() {
            return Err(EpisodeError::Finished);
        }
        let tick_start = Instant::now();
        let tick = TickId(self.tick.0 + 1);
        let live_agents = self.live.len();

        // Phase 1: sense and decide.
        let sense_start = Instant::now();
        let readings: Vec<SensorReading> =
            self.live.iter().map(|&i| self.agents[i].sense()).collect();
        let sensing_us = sense_start.elapsed().as_micros() as u64;

        let decide_start = Instant::now();
        let mut decisions: Vec<Vec<f64>> = Vec::with_capacity(live_agents);
        for (&i, reading) in self.live.iter().zip(&readings) {
            let agent = self.agents[i].id();
            let scores = controller.decide(agent, reading);
            select_direction(&scores).map_err(|source| EpisodeError::Decision {
                agent,
                tick,
                source,
            })?;
            decisions.push(scores);
        }
        let decision_us = decide_start.elapsed().as_micros() as u64;

        // Phase 2: move, score, mark.
        let move_start = Instant::now();
        let (gx, gy) = self.goal;
        let mut reports = Vec::with_capacity(live_agents);
        for ((&i, reading), scores) in self.live.iter().zip(readings).zip(decisions) {
            let agent = &mut self.agents[i];
            let id = agent.id();
            let movement = agent
                .apply_movement(&scores)
                .map_err(|source| EpisodeError::Decision {
                    agent: id,
                    tick,
                    source,
                })?;
            if movement.is_blocked() {
                self.metrics.blocked_moves += 1;
            } else {
                self.metrics.moves += 1;
            }

            let progress =
                self.scoring.progress_scale * (self.start_distance - agent.distance_to(gx, gy));
            let mut fitness_delta = agent.set_fitness(progress);

            let outcome = if agent.check_goal(gx, gy) {
                agent.credit(self.scoring.win_bonus);
                fitness_delta += self.scoring.win_bonus;
                self.metrics.wins += 1;
                tracing::info!(
                    generation = %self.generation,
                    agent = %id,
                    %tick,
                    "agent reached the goal"
                );
                Some(Outcome::Won { tick })
            } else if agent.steps() >= self.max_steps {
                agent.credit(-self.scoring.timeout_penalty);
                fitness_delta -= self.scoring.timeout_penalty;
                self.metrics.timeouts += 1;
                tracing::debug!(
                    generation = %self.generation,
                    agent = %id,
                    %tick,
                    fitness = agent.fitness(),
                    "agent ran out of steps"
                );
                Some(Outcome::TimedOut { tick })
            } else {
                None
            };
            self.outcomes[i] = outcome;

            reports.push(AgentTick {
                agent: id,
                reading,
                movement,
                position: agent.position(),
                fitness_delta,
                fitness: agent.fitness(),
                won: agent.has_won(),
                outcome,
            });
        }

        // Phase 3: compact.
        let outcomes = &self.outcomes;
        self.live.retain(|&i| outcomes[i].is_none());
        let movement_us = move_start.elapsed().as_micros() as u64;

        self.tick = tick;
        let metrics = TickMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            sensing_us,
            decision_us,
            movement_us,
            live_agents,
        };
        self.metrics.record_tick(&metrics);

        if self.is_finished() {
            tracing::info!(
                generation = %self.generation,
                ticks = self.tick.0,
                wins = self.metrics.wins,
                timeouts = self.metrics.timeouts,
                "episode finished"
            );
        }

        Ok(TickReport {
            tick,
            agents: reports,
            live_remaining: self.live.len(),
            metrics,
        })
    }

    /// Step until every agent has retired, then report.
    ///
    /// Terminates within `max_steps` ticks.
    pub fn run<C: Controller + ?Sized>(
        &mut self,
        controller: &mut C,
    ) -> Result<EpisodeReport, EpisodeError> {
        while !self.is_finished() {
            self.step(controller)?;
        }
        Ok(self.report())
    }

    /// Current standings for every agent.
    pub fn report(&self) -> EpisodeReport {
        let results = self
            .agents
            .iter()
            .zip(&self.outcomes)
            .map(|(agent, &outcome)| AgentResult {
                agent: agent.id(),
                fitness: agent.fitness(),
                outcome,
                steps: agent.steps(),
                position: agent.position(),
            })
            .collect();
        EpisodeReport {
            generation: self.generation,
            ticks: self.tick,
            results,
            metrics: self.metrics.clone(),
        }
    }
}
