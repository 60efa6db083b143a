//! The maze agent: position, discrete movement, sensing, goal test.

use crate::decision::select_direction;
use mazerun_core::{AgentId, DecisionError, Direction, SensorReading};
use mazerun_obs::SensorCaster;
use mazerun_space::Maze;

/// Size and step length of an agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentConfig {
    /// Collision and win-test radius in pixels. Default: 10.
    pub radius: f64,
    /// Pixels moved per committed step. Default: 5.
    pub speed: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::for_cell_size(40)
    }
}

impl AgentConfig {
    /// Step length used for every maze size.
    pub const DEFAULT_SPEED: f64 = 5.0;

    /// Reference sizing for a maze with `cell_size` px cells: radius is a
    /// quarter cell (integer floor), speed is [`DEFAULT_SPEED`](Self::DEFAULT_SPEED).
    pub fn for_cell_size(cell_size: u32) -> Self {
        Self {
            radius: (cell_size / 4) as f64,
            speed: Self::DEFAULT_SPEED,
        }
    }
}

/// Outcome of one [`Agent::apply_movement`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    /// The agent moved one step in this direction.
    Moved(Direction),
    /// The step in this direction would have touched a wall; the agent
    /// stayed put.
    Blocked(Direction),
}

impl Movement {
    /// The direction that was attempted.
    pub fn direction(self) -> Direction {
        match self {
            Movement::Moved(d) | Movement::Blocked(d) => d,
        }
    }

    /// Whether the step was refused.
    pub fn is_blocked(self) -> bool {
        matches!(self, Movement::Blocked(_))
    }
}

/// A circular agent inside a borrowed [`Maze`].
///
/// The agent never mutates the maze; it only moves itself, and only after
/// the destination passes [`Maze::collides`]. Episode-scoped state (shaped
/// fitness, win flag, step count) lives here too.
#[derive(Clone, Debug)]
pub struct Agent<'m> {
    id: AgentId,
    x: f64,
    y: f64,
    radius: f64,
    speed: f64,
    maze: &'m Maze,
    fitness: f64,
    has_won: bool,
    steps: u32,
    blocked_steps: u32,
}

impl<'m> Agent<'m> {
    /// Spawn an agent at the maze's start position.
    pub fn new(id: AgentId, maze: &'m Maze, config: AgentConfig) -> Self {
        let (x, y) = maze.start_position();
        Self::at(id, maze, config, x, y)
    }

    /// Place an agent at an arbitrary position.
    pub fn at(id: AgentId, maze: &'m Maze, config: AgentConfig, x: f64, y: f64) -> Self {
        Self {
            id,
            x,
            y,
            radius: config.radius,
            speed: config.speed,
            maze,
            fitness: 0.0,
            has_won: false,
            steps: 0,
            blocked_steps: 0,
        }
    }

    /// Identity assigned at episode start.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current `(x, y)` in pixels.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Collision radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Step length.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The maze this agent lives in.
    pub fn maze(&self) -> &'m Maze {
        self.maze
    }

    /// Shaped fitness accumulated this episode.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Overwrite the shaped fitness. Returns the change.
    pub fn set_fitness(&mut self, fitness: f64) -> f64 {
        let delta = fitness - self.fitness;
        self.fitness = fitness;
        delta
    }

    /// Add `delta` to the shaped fitness.
    pub fn credit(&mut self, delta: f64) {
        self.fitness += delta;
    }

    /// Whether the goal has been reached at any point.
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// Number of accepted decisions, blocked or not.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// How many of those steps were blocked by a wall.
    pub fn blocked_steps(&self) -> u32 {
        self.blocked_steps
    }

    /// Euclidean distance from the agent's centre to `(x, y)`.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        (self.x - x).hypot(self.y - y)
    }

    /// Take one step chosen by arg-max over `decision` (`[up, down, left, right]`).
    ///
    /// The candidate position is `±speed` along the chosen axis. It is
    /// committed only if a circle of this agent's radius there does not
    /// collide; otherwise the agent stays where it is. A blocked step is a
    /// normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError`] for a vector that is not exactly four
    /// finite scores. The agent does not move and the step is not counted.
    pub fn apply_movement(&mut self, decision: &[f64]) -> Result<Movement, DecisionError> {
        let direction = select_direction(decision)?;
        let (dx, dy) = direction.unit();
        let nx = self.x + dx * self.speed;
        let ny = self.y + dy * self.speed;
        self.steps += 1;

        if self.maze.collides(nx, ny, self.radius) {
            self.blocked_steps += 1;
            tracing::trace!(agent = %self.id, %direction, x = self.x, y = self.y, "move blocked");
            return Ok(Movement::Blocked(direction));
        }

        self.x = nx;
        self.y = ny;
        Ok(Movement::Moved(direction))
    }

    /// Cast the eight distance rays from the current position.
    pub fn sense(&self) -> SensorReading {
        SensorCaster::new().cast_all(self.x, self.y, self.maze)
    }

    /// Whether the goal point lies strictly inside this agent's circle.
    ///
    /// Sets the win flag on success. Once won, always returns `true`.
    pub fn check_goal(&mut self, goal_x: f64, goal_y: f64) -> bool {
        if self.distance_to(goal_x, goal_y) < self.radius {
            self.has_won = true;
        }
        self.has_won
    }

    /// [`check_goal`](Self::check_goal) against the maze's own goal.
    pub fn reached_goal(&mut self) -> bool {
        let (gx, gy) = self.maze.goal_position();
        self.check_goal(gx, gy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerun_space::{Grid, MazeConfig};

    const UP: [f64; 4] = [1.0, 0.0, 0.0, 0.0];
    const DOWN: [f64; 4] = [0.0, 1.0, 0.0, 0.0];
    const LEFT: [f64; 4] = [0.0, 0.0, 1.0, 0.0];
    const RIGHT: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

    fn maze(width: u32, height: u32, grid: Grid) -> Maze {
        let config = MazeConfig {
            width,
            height,
            cell_size: 40,
        };
        Maze::from_grid(config, grid).unwrap()
    }

    fn open_row() -> Maze {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.carve(0, 0, Direction::Right).unwrap();
        grid.carve(0, 1, Direction::Right).unwrap();
        maze(120, 40, grid)
    }

    #[test]
    fn default_config_matches_forty_pixel_cells() {
        let c = AgentConfig::default();
        assert_eq!(c.radius, 10.0);
        assert_eq!(c.speed, 5.0);
        assert_eq!(AgentConfig::for_cell_size(30).radius, 7.0);
    }

    #[test]
    fn spawns_at_start() {
        let m = open_row();
        let a = Agent::new(AgentId(3), &m, AgentConfig::default());
        assert_eq!(a.id(), AgentId(3));
        assert_eq!(a.position(), (20.0, 20.0));
        assert_eq!(a.fitness(), 0.0);
        assert!(!a.has_won());
    }

    #[test]
    fn moves_through_open_passage() {
        let m = open_row();
        let mut a = Agent::new(AgentId(0), &m, AgentConfig::default());
        for _ in 0..8 {
            assert_eq!(a.apply_movement(&RIGHT), Ok(Movement::Moved(Direction::Right)));
        }
        assert_eq!(a.position(), (60.0, 20.0));
        assert_eq!(a.steps(), 8);
        assert_eq!(a.blocked_steps(), 0);
    }

    #[test]
    fn blocked_move_leaves_position_unchanged() {
        let m = maze(80, 40, Grid::new(1, 2).unwrap());
        // One unit before the point where the circle would touch x=40.
        let mut a = Agent::at(AgentId(0), &m, AgentConfig::default(), 29.0, 20.0);
        let before = a.position();
        assert_eq!(a.apply_movement(&RIGHT), Ok(Movement::Blocked(Direction::Right)));
        assert_eq!(a.position(), before);
        assert_eq!(a.blocked_steps(), 1);
    }

    #[test]
    fn boundary_blocks_every_direction_in_a_tight_cell() {
        let m = maze(40, 40, Grid::new(1, 1).unwrap());
        let mut a = Agent::new(AgentId(0), &m, AgentConfig::default());
        // 20 - 5 keeps the circle 5 px off the top edge; 20 - 10 would touch it.
        assert!(!a.apply_movement(&UP).unwrap().is_blocked());
        assert!(a.apply_movement(&UP).unwrap().is_blocked());
        assert_eq!(a.position(), (20.0, 15.0));
        assert!(!a.apply_movement(&DOWN).unwrap().is_blocked());
        assert!(!a.apply_movement(&LEFT).unwrap().is_blocked());
    }

    #[test]
    fn malformed_decision_does_not_move_or_count() {
        let m = open_row();
        let mut a = Agent::new(AgentId(0), &m, AgentConfig::default());
        assert!(a.apply_movement(&[1.0, 0.0]).is_err());
        assert!(a.apply_movement(&[f64::NAN, 0.0, 0.0, 1.0]).is_err());
        assert_eq!(a.position(), (20.0, 20.0));
        assert_eq!(a.steps(), 0);
    }

    #[test]
    fn sense_reads_from_current_position() {
        let m = open_row();
        let mut a = Agent::new(AgentId(0), &m, AgentConfig::default());
        let first = a.sense();
        assert_eq!(first[0], 100);
        assert_eq!(first[4], 20);
        a.apply_movement(&RIGHT).unwrap();
        let second = a.sense();
        assert_eq!(second[0], 95);
        assert_eq!(second[4], 25);
        // Sensing is pure.
        assert_eq!(a.sense(), second);
    }

    #[test]
    fn goal_test_uses_strict_radius() {
        let m = open_row();
        let mut a = Agent::at(AgentId(0), &m, AgentConfig::default(), 90.0, 20.0);
        assert!(!a.check_goal(100.0, 20.0));
        assert!(!a.has_won());
        assert!(a.check_goal(99.0, 20.0));
        assert!(a.has_won());
    }

    #[test]
    fn goal_is_sticky() {
        let m = open_row();
        let mut a = Agent::at(AgentId(0), &m, AgentConfig::default(), 100.0, 20.0);
        assert!(a.reached_goal());
        a.apply_movement(&LEFT).unwrap();
        a.apply_movement(&LEFT).unwrap();
        a.apply_movement(&LEFT).unwrap();
        for _ in 0..3 {
            assert!(a.check_goal(1000.0, 1000.0));
            assert!(a.has_won());
        }
    }

    #[test]
    fn single_cell_maze_is_won_at_spawn() {
        let m = maze(40, 40, Grid::new(1, 1).unwrap());
        let mut a = Agent::new(AgentId(0), &m, AgentConfig::default());
        assert!(a.reached_goal());
    }

    #[test]
    fn fitness_bookkeeping() {
        let m = open_row();
        let mut a = Agent::new(AgentId(0), &m, AgentConfig::default());
        assert_eq!(a.set_fitness(10.0), 10.0);
        assert_eq!(a.set_fitness(4.0), -6.0);
        a.credit(1000.0);
        assert_eq!(a.fitness(), 1004.0);
    }
}
