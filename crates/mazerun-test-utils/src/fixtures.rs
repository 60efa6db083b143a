//! Reusable controller fixtures.
//!
//! Four standard controllers for episode testing:
//!
//! - [`ConstController`]: always returns the same scores.
//! - [`ScriptedController`]: replays a fixed direction sequence per agent.
//! - [`OpenRayController`]: heads toward the longest cardinal ray.
//! - [`FailingController`]: returns a malformed vector after N calls.

use mazerun_core::{AgentId, Direction, SensorReading};
use mazerun_engine::Controller;

/// One-hot score vector selecting `direction`.
pub fn one_hot(direction: Direction) -> Vec<f64> {
    let mut scores = vec![0.0; Direction::ALL.len()];
    scores[direction.index()] = 1.0;
    scores
}

/// Returns the same scores for every agent on every tick.
#[derive(Clone, Debug)]
pub struct ConstController {
    pub scores: Vec<f64>,
    pub calls: usize,
}

impl ConstController {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores, calls: 0 }
    }

    /// Always pick `direction`.
    pub fn toward(direction: Direction) -> Self {
        Self::new(one_hot(direction))
    }
}

impl Controller for ConstController {
    fn decide(&mut self, _agent: AgentId, _reading: &SensorReading) -> Vec<f64> {
        self.calls += 1;
        self.scores.clone()
    }
}

/// Replays `script` independently for each agent, cycling when it runs out.
///
/// The n-th call for an agent gets `script[n % script.len()]`, so every
/// agent follows the same path regardless of population size.
#[derive(Clone, Debug)]
pub struct ScriptedController {
    script: Vec<Direction>,
    cursors: Vec<usize>,
}

impl ScriptedController {
    pub fn new(script: Vec<Direction>) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script,
            cursors: Vec::new(),
        }
    }
}

impl Controller for ScriptedController {
    fn decide(&mut self, agent: AgentId, _reading: &SensorReading) -> Vec<f64> {
        let slot = agent.index();
        if self.cursors.len() <= slot {
            self.cursors.resize(slot + 1, 0);
        }
        let direction = self.script[self.cursors[slot] % self.script.len()];
        self.cursors[slot] += 1;
        one_hot(direction)
    }
}

/// Scores each direction by the sensor ray pointing that way.
///
/// Moves toward whichever cardinal ray is longest, ties resolving in
/// `[up, down, left, right]` order.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenRayController;

impl Controller for OpenRayController {
    fn decide(&mut self, _agent: AgentId, reading: &SensorReading) -> Vec<f64> {
        // Ray indices: 0 east, 2 south, 4 west, 6 north.
        [6, 2, 4, 0]
            .into_iter()
            .map(|i| f64::from(reading[i]))
            .collect()
    }
}

/// Wraps another controller and returns a two-element vector once it has
/// answered `fail_after` calls.
pub struct FailingController<C> {
    pub inner: C,
    pub fail_after: usize,
    calls: usize,
}

impl<C: Controller> FailingController<C> {
    pub fn new(inner: C, fail_after: usize) -> Self {
        Self {
            inner,
            fail_after,
            calls: 0,
        }
    }

    /// Calls answered so far, including the failing ones.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl<C: Controller> Controller for FailingController<C> {
    fn decide(&mut self, agent: AgentId, reading: &SensorReading) -> Vec<f64> {
        self.calls += 1;
        if self.calls > self.fail_after {
            return vec![0.0, 1.0];
        }
        self.inner.decide(agent, reading)
    }
}
