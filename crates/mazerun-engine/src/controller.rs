//! The seam to the external decision maker.

use mazerun_core::{AgentId, SensorReading};

/// Produces movement scores from sensor readings.
///
/// Implemented by whatever drives the agents: an evolved network, a
/// scripted policy, a human. The episode calls
/// [`decide`](Controller::decide) once per live agent per tick, keyed by the
/// agent's id. The returned vector must hold four finite scores in
/// `[up, down, left, right]` order; anything else fails the tick.
pub trait Controller {
    /// Scores for `agent`, given what it senses this tick.
    fn decide(&mut self, agent: AgentId, reading: &SensorReading) -> Vec<f64>;
}

impl<C: Controller + ?Sized> Controller for &mut C {
    fn decide(&mut self, agent: AgentId, reading: &SensorReading) -> Vec<f64> {
        (**self).decide(agent, reading)
    }
}

impl<C: Controller + ?Sized> Controller for Box<C> {
    fn decide(&mut self, agent: AgentId, reading: &SensorReading) -> Vec<f64> {
        (**self).decide(agent, reading)
    }
}

/// Adapts a closure into a [`Controller`]. Built by [`from_fn`].
pub struct FnController<F>(F);

/// Wrap `f` as a [`Controller`].
pub fn from_fn<F>(f: F) -> FnController<F>
where
    F: FnMut(AgentId, &SensorReading) -> Vec<f64>,
{
    FnController(f)
}

impl<F> Controller for FnController<F>
where
    F: FnMut(AgentId, &SensorReading) -> Vec<f64>,
{
    fn decide(&mut self, agent: AgentId, reading: &SensorReading) -> Vec<f64> {
        (self.0)(agent, reading)
    }
}
