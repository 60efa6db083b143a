//! Per-tick and per-episode counters.
//!
//! [`TickMetrics`] captures timing for a single tick; [`EpisodeMetrics`]
//! accumulates across the episode for telemetry and benchmarking.

/// Timing collected during a single tick.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default)]
pub struct TickMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Time spent casting sensor rays.
    pub sensing_us: u64,
    /// Time spent inside the controller.
    pub decision_us: u64,
    /// Time spent moving, scoring, and retiring agents.
    pub movement_us: u64,
    /// Live agents at the start of the tick.
    pub live_agents: usize,
}

/// Counters accumulated over one episode.
#[derive(Clone, Debug, Default)]
pub struct EpisodeMetrics {
    /// Ticks executed.
    pub ticks: u64,
    /// Sum of [`TickMetrics::total_us`].
    pub total_us: u64,
    /// Sum of [`TickMetrics::sensing_us`].
    pub sensing_us: u64,
    /// Sum of [`TickMetrics::decision_us`].
    pub decision_us: u64,
    /// Moves committed.
    pub moves: u64,
    /// Moves refused because of a wall.
    pub blocked_moves: u64,
    /// Agents retired at the goal.
    pub wins: usize,
    /// Agents retired on the step budget.
    pub timeouts: usize,
}

impl EpisodeMetrics {
    /// Fold one tick's timing in.
    pub fn record_tick(&mut self, tick: &TickMetrics) {
        self.ticks += 1;
        self.total_us += tick.total_us;
        self.sensing_us += tick.sensing_us;
        self.decision_us += tick.decision_us;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = EpisodeMetrics::default();
        assert_eq!(m.ticks, 0);
        assert_eq!(m.total_us, 0);
        assert_eq!(m.moves, 0);
        assert_eq!(m.blocked_moves, 0);
        assert_eq!(m.wins, 0);
        assert_eq!(m.timeouts, 0);
    }

    #[test]
    fn record_tick_accumulates() {
        let mut m = EpisodeMetrics::default();
        let t = TickMetrics {
            total_us: 100,
            sensing_us: 40,
            decision_us: 30,
            movement_us: 20,
            live_agents: 5,
        };
        m.record_tick(&t);
        m.record_tick(&t);
        assert_eq!(m.ticks, 2);
        assert_eq!(m.total_us, 200);
        assert_eq!(m.sensing_us, 80);
        assert_eq!(m.decision_us, 60);
    }
}
