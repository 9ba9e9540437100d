use log::Level;

use super::{Monitor, Step};

/// Forwards every step to the `log` facade at a fixed level.
///
/// Nothing is formatted unless the level is enabled for this crate's target,
/// so attaching it in production costs one level check per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogMonitor {
    level: Level,
}

impl LogMonitor {
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(Level::Trace)
    }
}

impl Monitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_step(&mut self, step: &Step<'_>) {
        if log::log_enabled!(self.level) {
            log::log!(self.level, "[{}] {}", step.kind(), step);
        }
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(level: {})", self.level)
    }
}
