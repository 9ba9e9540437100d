use super::{Monitor, Step};

/// A monitor that ignores every step. This is what the plain entry points use.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    #[inline(always)]
    pub fn new() -> Self {
        NoOperationMonitor
    }
}

impl Monitor for NoOperationMonitor {
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_step(&mut self, _step: &Step<'_>) {}
}
