use super::{Monitor, Step};

/// Forwards every step to each child monitor, in insertion order.
#[derive(Default)]
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn Monitor + 'a>>,
}

impl<'a> CompositeMonitor<'a> {
    #[inline(always)]
    pub fn new() -> Self {
        Self { monitors: Vec::new() }
    }

    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { monitors: Vec::with_capacity(capacity) }
    }

    /// Adds a monitor. Pass `&mut m` to keep ownership of `m` and read it afterwards.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: Monitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn Monitor + 'a>> for CompositeMonitor<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Monitor + 'a>>>(iter: I) -> Self {
        Self { monitors: iter.into_iter().collect() }
    }
}

impl Monitor for CompositeMonitor<'_> {
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_step(&mut self, step: &Step<'_>) {
        for monitor in &mut self.monitors {
            monitor.on_step(step);
        }
    }
}

impl std::fmt::Debug for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.monitors.iter().map(|m| m.name())).finish()
    }
}
