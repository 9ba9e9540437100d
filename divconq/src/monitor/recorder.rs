use serde::Serialize;

use super::{Monitor, Step};

/// One step as it was rendered when it happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordedStep {
    pub kind: &'static str,
    pub depth: usize,
    pub message: String,
}

/// Keeps every step it sees, in order.
#[derive(Clone, Debug, Default)]
pub struct StepRecorder {
    steps: Vec<RecordedStep>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[RecordedStep] {
        &self.steps
    }

    /// Rendered messages only, one per step.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().map(|s| s.message.as_str())
    }

    pub fn count(&self, kind: &str) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Monitor for StepRecorder {
    fn name(&self) -> &str {
        "StepRecorder"
    }

    fn on_step(&mut self, step: &Step<'_>) {
        self.steps.push(RecordedStep { kind: step.kind(), depth: step.depth(), message: step.to_string() });
    }
}
