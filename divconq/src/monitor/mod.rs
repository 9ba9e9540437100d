//! Step observation for the divide-and-conquer algorithms.
//!
//! Both algorithms report every divide, base-case and merge step to a
//! [`Monitor`]. Monitors only observe; they cannot influence the recursion,
//! so the result of a call is the same whichever monitor is attached.
//!
//! Components
//! - `no_op`: the default, compiles away entirely.
//! - `logging`: forwards every step to the `log` facade.
//! - `recorder`: keeps rendered steps for later inspection.
//! - `composite`: fans each step out to several monitors.

pub mod composite;
pub mod logging;
pub mod no_op;
pub mod recorder;

use std::fmt;

use crate::arith::digits::BigDigits;

pub use composite::CompositeMonitor;
pub use logging::LogMonitor;
pub use no_op::NoOperationMonitor;
pub use recorder::{RecordedStep, StepRecorder};

/// A single event of a running algorithm. Borrowed values are only valid
/// for the duration of the callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step<'a> {
    // closest pair
    Start { points: usize },
    Divide { depth: usize, points: usize, mid_x: f64 },
    BruteForce { depth: usize, points: usize },
    Merge { depth: usize, best: f64 },
    Strip { depth: usize, points: usize, best: f64 },
    // karatsuba
    BaseCase { depth: usize, lhs: &'a BigDigits, rhs: &'a BigDigits, product: &'a BigDigits },
    Split { depth: usize, half: usize, value: &'a BigDigits, high: &'a BigDigits, low: &'a BigDigits },
    Combine { depth: usize, result: &'a BigDigits },
}

impl Step<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Step::Start { .. } => "start",
            Step::Divide { .. } => "divide",
            Step::BruteForce { .. } => "brute_force",
            Step::Merge { .. } => "merge",
            Step::Strip { .. } => "strip",
            Step::BaseCase { .. } => "base_case",
            Step::Split { .. } => "split",
            Step::Combine { .. } => "combine",
        }
    }

    pub fn depth(&self) -> usize {
        match *self {
            Step::Start { .. } => 0,
            Step::Divide { depth, .. }
            | Step::BruteForce { depth, .. }
            | Step::Merge { depth, .. }
            | Step::Strip { depth, .. }
            | Step::BaseCase { depth, .. }
            | Step::Split { depth, .. }
            | Step::Combine { depth, .. } => depth,
        }
    }
}

impl fmt::Display for Step<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Start { points } => write!(f, "starting with {} points", points),
            Step::Divide { points, mid_x, .. } => write!(f, "dividing {} points at x={:.2}", points, mid_x),
            Step::BruteForce { points, .. } => write!(f, "brute force checking {} points", points),
            Step::Merge { best, .. } => write!(f, "merging: current min = {:.4}", best),
            Step::Strip { points, best, .. } => {
                write!(f, "checking strip with {} points (d = {:.4})", points, best)
            }
            Step::BaseCase { depth, lhs, rhs, product } => {
                write!(f, "{:indent$}base case: {} x {} = {}", "", lhs, rhs, product, indent = 2 * depth)
            }
            Step::Split { depth, half, value, high, low } => {
                write!(f, "{:indent$}split: {} = {}*10^{} + {}", "", value, high, half, low, indent = 2 * depth)
            }
            Step::Combine { depth, result } => {
                write!(f, "{:indent$}combine: result = {}", "", result, indent = 2 * depth)
            }
        }
    }
}

/// Receives the steps of a running algorithm.
pub trait Monitor {
    fn name(&self) -> &str;
    fn on_step(&mut self, step: &Step<'_>);
}

impl<M> Monitor for &mut M
where
    M: Monitor + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn on_step(&mut self, step: &Step<'_>) {
        (**self).on_step(step)
    }
}

impl fmt::Debug for dyn Monitor + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Monitor({})", self.name())
    }
}
