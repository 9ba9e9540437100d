//! Divide-and-conquer cores: closest pair of planar points and Karatsuba
//! multiplication of decimal big integers.
//!
//! Both entry points are pure functions of their input. They share no state
//! and never call each other. Callers supply value types ([`Point`],
//! [`BigDigits`]) and receive value types back ([`PointPair`], [`BigDigits`]).

pub mod error;
pub mod limits;
pub mod model;
pub mod geometry {
    pub mod math;
}
pub mod arith {
    pub mod digits;
}
pub mod algorithms {
    pub mod closest_pair;
    pub mod karatsuba;
}
pub mod monitor;
#[cfg(feature = "threads")]
mod par;

pub use algorithms::closest_pair::{brute_force_closest, closest_pair, closest_pair_with};
pub use algorithms::karatsuba::{multiply, multiply_str, multiply_with};
#[cfg(feature = "threads")]
pub use algorithms::closest_pair::closest_pair_par;
#[cfg(feature = "threads")]
pub use algorithms::karatsuba::multiply_par;
pub use arith::digits::BigDigits;
pub use error::{Error, InvalidInput, Result};
pub use model::{Point, PointPair};
pub use monitor::{CompositeMonitor, LogMonitor, Monitor, NoOperationMonitor, RecordedStep, Step, StepRecorder};
