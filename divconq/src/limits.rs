// Centralized size thresholds for parallel evaluation and caller-side ingestion caps

// Parallel evaluation (feature "threads"): fork only while a sub-problem is at
// least this large and the fork depth stays below PAR_MAX_DEPTH.
pub const PAR_MIN_POINTS: usize = 4_096;
pub const PAR_MIN_DIGITS: usize = 1_024;
pub const PAR_MAX_DEPTH: usize = 3;

// Ingestion caps for untrusted callers (enforced by the binding layer, never by the algorithms)
pub const MAX_POINTS: usize = 2_000_000;
pub const MAX_DIGITS: usize = 1_000_000;

// Traced and verified calls keep one rendered line per recursive step (each
// carrying operand digits) or run the quadratic schoolbook check, so they get
// much tighter caps.
pub const MAX_TRACE_POINTS: usize = 50_000;
pub const MAX_TRACE_DIGITS: usize = 2_000;

#[inline]
pub fn in_point_bounds(n: usize, traced: bool) -> bool { n <= if traced { MAX_TRACE_POINTS } else { MAX_POINTS } }

#[inline]
pub fn in_digit_bounds(n: usize, traced: bool) -> bool { n <= if traced { MAX_TRACE_DIGITS } else { MAX_DIGITS } }
