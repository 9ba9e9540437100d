//! Closest pair of points by divide and conquer, O(n log n).
//!
//! The input is never copied or reordered. Two index views are sorted once
//! up front: `by_x` holds point indices ascending by x and `by_y` ascending
//! by y, both stable so equal coordinates keep input order. The recursion
//! walks contiguous ranges of `by_x`; its y-ordered subset is a slice of
//! *ranks* into `by_y`, so "ascending by y" is simply "ascending by rank".
//! A level partitions its ranks in place, recurses, and merges them back,
//! sharing one scratch buffer with the whole call tree.
//!
//! Determinism rules:
//! - base case (at most [`BRUTE_FORCE_MAX`] points): all pairs in x order,
//!   first strictly smaller distance wins;
//! - ranks go left when `x <= mid_x`, so points tied with the split line
//!   lean left even if their x-order slot is in the right half;
//! - the left result is kept unless the right one is strictly smaller;
//! - the strip only replaces the best pair on a strictly smaller distance.

use crate::error::{InvalidInput, Result};
use crate::geometry::math::{distance, x_gap};
use crate::model::{Point, PointPair};
use crate::monitor::{Monitor, NoOperationMonitor, Step};

pub const BRUTE_FORCE_MAX: usize = 3;

#[derive(Clone, Copy, Debug)]
struct Best {
    d: f64,
    a: usize,
    b: usize,
}

impl Best {
    fn into_pair(self, points: &[Point]) -> PointPair {
        PointPair::new(points[self.a], points[self.b])
    }
}

fn validate(points: &[Point]) -> Result<()> {
    if points.len() < 2 {
        return Err(InvalidInput::TooFewPoints { got: points.len() }.into());
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(InvalidInput::NonFiniteCoordinate { index }.into());
    }
    Ok(())
}

// Coordinates are finite here; -0.0 and 0.0 compare equal, as in the partition predicate.
fn sorted_views(points: &[Point]) -> (Vec<usize>, Vec<usize>) {
    let mut by_x: Vec<usize> = (0..points.len()).collect();
    let mut by_y = by_x.clone();
    by_x.sort_by(|&a, &b| points[a].x.partial_cmp(&points[b].x).unwrap_or(std::cmp::Ordering::Equal));
    by_y.sort_by(|&a, &b| points[a].y.partial_cmp(&points[b].y).unwrap_or(std::cmp::Ordering::Equal));
    (by_x, by_y)
}

// Needs at least two indices. Seeded with the first pair so that distances
// which overflow to infinity still produce a pair.
fn brute_force(points: &[Point], idx: &[usize]) -> Best {
    debug_assert!(idx.len() >= 2);
    let mut best = Best { d: distance(&points[idx[0]], &points[idx[1]]), a: idx[0], b: idx[1] };
    for i in 0..idx.len() {
        for j in (i + 1)..idx.len() {
            let d = distance(&points[idx[i]], &points[idx[j]]);
            if d < best.d {
                best = Best { d, a: idx[i], b: idx[j] };
            }
        }
    }
    best
}

struct Solver<'p, M> {
    points: &'p [Point],
    by_y: &'p [usize],
    monitor: M,
}

impl<M: Monitor> Solver<'_, M> {
    #[inline]
    fn point_at_rank(&self, rank: usize) -> &Point {
        &self.points[self.by_y[rank]]
    }

    fn solve(&mut self, xs: &[usize], ys: &mut [usize], scratch: &mut [usize], depth: usize) -> Best {
        let n = xs.len();
        if n <= BRUTE_FORCE_MAX {
            self.monitor.on_step(&Step::BruteForce { depth, points: n });
            return brute_force(self.points, xs);
        }
        let (mid, mid_x, k) = self.divide(xs, ys, scratch, depth);
        let (left, right) = {
            let (ly, ry) = ys.split_at_mut(k);
            let (ls, rs) = scratch.split_at_mut(k);
            let left = self.solve(&xs[..mid], ly, ls, depth + 1);
            let right = self.solve(&xs[mid..], ry, rs, depth + 1);
            (left, right)
        };
        self.conquer(ys, scratch, k, mid_x, left, right, depth)
    }

    /// Picks the split and partitions `ys` into `[x <= mid_x | x > mid_x]`,
    /// each side still ascending. Returns `(mid, mid_x, left_len)`.
    fn divide(&mut self, xs: &[usize], ys: &mut [usize], scratch: &mut [usize], depth: usize) -> (usize, f64, usize) {
        let mid = xs.len() / 2;
        let mid_x = self.points[xs[mid]].x;
        self.monitor.on_step(&Step::Divide { depth, points: xs.len(), mid_x });

        let mut k = 0;
        for &r in ys.iter() {
            if self.point_at_rank(r).x <= mid_x {
                scratch[k] = r;
                k += 1;
            }
        }
        let mut m = k;
        for &r in ys.iter() {
            if self.point_at_rank(r).x > mid_x {
                scratch[m] = r;
                m += 1;
            }
        }
        ys.copy_from_slice(scratch);
        (mid, mid_x, k)
    }

    /// Restores `ys` to ascending order, then runs the strip pass around `mid_x`.
    #[allow(clippy::too_many_arguments)]
    fn conquer(
        &mut self,
        ys: &mut [usize],
        scratch: &mut [usize],
        k: usize,
        mid_x: f64,
        left: Best,
        right: Best,
        depth: usize,
    ) -> Best {
        merge_ranks(ys, scratch, k);
        let mut best = if right.d < left.d { right } else { left };
        self.monitor.on_step(&Step::Merge { depth, best: best.d });

        let mut m = 0;
        for &r in ys.iter() {
            if x_gap(self.point_at_rank(r), mid_x) < best.d {
                scratch[m] = r;
                m += 1;
            }
        }
        if m == 0 {
            return best;
        }
        self.monitor.on_step(&Step::Strip { depth, points: m, best: best.d });

        let strip = &scratch[..m];
        for i in 0..m {
            let pi = self.point_at_rank(strip[i]);
            for j in (i + 1)..m {
                let pj = self.point_at_rank(strip[j]);
                if !(pj.y - pi.y < best.d) {
                    break;
                }
                let d = distance(pi, pj);
                if d < best.d {
                    best = Best { d, a: self.by_y[strip[i]], b: self.by_y[strip[j]] };
                }
            }
        }
        best
    }
}

// ys[..k] and ys[k..] are each ascending; ranks are distinct.
fn merge_ranks(ys: &mut [usize], scratch: &mut [usize], k: usize) {
    let n = ys.len();
    let (mut i, mut j, mut o) = (0, k, 0);
    while i < k && j < n {
        if ys[i] < ys[j] {
            scratch[o] = ys[i];
            i += 1;
        } else {
            scratch[o] = ys[j];
            j += 1;
        }
        o += 1;
    }
    scratch[o..o + (k - i)].copy_from_slice(&ys[i..k]);
    o += k - i;
    scratch[o..].copy_from_slice(&ys[j..]);
    ys.copy_from_slice(scratch);
}

/// Closest pair among `points`. Fails with `InvalidInput` for fewer than two
/// points or a non-finite coordinate.
pub fn closest_pair(points: &[Point]) -> Result<PointPair> {
    closest_pair_with(points, &mut NoOperationMonitor)
}

/// Like [`closest_pair`], reporting every step to `monitor`.
pub fn closest_pair_with<M>(points: &[Point], monitor: &mut M) -> Result<PointPair>
where
    M: Monitor + ?Sized,
{
    validate(points)?;
    let n = points.len();
    log::debug!("closest pair over {} points", n);
    monitor.on_step(&Step::Start { points: n });

    let (by_x, by_y) = sorted_views(points);
    let mut ys: Vec<usize> = (0..n).collect();
    let mut scratch = vec![0usize; n];
    let mut solver = Solver { points, by_y: &by_y, monitor };
    let best = solver.solve(&by_x, &mut ys, &mut scratch, 0);
    Ok(best.into_pair(points))
}

/// Quadratic reference: every pair in input order, first strictly smaller wins.
pub fn brute_force_closest(points: &[Point]) -> Result<PointPair> {
    validate(points)?;
    let idx: Vec<usize> = (0..points.len()).collect();
    Ok(brute_force(points, &idx).into_pair(points))
}

/// Like [`closest_pair`], evaluating the two halves of large sub-problems on
/// scoped threads. Returns exactly what the sequential version returns.
#[cfg(feature = "threads")]
pub fn closest_pair_par(points: &[Point]) -> Result<PointPair> {
    validate(points)?;
    let n = points.len();
    log::debug!("parallel closest pair over {} points", n);

    let (by_x, by_y) = sorted_views(points);
    let mut ys: Vec<usize> = (0..n).collect();
    let mut scratch = vec![0usize; n];
    let best = solve_par(points, &by_y, &by_x, &mut ys, &mut scratch, 0);
    Ok(best.into_pair(points))
}

#[cfg(feature = "threads")]
fn solve_par(points: &[Point], by_y: &[usize], xs: &[usize], ys: &mut [usize], scratch: &mut [usize], depth: usize) -> Best {
    use crate::limits::{PAR_MAX_DEPTH, PAR_MIN_POINTS};

    let mut solver = Solver { points, by_y, monitor: NoOperationMonitor };
    if xs.len() < PAR_MIN_POINTS || depth >= PAR_MAX_DEPTH {
        return solver.solve(xs, ys, scratch, depth);
    }
    let (mid, mid_x, k) = solver.divide(xs, ys, scratch, depth);
    let (left, right) = {
        let (ly, ry) = ys.split_at_mut(k);
        let (ls, rs) = scratch.split_at_mut(k);
        std::thread::scope(|scope| {
            let handle = scope.spawn(move || solve_par(points, by_y, &xs[..mid], ly, ls, depth + 1));
            let right = solve_par(points, by_y, &xs[mid..], ry, rs, depth + 1);
            (crate::par::join(handle), right)
        })
    };
    solver.conquer(ys, scratch, k, mid_x, left, right, depth)
}
