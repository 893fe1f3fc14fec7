//! Tick position generation over an aligned bounding interval.
//!
//! All functions here are total: degenerate inputs (zero width, zero step,
//! zero requested minor steps) degrade to empty vectors, never to a panic.

use graticule_common::{fuzzy, Interval};
use itertools::Itertools;

use crate::step;

/// Hard cap on the number of generated ticks. Guards against a step size
/// many orders of magnitude smaller than the interval producing unbounded
/// allocation.
pub const MAX_TICK_COUNT: usize = 10_000;

/// Generates the major tick positions over `bounding`, one every
/// `step_size` starting at the lower bound.
///
/// The final position is forced to exactly the upper bound so repeated
/// addition cannot drift past it. The count is capped at
/// [`MAX_TICK_COUNT`].
pub fn build_major_ticks(bounding: &Interval, step_size: f64) -> Vec<f64> {
    if !bounding.is_valid() || !(step_size > 0.0) {
        return Vec::new();
    }

    let num_ticks =
        ((bounding.width() / step_size).round() + 1.0).min(MAX_TICK_COUNT as f64) as usize;

    let mut ticks = Vec::with_capacity(num_ticks);
    ticks.push(bounding.lower_bound());
    for i in 1..num_ticks.saturating_sub(1) {
        ticks.push(bounding.lower_bound() + i as f64 * step_size);
    }
    if num_ticks > 1 {
        ticks.push(bounding.upper_bound());
    }

    ticks
}

/// Resolves the minor step size for subdividing a major interval of
/// `step_size` into at most `max_minor_steps` parts.
///
/// The candidate from the minor selector is only accepted when it tiles the
/// major interval an integer number of times within tolerance; otherwise the
/// major interval is bisected exactly rather than subdivided unevenly.
pub fn minor_step_size(step_size: f64, max_minor_steps: i32) -> f64 {
    let min_step = step::minor_step_size_hint(step_size, max_minor_steps);
    if min_step == 0.0 {
        return 0.0;
    }

    let num_ticks = num_interior_ticks(step_size, min_step);
    if num_ticks > 0
        && !fuzzy::compare_eq(
            (num_ticks as f64 + 1.0) * min_step.abs(),
            step_size.abs(),
            step_size,
        )
    {
        return 0.5 * step_size;
    }

    min_step
}

/// Generates the minor and medium tick positions between consecutive major
/// ticks.
///
/// Each gap receives the same number of interior points, walked by repeated
/// addition of the minor step. When that count is odd, the single point at
/// the midpoint is classified medium instead of minor. Values within the
/// fuzzy-zero tolerance snap to exactly `0.0`.
pub fn build_minor_ticks(
    major_ticks: &[f64],
    max_minor_steps: i32,
    step_size: f64,
) -> (Vec<f64>, Vec<f64>) {
    let min_step = minor_step_size(step_size, max_minor_steps);
    if min_step == 0.0 {
        return (Vec::new(), Vec::new());
    }

    let num_ticks = num_interior_ticks(step_size, min_step);
    let medium_index = if num_ticks % 2 == 1 {
        Some(num_ticks / 2)
    } else {
        None
    };

    let mut minor_ticks = Vec::new();
    let mut medium_ticks = Vec::new();

    for (&lower, _) in major_ticks.iter().tuple_windows::<(_, _)>() {
        let mut value = lower;
        for i in 0..num_ticks {
            value += min_step;

            let tick = if fuzzy::is_zero(value) { 0.0 } else { value };
            if medium_index == Some(i) {
                medium_ticks.push(tick);
            } else {
                minor_ticks.push(tick);
            }
        }
    }

    (minor_ticks, medium_ticks)
}

/// Removes the ticks that fall outside the original, un-aligned interval.
///
/// The ticks are known to be sorted, so when both endpoints are already
/// contained the input is returned unchanged.
pub fn strip(ticks: &[f64], interval: &Interval) -> Vec<f64> {
    if !interval.is_valid() || ticks.is_empty() {
        return Vec::new();
    }

    let first = ticks[0];
    let last = ticks[ticks.len() - 1];
    if interval.fuzzy_contains(first) && interval.fuzzy_contains(last) {
        return ticks.to_vec();
    }

    ticks
        .iter()
        .copied()
        .filter(|&tick| interval.fuzzy_contains(tick))
        .collect()
}

fn num_interior_ticks(step_size: f64, min_step: f64) -> usize {
    let n = (step_size / min_step).abs().ceil() as i64 - 1;
    n.max(0) as usize
}
