use std::cmp::Ordering;

/// Relative tolerance of all scaled comparisons. The epsilon handed to the
/// float comparisons below is this ratio times the span being worked on
/// (interval width or step size), never the raw values themselves.
const EPSILON_RATIO: f64 = 1.0e-6;

/// Absolute tolerance for comparisons against zero, relative to 1.0.
const ZERO_EPSILON: f64 = 1.0e-12;

/// Compares two values with an epsilon scaled to `interval_size`.
///
/// Returns `Less` when `value1` is fuzzy-smaller than `value2`, `Greater`
/// when it is fuzzy-larger, and `Equal` when the difference is below
/// `1e-6 * interval_size`.
pub fn compare(value1: f64, value2: f64, interval_size: f64) -> Ordering {
    let eps = (EPSILON_RATIO * interval_size).abs();

    if value2 - value1 > eps {
        Ordering::Less
    } else if value1 - value2 > eps {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Fuzzy equality with an epsilon scaled to `interval_size`.
pub fn compare_eq(value1: f64, value2: f64, interval_size: f64) -> bool {
    compare(value1, value2, interval_size) == Ordering::Equal
}

/// Whether `value` is indistinguishable from zero at a tolerance relative
/// to 1.0. Tick values computed by repeated addition end up a few ulps away
/// from zero and would otherwise render as "-0.0000001".
pub fn is_zero(value: f64) -> bool {
    value.abs() <= ZERO_EPSILON
}

/// Rounds `value` down to a multiple of `interval_size`, nudging it up by a
/// tiny fraction of the step first. A value that is meant to sit exactly on
/// a step boundary must not be pushed a whole step down by rounding noise.
pub fn floor_eps(value: f64, interval_size: f64) -> f64 {
    let eps = EPSILON_RATIO * interval_size;
    ((value + eps) / interval_size).floor() * interval_size
}

/// Rounds `value` up to a multiple of `interval_size`, nudging it down by a
/// tiny fraction of the step first.
pub fn ceil_eps(value: f64, interval_size: f64) -> f64 {
    let eps = EPSILON_RATIO * interval_size;
    ((value - eps) / interval_size).ceil() * interval_size
}

/// Divides `interval_size` into `num_steps`, shrinking the interval by the
/// relative epsilon first. Keeps a length that is an exact multiple of the
/// resulting step from flipping to the next power of ten when the quotient
/// is fed through `log10` later on.
pub fn divide_eps(interval_size: f64, num_steps: f64) -> f64 {
    if num_steps == 0.0 || interval_size == 0.0 {
        return 0.0;
    }

    (interval_size - (EPSILON_RATIO * interval_size)) / num_steps
}
