//! "Nice number" step size selection.
//!
//! Two historically divergent selectors are kept, one per call site: the
//! major selector picks from the fraction set `{2, 2.5, 5, 10}` and drives
//! `divide_scale`/`auto_scale`, while the minor selector halves down from 10
//! (effective set `{1, 2, 5, 10}`) and drives the subdivision of a major
//! interval. Both divide the length with a relative-epsilon shrink first so
//! that a length that is an exact multiple of the resulting step does not
//! flip to the next power of ten inside `log10`.

use graticule_common::fuzzy;

/// Fraction candidates of the major selector, ordered ascending.
pub const MAJOR_STEP_FRACTIONS: [f64; 4] = [2.0, 2.5, 5.0, 10.0];

/// Picks a "round" step size for dividing `length` into at most `num_steps`
/// major steps.
///
/// Returns `0.0` when no subdivision is possible (`num_steps <= 0` or a
/// degenerate length). The result carries the sign of `length / num_steps`
/// and its magnitude is one of `{2, 2.5, 5, 10} * 10^p`.
pub fn step_size(length: f64, num_steps: i32) -> f64 {
    if num_steps <= 0 {
        return 0.0;
    }

    let v = fuzzy::divide_eps(length, num_steps as f64);
    if fuzzy::is_zero(v) {
        return 0.0;
    }

    let lx = v.abs().log10();
    let p = lx.floor();
    let fraction = 10.0_f64.powf(lx - p);

    let mut step_size = 10.0_f64.powf(p);
    for f in MAJOR_STEP_FRACTIONS {
        if fraction <= f || fuzzy::compare_eq(fraction, f, f) {
            step_size *= f;
            break;
        }
    }

    if v < 0.0 {
        -step_size
    } else {
        step_size
    }
}

/// Picks a step size for subdividing a major interval of `length` into at
/// most `num_steps` minor steps.
///
/// Same contract as [`step_size`], but the candidate fraction is found by
/// successive halving from 10 down to 1, so the magnitude is one of
/// `{1, 2, 5, 10} * 10^p`.
pub fn minor_step_size_hint(length: f64, num_steps: i32) -> f64 {
    if num_steps <= 0 {
        return 0.0;
    }

    let v = fuzzy::divide_eps(length, num_steps as f64);
    if fuzzy::is_zero(v) {
        return 0.0;
    }

    let lx = v.abs().log10();
    let p = lx.floor();
    let fraction = 10.0_f64.powf(lx - p);

    let mut n: u32 = 10;
    while n > 1 && fraction <= (n / 2) as f64 {
        n /= 2;
    }

    let step_size = n as f64 * 10.0_f64.powf(p);
    if v < 0.0 {
        -step_size
    } else {
        step_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_step_size_basic() {
        assert_approx_eq!(f64, step_size(100.0, 10), 10.0);
        assert_approx_eq!(f64, step_size(100.0, 5), 20.0);
        assert_approx_eq!(f64, step_size(1.0, 10), 0.1);
        assert_approx_eq!(f64, step_size(47.0, 5), 10.0);
    }

    #[test]
    fn test_step_size_degenerate() {
        assert_eq!(step_size(100.0, 0), 0.0);
        assert_eq!(step_size(100.0, -3), 0.0);
        assert_eq!(step_size(0.0, 10), 0.0);
    }

    #[test]
    fn test_step_size_sign() {
        assert_approx_eq!(f64, step_size(-100.0, 10), -10.0);
    }

    #[test]
    fn test_step_size_candidate_set() {
        // every result must be a candidate fraction times a power of ten
        let lengths = [
            0.00017, 0.3, 1.0, 3.7, 12.0, 47.0, 99.0, 100.0, 123.0, 5000.0, 7.7e6,
        ];
        for length in lengths {
            for num_steps in 1..20 {
                let step = step_size(length, num_steps);
                if step == 0.0 {
                    continue;
                }
                let p = step.abs().log10().floor();
                let fraction = step.abs() / 10.0_f64.powf(p);
                assert!(
                    MAJOR_STEP_FRACTIONS
                        .iter()
                        .chain([1.0].iter())
                        .any(|f| (fraction - f).abs() < 1e-9),
                    "step {step} for ({length}, {num_steps}) has fraction {fraction}"
                );
            }
        }
    }

    #[test]
    fn test_minor_step_size_hint() {
        assert_approx_eq!(f64, minor_step_size_hint(10.0, 4), 5.0);
        assert_approx_eq!(f64, minor_step_size_hint(10.0, 10), 1.0);
        assert_approx_eq!(f64, minor_step_size_hint(1.0, 2), 0.5);
    }

    #[test]
    fn test_minor_step_size_hint_candidate_set() {
        // halving from 10 can only ever yield 1, 2, 5 or 10 times a power of ten
        for length in [0.02, 1.0, 2.5, 10.0, 33.0, 400.0] {
            for num_steps in 1..12 {
                let step = minor_step_size_hint(length, num_steps);
                if step == 0.0 {
                    continue;
                }
                let p = step.abs().log10().floor();
                let fraction = step.abs() / 10.0_f64.powf(p);
                assert!(
                    [1.0, 2.0, 5.0, 10.0]
                        .iter()
                        .any(|f| (fraction - f).abs() < 1e-9),
                    "step {step} for ({length}, {num_steps}) has fraction {fraction}"
                );
            }
        }
    }

    #[test]
    fn test_minor_step_size_hint_degenerate() {
        assert_eq!(minor_step_size_hint(10.0, 0), 0.0);
        assert_eq!(minor_step_size_hint(0.0, 4), 0.0);
    }
}
