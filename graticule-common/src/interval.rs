use serde::{Deserialize, Serialize};

use crate::fuzzy;
use std::cmp::Ordering;

/// A closed numeric range `[lower_bound, upper_bound]` with value semantics.
///
/// An interval with `lower_bound > upper_bound` is the canonical invalid
/// sentinel; the default value is `[0, -1]`. None of the operations panic:
/// invalid inputs propagate as the invalid sentinel so callers can test
/// validity after every intermediate step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    lower_bound: f64,
    upper_bound: f64,
}

impl Default for Interval {
    fn default() -> Self {
        Self {
            lower_bound: 0.0,
            upper_bound: -1.0,
        }
    }
}

impl Interval {
    pub fn new(lower_bound: f64, upper_bound: f64) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    /// Creates a valid interval from two bounds in either order.
    pub fn normalized(a: f64, b: f64) -> Self {
        if a > b {
            Self::new(b, a)
        } else {
            Self::new(a, b)
        }
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn set_lower_bound(&mut self, value: f64) {
        self.lower_bound = value;
    }

    pub fn set_upper_bound(&mut self, value: f64) {
        self.upper_bound = value;
    }

    pub fn set_interval(&mut self, lower_bound: f64, upper_bound: f64) {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
    }

    pub fn is_valid(&self) -> bool {
        self.lower_bound <= self.upper_bound
    }

    /// The length of the interval, `0` when invalid.
    pub fn width(&self) -> f64 {
        let w = self.upper_bound - self.lower_bound;
        if w > 0.0 {
            w
        } else {
            0.0
        }
    }

    /// Exact closed-interval membership.
    pub fn contains(&self, value: f64) -> bool {
        self.is_valid() && value >= self.lower_bound && value <= self.upper_bound
    }

    /// Membership with an epsilon scaled by the interval's own width. Tick
    /// values computed by repeated addition accumulate rounding error and
    /// must not be spuriously excluded at the boundary.
    pub fn fuzzy_contains(&self, value: f64) -> bool {
        if !self.is_valid() {
            return false;
        }
        if fuzzy::compare(value, self.lower_bound, self.width()) == Ordering::Less {
            return false;
        }
        if fuzzy::compare(value, self.upper_bound, self.width()) == Ordering::Greater {
            return false;
        }
        true
    }

    /// Tolerant equality; `PartialEq` stays exact.
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        let span = self.width().max(other.width());
        fuzzy::compare_eq(self.lower_bound, other.lower_bound, span)
            && fuzzy::compare_eq(self.upper_bound, other.upper_bound, span)
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.lower_bound <= other.upper_bound
            && other.lower_bound <= self.upper_bound
    }

    /// The smallest interval covering both operands. An invalid operand
    /// contributes nothing.
    pub fn united(&self, other: &Self) -> Self {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => Self::new(
                self.lower_bound.min(other.lower_bound),
                self.upper_bound.max(other.upper_bound),
            ),
            (true, false) => *self,
            (false, true) => *other,
            (false, false) => Self::default(),
        }
    }

    /// The overlap of both operands; invalid or disjoint operands yield the
    /// invalid sentinel.
    pub fn intersected(&self, other: &Self) -> Self {
        if !self.intersects(other) {
            return Self::default();
        }
        Self::new(
            self.lower_bound.max(other.lower_bound),
            self.upper_bound.min(other.upper_bound),
        )
    }

    /// Extends the interval so that it contains `value`. An invalid interval
    /// collapses to `[value, value]`.
    pub fn extended(&self, value: f64) -> Self {
        if !self.is_valid() {
            return Self::new(value, value);
        }
        Self::new(self.lower_bound.min(value), self.upper_bound.max(value))
    }

    /// Shifts both bounds by `offset`.
    pub fn translated(&self, offset: f64) -> Self {
        Self::new(self.lower_bound + offset, self.upper_bound + offset)
    }

    /// Grows the interval outwards by `margin` on both sides.
    pub fn grown(&self, margin: f64) -> Self {
        if !self.is_valid() {
            return *self;
        }
        Self::new(self.lower_bound - margin, self.upper_bound + margin)
    }

    /// Re-centers the interval symmetrically around `value`, keeping the
    /// farther bound's distance on both sides.
    pub fn symmetrized(&self, value: f64) -> Self {
        if !self.is_valid() {
            return Self::new(value, value);
        }
        let delta = (value - self.lower_bound)
            .abs()
            .max((value - self.upper_bound).abs());
        Self::new(value - delta, value + delta)
    }

    /// Linear interpolation of both bounds independently; supplies the
    /// primitive for animated transitions between two scale configurations.
    pub fn interpolated(&self, to: &Self, ratio: f64) -> Self {
        Self::new(
            self.lower_bound + ratio * (to.lower_bound - self.lower_bound),
            self.upper_bound + ratio * (to.upper_bound - self.upper_bound),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_default_is_invalid() {
        let interval = Interval::default();
        assert!(!interval.is_valid());
        assert_eq!(interval.width(), 0.0);
        assert!(!interval.contains(0.0));
        assert!(!interval.fuzzy_contains(0.0));
    }

    #[test]
    fn test_normalized() {
        let interval = Interval::normalized(10.0, 0.0);
        assert_eq!(interval.lower_bound(), 0.0);
        assert_eq!(interval.upper_bound(), 10.0);

        let interval = Interval::normalized(0.0, 10.0);
        assert_eq!(interval.lower_bound(), 0.0);
        assert_eq!(interval.upper_bound(), 10.0);
    }

    #[test]
    fn test_width() {
        assert_eq!(Interval::new(2.0, 7.5).width(), 5.5);
        assert_eq!(Interval::new(5.0, 5.0).width(), 0.0);
        assert_eq!(Interval::new(7.0, 2.0).width(), 0.0);
    }

    #[test]
    fn test_contains() {
        let interval = Interval::new(0.0, 10.0);
        assert!(interval.contains(0.0));
        assert!(interval.contains(10.0));
        assert!(interval.contains(5.0));
        assert!(!interval.contains(-0.1));
        assert!(!interval.contains(10.1));
    }

    #[test]
    fn test_fuzzy_contains() {
        let interval = Interval::new(0.0, 10.0);

        // a few ulps of drift at the boundary are tolerated
        assert!(interval.fuzzy_contains(10.0 + 1e-9));
        assert!(interval.fuzzy_contains(-1e-9));

        // but a real overshoot is not
        assert!(!interval.fuzzy_contains(10.001));
        assert!(!interval.fuzzy_contains(-0.001));
    }

    #[test]
    fn test_fuzzy_contains_scales_with_width() {
        // the tolerance follows the interval width, so a large range
        // accepts proportionally more drift
        let interval = Interval::new(0.0, 1e9);
        assert!(interval.fuzzy_contains(1e9 + 100.0));

        let interval = Interval::new(0.0, 1e-6);
        assert!(!interval.fuzzy_contains(1e-6 + 1e-10));
    }

    #[test]
    fn test_united() {
        let a = Interval::new(0.0, 5.0);
        let b = Interval::new(3.0, 10.0);
        assert_eq!(a.united(&b), Interval::new(0.0, 10.0));

        let invalid = Interval::default();
        assert_eq!(a.united(&invalid), a);
        assert_eq!(invalid.united(&b), b);
        assert!(!invalid.united(&invalid).is_valid());
    }

    #[test]
    fn test_intersected() {
        let a = Interval::new(0.0, 5.0);
        let b = Interval::new(3.0, 10.0);
        assert_eq!(a.intersected(&b), Interval::new(3.0, 5.0));

        // disjoint and invalid operands yield the sentinel
        let c = Interval::new(6.0, 10.0);
        assert!(!a.intersected(&c).is_valid());
        assert!(!a.intersected(&Interval::default()).is_valid());
    }

    #[test]
    fn test_extended() {
        let interval = Interval::new(0.0, 5.0);
        assert_eq!(interval.extended(10.0), Interval::new(0.0, 10.0));
        assert_eq!(interval.extended(-2.0), Interval::new(-2.0, 5.0));
        assert_eq!(interval.extended(3.0), interval);

        assert_eq!(Interval::default().extended(4.0), Interval::new(4.0, 4.0));
    }

    #[test]
    fn test_translated() {
        let interval = Interval::new(0.0, 5.0).translated(2.5);
        assert_eq!(interval, Interval::new(2.5, 7.5));
    }

    #[test]
    fn test_grown() {
        let interval = Interval::new(2.0, 5.0).grown(1.0);
        assert_eq!(interval, Interval::new(1.0, 6.0));

        assert!(!Interval::default().grown(1.0).is_valid());
    }

    #[test]
    fn test_symmetrized() {
        let interval = Interval::new(0.0, 10.0).symmetrized(2.0);
        assert_eq!(interval, Interval::new(-6.0, 10.0));

        let interval = Interval::new(-3.0, 3.0).symmetrized(0.0);
        assert_eq!(interval, Interval::new(-3.0, 3.0));
    }

    #[test]
    fn test_interpolated() {
        let from = Interval::new(0.0, 10.0);
        let to = Interval::new(100.0, 200.0);

        assert_eq!(from.interpolated(&to, 0.0), from);
        assert_eq!(from.interpolated(&to, 1.0), to);

        let mid = from.interpolated(&to, 0.5);
        assert_approx_eq!(f64, mid.lower_bound(), 50.0);
        assert_approx_eq!(f64, mid.upper_bound(), 105.0);
    }

    #[test]
    fn test_fuzzy_eq() {
        let a = Interval::new(0.0, 100.0);
        let b = Interval::new(1e-9, 100.0 - 1e-9);
        assert!(a.fuzzy_eq(&b));
        assert_ne!(a, b);

        let c = Interval::new(0.1, 100.0);
        assert!(!a.fuzzy_eq(&c));
    }

    #[test]
    fn test_serde_round_trip() {
        let interval = Interval::new(1.5, 42.0);
        let json = serde_json::to_string(&interval).unwrap();
        let back: Interval = serde_json::from_str(&json).unwrap();
        assert_eq!(interval, back);
    }
}
