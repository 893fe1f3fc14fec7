use graticule_common::{fuzzy, Interval};
use serde::{Deserialize, Serialize};

use crate::step;
use crate::tickmarks::{TickRole, Tickmarks};
use crate::ticks;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScaleEngineConfig {
    /// The output scale runs from high to low.
    pub inverted: bool,
    /// Suppresses the outward alignment of the range in `auto_scale`, so
    /// the bounds stay where the caller put them.
    pub floating: bool,
}

/// Computes "nice" step sizes and three-tier tick sets for drawing scales
/// on sliders, dials and gauges.
///
/// Engine instances carry only immutable configuration; every division
/// returns a fresh [`Tickmarks`] value, so `&self` methods may be called
/// from multiple threads without synchronization.
#[derive(Clone, Debug, Default)]
pub struct ScaleEngine {
    inverted: bool,
    floating: bool,
}

/// The result of [`ScaleEngine::auto_scale`]: the possibly re-aligned (and
/// possibly swapped) bounds together with the chosen step size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutoScale {
    pub x1: f64,
    pub x2: f64,
    pub step_size: f64,
}

impl ScaleEngine {
    pub fn new(config: &ScaleEngineConfig) -> Self {
        Self {
            inverted: config.inverted,
            floating: config.floating,
        }
    }

    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn with_floating(mut self, floating: bool) -> Self {
        self.floating = floating;
        self
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn floating(&self) -> bool {
        self.floating
    }

    /// Divides the range `[x1, x2]` into major, medium and minor ticks.
    ///
    /// A `step_size` of `None` (or `0`) selects a "nice" step for at most
    /// `max_major_steps` major intervals. Degenerate inputs (zero width,
    /// negative step, unrepresentable width) produce empty tickmarks,
    /// never an error. A descending range (`x1 > x2`) returns the ticks in
    /// descending order.
    pub fn divide_scale(
        &self,
        x1: f64,
        x2: f64,
        max_major_steps: i32,
        max_minor_steps: i32,
        step_size: Option<f64>,
    ) -> Tickmarks {
        let interval = Interval::normalized(x1, x2);

        if interval.width() > f64::MAX {
            log::warn!("divide_scale: range [{x1}, {x2}] is too wide, returning no ticks");
            return Tickmarks::default();
        }

        if interval.width() <= 0.0 {
            return Tickmarks::default();
        }

        let mut step_size = step_size.unwrap_or(0.0);
        if step_size < 0.0 {
            return Tickmarks::default();
        }

        if step_size == 0.0 {
            step_size = step::step_size(interval.width(), max_major_steps.max(1));
        }

        let mut tickmarks = Tickmarks::default();
        if step_size > 0.0 {
            tickmarks = self.build_ticks(&interval, step_size, max_minor_steps);
        }

        if x1 > x2 {
            tickmarks.invert();
        }

        tickmarks
    }

    /// [`divide_scale`](Self::divide_scale) over an [`Interval`], with
    /// automatic step selection.
    pub fn divide_interval(
        &self,
        interval: &Interval,
        max_major_steps: i32,
        max_minor_steps: i32,
    ) -> Tickmarks {
        self.divide_scale(
            interval.lower_bound(),
            interval.upper_bound(),
            max_major_steps,
            max_minor_steps,
            None,
        )
    }

    /// Chooses a step size for `[x1, x2]` and, unless the engine is
    /// `floating`, snaps the range itself outward to multiples of it.
    ///
    /// When the engine is `inverted` the returned bounds are swapped and
    /// the step size negated.
    pub fn auto_scale(&self, max_num_steps: i32, x1: f64, x2: f64) -> AutoScale {
        let mut interval = Interval::normalized(x1, x2);
        let mut step_size = step::step_size(interval.width(), max_num_steps.max(1));

        if !self.floating {
            interval = align_interval(&interval, step_size);
        }

        let (mut x1, mut x2) = (interval.lower_bound(), interval.upper_bound());
        if self.inverted {
            std::mem::swap(&mut x1, &mut x2);
            step_size = -step_size;
        }

        AutoScale { x1, x2, step_size }
    }

    fn build_ticks(&self, interval: &Interval, step_size: f64, max_minor_steps: i32) -> Tickmarks {
        let bounding = align_interval(interval, step_size);

        let major_ticks = ticks::build_major_ticks(&bounding, step_size);
        let (minor_ticks, medium_ticks) = if max_minor_steps > 0 {
            ticks::build_minor_ticks(&major_ticks, max_minor_steps, step_size)
        } else {
            (Vec::new(), Vec::new())
        };

        let mut tickmarks = Tickmarks::default();
        let tiers = [
            (TickRole::Minor, minor_ticks),
            (TickRole::Medium, medium_ticks),
            (TickRole::Major, major_ticks),
        ];
        for (role, tier) in tiers {
            let mut tier = ticks::strip(&tier, interval);
            for value in &mut tier {
                if fuzzy::is_zero(*value) {
                    *value = 0.0;
                }
            }
            tickmarks.set_ticks(role, tier);
        }

        tickmarks
    }
}

/// Extends `interval` outward to the nearest multiples of `step_size`.
///
/// A bound that already sits on a multiple up to rounding noise is kept as
/// the caller passed it; bounds close to the representable extremes are
/// left untouched because flooring or ceiling them would overflow.
pub fn align_interval(interval: &Interval, step_size: f64) -> Interval {
    if step_size == 0.0 {
        return *interval;
    }

    let mut x1 = interval.lower_bound();
    let mut x2 = interval.upper_bound();

    if -f64::MAX + step_size <= x1 {
        let x = fuzzy::floor_eps(x1, step_size);
        if x.is_finite() && (fuzzy::is_zero(x) || !fuzzy::compare_eq(x1, x, step_size)) {
            x1 = x;
        }
    }

    if f64::MAX - step_size >= x2 {
        let x = fuzzy::ceil_eps(x2, step_size);
        if x.is_finite() && (fuzzy::is_zero(x) || !fuzzy::compare_eq(x2, x, step_size)) {
            x2 = x;
        }
    }

    Interval::new(x1, x2)
}
