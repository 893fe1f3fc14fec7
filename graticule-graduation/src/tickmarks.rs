use graticule_common::fuzzy;
use serde::{Deserialize, Serialize};

/// The visual weight of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickRole {
    Minor,
    Medium,
    Major,
}

impl TickRole {
    /// All roles, minor first.
    pub const ALL: [TickRole; 3] = [TickRole::Minor, TickRole::Medium, TickRole::Major];
}

/// The output of a scale division: three ordered tick sequences, one per
/// [`TickRole`].
///
/// Each sequence is sorted ascending unless the set has been inverted, then
/// descending. The container has no back-reference to the interval or the
/// engine that produced it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tickmarks {
    ticks: [Vec<f64>; 3],
}

impl Tickmarks {
    pub fn new(minor: Vec<f64>, medium: Vec<f64>, major: Vec<f64>) -> Self {
        Self {
            ticks: [minor, medium, major],
        }
    }

    pub fn ticks(&self, role: TickRole) -> &[f64] {
        &self.ticks[role as usize]
    }

    pub fn set_ticks(&mut self, role: TickRole, ticks: Vec<f64>) {
        self.ticks[role as usize] = ticks;
    }

    pub fn minor_ticks(&self) -> &[f64] {
        self.ticks(TickRole::Minor)
    }

    pub fn medium_ticks(&self) -> &[f64] {
        self.ticks(TickRole::Medium)
    }

    pub fn major_ticks(&self) -> &[f64] {
        self.ticks(TickRole::Major)
    }

    pub fn tick_count(&self, role: TickRole) -> usize {
        self.ticks[role as usize].len()
    }

    pub fn total_tick_count(&self) -> usize {
        self.ticks.iter().map(Vec::len).sum()
    }

    pub fn tick_at(&self, role: TickRole, index: usize) -> Option<f64> {
        self.ticks[role as usize].get(index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.iter().all(Vec::is_empty)
    }

    /// Reverses all three sequences in place. Applying it twice restores
    /// the original sequences bit for bit.
    pub fn invert(&mut self) {
        for ticks in &mut self.ticks {
            ticks.reverse();
        }
    }

    /// Clears all three sequences.
    pub fn reset(&mut self) {
        for ticks in &mut self.ticks {
            ticks.clear();
        }
    }

    /// Tolerant tier-by-tier comparison, with the epsilon scaled to each
    /// tier's own span. `PartialEq` stays exact.
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        TickRole::ALL.iter().all(|&role| {
            let a = self.ticks(role);
            let b = other.ticks(role);
            if a.len() != b.len() {
                return false;
            }

            let span = match (a.first(), a.last()) {
                (Some(first), Some(last)) => (last - first).abs(),
                _ => 0.0,
            };
            a.iter()
                .zip(b.iter())
                .all(|(&x, &y)| fuzzy::compare_eq(x, y, span))
        })
    }
}
