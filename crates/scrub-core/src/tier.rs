//! Increment tiers and the zone geometry that selects between them.

use crate::config::ScrubConfig;
use crate::constants::{FALLBACK_EXPONENT, INITIAL_EXPONENT_MAX, INITIAL_EXPONENT_MIN};
use smallvec::SmallVec;

/// One selectable increment magnitude, bound to a zone of the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tier {
    magnitude: f64,
    zone_index: usize,
}

impl Tier {
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// 0 is the topmost zone.
    pub fn zone_index(&self) -> usize {
        self.zone_index
    }

    fn exponent(&self) -> f64 {
        self.magnitude.log10()
    }

    /// Text shown inside the tier's zone.
    pub fn label(&self) -> String {
        format!("{}", self.magnitude)
    }
}

/// Ordered tier list, coarsest (topmost zone) first.
#[derive(Clone, Debug, PartialEq)]
pub struct TierSet {
    tiers: SmallVec<[Tier; 4]>,
}

impl TierSet {
    pub fn from_config(config: &ScrubConfig) -> Self {
        let tiers = config
            .magnitudes()
            .iter()
            .enumerate()
            .map(|(zone_index, &magnitude)| Tier {
                magnitude,
                zone_index,
            })
            .collect();
        Self { tiers }
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn get(&self, zone_index: usize) -> Option<Tier> {
        self.tiers.get(zone_index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tier> + '_ {
        self.tiers.iter().copied()
    }

    /// Starting tier for a drag beginning at `value`.
    ///
    /// Small values start on fine increments and large values on coarse ones, so the
    /// number of steps to reach a nearby target stays roughly constant.
    pub fn initial_for(&self, value: f64) -> Tier {
        self.nearest_to_exponent(initial_exponent(value))
    }

    /// Tier whose magnitude is closest to `10^exponent`, clamping at both ends.
    pub fn nearest_to_exponent(&self, exponent: i32) -> Tier {
        let target = f64::from(exponent);
        let mut best = self.tiers[0];
        for tier in self.tiers.iter().skip(1) {
            if (tier.exponent() - target).abs() < (best.exponent() - target).abs() {
                best = *tier;
            }
        }
        best
    }

    /// Tier under pointer `y`, given each zone's lower edge in the same coordinates.
    ///
    /// `None` when the pointer is at or below every zone; callers keep their current
    /// tier in that case.
    pub fn resolve_zone(&self, zone_bottoms: &[f32], y: f32) -> Option<Tier> {
        zone_at(zone_bottoms, y).and_then(|i| self.get(i))
    }
}

impl Default for TierSet {
    fn default() -> Self {
        Self::from_config(&ScrubConfig::default())
    }
}

/// Smallest probed exponent `e` with `-10^(e+1) < value < 10^(e+1)`.
pub fn initial_exponent(value: f64) -> i32 {
    (INITIAL_EXPONENT_MIN..=INITIAL_EXPONENT_MAX)
        .find(|&e| {
            let bound = 10f64.powi(e + 1);
            value > -bound && value < bound
        })
        .unwrap_or(FALLBACK_EXPONENT)
}

/// First zone, scanning top to bottom, whose lower edge is below `y`.
#[inline]
pub fn zone_at(zone_bottoms: &[f32], y: f32) -> Option<usize> {
    zone_bottoms.iter().position(|&bottom| y < bottom)
}
