// Host-side tests for tier selection, zone hit-testing and scrub configuration.

use scrub_core::*;
use std::time::Duration;

fn magnitude_for(value: f64) -> f64 {
    TierSet::default().initial_for(value).magnitude()
}

#[test]
fn default_tiers_are_ordered_top_down() {
    let tiers = TierSet::default();
    let listed: Vec<(usize, f64)> = tiers.iter().map(|t| (t.zone_index(), t.magnitude())).collect();
    assert_eq!(listed, vec![(0, 100.0), (1, 10.0), (2, 1.0)]);
    assert_eq!(tiers.get(1).map(|t| t.label()), Some("10".to_string()));
    assert_eq!(tiers.get(3), None);
}

#[test]
fn initial_exponent_picks_smallest_fitting_power() {
    assert_eq!(initial_exponent(0.0), -2);
    assert_eq!(initial_exponent(0.05), -2);
    assert_eq!(initial_exponent(0.5), -1);
    assert_eq!(initial_exponent(5.0), 0);
    assert_eq!(initial_exponent(-9.5), 0);
    assert_eq!(initial_exponent(10.0), 1);
    assert_eq!(initial_exponent(-10.0), 1);
    assert_eq!(initial_exponent(500.0), 2);
    assert_eq!(initial_exponent(-999.0), 2);
}

#[test]
fn initial_exponent_falls_back_outside_window() {
    assert_eq!(initial_exponent(1000.0), 0);
    assert_eq!(initial_exponent(-123456.0), 0);
    assert_eq!(initial_exponent(f64::NAN), 0);
}

#[test]
fn initial_tier_clamps_to_realized_tiers() {
    assert_eq!(magnitude_for(0.001), 1.0);
    assert_eq!(magnitude_for(0.5), 1.0);
    assert_eq!(magnitude_for(5.0), 1.0);
    assert_eq!(magnitude_for(64.0), 10.0);
    assert_eq!(magnitude_for(-64.0), 10.0);
    assert_eq!(magnitude_for(500.0), 100.0);
    assert_eq!(magnitude_for(4096.0), 1.0);
}

#[test]
fn nearest_exponent_on_sparse_tiers() {
    let config = ScrubConfig::new(Duration::from_millis(100), 15.0, &[1000.0, 1.0]).unwrap();
    let tiers = TierSet::from_config(&config);
    assert_eq!(tiers.nearest_to_exponent(3).magnitude(), 1000.0);
    assert_eq!(tiers.nearest_to_exponent(2).magnitude(), 1000.0);
    assert_eq!(tiers.nearest_to_exponent(1).magnitude(), 1.0);
    assert_eq!(tiers.nearest_to_exponent(-2).magnitude(), 1.0);
}

#[test]
fn zone_scan_first_match_wins() {
    let bottoms = [40.0, 70.0, 110.0];
    assert_eq!(zone_at(&bottoms, -10.0), Some(0));
    assert_eq!(zone_at(&bottoms, 39.0), Some(0));
    assert_eq!(zone_at(&bottoms, 40.0), Some(1));
    assert_eq!(zone_at(&bottoms, 109.0), Some(2));
    assert_eq!(zone_at(&bottoms, 110.0), None);
    assert_eq!(zone_at(&[], 0.0), None);
}

#[test]
fn resolve_zone_ignores_geometry_without_tier() {
    let tiers = TierSet::default();
    assert_eq!(tiers.resolve_zone(&[10.0, 20.0, 30.0, 40.0], 35.0), None);
    assert_eq!(
        tiers.resolve_zone(&[10.0, 20.0, 30.0], 15.0).map(|t| t.magnitude()),
        Some(10.0)
    );
}

#[test]
fn rounding_is_half_up() {
    assert_eq!(round_half_up(0.5), 1.0);
    assert_eq!(round_half_up(0.49), 0.0);
    assert_eq!(round_half_up(-0.5), 0.0);
    assert_eq!(round_half_up(-0.51), -1.0);
    assert_eq!(round_half_up(-1.5), -1.0);
}

#[test]
fn default_config_matches_constants() {
    let config = ScrubConfig::default();
    assert_eq!(config.show_delay(), SHOW_DELAY);
    assert_eq!(config.accel_px(), ACCEL_PX);
    assert_eq!(config.magnitudes(), &DEFAULT_MAGNITUDES);
}

#[test]
fn config_rejects_bad_layouts() {
    let delay = Duration::from_millis(100);
    assert_eq!(ScrubConfig::new(delay, 15.0, &[]), Err(ConfigError::NoTiers));
    assert_eq!(
        ScrubConfig::new(delay, 15.0, &[10.0, 0.0]),
        Err(ConfigError::InvalidMagnitude(0.0))
    );
    assert_eq!(
        ScrubConfig::new(delay, 15.0, &[1.0, 10.0]),
        Err(ConfigError::NotDescending {
            prev: 1.0,
            next: 10.0
        })
    );
    assert_eq!(
        ScrubConfig::new(delay, 0.0, &[1.0]),
        Err(ConfigError::InvalidAccel(0.0))
    );
    assert!(ScrubConfig::new(delay, 15.0, &[5.0]).is_ok());
}
