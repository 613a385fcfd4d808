// Page and overlay presentation constants

// Overlay theme: amber on charcoal, monospace labels
pub const MONOSPACE: &str = "\"Source Code Pro\", \"Droid Sans Mono\", monospace";
pub const ACCENT: &str = "#c93";
pub const HIGHLIGHT_TEXT: &str = "#222";
pub const ZONE_PADDING: &str = ".5em 1em";

// Applied once to the overlay root. It never takes pointer events: zone hit-testing
// reads layout geometry instead.
pub const OVERLAY_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("transform", "translate(0, 0)"),
    ("font-family", MONOSPACE),
    ("background-color", "#232323"),
    ("color", ACCENT),
    ("border", "2px solid #c93"),
    ("line-height", "1em"),
    ("margin-left", "1em"),
    ("border-radius", "6px"),
    ("box-shadow", "rgba(0, 0, 0, .4) 0px 4px 16px"),
    ("z-index", "9999"),
    ("pointer-events", "none"),
];

// Vertical center of each zone as a percentage of overlay height (three zones, borders included)
pub const ZONE_CENTER_PCTS: [f32; 3] = [10.5, 50.0, 89.5];

// Mip previews
pub const PREVIEW_MAX_WIDTH: f64 = 600.0;
pub const PREVIEW_BACKGROUND: &str = "repeating-conic-gradient(#539fea 0% 25%, #3a83cb 0% 50%)";
pub const PREVIEW_TILE: &str = "2em 2em";
pub const SELECTED_CLASS: &str = "Selected";

// Scrubbed dimensions never go below this
pub const MIN_INPUT_VALUE: f64 = 1.0;

#[inline]
pub fn zone_center_pct(zone: usize, zone_count: usize) -> f32 {
    if zone_count == ZONE_CENTER_PCTS.len() {
        if let Some(pct) = ZONE_CENTER_PCTS.get(zone) {
            return *pct;
        }
    }
    if zone_count == 0 {
        return 0.0;
    }
    (zone as f32 + 0.5) / zone_count as f32 * 100.0
}

#[inline]
pub fn overlay_transform(zone: usize, zone_count: usize) -> String {
    format!("translate(0, -{}%)", zone_center_pct(zone, zone_count))
}

#[inline]
pub fn preview_scale(base_width: u32) -> f64 {
    (PREVIEW_MAX_WIDTH / f64::from(base_width)).min(1.0)
}

#[inline]
pub fn clamp_input_value(value: f64) -> f64 {
    value.max(MIN_INPUT_VALUE)
}

/// Numeric input value as a dimension; empty, negative or non-finite reads as 0.
#[inline]
pub fn input_to_u32(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}
