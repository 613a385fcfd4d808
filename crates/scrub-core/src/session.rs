use crate::tier::Tier;
use instant::Instant;

/// State of one press-drag-release cycle.
#[derive(Clone, Debug)]
pub struct DragSession {
    pub anchor_pointer_x: f32,
    pub anchor_value: f64,
    pub active_tier: Tier,
    /// Last value reported to the host; `None` until the first pointer move.
    pub current_value: Option<f64>,
    pub started_at: Instant,
}

impl DragSession {
    pub fn new(pointer_x: f32, value: f64, tier: Tier) -> Self {
        Self {
            anchor_pointer_x: pointer_x,
            anchor_value: value,
            active_tier: tier,
            current_value: None,
            started_at: Instant::now(),
        }
    }

    /// Whole increment steps between the anchor and `pointer_x`.
    pub fn step_count(&self, pointer_x: f32, accel_px: f32) -> f64 {
        let dx = f64::from(pointer_x - self.anchor_pointer_x) / f64::from(accel_px);
        round_half_up(dx)
    }

    pub fn candidate_value(&self, pointer_x: f32, accel_px: f32) -> f64 {
        self.anchor_value + self.step_count(pointer_x, accel_px) * self.active_tier.magnitude()
    }

    /// Stores `value` as the latest reported value; true when it differs from the last.
    pub fn record(&mut self, value: f64) -> bool {
        if self.current_value == Some(value) {
            return false;
        }
        self.current_value = Some(value);
        true
    }

    /// Switches to `tier`. Restarts the displacement baseline at `pointer_x` when the
    /// value has moved since the last anchor, and reports whether it did.
    pub fn switch_tier(&mut self, tier: Tier, pointer_x: f32) -> bool {
        self.active_tier = tier;
        match self.current_value {
            Some(current) if current != self.anchor_value => {
                self.anchor_pointer_x = pointer_x;
                self.anchor_value = current;
                true
            }
            _ => false,
        }
    }
}

/// Rounds halves toward positive infinity (`-0.5` becomes `0`, `0.5` becomes `1`).
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
