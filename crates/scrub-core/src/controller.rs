//! The press / hold / drag / release state machine.

use crate::config::ScrubConfig;
use crate::platform::{ListenKind, Overlay, Scheduler};
use crate::session::DragSession;
use crate::tier::{Tier, TierSet};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrubState {
    Idle,
    /// Pressed; overlay not shown yet.
    Pending,
    /// Overlay visible and tracking motion.
    Active,
}

/// Notifications for the host, produced in the order they happened.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrubEvent {
    ValueChanged(f64),
    /// The drag finished after the overlay was shown; the host may commit the value.
    Committed,
}

enum Phase<S: Scheduler> {
    Idle,
    Pending {
        session: DragSession,
        _release: S::Listener,
        show: S::Task,
    },
    Active {
        session: DragSession,
        _release: S::Listener,
        _motion: S::Listener,
    },
}

pub struct DragScrubController<O: Overlay, S: Scheduler> {
    config: ScrubConfig,
    tiers: TierSet,
    overlay: O,
    scheduler: S,
    phase: Phase<S>,
}

impl<O: Overlay, S: Scheduler> DragScrubController<O, S> {
    pub fn new(config: ScrubConfig, overlay: O, scheduler: S) -> Self {
        let tiers = TierSet::from_config(&config);
        Self {
            config,
            tiers,
            overlay,
            scheduler,
            phase: Phase::Idle,
        }
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    pub fn state(&self) -> ScrubState {
        match self.phase {
            Phase::Idle => ScrubState::Idle,
            Phase::Pending { .. } => ScrubState::Pending,
            Phase::Active { .. } => ScrubState::Active,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Pending { session, .. } | Phase::Active { session, .. } => Some(session),
        }
    }

    pub fn active_tier(&self) -> Option<Tier> {
        self.session().map(|s| s.active_tier)
    }

    /// Places the overlay; call before `begin`.
    pub fn set_position(&mut self, pos: Vec2) {
        self.overlay.set_position(pos);
    }

    /// Starts a session from a press at `pointer` on an input holding `value`.
    ///
    /// Ignored while a session is already live.
    pub fn begin(&mut self, pointer: Vec2, value: f64) {
        if !matches!(self.phase, Phase::Idle) {
            log::warn!("[scrub] begin ignored: a session is already {:?}", self.state());
            return;
        }
        let tier = self.tiers.initial_for(value);
        self.overlay.highlight(tier.zone_index());
        self.overlay.anchor_zone(tier.zone_index(), self.tiers.len());

        let release = self.scheduler.listen(ListenKind::Release);
        let show = self.scheduler.defer_show(self.config.show_delay());
        log::debug!(
            "[scrub] pending at x={:.0} value={} tier={}",
            pointer.x,
            value,
            tier.magnitude()
        );
        self.phase = Phase::Pending {
            session: DragSession::new(pointer.x, value, tier),
            _release: release,
            show,
        };
    }

    /// The deferred show task fired: reveal the overlay and start tracking motion.
    pub fn show_elapsed(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Pending {
                session,
                _release,
                show,
            } => {
                drop(show);
                self.overlay.set_visible(true);
                let motion = self.scheduler.listen(ListenKind::Move);
                log::debug!("[scrub] active");
                self.phase = Phase::Active {
                    session,
                    _release,
                    _motion: motion,
                };
            }
            other => {
                log::debug!("[scrub] stale show ignored");
                self.phase = other;
            }
        }
    }

    pub fn pointer_move(&mut self, pointer: Vec2, events: &mut Vec<ScrubEvent>) {
        let Phase::Active { session, .. } = &mut self.phase else {
            return;
        };

        let candidate = session.candidate_value(pointer.x, self.config.accel_px());
        if session.record(candidate) {
            events.push(ScrubEvent::ValueChanged(candidate));
        }

        let bottoms = self.overlay.zone_bottoms();
        let Some(tier) = self.tiers.resolve_zone(&bottoms, pointer.y) else {
            return;
        };
        if tier.zone_index() == session.active_tier.zone_index() {
            return;
        }
        self.overlay.highlight(tier.zone_index());
        if session.switch_tier(tier, pointer.x) {
            log::debug!(
                "[scrub] tier {} re-anchored at x={:.0} value={}",
                tier.magnitude(),
                session.anchor_pointer_x,
                session.anchor_value
            );
        }
    }

    /// Finishes the session on release or blur. A no-op when idle.
    ///
    /// Pushes `Committed` only when the overlay had been shown; an early release is a
    /// plain click and cancels the pending show instead.
    pub fn end(&mut self, events: &mut Vec<ScrubEvent>) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => log::debug!("[scrub] end ignored: no live session"),
            Phase::Pending { .. } => log::debug!("[scrub] released before show; treated as click"),
            Phase::Active { session, .. } => {
                self.overlay.set_visible(false);
                log::info!(
                    "[scrub] committed value={:?} after {:?}",
                    session.current_value,
                    session.started_at.elapsed()
                );
                events.push(ScrubEvent::Committed);
            }
        }
    }
}
