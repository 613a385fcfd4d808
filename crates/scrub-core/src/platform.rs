//! Seams between the controller and whatever hosts it (a browser page, a test).

use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

/// Lower edge of each overlay zone, top zone first, in pointer coordinates.
pub type ZoneBottoms = SmallVec<[f32; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenKind {
    /// Global pointer release.
    Release,
    /// Global pointer motion, observed in the capture phase.
    Move,
}

/// Acquires global listeners and the deferred show task.
///
/// Both are returned as guards: dropping a listener unregisters it and dropping a task
/// cancels it if it has not fired yet. The controller keeps guards inside its state so
/// that leaving a state releases exactly what that state acquired.
pub trait Scheduler {
    type Listener;
    type Task;

    fn listen(&mut self, kind: ListenKind) -> Self::Listener;

    /// Arranges for the host to call `DragScrubController::show_elapsed` after `delay`.
    fn defer_show(&mut self, delay: Duration) -> Self::Task;
}

/// The floating tier picker.
pub trait Overlay {
    /// Screen position of the overlay's origin.
    fn set_position(&mut self, pos: Vec2);

    /// Shifts the overlay vertically so `zone` is centered on its origin.
    fn anchor_zone(&mut self, zone: usize, zone_count: usize);

    /// Highlights `zone` and clears every other zone.
    fn highlight(&mut self, zone: usize);

    fn set_visible(&mut self, visible: bool);

    fn zone_bottoms(&self) -> ZoneBottoms;
}
