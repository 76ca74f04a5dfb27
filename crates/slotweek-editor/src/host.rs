//! The seam between the selection controller and the UI runtime hosting it.

use slotweek_core::Day;
use std::collections::BTreeSet;
use std::fmt;

/// Handle for a window-level release listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wraps a raw listener handle issued by the host.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Services the controller needs from the UI runtime.
///
/// Calls arrive on the UI event thread, one at a time.
pub trait GridHost {
    /// Repaint one day row after its flags changed.
    fn redraw_row(&mut self, day: Day);

    /// Start listening for pointer release/leave at window scope.
    ///
    /// The host must route that signal back as
    /// [`SelectionController::cancel`](crate::SelectionController::cancel).
    fn attach_release_listener(&mut self) -> ListenerId;

    /// Stop listening; `id` was returned by `attach_release_listener`.
    fn detach_release_listener(&mut self, id: ListenerId);
}

impl<H: GridHost + ?Sized> GridHost for &mut H {
    fn redraw_row(&mut self, day: Day) {
        (**self).redraw_row(day);
    }

    fn attach_release_listener(&mut self) -> ListenerId {
        (**self).attach_release_listener()
    }

    fn detach_release_listener(&mut self, id: ListenerId) {
        (**self).detach_release_listener(id);
    }
}

impl<H: GridHost + ?Sized> GridHost for Box<H> {
    fn redraw_row(&mut self, day: Day) {
        (**self).redraw_row(day);
    }

    fn attach_release_listener(&mut self) -> ListenerId {
        (**self).attach_release_listener()
    }

    fn detach_release_listener(&mut self, id: ListenerId) {
        (**self).detach_release_listener(id);
    }
}

/// Headless host that records what the controller asked of it.
///
/// Used by the CLI replay and by tests to check redraws and listener
/// accounting.
#[derive(Debug, Default)]
pub struct RecordingHost {
    redraws: Vec<Day>,
    live: BTreeSet<ListenerId>,
    next_id: u64,
    attached_total: u64,
    stray_detaches: u64,
}

impl RecordingHost {
    /// Creates an empty recording host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows redrawn so far, in call order.
    pub fn redraws(&self) -> &[Day] {
        &self.redraws
    }

    /// Drains the recorded redraws.
    pub fn take_redraws(&mut self) -> Vec<Day> {
        std::mem::take(&mut self.redraws)
    }

    /// Number of listeners currently attached.
    pub fn live_listeners(&self) -> usize {
        self.live.len()
    }

    /// Number of listeners ever attached.
    pub fn attached_total(&self) -> u64 {
        self.attached_total
    }

    /// Detach calls for ids that were not live.
    pub fn stray_detaches(&self) -> u64 {
        self.stray_detaches
    }
}

impl GridHost for RecordingHost {
    fn redraw_row(&mut self, day: Day) {
        self.redraws.push(day);
    }

    fn attach_release_listener(&mut self) -> ListenerId {
        self.next_id += 1;
        self.attached_total += 1;
        let id = ListenerId::new(self.next_id);
        self.live.insert(id);
        id
    }

    fn detach_release_listener(&mut self, id: ListenerId) {
        if !self.live.remove(&id) {
            tracing::warn!(listener = %id, "Detach for a listener that is not attached");
            self.stray_detaches += 1;
        }
    }
}
