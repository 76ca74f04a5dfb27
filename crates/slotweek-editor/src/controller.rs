//! Drag-selection state machine.
//!
//! A drag is `Idle` or `Dragging { day, anchor, mode }`. Pointer events are
//! fed through [`SelectionController::dispatch`] (or the individual
//! `begin`/`extend`/`end`/`cancel` calls) and turned into bitmap writes:
//!
//! ```text
//! Idle ──begin──▶ Dragging ──extend──▶ Dragging
//!   ▲                │
//!   └──end/cancel────┘
//! ```
//!
//! While `Dragging`, a window-level release listener is held through the
//! [`GridHost`]; it is released on every way out of the state, including
//! dropping the controller mid-drag.

use slotweek_core::{Day, DayRow, SlotBitmap, SlotIndex};
use std::fmt;

use crate::event::PointerEvent;
use crate::host::{GridHost, ListenerId};
use crate::policy::ExtendPolicy;

/// Whether a drag paints cells available or clears them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Cells become available.
    Select,
    /// Cells become unavailable.
    Deselect,
}

impl DragMode {
    /// Mode for a drag starting on a cell whose current flag is `current`.
    pub fn starting_on(current: bool) -> Self {
        if current {
            DragMode::Deselect
        } else {
            DragMode::Select
        }
    }

    /// Flag value this mode writes.
    pub fn value(self) -> bool {
        matches!(self, DragMode::Select)
    }
}

impl fmt::Display for DragMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragMode::Select => write!(f, "select"),
            DragMode::Deselect => write!(f, "deselect"),
        }
    }
}

/// An active drag. Its day never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    day: Day,
    anchor: SlotIndex,
    mode: DragMode,
    listener: ListenerId,
    // Row as it was before the drag touched it, for `ExtendPolicy::Restore`.
    snapshot: Option<DayRow>,
}

impl DragSession {
    /// Row the drag is confined to.
    pub fn day(&self) -> Day {
        self.day
    }

    /// Slot where the drag started.
    pub fn anchor(&self) -> SlotIndex {
        self.anchor
    }

    /// Paint mode fixed at `begin`.
    pub fn mode(&self) -> DragMode {
        self.mode
    }

    /// Release listener held for the session.
    pub fn listener(&self) -> ListenerId {
        self.listener
    }
}

/// State of the drag interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging(DragSession),
}

impl DragState {
    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

/// Owns the week's [`SlotBitmap`] and mutates it from pointer gestures.
pub struct SelectionController<H: GridHost> {
    bitmap: SlotBitmap,
    state: DragState,
    policy: ExtendPolicy,
    host: H,
}

impl<H: GridHost> SelectionController<H> {
    /// Creates a controller over an all-false bitmap.
    pub fn new(host: H) -> Self {
        Self::with_bitmap(host, SlotBitmap::new())
    }

    /// Creates a controller over an existing bitmap, e.g. a stored schedule
    /// loaded for editing.
    pub fn with_bitmap(host: H, bitmap: SlotBitmap) -> Self {
        Self {
            bitmap,
            state: DragState::Idle,
            policy: ExtendPolicy::default(),
            host,
        }
    }

    /// Sets the extend policy.
    ///
    /// A drag in progress is closed first; the policy only applies to
    /// sessions started after the change.
    pub fn with_policy(mut self, policy: ExtendPolicy) -> Self {
        if self.close_session().is_some() {
            tracing::debug!(policy = %policy, "Policy changed during a drag; session closed");
        }
        self.policy = policy;
        self
    }

    /// Current availability flags.
    pub fn bitmap(&self) -> &SlotBitmap {
        &self.bitmap
    }

    /// Current drag state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Active session, if dragging.
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Returns `true` while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// Extend policy in effect.
    pub fn policy(&self) -> ExtendPolicy {
        self.policy
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Routes one pointer event to the matching operation.
    pub fn dispatch(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { day, slot } => {
                self.begin(day, slot);
            }
            PointerEvent::Enter { day, slot } => {
                self.extend(day, slot);
            }
            PointerEvent::Up => self.end(),
            PointerEvent::Leave => self.cancel(),
        }
    }

    /// Pointer pressed on `(day, slot)`: start a drag there.
    ///
    /// The mode comes from the cell's current flag (set ⇒ deselect, clear ⇒
    /// select) and the cell is painted immediately. A drag already in
    /// progress is closed first.
    pub fn begin(&mut self, day: Day, slot: SlotIndex) -> DragMode {
        if self.close_session().is_some() {
            tracing::debug!("begin during an active drag; previous session closed");
        }

        let mode = DragMode::starting_on(self.bitmap.get(day, slot));
        let snapshot = match self.policy {
            ExtendPolicy::Restore => Some(*self.bitmap.row(day)),
            ExtendPolicy::Sticky => None,
        };
        let listener = self.host.attach_release_listener();

        self.bitmap.set(day, slot, mode.value());
        self.state = DragState::Dragging(DragSession {
            day,
            anchor: slot,
            mode,
            listener,
            snapshot,
        });
        self.host.redraw_row(day);

        tracing::debug!(day = %day, anchor = slot.get(), mode = %mode, "Drag started");
        mode
    }

    /// Pointer entered `(day, slot)` during a drag: paint anchor..=slot.
    ///
    /// Returns `false` without touching the bitmap when idle or when `day` is
    /// not the session's day.
    pub fn extend(&mut self, day: Day, slot: SlotIndex) -> bool {
        let DragState::Dragging(session) = &self.state else {
            return false;
        };
        if session.day != day {
            tracing::debug!(
                session_day = %session.day,
                day = %day,
                "Ignoring extend outside the drag's day"
            );
            return false;
        }

        let span = session.anchor.min(slot)..=session.anchor.max(slot);
        let value = session.mode.value();
        match (self.policy, session.snapshot) {
            (ExtendPolicy::Restore, Some(snapshot)) => {
                self.bitmap.set_row(day, snapshot);
                self.bitmap.fill(day, span, value);
            }
            _ => self.bitmap.fill(day, span, value),
        }
        self.host.redraw_row(day);

        tracing::debug!(day = %day, slot = slot.get(), "Drag extended");
        true
    }

    /// Pointer released: the drag ends, the bitmap stays as painted.
    pub fn end(&mut self) {
        if let Some(session) = self.close_session() {
            tracing::debug!(day = %session.day, "Drag ended");
        }
    }

    /// Window-level release or leave: the drag ends without rollback.
    pub fn cancel(&mut self) {
        if let Some(session) = self.close_session() {
            tracing::debug!(day = %session.day, "Drag cancelled");
        }
    }

    /// Clears the bitmap and any drag, then redraws every row.
    pub fn reset(&mut self) {
        self.close_session();
        self.bitmap.clear();
        for day in Day::ALL {
            self.host.redraw_row(day);
        }
        tracing::debug!("Selection reset");
    }

    /// Replaces the bitmap, e.g. when loading a stored schedule.
    pub fn replace_bitmap(&mut self, bitmap: SlotBitmap) {
        self.close_session();
        self.bitmap = bitmap;
        for day in Day::ALL {
            self.host.redraw_row(day);
        }
    }

    /// Ends any drag and hands back the bitmap.
    pub fn into_bitmap(mut self) -> SlotBitmap {
        self.close_session();
        std::mem::take(&mut self.bitmap)
    }

    // Every exit from `Dragging` goes through here.
    fn close_session(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(session) => {
                self.host.detach_release_listener(session.listener);
                Some(session)
            }
            DragState::Idle => None,
        }
    }
}

impl<H: GridHost> Drop for SelectionController<H> {
    fn drop(&mut self) {
        if self.close_session().is_some() {
            tracing::debug!("Controller dropped mid-drag; release listener detached");
        }
    }
}

impl<H: GridHost> fmt::Debug for SelectionController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("state", &self.state)
            .field("policy", &self.policy)
            .field("selected", &self.bitmap.selected_count())
            .finish()
    }
}
