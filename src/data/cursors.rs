//! Cursor placement and dragging for the active channel.
//!
//! Two independent pairs: vertical cursors sit at a time value and are placed with
//! the primary button, horizontal cursors sit at an amplitude and are placed with
//! the secondary button. A press close to an existing cursor grabs it instead of
//! placing a new one.

/// Fraction of the visible axis span within which a press grabs an existing cursor.
pub const GRAB_TOLERANCE: f64 = 0.02;

/// The axis a cursor pair measures along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical cursor lines positioned on the time axis.
    Time,
    /// Horizontal cursor lines positioned on the amplitude axis.
    Amplitude,
}

/// One of the four cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorId {
    V1,
    V2,
    H1,
    H2,
}

impl CursorId {
    pub fn axis(self) -> Axis {
        match self {
            CursorId::V1 | CursorId::V2 => Axis::Time,
            CursorId::H1 | CursorId::H2 => Axis::Amplitude,
        }
    }

    /// Position within its pair.
    pub fn slot(self) -> usize {
        match self {
            CursorId::V1 | CursorId::H1 => 0,
            CursorId::V2 | CursorId::H2 => 1,
        }
    }

    fn of(axis: Axis, slot: usize) -> Self {
        match (axis, slot) {
            (Axis::Time, 0) => CursorId::V1,
            (Axis::Time, _) => CursorId::V2,
            (Axis::Amplitude, 0) => CursorId::H1,
            (Axis::Amplitude, _) => CursorId::H2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingV1,
    DraggingV2,
    DraggingH1,
    DraggingH2,
}

impl DragState {
    pub fn target(self) -> Option<CursorId> {
        match self {
            DragState::Idle => None,
            DragState::DraggingV1 => Some(CursorId::V1),
            DragState::DraggingV2 => Some(CursorId::V2),
            DragState::DraggingH1 => Some(CursorId::H1),
            DragState::DraggingH2 => Some(CursorId::H2),
        }
    }

    fn grab(id: CursorId) -> Self {
        match id {
            CursorId::V1 => DragState::DraggingV1,
            CursorId::V2 => DragState::DraggingV2,
            CursorId::H1 => DragState::DraggingH1,
            CursorId::H2 => DragState::DraggingH2,
        }
    }
}

/// Up to two cursor positions on one axis. `second` is only ever set after `first`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorPair {
    first: Option<f64>,
    second: Option<f64>,
}

impl CursorPair {
    pub fn len(&self) -> usize {
        match (self.first, self.second) {
            (None, _) => 0,
            (Some(_), None) => 1,
            (Some(_), Some(_)) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.second.is_some()
    }

    pub fn get(&self, slot: usize) -> Option<f64> {
        match slot {
            0 => self.first,
            1 => self.second,
            _ => None,
        }
    }

    pub fn values(&self) -> Vec<f64> {
        self.first.into_iter().chain(self.second).collect()
    }

    /// Both positions once the pair is complete.
    pub fn both(&self) -> Option<(f64, f64)> {
        Some((self.first?, self.second?))
    }

    /// Record a click. A complete pair restarts with `value` as its only entry.
    /// Returns the slot the value landed in.
    fn push(&mut self, value: f64) -> usize {
        match (self.first, self.second) {
            (None, _) => {
                self.first = Some(value);
                0
            }
            (Some(_), None) => {
                self.second = Some(value);
                1
            }
            (Some(_), Some(_)) => {
                self.first = Some(value);
                self.second = None;
                0
            }
        }
    }

    fn set(&mut self, slot: usize, value: f64) {
        match slot {
            0 if self.first.is_some() => self.first = Some(value),
            1 if self.second.is_some() => self.second = Some(value),
            _ => {}
        }
    }

    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }
}

/// Result of a pointer press on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressOutcome {
    /// The press landed near an existing cursor, which is now being dragged.
    DragStarted(CursorId),
    /// A new cursor was placed. `restarted` is set when a complete pair was
    /// discarded to make room for it.
    Placed {
        cursor: CursorId,
        restarted: bool,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CursorStateMachine {
    vertical: CursorPair,
    horizontal: CursorPair,
    drag: DragState,
}

impl CursorStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(&self, axis: Axis) -> &CursorPair {
        match axis {
            Axis::Time => &self.vertical,
            Axis::Amplitude => &self.horizontal,
        }
    }

    fn pair_mut(&mut self, axis: Axis) -> &mut CursorPair {
        match axis {
            Axis::Time => &mut self.vertical,
            Axis::Amplitude => &mut self.horizontal,
        }
    }

    pub fn v_clicks(&self) -> Vec<f64> {
        self.vertical.values()
    }

    pub fn h_clicks(&self) -> Vec<f64> {
        self.horizontal.values()
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn position(&self, id: CursorId) -> Option<f64> {
        self.pair(id.axis()).get(id.slot())
    }

    /// Handle a press at `value` on `axis`, where `span` is the width of the
    /// currently visible range of that axis.
    pub fn press(&mut self, axis: Axis, value: f64, span: f64) -> PressOutcome {
        // A press always ends whatever drag was left without a release.
        self.drag = DragState::Idle;

        let tolerance = GRAB_TOLERANCE * span.abs();
        let pair = self.pair(axis);
        for slot in 0..2 {
            if let Some(existing) = pair.get(slot) {
                if (value - existing).abs() < tolerance {
                    let id = CursorId::of(axis, slot);
                    self.drag = DragState::grab(id);
                    log::debug!("grabbed cursor {id:?} at {existing}");
                    return PressOutcome::DragStarted(id);
                }
            }
        }

        let pair = self.pair_mut(axis);
        let restarted = pair.is_complete();
        let slot = pair.push(value);
        let cursor = CursorId::of(axis, slot);
        log::debug!("placed cursor {cursor:?} at {value} (restarted: {restarted})");
        PressOutcome::Placed { cursor, restarted }
    }

    /// Move the dragged cursor to `value`, clamped to `range`.
    ///
    /// `value` and `range` must belong to the dragged cursor's axis. Returns the
    /// moved cursor, or `None` when nothing is being dragged.
    pub fn drag_to(&mut self, value: f64, range: (f64, f64)) -> Option<CursorId> {
        let id = self.drag.target()?;
        let (lo, hi) = if range.0 <= range.1 {
            range
        } else {
            (range.1, range.0)
        };
        let clamped = value.max(lo).min(hi);
        self.pair_mut(id.axis()).set(id.slot(), clamped);
        Some(id)
    }

    pub fn release(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Forget every cursor on both axes and any drag in progress.
    pub fn clear(&mut self) {
        self.vertical.clear();
        self.horizontal.clear();
        self.drag = DragState::Idle;
    }
}
