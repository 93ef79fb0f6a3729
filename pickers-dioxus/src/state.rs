//! Open/close state machine for the inline popover wrapper.
//!
//! The wrapper is a two-state machine: Closed (no anchor) and Open
//! (anchored to the element that was activated). All transitions are
//! pure functions over [`PopoverState`]; the component applies them
//! inside its event handlers and its pre-render reconciliation step.

/// Viewport rectangle of the element a popover anchors to.
///
/// Captured from the reference field when it is activated; the panel
/// positions itself against it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl AnchorRect {
    /// Horizontal midpoint of the anchor.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Right edge of the anchor.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge of the anchor.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Open/close state of an inline popover.
///
/// The popover is open iff an anchor is set. The anchor is owned
/// exclusively by the wrapper and never shared.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopoverState {
    anchor: Option<AnchorRect>,
}

impl PopoverState {
    /// The closed state, with no anchor.
    #[must_use]
    pub const fn closed() -> Self {
        Self { anchor: None }
    }

    /// Whether the popover is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    /// The anchor the panel positions against, when open.
    #[must_use]
    pub fn anchor(&self) -> Option<AnchorRect> {
        self.anchor
    }
}

/// Open the popover anchored to the activating element.
///
/// Activating while already open just refreshes the anchor.
#[must_use]
pub fn activate(_prev: PopoverState, anchor: AnchorRect) -> PopoverState {
    PopoverState {
        anchor: Some(anchor),
    }
}

/// Apply a user dismissal (backdrop click or Enter-confirm).
///
/// Returns the next state and whether a close actually happened. Callers
/// fire their close callback only when it did, so a dismissal arriving
/// while already closed stays silent.
#[must_use]
pub fn dismiss(prev: PopoverState) -> (PopoverState, bool) {
    (PopoverState::closed(), prev.is_open())
}

/// Reconcile the previous state with the incoming `accepted` flag.
///
/// Runs before every render commit. When the owner marks the current
/// value as accepted, the popover is forced closed — even against an
/// open set by an earlier event handler in the same cycle. Idempotent:
/// deriving twice from the same inputs yields the same state.
#[must_use]
pub fn derive_state(prev: PopoverState, accepted: bool) -> PopoverState {
    if accepted {
        PopoverState::closed()
    } else {
        prev
    }
}
