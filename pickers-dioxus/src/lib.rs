//! Date/time picker components for Dioxus.
//!
//! The central piece is [`InlinePopover`], a wrapper that renders a text
//! field and, when the field is clicked, opens a floating panel anchored
//! to it containing arbitrary picker content (a calendar, a clock, any
//! renderable element). The panel closes when the owner signals
//! acceptance, when the user presses Enter (which also confirms the
//! value), or when the user dismisses it with an outside click.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dioxus::prelude::*;
//! use pickers_dioxus::InlinePopover;
//!
//! #[component]
//! fn App() -> Element {
//!     let mut accepted = use_signal(|| false);
//!
//!     rsx! {
//!         InlinePopover {
//!             is_accepted: accepted(),
//!             handle_accept: move |_| accepted.set(true),
//!             div { "picker content" }
//!         }
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! The wrapper composes three collaborators, all in this crate:
//!
//! 1. [`DateTextField`] renders the value and reports its viewport
//!    rectangle on activation.
//! 2. [`Popover`] positions the panel against that rectangle and reports
//!    outside clicks as dismissal requests.
//! 3. [`GlobalKeyListener`] captures key-down events, and is mounted
//!    only while the panel is open.
//!
//! State lives in a single `anchor: Option<AnchorRect>` value: `None` is
//! closed, `Some` is open. An `is_accepted` prop pulsing true forces the
//! state closed before the next render commits, so acceptance can never
//! race an open request.

// Public library modules
pub mod components;
pub mod config;
pub mod format;
pub mod input;
pub mod state;


// Convenience re-exports
pub use components::{
    DateTextField, GlobalKeyListener, InlinePopover, PanelAlign, PaperConstraints, Popover,
    PopoverOverrides,
};
pub use config::PickersConfig;
pub use state::{AnchorRect, PopoverState};
