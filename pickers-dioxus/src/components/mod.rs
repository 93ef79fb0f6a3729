//! UI components for pickers-dioxus.
//!
//! [`InlinePopover`] is the wrapper; [`DateTextField`], [`Popover`], and
//! [`GlobalKeyListener`] are the collaborators it composes.

mod date_text_field;
mod inline_popover;
mod key_listener;
pub mod popover;

pub use date_text_field::DateTextField;
pub use inline_popover::InlinePopover;
pub use key_listener::GlobalKeyListener;
pub use popover::{PanelAlign, PaperConstraints, Popover, PopoverConfig, PopoverOverrides};
