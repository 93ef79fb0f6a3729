//! Inline popover wrapper around a date/time text field.
//!
//! Shows a text field that, when clicked, opens a floating panel with
//! arbitrary picker content anchored to it, and closes the panel when
//! the value is accepted, the user presses Enter, or the panel is
//! dismissed.

use chrono::{Local, NaiveDateTime};
use dioxus::prelude::*;

use crate::components::popover::align_for_keyboard;
use crate::components::{DateTextField, GlobalKeyListener, Popover, PopoverOverrides};
use crate::input::{decode_popover_key, PopoverKey};
use crate::state::{self, AnchorRect, PopoverState};

/// Popover-mode wrapper for date/time pickers.
///
/// The field anchors the panel; the panel hosts `children`, the picker
/// content, which this wrapper treats as opaque. `handle_accept` fires
/// on Enter-confirm. Pulsing `is_accepted` to true forces the panel
/// closed on the next render without firing `on_close` — acceptance is
/// a silent convergence, not a dismissal.
#[component]
pub fn InlinePopover(
    /// Current picker value.
    #[props(default = Local::now().naive_local())]
    value: NaiveDateTime,
    /// strftime display format passed to the field.
    #[props(default)]
    format: Option<String>,
    /// Hint for picker content to show only the calendar.
    #[props(default)]
    only_calendar: bool,
    /// Keyboard-entry mode; right-aligns the panel and is forwarded to
    /// the field.
    #[props(default)]
    keyboard: Option<bool>,
    /// Pulses true when the owner commits the current value.
    #[props(default)]
    is_accepted: bool,
    /// Fired on user-driven open.
    #[props(default)]
    on_open: Option<EventHandler>,
    /// Fired on user-driven close; not on the acceptance-forced path.
    #[props(default)]
    on_close: Option<EventHandler>,
    /// Forwarded to the field; never invoked here.
    #[props(default)]
    on_clear: Option<EventHandler>,
    /// Invoked on Enter-confirm.
    handle_accept: EventHandler,
    /// Forwarded to the field to format its label.
    #[props(default)]
    label_func: Option<Callback<NaiveDateTime, String>>,
    /// Caller overrides merged over the computed panel configuration.
    #[props(default)]
    popover_overrides: PopoverOverrides,
    /// Picker content rendered inside the panel.
    children: Element,
    /// Unrecognized attributes, forwarded verbatim to the field.
    #[props(extends = GlobalAttributes, extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    // only_calendar is consumed by the picker content the caller builds;
    // recognizing it here keeps it off the field element.
    let _ = only_calendar;

    let mut state = use_signal(PopoverState::closed);

    // Reconcile with the acceptance flag before this render commits.
    // Acceptance wins over an open set by an earlier handler.
    let prev = *state.peek();
    let derived = state::derive_state(prev, is_accepted);
    if derived != prev {
        state.set(derived);
    }

    let open = move |anchor: AnchorRect| {
        let next = state::activate(*state.peek(), anchor);
        state.set(next);
        log::debug!("popover opened");
        if let Some(on_open) = on_open {
            on_open.call(());
        }
    };

    let mut close = move || {
        let (next, closed_now) = state::dismiss(*state.peek());
        if closed_now {
            state.set(next);
            log::debug!("popover closed");
            if let Some(on_close) = on_close {
                on_close.call(());
            }
        }
    };

    let on_key = move |evt: KeyboardEvent| match decode_popover_key(&evt.key()) {
        Some(PopoverKey::Enter) => {
            handle_accept.call(());
            close();
            // Handled; keep the webview from acting on it.
            evt.prevent_default();
        }
        // Unhandled keys stay with the picker content.
        None => {}
    };

    let current = state();
    let align = align_for_keyboard(keyboard);

    rsx! {
        if current.is_open() {
            GlobalKeyListener { on_key: on_key }
        }

        DateTextField {
            value,
            format,
            keyboard,
            label_func,
            on_clear,
            on_activate: open,
            attributes,
        }

        Popover {
            open: current.is_open(),
            anchor: current.anchor(),
            on_close: move |()| close(),
            align,
            overrides: popover_overrides,
            {children}
        }
    }
}
