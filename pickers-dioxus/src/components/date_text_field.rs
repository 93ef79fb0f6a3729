//! Text field that anchors the picker popover.
//!
//! Renders the formatted value; on activation it reports its own
//! viewport rectangle so the popover can position itself against it.

use std::rc::Rc;

use chrono::NaiveDateTime;
use dioxus::prelude::*;

use crate::format;
use crate::state::AnchorRect;

/// Text field showing the current picker value.
///
/// `label_func` wins over `format` when both are given. With `keyboard`
/// enabled the input is editable; otherwise it is read-only and only
/// acts as the popover trigger. Unrecognized attributes are spread onto
/// the input element verbatim.
#[component]
pub fn DateTextField(
    /// Current picker value.
    value: NaiveDateTime,
    /// strftime display format.
    #[props(default)]
    format: Option<String>,
    /// Keyboard-entry mode.
    #[props(default)]
    keyboard: Option<bool>,
    /// Custom label for the value, wins over `format`.
    #[props(default)]
    label_func: Option<Callback<NaiveDateTime, String>>,
    /// When set, a clear affordance is rendered and reports through it.
    #[props(default)]
    on_clear: Option<EventHandler>,
    /// Reports the field's viewport rectangle on activation.
    on_activate: EventHandler<AnchorRect>,
    /// Pass-through attributes for the input element.
    #[props(extends = GlobalAttributes, extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    let mut field_el: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let display = match label_func {
        Some(label) => label.call(value),
        None => format::display_value(value, format.as_deref()),
    };

    let editable = keyboard.unwrap_or(false);

    let onclick = move |_evt: MouseEvent| async move {
        let mounted = field_el.peek().as_ref().cloned();
        let Some(el) = mounted else {
            return;
        };
        if let Ok(rect) = el.get_client_rect().await {
            let anchor = AnchorRect {
                x: rect.origin.x,
                y: rect.origin.y,
                width: rect.width(),
                height: rect.height(),
            };
            log::debug!("field activated at {anchor:?}");
            on_activate.call(anchor);
        }
    };

    rsx! {
        div {
            class: "date-text-field",

            input {
                class: "date-text-field-input",
                r#type: "text",
                readonly: !editable,
                value: "{display}",
                onmounted: move |evt: MountedEvent| field_el.set(Some(evt.data())),
                onclick: onclick,
                ..attributes,
            }

            if let Some(on_clear) = on_clear {
                button {
                    class: "date-text-field-clear",
                    title: "Clear",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_clear.call(());
                    },
                    "\u{00d7}"
                }
            }
        }
    }
}
