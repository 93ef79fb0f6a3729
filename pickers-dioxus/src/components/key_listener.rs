//! Window-scoped key capture for the open popover.
//!
//! Mounted by the wrapper only while the popover is open, so the key
//! subscription lives exactly as long as the open state and is torn
//! down with it on every exit path, including unmount.

use dioxus::prelude::*;

/// Invisible focus sink that reports key-down events while mounted.
#[component]
pub fn GlobalKeyListener(on_key: EventHandler<KeyboardEvent>) -> Element {
    // Focus the capture element once it exists so key events reach it.
    use_effect(|| {
        document::eval(
            r#"
            requestAnimationFrame(() => {
                const el = document.querySelector('.picker-key-capture');
                if (el) { el.focus(); }
            });
        "#,
        );
    });

    rsx! {
        div {
            class: "picker-key-capture",
            tabindex: 0,
            style: "position: fixed; width: 0; height: 0; outline: none;",
            onkeydown: move |evt| on_key.call(evt),
        }
    }
}
