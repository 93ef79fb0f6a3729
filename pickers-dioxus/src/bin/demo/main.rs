//! Entry point for the pickers-demo binary.

mod calendar;
mod tracing_setup;

use anyhow::Result;
use chrono::Local;
use dioxus::prelude::*;
use pickers_dioxus::{InlinePopover, PickersConfig};

use crate::calendar::MonthGrid;

fn main() -> Result<()> {
    // Load app config (pickers.toml)
    let config = PickersConfig::load_default().unwrap_or_else(|err| {
        eprintln!("Warning: failed to load pickers.toml: {err}");
        eprintln!("Using default configuration");
        PickersConfig::default()
    });

    // Set up tracing BEFORE Dioxus to prevent dioxus-logger from
    // setting its own subscriber.
    tracing_setup::init(&config.logging);

    log::info!("Starting pickers-demo");

    launch(config)
}

/// Launch the Dioxus desktop application with window settings from config.
fn launch(config: PickersConfig) -> Result<()> {
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title(&config.window.title)
                    .with_inner_size(dioxus::desktop::LogicalSize::new(
                        config.window.width,
                        config.window.height,
                    )),
            ),
        )
        .with_context(config)
        .launch(App);

    Ok(())
}

/// Demo application showing the inline popover wrapper around a
/// month-grid picker.
#[component]
fn App() -> Element {
    let config = use_context::<PickersConfig>();

    let mut value = use_signal(|| Local::now().naive_local());
    let mut accepted = use_signal(|| false);

    // The acceptance flag is a pulse: once it has forced the popover
    // closed, reset it so the next activation can open again.
    use_effect(move || {
        if accepted() {
            accepted.set(false);
        }
    });

    rsx! {
        document::Style { {include_str!("../../../assets/pickers.css")} }

        div {
            class: "demo-root",

            h1 { "pickers-dioxus demo" }
            p { class: "demo-hint", "Click the field, pick a day, confirm with Enter or OK." }

            InlinePopover {
                value: value(),
                format: config.picker.format.clone(),
                keyboard: config.picker.keyboard,
                only_calendar: config.picker.only_calendar,
                is_accepted: accepted(),
                handle_accept: move |_| {
                    log::info!("value accepted: {}", *value.peek());
                    accepted.set(true);
                },
                on_open: move |_| log::debug!("demo: popover opened"),
                on_close: move |_| log::debug!("demo: popover closed"),

                MonthGrid {
                    selected: value(),
                    on_pick: move |picked| value.set(picked),
                    on_commit: move |_| accepted.set(true),
                }
            }
        }
    }
}
