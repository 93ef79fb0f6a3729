//! Minimal month-grid picker used as popover content in the demo.
//!
//! Not part of the library surface; just enough picker content to
//! exercise the wrapper.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use dioxus::prelude::*;

/// One-month day grid with an OK button.
///
/// Picking a day reports through `on_pick`; OK reports through
/// `on_commit` (the owner then pulses its acceptance flag).
#[component]
pub fn MonthGrid(
    selected: NaiveDateTime,
    on_pick: EventHandler<NaiveDateTime>,
    on_commit: EventHandler,
) -> Element {
    let date = selected.date();
    let month_start = date.with_day(1).unwrap_or(date);
    let days = days_in_month(date);
    let title = date.format("%B %Y").to_string();

    rsx! {
        div {
            class: "month-grid",

            div {
                class: "month-grid-title",
                "{title}"
            }

            div {
                class: "month-grid-days",

                for day in 1..=days {
                    {
                        let cell_date = month_start.with_day(day).unwrap_or(month_start);
                        let cls = if day == date.day() {
                            "month-grid-day month-grid-day-selected"
                        } else {
                            "month-grid-day"
                        };
                        rsx! {
                            button {
                                key: "day-{day}",
                                class: "{cls}",
                                onclick: move |_| {
                                    on_pick.call(cell_date.and_time(selected.time()));
                                },
                                "{day}"
                            }
                        }
                    }
                }
            }

            div {
                class: "month-grid-actions",

                button {
                    class: "month-grid-ok",
                    onclick: move |_| on_commit.call(()),
                    "OK"
                }
            }
        }
    }
}

/// Number of days in `date`'s month.
fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is valid");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first of next month is valid");

    u32::try_from((next - first).num_days()).unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        let date = |y, m| NaiveDate::from_ymd_opt(y, m, 15).expect("valid date");
        assert_eq!(days_in_month(date(2024, 2)), 29);
        assert_eq!(days_in_month(date(2023, 2)), 28);
        assert_eq!(days_in_month(date(2024, 4)), 30);
        assert_eq!(days_in_month(date(2024, 12)), 31);
    }
}
