use dioxus::prelude::*;
use time::{Date, Month};

/// Column headers, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

/// Cells of a Monday-first month grid. Leading `None`s pad the days before
/// the 1st; an invalid year/month yields an empty grid.
pub fn month_cells(year: i32, month: u8) -> Vec<Option<u8>> {
    let Ok(month) = Month::try_from(month) else {
        return Vec::new();
    };
    let Ok(first) = Date::from_calendar_date(year, month, 1) else {
        return Vec::new();
    };
    let lead = first.weekday().number_days_from_monday();
    let days = (1..=31u8).take_while(|d| Date::from_calendar_date(year, month, *d).is_ok());

    (0..lead).map(|_| None).chain(days.map(Some)).collect()
}

/// "January 2023" style heading.
pub fn month_title(year: i32, month: u8) -> String {
    match Month::try_from(month) {
        Ok(m) => format!("{m} {year}"),
        Err(_) => year.to_string(),
    }
}

/// A single-month calendar with one selectable day and highlighted event days.
#[component]
pub fn MonthCalendar(
    year: i32,
    month: u8,
    selected_day: u8,
    #[props(default)] event_days: Vec<u8>,
    on_select: EventHandler<u8>,
) -> Element {
    let cells = month_cells(year, month);
    let title = month_title(year, month);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "month-calendar",
            div { class: "month-calendar-header",
                h3 { class: "month-calendar-title", "{title}" }
                span { class: "month-calendar-nav", "aria-hidden": "true", "→" }
            }
            div { class: "month-calendar-grid",
                for label in WEEKDAY_LABELS {
                    div { class: "month-calendar-weekday", "{label}" }
                }
                for (i, cell) in cells.into_iter().enumerate() {
                    match cell {
                        None => rsx! {
                            div { key: "pad-{i}", class: "month-calendar-day empty" }
                        },
                        Some(day) => {
                            let mut class = String::from("month-calendar-day");
                            if event_days.contains(&day) {
                                class.push_str(" event-day");
                            }
                            if day == selected_day {
                                class.push_str(" selected-day");
                            }
                            rsx! {
                                div {
                                    key: "day-{day}",
                                    class: "{class}",
                                    onclick: move |_| on_select.call(day),
                                    "{day}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
