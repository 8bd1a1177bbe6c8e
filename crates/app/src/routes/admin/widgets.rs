//! Decorative parts of the admin dashboard. They render placeholder data
//! and their buttons do nothing yet.

use dioxus::prelude::*;
use shared_types::{ActivityItem, ActivityKind, CalendarSpec, QuickAction};
use shared_ui::{
    Button, ButtonVariant, Card, CardDescription, CardHeader, CardTitle, MonthCalendar,
    ProgressRing,
};

const NAV_ITEMS: [(&str, &str); 6] = [
    ("📊", "Dashboard"),
    ("📤", "Upload"),
    ("👥", "Students"),
    ("📋", "Policies"),
    ("📈", "Analytics"),
    ("⚙️", "Settings"),
];

#[component]
pub fn AdminSidebar() -> Element {
    rsx! {
        aside { class: "admin-sidebar",
            div { class: "admin-logo", div { class: "admin-logo-icon" } }
            nav { class: "admin-nav",
                for (i, (icon, text)) in NAV_ITEMS.into_iter().enumerate() {
                    a {
                        key: "{text}",
                        href: "#",
                        class: if i == 0 { "admin-nav-item active" } else { "admin-nav-item" },
                        onclick: move |evt: MouseEvent| evt.prevent_default(),
                        span { class: "admin-nav-icon", "{icon}" }
                        span { class: "admin-nav-text", "{text}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AdminTopBar() -> Element {
    rsx! {
        header { class: "admin-top-bar",
            div { class: "admin-search",
                span { class: "admin-search-icon", "🔍" }
                input { r#type: "text", placeholder: "Search..." }
            }
            div { class: "admin-top-actions",
                button { class: "admin-icon-btn", r#type: "button", "🔔" }
                div { class: "admin-profile",
                    span { class: "admin-profile-name", "Admin Portal" }
                    div { class: "admin-avatar", "A" }
                }
            }
        }
    }
}

#[component]
pub fn WelcomeBanner() -> Element {
    rsx! {
        div { class: "welcome-banner",
            div { class: "welcome-content",
                div { class: "welcome-badge", "ADMIN PORTAL" }
                h1 { class: "welcome-title",
                    "Command "
                    span { class: "highlight", "Center" }
                }
                p { class: "welcome-subtitle",
                    "Manage policies • Generate checklists • Monitor student wellness"
                }
            }
            div { class: "welcome-illustration", "🧑‍💼" }
        }
    }
}

/// An inert action card such as "Generate Checklists".
#[component]
pub fn ActionCard(
    icon: String,
    tone: String,
    title: String,
    subtitle: String,
    text: String,
    action: String,
    #[props(default)] variant: ButtonVariant,
) -> Element {
    rsx! {
        Card { class: "action-card",
            CardHeader { icon: icon, icon_tone: tone,
                CardTitle { "{title}" }
                CardDescription { "{subtitle}" }
            }
            p { class: "action-card-text", "{text}" }
            Button { variant: variant, arrow: true, "{action}" }
        }
    }
}

#[component]
pub fn SystemActivityCard(completion_percent: u8) -> Element {
    rsx! {
        Card { class: "system-activity-card",
            div { class: "widget-header",
                h2 { class: "card-title", "System Activity" }
                select { class: "time-select",
                    option { "Today" }
                    option { "This Week" }
                    option { "This Month" }
                }
            }
            ProgressRing { value: f64::from(completion_percent) }
            div { class: "progress-legend",
                div { class: "legend-item",
                    span { class: "legend-dot pending" }
                    span { "Pending" }
                }
                div { class: "legend-item",
                    span { class: "legend-dot completed" }
                    span { "Completed" }
                }
            }
        }
    }
}

/// Month view; clicking a day only moves the local selection.
#[component]
pub fn CalendarCard(calendar: CalendarSpec) -> Element {
    let mut selected = use_signal(|| calendar.selected_day);

    rsx! {
        Card { class: "calendar-card",
            MonthCalendar {
                year: calendar.year,
                month: calendar.month,
                selected_day: selected(),
                event_days: calendar.event_days.clone(),
                on_select: move |day: u8| selected.set(day),
            }
        }
    }
}

pub fn activity_icon(kind: ActivityKind) -> (&'static str, &'static str) {
    match kind {
        ActivityKind::PolicyUpload => ("📄", "#FFF4E6"),
        ActivityKind::ChecklistGenerated => ("✅", "#E6F3FF"),
        ActivityKind::RiskAlert => ("⚠️", "#FFE8E8"),
    }
}

#[component]
pub fn ActivityFeed(items: Vec<ActivityItem>) -> Element {
    rsx! {
        Card { class: "activity-list-card",
            div { class: "widget-header",
                h2 { class: "card-title", "Recent Activity" }
                button { class: "view-all-btn", r#type: "button", "View all" }
            }
            div { class: "activity-list",
                for item in items.iter() {
                    {
                        let (icon, background) = activity_icon(item.kind);
                        rsx! {
                            div { key: "{item.title}", class: "activity-item",
                                div { class: "activity-icon", style: "background-color: {background};", "{icon}" }
                                div { class: "activity-info",
                                    h4 { class: "activity-title", "{item.title}" }
                                    p { class: "activity-subtitle", "{item.subtitle}" }
                                }
                                span { class: "activity-time", "{item.relative_time}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn QuickActions(actions: Vec<QuickAction>) -> Element {
    rsx! {
        Card { class: "quick-actions-card",
            h3 { class: "card-title", "Quick Actions" }
            div { class: "quick-actions-grid",
                for action in actions.iter() {
                    button { key: "{action.key}", class: "quick-action-btn", r#type: "button",
                        span { class: "quick-action-icon", "{action.icon}" }
                        span { class: "quick-action-text", "{action.label}" }
                    }
                }
            }
        }
    }
}
