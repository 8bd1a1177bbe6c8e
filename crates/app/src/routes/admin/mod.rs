mod upload;
mod widgets;

use dioxus::prelude::*;
use server::api::{get_admin_stats, get_admin_widgets};
use shared_types::{AdminStats, AdminWidgets, FeatureFlags};
use shared_ui::{ButtonVariant, StatCard};

use upload::UploadPolicyCard;
use widgets::{
    ActionCard, ActivityFeed, AdminSidebar, AdminTopBar, CalendarCard, QuickActions,
    SystemActivityCard, WelcomeBanner,
};

/// Text for the Total Students figure. `None` while the request is pending;
/// a failed or refused request shows `0`.
pub fn total_students_label<E>(stats: Option<&Result<AdminStats, E>>) -> Option<String> {
    match stats? {
        Ok(stats) if stats.success => Some(stats.total_students.to_string()),
        _ => Some("0".to_string()),
    }
}

/// Widget content once the request settles. `None` while pending; a failed
/// request falls back to the built-in placeholder.
pub fn widgets_or_placeholder<E>(widgets: Option<&Result<AdminWidgets, E>>) -> Option<AdminWidgets> {
    match widgets? {
        Ok(widgets) => Some(widgets.clone()),
        Err(_) => Some(server::widgets::placeholder_widgets()),
    }
}

/// Administrator overview. Fetches the stats once per mount.
#[component]
pub fn AdminDashboard() -> Element {
    let flags: FeatureFlags = use_context();

    let stats = use_resource(move || async move {
        let result = get_admin_stats().await;
        match &result {
            Err(e) => tracing::error!(error = %e, "failed to fetch admin stats"),
            Ok(s) if !s.success => {
                tracing::warn!(reason = ?s.message, "admin stats refused by backend")
            }
            Ok(_) => {}
        }
        result
    });
    let widgets_resource = use_resource(move || async move {
        let result = get_admin_widgets().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "failed to fetch dashboard widgets, using placeholders");
        }
        result
    });

    let total_students = total_students_label(stats.read().as_ref());
    let widgets = widgets_or_placeholder(widgets_resource.read().as_ref());
    let policies_uploaded = widgets.as_ref().map(|w| w.policies_uploaded.to_string());
    let at_risk_students = widgets.as_ref().map(|w| w.at_risk_students.to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-dashboard",
            AdminSidebar {}

            main { class: "admin-main",
                AdminTopBar {}
                WelcomeBanner {}

                div { class: "stats-section",
                    StatCard {
                        icon: "📄",
                        label: "Policies Uploaded",
                        tone: "stat-card-1",
                        value: policies_uploaded,
                    }
                    StatCard {
                        icon: "🎓",
                        label: "Total Students",
                        tone: "stat-card-2",
                        value: total_students,
                    }
                    StatCard {
                        icon: "⚠️",
                        label: "At-Risk Students",
                        tone: "stat-card-3",
                        value: at_risk_students,
                    }
                }

                div { class: "content-grid",
                    div { class: "left-column",
                        UploadPolicyCard { enabled: flags.policy_upload }
                        ActionCard {
                            icon: "📋",
                            tone: "generate",
                            title: "Generate Checklists",
                            subtitle: "Convert policies to tasks",
                            text: "Convert uploaded policies into actionable student task lists with deadlines.",
                            action: "Generate Tasks",
                            variant: ButtonVariant::Secondary,
                        }
                        ActionCard {
                            icon: "🔍",
                            tone: "risk",
                            title: "View At-Risk Students",
                            subtitle: "Early intervention system",
                            text: "Identify students who are falling behind and need support.",
                            action: "View List",
                            variant: ButtonVariant::Outline,
                        }
                    }

                    div { class: "right-column",
                        if let Some(w) = widgets {
                            SystemActivityCard { completion_percent: w.completion_percent }
                            CalendarCard { calendar: w.calendar.clone() }
                            ActivityFeed { items: w.activity.clone() }
                            QuickActions { actions: w.quick_actions.clone() }
                        } else {
                            div { class: "widgets-loading",
                                shared_ui::Skeleton { style: "height: 220px; width: 100%;" }
                                shared_ui::Skeleton { style: "height: 300px; width: 100%;" }
                            }
                        }
                    }
                }
            }
        }
    }
}
