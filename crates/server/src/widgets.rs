use shared_types::{ActivityItem, ActivityKind, AdminWidgets, CalendarSpec, QuickAction};

/// Fixed demo content for the admin dashboard widgets that have no backend
/// endpoint yet. Shaped like the live data will be.
pub fn placeholder_widgets() -> AdminWidgets {
    AdminWidgets {
        policies_uploaded: 0,
        at_risk_students: 0,
        completion_percent: 75,
        activity: vec![
            activity(ActivityKind::PolicyUpload, "Policy Upload", "Academic Guidelines.pdf", "2h ago"),
            activity(ActivityKind::ChecklistGenerated, "Checklist Generated", "48 tasks created", "5h ago"),
            activity(ActivityKind::RiskAlert, "Risk Alert", "3 students flagged", "1d ago"),
        ],
        quick_actions: vec![
            quick_action("analytics", "📊", "Analytics"),
            quick_action("email", "📧", "Send Email"),
            quick_action("broadcast", "📢", "Broadcast"),
            quick_action("settings", "⚙️", "Settings"),
        ],
        calendar: CalendarSpec {
            year: 2023,
            month: 1,
            selected_day: 30,
            event_days: vec![10],
        },
    }
}

fn activity(kind: ActivityKind, title: &str, subtitle: &str, relative_time: &str) -> ActivityItem {
    ActivityItem {
        kind,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        relative_time: relative_time.to_string(),
    }
}

fn quick_action(key: &str, icon: &str, label: &str) -> QuickAction {
    QuickAction {
        key: key.to_string(),
        icon: icon.to_string(),
        label: label.to_string(),
    }
}
