use serde::{Deserialize, Serialize};

/// Identity sent as `uploaded_by` with every policy upload.
pub const POLICY_UPLOADER: &str = "admin@campus.com";

/// The only document type the upload dialog offers.
pub const POLICY_CONTENT_TYPE: &str = "application/pdf";

/// Response of `GET /admin/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminStats {
    pub success: bool,
    #[serde(default)]
    pub total_students: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A policy document on its way to `POST /admin/upload-policy`.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadAttempt {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub uploaded_by: String,
}

impl UploadAttempt {
    /// Build an attempt from a freshly selected file. A missing content type
    /// falls back to PDF, the only type the dialog accepts.
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type
                .filter(|ct| !ct.is_empty())
                .unwrap_or_else(|| POLICY_CONTENT_TYPE.to_string()),
            bytes,
            uploaded_by: POLICY_UPLOADER.to_string(),
        }
    }
}

/// Response of `POST /admin/upload-policy`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadPolicyResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Dashboard widgets
// ---------------------------------------------------------------------------

/// Tone of an activity row; picks the icon background.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    PolicyUpload,
    ChecklistGenerated,
    RiskAlert,
}

/// One row of the "Recent Activity" feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityItem {
    pub kind: ActivityKind,
    pub title: String,
    pub subtitle: String,
    pub relative_time: String,
}

/// A shortcut button in the "Quick Actions" grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuickAction {
    pub key: String,
    pub icon: String,
    pub label: String,
}

/// The month shown by the dashboard calendar and its highlighted days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarSpec {
    pub year: i32,
    /// 1-based month number.
    pub month: u8,
    pub selected_day: u8,
    pub event_days: Vec<u8>,
}

/// Everything on the admin dashboard that has no live backend yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminWidgets {
    pub policies_uploaded: i64,
    pub at_risk_students: i64,
    pub completion_percent: u8,
    pub activity: Vec<ActivityItem>,
    pub quick_actions: Vec<QuickAction>,
    pub calendar: CalendarSpec,
}
