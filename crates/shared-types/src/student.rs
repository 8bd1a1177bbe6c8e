use serde::{Deserialize, Serialize};

/// Content of the student landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentFeatures {
    pub page: String,
    pub features: Vec<String>,
}

impl Default for StudentFeatures {
    fn default() -> Self {
        Self {
            page: "Student Dashboard".to_string(),
            features: vec![
                "View personalized checklist".to_string(),
                "Track deadlines".to_string(),
                "Check risk status".to_string(),
            ],
        }
    }
}
