use dioxus::prelude::*;
use shared_types::{AppError, AppErrorKind, UploadAttempt, UploadPolicyResponse, POLICY_CONTENT_TYPE};
use shared_ui::{Button, ButtonVariant, Card, CardDescription, CardHeader, CardTitle};

/// The line shown under the upload button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadNotice {
    Uploading,
    Succeeded,
    Rejected,
    ServerError,
    AlreadyInProgress,
    Disabled,
}

impl UploadNotice {
    pub fn text(&self) -> &'static str {
        match self {
            UploadNotice::Uploading => "Uploading...",
            UploadNotice::Succeeded => "Policy uploaded successfully!",
            UploadNotice::Rejected => "Upload failed",
            UploadNotice::ServerError => "Server error during upload",
            UploadNotice::AlreadyInProgress => "An upload is already in progress",
            UploadNotice::Disabled => "Policy uploads are disabled",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            UploadNotice::Uploading => "upload-status status-pending",
            UploadNotice::Succeeded => "upload-status status-success",
            _ => "upload-status status-error",
        }
    }
}

/// Upload progress for the policy card. At most one upload is in flight;
/// a selection made meanwhile is refused, not queued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    in_flight: bool,
    notice: Option<UploadNotice>,
}

impl UploadState {
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn notice(&self) -> Option<UploadNotice> {
        self.notice
    }

    /// Claim the upload slot. Returns `false` when another upload is
    /// running, in which case the refusal is shown instead.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            self.notice = Some(UploadNotice::AlreadyInProgress);
            return false;
        }
        self.in_flight = true;
        self.notice = Some(UploadNotice::Uploading);
        true
    }

    /// Release the slot with the server function's answer.
    pub fn finish<E: ToString>(&mut self, result: Result<UploadPolicyResponse, E>) {
        self.in_flight = false;
        self.notice = Some(match result {
            Ok(resp) if resp.success => UploadNotice::Succeeded,
            Ok(_) => UploadNotice::Rejected,
            Err(e) => match AppError::from_server_error(&e.to_string()) {
                Some(err) if err.kind == AppErrorKind::Disabled => UploadNotice::Disabled,
                _ => UploadNotice::ServerError,
            },
        });
    }

    /// The file could not be read from the browser.
    pub fn fail_read(&mut self) {
        self.in_flight = false;
        self.notice = Some(UploadNotice::ServerError);
    }
}

/// "Upload Policy Documents" card. Picking a file uploads it right away.
#[component]
pub fn UploadPolicyCard(enabled: bool) -> Element {
    let mut state = use_signal(UploadState::default);

    let handle_file = move |evt: FormEvent| async move {
        let files = evt.files();
        let Some(file) = files.first() else {
            return;
        };

        if !state.write().begin() {
            tracing::warn!("policy selected while another upload is running");
            return;
        }

        let name = file.name();
        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(_) => {
                tracing::error!(file = %name, "could not read selected policy");
                state.write().fail_read();
                return;
            }
        };

        let attempt = UploadAttempt::new(name, file.content_type(), bytes);
        let result = server::api::upload_policy(
            attempt.file_name,
            attempt.content_type,
            attempt.bytes,
            attempt.uploaded_by,
        )
        .await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "policy upload failed");
        }
        state.write().finish(result);
    };

    let busy = state.read().in_flight();
    let notice = state.read().notice();

    rsx! {
        Card { class: "action-card",
            CardHeader { icon: "📤", icon_tone: "upload",
                CardTitle { "Upload Policy Documents" }
                CardDescription { "Upload PDF/DOC files" }
            }
            p { class: "action-card-text",
                "Upload official college guidelines to generate student checklists automatically."
            }
            if enabled {
                form { class: "upload-form", onchange: handle_file,
                    label { class: if busy { "button upload-trigger disabled" } else { "button upload-trigger" },
                        "data-style": "primary",
                        input {
                            r#type: "file",
                            accept: POLICY_CONTENT_TYPE,
                            class: "upload-input",
                            disabled: busy,
                        }
                        span { class: "button-label", if busy { "Uploading..." } else { "Choose File" } }
                        span { class: "button-arrow", "→" }
                    }
                }
                if let Some(notice) = notice {
                    div { class: "{notice.class()}", role: "status", "{notice.text()}" }
                }
            } else {
                Button { variant: ButtonVariant::Secondary, disabled: true, "Choose File" }
                div { class: "upload-status status-error", "{UploadNotice::Disabled.text()}" }
            }
        }
    }
}
