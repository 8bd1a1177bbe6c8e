use dioxus::prelude::*;
use shared_types::LoginMode;
use shared_ui::{Badge, BadgeVariant, Button, Divider, GlareHover, Input};

use crate::login_flow::{redirect_after, LoginMessage, LoginOutcome};

/// Copy of the left-hand illustration panel for one tab.
struct Illustration {
    badge: &'static str,
    heading: &'static str,
    accent: &'static str,
    blurb: &'static str,
    cards: [(&'static str, &'static str, &'static str); 2],
    figure: &'static str,
}

const STUDENT_ILLUSTRATION: Illustration = Illustration {
    badge: "🎓 Student Portal",
    heading: "Achieve Your",
    accent: "Academic Goals",
    blurb: "Track your courses, assignments, and connect with peers. Your learning journey starts here.",
    cards: [
        ("📚", "Enrolled Courses", "12 Active"),
        ("⭐", "Average Grade", "A · 94%"),
    ],
    figure: "🧑‍🎓",
};

const ADMIN_ILLUSTRATION: Illustration = Illustration {
    badge: "🛡️ Admin Portal",
    heading: "Manage Your",
    accent: "Platform",
    blurb: "Powerful tools for administrators. Oversee users, content, and system health.",
    cards: [
        ("👥", "Total Users", "3,482"),
        ("✅", "System Status", "All Operational"),
    ],
    figure: "🧑‍💼",
};

fn tab_icon(mode: LoginMode) -> &'static str {
    match mode {
        LoginMode::Student => "🎓",
        LoginMode::Admin => "🛡️",
    }
}

fn illustration(mode: LoginMode) -> &'static Illustration {
    match mode {
        LoginMode::Student => &STUDENT_ILLUSTRATION,
        LoginMode::Admin => &ADMIN_ILLUSTRATION,
    }
}

/// Sign-in page with a student tab and an admin tab.
///
/// Each tab keeps its own form state; switching tabs only changes which
/// form is in view. One submission can be in flight at a time across both
/// forms.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    let mut mode = use_signal(LoginMode::default);
    let mut student_email = use_signal(String::new);
    let mut student_password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut admin_username = use_signal(String::new);
    let mut admin_password = use_signal(String::new);
    // Collected for a future second factor; never sent.
    let mut admin_otp = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut message = use_signal(|| Option::<(LoginMode, LoginMessage)>::None);

    // The task belongs to this page, so leaving it drops a pending redirect.
    let mut submit = move |active: LoginMode| {
        if loading() {
            return;
        }
        let (email, password) = match active {
            LoginMode::Student => (student_email(), student_password()),
            LoginMode::Admin => (admin_username(), admin_password()),
        };
        loading.set(true);
        message.set(None);

        spawn(async move {
            let result = server::api::login(email, password).await;
            if let Err(e) = &result {
                tracing::error!(error = %e, mode = active.display_name(), "login failed to reach backend");
            }

            let outcome = LoginOutcome::resolve(active, result);
            message.set(Some((active, outcome.message())));
            if !outcome.keeps_form_locked() {
                loading.set(false);
            }

            redirect_after(&outcome, |target| {
                nav.push(target);
            })
            .await;
        });
    };

    let active = mode();
    let art = illustration(active);
    let message_for = move |form: LoginMode| match message() {
        Some((owner, msg)) if owner == form => Some(msg),
        _ => None,
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-root",
            div { class: "bg-blob blob-1" }
            div { class: "bg-blob blob-2" }
            div { class: "bg-blob blob-3" }
            div { class: "floating-shape shape-1" }
            div { class: "floating-shape shape-2" }
            div { class: "floating-shape shape-3" }
            div { class: "floating-shape shape-4" }

            div { class: "login-container",
                // Illustration panel follows the active tab
                div { class: "login-left",
                    div { class: "brand",
                        span { class: "brand-dot" }
                        span { class: "brand-name", "CampusAI" }
                    }
                    div { class: "illus-content",
                        Badge {
                            variant: match active {
                                LoginMode::Student => BadgeVariant::Student,
                                LoginMode::Admin => BadgeVariant::Admin,
                            },
                            "{art.badge}"
                        }
                        h2 { class: "illus-heading",
                            "{art.heading}"
                            br {}
                            span { class: "illus-accent", "{art.accent}" }
                        }
                        p { class: "illus-sub", "{art.blurb}" }
                        div { class: "illus-cards",
                            for (icon, label, value) in art.cards {
                                div { key: "{label}", class: "illus-card",
                                    span { class: "illus-card-icon", "{icon}" }
                                    div {
                                        div { class: "illus-card-label", "{label}" }
                                        div { class: "illus-card-value", "{value}" }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "illus-figure",
                        span { class: "figure-icon", "{art.figure}" }
                        div { class: "figure-ring" }
                    }
                }

                div { class: "login-right",
                    div { class: "tab-switcher", role: "tablist",
                        for tab in [LoginMode::Student, LoginMode::Admin] {
                            button {
                                key: "{tab.display_name()}",
                                r#type: "button",
                                role: "tab",
                                class: if tab == active { "tab-btn tab-active" } else { "tab-btn" },
                                "aria-selected": tab == active,
                                onclick: move |_| mode.set(tab),
                                span { class: "tab-icon", "{tab_icon(tab)}" }
                                " {tab.display_name()}"
                            }
                        }
                        div { class: if active == LoginMode::Admin { "tab-slider slider-right" } else { "tab-slider" } }
                    }

                    div { class: "forms-viewport",
                        div { class: if active == LoginMode::Admin { "forms-track slide-left" } else { "forms-track" },
                            // Student form
                            div { class: "form-panel",
                                GlareHover {
                                    glare_color: "#a78bfa",
                                    glare_opacity: 0.18,
                                    glare_angle: -30.0,
                                    glare_size: 280.0,
                                    transition_duration: 700,
                                    style: "border-radius: 20px; width: 100%;",
                                    form {
                                        class: "form-card",
                                        onsubmit: move |evt: FormEvent| {
                                            evt.prevent_default();
                                            submit(LoginMode::Student);
                                        },
                                        div { class: "form-header",
                                            h3 { class: "form-title", "Welcome back!" }
                                            p { class: "form-sub", "Sign in to your student account" }
                                        }
                                        Divider { text: "or sign in with email" }
                                        Input {
                                            label: "Email Address",
                                            icon: "✉️",
                                            input_type: "email",
                                            placeholder: "you@university.edu",
                                            value: student_email(),
                                            on_input: move |e: FormEvent| student_email.set(e.value()),
                                        }
                                        Input {
                                            label: "Password",
                                            icon: "🔒",
                                            input_type: if show_password() { "text".to_string() } else { "password".to_string() },
                                            placeholder: "Enter your password",
                                            value: student_password(),
                                            on_input: move |e: FormEvent| student_password.set(e.value()),
                                            trailing: rsx! {
                                                button {
                                                    class: "input-toggle",
                                                    r#type: "button",
                                                    tabindex: "-1",
                                                    "aria-label": if show_password() { "Hide password" } else { "Show password" },
                                                    onclick: move |_| show_password.toggle(),
                                                    if show_password() { "🙈" } else { "👁️" }
                                                }
                                            },
                                        }
                                        div { class: "form-row",
                                            label { class: "remember-label",
                                                input {
                                                    r#type: "checkbox",
                                                    class: "remember-check",
                                                    checked: remember_me(),
                                                    onchange: move |e: FormEvent| remember_me.set(e.value() == "true"),
                                                }
                                                "Remember me"
                                            }
                                            a {
                                                class: "forgot-link",
                                                href: "#",
                                                onclick: move |evt: MouseEvent| evt.prevent_default(),
                                                "Forgot password?"
                                            }
                                        }
                                        Button {
                                            class: "submit-btn student-btn",
                                            button_type: "submit",
                                            loading: loading(),
                                            loading_label: "Signing In...",
                                            arrow: true,
                                            "Sign In"
                                        }
                                        if let Some(msg) = message_for(LoginMode::Student) {
                                            div { class: "message {msg.tone.class()}", role: "status", "{msg.text}" }
                                        }
                                        p { class: "signup-link",
                                            "New student? "
                                            a {
                                                href: "#",
                                                onclick: move |evt: MouseEvent| evt.prevent_default(),
                                                "Create an account"
                                            }
                                        }
                                    }
                                }
                            }

                            // Admin form
                            div { class: "form-panel",
                                GlareHover {
                                    glare_color: "#818cf8",
                                    glare_opacity: 0.18,
                                    glare_angle: -30.0,
                                    glare_size: 280.0,
                                    transition_duration: 700,
                                    style: "border-radius: 20px; width: 100%;",
                                    form {
                                        class: "form-card admin-card",
                                        onsubmit: move |evt: FormEvent| {
                                            evt.prevent_default();
                                            submit(LoginMode::Admin);
                                        },
                                        div { class: "form-header",
                                            h3 { class: "form-title", "Admin Access" }
                                            p { class: "form-sub", "Restricted, authorized personnel only" }
                                        }
                                        Input {
                                            label: "Username",
                                            icon: "👤",
                                            placeholder: "admin_username",
                                            value: admin_username(),
                                            on_input: move |e: FormEvent| admin_username.set(e.value()),
                                        }
                                        Input {
                                            label: "Password",
                                            icon: "🔒",
                                            input_type: "password",
                                            placeholder: "Enter your password",
                                            value: admin_password(),
                                            on_input: move |e: FormEvent| admin_password.set(e.value()),
                                        }
                                        Input {
                                            label: "Verification Code (optional)",
                                            icon: "🔑",
                                            placeholder: "6-digit code",
                                            value: admin_otp(),
                                            on_input: move |e: FormEvent| admin_otp.set(e.value()),
                                        }
                                        Button {
                                            class: "submit-btn admin-btn",
                                            button_type: "submit",
                                            loading: loading(),
                                            loading_label: "Signing In...",
                                            arrow: true,
                                            "Secure Sign In"
                                        }
                                        if let Some(msg) = message_for(LoginMode::Admin) {
                                            div { class: "message {msg.tone.class()}", role: "status", "{msg.text}" }
                                        }
                                        p { class: "signup-link muted",
                                            "Having trouble? "
                                            a {
                                                href: "#",
                                                onclick: move |evt: MouseEvent| evt.prevent_default(),
                                                "Contact IT Support"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
