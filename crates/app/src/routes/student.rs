use dioxus::prelude::*;
use shared_types::StudentFeatures;

/// Landing page for signed-in students. Static until the student features
/// have a backend.
#[component]
pub fn StudentDashboard() -> Element {
    let content = StudentFeatures::default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./student.css") }

        div { class: "student-page",
            h1 { class: "student-title", "🎓 {content.page}" }
            ul { class: "student-features",
                for feature in content.features.iter() {
                    li { key: "{feature}", "{feature}" }
                }
            }
        }
    }
}
