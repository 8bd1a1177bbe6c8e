use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod delay;
mod login_flow;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let mut router = dioxus::server::router(App);

        match server::backend::backend() {
            Ok(backend) => {
                tracing::info!(base_url = backend.base_url(), "campus backend configured");
                router = router.merge(server::health::router(backend.clone()));
            }
            Err(e) => {
                tracing::error!(error = %e, "campus backend misconfigured, /health disabled");
            }
        }

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::extract::DefaultBodyLimit::max(
                server::config::max_upload_bytes(),
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "page-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
