use std::time::Duration;

/// Sleep without blocking the event loop. Uses browser timers on wasm and
/// tokio everywhere else.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
