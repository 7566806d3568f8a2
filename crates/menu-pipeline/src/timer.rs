//! Platform timer used by the request timeout and the debouncer.

use std::time::Duration;

/// Browser `setTimeout` based sleep
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Tokio sleep; requires a running Tokio runtime
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
