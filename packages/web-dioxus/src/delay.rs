//! Artificial latency standing in for network round trips

use std::time::Duration;

/// Wait for `duration`.
///
/// Callers run inside component-scoped tasks, so the wait is dropped with
/// the component that started it.
pub async fn simulate_latency(duration: Duration) {
    if duration.is_zero() {
        return;
    }

    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    gloo_timers::future::sleep(duration).await;

    #[cfg(all(feature = "server", not(target_arch = "wasm32")))]
    tokio::time::sleep(duration).await;
}
