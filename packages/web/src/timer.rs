//! Platform timer used by retry backoff and toast auto-dismiss

use std::time::Duration;

/// Sleep for `duration` on whichever executor the build targets.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Sleep for `duration` on whichever executor the build targets.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
