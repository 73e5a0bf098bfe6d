//! Simulated network latency for the mocked backend collaborators.

/// Waits `duration_ms` on the browser event loop.
///
/// Host builds only exist to run tests, which inject instant collaborators,
/// so there the wait is skipped.
pub async fn pause(duration_ms: u32) {
    if duration_ms == 0 {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(duration_ms).await;
}
