use std::time::Duration;

pub async fn sleep_secs(secs: u32) {
    sleep(Duration::from_secs(u64::from(secs))).await;
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn zero_sleep_returns() {
        sleep(Duration::ZERO).await;
        sleep_secs(0).await;
    }
}
