//! Async helpers shared by the web and desktop builds.
use futures_util::future::{select, Either};
use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}

/// Race `future` against a timer. `None` means the timer won and the future was dropped.
pub async fn with_timeout<F>(future: F, ms: u64) -> Option<F::Output>
where
    F: Future,
{
    let future = std::pin::pin!(future);
    let timer = std::pin::pin!(sleep_ms(ms));
    match select(future, timer).await {
        Either::Left((value, _)) => Some(value),
        Either::Right(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ready_future_beats_the_timer() {
        assert_eq!(with_timeout(async { 7 }, 50).await, Some(7));
    }

    #[tokio::test]
    async fn hung_future_times_out() {
        let hung = std::future::pending::<()>();
        assert_eq!(with_timeout(hung, 10).await, None);
    }
}
