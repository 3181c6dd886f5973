use crate::error::TimeoutError;
use anyhow::Result;
use futures_lite::future;
use smol::Timer;
use std::time::Duration;

/// Runs the blocking operation `f` on smol's blocking pool and waits at most
/// `timeout` for it. On timeout `f` keeps running in the background and its
/// result is discarded.
pub async fn with_timeout<F, T>(f: F, timeout: Duration) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let work = smol::unblock(f);
    let expire = async {
        Timer::after(timeout).await;
        Err::<T, anyhow::Error>(TimeoutError(timeout).into())
    };
    future::or(work, expire).await
}

pub fn with_timeout_blocking<F, T>(f: F, timeout: Duration) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    smol::block_on(with_timeout(f, timeout))
}
