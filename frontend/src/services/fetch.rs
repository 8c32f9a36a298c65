//! Content retrieval for a submitted URL.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;

use crate::{DownloadResult, FetchResult, SIMULATED_FETCH_MS};

/// Resolves a submitted URL into downloadable content.
///
/// Futures are local: the browser runs everything on one thread.
pub trait ContentFetcher {
    fn fetch(&self, url: String) -> LocalBoxFuture<'static, FetchResult>;
}

/// Stand-in for a network round trip: waits, then returns a placeholder
/// post. Never fails.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedFetcher {
    pub delay_ms: u32,
}

impl Default for SimulatedFetcher {
    fn default() -> Self {
        Self {
            delay_ms: SIMULATED_FETCH_MS,
        }
    }
}

impl ContentFetcher for SimulatedFetcher {
    fn fetch(&self, url: String) -> LocalBoxFuture<'static, FetchResult> {
        let delay_ms = self.delay_ms;
        async move {
            TimeoutFuture::new(delay_ms).await;
            Ok(DownloadResult::placeholder(url))
        }
        .boxed_local()
    }
}
