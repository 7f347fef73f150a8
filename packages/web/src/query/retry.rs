//! Retry loop for query fetchers

use std::fmt::Display;
use std::future::Future;

use tracing::{debug, warn};

use super::error::QueryError;
use super::key::QueryKey;
use super::policy::QueryOptions;
use crate::timer::sleep;

/// Run `fetcher` until it succeeds or the retry budget is spent.
pub(crate) async fn run_with_retry<T, E, F, Fut>(
    key: &QueryKey,
    options: &QueryOptions,
    mut fetcher: F,
) -> Result<T, QueryError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = options.max_attempts();
    let mut attempt = 0;

    loop {
        attempt += 1;

        match fetcher().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(%key, attempt, "Query fetch recovered after retry");
                }
                return Ok(value);
            }
            Err(e) if attempt < max_attempts => {
                let delay = options.retry_delay.delay_for(attempt - 1);
                debug!(%key, attempt, ?delay, error = %e, "Query fetch failed, retrying");
                if !delay.is_zero() {
                    sleep(delay).await;
                }
            }
            Err(e) => {
                warn!(%key, attempts = attempt, error = %e, "Query fetch failed, retries exhausted");
                return Err(QueryError::Fetch {
                    key: key.clone(),
                    attempts: attempt,
                    message: e.to_string(),
                });
            }
        }
    }
}
