//! Request Deadlines

use std::future::Future;
use std::pin::pin;

use futures::future::{select, Either};

use crate::error::{ApiError, ApiResult};

/// Resolve `request`, or fail with `ApiError::Timeout` once `deadline` fires first.
pub async fn with_deadline<T, F, D>(request: F, deadline: D, timeout_ms: u32) -> ApiResult<T>
where
    F: Future<Output = ApiResult<T>>,
    D: Future<Output = ()>,
{
    let request = pin!(request);
    let deadline = pin!(deadline);
    match select(request, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout_ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_stalled_request_times_out() {
        let stalled = futures::future::pending::<ApiResult<()>>();
        let result = with_deadline(stalled, tokio::time::sleep(Duration::from_millis(5)), 5).await;
        assert_eq!(result, Err(ApiError::Timeout(5)));
    }

    #[tokio::test]
    async fn test_fast_request_wins() {
        let result = with_deadline(
            async { Ok(42) },
            tokio::time::sleep(Duration::from_secs(60)),
            60_000,
        )
        .await;
        assert_eq!(result, Ok(42));
    }

    #[tokio::test]
    async fn test_request_errors_pass_through() {
        let result: ApiResult<()> = with_deadline(
            async { Err(ApiError::NotFound) },
            tokio::time::sleep(Duration::from_secs(60)),
            60_000,
        )
        .await;
        assert_eq!(result, Err(ApiError::NotFound));
    }
}
