//! Bounded store access for HTTP handlers.
//!
//! A store that cannot answer within the deadline is reported as
//! service-unavailable instead of letting the request hang for its full
//! client timeout.

use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::domain::Error;

/// Longest a handler waits for a single store operation.
pub(crate) const STORE_DEADLINE: Duration = Duration::from_secs(5);

/// Await a store operation, translating failures into domain errors.
///
/// The `map_err` argument owns the store-specific error mapping; elapsing the
/// deadline maps uniformly to [`Error::service_unavailable`].
pub(crate) async fn query_store<T, E, F>(
    fut: F,
    map_err: impl FnOnce(E) -> Error,
) -> Result<T, Error>
where
    F: Future<Output = Result<T, E>>,
{
    query_store_within(STORE_DEADLINE, fut, map_err).await
}

async fn query_store_within<T, E, F>(
    deadline: Duration,
    fut: F,
    map_err: impl FnOnce(E) -> Error,
) -> Result<T, Error>
where
    F: Future<Output = Result<T, E>>,
{
    match timeout(deadline, fut).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(map_err(err)),
        Err(_) => Err(Error::service_unavailable(
            "store did not respond within the allotted time",
        )),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::future::pending;

    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[actix_web::test]
    async fn successful_results_pass_through() {
        let value = query_store_within(Duration::from_millis(50), async { Ok::<_, ()>(7) }, |()| {
            Error::internal("unused")
        })
        .await
        .expect("value");
        assert_eq!(value, 7);
    }

    #[rstest]
    #[actix_web::test]
    async fn store_failures_use_the_supplied_mapping() {
        let err = query_store_within(
            Duration::from_millis(50),
            async { Err::<(), _>("broken pipe") },
            Error::internal,
        )
        .await
        .expect_err("mapped failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[rstest]
    #[actix_web::test]
    async fn stalled_stores_surface_as_service_unavailable() {
        let err = query_store_within(
            Duration::from_millis(10),
            pending::<Result<(), ()>>(),
            |()| Error::internal("unused"),
        )
        .await
        .expect_err("deadline must elapse");
        assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
    }
}
