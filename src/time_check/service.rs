use std::{future::Future, time::Duration};

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::time_check::{
    db::{Connector, DbSession},
    models::{InvocationResponse, Timeouts},
    time_check_error::{DbError, TimeCheckError},
};

/// The event is never read. The session is closed before returning, whatever the outcome.
pub async fn handle<C: Connector>(
    connector: &C,
    timeouts: &Timeouts,
    _event: &Value,
) -> InvocationResponse {
    match current_time(connector, timeouts).await {
        Ok(now) => {
            info!("Database reported current time {}", now);
            InvocationResponse::ok(format!(
                "Successfully connected to RDS instance. Current time: {}",
                now
            ))
        }
        Err(e) => {
            error!("Time check failed: {}", e);
            e.into()
        }
    }
}

async fn current_time<C: Connector>(
    connector: &C,
    timeouts: &Timeouts,
) -> Result<NaiveDateTime, TimeCheckError> {
    let mut session = bounded(timeouts.connect, connector.connect())
        .await
        .map_err(TimeCheckError::Connection)?;
    debug!("Connected to database");

    let result = bounded(timeouts.query, session.current_time())
        .await
        .map_err(TimeCheckError::Query);

    match bounded(timeouts.query, session.close()).await {
        Ok(()) => debug!("Closed database connection"),
        Err(e) => warn!("Failed to close database connection cleanly: {}", e),
    }

    result
}

async fn bounded<T>(
    limit: Duration,
    fut: impl Future<Output = Result<T, sqlx::Error>>,
) -> Result<T, DbError> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(DbError::Timeout(limit)),
    }
}
