use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum TimeCheckError {
    #[error("ERROR: Could not connect to MySQL instance. {0}")]
    Connection(DbError),

    #[error("ERROR: Could not execute query. {0}")]
    Query(DbError),
}

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
}
