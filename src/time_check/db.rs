use std::future::Future;

use chrono::NaiveDateTime;
use sqlx::{
    Connection, MySqlConnection,
    mysql::{MySqlConnectOptions, MySqlSslMode},
};

use crate::config::config::{DatabaseConfig, SslMode};

pub const CURRENT_TIME_QUERY: &str = "SELECT NOW()";

pub trait Connector: Send + Sync {
    type Session: DbSession + Send;

    fn connect(&self) -> impl Future<Output = Result<Self::Session, sqlx::Error>> + Send;
}

/// `close` consumes the session, so it can only be released once.
pub trait DbSession {
    fn current_time(&mut self) -> impl Future<Output = Result<NaiveDateTime, sqlx::Error>> + Send;

    fn close(self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}

#[derive(Debug, sqlx::FromRow)]
struct CurrentTime {
    #[sqlx(rename = "NOW()")]
    now: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct MySqlConnector {
    options: MySqlConnectOptions,
}

impl MySqlConnector {
    pub fn from_config(config: &DatabaseConfig) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name)
            .ssl_mode(ssl_mode(config.ssl_mode))
            .timezone(None::<String>);

        Self { options }
    }
}

fn ssl_mode(mode: SslMode) -> MySqlSslMode {
    match mode {
        SslMode::Disabled => MySqlSslMode::Disabled,
        SslMode::Preferred => MySqlSslMode::Preferred,
        SslMode::Required => MySqlSslMode::Required,
        SslMode::VerifyCa => MySqlSslMode::VerifyCa,
        SslMode::VerifyIdentity => MySqlSslMode::VerifyIdentity,
    }
}

impl Connector for MySqlConnector {
    type Session = MySqlSession;

    async fn connect(&self) -> Result<MySqlSession, sqlx::Error> {
        let conn = MySqlConnection::connect_with(&self.options).await?;
        Ok(MySqlSession { conn })
    }
}

pub struct MySqlSession {
    conn: MySqlConnection,
}

impl DbSession for MySqlSession {
    async fn current_time(&mut self) -> Result<NaiveDateTime, sqlx::Error> {
        let row = sqlx::query_as::<_, CurrentTime>(CURRENT_TIME_QUERY)
            .fetch_one(&mut self.conn)
            .await?;

        Ok(row.now)
    }

    async fn close(self) -> Result<(), sqlx::Error> {
        self.conn.close().await
    }
}
