use dotenv::dotenv;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::{
    config::config::{AppConfig, CONFIG, Runtime},
    server::{
        app_state::AppState,
        runtime::{run_http, run_lambda},
    },
};

mod config;
mod health;
mod mw;
mod server;
mod time_check;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() {
    // Initialize .env
    dotenv().ok();

    let config = &*CONFIG;

    // Initialize logging
    setup_logging(config);

    // Initialize state
    let state = AppState::from_config(&config.database);

    let result = match config.server.runtime {
        Runtime::Http => run_http(state, &config.server).await,
        Runtime::Lambda => run_lambda(state).await,
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn setup_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,rds_hello={}", config.log_level)));

    // CloudWatch does not render ANSI escapes
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(config.server.runtime == Runtime::Http)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set global tracing");
}
