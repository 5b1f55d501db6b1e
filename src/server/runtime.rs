use std::sync::Arc;

use axum::{Router, middleware::from_fn};
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::config::ServerConfig,
    health::handlers::health_routes,
    mw::request_mw::request_mw,
    server::{app_state::AppState, error::ServerError},
    time_check::{
        db::Connector,
        handlers::{lambda_handler, time_check_routes},
    },
};

pub fn app<C: Connector + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(time_check_routes(state))
        .layer(from_fn(request_mw))
}

pub async fn run_http(state: Arc<AppState>, config: &ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(format!("{}:{}", config.address, config.port)).await?;

    info!("Server listening on address: {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;

    Ok(())
}

pub async fn run_lambda(state: Arc<AppState>) -> Result<(), ServerError> {
    info!("Starting Lambda runtime");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let state = state.clone();
        async move { lambda_handler(state, event).await }
    }))
    .await
    .map_err(ServerError::Lambda)
}
