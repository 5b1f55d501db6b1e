use std::sync::Arc;

use axum::{Router, body::Bytes, extract::State, routing::get};
use lambda_runtime::LambdaEvent;
use serde_json::Value;
use tracing::debug;

use crate::{
    server::app_state::AppState,
    time_check::{db::Connector, models::InvocationResponse, service},
};

pub fn time_check_routes<C: Connector + 'static>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/", get(invoke::<C>).post(invoke::<C>))
        .with_state(state)
}

async fn invoke<C: Connector>(
    State(state): State<Arc<AppState<C>>>,
    body: Bytes,
) -> InvocationResponse {
    let event = serde_json::from_slice(&body).unwrap_or(Value::Null);
    service::handle(state.get_connector(), state.get_timeouts(), &event).await
}

pub async fn lambda_handler<C: Connector>(
    state: Arc<AppState<C>>,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, lambda_runtime::Error> {
    debug!("Lambda invocation {}", event.context.request_id);
    let response =
        service::handle(state.get_connector(), state.get_timeouts(), &event.payload).await;

    Ok(response)
}
