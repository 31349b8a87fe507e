use axum::routing::{get, post};
use axum::Router;

use risk_application::AppState;

use crate::handlers::{ops_handlers, registry_handlers, risk_model_handlers, score_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/score", post(score_handlers::score_transaction))
        .route("/v1/score/batch", post(score_handlers::score_batch))
        .route("/v1/risk/credit", post(risk_model_handlers::assess_credit_risk))
        .route("/v1/risk/liquidity", post(risk_model_handlers::assess_liquidity))
        .route(
            "/v1/registries/:kind",
            get(registry_handlers::list_registry).put(registry_handlers::update_registry),
        )
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
