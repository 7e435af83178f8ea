use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    address_handlers, dashboard_handlers, event_handlers, ops_handlers, registration_handlers,
    scan_handlers, speaker_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/eventos",
            axum::routing::get(event_handlers::list_events).post(event_handlers::create_event),
        )
        .route(
            "/v1/eventos/:id",
            axum::routing::get(event_handlers::get_event)
                .patch(event_handlers::update_event)
                .delete(event_handlers::delete_event),
        )
        .route(
            "/v1/palestrantes",
            axum::routing::get(speaker_handlers::list_speakers)
                .post(speaker_handlers::create_speaker),
        )
        .route(
            "/v1/palestrantes/:id",
            axum::routing::get(speaker_handlers::get_speaker)
                .patch(speaker_handlers::update_speaker)
                .delete(speaker_handlers::delete_speaker),
        )
        .route(
            "/v1/inscricoes",
            axum::routing::get(registration_handlers::list_registrations)
                .post(registration_handlers::create_registration),
        )
        .route(
            "/v1/inscricoes/:id",
            axum::routing::patch(registration_handlers::update_registration)
                .delete(registration_handlers::delete_registration),
        )
        .route(
            "/v1/scan/resolve",
            axum::routing::post(scan_handlers::resolve_scan),
        )
        .route(
            "/v1/scan/acknowledge",
            axum::routing::post(scan_handlers::acknowledge_scan),
        )
        .route(
            "/v1/dashboard/stats",
            axum::routing::get(dashboard_handlers::dashboard_stats),
        )
        .route(
            "/v1/endereco/:cep",
            axum::routing::get(address_handlers::lookup_address),
        )
        .route(
            "/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
