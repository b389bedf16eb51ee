use crate::handlers::{
    health::health_check,
    page::{forecast_image, report_elements, report_page},
    results::{get_demand_estimates, get_error_metrics, get_selection},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    let router = Router::new()
        // Rendered report
        .route("/", get(report_page))
        // Health check
        .route("/health", get(health_check))
        // Report API routes
        .route("/api/v1/report/elements", get(report_elements))
        .route("/api/v1/report/forecast-image", get(forecast_image))
        .route("/api/v1/report/error-metrics", get(get_error_metrics))
        .route("/api/v1/report/demand-estimates", get(get_demand_estimates))
        .route("/api/v1/report/selection", get(get_selection))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // The Prometheus recorder is process-global, so tests run without it
    #[cfg(not(test))]
    let router = {
        let (prometheus_layer, metric_handle) = axum_prometheus::PrometheusMetricLayer::pair();
        router
            .route("/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer)
    };

    router
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
