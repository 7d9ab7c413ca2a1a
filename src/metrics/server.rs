use std::sync::Arc;

use actix_web::{get, web, App, HttpResponse, HttpServer};
use prometheus::TextEncoder;
use serde_json::{json, Value};

use super::Metrics;

// Scrape endpoint plus a health probe that reports which event this
// instance emits.

struct ScrapeState {
    metrics: Arc<Metrics>,
    event_name: String,
}

/// Serve `/metrics` and `/health` until the server stops.
pub async fn start_metrics_server(
    metrics: Arc<Metrics>,
    event_name: String,
    port: u16,
) -> std::io::Result<()> {
    tracing::info!(port, event_name = %event_name, "Serving reconciliation metrics");

    let state = web::Data::new(ScrapeState { metrics, event_name });
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(scrape)
            .service(health)
    })
    .workers(1)
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[get("/metrics")]
async fn scrape(state: web::Data<ScrapeState>) -> HttpResponse {
    match TextEncoder::new().encode_to_string(&state.metrics.registry().gather()) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/health")]
async fn health(state: web::Data<ScrapeState>) -> HttpResponse {
    HttpResponse::Ok().json(health_body(&state.metrics, &state.event_name))
}

fn health_body(metrics: &Metrics, event_name: &str) -> Value {
    let handled: f64 = metrics
        .registry()
        .gather()
        .iter()
        .filter(|family| family.name() == "order_email_reconciliations_total")
        .flat_map(|family| family.metric.iter())
        .map(|m| m.counter.value.unwrap_or(0.0))
        .sum();

    json!({
        "status": "ok",
        "service": "order-email-reconcile",
        "event_name": event_name,
        "reconciliations_handled": handled as u64,
    })
}
