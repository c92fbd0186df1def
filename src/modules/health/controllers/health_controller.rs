use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::commissions::CommissionEngine;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub application: String,
    pub rate_table: String,
}

/// GET /health - Liveness probe
/// Also reports whether the loaded rate table still passes validation
pub async fn health_check(engine: web::Data<CommissionEngine>) -> impl Responder {
    let rate_table = match engine.rates().validate() {
        Ok(()) => "valid".to_string(),
        Err(err) => {
            tracing::error!("Rate table failed validation: {}", err);
            "invalid".to_string()
        }
    };

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            application: "healthy".to_string(),
            rate_table,
        },
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
