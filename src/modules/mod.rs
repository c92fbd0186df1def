pub mod commissions;
pub mod health;

use actix_web::web;

use crate::middleware::{json_error_handler, query_error_handler};

/// Register every route plus the shared extractor error handlers
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .configure(health::controllers::configure)
        .configure(commissions::controllers::configure);
}
