use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use salesops_commission::config::Config;
use salesops_commission::core::logging::init_tracing;
use salesops_commission::middleware::{ErrorLogger, RequestIdentity};
use salesops_commission::modules;
use salesops_commission::CommissionEngine;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(&config.app);
    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting SalesOps Commission Engine");
    tracing::info!("Environment: {}", config.app.env);

    let rates = config
        .commission
        .load_rates()
        .context("Failed to load commission rates")?;
    tracing::info!(
        packages = rates.packages.len(),
        bonus_bands = rates.bonus_bands.len(),
        custom = config.commission.rates_file.is_some(),
        "Commission rate table ready"
    );

    let engine = web::Data::new(CommissionEngine::new(rates));

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(engine.clone())
            .wrap(ErrorLogger)
            .wrap(RequestIdentity)
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")
}
