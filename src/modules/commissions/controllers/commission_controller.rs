//! Commission HTTP endpoints
//!
//! Thin JSON wrappers over `CommissionEngine` for the dashboards' reporting
//! views. Amounts serialize as decimal strings.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Result;
use crate::modules::commissions::models::{SaleInput, Tier};
use crate::modules::commissions::services::{CommissionEngine, MonthlySummaryInput};

/// Query parameters for the bonus endpoint
#[derive(Debug, Deserialize)]
pub struct BonusQuery {
    pub tier: String,
    pub monthly_sales_count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BonusResponse {
    /// `None` when the requested tier is not recognised
    pub tier: Option<Tier>,
    pub monthly_sales_count: u32,
    pub bonus_commission: Decimal,
}

/// Query parameters for the tier endpoint
#[derive(Debug, Deserialize)]
pub struct TierQuery {
    pub monthly_sales_count: u32,
    #[serde(default)]
    pub months_working: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TierResponse {
    pub monthly_sales_count: u32,
    pub months_working: u32,
    pub tier: Tier,
}

/// POST /api/commissions/sales
pub async fn calculate_sale_commission(
    engine: web::Data<CommissionEngine>,
    sale: web::Json<SaleInput>,
) -> HttpResponse {
    let result = engine.calculate_sale_commission(&sale);
    HttpResponse::Ok().json(result)
}

/// GET /api/commissions/bonus
///
/// Unknown tiers earn no bonus rather than failing the request.
pub async fn calculate_bonus_commission(
    engine: web::Data<CommissionEngine>,
    query: web::Query<BonusQuery>,
) -> HttpResponse {
    let tier = match query.tier.parse::<Tier>() {
        Ok(tier) => Some(tier),
        Err(err) => {
            warn!("Bonus requested for unrecognised tier: {}", err);
            None
        }
    };

    let bonus_commission = tier
        .map(|tier| engine.calculate_bonus_commission(tier, query.monthly_sales_count))
        .unwrap_or(Decimal::ZERO);

    HttpResponse::Ok().json(BonusResponse {
        tier,
        monthly_sales_count: query.monthly_sales_count,
        bonus_commission,
    })
}

/// GET /api/commissions/tier
pub async fn get_dsr_tier(
    engine: web::Data<CommissionEngine>,
    query: web::Query<TierQuery>,
) -> HttpResponse {
    let tier = engine.dsr_tier(query.monthly_sales_count, query.months_working);

    HttpResponse::Ok().json(TierResponse {
        monthly_sales_count: query.monthly_sales_count,
        months_working: query.months_working,
        tier,
    })
}

/// POST /api/commissions/monthly-summary
pub async fn monthly_summary(
    engine: web::Data<CommissionEngine>,
    input: web::Json<MonthlySummaryInput>,
) -> Result<HttpResponse> {
    let summary = engine.monthly_summary(&input)?;
    Ok(HttpResponse::Ok().json(summary))
}

/// GET /api/commissions/rates
pub async fn get_rates(engine: web::Data<CommissionEngine>) -> HttpResponse {
    HttpResponse::Ok().json(engine.rates())
}

/// Configure commission routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/commissions")
            .route("/sales", web::post().to(calculate_sale_commission))
            .route("/bonus", web::get().to(calculate_bonus_commission))
            .route("/tier", web::get().to(get_dsr_tier))
            .route("/monthly-summary", web::post().to(monthly_summary))
            .route("/rates", web::get().to(get_rates)),
    );
}
