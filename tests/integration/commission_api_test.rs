// HTTP tests for the commission endpoints

#[macro_use]
#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::test;
use helpers::test_data::sale_payload;
use rust_decimal_macros::dec;
use salesops_commission::commissions::controllers::{BonusResponse, TierResponse};
use salesops_commission::commissions::models::{
    CommissionStatus, IneligibilityReason, SaleCommission, Tier,
};
use salesops_commission::{CommissionEngine, CommissionRates};

#[actix_web::test]
async fn test_sale_commission_endpoint() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::post()
        .uri("/api/commissions/sales")
        .set_json(sale_payload("s1", "DO", Some("Compact"), "paid", Some(true)))
        .to_request();
    let body: SaleCommission = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.sale_id, "s1");
    assert_eq!(body.status, CommissionStatus::Eligible);
    assert_eq!(body.reason, None);
    assert_eq!(body.breakdown.upfront_commission, dec!(2000));
    assert_eq!(body.breakdown.activation_commission, dec!(1500));
    assert_eq!(body.breakdown.package_commission, dec!(17000));
    assert_eq!(body.breakdown.bonus_commission, dec!(0));
    assert_eq!(body.breakdown.total_commission, dec!(20500));
}

#[actix_web::test]
async fn test_withheld_sale_reports_reason() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::post()
        .uri("/api/commissions/sales")
        .set_json(sale_payload("s2", "FS", Some("Premium"), "unpaid", None))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "not_eligible");
    assert_eq!(body["reason"], "Stock unpaid");
}

#[actix_web::test]
async fn test_unknown_sale_type_degrades_to_zero_upfront() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::post()
        .uri("/api/commissions/sales")
        .set_json(sale_payload("s3", "LEASE", Some("Access"), "paid", Some(true)))
        .to_request();
    let body: SaleCommission = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, CommissionStatus::Eligible);
    assert_eq!(body.breakdown.upfront_commission, dec!(0));
    assert_eq!(body.breakdown.total_commission, dec!(4250));
}

#[actix_web::test]
async fn test_invalid_payment_status_is_bad_request() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::post()
        .uri("/api/commissions/sales")
        .set_json(sale_payload("s4", "FS", Some("Premium"), "overdue", Some(true)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_pending_dvs_over_http() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::post()
        .uri("/api/commissions/sales")
        .set_json(sale_payload("s5", "DVS", None, "unpaid", None))
        .to_request();
    let body: SaleCommission = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, CommissionStatus::PendingApproval);
    assert_eq!(body.reason, Some(IneligibilityReason::AwaitingApproval));
    assert!(body.breakdown.is_zero());
}

#[actix_web::test]
async fn test_bonus_endpoint() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::get()
        .uri("/api/commissions/bonus?tier=SHABA&monthly_sales_count=12")
        .to_request();
    let body: BonusResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.tier, Some(Tier::Shaba));
    assert_eq!(body.bonus_commission, dec!(115000));
}

#[actix_web::test]
async fn test_bonus_for_unknown_tier_is_zero() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::get()
        .uri("/api/commissions/bonus?tier=PLATINUM&monthly_sales_count=12")
        .to_request();
    let body: BonusResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.tier, None);
    assert_eq!(body.bonus_commission, dec!(0));
}

#[actix_web::test]
async fn test_bonus_tier_must_match_exactly() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::get()
        .uri("/api/commissions/bonus?tier=shaba&monthly_sales_count=7")
        .to_request();
    let body: BonusResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.tier, None);
    assert_eq!(body.bonus_commission, dec!(0));
}

#[actix_web::test]
async fn test_padded_sale_type_takes_physical_path() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::post()
        .uri("/api/commissions/sales")
        .set_json(sale_payload("s6", " FS ", Some("Premium"), "paid", Some(true)))
        .to_request();
    let body: SaleCommission = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.status, CommissionStatus::Eligible);
    assert_eq!(body.breakdown.upfront_commission, dec!(0));
    assert_eq!(body.breakdown.total_commission, dec!(66500));
}

#[actix_web::test]
async fn test_tier_endpoint() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::get()
        .uri("/api/commissions/tier?monthly_sales_count=22&months_working=7")
        .to_request();
    let body: TierResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.tier, Tier::Tanzanite);

    let req = test::TestRequest::get()
        .uri("/api/commissions/tier?monthly_sales_count=22&months_working=3")
        .to_request();
    let body: TierResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.tier, Tier::Dhahabu);
}

#[actix_web::test]
async fn test_negative_sales_count_is_bad_request() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::get()
        .uri("/api/commissions/tier?monthly_sales_count=-1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_rates_endpoint_reflects_injected_table() {
    let rates = CommissionRates {
        activation: dec!(1800),
        ..CommissionRates::default()
    };
    let app = init_test_app!(CommissionEngine::new(rates.clone()));

    let req = test::TestRequest::get()
        .uri("/api/commissions/rates")
        .to_request();
    let body: CommissionRates = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, rates);
}

#[actix_web::test]
async fn test_responses_carry_request_id() {
    let app = init_test_app!(CommissionEngine::default());

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("X-Request-ID", "dash-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("dash-42")
    );
}
