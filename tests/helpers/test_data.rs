// Request payload factories

use serde_json::{json, Value};

/// Sale payload in the shape the dashboards post
pub fn sale_payload(
    sale_id: &str,
    sale_type: &str,
    package_name: Option<&str>,
    payment_status: &str,
    admin_approved: Option<bool>,
) -> Value {
    json!({
        "sale_id": sale_id,
        "sale_type": sale_type,
        "package_name": package_name,
        "payment_status": payment_status,
        "admin_approved": admin_approved,
    })
}

/// `count` approved, paid decoder-only sales on the COMPACT package
pub fn compact_sales(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| sale_payload(&format!("s{}", i), "DO", Some("Compact"), "paid", Some(true)))
        .collect()
}
