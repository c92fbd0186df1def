use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise this crate logs at `LOG_LEVEL` and
/// actix at info. Production emits JSON lines.
pub fn init_tracing(app: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "salesops_commission={},actix_web=info",
            app.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if app.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
