use env_logger::{Builder, Env};
use log::LevelFilter;

/// Set to log raw request/response traffic of the RPC transport.
pub const LOG_TRAFFIC_ENV: &str = "LOTTERY_LOG_TRAFFIC";

pub fn setup_logging() {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if log_traffic_enabled(std::env::var(LOG_TRAFFIC_ENV).ok().as_deref()) {
        builder.filter_module("alloy_transport_http", LevelFilter::Trace);
        builder.filter_module("alloy_rpc_client", LevelFilter::Trace);
    }

    // A logger may already be installed when embedded or under test.
    let _ = builder.try_init();
}

fn log_traffic_enabled(value: Option<&str>) -> bool {
    matches!(
        value.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
