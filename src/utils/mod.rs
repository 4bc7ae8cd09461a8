pub mod build_info;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "venue_core=info".parse() {
            filter = filter.add_directive(directive);
        }

        // Another subscriber may already be installed by an embedding binary.
        let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
    });
}

/// Rounds `value` to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// `part / whole * 100` rounded to `decimals` places; 0 when `whole` is 0.
pub fn percentage(part: f64, whole: f64, decimals: i32) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    round_to(part / whole * 100.0, decimals)
}

/// `total / count` rounded to `decimals` places; 0 when `count` is 0.
pub fn average(total: f64, count: usize, decimals: i32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to(total / count as f64, decimals)
}
