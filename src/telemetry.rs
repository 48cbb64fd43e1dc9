//! Opt-in tracing setup for hosts embedding `plot-rs`.
//!
//! The crate only emits `tracing` events. Hosts that already run a
//! subscriber need nothing from here.

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back
/// to `warn,plot_rs=info`.
///
/// Returns `false` when the `telemetry` feature is off or another global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn,plot_rs=info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn disabled_feature_installs_nothing() {
        assert!(!super::init_default_tracing());
    }
}
