//! Tracing setup for hosts embedding `trellis-rs`.
//!
//! Nothing here runs implicitly. A host either calls
//! [`init_default_tracing`] once at start-up or installs its own `tracing`
//! subscriber; the library itself only emits events.

/// Installs a default `tracing` subscriber when the `telemetry` feature is on.
///
/// The filter honors `RUST_LOG` and falls back to `info`. Returns `true` on
/// success and `false` when the feature is disabled or the host already set
/// a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
