use std::process::ExitCode;
use std::sync::Arc;

use tbserve::config::Config;
use tbserve::context::AppContext;
use tbserve::tablebase::SyzygyProber;
use tb_core::ProbeSettings;
use tracing_subscriber::EnvFilter;

/// sysexits.h EX_CONFIG
const EX_CONFIG: u8 = 78;

/// Requests are handled one at a time on a single thread.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    let verbose = config.as_ref().map(|c| c.verbose).unwrap_or(false);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" })),
        )
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return Ok(ExitCode::from(EX_CONFIG));
        }
    };

    tracing::info!(variant = %config.variant, "Syzygy initialization");
    let prober = match SyzygyProber::open(config.variant, &config.syzygy_paths) {
        Ok(prober) => prober,
        Err(e) => {
            tracing::error!("{e}");
            return Ok(ExitCode::from(EX_CONFIG));
        }
    };

    let paths = std::env::join_paths(&config.syzygy_paths)?;
    if prober.max_cardinality() < 3 {
        tracing::error!(
            "at least some syzygy tables are required (SYZYGY_PATH={})",
            paths.to_string_lossy()
        );
        return Ok(ExitCode::from(EX_CONFIG));
    }
    tracing::info!(
        path = %paths.to_string_lossy(),
        cardinality = prober.max_cardinality(),
        "Tables registered"
    );

    let mut settings = ProbeSettings::new(config.variant, prober.max_cardinality());
    if let Some(pieces) = config.dtm_max_pieces {
        tracing::info!(pieces, "DTM enabled");
        settings = settings.with_dtm(pieces);
    }
    let ctx = AppContext {
        cors: config.cors,
        verbose: config.verbose,
        ..AppContext::new(settings, Arc::new(prober))
    };
    let app = tbserve::app(ctx);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("{} tbserve listening on http://{addr} ...", config.variant);

    axum::serve(listener, app).await?;
    Ok(ExitCode::SUCCESS)
}
