use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use clap::Parser;
use prometheus::{Encoder, TextEncoder};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

use powertelemetry::common::HOST_CPU;
use powertelemetry::config::{parse_model_number, DEFAULT_NAMESPACE};
use powertelemetry::{
    classify, entries, ExportConfig, IdentityExporter, Lineage, Result, VersionInfo,
    CATALOGUE_SOURCE,
};

#[derive(Parser, Debug)]
#[command(name = "powertelemetry")]
#[command(about = "Intel Family-6 CPU identification for power telemetry collectors")]
struct Args {
    #[arg(long, help = "List every catalogued Intel Family-6 model")]
    list: bool,

    #[arg(
        long,
        requires = "list",
        help = "Restrict --list to one lineage (core, hybrid, atom, xeon-phi)"
    )]
    lineage: Option<String>,

    #[arg(
        long,
        help = "Classify a model number given as hex (0x55), decimal (85) or symbolic name"
    )]
    model: Option<String>,

    #[arg(long, help = "Print identity metrics in Prometheus text format")]
    metrics: bool,

    #[arg(long, help = "Serve /metrics and /version on this address (e.g. 0.0.0.0:8080)")]
    listen: Option<SocketAddr>,

    #[arg(long, default_value = DEFAULT_NAMESPACE, help = "Metric name prefix")]
    namespace: String,

    #[arg(short, long, help = "Enable verbose logging (shows CPUID decoding)")]
    verbose: bool,
}

struct AppState {
    exporter: Arc<IdentityExporter>,
}

async fn metrics_handler(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> Response {
    metrics_response(state.exporter.encode())
}

fn metrics_response(encoded: Result<String>) -> Response {
    match encoded {
        Ok(body) => {
            let content_type = TextEncoder::new().format_type().to_string();
            ([(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to encode identity metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("failed to encode metrics: {e}"),
            )
                .into_response()
        }
    }
}

async fn version_handler() -> String {
    VersionInfo::current().full_version()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {
            tracing::warn!("Shutdown triggered by Ctrl+C");
        },
        _ = terminate => {
            tracing::warn!("Shutdown triggered by SIGTERM");
        },
    }
}

/// One `0xNN  NAME  lineage` line per entry, optionally limited to a lineage
fn format_catalogue(lineage: Option<Lineage>) -> String {
    entries()
        .filter(|e| lineage.map_or(true, |l| e.lineage == l))
        .map(|e| format!("0x{:02X}  {:<40} {}\n", e.model, e.name, e.lineage))
        .collect()
}

fn format_classification(model: u8) -> String {
    match classify(model) {
        Some(m) => format!("0x{:02X}  {}  ({})", model, m, m.lineage().description()),
        None => format!("0x{model:02X}  not recognised"),
    }
}

async fn serve(addr: SocketAddr, exporter: IdentityExporter) -> Result<()> {
    let state = Arc::new(AppState {
        exporter: Arc::new(exporter),
    });

    let app = Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/version", get(version_handler))
        .with_state(state);

    tracing::warn!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("{}", VersionInfo::current());
    tracing::debug!("Model catalogue: {}", CATALOGUE_SOURCE);

    if let Some(raw) = &args.model {
        println!("{}", format_classification(parse_model_number(raw)?));
        return Ok(());
    }

    if args.list {
        let lineage: Option<Lineage> = args.lineage.as_deref().map(str::parse).transpose()?;
        print!("{}", format_catalogue(lineage));
        return Ok(());
    }

    let config = ExportConfig::auto_detect(args.namespace.clone())?;
    let exporter = IdentityExporter::new(config)?;
    if let Some(host) = HOST_CPU.as_ref() {
        exporter.observe(host);
    }

    if args.metrics {
        print!("{}", exporter.encode()?);
        return Ok(());
    }

    if let Some(addr) = args.listen {
        return serve(addr, exporter).await;
    }

    println!("{}", VersionInfo::current().full_version());
    match HOST_CPU.as_ref() {
        Some(host) => println!("{host}"),
        None => println!("Host CPU is not an Intel Family-6 part"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use powertelemetry::PowerTelemetryError;

    #[test]
    fn test_format_catalogue_lines() {
        let all = format_catalogue(None);
        assert_eq!(all.lines().count(), entries().count());

        let skx = all
            .lines()
            .find(|line| line.starts_with("0x55"))
            .unwrap();
        assert!(skx.starts_with("0x55  INTEL_FAM6_SKYLAKE_X "));
        assert!(skx.ends_with(" core"));
    }

    #[test]
    fn test_format_catalogue_lineage_filter() {
        let phi = format_catalogue(Some(Lineage::XeonPhi));
        let lines: Vec<_> = phi.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0x57  INTEL_FAM6_XEON_PHI_KNL"));
        assert!(lines[1].starts_with("0x85  INTEL_FAM6_XEON_PHI_KNM"));
        assert!(lines.iter().all(|line| line.ends_with(" xeon-phi")));

        let atom = format_catalogue(Some(Lineage::Atom));
        assert!(atom.lines().all(|line| line.contains("INTEL_FAM6_ATOM_")));
    }

    #[test]
    fn test_format_classification() {
        assert_eq!(
            format_classification(0x8F),
            "0x8F  INTEL_FAM6_SAPPHIRERAPIDS_X  (Big Core)"
        );
        assert_eq!(format_classification(0x00), "0x00  not recognised");
        assert_eq!(format_classification(0xFF), "0xFF  not recognised");
    }

    #[test]
    fn test_metrics_response_ok() {
        let response = metrics_response(Ok("powertelemetry_build_info 1\n".to_string()));
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    }

    #[test]
    fn test_metrics_response_encode_failure() {
        let failed = Err(PowerTelemetryError::ParseError("bad label".to_string()));
        assert_eq!(
            metrics_response(failed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
