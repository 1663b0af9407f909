use std::io;
use thiserror::Error;

use powertelemetry_raw::CatalogueError;

#[derive(Error, Debug)]
pub enum PowerTelemetryError {
    #[error("Unsupported CPU vendor: {0} (only GenuineIntel is catalogued)")]
    UnsupportedVendor(String),

    #[error("Unsupported CPU family: 0x{0:X} (only Intel family 6 is catalogued)")]
    UnsupportedFamily(u32),

    #[error("Catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Prometheus error: {0}")]
    PrometheusError(#[from] prometheus::Error),
}

pub type Result<T> = std::result::Result<T, PowerTelemetryError>;
