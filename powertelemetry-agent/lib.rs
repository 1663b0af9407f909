pub mod common;
pub mod config;
pub mod error;
pub mod git;
pub mod prom;
pub mod version;

pub use config::ExportConfig;
pub use error::{PowerTelemetryError, Result};
pub use prom::IdentityExporter;
pub use version::{full_version, VersionInfo, LIB_NAME};

// Re-export the catalogue so collectors depend on a single crate
pub use powertelemetry_raw::{
    classify, classify_name, entries, intel_family, IntelModel, Lineage, ModelEntry,
    CATALOGUE_SOURCE, KERNEL_RENAMES,
};
