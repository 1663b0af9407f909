use powertelemetry_raw::IntelModel;

use crate::error::{PowerTelemetryError, Result};

pub const DEFAULT_NAMESPACE: &str = "powertelemetry";

#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Prefix of every exported metric name
    pub namespace: String,
    /// Added as a constant `host` label when known
    pub hostname: Option<String>,
}

impl ExportConfig {
    /// Create a new configuration with an explicit namespace and host label
    pub fn new(namespace: impl Into<String>, hostname: Option<String>) -> Result<Self> {
        let namespace = namespace.into();
        Self::validate_namespace(&namespace)?;

        Ok(Self {
            namespace,
            hostname,
        })
    }

    /// Use the given namespace and detect the host label from the system
    pub fn auto_detect(namespace: impl Into<String>) -> Result<Self> {
        let hostname = Self::detect_hostname();
        tracing::info!(
            "Exporting identity for host {}",
            hostname.as_deref().unwrap_or("<unknown>")
        );
        Self::new(namespace, hostname)
    }

    /// Hostname from gethostname(2), `None` if unavailable or not UTF-8
    pub fn detect_hostname() -> Option<String> {
        match nix::unistd::gethostname() {
            Ok(name) => name.into_string().ok().filter(|s| !s.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to detect hostname: {}", e);
                None
            }
        }
    }

    /// Metric namespaces follow `[a-zA-Z_][a-zA-Z0-9_]*`
    fn validate_namespace(namespace: &str) -> Result<()> {
        let mut chars = namespace.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if valid_start && valid_rest {
            Ok(())
        } else {
            Err(PowerTelemetryError::ConfigError(format!(
                "Invalid metric namespace: {namespace:?}"
            )))
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            hostname: None,
        }
    }
}

/// Parse a model number given as hex (`0x55`), decimal (`85`) or symbolic
/// name (`INTEL_FAM6_SKYLAKE_X`, prefix optional)
pub fn parse_model_number(input: &str) -> Result<u8> {
    let input = input.trim();

    if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        return u8::from_str_radix(hex, 16).map_err(|e| {
            PowerTelemetryError::ParseError(format!("Invalid hex model number {input}: {e}"))
        });
    }

    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return input.parse::<u8>().map_err(|e| {
            PowerTelemetryError::ParseError(format!("Invalid model number {input}: {e}"))
        });
    }

    let model: IntelModel = input.parse()?;
    Ok(model.model())
}
