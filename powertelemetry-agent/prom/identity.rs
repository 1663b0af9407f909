use prometheus::{Encoder, IntGaugeVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::common::HostCpu;
use crate::config::ExportConfig;
use crate::error::{PowerTelemetryError, Result};
use crate::version::VersionInfo;

const BUILD_LABELS: [&str; 4] = ["lib", "version", "branch", "commit"];
const MODEL_LABELS: [&str; 4] = ["model", "name", "lineage", "variant"];

/// Info-style gauges (constant value 1) describing the build and the host CPU
pub struct IdentityExporter {
    config: ExportConfig,
    registry: Arc<Registry>,
    build_info: IntGaugeVec,
    cpu_model_info: IntGaugeVec,
}

impl IdentityExporter {
    pub fn new(config: ExportConfig) -> Result<Self> {
        let registry = Arc::new(Registry::new());

        let build_info = IntGaugeVec::new(
            Self::opts(&config, "build_info", "Library name, version and git position"),
            &BUILD_LABELS,
        )?;
        registry.register(Box::new(build_info.clone()))?;

        let cpu_model_info = IntGaugeVec::new(
            Self::opts(&config, "cpu_model_info", "Intel Family-6 model of the host CPU"),
            &MODEL_LABELS,
        )?;
        registry.register(Box::new(cpu_model_info.clone()))?;

        let exporter = Self {
            config,
            registry,
            build_info,
            cpu_model_info,
        };

        exporter.record_build(VersionInfo::current());
        tracing::debug!("Identity exporter registered under {}", exporter.config.namespace);

        Ok(exporter)
    }

    fn opts(config: &ExportConfig, name: &str, help: &str) -> Opts {
        let opts = Opts::new(name, help).namespace(config.namespace.clone());
        match &config.hostname {
            Some(host) => opts.const_label("host", host.clone()),
            None => opts,
        }
    }

    /// Replace the build identity series
    pub fn record_build(&self, info: &VersionInfo) {
        self.build_info.reset();
        self.build_info
            .with_label_values(&[info.lib_name(), info.version(), info.branch(), info.commit()])
            .set(1);
    }

    /// Replace the host model series
    pub fn observe(&self, host: &HostCpu) {
        let model = format!("0x{:02X}", host.signature.model);
        let lineage = host.model.map(|m| m.lineage().name()).unwrap_or("unknown");
        let variant = host.variant.map(|v| v.name()).unwrap_or("");

        self.cpu_model_info.reset();
        self.cpu_model_info
            .with_label_values(&[model.as_str(), host.name(), lineage, variant])
            .set(1);
    }

    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    /// Render all series in the Prometheus text exposition format
    pub fn encode(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| {
            PowerTelemetryError::ParseError(format!("Metrics output is not UTF-8: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{CpuSignature, INTEL_VENDOR};

    fn exporter() -> IdentityExporter {
        let config = ExportConfig::new("powertelemetry", Some("node-1".to_string())).unwrap();
        IdentityExporter::new(config).unwrap()
    }

    #[test]
    fn test_build_info_exported() {
        let exporter = exporter();
        exporter.record_build(&VersionInfo::new("1.2.3", "main", ""));

        let text = exporter.encode().unwrap();
        assert!(text.contains("powertelemetry_build_info{"));
        assert!(text.contains("lib=\"powertelemetry\""));
        assert!(text.contains("version=\"1.2.3\""));
        assert!(text.contains("branch=\"main\""));
        assert!(text.contains("commit=\"unknown\""));
        assert!(text.contains("host=\"node-1\""));
    }

    #[test]
    fn test_cpu_model_info_exported() {
        let exporter = exporter();
        let signature = CpuSignature::from_leaf1(INTEL_VENDOR, 0x000C_06F2);
        let host = HostCpu::identify(signature).unwrap();
        exporter.observe(&host);

        let text = exporter.encode().unwrap();
        assert!(text.contains("powertelemetry_cpu_model_info{"));
        assert!(text.contains("model=\"0xCF\""));
        assert!(text.contains("name=\"INTEL_FAM6_EMERALDRAPIDS_X\""));
        assert!(text.contains("lineage=\"core\""));
    }

    #[test]
    fn test_observe_replaces_previous_host() {
        let exporter = exporter();
        let known = HostCpu::identify(CpuSignature::from_leaf1(INTEL_VENDOR, 0x0005_0657)).unwrap();
        let unknown = HostCpu::identify(CpuSignature::from_leaf1(INTEL_VENDOR, 0x0000_0610)).unwrap();

        exporter.observe(&known);
        exporter.observe(&unknown);

        let text = exporter.encode().unwrap();
        assert!(!text.contains("INTEL_FAM6_SKYLAKE_X"));
        assert!(text.contains("name=\"unknown\""));
        assert!(text.contains("lineage=\"unknown\""));
    }

    #[test]
    fn test_registry_gather() {
        let exporter = exporter();
        let families = exporter.registry().gather();
        assert!(families
            .iter()
            .any(|mf| mf.get_name() == "powertelemetry_build_info"));

        // cpu_model_info has no series until a host is observed
        assert!(families
            .iter()
            .filter(|mf| mf.get_name() == "powertelemetry_cpu_model_info")
            .all(|mf| mf.get_metric().is_empty()));
    }
}
