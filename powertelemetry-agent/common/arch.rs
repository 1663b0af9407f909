// Host CPU identification against the Family-6 catalogue

use std::fmt;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use powertelemetry_raw::intel_family::INTEL_FAM6_SKYLAKE_X;
use powertelemetry_raw::{classify, enum_with_data, IntelModel};

use crate::common::cpuid::CpuSignature;
use crate::error::{PowerTelemetryError, Result};

enum_with_data! {
    /// Server part sharing model 0x55, told apart by stepping
    pub enum ModelVariant {
        SkylakeX => ("Skylake-X", 0x0..=0x4),
        CascadeLakeX => ("Cascade Lake-X", 0x5..=0x7),
        CooperLakeX => ("Cooper Lake-X", 0xA..=0xB),
    }
    impl steppings -> RangeInclusive<u8>
}

impl ModelVariant {
    /// Stepping-based refinement of a catalogue classification
    ///
    /// Only model 0x55 is refined. Steppings outside the known ranges keep
    /// the catalogue's Skylake-X name.
    pub fn from_signature(model: u8, stepping: u8) -> Option<Self> {
        if model != INTEL_FAM6_SKYLAKE_X {
            return None;
        }

        let variant = Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.steppings().contains(&stepping))
            .unwrap_or_else(|| {
                tracing::warn!(
                    "Unexpected stepping {:X} for model 0x55, keeping Skylake-X",
                    stepping
                );
                ModelVariant::SkylakeX
            });

        Some(variant)
    }
}

/// Identified host CPU
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCpu {
    pub signature: CpuSignature,
    /// `None` when the model number is not catalogued
    pub model: Option<IntelModel>,
    pub variant: Option<ModelVariant>,
}

pub static HOST_CPU: Lazy<Option<HostCpu>> = Lazy::new(|| match HostCpu::detect() {
    Ok(host) => Some(host),
    Err(e) => {
        tracing::warn!("Host CPU not identified: {}", e);
        None
    }
});

impl HostCpu {
    /// Classify a signature obtained from a CPUID probe
    ///
    /// Non-Intel vendors and families other than 6 are rejected; an
    /// uncatalogued Family-6 model is returned with `model: None`.
    pub fn identify(signature: CpuSignature) -> Result<Self> {
        if !signature.is_intel() {
            return Err(PowerTelemetryError::UnsupportedVendor(
                signature.vendor.clone(),
            ));
        }

        // Intel architectures are Family 6
        if signature.family != 0x6 {
            return Err(PowerTelemetryError::UnsupportedFamily(signature.family));
        }

        let model = classify(signature.model);
        let variant = ModelVariant::from_signature(signature.model, signature.stepping);

        match model {
            Some(m) => tracing::info!("Classified CPU model 0x{:02X} as {}", signature.model, m),
            None => tracing::warn!(
                "Intel family 6 model 0x{:02X} is not in the catalogue",
                signature.model
            ),
        }

        Ok(Self {
            signature,
            model,
            variant,
        })
    }

    /// Probe and identify the CPU this process runs on
    pub fn detect() -> Result<Self> {
        let signature = CpuSignature::probe();
        tracing::info!("CPU: {}", signature);
        Self::identify(signature)
    }

    /// Catalogue name, or `"unknown"` for an uncatalogued model
    pub fn name(&self) -> &'static str {
        self.model.map(|m| m.name()).unwrap_or("unknown")
    }
}

impl fmt::Display for HostCpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.signature, self.name())?;
        if let Some(variant) = self.variant {
            write!(f, " ({})", variant.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::cpuid::INTEL_VENDOR;

    fn intel(eax: u32) -> CpuSignature {
        CpuSignature::from_leaf1(INTEL_VENDOR, eax)
    }

    #[test]
    fn test_identify_sapphire_rapids() {
        let host = HostCpu::identify(intel(0x0008_06F8)).unwrap();
        assert_eq!(host.model, Some(IntelModel::SapphirerapidsX));
        assert_eq!(host.variant, None);
        assert_eq!(host.name(), "INTEL_FAM6_SAPPHIRERAPIDS_X");
    }

    #[test]
    fn test_identify_shared_model_by_stepping() {
        let skx = HostCpu::identify(intel(0x0005_0654)).unwrap();
        assert_eq!(skx.model, Some(IntelModel::SkylakeX));
        assert_eq!(skx.variant, Some(ModelVariant::SkylakeX));

        let clx = HostCpu::identify(intel(0x0005_0657)).unwrap();
        assert_eq!(clx.model, Some(IntelModel::SkylakeX));
        assert_eq!(clx.variant, Some(ModelVariant::CascadeLakeX));
        assert_eq!(
            clx.to_string(),
            "GenuineIntel Family 6, Model 55, Stepping 7: INTEL_FAM6_SKYLAKE_X (Cascade Lake-X)"
        );

        let cpx = HostCpu::identify(intel(0x0005_065B)).unwrap();
        assert_eq!(cpx.variant, Some(ModelVariant::CooperLakeX));
    }

    #[test]
    fn test_variant_only_for_shared_model() {
        assert_eq!(ModelVariant::from_signature(0x8F, 5), None);
        assert_eq!(
            ModelVariant::from_signature(0x55, 0xE),
            Some(ModelVariant::SkylakeX)
        );
        assert_eq!(ModelVariant::ALL.len(), 3);
    }

    #[test]
    fn test_variant_stepping_ranges() {
        assert_eq!(ModelVariant::CascadeLakeX.steppings(), 0x5..=0x7);
        assert_eq!(ModelVariant::CooperLakeX.name(), "Cooper Lake-X");

        // Ranges are disjoint, and the gap 8..=9 falls back to Skylake-X
        for stepping in 0..=0xF {
            let owners = ModelVariant::ALL
                .iter()
                .filter(|v| v.steppings().contains(&stepping))
                .count();
            assert!(owners <= 1, "stepping {stepping:X}");
        }
        assert_eq!(
            ModelVariant::from_signature(0x55, 0x8),
            Some(ModelVariant::SkylakeX)
        );
        assert_eq!(
            ModelVariant::from_signature(0x55, 0xB),
            Some(ModelVariant::CooperLakeX)
        );
    }

    #[test]
    fn test_identify_unknown_model() {
        // family 6, model 0x01
        let host = HostCpu::identify(intel(0x0000_0610)).unwrap();
        assert_eq!(host.model, None);
        assert_eq!(host.name(), "unknown");
    }

    #[test]
    fn test_identify_rejects_other_vendors_and_families() {
        let amd = CpuSignature::from_leaf1("AuthenticAMD", 0x00A2_0F12);
        assert!(matches!(
            HostCpu::identify(amd),
            Err(PowerTelemetryError::UnsupportedVendor(v)) if v == "AuthenticAMD"
        ));

        // NetBurst reports family 0xF
        let netburst = intel(0x0000_0F41);
        assert!(matches!(
            HostCpu::identify(netburst),
            Err(PowerTelemetryError::UnsupportedFamily(0xF))
        ));
    }
}
