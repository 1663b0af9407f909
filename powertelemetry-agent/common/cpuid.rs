use std::fmt;

/// Vendor id reported by CPUID leaf 0 on Intel parts
pub const INTEL_VENDOR: &str = "GenuineIntel";

pub fn cpuid(eax: u32, ecx: u32) -> (u32, u32, u32, u32) {
    let mut ebx: u32;
    let mut edx: u32;
    let mut eax_out = eax;
    let mut ecx_out = ecx;

    // rbx is reserved by LLVM, so swap it through a scratch register
    unsafe {
        std::arch::asm!(
            "mov {0:r}, rbx",
            "cpuid",
            "xchg {0:r}, rbx",
            out(reg) ebx,
            inout("eax") eax_out,
            inout("ecx") ecx_out,
            out("edx") edx,
            options(nostack, preserves_flags)
        );
    }

    (eax_out, ebx, ecx_out, edx)
}

/// Decode the 12-byte vendor id from CPUID leaf 0 (EBX, EDX, ECX order)
pub fn vendor_string(ebx: u32, edx: u32, ecx: u32) -> String {
    let mut bytes = [0u8; 12];
    bytes[0..4].copy_from_slice(&ebx.to_le_bytes());
    bytes[4..8].copy_from_slice(&edx.to_le_bytes());
    bytes[8..12].copy_from_slice(&ecx.to_le_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Vendor, family, model and stepping of a CPU
///
/// Family and model are the SDM "display" values: extended model is folded
/// into the model for families 6 and 0xF, extended family is added only for
/// family 0xF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuSignature {
    pub vendor: String,
    pub family: u32,
    pub model: u8,
    pub stepping: u8,
}

impl CpuSignature {
    /// Decode CPUID leaf 1 EAX
    pub fn from_leaf1(vendor: impl Into<String>, eax: u32) -> Self {
        let stepping = eax & 0xF;
        let model = (eax >> 4) & 0xF;
        let family = (eax >> 8) & 0xF;
        let extended_model = (eax >> 16) & 0xF;
        let extended_family = (eax >> 20) & 0xFF;

        let display_family = if family == 0xF {
            family + extended_family
        } else {
            family
        };

        let display_model = if family == 0x6 || family == 0xF {
            (extended_model << 4) + model
        } else {
            model
        };

        Self {
            vendor: vendor.into(),
            family: display_family,
            model: display_model as u8,
            stepping: stepping as u8,
        }
    }

    /// Read the signature of the CPU this thread runs on
    pub fn probe() -> Self {
        let (_max_leaf, ebx, ecx, edx) = cpuid(0, 0);
        let vendor = vendor_string(ebx, edx, ecx);
        let (eax, _ebx, _ecx, _edx) = cpuid(1, 0);

        let signature = Self::from_leaf1(vendor, eax);
        tracing::debug!("CPUID leaf 1 EAX = 0x{:08X}: {}", eax, signature);
        signature
    }

    pub fn is_intel(&self) -> bool {
        self.vendor == INTEL_VENDOR
    }
}

impl fmt::Display for CpuSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Family {:X}, Model {:X}, Stepping {:X}",
            self.vendor, self.family, self.model, self.stepping
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::similar_names)] // CPU register names are standard
    fn test_cpuid() {
        let (eax, ebx, ecx, edx) = cpuid(0, 0);
        println!("CPUID(0,0): EAX={eax:08X} EBX={ebx:08X} ECX={ecx:08X} EDX={edx:08X}");
        assert_eq!(vendor_string(ebx, edx, ecx).len(), 12);
    }

    #[test]
    fn test_vendor_string() {
        assert_eq!(
            vendor_string(0x756E_6547, 0x4965_6E69, 0x6C65_746E),
            INTEL_VENDOR
        );
        assert_eq!(
            vendor_string(0x6874_7541, 0x6974_6E65, 0x444D_4163),
            "AuthenticAMD"
        );
    }

    #[test]
    fn test_decode_skylake_sp() {
        let sig = CpuSignature::from_leaf1(INTEL_VENDOR, 0x0005_0654);
        assert_eq!(sig.family, 6);
        assert_eq!(sig.model, 0x55);
        assert_eq!(sig.stepping, 4);
        assert!(sig.is_intel());
    }

    #[test]
    fn test_decode_extended_models() {
        let spr = CpuSignature::from_leaf1(INTEL_VENDOR, 0x0008_06F8);
        assert_eq!((spr.family, spr.model, spr.stepping), (6, 0x8F, 8));

        let emr = CpuSignature::from_leaf1(INTEL_VENDOR, 0x000C_06F2);
        assert_eq!((emr.family, emr.model, emr.stepping), (6, 0xCF, 2));
    }

    #[test]
    fn test_decode_extended_family() {
        // Zen 3
        let zen3 = CpuSignature::from_leaf1("AuthenticAMD", 0x00A2_0F12);
        assert_eq!((zen3.family, zen3.model, zen3.stepping), (0x19, 0x21, 2));
        assert!(!zen3.is_intel());

        // Extended model is ignored outside families 6 and 0xF
        let p5 = CpuSignature::from_leaf1(INTEL_VENDOR, 0x0001_0543);
        assert_eq!((p5.family, p5.model, p5.stepping), (5, 4, 3));
    }

    #[test]
    fn test_signature_display() {
        let sig = CpuSignature::from_leaf1(INTEL_VENDOR, 0x0005_0657);
        assert_eq!(
            sig.to_string(),
            "GenuineIntel Family 6, Model 55, Stepping 7"
        );
    }
}
