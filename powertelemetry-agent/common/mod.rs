pub mod arch;
pub mod cpuid;

pub use arch::{HostCpu, ModelVariant, HOST_CPU};
pub use cpuid::{CpuSignature, INTEL_VENDOR};
