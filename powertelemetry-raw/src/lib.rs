//! # powertelemetry-raw
//!
//! Intel Family-6 CPU model catalogue for power telemetry collectors.
//!
//! Collectors for RAPL energy, uncore frequency and C-state residency pick
//! their MSR maps and scaling constants by CPU model. This crate holds a
//! curated subset of the Family-6 model numbers in the Linux kernel's
//! `intel-family.h` (values bit-exact, names in the `INTEL_FAM6_*` scheme),
//! and the lookup on top of it. See [`CATALOGUE_SOURCE`] and
//! [`catalogue::KERNEL_RENAMES`] for where the names differ.
//!
//! Reading CPUID is left to the caller, who must also check that the CPU is
//! Intel family 6 before consulting the catalogue.
//!
//! ## Usage
//!
//! ```
//! use powertelemetry_raw::intel_family::INTEL_FAM6_SAPPHIRERAPIDS_X;
//! use powertelemetry_raw::{classify, entries, IntelModel};
//!
//! let model = 0x8F;
//! if model == INTEL_FAM6_SAPPHIRERAPIDS_X {
//!     // select the SPR register map
//! }
//!
//! assert_eq!(classify(model), Some(IntelModel::SapphirerapidsX));
//!
//! for entry in entries() {
//!     println!("0x{:02X} {}", entry.model, entry.name);
//! }
//! ```

#[cfg(not(all(target_arch = "x86_64", target_os = "linux")))]
compile_error!("powertelemetry-raw only supports x86_64 Linux hosts");

// Macros (must be first for visibility)
#[macro_use]
pub mod macros;

pub mod catalogue;
pub mod error;
pub mod intel_family;

pub use catalogue::{
    classify, classify_name, entries, Lineage, ModelEntry, CATALOGUE_SOURCE, KERNEL_RENAMES,
};
pub use error::{CatalogueError, Result};
pub use intel_family::IntelModel;
