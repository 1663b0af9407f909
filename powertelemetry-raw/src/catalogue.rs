//! Classification and enumeration over the Family-6 model catalogue
//!
//! The catalogue is immutable. [`classify`] is a single table lookup keyed
//! by the one-byte display model, so it is safe to call from any thread.

use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogueError, Result};
use crate::intel_family::IntelModel;

/// Provenance of the catalogue
///
/// The table is a curated subset of the kernel header, not a snapshot of
/// one release: newer kernels carry entries that are absent here, and a few
/// names differ (see [`KERNEL_RENAMES`]). Compare against upstream
/// `intel-family.h` when auditing for drift.
pub const CATALOGUE_SOURCE: &str =
    "curated subset of linux arch/x86/include/asm/intel-family.h (INTEL_FAM6_* naming, renames in KERNEL_RENAMES)";

/// Entries whose catalogue name differs from the kernel's, as
/// `(model, kernel name)`
pub const KERNEL_RENAMES: &[(u8, &str)] = &[(0x5A, "INTEL_FAM6_ATOM_AIRMONT_MID")];

/// Prefix shared by every symbolic model name
pub const NAME_PREFIX: &str = "INTEL_FAM6_";

enum_with_data! {
    /// Micro-architecture lineage of a catalogue entry
    ///
    /// The grouping is documentary; no lookup depends on it.
    pub enum Lineage {
        Core => ("core", "Big Core"),
        Hybrid => ("hybrid", "Hybrid P/E-Core"),
        Atom => ("atom", "Small Core / Atom"),
        XeonPhi => ("xeon-phi", "Xeon Phi"),
    }
    impl description -> &'static str
}

impl Lineage {
    /// Catalogue entries belonging to this lineage, in declaration order
    pub fn models(self) -> impl Iterator<Item = IntelModel> {
        IntelModel::all()
            .iter()
            .copied()
            .filter(move |model| model.lineage() == self)
    }
}

impl fmt::Display for Lineage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Lineage {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Lineage::ALL
            .iter()
            .copied()
            .find(|lineage| lineage.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogueError::UnknownLineage(s.to_string()))
    }
}

/// One `(name, model)` pair of the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelEntry {
    pub name: &'static str,
    pub model: u8,
    pub lineage: Lineage,
}

impl From<IntelModel> for ModelEntry {
    fn from(model: IntelModel) -> Self {
        Self {
            name: model.name(),
            model: model.model(),
            lineage: model.lineage(),
        }
    }
}

impl fmt::Display for IntelModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a symbolic name
///
/// Matching is case-insensitive and the `INTEL_FAM6_` prefix is optional,
/// so `skylake_x` and `INTEL_FAM6_SKYLAKE_X` are equivalent.
impl FromStr for IntelModel {
    type Err = CatalogueError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        let wanted = wanted.strip_prefix(NAME_PREFIX).unwrap_or(&wanted);

        IntelModel::all()
            .iter()
            .copied()
            .find(|model| &model.name()[NAME_PREFIX.len()..] == wanted)
            .ok_or_else(|| CatalogueError::UnknownModelName(s.to_string()))
    }
}

/// Model number -> catalogue entry, one slot per possible byte value
static BY_MODEL: [Option<IntelModel>; 256] = build_lookup_table();

const fn build_lookup_table() -> [Option<IntelModel>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < IntelModel::ALL.len() {
        let model = IntelModel::ALL[i];
        let slot = model.model() as usize;
        if table[slot].is_some() {
            panic!("duplicate model number in the Intel Family-6 catalogue");
        }
        table[slot] = Some(model);
        i += 1;
    }
    table
}

/// Classify a Family-6 display model number
///
/// Returns `None` when the number is not catalogued; callers decide the
/// fallback. `0x55` always yields [`IntelModel::SkylakeX`]: Cascade Lake-X
/// and Cooper Lake-X share that number and only stepping tells them apart.
///
/// The caller is responsible for checking that the CPU is Intel family 6.
///
/// # Example
///
/// ```
/// use powertelemetry_raw::{classify, IntelModel};
///
/// assert_eq!(classify(0xCF), Some(IntelModel::EmeraldrapidsX));
/// assert_eq!(classify(0x00), None);
/// ```
pub fn classify(model: u8) -> Option<IntelModel> {
    BY_MODEL[model as usize]
}

/// Symbolic name for a model number, if catalogued
pub fn classify_name(model: u8) -> Option<&'static str> {
    classify(model).map(|m| m.name())
}

/// Every catalogue entry, in declaration order
pub fn entries() -> impl Iterator<Item = ModelEntry> {
    IntelModel::all().iter().copied().map(ModelEntry::from)
}
