//! Intel Family-6 model numbers
//!
//! Curated subset of the Linux kernel's
//! `arch/x86/include/asm/intel-family.h`. Model values are bit-exact; names
//! follow the `INTEL_FAM6_*` scheme, with the differences listed in
//! [`KERNEL_RENAMES`](crate::catalogue::KERNEL_RENAMES).
//!
//! ## Naming
//!
//! `INTEL_FAM6{_OPTFAMILY}_{MICROARCH}{_OPTDIFF}`
//!
//! - `OPTFAMILY`: empty for Core, `_ATOM`, or `_XEON_PHI`
//! - `MICROARCH`: core code name (`SKYLAKE`, `SAPPHIRERAPIDS`, ...)
//! - `OPTDIFF`: market segment
//!   - `_L` mobile, `_G` with extra graphics, `_X` server, `_D` micro-server
//!   - `_N`, `_P`, `_H`, `_S`, `_M` other client tiers
//!   - `_EP`, `_EX` historical 2- and 4+-socket server parts
//!   - Atom only: `_MID`, `_TABLET`, `_SMARTPHONE`, `_NP`, `_PLUS`
//!
//! Values are the CPUID display model (extended model folded in) for
//! family 6.

intel_models! {
    /// A recognised Intel Family-6 micro-architecture
    pub enum IntelModel {
        // Big Core: legacy
        CoreYonah => (INTEL_FAM6_CORE_YONAH = 0x0E, Core),

        Core2Merom => (INTEL_FAM6_CORE2_MEROM = 0x0F, Core),
        Core2MeromL => (INTEL_FAM6_CORE2_MEROM_L = 0x16, Core),
        Core2Penryn => (INTEL_FAM6_CORE2_PENRYN = 0x17, Core),
        Core2Dunnington => (INTEL_FAM6_CORE2_DUNNINGTON = 0x1D, Core),

        Nehalem => (INTEL_FAM6_NEHALEM = 0x1E, Core),
        /// Auburndale / Havendale
        NehalemG => (INTEL_FAM6_NEHALEM_G = 0x1F, Core),
        NehalemEp => (INTEL_FAM6_NEHALEM_EP = 0x1A, Core),
        NehalemEx => (INTEL_FAM6_NEHALEM_EX = 0x2E, Core),

        Westmere => (INTEL_FAM6_WESTMERE = 0x25, Core),
        WestmereEp => (INTEL_FAM6_WESTMERE_EP = 0x2C, Core),
        WestmereEx => (INTEL_FAM6_WESTMERE_EX = 0x2F, Core),

        Sandybridge => (INTEL_FAM6_SANDYBRIDGE = 0x2A, Core),
        SandybridgeX => (INTEL_FAM6_SANDYBRIDGE_X = 0x2D, Core),
        Ivybridge => (INTEL_FAM6_IVYBRIDGE = 0x3A, Core),
        IvybridgeX => (INTEL_FAM6_IVYBRIDGE_X = 0x3E, Core),

        Haswell => (INTEL_FAM6_HASWELL = 0x3C, Core),
        HaswellX => (INTEL_FAM6_HASWELL_X = 0x3F, Core),
        HaswellL => (INTEL_FAM6_HASWELL_L = 0x45, Core),
        HaswellG => (INTEL_FAM6_HASWELL_G = 0x46, Core),

        Broadwell => (INTEL_FAM6_BROADWELL = 0x3D, Core),
        BroadwellG => (INTEL_FAM6_BROADWELL_G = 0x47, Core),
        BroadwellX => (INTEL_FAM6_BROADWELL_X = 0x4F, Core),
        BroadwellD => (INTEL_FAM6_BROADWELL_D = 0x56, Core),

        SkylakeL => (INTEL_FAM6_SKYLAKE_L = 0x4E, Core),
        Skylake => (INTEL_FAM6_SKYLAKE = 0x5E, Core),
        /// Also Cascade Lake-X and Cooper Lake-X, distinguished by stepping
        SkylakeX => (INTEL_FAM6_SKYLAKE_X = 0x55, Core),

        /// Also Amber Lake-L, Coffee Lake-L and Whiskey Lake-L by stepping
        KabylakeL => (INTEL_FAM6_KABYLAKE_L = 0x8E, Core),
        /// Also Coffee Lake by stepping
        Kabylake => (INTEL_FAM6_KABYLAKE = 0x9E, Core),

        Cometlake => (INTEL_FAM6_COMETLAKE = 0xA5, Core),
        CometlakeL => (INTEL_FAM6_COMETLAKE_L = 0xA6, Core),

        /// Palm Cove
        CannonlakeL => (INTEL_FAM6_CANNONLAKE_L = 0x66, Core),

        // Sunny Cove
        IcelakeX => (INTEL_FAM6_ICELAKE_X = 0x6A, Core),
        IcelakeD => (INTEL_FAM6_ICELAKE_D = 0x6C, Core),
        Icelake => (INTEL_FAM6_ICELAKE = 0x7D, Core),
        IcelakeL => (INTEL_FAM6_ICELAKE_L = 0x7E, Core),
        IcelakeNnpi => (INTEL_FAM6_ICELAKE_NNPI = 0x9D, Core),

        /// Cypress Cove
        Rocketlake => (INTEL_FAM6_ROCKETLAKE = 0xA7, Core),

        // Willow Cove
        TigerlakeL => (INTEL_FAM6_TIGERLAKE_L = 0x8C, Core),
        Tigerlake => (INTEL_FAM6_TIGERLAKE = 0x8D, Core),

        /// Golden Cove
        SapphirerapidsX => (INTEL_FAM6_SAPPHIRERAPIDS_X = 0x8F, Core),

        /// Raptor Cove
        EmeraldrapidsX => (INTEL_FAM6_EMERALDRAPIDS_X = 0xCF, Core),

        // Redwood Cove
        GraniterapidsX => (INTEL_FAM6_GRANITERAPIDS_X = 0xAD, Core),
        GraniterapidsD => (INTEL_FAM6_GRANITERAPIDS_D = 0xAE, Core),

        // Hybrid P/E-Core
        /// Sunny Cove / Tremont
        Lakefield => (INTEL_FAM6_LAKEFIELD = 0x8A, Hybrid),

        // Golden Cove / Gracemont
        Alderlake => (INTEL_FAM6_ALDERLAKE = 0x97, Hybrid),
        AlderlakeL => (INTEL_FAM6_ALDERLAKE_L = 0x9A, Hybrid),

        // Raptor Cove / Enhanced Gracemont
        Raptorlake => (INTEL_FAM6_RAPTORLAKE = 0xB7, Hybrid),
        RaptorlakeP => (INTEL_FAM6_RAPTORLAKE_P = 0xBA, Hybrid),
        RaptorlakeS => (INTEL_FAM6_RAPTORLAKE_S = 0xBF, Hybrid),

        // Redwood Cove / Crestmont
        Meteorlake => (INTEL_FAM6_METEORLAKE = 0xAC, Hybrid),
        MeteorlakeL => (INTEL_FAM6_METEORLAKE_L = 0xAA, Hybrid),

        // Lion Cove / Skymont
        ArrowlakeH => (INTEL_FAM6_ARROWLAKE_H = 0xC5, Hybrid),
        Arrowlake => (INTEL_FAM6_ARROWLAKE = 0xC6, Hybrid),

        LunarlakeM => (INTEL_FAM6_LUNARLAKE_M = 0xBD, Hybrid),

        // Small Core / Atom
        /// Diamondville, Pineview
        AtomBonnell => (INTEL_FAM6_ATOM_BONNELL = 0x1C, Atom),
        /// Silverthorne, Lincroft
        AtomBonnellMid => (INTEL_FAM6_ATOM_BONNELL_MID = 0x26, Atom),

        /// Cedarview
        AtomSaltwell => (INTEL_FAM6_ATOM_SALTWELL = 0x36, Atom),
        /// Penwell
        AtomSaltwellMid => (INTEL_FAM6_ATOM_SALTWELL_MID = 0x27, Atom),
        /// Cloverview
        AtomSaltwellTablet => (INTEL_FAM6_ATOM_SALTWELL_TABLET = 0x35, Atom),

        /// Bay Trail, Valleyview
        AtomSilvermont => (INTEL_FAM6_ATOM_SILVERMONT = 0x37, Atom),
        /// Avaton, Rangely
        AtomSilvermontD => (INTEL_FAM6_ATOM_SILVERMONT_D = 0x4D, Atom),
        /// Merriefield
        AtomSilvermontMid => (INTEL_FAM6_ATOM_SILVERMONT_MID = 0x4A, Atom),
        /// Moorefield
        ///
        /// The kernel has called this `INTEL_FAM6_ATOM_AIRMONT_MID` since
        /// 2018; the value is the same.
        AtomSilvermontSmartphone => (INTEL_FAM6_ATOM_SILVERMONT_SMARTPHONE = 0x5A, Atom),

        /// Cherry Trail, Braswell
        AtomAirmont => (INTEL_FAM6_ATOM_AIRMONT = 0x4C, Atom),
        /// Lightning Mountain
        AtomAirmontNp => (INTEL_FAM6_ATOM_AIRMONT_NP = 0x75, Atom),

        /// Apollo Lake
        AtomGoldmont => (INTEL_FAM6_ATOM_GOLDMONT = 0x5C, Atom),
        /// Denverton
        AtomGoldmontD => (INTEL_FAM6_ATOM_GOLDMONT_D = 0x5F, Atom),
        /// Gemini Lake
        AtomGoldmontPlus => (INTEL_FAM6_ATOM_GOLDMONT_PLUS = 0x7A, Atom),

        /// Jacobsville
        AtomTremontD => (INTEL_FAM6_ATOM_TREMONT_D = 0x86, Atom),
        /// Elkhart Lake
        AtomTremont => (INTEL_FAM6_ATOM_TREMONT = 0x96, Atom),
        /// Jasper Lake
        AtomTremontL => (INTEL_FAM6_ATOM_TREMONT_L = 0x9C, Atom),

        /// Alderlake-N
        AtomGracemont => (INTEL_FAM6_ATOM_GRACEMONT = 0xBE, Atom),

        /// Sierra Forest
        AtomCrestmontX => (INTEL_FAM6_ATOM_CRESTMONT_X = 0xAF, Atom),
        /// Grand Ridge
        AtomCrestmont => (INTEL_FAM6_ATOM_CRESTMONT = 0xB6, Atom),

        // Xeon Phi
        /// Knights Landing
        XeonPhiKnl => (INTEL_FAM6_XEON_PHI_KNL = 0x57, XeonPhi),
        /// Knights Mill
        XeonPhiKnm => (INTEL_FAM6_XEON_PHI_KNM = 0x85, XeonPhi),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_variants() {
        assert_eq!(IntelModel::SkylakeX.model(), INTEL_FAM6_SKYLAKE_X);
        assert_eq!(IntelModel::SkylakeX.name(), "INTEL_FAM6_SKYLAKE_X");
        assert_eq!(IntelModel::AtomGracemont.model(), 0xBE);
        assert_eq!(IntelModel::XeonPhiKnm.name(), "INTEL_FAM6_XEON_PHI_KNM");
    }

    #[test]
    fn test_catalogue_size() {
        assert_eq!(IntelModel::all().len(), 77);
    }
}
