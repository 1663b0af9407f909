//! Errors raised by the catalogue crate
//!
//! An unrecognised model number is not an error: [`crate::classify`]
//! returns `None` for it. These variants only cover parsing user input.

pub type Result<T> = std::result::Result<T, CatalogueError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    #[error("Unknown Intel Family-6 model name: {0}")]
    UnknownModelName(String),

    #[error("Unknown lineage: {0} (expected core, hybrid, atom or xeon-phi)")]
    UnknownLineage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_error_display() {
        let err = CatalogueError::UnknownModelName("INTEL_FAM6_FOO".to_string());
        assert!(err.to_string().contains("INTEL_FAM6_FOO"));
    }

    #[test]
    fn test_parsers_return_crate_result() {
        use crate::{IntelModel, Lineage};

        let lineage: Result<Lineage> = "hybrid".parse();
        assert_eq!(lineage, Ok(Lineage::Hybrid));

        let model: Result<IntelModel> = "cannonlake_l".parse();
        assert_eq!(model, Ok(IntelModel::CannonlakeL));

        let missing: Result<IntelModel> = "pentium_m".parse();
        assert_eq!(
            missing,
            Err(CatalogueError::UnknownModelName("pentium_m".to_string()))
        );
    }
}
