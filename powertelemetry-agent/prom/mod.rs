pub mod identity;

pub use identity::IdentityExporter;
