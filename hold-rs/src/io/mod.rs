mod export;
mod import;

/// External (serializable) representations of manifests and simulations.
pub mod ext_repr;

/// Exports a simulation out of the library.
pub use export::export_comparison;
pub use export::export_manifest;
pub use export::export_sequence;
pub use export::export_session;

/// Imports a manifest into the library.
pub use import::import;
