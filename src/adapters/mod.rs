// Adapters layer: concrete implementations of domain ports for external systems.

#[cfg(feature = "lambda")]
pub mod sns;
