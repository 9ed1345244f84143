//! Output backends for code generation.
//!
//! Each backend takes an [`EnumDescriptor`](crate::EnumDescriptor) and
//! produces code. All backends implement the [`Backend`](crate::traits::Backend)
//! trait for uniform access via the registry.

// Rust
#[cfg(feature = "backend-rust")]
pub mod rust;

#[cfg(feature = "backend-rust")]
pub use rust::{RUST_BACKEND, RustBackend, generate_rust_enum};
