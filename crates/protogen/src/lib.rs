//! Enum definition code generation for protocol schemas.
//!
//! `protogen` turns a language-neutral enum schema (a name, an ordered list of
//! named `i32` values, and an open/closed flag) into a target-language enum type
//! with the bindings its runtime expects.
//!
//! # Architecture
//!
//! ```text
//! Input              Resolution                 Output Backends
//! ──────────────     ──────────────────────     ─────────────────
//! JSON          ─┐
//! EnumSchema    ─┼─> EnumDescriptor ──> ResolvedEnum ──> Rust (protogen-runtime)
//! custom impl   ─┘   (descriptor.rs)    (resolve.rs)     (output/rust.rs)
//! ```
//!
//! Value names are normalized by [`naming`] and grouped into canonical values
//! and aliases by [`resolve`]. Backends render the result through [`Template`]s
//! into a caller-owned [`Printer`].
//!
//! # Example
//!
//! ```
//! use protogen::{Backend, EnumSchema, RUST_BACKEND};
//!
//! let schema = EnumSchema::open("Color")
//!     .with_value("COLOR_UNSPECIFIED", 0)
//!     .with_value("COLOR_RED", 1)
//!     .with_value("COLOR_CRIMSON", 1);
//!
//! let code = RUST_BACKEND.generate(&[schema]).unwrap();
//! assert!(code.contains("pub const Red: Color = Color(1);"));
//! assert!(code.contains("pub const Crimson: Color = Color(1);"));
//! ```
//!
//! # Using the Backend Registry
//!
//! ```ignore
//! use protogen::{get_backend, backend_names};
//!
//! // List all available backends
//! for name in backend_names() {
//!     println!("Backend: {}", name);
//! }
//!
//! // Get and use a specific backend
//! if let Some(backend) = get_backend("rust") {
//!     let output = backend.generate(&schemas)?;
//!     println!("{}", output);
//! }
//! ```
//!
//! # Feature Flags
//!
//! Backend flags (use `backend-*` prefix):
//! - `backend-rust` - Rust newtype enums implementing the `protogen-runtime` protocol
//!
//! Language umbrella flags (convenience):
//! - `rust` - backend-rust

pub mod config;
pub mod descriptor;
pub mod error;
pub mod input;
pub mod naming;
pub mod output;
pub mod printer;
pub mod registry;
pub mod resolve;
pub mod template;
pub mod traits;

pub use config::{GeneratorConfig, RustOptions};
pub use descriptor::{DeclaredValue, EnumDescriptor, EnumSchema, EnumValueRef};
pub use error::{ConfigError, GenerateError};
pub use input::{ParseError, parse_enum_schema, parse_enum_schemas};
pub use printer::Printer;
pub use resolve::{EnumValue, ResolvedEnum};
pub use template::{Template, TemplateError, Vars};

// Re-export traits
pub use traits::Backend;

// Re-export registry functions
pub use registry::{backend_names, backends, backends_for_language, get_backend, register_backend};

#[cfg(feature = "backend-rust")]
pub use output::generate_rust_enum;

#[cfg(feature = "backend-rust")]
pub use output::rust::{RUST_BACKEND, RustBackend};
