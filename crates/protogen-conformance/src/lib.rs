//! Enums generated from `fixtures/enums.json` at build time.
//!
//! The crate only exists so the generated code is compiled and exercised
//! against `protogen-runtime`; see `tests/conformance.rs`.

include!(concat!(env!("OUT_DIR"), "/enums.rs"));
