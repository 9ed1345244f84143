//! Build script for protogen-conformance - generates the fixture enums.

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let fixtures = Path::new(&manifest_dir).join("fixtures").join("enums.json");
    println!("cargo:rerun-if-changed={}", fixtures.display());

    let content = fs::read_to_string(&fixtures)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", fixtures.display()));
    let document: serde_json::Value =
        serde_json::from_str(&content).expect("fixtures/enums.json is not valid JSON");
    let schemas = protogen::parse_enum_schemas(&document).expect("invalid enum fixtures");

    let backend = protogen::get_backend("rust").expect("rust backend not registered");
    let code = backend
        .generate(&schemas)
        .unwrap_or_else(|e| panic!("generation failed: {e}"));

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    fs::write(Path::new(&out_dir).join("enums.rs"), code).expect("failed to write enums.rs");
}
