//! Writing generated sources into the SDK crate.
//!
//! Every artifact gets a `@generated` header naming the resource model it
//! came from, and every Rust artifact is parse-checked with `syn` before it
//! touches disk, so a rendering bug can never leave the SDK crate in a
//! broken state. Headers carry no timestamps; regenerating from the same
//! model must produce byte-identical files.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Returns the header prepended to every generated file.
pub fn artifact_header(model_name: &str, model_version: &str) -> String {
    format!(
        "// @generated by atrius-hie-generator\n// DO NOT EDIT MANUALLY\n//\n// Resource model: {} v{}\n\n",
        model_name, model_version
    )
}

/// Parse-checks `source` and writes it under `header` to `path`.
pub fn write_rust_artifact(path: &Path, header: &str, source: &str) -> Result<()> {
    syn::parse_file(source)
        .with_context(|| format!("generated source for {} does not parse", path.display()))?;

    let mut content = format!("{}{}", header, source);
    while content.ends_with("\n\n") {
        content.pop();
    }

    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))
}

/// Writes the `mod.rs` index declaring and re-exporting `modules`.
pub fn write_mod_index(dir: &Path, header: &str, modules: &[&str]) -> Result<()> {
    let mut names: Vec<&str> = modules.to_vec();
    names.sort_unstable();
    names.dedup();

    let mut content = String::from(header);
    for name in &names {
        content.push_str(&format!("pub mod {};\n", name));
    }
    content.push('\n');
    for name in &names {
        content.push_str(&format!("pub use {}::*;\n", name));
    }

    let path = dir.join("mod.rs");
    fs::write(&path, content).with_context(|| format!("failed writing {}", path.display()))
}
