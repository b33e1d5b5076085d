//! # Atrius HIE SDK Generator
//!
//! Build-time code generator for the Atrius health information exchange SDK.
//! It reads the exchange resource model dictionary, applies the per-resource
//! mapping rules compiled into [`mappings`], and renders two source files
//! into the SDK crate: parameter struct declarations for every resource
//! variant, and one builder function per resource type.
//!
//! Generated sources are committed, so generation is deterministic:
//! running the generator twice against the same model produces
//! byte-identical output.

pub mod builders;
pub mod declarations;
pub mod effective;
pub mod format_helpers;
pub mod mappings;
pub mod output;
pub mod resource_model;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

/// Controls one generation run.
#[derive(Debug)]
pub struct GenerateOptions {
    /// Resource model document to read.
    pub model_path: PathBuf,
    /// Directory the generated sources are written into.
    pub output_dir: PathBuf,
    /// When set, only this resource type is generated.
    pub resource_type: Option<String>,
}

/// Counts reported after a successful generation run.
#[derive(Debug, PartialEq, Eq)]
pub struct GenerateSummary {
    pub resource_types: usize,
    pub variants: usize,
}

/// The resource model bundled with the generator.
pub fn default_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/resource-model.json")
}

/// The generated module of the sibling SDK crate.
pub fn default_output_dir() -> PathBuf {
    match Path::new(env!("CARGO_MANIFEST_DIR")).parent() {
        Some(crates_dir) => crates_dir.join("AtriusHieSdk/src/generated"),
        None => PathBuf::from("crates/AtriusHieSdk/src/generated"),
    }
}

/// Loads the model, resolves it through the mapping rules, and writes the
/// generated SDK sources.
pub fn process_model(options: &GenerateOptions) -> Result<GenerateSummary> {
    let model = resource_model::load_model(&options.model_path)?;
    let rules = mappings::resource_mappings();
    let mut resolved = effective::effective_model(&model, &rules);

    if let Some(resource_type) = &options.resource_type {
        resolved.resources.retain(|r| &r.key == resource_type);
        if resolved.resources.is_empty() {
            bail!(
                "resource type '{}' not found in model {}",
                resource_type,
                options.model_path.display()
            );
        }
    }

    fs::create_dir_all(&options.output_dir)
        .with_context(|| format!("failed creating {}", options.output_dir.display()))?;

    let header = output::artifact_header(&resolved.model_name, &resolved.model_version);

    let declarations = declarations::render_declarations(&resolved);
    output::write_rust_artifact(
        &options.output_dir.join("variant_params.rs"),
        &header,
        &declarations,
    )?;

    let builders = builders::render_builders(&resolved);
    output::write_rust_artifact(&options.output_dir.join("builders.rs"), &header, &builders)?;

    output::write_mod_index(&options.output_dir, &header, &["builders", "variant_params"])?;

    let variants = resolved.resources.iter().map(|r| r.variants.len()).sum();
    info!(
        "generated {} resource builders and {} variant parameter structs into {}",
        resolved.resources.len(),
        variants,
        options.output_dir.display()
    );

    Ok(GenerateSummary { resource_types: resolved.resources.len(), variants })
}
