//! # HIE SDK Generator CLI
//!
//! Command-line interface for generating the exchange SDK sources from the
//! resource model dictionary. The mapping rules applied on top of the model
//! are compiled into the generator itself.
//!
//! ## Usage
//!
//! ```bash
//! # Generate every resource type in the bundled model
//! atrius-hie-gen
//!
//! # Generate a single resource type
//! atrius-hie-gen encounter
//!
//! # Inspect the model without generating anything
//! atrius-hie-gen --list
//! ```
//!
//! ## Output
//!
//! Generated Rust files are written to `crates/AtriusHieSdk/src/generated/`
//! unless `--out` points elsewhere.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use atrius_hie_generator::effective::effective_model;
use atrius_hie_generator::mappings::resource_mappings;
use atrius_hie_generator::resource_model::load_model;
use atrius_hie_generator::{
    GenerateOptions, default_model_path, default_output_dir, process_model,
};

/// Command-line arguments for the exchange SDK generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resource type to generate (e.g. encounter). Generates every resource
    /// type in the model when omitted.
    resource_type: Option<String>,

    /// Path to the resource model document. Defaults to the model bundled
    /// with the generator.
    #[arg(long)]
    model: Option<PathBuf>,

    /// Directory generated sources are written into. Defaults to the sibling
    /// SDK crate's src/generated directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// List the resource types and variants in the model, without generating.
    #[arg(long, conflicts_with = "resource_type")]
    list: bool,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            println!("Atrius HIE SDK Generator - render SDK sources from the resource model\n");
            println!("Usage examples:");
            println!("  atrius-hie-gen");
            println!("  atrius-hie-gen encounter");
            println!("  atrius-hie-gen --list\n");
            e.exit();
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atrius_hie_generator=info".into()),
        )
        .init();

    let model_path = args.model.unwrap_or_else(default_model_path);

    if args.list {
        if let Err(e) = list_model(&model_path) {
            eprintln!("Error listing resource model: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let options = GenerateOptions {
        model_path,
        output_dir: args.out.unwrap_or_else(default_output_dir),
        resource_type: args.resource_type,
    };

    if let Err(e) = process_model(&options) {
        eprintln!("Error generating exchange SDK sources: {:#}", e);
        std::process::exit(1);
    }
}

/// Prints the resource types and variants the model declares, after the
/// mapping rules have been applied.
fn list_model(model_path: &Path) -> Result<()> {
    let model = load_model(model_path)?;
    let resolved = effective_model(&model, &resource_mappings());

    println!("{} v{}", resolved.model_name, resolved.model_version);
    for resource in &resolved.resources {
        println!();
        println!("{} ({})", resource.key, resource.type_name);
        for variant in &resource.variants {
            println!("  {}", variant.key);
        }
    }
    Ok(())
}
