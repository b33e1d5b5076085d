//! End-to-end tests for the generation pipeline, from a model document on
//! disk to the written SDK sources.

use std::fs;
use std::path::PathBuf;

use atrius_hie_generator::{
    GenerateOptions, GenerateSummary, default_model_path, default_output_dir, process_model,
};

// A small model that still exercises the static mapping rules: the
// encounter rules exclude admissionSource, default status, and rename
// departmentCode, while device has no rules at all.
const MODEL_JSON: &str = r#"{
    "name": "test-exchange-model",
    "version": "0.9",
    "resources": {
        "device": {
            "typeName": "Device",
            "description": "A device registered with the exchange.",
            "variants": {
                "registered-device": {
                    "description": "A device registered by a facility.",
                    "fields": {
                        "deviceId": {
                            "type": "string",
                            "required": true,
                            "description": "Exchange-wide identifier for the device."
                        },
                        "udiCarrier": {
                            "type": "string",
                            "description": "UDI carrier string printed on the device label."
                        }
                    }
                }
            }
        },
        "encounter": {
            "typeName": "Encounter",
            "description": "An episode of care.",
            "variants": {
                "target-facility-encounter": {
                    "description": "An encounter at the target facility.",
                    "fields": {
                        "encounterId": {
                            "type": "string",
                            "required": true,
                            "description": "Exchange-wide identifier for the encounter."
                        },
                        "status": {
                            "type": "code",
                            "description": "Lifecycle status of the encounter."
                        },
                        "admissionSource": {
                            "type": "code",
                            "description": "Administrative source of the admission."
                        },
                        "departmentCode": {
                            "type": "code",
                            "description": "Department where the encounter took place."
                        }
                    }
                }
            }
        }
    }
}"#;

fn generate(
    resource_type: Option<&str>,
) -> (tempfile::TempDir, PathBuf, anyhow::Result<GenerateSummary>) {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("model.json");
    fs::write(&model_path, MODEL_JSON).unwrap();
    let output_dir = dir.path().join("generated");

    let options = GenerateOptions {
        model_path,
        output_dir: output_dir.clone(),
        resource_type: resource_type.map(str::to_string),
    };
    let result = process_model(&options);
    (dir, output_dir, result)
}

#[test]
fn test_process_model_writes_all_artifacts() {
    let (_dir, output_dir, result) = generate(None);
    assert_eq!(result.unwrap(), GenerateSummary { resource_types: 2, variants: 2 });

    for name in ["variant_params.rs", "builders.rs", "mod.rs"] {
        let written = fs::read_to_string(output_dir.join(name)).unwrap();
        assert!(
            written.starts_with("// @generated by atrius-hie-generator\n// DO NOT EDIT MANUALLY\n"),
            "{} is missing the generated header",
            name
        );
        assert!(written.contains("// Resource model: test-exchange-model v0.9"));
    }
}

#[test]
fn test_generated_sources_parse() {
    let (_dir, output_dir, result) = generate(None);
    result.unwrap();

    for name in ["variant_params.rs", "builders.rs", "mod.rs"] {
        let written = fs::read_to_string(output_dir.join(name)).unwrap();
        syn::parse_file(&written).unwrap();
    }
}

#[test]
fn test_static_rules_shape_declarations() {
    let (_dir, output_dir, result) = generate(None);
    result.unwrap();

    let params = fs::read_to_string(output_dir.join("variant_params.rs")).unwrap();
    assert!(params.contains("pub struct TargetFacilityEncounterParams {"));
    assert!(params.contains("pub struct RegisteredDeviceParams {"));
    // departmentCode is renamed to department for callers and
    // admissionSource is excluded outright.
    assert!(params.contains("pub department: Option<String>,"));
    assert!(!params.contains("department_code"));
    assert!(!params.contains("admission_source"));
    assert!(params.contains("/// Defaults to `\"in-progress\"` when omitted."));
}

#[test]
fn test_static_rules_shape_builders() {
    let (_dir, output_dir, result) = generate(None);
    result.unwrap();

    let builders = fs::read_to_string(output_dir.join("builders.rs")).unwrap();
    assert!(builders.contains("pub fn build_encounter(input: &Payload) -> Value {"));
    assert!(builders.contains("pub fn build_device(input: &Payload) -> Value {"));
    assert!(builders.contains(
        "copy_field_or(input, &mut resource, \"status\", \"status\", json!(\"in-progress\"));"
    ));
    assert!(builders.contains(
        "copy_field(input, &mut resource, \"department\", \"departmentCode\");"
    ));
    assert!(!builders.contains("admissionSource"));
}

#[test]
fn test_mod_index_declares_generated_modules() {
    let (_dir, output_dir, result) = generate(None);
    result.unwrap();

    let index = fs::read_to_string(output_dir.join("mod.rs")).unwrap();
    assert!(index.ends_with(
        "pub mod builders;\npub mod variant_params;\n\npub use builders::*;\npub use variant_params::*;\n"
    ));
}

#[test]
fn test_regeneration_is_byte_identical() {
    let (_dir_a, output_a, result_a) = generate(None);
    let (_dir_b, output_b, result_b) = generate(None);
    result_a.unwrap();
    result_b.unwrap();

    for name in ["variant_params.rs", "builders.rs", "mod.rs"] {
        let a = fs::read(output_a.join(name)).unwrap();
        let b = fs::read(output_b.join(name)).unwrap();
        assert_eq!(a, b, "{} differs between runs", name);
    }
}

// The committed modules in the SDK crate are the generator's output for the
// bundled model and mapping table; changing those inputs or an emitter
// requires regenerating them.
#[test]
fn test_committed_sdk_sources_match_regeneration() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("generated");

    let options = GenerateOptions {
        model_path: default_model_path(),
        output_dir: output_dir.clone(),
        resource_type: None,
    };
    process_model(&options).unwrap();

    let committed_dir = default_output_dir();
    for name in ["variant_params.rs", "builders.rs", "mod.rs"] {
        let regenerated = fs::read_to_string(output_dir.join(name)).unwrap();
        let committed = fs::read_to_string(committed_dir.join(name)).unwrap();
        assert_eq!(
            regenerated, committed,
            "{} drifted from the committed SDK sources; rerun atrius-hie-gen",
            name
        );
    }
}

#[test]
fn test_filter_to_single_resource_type() {
    let (_dir, output_dir, result) = generate(Some("device"));
    assert_eq!(result.unwrap(), GenerateSummary { resource_types: 1, variants: 1 });

    let params = fs::read_to_string(output_dir.join("variant_params.rs")).unwrap();
    assert!(params.contains("pub struct RegisteredDeviceParams {"));
    assert!(!params.contains("TargetFacilityEncounterParams"));
}

#[test]
fn test_unknown_resource_type_fails() {
    let (_dir, _output_dir, result) = generate(Some("imaging-study"));
    let err = result.unwrap_err();
    assert!(err.to_string().contains("imaging-study"));
}
