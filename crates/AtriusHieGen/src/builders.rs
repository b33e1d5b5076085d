//! Emits one builder function per resource type.
//!
//! A builder takes a loosely typed payload and produces the resource object
//! the exchange expects: the `resourceType` tag plus every caller key copied
//! onto its schema field name, with configured defaults filled in for keys
//! the caller omitted. Builders cover the union of their resource's variant
//! fields, so one function serves every variant of a type.

use crate::effective::EffectiveModel;
use crate::format_helpers::snake_ident;

/// Renders the `builders` module body for `model`.
///
/// Returns an empty string when the model declares no resources.
pub fn render_builders(model: &EffectiveModel) -> String {
    let mut body = String::new();
    let mut uses_copy_field = false;
    let mut uses_copy_field_or = false;

    for resource in &model.resources {
        body.push_str(&format!(
            "/// Builds {} `{}` resource object from a loosely typed payload.\n",
            article(&resource.type_name),
            resource.type_name
        ));
        body.push_str(&format!(
            "///\n/// Copies the caller keys accepted by the `{}` variants onto the\n",
            resource.key
        ));
        body.push_str(
            "/// resource's field names, filling configured defaults for omitted keys.\n",
        );
        body.push_str("/// Unknown payload keys are ignored.\n");

        body.push_str(&format!(
            "pub fn build_{}(input: &Payload) -> Value {{\n",
            snake_ident(&resource.key)
        ));
        body.push_str(&format!(
            "    let mut resource = new_resource(\"{}\");\n",
            resource.type_name
        ));

        for field in &resource.builder_fields {
            let line = match &field.default {
                None => {
                    uses_copy_field = true;
                    format!(
                        "    copy_field(input, &mut resource, \"{}\", \"{}\");\n",
                        field.caller_key, field.target_key
                    )
                }
                Some(default) => {
                    uses_copy_field_or = true;
                    format!(
                        "    copy_field_or(input, &mut resource, \"{}\", \"{}\", json!({}));\n",
                        field.caller_key, field.target_key, default
                    )
                }
            };

            // Break long calls the way rustfmt would (max line width 100).
            if line.len() - 1 > 100 {
                match &field.default {
                    None => body.push_str(&format!(
                        "    copy_field(\n        input,\n        &mut resource,\n        \"{}\",\n        \"{}\",\n    );\n",
                        field.caller_key, field.target_key
                    )),
                    Some(default) => body.push_str(&format!(
                        "    copy_field_or(\n        input,\n        &mut resource,\n        \"{}\",\n        \"{}\",\n        json!({}),\n    );\n",
                        field.caller_key, field.target_key, default
                    )),
                }
            } else {
                body.push_str(&line);
            }
        }

        body.push_str("    Value::Object(resource)\n}\n\n");
    }

    if body.is_empty() {
        return String::new();
    }

    let mut payload_items = vec!["Payload"];
    if uses_copy_field {
        payload_items.push("copy_field");
    }
    if uses_copy_field_or {
        payload_items.push("copy_field_or");
    }
    payload_items.push("new_resource");

    let mut output = String::new();
    if uses_copy_field_or {
        output.push_str("use serde_json::{Value, json};\n");
    } else {
        output.push_str("use serde_json::Value;\n");
    }
    output.push('\n');
    output.push_str(&format!("use crate::payload::{{{}}};\n", payload_items.join(", ")));
    output.push('\n');
    output.push_str(&body);

    while output.ends_with("\n\n") {
        output.pop();
    }
    output
}

fn article(type_name: &str) -> &'static str {
    match type_name.chars().next() {
        Some('A' | 'E' | 'I' | 'O' | 'U' | 'a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::effective::effective_model;
    use crate::mappings::{FieldRule, ResourceMappings, ResourceRules};
    use crate::resource_model::ResourceModel;

    fn rendered() -> String {
        let model = ResourceModel::from_json(
            r#"{
                "name": "test-model",
                "version": "1.0",
                "resources": {
                    "medication-order": {
                        "typeName": "MedicationOrder",
                        "variants": {
                            "inpatient-order": {
                                "fields": {
                                    "orderId": { "type": "string", "required": true },
                                    "status": { "type": "code" },
                                    "wardCode": { "type": "code" }
                                }
                            },
                            "outpatient-order": {
                                "fields": {
                                    "orderId": { "type": "string", "required": true },
                                    "status": { "type": "code" },
                                    "quantity": { "type": "decimal" }
                                }
                            }
                        }
                    },
                    "device": {
                        "typeName": "Device",
                        "variants": {}
                    }
                }
            }"#,
        )
        .unwrap();

        let mut rules = ResourceRules::new();
        rules.insert("status", FieldRule::default_value(json!("draft")));
        rules.insert("wardCode", FieldRule::renamed("ward"));
        let mut mappings = ResourceMappings::new();
        mappings.insert("medication-order", rules);

        render_builders(&effective_model(&model, &mappings))
    }

    #[test]
    fn test_output_parses_as_rust() {
        syn::parse_file(&rendered()).unwrap();
    }

    #[test]
    fn test_builder_name_is_snake_case() {
        let output = rendered();
        assert!(output.contains("pub fn build_medication_order(input: &Payload) -> Value {"));
        assert!(output.contains("let mut resource = new_resource(\"MedicationOrder\");"));
    }

    #[test]
    fn test_default_uses_copy_field_or() {
        let output = rendered();
        assert!(output.contains(
            "copy_field_or(input, &mut resource, \"status\", \"status\", json!(\"draft\"));"
        ));
    }

    #[test]
    fn test_rename_copies_onto_schema_key() {
        let output = rendered();
        assert!(output.contains("copy_field(input, &mut resource, \"ward\", \"wardCode\");"));
    }

    #[test]
    fn test_union_is_sorted_and_dedupes_across_variants() {
        let output = rendered();
        let order_id = output.find("\"orderId\"").unwrap();
        let quantity = output.find("\"quantity\"").unwrap();
        let status = output.find("\"status\"").unwrap();
        assert!(order_id < quantity && quantity < status);
        assert_eq!(output.matches("\"orderId\"").count(), 2);
    }

    #[test]
    fn test_resource_without_variants_still_builds_tag() {
        let output = rendered();
        assert!(output.contains("pub fn build_device(input: &Payload) -> Value {"));
        assert!(output.contains("new_resource(\"Device\")"));
    }

    #[test]
    fn test_imports_cover_used_helpers() {
        let output = rendered();
        assert!(output.starts_with("use serde_json::{Value, json};\n"));
        assert!(output
            .contains("use crate::payload::{Payload, copy_field, copy_field_or, new_resource};"));
    }

    #[test]
    fn test_empty_model_renders_nothing() {
        let model = ResourceModel::from_json(
            r#"{ "name": "test-model", "version": "1.0", "resources": {} }"#,
        )
        .unwrap();
        let output = render_builders(&effective_model(&model, &ResourceMappings::new()));
        assert!(output.is_empty());
    }
}
