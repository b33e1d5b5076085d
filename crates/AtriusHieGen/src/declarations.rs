//! Emits the parameter struct declarations for every resource variant.
//!
//! Each variant in the effective model becomes one `...Params` struct, and
//! each nested object field becomes a further struct named after the path
//! down to it. The output is a complete Rust module body; callers prepend
//! the generated-file header and write it to the SDK crate.

use std::collections::HashSet;

use crate::effective::{EffectiveField, EffectiveModel};
use crate::format_helpers::{escape_doc_comment, format_cardinality, pascal_case};
use crate::resource_model::FieldKind;

/// Renders the `variant_params` module body for `model`.
///
/// Returns an empty string when the model declares no variants at all.
pub fn render_declarations(model: &EffectiveModel) -> String {
    let mut body = String::new();
    let mut needs_value = false;
    let mut processed_names = HashSet::new();

    for resource in &model.resources {
        for variant in &resource.variants {
            if !processed_names.insert(variant.params_name.clone()) {
                continue;
            }

            body.push_str(&format!(
                "/// Input parameters for the `{}` variant of the\n/// `{}` resource type.\n",
                variant.key, resource.key
            ));
            if let Some(description) = &variant.description {
                body.push_str("///\n");
                for line in escape_doc_comment(description).lines() {
                    body.push_str(&format!("/// {}\n", line));
                }
            }

            push_struct_header(&mut body, &variant.params_name);
            let base = pascal_case(&variant.key);
            push_fields(&mut body, &variant.fields, &base, &mut needs_value);
            body.push_str("}\n\n");

            for field in &variant.fields {
                push_nested_structs(
                    &mut body,
                    field,
                    &base,
                    &variant.key,
                    &mut processed_names,
                    &mut needs_value,
                );
            }
        }
    }

    if body.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    output.push_str("use serde::{Deserialize, Serialize};\n");
    if needs_value {
        output.push_str("use serde_json::Value;\n");
    }
    output.push('\n');
    output.push_str(&body);

    while output.ends_with("\n\n") {
        output.pop();
    }
    output
}

fn push_struct_header(output: &mut String, name: &str) {
    let derives = ["Debug", "Clone", "PartialEq", "Serialize", "Deserialize", "Default"];
    output.push_str(&format!("#[derive({})]\n", derives.join(", ")));
    output.push_str(&format!("pub struct {} {{\n", name));
}

fn push_fields(
    output: &mut String,
    fields: &[EffectiveField],
    base: &str,
    needs_value: &mut bool,
) {
    for field in fields {
        let optional = !field.required || field.default.is_some();

        if let Some(description) = &field.description {
            for line in escape_doc_comment(description).lines() {
                output.push_str(&format!("    /// {}\n", line));
            }
            output.push_str("    ///\n");
        }
        output.push_str(&format!(
            "    /// {}\n",
            format_cardinality(field.required && field.default.is_none(), field.repeats)
        ));
        if field.kind != field.declared_kind {
            output.push_str(&format!(
                "    /// Accepts `{}` input; the schema declares `{}`.\n",
                field.kind.as_str(),
                field.declared_kind.as_str()
            ));
        }
        if let Some(default) = &field.default {
            output.push_str(&format!("    /// Defaults to `{}` when omitted.\n", default));
        }

        // Consolidate all serde attributes into one line.
        let mut serde_parts = Vec::new();
        if field.caller_key != field.rust_name.trim_start_matches("r#") {
            serde_parts.push(format!("rename = \"{}\"", field.caller_key));
        }
        if optional {
            serde_parts.push("skip_serializing_if = \"Option::is_none\"".to_string());
        }
        if !serde_parts.is_empty() {
            output.push_str(&format!("    #[serde({})]\n", serde_parts.join(", ")));
        }

        let mut type_str = base_type(field, base, needs_value);
        if field.repeats {
            type_str = format!("Vec<{}>", type_str);
        }
        if optional {
            type_str = format!("Option<{}>", type_str);
        }

        // Check if the line would be too long (rustfmt's default max line width is 100)
        // Account for "    pub " (8 chars) + ": " (2 chars) + "," (1 char) = 11 extra chars
        let line_length = 8 + field.rust_name.len() + 2 + type_str.len() + 1;

        if line_length > 100 {
            // For Option<Vec<...>>, rustfmt prefers a specific format
            if type_str.starts_with("Option<Vec<") && type_str.ends_with(">>") {
                let inner_type = &type_str[11..type_str.len() - 2];
                output.push_str(&format!(
                    "    pub {}: Option<\n        Vec<{}>,\n    >,\n",
                    field.rust_name, inner_type
                ));
            } else {
                output.push_str(&format!("    pub {}:\n        {},\n", field.rust_name, type_str));
            }
        } else {
            output.push_str(&format!("    pub {}: {},\n", field.rust_name, type_str));
        }
    }
}

fn base_type(field: &EffectiveField, base: &str, needs_value: &mut bool) -> String {
    if field.kind == FieldKind::Object && !field.children.is_empty() {
        return format!("{}{}Params", base, pascal_case(&field.target_key));
    }
    match field.kind {
        FieldKind::String | FieldKind::Code | FieldKind::Date | FieldKind::DateTime => {
            "String".to_string()
        }
        FieldKind::Boolean => "bool".to_string(),
        FieldKind::Integer => "i64".to_string(),
        FieldKind::Decimal => "f64".to_string(),
        FieldKind::Any | FieldKind::Object => {
            *needs_value = true;
            "Value".to_string()
        }
    }
}

fn push_nested_structs(
    output: &mut String,
    field: &EffectiveField,
    base: &str,
    variant_key: &str,
    processed_names: &mut HashSet<String>,
    needs_value: &mut bool,
) {
    if field.kind != FieldKind::Object || field.children.is_empty() {
        return;
    }

    let child_base = format!("{}{}", base, pascal_case(&field.target_key));
    let struct_name = format!("{}Params", child_base);
    if !processed_names.insert(struct_name.clone()) {
        return;
    }

    output.push_str(&format!(
        "/// The `{}` structure within `{}` parameters.\n",
        field.target_key, variant_key
    ));
    if let Some(description) = &field.description {
        output.push_str("///\n");
        for line in escape_doc_comment(description).lines() {
            output.push_str(&format!("/// {}\n", line));
        }
    }

    push_struct_header(output, &struct_name);
    push_fields(output, &field.children, &child_base, needs_value);
    output.push_str("}\n\n");

    for child in &field.children {
        push_nested_structs(output, child, &child_base, variant_key, processed_names, needs_value);
    }
}
