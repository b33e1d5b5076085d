//! Projection of the resource model through the mapping rules.
//!
//! The effective model is what the emitters actually render: the resource
//! model with excluded fields removed, renames applied to caller-facing
//! keys, accepted-kind overrides folded in, and defaults attached. It also
//! carries the per-resource builder field union, since a builder covers
//! every variant of its resource type.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;
use tracing::warn;

use crate::format_helpers::{make_rust_safe, pascal_case};
use crate::mappings::{ResourceMappings, ResourceRules};
use crate::resource_model::{FieldDefinition, FieldKind, ResourceModel};

/// The fully resolved model the emitters consume.
#[derive(Debug)]
pub struct EffectiveModel {
    pub model_name: String,
    pub model_version: String,
    pub resources: Vec<EffectiveResource>,
}

/// One resource type, with its variants and builder field union resolved.
#[derive(Debug)]
pub struct EffectiveResource {
    pub key: String,
    pub type_name: String,
    pub description: Option<String>,
    pub variants: Vec<EffectiveVariant>,
    /// Union of every variant's top-level fields, sorted by caller key.
    pub builder_fields: Vec<BuilderField>,
}

/// One variant of a resource type.
#[derive(Debug)]
pub struct EffectiveVariant {
    pub key: String,
    /// Name of the generated parameter struct for this variant.
    pub params_name: String,
    pub description: Option<String>,
    pub fields: Vec<EffectiveField>,
}

/// One field after rule resolution.
#[derive(Debug)]
pub struct EffectiveField {
    /// Key the caller supplies, after any rename.
    pub caller_key: String,
    /// Key the field carries in the resource model and in built objects.
    pub target_key: String,
    /// Rust identifier derived from the caller key.
    pub rust_name: String,
    /// Kind accepted from callers, after any override.
    pub kind: FieldKind,
    /// Kind the model declares, kept for documentation.
    pub declared_kind: FieldKind,
    pub required: bool,
    pub repeats: bool,
    pub default: Option<Value>,
    pub description: Option<String>,
    pub children: Vec<EffectiveField>,
}

/// One entry in a resource's builder field union.
#[derive(Debug)]
pub struct BuilderField {
    pub caller_key: String,
    pub target_key: String,
    pub default: Option<Value>,
}

/// Resolves `model` through `mappings` into the model the emitters render.
pub fn effective_model(model: &ResourceModel, mappings: &ResourceMappings) -> EffectiveModel {
    for mapped_key in mappings.keys() {
        if !model.resources.contains_key(*mapped_key) {
            warn!(
                "mapping rules reference resource type '{}' which is not in model '{}'",
                mapped_key, model.name
            );
        }
    }

    let empty_rules = ResourceRules::new();
    let mut resources = Vec::new();

    for (key, definition) in &model.resources {
        let rules = mappings.get(key.as_str()).unwrap_or(&empty_rules);
        let mut seen_paths = BTreeSet::new();
        let mut variants = Vec::new();
        let mut builder_union: BTreeMap<String, BuilderField> = BTreeMap::new();

        for (variant_key, variant) in &definition.variants {
            let fields = effective_fields(&variant.fields, rules, "", &mut seen_paths);

            for field in &fields {
                builder_union
                    .entry(field.caller_key.clone())
                    .or_insert_with(|| BuilderField {
                        caller_key: field.caller_key.clone(),
                        target_key: field.target_key.clone(),
                        default: field.default.clone(),
                    });
            }

            variants.push(EffectiveVariant {
                key: variant_key.clone(),
                params_name: format!("{}Params", pascal_case(variant_key)),
                description: variant.description.clone(),
                fields,
            });
        }

        for rule_path in rules.keys() {
            if !seen_paths.contains(*rule_path) {
                warn!(
                    "mapping rule for '{}.{}' matched no field in any variant",
                    key, rule_path
                );
            }
        }

        resources.push(EffectiveResource {
            key: key.clone(),
            type_name: definition.type_name.clone(),
            description: definition.description.clone(),
            variants,
            builder_fields: builder_union.into_values().collect(),
        });
    }

    EffectiveModel {
        model_name: model.name.clone(),
        model_version: model.version.clone(),
        resources,
    }
}

fn effective_fields(
    fields: &BTreeMap<String, FieldDefinition>,
    rules: &ResourceRules,
    prefix: &str,
    seen_paths: &mut BTreeSet<String>,
) -> Vec<EffectiveField> {
    let mut resolved = Vec::new();

    for (name, definition) in fields {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };

        let rule = rules.get(path.as_str());
        if rule.is_some() {
            seen_paths.insert(path.clone());
        }

        if rule.is_some_and(|r| r.exclude) {
            continue;
        }

        let caller_key = rule
            .and_then(|r| r.rename)
            .map(str::to_string)
            .unwrap_or_else(|| name.clone());
        let kind = rule.and_then(|r| r.accepts).unwrap_or(definition.kind);
        let default = rule.and_then(|r| r.default.clone());

        let children = if definition.kind == FieldKind::Object {
            effective_fields(&definition.fields, rules, &path, seen_paths)
        } else {
            Vec::new()
        };

        resolved.push(EffectiveField {
            rust_name: make_rust_safe(&caller_key),
            caller_key,
            target_key: name.clone(),
            kind,
            declared_kind: definition.kind,
            required: definition.required,
            repeats: definition.repeats,
            default,
            description: definition.description.clone(),
            children,
        });
    }

    resolved
}
