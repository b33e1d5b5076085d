//! Deserialization of the exchange resource model dictionary.
//!
//! The resource model is a JSON document describing every resource type the
//! exchange understands, the named variants each type is delivered as, and
//! the fields each variant carries. The generator reads it once at startup
//! and never mutates it; all per-project shaping happens later through the
//! mapping rules.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Root of the resource model document.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceModel {
    /// Human-readable name of the model, reproduced in generated headers.
    pub name: String,
    /// Model revision, reproduced in generated headers.
    pub version: String,
    /// Resource types keyed by their kebab-case resource key.
    pub resources: BTreeMap<String, ResourceDefinition>,
}

/// A single resource type in the model.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceDefinition {
    /// PascalCase name written into the `resourceType` tag of built objects.
    #[serde(rename = "typeName")]
    pub type_name: String,
    pub description: Option<String>,
    /// Delivery variants keyed by their kebab-case variant key.
    #[serde(default)]
    pub variants: BTreeMap<String, VariantDefinition>,
}

/// One delivery variant of a resource type.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantDefinition {
    pub description: Option<String>,
    /// Fields keyed by their camelCase schema key.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldDefinition>,
}

/// A field within a variant, possibly nested.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDefinition {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub repeats: bool,
    pub description: Option<String>,
    /// Child fields, populated only for `object` fields.
    #[serde(default)]
    pub fields: BTreeMap<String, FieldDefinition>,
}

/// The primitive and structural kinds a field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Code,
    Boolean,
    Integer,
    Decimal,
    Date,
    DateTime,
    Object,
    Any,
}

impl FieldKind {
    /// The kind's name as it appears in the model document.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Code => "code",
            FieldKind::Boolean => "boolean",
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "decimal",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime",
            FieldKind::Object => "object",
            FieldKind::Any => "any",
        }
    }
}

impl ResourceModel {
    /// Parses a resource model from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed parsing resource model JSON")
    }
}

/// Loads and parses the resource model document at `path`.
pub fn load_model(path: &Path) -> Result<ResourceModel> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading resource model {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing resource model {}", path.display()))
}
