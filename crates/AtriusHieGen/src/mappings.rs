//! Per-resource-type mapping rules.
//!
//! Rules adjust how the resource model is projected into generated code
//! without editing the model document itself. Each rule is keyed by the
//! resource key and the dotted schema path of the field it applies to
//! (`name.family` addresses a nested field). A rule can exclude a field
//! from generation, widen or narrow the input type accepted from callers,
//! supply a default used when the caller omits the field, or rename the
//! caller-facing key.
//!
//! The table is part of the generator itself. Changing a rule and
//! regenerating is the supported way to reshape the SDK surface.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::resource_model::FieldKind;

/// A single adjustment applied to one field of one resource type.
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    /// Drop the field (and any children) from generated output entirely.
    pub exclude: bool,
    /// Accept this kind from callers instead of the kind the model declares.
    pub accepts: Option<FieldKind>,
    /// Value filled in by built resources when the caller omits the field.
    pub default: Option<Value>,
    /// Caller-facing key, when it differs from the schema key.
    pub rename: Option<&'static str>,
}

impl FieldRule {
    pub fn excluded() -> Self {
        FieldRule { exclude: true, ..Default::default() }
    }

    pub fn accepts_kind(kind: FieldKind) -> Self {
        FieldRule { accepts: Some(kind), ..Default::default() }
    }

    pub fn default_value(value: Value) -> Self {
        FieldRule { default: Some(value), ..Default::default() }
    }

    pub fn renamed(key: &'static str) -> Self {
        FieldRule { rename: Some(key), ..Default::default() }
    }
}

/// Rules for one resource type, keyed by dotted schema field path.
pub type ResourceRules = BTreeMap<&'static str, FieldRule>;

/// The full rule table, keyed by resource key.
pub type ResourceMappings = BTreeMap<&'static str, ResourceRules>;

/// Returns the mapping rules applied when generating the exchange SDK.
pub fn resource_mappings() -> ResourceMappings {
    let mut mappings = ResourceMappings::new();

    let mut patient = ResourceRules::new();
    patient.insert("gender", FieldRule::default_value(json!("unknown")));
    patient.insert("active", FieldRule::default_value(json!(true)));
    patient.insert("managingFacilityId", FieldRule::renamed("facilityId"));
    mappings.insert("patient", patient);

    let mut encounter = ResourceRules::new();
    encounter.insert("status", FieldRule::default_value(json!("in-progress")));
    // Admission source is assigned by registration workflows, never by
    // exchange callers.
    encounter.insert("admissionSource", FieldRule::excluded());
    encounter.insert("departmentCode", FieldRule::renamed("department"));
    mappings.insert("encounter", encounter);

    let mut observation = ResourceRules::new();
    // Laboratories release scalar, coded, and structured values under the
    // same key, so the SDK cannot commit to the declared decimal kind.
    observation.insert("value", FieldRule::accepts_kind(FieldKind::Any));
    observation.insert("bodySite", FieldRule::excluded());
    mappings.insert("observation", observation);

    let mut medication_order = ResourceRules::new();
    medication_order.insert("substitutionAllowed", FieldRule::default_value(json!(false)));
    // Dispense quantities arrive as strings from pharmacy systems that
    // preserve trailing zeros.
    medication_order.insert("quantity", FieldRule::accepts_kind(FieldKind::String));
    mappings.insert("medication-order", medication_order);

    let mut allergy_intolerance = ResourceRules::new();
    allergy_intolerance.insert("category", FieldRule::default_value(json!("medication")));
    allergy_intolerance.insert("reporterName", FieldRule::excluded());
    allergy_intolerance.insert("substanceCode", FieldRule::renamed("substance"));
    mappings.insert("allergy-intolerance", allergy_intolerance);

    mappings
}
