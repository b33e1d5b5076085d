// @generated by atrius-hie-generator
// DO NOT EDIT MANUALLY
//
// Resource model: atrius-exchange-resource-model v2024.2

use serde_json::{Value, json};

use crate::payload::{Payload, copy_field, copy_field_or, new_resource};

/// Builds an `AllergyIntolerance` resource object from a loosely typed payload.
///
/// Copies the caller keys accepted by the `allergy-intolerance` variants onto the
/// resource's field names, filling configured defaults for omitted keys.
/// Unknown payload keys are ignored.
pub fn build_allergy_intolerance(input: &Payload) -> Value {
    let mut resource = new_resource("AllergyIntolerance");
    copy_field(input, &mut resource, "allergyId", "allergyId");
    copy_field_or(input, &mut resource, "category", "category", json!("medication"));
    copy_field(input, &mut resource, "patientId", "patientId");
    copy_field(input, &mut resource, "reaction", "reaction");
    copy_field(input, &mut resource, "reportedAt", "reportedAt");
    copy_field(input, &mut resource, "severity", "severity");
    copy_field(input, &mut resource, "substance", "substanceCode");
    Value::Object(resource)
}

/// Builds an `Encounter` resource object from a loosely typed payload.
///
/// Copies the caller keys accepted by the `encounter` variants onto the
/// resource's field names, filling configured defaults for omitted keys.
/// Unknown payload keys are ignored.
pub fn build_encounter(input: &Payload) -> Value {
    let mut resource = new_resource("Encounter");
    copy_field(input, &mut resource, "class", "class");
    copy_field(input, &mut resource, "department", "departmentCode");
    copy_field(input, &mut resource, "documentIds", "documentIds");
    copy_field(input, &mut resource, "encounterId", "encounterId");
    copy_field(input, &mut resource, "patientId", "patientId");
    copy_field(input, &mut resource, "period", "period");
    copy_field(input, &mut resource, "practitionerIds", "practitionerIds");
    copy_field(input, &mut resource, "receivedAt", "receivedAt");
    copy_field(input, &mut resource, "sourceFacilityId", "sourceFacilityId");
    copy_field_or(input, &mut resource, "status", "status", json!("in-progress"));
    Value::Object(resource)
}

/// Builds a `MedicationOrder` resource object from a loosely typed payload.
///
/// Copies the caller keys accepted by the `medication-order` variants onto the
/// resource's field names, filling configured defaults for omitted keys.
/// Unknown payload keys are ignored.
pub fn build_medication_order(input: &Payload) -> Value {
    let mut resource = new_resource("MedicationOrder");
    copy_field(input, &mut resource, "daysSupply", "daysSupply");
    copy_field(input, &mut resource, "dosageInstruction", "dosageInstruction");
    copy_field(input, &mut resource, "encounterId", "encounterId");
    copy_field(input, &mut resource, "medicationCode", "medicationCode");
    copy_field(input, &mut resource, "orderId", "orderId");
    copy_field(input, &mut resource, "patientId", "patientId");
    copy_field(input, &mut resource, "quantity", "quantity");
    copy_field(input, &mut resource, "startAt", "startAt");
    copy_field(input, &mut resource, "stopAt", "stopAt");
    copy_field_or(input, &mut resource, "substitutionAllowed", "substitutionAllowed", json!(false));
    Value::Object(resource)
}

/// Builds an `Observation` resource object from a loosely typed payload.
///
/// Copies the caller keys accepted by the `observation` variants onto the
/// resource's field names, filling configured defaults for omitted keys.
/// Unknown payload keys are ignored.
pub fn build_observation(input: &Payload) -> Value {
    let mut resource = new_resource("Observation");
    copy_field(input, &mut resource, "code", "code");
    copy_field(input, &mut resource, "effectiveAt", "effectiveAt");
    copy_field(input, &mut resource, "encounterId", "encounterId");
    copy_field(input, &mut resource, "interpretation", "interpretation");
    copy_field(input, &mut resource, "issuedAt", "issuedAt");
    copy_field(input, &mut resource, "observationId", "observationId");
    copy_field(input, &mut resource, "patientId", "patientId");
    copy_field(input, &mut resource, "performerFacilityId", "performerFacilityId");
    copy_field(input, &mut resource, "referenceRange", "referenceRange");
    copy_field(input, &mut resource, "specimenId", "specimenId");
    copy_field(input, &mut resource, "unit", "unit");
    copy_field(input, &mut resource, "value", "value");
    Value::Object(resource)
}

/// Builds a `Patient` resource object from a loosely typed payload.
///
/// Copies the caller keys accepted by the `patient` variants onto the
/// resource's field names, filling configured defaults for omitted keys.
/// Unknown payload keys are ignored.
pub fn build_patient(input: &Payload) -> Value {
    let mut resource = new_resource("Patient");
    copy_field_or(input, &mut resource, "active", "active", json!(true));
    copy_field(input, &mut resource, "address", "address");
    copy_field(input, &mut resource, "birthDate", "birthDate");
    copy_field(input, &mut resource, "facilityId", "managingFacilityId");
    copy_field_or(input, &mut resource, "gender", "gender", json!("unknown"));
    copy_field(input, &mut resource, "localId", "localId");
    copy_field(input, &mut resource, "name", "name");
    copy_field(input, &mut resource, "patientId", "patientId");
    Value::Object(resource)
}
