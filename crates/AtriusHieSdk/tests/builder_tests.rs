//! Behavior tests for the generated resource builders.

use atrius_hie_sdk::{
    EntryFromOutsideTargetFacilityEncounterParams,
    EntryFromOutsideTargetFacilityEncounterPeriodParams, build_allergy_intolerance,
    build_encounter, build_medication_order, build_observation, build_patient, to_payload,
};
use serde_json::json;

#[test]
fn test_build_patient_fills_defaults() {
    let input = to_payload(&json!({ "patientId": "pat-1" })).unwrap();
    let resource = build_patient(&input);

    assert_eq!(resource["resourceType"], "Patient");
    assert_eq!(resource["patientId"], "pat-1");
    assert_eq!(resource["gender"], "unknown");
    assert_eq!(resource["active"], true);
}

#[test]
fn test_build_patient_caller_value_beats_default() {
    let input = to_payload(&json!({
        "patientId": "pat-1",
        "gender": "female",
        "active": false
    }))
    .unwrap();
    let resource = build_patient(&input);

    assert_eq!(resource["gender"], "female");
    assert_eq!(resource["active"], false);
}

#[test]
fn test_build_patient_renames_facility_id() {
    let input = to_payload(&json!({ "patientId": "pat-1", "facilityId": "fac-9" })).unwrap();
    let resource = build_patient(&input);

    assert_eq!(resource["managingFacilityId"], "fac-9");
    assert!(resource.get("facilityId").is_none());
}

#[test]
fn test_build_patient_ignores_unknown_keys() {
    let input = to_payload(&json!({ "patientId": "pat-1", "favoriteColor": "teal" })).unwrap();
    let resource = build_patient(&input);

    assert!(resource.get("favoriteColor").is_none());
}

#[test]
fn test_build_patient_treats_null_as_absent() {
    let input = to_payload(&json!({
        "patientId": "pat-1",
        "gender": null,
        "localId": null
    }))
    .unwrap();
    let resource = build_patient(&input);

    // Null falls back to the default where one is configured and is dropped
    // where none is.
    assert_eq!(resource["gender"], "unknown");
    assert!(resource.get("localId").is_none());
}

#[test]
fn test_build_encounter_maps_department_and_drops_admission_source() {
    let input = to_payload(&json!({
        "encounterId": "enc-1",
        "patientId": "pat-1",
        "department": "cardiology",
        "admissionSource": "transfer"
    }))
    .unwrap();
    let resource = build_encounter(&input);

    assert_eq!(resource["departmentCode"], "cardiology");
    assert!(resource.get("department").is_none());
    assert!(resource.get("admissionSource").is_none());
}

#[test]
fn test_build_observation_passes_any_value_through() {
    let input = to_payload(&json!({
        "observationId": "obs-1",
        "patientId": "pat-1",
        "code": "8480-6",
        "value": { "systolic": 120, "diastolic": 80 }
    }))
    .unwrap();
    let resource = build_observation(&input);

    assert_eq!(resource["value"], json!({ "systolic": 120, "diastolic": 80 }));
}

#[test]
fn test_build_medication_order_defaults_substitution() {
    let input = to_payload(&json!({
        "orderId": "ord-1",
        "patientId": "pat-1",
        "medicationCode": "197361",
        "quantity": "30.0"
    }))
    .unwrap();
    let resource = build_medication_order(&input);

    assert_eq!(resource["resourceType"], "MedicationOrder");
    assert_eq!(resource["substitutionAllowed"], false);
    // String quantities pass through untouched.
    assert_eq!(resource["quantity"], "30.0");
}

#[test]
fn test_build_allergy_intolerance_renames_substance_and_drops_reporter() {
    let input = to_payload(&json!({
        "allergyId": "alg-1",
        "patientId": "pat-1",
        "substance": "7980",
        "reporterName": "J. Smith"
    }))
    .unwrap();
    let resource = build_allergy_intolerance(&input);

    assert_eq!(resource["resourceType"], "AllergyIntolerance");
    assert_eq!(resource["substanceCode"], "7980");
    assert!(resource.get("substance").is_none());
    assert_eq!(resource["category"], "medication");
    assert!(resource.get("reporterName").is_none());
}

#[test]
fn test_typed_params_flow_into_built_resource() {
    let params = EntryFromOutsideTargetFacilityEncounterParams {
        encounter_id: "enc-100".to_string(),
        patient_id: "pat-7".to_string(),
        source_facility_id: "fac-3".to_string(),
        period: Some(EntryFromOutsideTargetFacilityEncounterPeriodParams {
            start: Some("2024-05-01T08:30:00Z".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let resource = build_encounter(&to_payload(&params).unwrap());

    assert_eq!(resource["resourceType"], "Encounter");
    assert_eq!(resource["encounterId"], "enc-100");
    assert_eq!(resource["sourceFacilityId"], "fac-3");
    assert_eq!(resource["status"], "in-progress");
    // Optional period fields the caller left out never reach the resource.
    assert_eq!(resource["period"], json!({ "start": "2024-05-01T08:30:00Z" }));
}
