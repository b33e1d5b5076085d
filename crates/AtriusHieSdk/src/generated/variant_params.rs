// @generated by atrius-hie-generator
// DO NOT EDIT MANUALLY
//
// Resource model: atrius-exchange-resource-model v2024.2

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Input parameters for the `reported-allergy-intolerance` variant of the
/// `allergy-intolerance` resource type.
///
/// An allergy or intolerance reported to the target facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportedAllergyIntoleranceParams {
    /// Exchange-wide identifier for the allergy record.
    ///
    /// Required (1..1)
    #[serde(rename = "allergyId")]
    pub allergy_id: String,
    /// Category of the offending substance (e.g. food or medication).
    ///
    /// Optional (0..1)
    /// Defaults to `"medication"` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Identifier of the patient the allergy belongs to.
    ///
    /// Required (1..1)
    #[serde(rename = "patientId")]
    pub patient_id: String,
    /// Details of the most recent reaction episode.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<ReportedAllergyIntoleranceReactionParams>,
    /// When the allergy was reported to the facility.
    ///
    /// Optional (0..1)
    #[serde(rename = "reportedAt", skip_serializing_if = "Option::is_none")]
    pub reported_at: Option<String>,
    /// Worst observed severity of the reaction.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    /// Coded substance the patient reacts to.
    ///
    /// Required (1..1)
    pub substance: String,
}

/// The `reaction` structure within `reported-allergy-intolerance` parameters.
///
/// Details of the most recent reaction episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportedAllergyIntoleranceReactionParams {
    /// Clinical manifestations observed during the episode.
    ///
    /// Optional, Multiple (0..*)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifestation: Option<Vec<String>>,
    /// When the reaction started.
    ///
    /// Optional (0..1)
    #[serde(rename = "onsetAt", skip_serializing_if = "Option::is_none")]
    pub onset_at: Option<String>,
}

/// Input parameters for the `entry-from-outside-target-facility-encounter` variant of the
/// `encounter` resource type.
///
/// An encounter record received from a facility other than the target facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EntryFromOutsideTargetFacilityEncounterParams {
    /// Identifiers of clinical documents attached to the encounter.
    ///
    /// Optional, Multiple (0..*)
    #[serde(rename = "documentIds", skip_serializing_if = "Option::is_none")]
    pub document_ids: Option<Vec<String>>,
    /// Exchange-wide identifier for the encounter.
    ///
    /// Required (1..1)
    #[serde(rename = "encounterId")]
    pub encounter_id: String,
    /// Identifier of the patient seen during the encounter.
    ///
    /// Required (1..1)
    #[serde(rename = "patientId")]
    pub patient_id: String,
    /// Start and end of the encounter.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<EntryFromOutsideTargetFacilityEncounterPeriodParams>,
    /// When the record was received by the target facility.
    ///
    /// Optional (0..1)
    #[serde(rename = "receivedAt", skip_serializing_if = "Option::is_none")]
    pub received_at: Option<String>,
    /// Facility that originated the encounter record.
    ///
    /// Required (1..1)
    #[serde(rename = "sourceFacilityId")]
    pub source_facility_id: String,
    /// Lifecycle status of the encounter.
    ///
    /// Optional (0..1)
    /// Defaults to `"in-progress"` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The `period` structure within `entry-from-outside-target-facility-encounter` parameters.
///
/// Start and end of the encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EntryFromOutsideTargetFacilityEncounterPeriodParams {
    /// When the encounter ended.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// When the encounter began.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// Input parameters for the `target-facility-encounter` variant of the
/// `encounter` resource type.
///
/// An encounter that took place at the target facility itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TargetFacilityEncounterParams {
    /// Classification such as inpatient or ambulatory.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Department where the encounter took place.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Exchange-wide identifier for the encounter.
    ///
    /// Required (1..1)
    #[serde(rename = "encounterId")]
    pub encounter_id: String,
    /// Identifier of the patient seen during the encounter.
    ///
    /// Required (1..1)
    #[serde(rename = "patientId")]
    pub patient_id: String,
    /// Start and end of the encounter.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<TargetFacilityEncounterPeriodParams>,
    /// Practitioners participating in the encounter.
    ///
    /// Optional, Multiple (0..*)
    #[serde(rename = "practitionerIds", skip_serializing_if = "Option::is_none")]
    pub practitioner_ids: Option<Vec<String>>,
    /// Lifecycle status of the encounter.
    ///
    /// Optional (0..1)
    /// Defaults to `"in-progress"` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The `period` structure within `target-facility-encounter` parameters.
///
/// Start and end of the encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TargetFacilityEncounterPeriodParams {
    /// When the encounter ended.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// When the encounter began.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// Input parameters for the `inpatient-medication-order` variant of the
/// `medication-order` resource type.
///
/// A medication order administered while the patient is admitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InpatientMedicationOrderParams {
    /// How the medication should be given.
    ///
    /// Optional (0..1)
    #[serde(rename = "dosageInstruction", skip_serializing_if = "Option::is_none")]
    pub dosage_instruction: Option<InpatientMedicationOrderDosageInstructionParams>,
    /// Encounter during which the order was placed.
    ///
    /// Required (1..1)
    #[serde(rename = "encounterId")]
    pub encounter_id: String,
    /// Coded medication being ordered.
    ///
    /// Required (1..1)
    #[serde(rename = "medicationCode")]
    pub medication_code: String,
    /// Exchange-wide identifier for the order.
    ///
    /// Required (1..1)
    #[serde(rename = "orderId")]
    pub order_id: String,
    /// Identifier of the patient the order is for.
    ///
    /// Required (1..1)
    #[serde(rename = "patientId")]
    pub patient_id: String,
    /// When administration should start.
    ///
    /// Optional (0..1)
    #[serde(rename = "startAt", skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
    /// When administration should stop.
    ///
    /// Optional (0..1)
    #[serde(rename = "stopAt", skip_serializing_if = "Option::is_none")]
    pub stop_at: Option<String>,
}

/// The `dosageInstruction` structure within `inpatient-medication-order` parameters.
///
/// How the medication should be given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InpatientMedicationOrderDosageInstructionParams {
    /// Route of administration.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Free-text dosage instruction.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Timing schedule for administration.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
}

/// Input parameters for the `outpatient-medication-order` variant of the
/// `medication-order` resource type.
///
/// A medication order dispensed for use outside the facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutpatientMedicationOrderParams {
    /// Number of days the dispensed quantity should last.
    ///
    /// Optional (0..1)
    #[serde(rename = "daysSupply", skip_serializing_if = "Option::is_none")]
    pub days_supply: Option<i64>,
    /// How the medication should be given.
    ///
    /// Optional (0..1)
    #[serde(rename = "dosageInstruction", skip_serializing_if = "Option::is_none")]
    pub dosage_instruction: Option<OutpatientMedicationOrderDosageInstructionParams>,
    /// Encounter during which the order was placed.
    ///
    /// Optional (0..1)
    #[serde(rename = "encounterId", skip_serializing_if = "Option::is_none")]
    pub encounter_id: Option<String>,
    /// Coded medication being ordered.
    ///
    /// Required (1..1)
    #[serde(rename = "medicationCode")]
    pub medication_code: String,
    /// Exchange-wide identifier for the order.
    ///
    /// Required (1..1)
    #[serde(rename = "orderId")]
    pub order_id: String,
    /// Identifier of the patient the order is for.
    ///
    /// Required (1..1)
    #[serde(rename = "patientId")]
    pub patient_id: String,
    /// Quantity to dispense.
    ///
    /// Optional (0..1)
    /// Accepts `string` input; the schema declares `decimal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Whether a generic substitution is permitted.
    ///
    /// Optional (0..1)
    /// Defaults to `false` when omitted.
    #[serde(rename = "substitutionAllowed", skip_serializing_if = "Option::is_none")]
    pub substitution_allowed: Option<bool>,
}

/// The `dosageInstruction` structure within `outpatient-medication-order` parameters.
///
/// How the medication should be given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutpatientMedicationOrderDosageInstructionParams {
    /// Route of administration.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Free-text dosage instruction.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Timing schedule for administration.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
}

/// Input parameters for the `laboratory-result-observation` variant of the
/// `observation` resource type.
///
/// A laboratory result released by the performing facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LaboratoryResultObservationParams {
    /// Coded test the result belongs to.
    ///
    /// Required (1..1)
    pub code: String,
    /// High, low or normal flag assigned by the laboratory.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<String>,
    /// When the result was released.
    ///
    /// Optional (0..1)
    #[serde(rename = "issuedAt", skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<String>,
    /// Exchange-wide identifier for the observation.
    ///
    /// Required (1..1)
    #[serde(rename = "observationId")]
    pub observation_id: String,
    /// Identifier of the patient the observation is about.
    ///
    /// Required (1..1)
    #[serde(rename = "patientId")]
    pub patient_id: String,
    /// Facility that performed the test.
    ///
    /// Optional (0..1)
    #[serde(rename = "performerFacilityId", skip_serializing_if = "Option::is_none")]
    pub performer_facility_id: Option<String>,
    /// Normal range for the result.
    ///
    /// Optional (0..1)
    #[serde(rename = "referenceRange", skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<LaboratoryResultObservationReferenceRangeParams>,
    /// Specimen the result was derived from.
    ///
    /// Optional (0..1)
    #[serde(rename = "specimenId", skip_serializing_if = "Option::is_none")]
    pub specimen_id: Option<String>,
    /// Result value as released by the laboratory.
    ///
    /// Optional (0..1)
    /// Accepts `any` input; the schema declares `decimal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// The `referenceRange` structure within `laboratory-result-observation` parameters.
///
/// Normal range for the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LaboratoryResultObservationReferenceRangeParams {
    /// Upper bound of the normal range.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    /// Lower bound of the normal range.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    /// Textual description of the range.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Input parameters for the `vital-signs-observation` variant of the
/// `observation` resource type.
///
/// A routine vital sign captured during an encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VitalSignsObservationParams {
    /// Coded vital sign being reported.
    ///
    /// Required (1..1)
    pub code: String,
    /// When the measurement was taken.
    ///
    /// Optional (0..1)
    #[serde(rename = "effectiveAt", skip_serializing_if = "Option::is_none")]
    pub effective_at: Option<String>,
    /// Encounter during which the vital sign was captured.
    ///
    /// Optional (0..1)
    #[serde(rename = "encounterId", skip_serializing_if = "Option::is_none")]
    pub encounter_id: Option<String>,
    /// Exchange-wide identifier for the observation.
    ///
    /// Required (1..1)
    #[serde(rename = "observationId")]
    pub observation_id: String,
    /// Identifier of the patient the observation is about.
    ///
    /// Required (1..1)
    #[serde(rename = "patientId")]
    pub patient_id: String,
    /// Unit the value is expressed in.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Measured value.
    ///
    /// Optional (0..1)
    /// Accepts `any` input; the schema declares `decimal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Input parameters for the `exchange-registered-patient` variant of the
/// `patient` resource type.
///
/// A patient registered directly with the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExchangeRegisteredPatientParams {
    /// Whether the record is in active use.
    ///
    /// Optional (0..1)
    /// Defaults to `true` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Primary home address.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<ExchangeRegisteredPatientAddressParams>,
    /// Date of birth.
    ///
    /// Optional (0..1)
    #[serde(rename = "birthDate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    /// Administrative gender.
    ///
    /// Optional (0..1)
    /// Defaults to `"unknown"` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Identifier assigned by the registering facility.
    ///
    /// Optional (0..1)
    #[serde(rename = "localId", skip_serializing_if = "Option::is_none")]
    pub local_id: Option<String>,
    /// Facility responsible for maintaining the record.
    ///
    /// Optional (0..1)
    #[serde(rename = "facilityId", skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<String>,
    /// Current official name.
    ///
    /// Required (1..1)
    pub name: ExchangeRegisteredPatientNameParams,
    /// Exchange-wide patient identifier.
    ///
    /// Required (1..1)
    #[serde(rename = "patientId")]
    pub patient_id: String,
}

/// The `address` structure within `exchange-registered-patient` parameters.
///
/// Primary home address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExchangeRegisteredPatientAddressParams {
    /// City or town.
    ///
    /// Optional (0..1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Street address lines.
    ///
    /// Optional, Multiple (0..*)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Vec<String>>,
    /// Postal code.
    ///
    /// Optional (0..1)
    #[serde(rename = "postalCode", skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// The `name` structure within `exchange-registered-patient` parameters.
///
/// Current official name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExchangeRegisteredPatientNameParams {
    /// Family name.
    ///
    /// Required (1..1)
    pub family: String,
    /// Given names in order of use.
    ///
    /// Optional, Multiple (0..*)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given: Option<Vec<String>>,
}
