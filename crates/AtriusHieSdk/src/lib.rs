//! # Atrius HIE SDK
//!
//! Typed parameter structs and resource builders for submitting resources
//! to the Atrius health information exchange. Everything under [`generated`]
//! is rendered by the `atrius-hie-generator` crate from the exchange
//! resource model; to change it, adjust the model or the generator's mapping
//! rules and regenerate instead of editing those files.
//!
//! ## Usage
//!
//! ```
//! use atrius_hie_sdk::{
//!     EntryFromOutsideTargetFacilityEncounterParams, SdkError, build_encounter, to_payload,
//! };
//!
//! let params = EntryFromOutsideTargetFacilityEncounterParams {
//!     encounter_id: "enc-100".to_string(),
//!     patient_id: "pat-7".to_string(),
//!     source_facility_id: "fac-3".to_string(),
//!     ..Default::default()
//! };
//!
//! let resource = build_encounter(&to_payload(&params)?);
//! assert_eq!(resource["resourceType"], "Encounter");
//! assert_eq!(resource["status"], "in-progress");
//! # Ok::<(), SdkError>(())
//! ```

pub mod generated;
pub mod payload;

pub use generated::*;
pub use payload::{Payload, copy_field, copy_field_or, new_resource, to_payload};

use thiserror::Error;

/// Errors surfaced by the SDK's payload helpers.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Parameters must serialize to a JSON object before a builder can
    /// consume them.
    #[error("expected parameters to serialize to a JSON object, got {0}")]
    NonObjectParams(&'static str),

    /// Parameter serialization failed.
    #[error("failed serializing parameters: {0}")]
    Serialization(#[from] serde_json::Error),
}
