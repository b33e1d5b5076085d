// @generated by atrius-hie-generator
// DO NOT EDIT MANUALLY
//
// Resource model: atrius-exchange-resource-model v2024.2

pub mod builders;
pub mod variant_params;

pub use builders::*;
pub use variant_params::*;
