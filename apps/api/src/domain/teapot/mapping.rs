use serde::{Deserialize, Serialize};

/// Transport representation of a teapot
///
/// Every field is optional: a mapping carries only the fields the client
/// sent, so it can be laid over an existing [`Teapot`](super::Teapot)
/// without clobbering the rest. Capacity stays a raw number here and is
/// checked by the validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeapotMapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f64>,
}
