use super::value_objects::Capacity;
use serde::{Deserialize, Serialize};

/// Teapot entity
///
/// Passive data holder. The `id` is the identity of a teapot: two teapots
/// with the same id are the same resource, whatever their other fields say.
///
/// # Example
/// ```
/// use teapot_api::domain::teapot::{Capacity, Teapot};
///
/// let teapot = Teapot::new("mouse", "Mouse", "Tefal", Capacity::L0_3);
/// assert_eq!(teapot.id, "mouse");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teapot {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub capacity: Capacity,
}

impl Teapot {
    /// Creates a new teapot
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        capacity: Capacity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            capacity,
        }
    }
}
