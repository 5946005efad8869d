//! Conversion between [`Teapot`] and its transport [`TeapotMapping`]

use super::mapping::TeapotMapping;
use super::teapot::Teapot;
use super::value_objects::Capacity;

/// Extracts every field of a teapot into a mapping
pub fn to_mapping(teapot: &Teapot) -> TeapotMapping {
    TeapotMapping {
        id: Some(teapot.id.clone()),
        name: Some(teapot.name.clone()),
        brand: Some(teapot.brand.clone()),
        capacity: Some(teapot.capacity.liters()),
    }
}

/// Lays the fields present in `mapping` over `target`
///
/// Absent fields are left untouched. A capacity outside the manufactured
/// set is skipped; the validator rejects it before it gets here.
pub fn from_mapping(mapping: &TeapotMapping, target: &mut Teapot) {
    if let Some(id) = &mapping.id {
        target.id = id.clone();
    }
    if let Some(name) = &mapping.name {
        target.name = name.clone();
    }
    if let Some(brand) = &mapping.brand {
        target.brand = brand.clone();
    }
    if let Some(capacity) = mapping.capacity.and_then(|l| Capacity::try_from(l).ok()) {
        target.capacity = capacity;
    }
}
