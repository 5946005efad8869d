use super::mapping::TeapotMapping;
use super::teapot::Teapot;
use super::value_objects::Capacity;
use std::fmt;

/// Path segments taken by fixed routes under `/teapots/`
pub const RESERVED_IDS: [&str; 2] = ["count", "reset"];

/// Whether fields missing from a mapping count as violations
///
/// Creation needs a complete teapot; an update only checks the fields it
/// carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// Field-level violations collected from one request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation errors:")?;
        for message in &self.0 {
            write!(f, "\n\t- {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks a mapping against the teapot field constraints
///
/// # Rules
/// - `id`, `name`, `brand` must not be blank
/// - `id` must not contain `/` (it is used as a path segment)
/// - `id` must not be one of [`RESERVED_IDS`]
/// - `capacity` must be one of [`Capacity::ALL`]
/// - with [`Presence::Required`], absent fields are violations too
///
/// Returns every violation in field order; an empty list means valid.
pub fn validate(mapping: &TeapotMapping, presence: Presence) -> Vec<String> {
    let mut errors = Vec::new();

    check_text("id", mapping.id.as_deref(), presence, &mut errors);
    if let Some(id) = &mapping.id {
        if id.contains('/') {
            errors.push("id must not contain '/'".to_string());
        }
        if RESERVED_IDS.contains(&id.as_str()) {
            errors.push(format!("id must not be one of {}", RESERVED_IDS.join(", ")));
        }
    }
    check_text("name", mapping.name.as_deref(), presence, &mut errors);
    check_text("brand", mapping.brand.as_deref(), presence, &mut errors);

    match mapping.capacity {
        Some(liters) => {
            if let Err(message) = Capacity::try_from(liters) {
                errors.push(message);
            }
        }
        None if presence == Presence::Required => errors.push("capacity is required".to_string()),
        None => {}
    }

    errors
}

fn check_text(field: &str, value: Option<&str>, presence: Presence, errors: &mut Vec<String>) {
    match value {
        Some(v) if v.trim().is_empty() => errors.push(format!("{} must not be blank", field)),
        Some(_) => {}
        None if presence == Presence::Required => errors.push(format!("{} is required", field)),
        None => {}
    }
}

/// Validates a creation body and builds the teapot it describes
pub fn validate_new(mapping: &TeapotMapping) -> Result<Teapot, ValidationErrors> {
    let errors = validate(mapping, Presence::Required);
    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    // All fields are present and valid past this point
    match (&mapping.id, &mapping.name, &mapping.brand, mapping.capacity) {
        (Some(id), Some(name), Some(brand), Some(liters)) => {
            let capacity = Capacity::try_from(liters).map_err(ValidationErrors::single)?;
            Ok(Teapot::new(id.as_str(), name.as_str(), brand.as_str(), capacity))
        }
        _ => Err(ValidationErrors::single("teapot is incomplete")),
    }
}

/// Validates an update body; only the fields it carries are checked
pub fn validate_patch(mapping: &TeapotMapping) -> Result<(), ValidationErrors> {
    let errors = validate(mapping, Presence::Optional);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
