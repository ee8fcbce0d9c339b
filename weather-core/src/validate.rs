use crate::{error::ValidationError, model::Coordinates};

/// Check that both coordinates are present and parse as finite `f32`s.
///
/// No range check is done; `lat=1000` is accepted. On success the input
/// strings are returned untouched.
pub fn validate(lat: &str, lon: &str) -> Result<Coordinates, ValidationError> {
    if lat.is_empty() || lon.is_empty() {
        return Err(ValidationError::ArgsRequired);
    }

    if !is_finite_f32(lat) || !is_finite_f32(lon) {
        return Err(ValidationError::ArgsInvalidFloat);
    }

    Ok(Coordinates {
        lat: lat.to_owned(),
        lon: lon.to_owned(),
    })
}

// `str::parse::<f32>` saturates out-of-range input to infinity and accepts
// "inf"/"NaN", so the result has to be checked as well.
fn is_finite_f32(s: &str) -> bool {
    s.parse::<f32>().is_ok_and(f32::is_finite)
}
