//! Request validation.

use std::num::IntErrorKind;

use tracing::debug;

use super::ValidationError;
use super::charset::{CharacterClass, ClassSet};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 16;

/// A request as the caller collected it: free-form length text and the
/// toggled classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub length_text: String,
    pub classes: ClassSet,
}

impl PasswordForm {
    pub fn new(
        length_text: impl Into<String>,
        classes: impl IntoIterator<Item = CharacterClass>,
    ) -> Self {
        Self {
            length_text: length_text.into(),
            classes: classes.into_iter().collect(),
        }
    }
}

/// A request that passed validation. Only [`validate`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: ClassSet,
}

impl GenerationRequest {
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> &ClassSet {
        &self.classes
    }
}

/// Check the length bounds and class selection of a form.
///
/// The length is checked first, so an empty form reports the length problem.
pub fn validate(form: &PasswordForm) -> Result<GenerationRequest, ValidationError> {
    let length = parse_length(&form.length_text).inspect_err(|e| {
        debug!(input = %form.length_text, error = %e, "rejected length");
    })?;

    if form.classes.is_empty() {
        debug!(length, "rejected request without classes");
        return Err(ValidationError::NoClassSelected);
    }

    Ok(GenerationRequest {
        length,
        classes: form.classes.clone(),
    })
}

/// Parse and bound-check the length text.
///
/// Integer literals are read directly. Other numeric text (`8.0`, `1e1`) is
/// accepted when it has no fractional part.
pub fn parse_length(text: &str) -> Result<usize, ValidationError> {
    let trimmed = text.trim();

    let value: i64 = match trimmed.parse() {
        Ok(n) => n,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => return Err(too_long(trimmed)),
            IntErrorKind::NegOverflow => return Err(too_short(trimmed)),
            _ => whole_number(trimmed)?,
        },
    };

    if value < MIN_LENGTH as i64 {
        return Err(too_short(trimmed));
    }
    if value > MAX_LENGTH as i64 {
        return Err(too_long(trimmed));
    }

    Ok(value as usize)
}

/// Read decimal or exponent notation. Out-of-range values saturate, the
/// bounds check rejects them afterwards.
fn whole_number(text: &str) -> Result<i64, ValidationError> {
    let invalid = || ValidationError::InvalidLength {
        input: text.to_string(),
    };

    // `f64` also reads "inf" and "NaN".
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let value: f64 = text.parse().map_err(|_| invalid())?;
    if value.is_infinite() || value.fract() == 0.0 {
        Ok(value as i64)
    } else {
        Err(invalid())
    }
}

fn too_short(text: &str) -> ValidationError {
    ValidationError::LengthTooShort {
        length: text.to_string(),
        min: MIN_LENGTH,
    }
}

fn too_long(text: &str) -> ValidationError {
    ValidationError::LengthTooLong {
        length: text.to_string(),
        max: MAX_LENGTH,
    }
}
