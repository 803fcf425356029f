//! Field-level input validation.
//!
//! Input types derive [`validator::Validate`]; this module turns the
//! resulting errors into a [`DomainError::Validation`] that names every
//! offending field.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{DomainError, DomainResult};

/// Validate an input value, failing with a message that names each bad field.
pub fn validate_input<T: Validate>(input: &T) -> DomainResult<()> {
    input.validate().map_err(|errors| into_domain_error(&errors))
}

fn into_domain_error(errors: &ValidationErrors) -> DomainError {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let reason = field_errors
                .first()
                .map(describe)
                .unwrap_or_else(|| "is invalid".to_string());
            format!("{} {}", field, reason)
        })
        .collect();

    // HashMap iteration order is unstable
    fields.sort();

    DomainError::validation(fields.join("; "))
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    match error.code.as_ref() {
        "email" => "must be a valid email address".to_string(),
        "length" => match (error.params.get("min"), error.params.get("max")) {
            (Some(min), Some(max)) => format!(
                "must be between {} and {} {}",
                min,
                max,
                characters(max.as_u64())
            ),
            (None, Some(max)) => format!("must be at most {} {}", max, characters(max.as_u64())),
            (Some(min), None) => format!("must be at least {} {}", min, characters(min.as_u64())),
            (None, None) => "has an invalid length".to_string(),
        },
        "range" => match error.params.get("min") {
            Some(min) => format!("must be at least {}", min),
            None => "is out of range".to_string(),
        },
        code => format!("failed the `{}` check", code),
    }
}

fn characters(count: Option<u64>) -> &'static str {
    if count == Some(1) {
        "character"
    } else {
        "characters"
    }
}
