// Validation pipe for JSON request bodies

use crate::{Validate, ValidationErrors};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a request body was rejected.
#[derive(Debug, Error)]
pub enum PipeError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("validation failed: {0}")]
    Invalid(ValidationErrors),
}

impl PipeError {
    /// HTTP status a handler should answer with. Both cases are client errors.
    pub fn status(&self) -> u16 {
        400
    }

    /// Error document for the response body.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            PipeError::InvalidJson(e) => serde_json::json!({
                "errors": [{ "field": null, "message": e.to_string(), "constraint": "json", "value": null }]
            }),
            PipeError::Invalid(errors) => errors.to_json(),
        }
    }
}

impl From<ValidationErrors> for PipeError {
    fn from(errors: ValidationErrors) -> Self {
        PipeError::Invalid(errors)
    }
}

/// Decodes a request body and validates it before handing it to business
/// logic.
pub struct ValidationPipe;

impl ValidationPipe {
    /// Parse `body` as JSON into `T`, then validate it.
    pub fn parse<T>(body: &[u8]) -> Result<T, PipeError>
    where
        T: DeserializeOwned + Validate,
    {
        let parsed: T = serde_json::from_slice(body)?;
        parsed.validate()?;
        Ok(parsed)
    }
}
