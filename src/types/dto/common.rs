use poem::http::StatusCode;
use poem_openapi::Object;

/// One rejected field in a request body
#[derive(Object, Debug, Clone, PartialEq)]
pub struct FieldErrorResponse {
    /// Dotted path of the offending field
    pub field: String,

    /// Why the field was rejected
    pub message: String,
}

/// Uniform error body returned by every endpoint
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// HTTP status code
    pub status_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Field-level details, empty unless the request failed validation
    pub errors: Vec<FieldErrorResponse>,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldErrorResponse>) -> Self {
        self.errors = errors;
        self
    }
}
