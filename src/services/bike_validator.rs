use chrono::{Datelike, Local};
use serde_json::{Map, Value};

use crate::errors::internal::{FieldViolation, ValidationError};
use crate::types::dto::BikeCategory;

/// Earliest model year accepted for a bike
pub const MIN_YEAR: i32 = 1900;

/// Validated fields for a new bike
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBike {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub category: BikeCategory,
}

/// Validated subset of fields for a partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BikeChanges {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub category: Option<BikeCategory>,
}

impl BikeChanges {
    pub fn is_empty(&self) -> bool {
        self.make.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.category.is_none()
    }
}

/// Field-level acceptance rules for bike create/update bodies
///
/// The upper bound on `year` is the current calendar year in local time, read
/// from the clock on every validation unless pinned with [`BikeValidator::with_current_year`].
#[derive(Debug, Clone, Default)]
pub struct BikeValidator {
    current_year: Option<i32>,
}

impl BikeValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validator that treats `year` as the current calendar year
    pub fn with_current_year(year: i32) -> Self {
        Self {
            current_year: Some(year),
        }
    }

    fn max_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Local::now().year())
    }

    /// Validate a create body; every field is required
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` with one entry per rejected field.
    pub fn validate_create(&self, input: &Value) -> Result<NewBike, ValidationError> {
        let body = as_object(input)?;
        let mut violations = Vec::new();

        let make = required(body, "make", &mut violations, |v| {
            non_empty_string(v, "Make is required")
        });
        let model = required(body, "model", &mut violations, |v| {
            non_empty_string(v, "Model is required")
        });
        let year = required(body, "year", &mut violations, |v| self.year(v));
        let category = match body.get("category") {
            Some(value) => collect(category(value), "category", &mut violations),
            None => {
                violations.push(FieldViolation::new("category", INVALID_CATEGORY));
                None
            }
        };

        match (make, model, year, category) {
            (Some(make), Some(model), Some(year), Some(category)) if violations.is_empty() => {
                Ok(NewBike {
                    make,
                    model,
                    year,
                    category,
                })
            }
            _ => Err(ValidationError::new(violations)),
        }
    }

    /// Validate an update body; every field is optional and `{}` is accepted
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` with one entry per rejected field.
    pub fn validate_update(&self, input: &Value) -> Result<BikeChanges, ValidationError> {
        let body = as_object(input)?;
        let mut violations = Vec::new();

        let changes = BikeChanges {
            make: optional(body, "make", &mut violations, |v| {
                non_empty_string(v, "Make is required")
            }),
            model: optional(body, "model", &mut violations, |v| {
                non_empty_string(v, "Model is required")
            }),
            year: optional(body, "year", &mut violations, |v| self.year(v)),
            category: optional(body, "category", &mut violations, category),
        };

        if violations.is_empty() {
            Ok(changes)
        } else {
            Err(ValidationError::new(violations))
        }
    }

    fn year(&self, value: &Value) -> Result<i32, String> {
        let Value::Number(number) = value else {
            return Err(expected("number", value));
        };

        let Some(year) = number.as_i64() else {
            // whole-valued floats such as 2020.0 are still integers
            return match number.as_f64() {
                Some(f) if f.fract() == 0.0 => self.year_in_range(f as i64),
                _ => Err("Expected integer, received float".to_string()),
            };
        };

        self.year_in_range(year)
    }

    fn year_in_range(&self, year: i64) -> Result<i32, String> {
        if year < i64::from(MIN_YEAR) {
            return Err(format!("Year can't be lesser than {}", MIN_YEAR));
        }
        if year > i64::from(self.max_year()) {
            return Err("Year can't be in future!".to_string());
        }
        // bounded by the checks above
        Ok(year as i32)
    }
}

const INVALID_CATEGORY: &str = "Invalid Bike Type";

fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationError> {
    input.as_object().ok_or_else(|| {
        ValidationError::new(vec![FieldViolation::new("", expected("object", input))])
    })
}

fn required<T>(
    body: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
    rule: impl FnOnce(&Value) -> Result<T, String>,
) -> Option<T> {
    match body.get(field) {
        Some(value) => collect(rule(value), field, violations),
        None => {
            violations.push(FieldViolation::new(field, "Required"));
            None
        }
    }
}

fn optional<T>(
    body: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
    rule: impl FnOnce(&Value) -> Result<T, String>,
) -> Option<T> {
    body.get(field)
        .and_then(|value| collect(rule(value), field, violations))
}

fn collect<T>(
    result: Result<T, String>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            violations.push(FieldViolation::new(field, message));
            None
        }
    }
}

fn non_empty_string(value: &Value, empty_message: &str) -> Result<String, String> {
    match value {
        Value::String(s) if s.is_empty() => Err(empty_message.to_string()),
        Value::String(s) => Ok(s.clone()),
        other => Err(expected("string", other)),
    }
}

fn category(value: &Value) -> Result<BikeCategory, String> {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| INVALID_CATEGORY.to_string())
}

fn expected(kind: &str, received: &Value) -> String {
    format!("Expected {}, received {}", kind, kind_of(received))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
