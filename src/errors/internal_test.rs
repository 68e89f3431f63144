#[cfg(test)]
mod tests {
    use crate::errors::internal::{FieldViolation, InternalError, ValidationError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_includes_operation() {
        let db_err = DbErr::RecordNotFound("test record".to_string());
        let error = InternalError::database("create_bike", db_err);

        let error_string = error.to_string();
        assert!(error_string.contains("create_bike"));
        assert!(error_string.contains("Database error"));
    }

    #[test]
    fn test_bike_not_found_message() {
        let error = InternalError::bike_not_found("42");
        assert_eq!(error.to_string(), "Bike with id 42 not found.");
    }

    #[test]
    fn test_validation_error_counts_fields() {
        let error = ValidationError::new(vec![
            FieldViolation::new("make", "Make is required"),
            FieldViolation::new("model", "Model is required"),
        ]);

        assert_eq!(error.to_string(), "Validation failed for 2 field(s)");
        assert_eq!(error.fields().collect::<Vec<_>>(), vec!["make", "model"]);
        assert_eq!(error.message_for("model"), Some("Model is required"));
        assert_eq!(error.message_for("year"), None);
    }
}
