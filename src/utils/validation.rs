//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::ValidationError;

use crate::utils::errors::AppError;

/// Acumulador de errores por campo para respuestas de validación
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.errors.push((field.to_string(), message.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convertir a AppError::ValidationError con detalle por campo
    pub fn into_result(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let mut fields = serde_json::Map::new();
        for (field, message) in self.errors {
            fields
                .entry(field)
                .or_insert_with(|| Value::Array(vec![]))
                .as_array_mut()
                .map(|arr| arr.push(json!(message)));
        }
        Err(AppError::ValidationError(Value::Object(fields)))
    }
}

/// Validar y convertir string a UUID
pub fn validate_uuid(value: &str) -> Result<Uuid, ValidationError> {
    Uuid::parse_str(value).map_err(|_| {
        let mut error = ValidationError::new("uuid");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar y convertir string a fecha (YYYY-MM-DD)
pub fn validate_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| AppError::InvalidDateFormat(format!("'{}': {}", value, e)))
}

/// Validar y convertir string a datetime.
///
/// Acepta RFC3339 o una fecha simple YYYY-MM-DD (medianoche UTC).
pub fn validate_datetime(value: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(DateTime::<Utc>::from_naive_utc_and_offset(
            date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            Utc,
        )),
        Err(e) => Err(AppError::InvalidDateFormat(format!("'{}': {}", value, e))),
    }
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative(value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en una lista de valores permitidos
pub fn validate_enum(value: &str, allowed_values: &[&str]) -> Result<(), ValidationError> {
    if !allowed_values.contains(&value) {
        let mut error = ValidationError::new("enum");
        error.add_param("value".into(), &value.to_string());
        error.add_param("allowed_values".into(), &format!("{:?}", allowed_values));
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de camión
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    // Formato básico: XX-123-XX o similar
    let clean_plate = value.replace([' ', '-', '_'], "");
    if clean_plate.len() < 5 || clean_plate.len() > 10 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_uuid() {
        let valid_uuid = "550e8400-e29b-41d4-a716-446655440000";
        assert!(validate_uuid(valid_uuid).is_ok());

        let invalid_uuid = "invalid-uuid";
        assert!(validate_uuid(invalid_uuid).is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-04-21").is_ok());
        assert!(validate_date("2025/04/21").is_err());
        assert!(validate_date("21-04-2025").is_err());
    }

    #[test]
    fn test_validate_date_error_carries_input() {
        let err = validate_date("not-a-date").unwrap_err();
        match err {
            AppError::InvalidDateFormat(msg) => assert!(msg.contains("not-a-date")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_datetime_accepts_both_formats() {
        assert!(validate_datetime("2025-04-21T10:30:00Z").is_ok());
        assert!(validate_datetime("2025-04-21").is_ok());
        assert!(validate_datetime("21/04/2025").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("driver").is_ok());
        assert!(validate_not_empty("   ").is_err());
        assert!(validate_not_empty("").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(Decimal::from(5)).is_ok());
        assert!(validate_non_negative(Decimal::ZERO).is_ok());
        assert!(validate_non_negative(Decimal::from(-5)).is_err());
    }

    #[test]
    fn test_validate_enum() {
        let allowed = ["pending", "in_progress", "finished", "inactive"];
        assert!(validate_enum("pending", &allowed).is_ok());
        assert!(validate_enum("done", &allowed).is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("AB-123-CD").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("ABCDEFGHIJK").is_err());
    }

    #[test]
    fn test_field_errors_accumulate() {
        let mut errors = FieldErrors::new();
        errors.add("value", "value is required");
        errors.add("status", "status is required");
        let result = errors.into_result();
        match result.unwrap_err() {
            AppError::ValidationError(details) => {
                assert!(details.get("value").is_some());
                assert!(details.get("status").is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_field_errors_empty_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
