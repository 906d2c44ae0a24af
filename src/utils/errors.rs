//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error")]
    ValidationError(serde_json::Value),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Duplicate assignment: {0}")]
    DuplicateAssignment(String, Option<serde_json::Value>),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Nothing to update")]
    NothingToUpdate {
        skipped: Vec<Uuid>,
        not_found: Vec<Uuid>,
    },

    #[error("Payment locked: {0}")]
    PaymentLocked(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DatabaseError(msg) => {
                log::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: Some(json!({ "sql_error": msg })),
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::ValidationError(fields) => {
                log::warn!("Validation error: {}", fields);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(fields),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Unauthorized(msg) => {
                log::warn!("Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        error: "Unauthorized".to_string(),
                        message: msg,
                        details: None,
                        code: Some("UNAUTHORIZED".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                log::warn!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Conflict(msg) => {
                log::warn!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::DuplicateAssignment(msg, existing) => {
                log::warn!("Duplicate assignment: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Duplicate Assignment".to_string(),
                        message: msg,
                        details: existing.map(|e| json!({ "existing": e })),
                        code: Some("DUPLICATE_ASSIGNMENT".to_string()),
                    },
                )
            }

            AppError::InvalidDateFormat(msg) => {
                log::warn!("Invalid date format: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Invalid Date Format".to_string(),
                        message: msg,
                        details: None,
                        code: Some("INVALID_DATE_FORMAT".to_string()),
                    },
                )
            }

            AppError::NothingToUpdate { skipped, not_found } => {
                log::warn!(
                    "Nothing to update: {} skipped, {} not found",
                    skipped.len(),
                    not_found.len()
                );
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Nothing To Update".to_string(),
                        message: "Every targeted assignment is already paid or missing"
                            .to_string(),
                        details: Some(json!({
                            "skipped": skipped,
                            "not_found": not_found,
                        })),
                        code: Some("NOTHING_TO_UPDATE".to_string()),
                    },
                )
            }

            AppError::PaymentLocked(msg) => {
                log::warn!("Payment locked: {}", msg);
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse {
                        error: "Payment Locked".to_string(),
                        message: msg,
                        details: None,
                        code: Some("PAYMENT_LOCKED".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                log::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                log::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}
