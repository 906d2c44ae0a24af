//! Contexto de empresa por request
//!
//! La autenticación real (JWT) queda fuera de este core; aguas arriba el
//! gateway valida el token y propaga la empresa autenticada en el header
//! X-Company-Id. Este extractor la convierte en un parámetro explícito que
//! viaja por todos los controllers — nunca estado ambiental.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::utils::errors::AppError;

pub const COMPANY_HEADER: &str = "x-company-id";

/// Empresa autenticada del request actual
#[derive(Debug, Clone, Copy)]
pub struct CompanyContext {
    pub company_id: Uuid,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for CompanyContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(COMPANY_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing company header".to_string()))?;

        let company_id = Uuid::parse_str(raw)
            .map_err(|_| AppError::Unauthorized("Invalid company id".to_string()))?;

        Ok(Self { company_id })
    }
}
