//! Controller de operators

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::operator_dto::{CreateOperatorRequest, UpdateOperatorRequest};
use crate::models::operator::{Operator, OPERATOR_STATUSES};
use crate::repositories::operator_repository::OperatorRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_enum, validate_non_negative, validate_not_empty, FieldErrors};

pub struct OperatorController {
    repository: OperatorRepository,
}

impl OperatorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OperatorRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreateOperatorRequest,
    ) -> Result<Operator, AppError> {
        let mut errors = FieldErrors::new();
        if validate_not_empty(&request.full_name).is_err() {
            errors.add("full_name", "full_name is required");
        }
        if validate_non_negative(request.salary).is_err() {
            errors.add("salary", "salary must not be negative");
        }
        let status = request.operator_status.unwrap_or_else(|| "active".to_string());
        if validate_enum(&status, OPERATOR_STATUSES).is_err() {
            errors.add("operator_status", "invalid operator status");
        }
        errors.into_result()?;

        self.repository
            .create(
                company_id,
                request.full_name,
                request.salary,
                request.shift_size.unwrap_or(8),
                status,
            )
            .await
    }

    pub async fn get_by_id(&self, id: Uuid, company_id: Uuid) -> Result<Operator, AppError> {
        self.repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Operator not found".to_string()))
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Operator>, AppError> {
        self.repository.find_by_company(company_id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: UpdateOperatorRequest,
    ) -> Result<Operator, AppError> {
        if let Some(salary) = request.salary {
            if validate_non_negative(salary).is_err() {
                let mut errors = FieldErrors::new();
                errors.add("salary", "salary must not be negative");
                errors.into_result()?;
            }
        }
        if let Some(ref status) = request.operator_status {
            if validate_enum(status, OPERATOR_STATUSES).is_err() {
                let mut errors = FieldErrors::new();
                errors.add("operator_status", "invalid operator status");
                errors.into_result()?;
            }
        }

        self.repository
            .update(
                id,
                company_id,
                request.full_name,
                request.salary,
                request.shift_size,
                request.operator_status,
            )
            .await
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, company_id).await
    }
}
