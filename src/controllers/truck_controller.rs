//! Controller de trucks

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::truck_dto::{CreateTruckRequest, UpdateTruckRequest};
use crate::models::truck::{Truck, TRUCK_STATUSES};
use crate::repositories::truck_repository::TruckRepository;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::validation::{validate_enum, validate_license_plate, FieldErrors};

pub struct TruckController {
    repository: TruckRepository,
}

impl TruckController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TruckRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreateTruckRequest,
    ) -> Result<Truck, AppError> {
        let mut errors = FieldErrors::new();
        if validate_license_plate(&request.license_plate).is_err() {
            errors.add("license_plate", "invalid license plate");
        }
        let status = request.truck_status.unwrap_or_else(|| "active".to_string());
        if validate_enum(&status, TRUCK_STATUSES).is_err() {
            errors.add("truck_status", "invalid truck status");
        }
        errors.into_result()?;

        // La matrícula es única por empresa
        if self
            .repository
            .license_plate_exists(&request.license_plate, company_id)
            .await?
        {
            return Err(conflict_error("Truck", "license_plate", &request.license_plate));
        }

        self.repository
            .create(company_id, request.license_plate, request.brand, request.model, status)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid, company_id: Uuid) -> Result<Truck, AppError> {
        self.repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Truck not found".to_string()))
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Truck>, AppError> {
        self.repository.find_by_company(company_id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: UpdateTruckRequest,
    ) -> Result<Truck, AppError> {
        if let Some(ref status) = request.truck_status {
            if validate_enum(status, TRUCK_STATUSES).is_err() {
                let mut errors = FieldErrors::new();
                errors.add("truck_status", "invalid truck status");
                errors.into_result()?;
            }
        }

        self.repository
            .update(
                id,
                company_id,
                request.license_plate,
                request.brand,
                request.model,
                request.truck_status,
            )
            .await
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id, company_id).await
    }
}
