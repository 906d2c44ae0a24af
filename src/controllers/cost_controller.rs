//! Controller de costos (combustible y trabajo)

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::cost_dto::{CreateFuelCostRequest, CreateWorkCostRequest};
use crate::models::cost::{FuelCost, WorkCost};
use crate::repositories::cost_repository::CostRepository;
use crate::repositories::order_repository::OrderRepository;
use crate::repositories::truck_repository::TruckRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_date, validate_non_negative, FieldErrors};

pub struct CostController {
    costs: CostRepository,
    orders: OrderRepository,
    trucks: TruckRepository,
}

impl CostController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            costs: CostRepository::new(pool.clone()),
            orders: OrderRepository::new(pool.clone()),
            trucks: TruckRepository::new(pool),
        }
    }

    pub async fn create_fuel(
        &self,
        company_id: Uuid,
        request: CreateFuelCostRequest,
    ) -> Result<FuelCost, AppError> {
        if validate_non_negative(request.cost).is_err() {
            let mut errors = FieldErrors::new();
            errors.add("cost", "cost must not be negative");
            errors.into_result()?;
        }

        if self
            .orders
            .find_by_id(request.order_id, company_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Order not found".to_string()));
        }
        if let Some(truck_id) = request.truck_id {
            if self.trucks.find_by_id(truck_id, company_id).await?.is_none() {
                return Err(AppError::NotFound("Truck not found".to_string()));
            }
        }

        let spent_at = match request.spent_at.as_deref() {
            Some(raw) => validate_date(raw)?,
            None => Utc::now().date_naive(),
        };

        self.costs
            .create_fuel(
                company_id,
                request.order_id,
                request.truck_id,
                request.cost,
                request.liters,
                spent_at,
            )
            .await
    }

    pub async fn create_work(
        &self,
        company_id: Uuid,
        request: CreateWorkCostRequest,
    ) -> Result<WorkCost, AppError> {
        if validate_non_negative(request.cost).is_err() {
            let mut errors = FieldErrors::new();
            errors.add("cost", "cost must not be negative");
            errors.into_result()?;
        }

        if self
            .orders
            .find_by_id(request.order_id, company_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        self.costs
            .create_work(company_id, request.order_id, request.description, request.cost)
            .await
    }

    pub async fn list_fuel_by_order(
        &self,
        order_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<FuelCost>, AppError> {
        self.costs.find_fuel_by_order(order_id, company_id).await
    }

    pub async fn list_work_by_order(
        &self,
        order_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<WorkCost>, AppError> {
        self.costs.find_work_by_order(order_id, company_id).await
    }

    pub async fn delete_fuel(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        self.costs.delete_fuel(id, company_id).await
    }

    pub async fn delete_work(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        self.costs.delete_work(id, company_id).await
    }
}
