//! Controller de orders
//!
//! CRUD de pedidos más el resumen financiero derivado. Un pedido con
//! pay_status finalizado rechaza ediciones y borrados.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::order_dto::{CreateOrderRequest, UpdateOrderRequest};
use crate::dto::summary_dto::{CostSummaryLine, OrderCostSummary};
use crate::models::order::{Order, ORDER_STATUSES};
use crate::repositories::order_repository::OrderRepository;
use crate::services::cost_summary_service::CostSummaryService;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_enum, FieldErrors};

pub struct OrderController {
    repository: OrderRepository,
    summary: CostSummaryService,
}

impl OrderController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OrderRepository::new(pool.clone()),
            summary: CostSummaryService::new(pool),
        }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreateOrderRequest,
    ) -> Result<Order, AppError> {
        let status = request.order_status.unwrap_or_else(|| "pending".to_string());
        if validate_enum(&status, ORDER_STATUSES).is_err() {
            let mut errors = FieldErrors::new();
            errors.add("order_status", "invalid order status");
            errors.into_result()?;
        }

        self.repository
            .create(
                company_id,
                request.description,
                request.income.unwrap_or(Decimal::ZERO),
                request.expense.unwrap_or(Decimal::ZERO),
                request.weight.unwrap_or(Decimal::ZERO),
                status,
            )
            .await
    }

    pub async fn get_by_id(&self, id: Uuid, company_id: Uuid) -> Result<Order, AppError> {
        self.repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Order>, AppError> {
        self.repository.find_by_company(company_id).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: UpdateOrderRequest,
    ) -> Result<Order, AppError> {
        let current = self.get_by_id(id, company_id).await?;

        // Un pedido pagado está bloqueado; solo se permite reabrirlo
        // explícitamente poniendo pay_status en 0
        if current.is_pay_locked() && request.pay_status != Some(0) {
            return Err(AppError::PaymentLocked(
                "Order is finalized and cannot be edited".to_string(),
            ));
        }

        if let Some(ref status) = request.order_status {
            if validate_enum(status, ORDER_STATUSES).is_err() {
                let mut errors = FieldErrors::new();
                errors.add("order_status", "invalid order status");
                errors.into_result()?;
            }
        }

        self.repository
            .update(
                &current,
                request.description,
                request.income,
                request.expense,
                request.weight,
                request.order_status,
                request.pay_status,
            )
            .await
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let current = self.get_by_id(id, company_id).await?;
        if current.is_pay_locked() {
            return Err(AppError::PaymentLocked(
                "Order is finalized and cannot be deleted".to_string(),
            ));
        }

        self.repository.delete(id, company_id).await
    }

    /// Rollup financiero del pedido, calculado bajo demanda
    pub async fn cost_summary(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<OrderCostSummary, AppError> {
        let order = self.get_by_id(id, company_id).await?;
        self.summary.calculate_summary(&order).await
    }

    /// Desglose itemizado del resumen, una línea por contribuyente
    pub async fn cost_summary_list(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<CostSummaryLine>, AppError> {
        let order = self.get_by_id(id, company_id).await?;
        self.summary.calculate_summary_list(&order).await
    }
}
