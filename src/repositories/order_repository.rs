use crate::models::order::Order;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        description: Option<String>,
        income: Decimal,
        expense: Decimal,
        weight: Decimal,
        order_status: String,
    ) -> Result<Order, AppError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (id, company_id, description, income, expense, weight, order_status, pay_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(description)
        .bind(income)
        .bind(expense)
        .bind(weight)
        .bind(order_status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating order: {}", e)))?;

        Ok(order)
    }

    pub async fn find_by_id(&self, id: Uuid, company_id: Uuid) -> Result<Option<Order>, AppError> {
        let order = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding order: {}", e)))?;

        Ok(order)
    }

    pub async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<Order>, AppError> {
        let orders = sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE company_id = $1 ORDER BY created_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing orders: {}", e)))?;

        Ok(orders)
    }

    pub async fn update(
        &self,
        current: &Order,
        description: Option<String>,
        income: Option<Decimal>,
        expense: Option<Decimal>,
        weight: Option<Decimal>,
        order_status: Option<String>,
        pay_status: Option<i16>,
    ) -> Result<Order, AppError> {
        let order = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET description = $3, income = $4, expense = $5, weight = $6, order_status = $7, pay_status = $8
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(current.id)
        .bind(current.company_id)
        .bind(description.or_else(|| current.description.clone()))
        .bind(income.unwrap_or(current.income))
        .bind(expense.unwrap_or(current.expense))
        .bind(weight.unwrap_or(current.weight))
        .bind(order_status.unwrap_or_else(|| current.order_status.clone()))
        .bind(pay_status.unwrap_or(current.pay_status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating order: {}", e)))?;

        Ok(order)
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting order: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        Ok(())
    }
}
