use crate::models::cost::{FuelCost, WorkCost};
use crate::utils::errors::AppError;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CostRepository {
    pool: PgPool,
}

impl CostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_fuel(
        &self,
        company_id: Uuid,
        order_id: Uuid,
        truck_id: Option<Uuid>,
        cost: Decimal,
        liters: Option<Decimal>,
        spent_at: NaiveDate,
    ) -> Result<FuelCost, AppError> {
        let fuel = sqlx::query_as::<_, FuelCost>(
            r#"
            INSERT INTO fuel_costs (id, company_id, order_id, truck_id, cost, liters, spent_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(order_id)
        .bind(truck_id)
        .bind(cost)
        .bind(liters)
        .bind(spent_at)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating fuel cost: {}", e)))?;

        Ok(fuel)
    }

    pub async fn create_work(
        &self,
        company_id: Uuid,
        order_id: Uuid,
        description: Option<String>,
        cost: Decimal,
    ) -> Result<WorkCost, AppError> {
        let work = sqlx::query_as::<_, WorkCost>(
            r#"
            INSERT INTO work_costs (id, company_id, order_id, description, cost, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(order_id)
        .bind(description)
        .bind(cost)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating work cost: {}", e)))?;

        Ok(work)
    }

    pub async fn find_fuel_by_order(
        &self,
        order_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<FuelCost>, AppError> {
        let rows = sqlx::query_as::<_, FuelCost>(
            "SELECT * FROM fuel_costs WHERE order_id = $1 AND company_id = $2 ORDER BY spent_at",
        )
        .bind(order_id)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing fuel costs: {}", e)))?;

        Ok(rows)
    }

    pub async fn find_work_by_order(
        &self,
        order_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<WorkCost>, AppError> {
        let rows = sqlx::query_as::<_, WorkCost>(
            "SELECT * FROM work_costs WHERE order_id = $1 AND company_id = $2 ORDER BY created_at",
        )
        .bind(order_id)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing work costs: {}", e)))?;

        Ok(rows)
    }

    pub async fn delete_fuel(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM fuel_costs WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting fuel cost: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Fuel cost not found".to_string()));
        }

        Ok(())
    }

    pub async fn delete_work(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM work_costs WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting work cost: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Work cost not found".to_string()));
        }

        Ok(())
    }
}
