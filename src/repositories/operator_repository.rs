use crate::models::operator::Operator;
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct OperatorRepository {
    pool: PgPool,
}

impl OperatorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        full_name: String,
        salary: Decimal,
        shift_size: i32,
        operator_status: String,
    ) -> Result<Operator, AppError> {
        let operator = sqlx::query_as::<_, Operator>(
            r#"
            INSERT INTO operators (id, company_id, full_name, salary, shift_size, operator_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(full_name)
        .bind(salary)
        .bind(shift_size)
        .bind(operator_status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating operator: {}", e)))?;

        Ok(operator)
    }

    pub async fn find_by_id(&self, id: Uuid, company_id: Uuid) -> Result<Option<Operator>, AppError> {
        let operator = sqlx::query_as::<_, Operator>(
            "SELECT * FROM operators WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding operator: {}", e)))?;

        Ok(operator)
    }

    pub async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<Operator>, AppError> {
        let operators = sqlx::query_as::<_, Operator>(
            "SELECT * FROM operators WHERE company_id = $1 ORDER BY created_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing operators: {}", e)))?;

        Ok(operators)
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        full_name: Option<String>,
        salary: Option<Decimal>,
        shift_size: Option<i32>,
        operator_status: Option<String>,
    ) -> Result<Operator, AppError> {
        let current = self
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Operator not found".to_string()))?;

        let operator = sqlx::query_as::<_, Operator>(
            r#"
            UPDATE operators
            SET full_name = $3, salary = $4, shift_size = $5, operator_status = $6
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(full_name.unwrap_or(current.full_name))
        .bind(salary.unwrap_or(current.salary))
        .bind(shift_size.unwrap_or(current.shift_size))
        .bind(operator_status.unwrap_or(current.operator_status))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating operator: {}", e)))?;

        Ok(operator)
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM operators WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting operator: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Operator not found".to_string()));
        }

        Ok(())
    }
}
