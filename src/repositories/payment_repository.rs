use crate::models::payment::Payment;
use crate::utils::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear el payment dentro de la transacción del lote
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        company_id: Uuid,
        value: Decimal,
        bonus: Decimal,
        payment_status: String,
        date_start: NaiveDate,
        date_end: NaiveDate,
        date_payment: DateTime<Utc>,
    ) -> Result<Payment, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (id, company_id, value, bonus, payment_status, date_start, date_end, date_payment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(value)
        .bind(bonus)
        .bind(payment_status)
        .bind(date_start)
        .bind(date_end)
        .bind(date_payment)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating payment: {}", e)))?;

        Ok(payment)
    }

    pub async fn find_by_id(&self, id: Uuid, company_id: Uuid) -> Result<Option<Payment>, AppError> {
        let payment = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding payment: {}", e)))?;

        Ok(payment)
    }

    pub async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<Payment>, AppError> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE company_id = $1 ORDER BY created_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing payments: {}", e)))?;

        Ok(payments)
    }
}
