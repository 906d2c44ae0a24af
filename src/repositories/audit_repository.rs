use crate::models::audit::AssignmentAudit;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Valores old/new listos para insertar; los arma el audit service
/// a partir de los snapshots.
#[derive(Debug)]
pub struct AuditInsert {
    pub company_id: Uuid,
    pub assignment_id: Uuid,
    pub old_operator_id: Option<Uuid>,
    pub new_operator_id: Option<Uuid>,
    pub old_order_id: Option<Uuid>,
    pub new_order_id: Option<Uuid>,
    pub old_truck_id: Option<Uuid>,
    pub new_truck_id: Option<Uuid>,
    pub old_payment_id: Option<Uuid>,
    pub new_payment_id: Option<Uuid>,
    pub old_assigned_at: Option<DateTime<Utc>>,
    pub new_assigned_at: Option<DateTime<Utc>>,
    pub old_role: Option<String>,
    pub new_role: Option<String>,
}

pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un registro de auditoría dentro de la transacción del caller.
    /// El timestamp lo asigna el servidor, nunca el cliente.
    pub async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: AuditInsert,
    ) -> Result<AssignmentAudit, AppError> {
        let audit = sqlx::query_as::<_, AssignmentAudit>(
            r#"
            INSERT INTO assignment_audits (
                id, company_id, assignment_id,
                old_operator_id, new_operator_id,
                old_order_id, new_order_id,
                old_truck_id, new_truck_id,
                old_payment_id, new_payment_id,
                old_assigned_at, new_assigned_at,
                old_role, new_role,
                modified_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.company_id)
        .bind(record.assignment_id)
        .bind(record.old_operator_id)
        .bind(record.new_operator_id)
        .bind(record.old_order_id)
        .bind(record.new_order_id)
        .bind(record.old_truck_id)
        .bind(record.new_truck_id)
        .bind(record.old_payment_id)
        .bind(record.new_payment_id)
        .bind(record.old_assigned_at)
        .bind(record.new_assigned_at)
        .bind(record.old_role)
        .bind(record.new_role)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error writing audit record: {}", e)))?;

        Ok(audit)
    }

    /// Historial de auditoría de un assignment, el más reciente primero
    pub async fn find_by_assignment(
        &self,
        assignment_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<AssignmentAudit>, AppError> {
        let audits = sqlx::query_as::<_, AssignmentAudit>(
            r#"
            SELECT * FROM assignment_audits
            WHERE assignment_id = $1 AND company_id = $2
            ORDER BY modified_at DESC
            "#,
        )
        .bind(assignment_id)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error loading audit history: {}", e)))?;

        Ok(audits)
    }
}
