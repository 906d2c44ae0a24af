use crate::models::assignment::Assignment;
use crate::utils::errors::AppError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Fila combinada assignment + estado del payment enlazado,
/// usada para particionar el pago por lote.
#[derive(Debug, sqlx::FromRow)]
pub struct AssignmentPaymentRow {
    pub id: Uuid,
    pub payment_id: Option<Uuid>,
    pub payment_status: Option<String>,
}

/// Fila de costos por assignment para el resumen financiero:
/// salario del operario, rol y bonus del payment enlazado (si hay).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AssignmentCostRow {
    pub operator_name: String,
    pub role: String,
    pub salary: Decimal,
    pub bonus: Option<Decimal>,
}

pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<Assignment>, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE id = $1 AND company_id = $2",
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error finding assignment: {}", e)))?;

        Ok(assignment)
    }

    pub async fn find_by_company(&self, company_id: Uuid) -> Result<Vec<Assignment>, AppError> {
        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE company_id = $1 ORDER BY created_at DESC",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing assignments: {}", e)))?;

        Ok(assignments)
    }

    pub async fn find_by_order(
        &self,
        order_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<Assignment>, AppError> {
        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE order_id = $1 AND company_id = $2 ORDER BY created_at DESC",
        )
        .bind(order_id)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing assignments by order: {}", e)))?;

        Ok(assignments)
    }

    pub async fn find_by_ids(
        &self,
        ids: &[Uuid],
        company_id: Uuid,
    ) -> Result<Vec<Assignment>, AppError> {
        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE id = ANY($1) AND company_id = $2",
        )
        .bind(ids)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error loading assignments: {}", e)))?;

        Ok(assignments)
    }

    /// Buscar un assignment por el triple (operator, order, truck).
    /// NULL en truck_id empareja con NULL (IS NOT DISTINCT FROM).
    pub async fn find_by_triple(
        &self,
        company_id: Uuid,
        operator_id: Uuid,
        order_id: Uuid,
        truck_id: Option<Uuid>,
    ) -> Result<Option<Assignment>, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT * FROM assignments
            WHERE company_id = $1 AND operator_id = $2 AND order_id = $3
              AND truck_id IS NOT DISTINCT FROM $4
            "#,
        )
        .bind(company_id)
        .bind(operator_id)
        .bind(order_id)
        .bind(truck_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking assignment triple: {}", e)))?;

        Ok(assignment)
    }

    /// Variante del lookup del triple dentro de una transacción, para que
    /// el alta masiva detecte duplicados sin abortar la transacción entera.
    pub async fn find_by_triple_tx(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        company_id: Uuid,
        operator_id: Uuid,
        order_id: Uuid,
        truck_id: Option<Uuid>,
    ) -> Result<Option<Assignment>, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            SELECT * FROM assignments
            WHERE company_id = $1 AND operator_id = $2 AND order_id = $3
              AND truck_id IS NOT DISTINCT FROM $4
            "#,
        )
        .bind(company_id)
        .bind(operator_id)
        .bind(order_id)
        .bind(truck_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error checking assignment triple: {}", e)))?;

        Ok(assignment)
    }

    /// Insertar dentro de una transacción. Una violación del índice único
    /// del triple se mapea a DuplicateAssignment (fallback contra carreras
    /// entre el pre-check y el insert).
    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        company_id: Uuid,
        operator_id: Uuid,
        order_id: Uuid,
        truck_id: Option<Uuid>,
        role: String,
        additional_costs: Option<Decimal>,
        assigned_at: DateTime<Utc>,
    ) -> Result<Assignment, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (id, company_id, operator_id, order_id, truck_id, payment_id, role, additional_costs, assigned_at, created_at)
            VALUES ($1, $2, $3, $4, $5, NULL, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(company_id)
        .bind(operator_id)
        .bind(order_id)
        .bind(truck_id)
        .bind(role)
        .bind(additional_costs)
        .bind(assigned_at)
        .bind(Utc::now())
        .fetch_one(&mut **tx)
        .await
        .map_err(map_unique_violation)?;

        Ok(assignment)
    }

    /// Actualizar todos los campos dentro de una transacción
    pub async fn update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        company_id: Uuid,
        operator_id: Uuid,
        order_id: Uuid,
        truck_id: Option<Uuid>,
        role: String,
        additional_costs: Option<Decimal>,
        assigned_at: DateTime<Utc>,
    ) -> Result<Assignment, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignments
            SET operator_id = $3, order_id = $4, truck_id = $5, role = $6, additional_costs = $7, assigned_at = $8
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(operator_id)
        .bind(order_id)
        .bind(truck_id)
        .bind(role)
        .bind(additional_costs)
        .bind(assigned_at)
        .fetch_one(&mut **tx)
        .await
        .map_err(map_unique_violation)?;

        Ok(assignment)
    }

    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM assignments WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting assignment: {}", e)))?;

        Ok(())
    }

    /// Enlazar un assignment a un payment dentro de una transacción
    pub async fn set_payment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        company_id: Uuid,
        payment_id: Uuid,
    ) -> Result<Assignment, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignments
            SET payment_id = $3
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(payment_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error linking payment: {}", e)))?;

        Ok(assignment)
    }

    /// Traer los assignments pedidos junto con el estado de su payment,
    /// para particionar el pago por lote en una sola consulta.
    pub async fn find_payment_rows(
        &self,
        ids: &[Uuid],
        company_id: Uuid,
    ) -> Result<Vec<AssignmentPaymentRow>, AppError> {
        let rows = sqlx::query_as::<_, AssignmentPaymentRow>(
            r#"
            SELECT a.id, a.payment_id, p.payment_status
            FROM assignments a
            LEFT JOIN payments p ON p.id = a.payment_id
            WHERE a.id = ANY($1) AND a.company_id = $2
            "#,
        )
        .bind(ids)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error loading assignments for batch: {}", e)))?;

        Ok(rows)
    }

    /// Filas de costos (salario, rol, bonus) de todos los assignments de un pedido
    pub async fn find_cost_rows_by_order(
        &self,
        order_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<AssignmentCostRow>, AppError> {
        let rows = sqlx::query_as::<_, AssignmentCostRow>(
            r#"
            SELECT op.full_name AS operator_name, a.role, op.salary, p.bonus
            FROM assignments a
            JOIN operators op ON op.id = a.operator_id
            LEFT JOIN payments p ON p.id = a.payment_id
            WHERE a.order_id = $1 AND a.company_id = $2
            ORDER BY a.created_at
            "#,
        )
        .bind(order_id)
        .bind(company_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error loading cost rows: {}", e)))?;

        Ok(rows)
    }
}

fn map_unique_violation(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db) = e {
        if db.constraint() == Some("uniq_assignment_triple") {
            return AppError::DuplicateAssignment(
                "An assignment already exists for this operator, order and truck".to_string(),
                None,
            );
        }
    }
    AppError::DatabaseError(format!("Error writing assignment: {}", e))
}
