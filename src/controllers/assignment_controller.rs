//! Controller de assignments
//!
//! Fuente única de verdad del vínculo operario/camión/pedido. Cada
//! mutación corre en una transacción junto con su registro de auditoría.

use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::assignment_dto::{
    AssignmentConflict, BulkCreateAssignmentsRequest, BulkCreateAssignmentsResponse,
    CreateAssignmentRequest, UpdateAssignmentRequest,
};
use crate::models::assignment::Assignment;
use crate::models::audit::AssignmentAudit;
use crate::repositories::assignment_repository::AssignmentRepository;
use crate::repositories::audit_repository::AuditRepository;
use crate::repositories::operator_repository::OperatorRepository;
use crate::repositories::order_repository::OrderRepository;
use crate::repositories::truck_repository::TruckRepository;
use crate::services::audit_service::AuditRecorder;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_datetime, validate_not_empty, FieldErrors};

pub struct AssignmentController {
    pool: PgPool,
    assignments: AssignmentRepository,
    operators: OperatorRepository,
    orders: OrderRepository,
    trucks: TruckRepository,
    audits: AuditRepository,
    recorder: AuditRecorder,
}

impl AssignmentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assignments: AssignmentRepository::new(pool.clone()),
            operators: OperatorRepository::new(pool.clone()),
            orders: OrderRepository::new(pool.clone()),
            trucks: TruckRepository::new(pool.clone()),
            audits: AuditRepository::new(pool.clone()),
            recorder: AuditRecorder::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        request: CreateAssignmentRequest,
    ) -> Result<Assignment, AppError> {
        self.validate_references(company_id, &request).await?;

        // Pre-check amigable; el índice único cubre la ventana de carrera
        if let Some(existing) = self
            .assignments
            .find_by_triple(company_id, request.operator_id, request.order_id, request.truck_id)
            .await?
        {
            return Err(AppError::DuplicateAssignment(
                "An assignment already exists for this operator, order and truck".to_string(),
                Some(json!(existing)),
            ));
        }

        let assigned_at = parse_assigned_at(request.assigned_at.as_deref())?;

        let mut tx = self.pool.begin().await?;
        let assignment = self
            .assignments
            .insert(
                &mut tx,
                company_id,
                request.operator_id,
                request.order_id,
                request.truck_id,
                request.role,
                request.additional_costs,
                assigned_at,
            )
            .await?;
        self.recorder
            .record_change(&mut tx, company_id, assignment.id, None, Some(&assignment.snapshot()))
            .await?;
        tx.commit().await?;

        Ok(assignment)
    }

    /// Alta masiva con semántica de éxito parcial: los duplicados van a
    /// `conflicts` sin abortar el lote; los aciertos se acumulan en `created`.
    /// Todo el lote se escribe en una sola transacción.
    pub async fn bulk_create(
        &self,
        company_id: Uuid,
        request: BulkCreateAssignmentsRequest,
    ) -> Result<BulkCreateAssignmentsResponse, AppError> {
        if request.items.is_empty() {
            let mut errors = FieldErrors::new();
            errors.add("items", "items must not be empty");
            errors.into_result()?;
        }

        // Validar la forma de todos los items antes de escribir nada
        let mut parsed_dates = Vec::with_capacity(request.items.len());
        for (i, item) in request.items.iter().enumerate() {
            if validate_not_empty(&item.role).is_err() {
                let mut errors = FieldErrors::new();
                errors.add(&format!("items[{}].role", i), "role is required");
                errors.into_result()?;
            }
            self.validate_references(company_id, item).await?;
            parsed_dates.push(parse_assigned_at(item.assigned_at.as_deref())?);
        }

        let mut created = Vec::new();
        let mut conflicts = Vec::new();

        let mut tx = self.pool.begin().await?;
        for (item, assigned_at) in request.items.into_iter().zip(parsed_dates) {
            if let Some(existing) = self
                .assignments
                .find_by_triple_tx(&mut tx, company_id, item.operator_id, item.order_id, item.truck_id)
                .await?
            {
                conflicts.push(AssignmentConflict {
                    operator_id: item.operator_id,
                    order_id: item.order_id,
                    truck_id: item.truck_id,
                    existing,
                });
                continue;
            }

            let assignment = self
                .assignments
                .insert(
                    &mut tx,
                    company_id,
                    item.operator_id,
                    item.order_id,
                    item.truck_id,
                    item.role,
                    item.additional_costs,
                    assigned_at,
                )
                .await?;
            self.recorder
                .record_change(&mut tx, company_id, assignment.id, None, Some(&assignment.snapshot()))
                .await?;
            created.push(assignment);
        }
        tx.commit().await?;

        Ok(BulkCreateAssignmentsResponse { created, conflicts })
    }

    pub async fn update(
        &self,
        id: Uuid,
        company_id: Uuid,
        request: UpdateAssignmentRequest,
    ) -> Result<Assignment, AppError> {
        let current = self
            .assignments
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        // El snapshot previo viene de esta lectura; no se relee al auditar
        let before = current.snapshot();

        let operator_id = request.operator_id.unwrap_or(current.operator_id);
        let order_id = request.order_id.unwrap_or(current.order_id);
        let truck_id = if request.clear_truck.unwrap_or(false) {
            None
        } else {
            request.truck_id.or(current.truck_id)
        };
        let role = request.role.unwrap_or_else(|| current.role.clone());
        let additional_costs = request.additional_costs.or(current.additional_costs);
        let assigned_at = match request.assigned_at.as_deref() {
            Some(raw) => validate_datetime(raw)?,
            None => current.assigned_at,
        };

        if let Some(op) = request.operator_id {
            if self.operators.find_by_id(op, company_id).await?.is_none() {
                return Err(AppError::NotFound("Operator not found".to_string()));
            }
        }
        if let Some(ord) = request.order_id {
            if self.orders.find_by_id(ord, company_id).await?.is_none() {
                return Err(AppError::NotFound("Order not found".to_string()));
            }
        }
        if let Some(tr) = request.truck_id {
            if self.trucks.find_by_id(tr, company_id).await?.is_none() {
                return Err(AppError::NotFound("Truck not found".to_string()));
            }
        }

        // El parche no puede producir un triple que colisione con otra fila
        let triple_changed = operator_id != current.operator_id
            || order_id != current.order_id
            || truck_id != current.truck_id;
        if triple_changed {
            if let Some(other) = self
                .assignments
                .find_by_triple(company_id, operator_id, order_id, truck_id)
                .await?
            {
                if other.id != id {
                    return Err(AppError::DuplicateAssignment(
                        "Another assignment already exists for this operator, order and truck"
                            .to_string(),
                        Some(json!(other)),
                    ));
                }
            }
        }

        let mut tx = self.pool.begin().await?;
        let updated = self
            .assignments
            .update(
                &mut tx,
                id,
                company_id,
                operator_id,
                order_id,
                truck_id,
                role,
                additional_costs,
                assigned_at,
            )
            .await?;
        self.recorder
            .record_change(&mut tx, company_id, id, Some(&before), Some(&updated.snapshot()))
            .await?;
        tx.commit().await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> Result<(), AppError> {
        let current = self
            .assignments
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        // Auditar el estado previo y recién entonces borrar, en la misma
        // transacción; sin hooks implícitos
        let mut tx = self.pool.begin().await?;
        self.recorder
            .record_change(&mut tx, company_id, id, Some(&current.snapshot()), None)
            .await?;
        self.assignments.delete(&mut tx, id, company_id).await?;
        tx.commit().await?;

        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid, company_id: Uuid) -> Result<Assignment, AppError> {
        self.assignments
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Result<Vec<Assignment>, AppError> {
        self.assignments.find_by_company(company_id).await
    }

    pub async fn list_by_order(
        &self,
        order_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<Assignment>, AppError> {
        self.assignments.find_by_order(order_id, company_id).await
    }

    pub async fn audit_history(
        &self,
        id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<AssignmentAudit>, AppError> {
        // El historial exige que el assignment exista (los audits de filas
        // borradas se van con el cascade)
        self.assignments
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        self.audits.find_by_assignment(id, company_id).await
    }

    /// Operario y pedido deben existir en la empresa; el camión solo si viene.
    /// Un pedido con pay_status finalizado no admite nuevos assignments.
    async fn validate_references(
        &self,
        company_id: Uuid,
        request: &CreateAssignmentRequest,
    ) -> Result<(), AppError> {
        if validate_not_empty(&request.role).is_err() {
            let mut errors = FieldErrors::new();
            errors.add("role", "role is required");
            errors.into_result()?;
        }

        if self
            .operators
            .find_by_id(request.operator_id, company_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Operator not found".to_string()));
        }

        let order = self
            .orders
            .find_by_id(request.order_id, company_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;
        if order.is_pay_locked() {
            return Err(AppError::PaymentLocked(
                "Order is finalized and cannot receive new assignments".to_string(),
            ));
        }

        if let Some(truck_id) = request.truck_id {
            if self.trucks.find_by_id(truck_id, company_id).await?.is_none() {
                return Err(AppError::NotFound("Truck not found".to_string()));
            }
        }

        Ok(())
    }
}

fn parse_assigned_at(raw: Option<&str>) -> Result<DateTime<Utc>, AppError> {
    match raw {
        Some(value) => validate_datetime(value),
        None => Ok(Utc::now()),
    }
}
