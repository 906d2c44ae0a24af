//! Registro de auditoría de assignments
//!
//! Produce un registro inmutable cada vez que cambia algún campo rastreado
//! de un assignment (operator, order, truck, payment, assigned_at, role),
//! incluida la eliminación. Si nada cambió, no se escribe nada.
//!
//! La escritura ocurre dentro de la transacción del caller: un fallo de
//! auditoría revierte también la escritura principal.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::models::assignment::AssignSnapshot;
use crate::models::audit::AssignmentAudit;
use crate::repositories::audit_repository::{AuditInsert, AuditRepository};
use crate::utils::errors::AppError;

pub struct AuditRecorder {
    repository: AuditRepository,
}

impl AuditRecorder {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AuditRepository::new(pool),
        }
    }

    /// Registrar un cambio de assignment.
    ///
    /// - alta: before = None, after = Some
    /// - modificación: before = Some, after = Some (no-op si son iguales)
    /// - borrado: before = Some, after = None
    ///
    /// El snapshot previo lo pasa el caller desde su flujo read-then-write;
    /// aquí nunca se relee la fila.
    pub async fn record_change(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        company_id: Uuid,
        assignment_id: Uuid,
        before: Option<&AssignSnapshot>,
        after: Option<&AssignSnapshot>,
    ) -> Result<Option<AssignmentAudit>, AppError> {
        if !snapshots_differ(before, after) {
            return Ok(None);
        }

        let record = build_insert(company_id, assignment_id, before, after);
        let audit = self.repository.insert(tx, record).await?;
        Ok(Some(audit))
    }
}

/// Comparación explícita struct-a-struct sobre la lista fija de campos
/// rastreados. Evita spam de auditoría cuando un save no tocó nada rastreado.
pub fn snapshots_differ(before: Option<&AssignSnapshot>, after: Option<&AssignSnapshot>) -> bool {
    match (before, after) {
        (None, None) => false,
        (Some(b), Some(a)) => b != a,
        _ => true,
    }
}

/// Armar la fila de auditoría con el par old/new de cada campo rastreado
pub fn build_insert(
    company_id: Uuid,
    assignment_id: Uuid,
    before: Option<&AssignSnapshot>,
    after: Option<&AssignSnapshot>,
) -> AuditInsert {
    AuditInsert {
        company_id,
        assignment_id,
        old_operator_id: before.map(|s| s.operator_id),
        new_operator_id: after.map(|s| s.operator_id),
        old_order_id: before.map(|s| s.order_id),
        new_order_id: after.map(|s| s.order_id),
        old_truck_id: before.and_then(|s| s.truck_id),
        new_truck_id: after.and_then(|s| s.truck_id),
        old_payment_id: before.and_then(|s| s.payment_id),
        new_payment_id: after.and_then(|s| s.payment_id),
        old_assigned_at: before.map(|s| s.assigned_at),
        new_assigned_at: after.map(|s| s.assigned_at),
        old_role: before.map(|s| s.role.clone()),
        new_role: after.map(|s| s.role.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn snapshot() -> AssignSnapshot {
        AssignSnapshot {
            operator_id: Uuid::new_v4(),
            order_id: Uuid::new_v4(),
            truck_id: None,
            payment_id: None,
            assigned_at: Utc::now(),
            role: "driver".to_string(),
        }
    }

    #[test]
    fn test_equal_snapshots_do_not_differ() {
        let snap = snapshot();
        assert!(!snapshots_differ(Some(&snap), Some(&snap.clone())));
    }

    #[test]
    fn test_role_change_differs() {
        let before = snapshot();
        let mut after = before.clone();
        after.role = "helper".to_string();
        assert!(snapshots_differ(Some(&before), Some(&after)));
    }

    #[test]
    fn test_truck_change_differs_including_null() {
        let before = snapshot();
        let mut after = before.clone();
        after.truck_id = Some(Uuid::new_v4());
        assert!(snapshots_differ(Some(&before), Some(&after)));
        // y de vuelta a NULL también cuenta
        assert!(snapshots_differ(Some(&after), Some(&before)));
    }

    #[test]
    fn test_creation_and_deletion_differ() {
        let snap = snapshot();
        assert!(snapshots_differ(None, Some(&snap)));
        assert!(snapshots_differ(Some(&snap), None));
        assert!(!snapshots_differ(None, None));
    }

    #[test]
    fn test_deletion_insert_has_empty_new_fields() {
        let snap = snapshot();
        let record = build_insert(Uuid::new_v4(), Uuid::new_v4(), Some(&snap), None);
        assert_eq!(record.old_operator_id, Some(snap.operator_id));
        assert_eq!(record.old_role, Some("driver".to_string()));
        assert!(record.new_operator_id.is_none());
        assert!(record.new_order_id.is_none());
        assert!(record.new_truck_id.is_none());
        assert!(record.new_payment_id.is_none());
        assert!(record.new_assigned_at.is_none());
        assert!(record.new_role.is_none());
    }

    #[test]
    fn test_creation_insert_has_empty_old_fields() {
        let snap = snapshot();
        let record = build_insert(Uuid::new_v4(), Uuid::new_v4(), None, Some(&snap));
        assert!(record.old_operator_id.is_none());
        assert!(record.old_role.is_none());
        assert_eq!(record.new_operator_id, Some(snap.operator_id));
        assert_eq!(record.new_role, Some("driver".to_string()));
    }
}
