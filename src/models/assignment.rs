//! Modelo de Assignment
//!
//! Este módulo contiene el struct Assignment, la relación ternaria
//! operario × pedido × camión (opcional) con rol y costos adicionales.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Assignment principal - mapea exactamente a la tabla assignments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    pub id: Uuid,
    pub company_id: Uuid,
    pub operator_id: Uuid,
    pub order_id: Uuid,
    pub truck_id: Option<Uuid>,
    pub payment_id: Option<Uuid>,
    pub role: String,
    pub additional_costs: Option<Decimal>,
    pub assigned_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Snapshot de los campos auditados de un assignment.
///
/// Lista fija y nombrada de campos rastreados; la comparación es
/// struct-a-struct vía PartialEq, nunca por introspección dinámica.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignSnapshot {
    pub operator_id: Uuid,
    pub order_id: Uuid,
    pub truck_id: Option<Uuid>,
    pub payment_id: Option<Uuid>,
    pub assigned_at: DateTime<Utc>,
    pub role: String,
}

impl Assignment {
    /// Capturar los campos rastreados para auditoría
    pub fn snapshot(&self) -> AssignSnapshot {
        AssignSnapshot {
            operator_id: self.operator_id,
            order_id: self.order_id,
            truck_id: self.truck_id,
            payment_id: self.payment_id,
            assigned_at: self.assigned_at,
            role: self.role.clone(),
        }
    }
}
