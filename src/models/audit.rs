//! Modelo de AssignmentAudit
//!
//! Registro inmutable append-only: captura el par old/new de cada campo
//! rastreado de un assignment en el momento de cada mutación o borrado.
//! Nunca se actualiza después de creado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// AssignmentAudit - mapea exactamente a la tabla assignment_audits
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssignmentAudit {
    pub id: Uuid,
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
    pub modified_at: DateTime<Utc>,
}
