use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::assignment::Assignment;

// Request para crear un assignment
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub operator_id: Uuid,
    pub order_id: Uuid,
    pub truck_id: Option<Uuid>,
    pub role: String,
    pub additional_costs: Option<Decimal>,
    // Fecha de asignación opcional, RFC3339 o YYYY-MM-DD; por defecto ahora
    pub assigned_at: Option<String>,
}

// Request para crear varios assignments de una vez
#[derive(Debug, Deserialize)]
pub struct BulkCreateAssignmentsRequest {
    pub items: Vec<CreateAssignmentRequest>,
}

// Request para actualizar un assignment
#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub operator_id: Option<Uuid>,
    pub order_id: Option<Uuid>,
    // Some(None) no es expresable en JSON plano: truck_id presente lo cambia,
    // clear_truck=true lo pone a NULL
    pub truck_id: Option<Uuid>,
    pub clear_truck: Option<bool>,
    pub role: Option<String>,
    pub additional_costs: Option<Decimal>,
    pub assigned_at: Option<String>,
}

// Un conflicto del alta masiva: el item rechazado y el registro existente
#[derive(Debug, Serialize)]
pub struct AssignmentConflict {
    pub operator_id: Uuid,
    pub order_id: Uuid,
    pub truck_id: Option<Uuid>,
    pub existing: Assignment,
}

// Response del alta masiva con semántica de éxito parcial
#[derive(Debug, Serialize)]
pub struct BulkCreateAssignmentsResponse {
    pub created: Vec<Assignment>,
    pub conflicts: Vec<AssignmentConflict>,
}
