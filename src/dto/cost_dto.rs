use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

// Request para registrar un costo de combustible
#[derive(Debug, Deserialize)]
pub struct CreateFuelCostRequest {
    pub order_id: Uuid,
    pub truck_id: Option<Uuid>,
    pub cost: Decimal,
    pub liters: Option<Decimal>,
    // YYYY-MM-DD; por defecto hoy
    pub spent_at: Option<String>,
}

// Request para registrar un costo de trabajo
#[derive(Debug, Deserialize)]
pub struct CreateWorkCostRequest {
    pub order_id: Uuid,
    pub description: Option<String>,
    pub cost: Decimal,
}
