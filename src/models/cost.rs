//! Modelos de costos
//!
//! FuelCost y WorkCost son contenedores de valores adjuntos a un pedido,
//! sin lógica de ciclo de vida propia.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// FuelCost - mapea exactamente a la tabla fuel_costs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelCost {
    pub id: Uuid,
    pub company_id: Uuid,
    pub order_id: Uuid,
    pub truck_id: Option<Uuid>,
    pub cost: Decimal,
    pub liters: Option<Decimal>,
    pub spent_at: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// WorkCost - mapea exactamente a la tabla work_costs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WorkCost {
    pub id: Uuid,
    pub company_id: Uuid,
    pub order_id: Uuid,
    pub description: Option<String>,
    pub cost: Decimal,
    pub created_at: DateTime<Utc>,
}
