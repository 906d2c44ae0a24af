//! Modelo de Truck
//!
//! Este módulo contiene el struct Truck que mapea exactamente
//! a la tabla trucks del schema PostgreSQL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados permitidos para un camión
pub const TRUCK_STATUSES: &[&str] = &["active", "maintenance", "out_of_service", "retired"];

/// Truck principal - mapea exactamente a la tabla trucks
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Truck {
    pub id: Uuid,
    pub company_id: Uuid,
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub truck_status: String,
    pub created_at: DateTime<Utc>,
}
