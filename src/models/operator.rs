//! Modelo de Operator
//!
//! Este módulo contiene el struct Operator que mapea exactamente
//! a la tabla operators del schema PostgreSQL.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados permitidos para un operario
pub const OPERATOR_STATUSES: &[&str] = &["active", "on_leave", "inactive"];

/// Operator principal - mapea exactamente a la tabla operators
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Operator {
    pub id: Uuid,
    pub company_id: Uuid,
    pub full_name: String,
    pub salary: Decimal,
    pub shift_size: i32,
    pub operator_status: String,
    pub created_at: DateTime<Utc>,
}
