//! Modelo de Order
//!
//! Este módulo contiene el struct Order que mapea exactamente
//! a la tabla orders del schema PostgreSQL.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estados permitidos para un pedido
pub const ORDER_STATUSES: &[&str] = &["pending", "in_progress", "finished", "inactive"];

/// pay_status: 0 = sin pagar, 1 = pagado (bloqueado para edición)
pub const PAY_STATUS_UNPAID: i16 = 0;
pub const PAY_STATUS_PAID: i16 = 1;

/// Order principal - mapea exactamente a la tabla orders
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub company_id: Uuid,
    pub description: Option<String>,
    pub income: Decimal,
    pub expense: Decimal,
    pub weight: Decimal,
    pub order_status: String,
    pub pay_status: i16,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Un pedido finalizado en pagos no admite más ediciones
    pub fn is_pay_locked(&self) -> bool {
        self.pay_status == PAY_STATUS_PAID
    }
}
