//! Modelo de Payment
//!
//! Este módulo contiene el struct Payment. Un Payment puede estar
//! referenciado por muchos assignments (lote de nómina).

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Payment principal - mapea exactamente a la tabla payments
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub company_id: Uuid,
    pub value: Decimal,
    pub bonus: Decimal,
    pub payment_status: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub date_payment: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
