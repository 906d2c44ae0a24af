use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::payment::Payment;

// Request para pagar un lote de assignments bajo un solo payment.
// Los campos llegan laxos (opcionales) y el controller valida campo a campo
// para poder devolver mensajes por campo.
#[derive(Debug, Deserialize)]
pub struct BatchPayRequest {
    pub assign_ids: Option<Vec<Uuid>>,
    pub value: Option<Decimal>,
    pub status: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
    pub bonus: Option<Decimal>,
    pub date_payment: Option<String>,
}

// Response del pago por lote: el payment creado más las tres particiones
// de ids para que el caller pueda reconciliar.
#[derive(Debug, Serialize)]
pub struct BatchPayResponse {
    pub payment: Payment,
    pub updated: Vec<Uuid>,
    pub skipped: Vec<Uuid>,
    pub not_found: Vec<Uuid>,
}
