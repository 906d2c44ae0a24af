use rust_decimal::Decimal;
use serde::Deserialize;

// Request para crear un operario
#[derive(Debug, Deserialize)]
pub struct CreateOperatorRequest {
    pub full_name: String,
    pub salary: Decimal,
    pub shift_size: Option<i32>,
    pub operator_status: Option<String>,
}

// Request para actualizar un operario
#[derive(Debug, Deserialize)]
pub struct UpdateOperatorRequest {
    pub full_name: Option<String>,
    pub salary: Option<Decimal>,
    pub shift_size: Option<i32>,
    pub operator_status: Option<String>,
}
