use rust_decimal::Decimal;
use serde::Deserialize;

// Request para crear un pedido
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub description: Option<String>,
    pub income: Option<Decimal>,
    pub expense: Option<Decimal>,
    pub weight: Option<Decimal>,
    pub order_status: Option<String>,
}

// Request para actualizar un pedido
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub description: Option<String>,
    pub income: Option<Decimal>,
    pub expense: Option<Decimal>,
    pub weight: Option<Decimal>,
    pub order_status: Option<String>,
    pub pay_status: Option<i16>,
}
