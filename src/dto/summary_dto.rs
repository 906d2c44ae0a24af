use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

// Resumen financiero derivado de un pedido; nunca se persiste
#[derive(Debug, Serialize, PartialEq)]
pub struct OrderCostSummary {
    pub order_id: Uuid,
    pub expense: Decimal,
    pub renting_cost: Decimal,
    pub fuel_cost: Decimal,
    pub work_cost: Decimal,
    pub driver_salaries: Decimal,
    pub other_salaries: Decimal,
    pub total_cost: Decimal,
}

// Una línea del desglose itemizado
#[derive(Debug, Serialize, PartialEq)]
pub struct CostSummaryLine {
    pub kind: CostLineKind,
    pub label: String,
    pub amount: Decimal,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum CostLineKind {
    Fuel,
    Work,
    Salary,
    Bonus,
}
