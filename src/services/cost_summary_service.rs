//! Resumen financiero por pedido
//!
//! Calcula bajo demanda el rollup de costos de un pedido: combustible,
//! trabajo, salarios de choferes, otros salarios y bonus. Función pura de
//! los datos actuales; nunca se cachea ni se persiste.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::summary_dto::{CostLineKind, CostSummaryLine, OrderCostSummary};
use crate::models::cost::{FuelCost, WorkCost};
use crate::models::order::Order;
use crate::repositories::assignment_repository::{AssignmentCostRow, AssignmentRepository};
use crate::repositories::cost_repository::CostRepository;
use crate::utils::errors::AppError;

/// Rol que clasifica un salario como "de chofer"; la taxonomía exacta
/// es convención del caller, aquí solo se compara sin distinguir mayúsculas.
const DRIVER_ROLE: &str = "driver";

pub struct CostSummaryService {
    assignments: AssignmentRepository,
    costs: CostRepository,
}

impl CostSummaryService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            assignments: AssignmentRepository::new(pool.clone()),
            costs: CostRepository::new(pool),
        }
    }

    pub async fn calculate_summary(&self, order: &Order) -> Result<OrderCostSummary, AppError> {
        let fuel = self.costs.find_fuel_by_order(order.id, order.company_id).await?;
        let work = self.costs.find_work_by_order(order.id, order.company_id).await?;
        let cost_rows = self
            .assignments
            .find_cost_rows_by_order(order.id, order.company_id)
            .await?;

        Ok(summarize(order, &fuel, &work, &cost_rows))
    }

    pub async fn calculate_summary_list(
        &self,
        order: &Order,
    ) -> Result<Vec<CostSummaryLine>, AppError> {
        let fuel = self.costs.find_fuel_by_order(order.id, order.company_id).await?;
        let work = self.costs.find_work_by_order(order.id, order.company_id).await?;
        let cost_rows = self
            .assignments
            .find_cost_rows_by_order(order.id, order.company_id)
            .await?;

        Ok(itemize(&fuel, &work, &cost_rows))
    }
}

fn is_driver(role: &str) -> bool {
    role.eq_ignore_ascii_case(DRIVER_ROLE)
}

/// Rollup de totales. Todo suma desde cero: un pedido sin assignments,
/// sin combustible y sin costos de trabajo produce un resumen todo-cero.
pub fn summarize(
    order: &Order,
    fuel: &[FuelCost],
    work: &[WorkCost],
    cost_rows: &[AssignmentCostRow],
) -> OrderCostSummary {
    let fuel_cost: Decimal = fuel.iter().map(|f| f.cost).sum();
    let work_cost: Decimal = work.iter().map(|w| w.cost).sum();

    let mut driver_salaries = Decimal::ZERO;
    let mut other_salaries = Decimal::ZERO;
    for row in cost_rows {
        if is_driver(&row.role) {
            driver_salaries += row.salary;
        } else {
            other_salaries += row.salary;
        }
        // El bonus no distingue rol: cuenta para "otros" en todos los casos
        other_salaries += row.bonus.unwrap_or(Decimal::ZERO);
    }

    let total_cost = work_cost + driver_salaries + other_salaries + fuel_cost;

    OrderCostSummary {
        order_id: order.id,
        expense: order.expense,
        renting_cost: order.income,
        fuel_cost,
        work_cost,
        driver_salaries,
        other_salaries,
        total_cost,
    }
}

/// Variante itemizada: una línea por contribuyente de costo en lugar
/// de los totales agregados.
pub fn itemize(
    fuel: &[FuelCost],
    work: &[WorkCost],
    cost_rows: &[AssignmentCostRow],
) -> Vec<CostSummaryLine> {
    let mut lines = Vec::new();

    for f in fuel {
        lines.push(CostSummaryLine {
            kind: CostLineKind::Fuel,
            label: format!("Fuel {}", f.spent_at),
            amount: f.cost,
        });
    }

    for w in work {
        lines.push(CostSummaryLine {
            kind: CostLineKind::Work,
            label: w.description.clone().unwrap_or_else(|| "Work".to_string()),
            amount: w.cost,
        });
    }

    for row in cost_rows {
        lines.push(CostSummaryLine {
            kind: CostLineKind::Salary,
            label: format!("{} ({})", row.operator_name, row.role),
            amount: row.salary,
        });
        if let Some(bonus) = row.bonus {
            if bonus != Decimal::ZERO {
                lines.push(CostSummaryLine {
                    kind: CostLineKind::Bonus,
                    label: format!("{} bonus", row.operator_name),
                    amount: bonus,
                });
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn order(income: i64, expense: i64) -> Order {
        Order {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            description: None,
            income: Decimal::from(income),
            expense: Decimal::from(expense),
            weight: Decimal::ZERO,
            order_status: "pending".to_string(),
            pay_status: 0,
            created_at: Utc::now(),
        }
    }

    fn fuel_row(order: &Order, cost: i64) -> FuelCost {
        FuelCost {
            id: Uuid::new_v4(),
            company_id: order.company_id,
            order_id: order.id,
            truck_id: None,
            cost: Decimal::from(cost),
            liters: None,
            spent_at: NaiveDate::from_ymd_opt(2025, 4, 21).unwrap(),
            created_at: Utc::now(),
        }
    }

    fn work_row(order: &Order, cost: i64) -> WorkCost {
        WorkCost {
            id: Uuid::new_v4(),
            company_id: order.company_id,
            order_id: order.id,
            description: Some("crane rental".to_string()),
            cost: Decimal::from(cost),
            created_at: Utc::now(),
        }
    }

    fn cost_row(name: &str, role: &str, salary: i64, bonus: Option<i64>) -> AssignmentCostRow {
        AssignmentCostRow {
            operator_name: name.to_string(),
            role: role.to_string(),
            salary: Decimal::from(salary),
            bonus: bonus.map(Decimal::from),
        }
    }

    #[test]
    fn test_empty_order_summarizes_to_zero() {
        let order = order(0, 0);
        let summary = summarize(&order, &[], &[], &[]);
        assert_eq!(summary.fuel_cost, Decimal::ZERO);
        assert_eq!(summary.work_cost, Decimal::ZERO);
        assert_eq!(summary.driver_salaries, Decimal::ZERO);
        assert_eq!(summary.other_salaries, Decimal::ZERO);
        assert_eq!(summary.total_cost, Decimal::ZERO);
    }

    #[test]
    fn test_full_rollup() {
        // WorkCost [50, 30], dos choferes con salario 1000 y 800,
        // un helper con salario 500 y bonus 50, combustible 120.
        let order = order(5000, 400);
        let fuel = vec![fuel_row(&order, 120)];
        let work = vec![work_row(&order, 50), work_row(&order, 30)];
        let rows = vec![
            cost_row("Juan", "driver", 1000, None),
            cost_row("Pedro", "driver", 800, None),
            cost_row("Luis", "helper", 500, Some(50)),
        ];

        let summary = summarize(&order, &fuel, &work, &rows);
        assert_eq!(summary.work_cost, Decimal::from(80));
        assert_eq!(summary.driver_salaries, Decimal::from(1800));
        assert_eq!(summary.other_salaries, Decimal::from(550));
        assert_eq!(summary.fuel_cost, Decimal::from(120));
        assert_eq!(summary.total_cost, Decimal::from(2550));
        assert_eq!(summary.renting_cost, Decimal::from(5000));
        assert_eq!(summary.expense, Decimal::from(400));
    }

    #[test]
    fn test_driver_role_is_case_insensitive() {
        let order = order(0, 0);
        let rows = vec![
            cost_row("Juan", "Driver", 1000, None),
            cost_row("Pedro", "DRIVER", 800, None),
        ];
        let summary = summarize(&order, &[], &[], &rows);
        assert_eq!(summary.driver_salaries, Decimal::from(1800));
        assert_eq!(summary.other_salaries, Decimal::ZERO);
    }

    #[test]
    fn test_bonus_counts_even_for_drivers() {
        let order = order(0, 0);
        let rows = vec![cost_row("Juan", "driver", 1000, Some(100))];
        let summary = summarize(&order, &[], &[], &rows);
        assert_eq!(summary.driver_salaries, Decimal::from(1000));
        assert_eq!(summary.other_salaries, Decimal::from(100));
    }

    #[test]
    fn test_itemize_one_line_per_contributor() {
        let order = order(0, 0);
        let fuel = vec![fuel_row(&order, 120)];
        let work = vec![work_row(&order, 50)];
        let rows = vec![cost_row("Luis", "helper", 500, Some(50))];

        let lines = itemize(&fuel, &work, &rows);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].kind, CostLineKind::Fuel);
        assert_eq!(lines[1].kind, CostLineKind::Work);
        assert_eq!(lines[1].label, "crane rental");
        assert_eq!(lines[2].kind, CostLineKind::Salary);
        assert_eq!(lines[3].kind, CostLineKind::Bonus);
        assert_eq!(lines[3].amount, Decimal::from(50));
    }

    #[test]
    fn test_itemize_skips_zero_bonus() {
        let rows = vec![cost_row("Luis", "helper", 500, Some(0))];
        let lines = itemize(&[], &[], &rows);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, CostLineKind::Salary);
    }
}
