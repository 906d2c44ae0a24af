use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cost_controller::CostController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::cost_dto::{CreateFuelCostRequest, CreateWorkCostRequest};
use crate::middleware::company::CompanyContext;
use crate::models::cost::{FuelCost, WorkCost};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cost_router() -> Router<AppState> {
    Router::new()
        .route("/fuel", post(create_fuel_cost))
        .route("/fuel/order/:order_id", get(list_fuel_costs))
        .route("/fuel/:id", delete(delete_fuel_cost))
        .route("/work", post(create_work_cost))
        .route("/work/order/:order_id", get(list_work_costs))
        .route("/work/:id", delete(delete_work_cost))
}

async fn create_fuel_cost(
    State(state): State<AppState>,
    company: CompanyContext,
    Json(request): Json<CreateFuelCostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FuelCost>>), AppError> {
    let controller = CostController::new(state.pool.clone());
    let fuel = controller.create_fuel(company.company_id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            fuel,
            "Costo de combustible registrado".to_string(),
        )),
    ))
}

async fn list_fuel_costs(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(order_id): Path<Uuid>,
) -> Result<Json<Vec<FuelCost>>, AppError> {
    let controller = CostController::new(state.pool.clone());
    let rows = controller.list_fuel_by_order(order_id, company.company_id).await?;
    Ok(Json(rows))
}

async fn delete_fuel_cost(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CostController::new(state.pool.clone());
    controller.delete_fuel(id, company.company_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Costo de combustible eliminado"
    })))
}

async fn create_work_cost(
    State(state): State<AppState>,
    company: CompanyContext,
    Json(request): Json<CreateWorkCostRequest>,
) -> Result<(StatusCode, Json<ApiResponse<WorkCost>>), AppError> {
    let controller = CostController::new(state.pool.clone());
    let work = controller.create_work(company.company_id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            work,
            "Costo de trabajo registrado".to_string(),
        )),
    ))
}

async fn list_work_costs(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(order_id): Path<Uuid>,
) -> Result<Json<Vec<WorkCost>>, AppError> {
    let controller = CostController::new(state.pool.clone());
    let rows = controller.list_work_by_order(order_id, company.company_id).await?;
    Ok(Json(rows))
}

async fn delete_work_cost(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CostController::new(state.pool.clone());
    controller.delete_work(id, company.company_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Costo de trabajo eliminado"
    })))
}
