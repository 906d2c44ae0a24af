use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::assignment_controller::AssignmentController;
use crate::controllers::order_controller::OrderController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::order_dto::{CreateOrderRequest, UpdateOrderRequest};
use crate::dto::summary_dto::{CostSummaryLine, OrderCostSummary};
use crate::middleware::company::CompanyContext;
use crate::models::assignment::Assignment;
use crate::models::order::Order;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(list_orders))
        .route("/:id", get(get_order))
        .route("/:id", put(update_order))
        .route("/:id", delete(delete_order))
        .route("/:id/summary", get(get_order_summary))
        .route("/:id/summary/list", get(get_order_summary_list))
        .route("/:id/assignments", get(list_order_assignments))
}

async fn create_order(
    State(state): State<AppState>,
    company: CompanyContext,
    Json(request): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Order>>), AppError> {
    let controller = OrderController::new(state.pool.clone());
    let order = controller.create(company.company_id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            order,
            "Pedido creado exitosamente".to_string(),
        )),
    ))
}

async fn get_order(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let order = controller.get_by_id(id, company.company_id).await?;
    Ok(Json(order))
}

async fn list_orders(
    State(state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<Vec<Order>>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let orders = controller.list_by_company(company.company_id).await?;
    Ok(Json(orders))
}

async fn update_order(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateOrderRequest>,
) -> Result<Json<ApiResponse<Order>>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let order = controller.update(id, company.company_id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        order,
        "Pedido actualizado exitosamente".to_string(),
    )))
}

async fn delete_order(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    controller.delete(id, company.company_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Pedido eliminado exitosamente"
    })))
}

async fn get_order_summary(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderCostSummary>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let summary = controller.cost_summary(id, company.company_id).await?;
    Ok(Json(summary))
}

async fn get_order_summary_list(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<CostSummaryLine>>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let lines = controller.cost_summary_list(id, company.company_id).await?;
    Ok(Json(lines))
}

async fn list_order_assignments(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let assignments = controller.list_by_order(id, company.company_id).await?;
    Ok(Json(assignments))
}
