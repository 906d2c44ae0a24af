use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::operator_controller::OperatorController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::operator_dto::{CreateOperatorRequest, UpdateOperatorRequest};
use crate::middleware::company::CompanyContext;
use crate::models::operator::Operator;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_operator_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_operator))
        .route("/", get(list_operators))
        .route("/:id", get(get_operator))
        .route("/:id", put(update_operator))
        .route("/:id", delete(delete_operator))
}

async fn create_operator(
    State(state): State<AppState>,
    company: CompanyContext,
    Json(request): Json<CreateOperatorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Operator>>), AppError> {
    let controller = OperatorController::new(state.pool.clone());
    let operator = controller.create(company.company_id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            operator,
            "Operario creado exitosamente".to_string(),
        )),
    ))
}

async fn get_operator(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Operator>, AppError> {
    let controller = OperatorController::new(state.pool.clone());
    let operator = controller.get_by_id(id, company.company_id).await?;
    Ok(Json(operator))
}

async fn list_operators(
    State(state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<Vec<Operator>>, AppError> {
    let controller = OperatorController::new(state.pool.clone());
    let operators = controller.list_by_company(company.company_id).await?;
    Ok(Json(operators))
}

async fn update_operator(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateOperatorRequest>,
) -> Result<Json<ApiResponse<Operator>>, AppError> {
    let controller = OperatorController::new(state.pool.clone());
    let operator = controller.update(id, company.company_id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        operator,
        "Operario actualizado exitosamente".to_string(),
    )))
}

async fn delete_operator(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = OperatorController::new(state.pool.clone());
    controller.delete(id, company.company_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Operario eliminado exitosamente"
    })))
}
