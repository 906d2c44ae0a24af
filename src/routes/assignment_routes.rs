use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::assignment_controller::AssignmentController;
use crate::dto::assignment_dto::{
    BulkCreateAssignmentsRequest, BulkCreateAssignmentsResponse, CreateAssignmentRequest,
    UpdateAssignmentRequest,
};
use crate::dto::common_dto::ApiResponse;
use crate::middleware::company::CompanyContext;
use crate::models::assignment::Assignment;
use crate::models::audit::AssignmentAudit;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_assignment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_assignment))
        .route("/", get(list_assignments))
        .route("/bulk", post(bulk_create_assignments))
        .route("/:id", get(get_assignment))
        .route("/:id", put(update_assignment))
        .route("/:id", delete(delete_assignment))
        .route("/:id/audit", get(get_audit_history))
}

async fn create_assignment(
    State(state): State<AppState>,
    company: CompanyContext,
    Json(request): Json<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Assignment>>), AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let assignment = controller.create(company.company_id, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            assignment,
            "Assignment creado exitosamente".to_string(),
        )),
    ))
}

// Éxito parcial: 207 cuando hubo conflictos, 200 cuando todo entró
async fn bulk_create_assignments(
    State(state): State<AppState>,
    company: CompanyContext,
    Json(request): Json<BulkCreateAssignmentsRequest>,
) -> Result<(StatusCode, Json<BulkCreateAssignmentsResponse>), AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let response = controller.bulk_create(company.company_id, request).await?;
    let status = if response.conflicts.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };
    Ok((status, Json(response)))
}

async fn get_assignment(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Assignment>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let assignment = controller.get_by_id(id, company.company_id).await?;
    Ok(Json(assignment))
}

async fn list_assignments(
    State(state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let assignments = controller.list_by_company(company.company_id).await?;
    Ok(Json(assignments))
}

async fn update_assignment(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAssignmentRequest>,
) -> Result<Json<ApiResponse<Assignment>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let assignment = controller.update(id, company.company_id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        assignment,
        "Assignment actualizado exitosamente".to_string(),
    )))
}

async fn delete_assignment(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    controller.delete(id, company.company_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Assignment eliminado exitosamente"
    })))
}

async fn get_audit_history(
    State(state): State<AppState>,
    company: CompanyContext,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<AssignmentAudit>>, AppError> {
    let controller = AssignmentController::new(state.pool.clone());
    let audits = controller.audit_history(id, company.company_id).await?;
    Ok(Json(audits))
}
